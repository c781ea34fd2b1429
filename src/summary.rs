use std::fmt::{self, Display};

use schema::report::AnalysisReport;

const RULE_WIDTH: usize = 50;

/// The human readable console summary of a report.
pub struct Summary<'a>(pub &'a AnalysisReport);

impl Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(f, "\n{rule}\nANALYSIS RESULTS\n{rule}")?;

        writeln!(f, "\nData Summary:")?;
        writeln!(f, "  Sample Size: {}", group_thousands(report.sample_size))?;
        writeln!(f, "  Mean X: {:.6}", report.mean_x)?;
        writeln!(f, "  Mean Y: {:.6}", report.mean_y)?;

        writeln!(f, "\nRegression Equation:")?;
        writeln!(f, "  {}", report.equation_string)?;
        writeln!(f, "  Slope (β₁): {:.6}", report.slope)?;
        writeln!(f, "  Intercept (β₀): {:.6}", report.intercept)?;

        writeln!(f, "\nModel Performance:")?;
        writeln!(f, "  R-squared: {:.6}", report.r_squared)?;
        writeln!(f, "  R-squared (%): {:.2}%", report.r_squared_percentage)?;
        writeln!(f, "  Interpretation: {}", report.interpretation_detail)?;

        writeln!(f, "\nKey Insights:")?;
        for insight in &report.insights {
            writeln!(f, "  • {insight}")?;
        }

        Ok(())
    }
}

/// `1234567` -> `"1,234,567"`.
fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}
