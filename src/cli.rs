use std::{path::PathBuf, str::FromStr};

use anyhow::{Context, Result, bail};
use schema::specs::AnalysisSpec;

pub const DEFAULT_OUTPUT: &str = "linear_regression_results.json";

pub const USAGE: &str = "\
Usage: linear-regression-analysis [options]

Fits y = slope * x + intercept by ordinary least squares and reports the quality of the fit.

Options:
  --config <file>     JSON analysis spec, missing fields take their defaults
  --input <file>      CSV file of x,y pairs to analyze instead of generating data
  --output <file>     where to write the JSON report [default: linear_regression_results.json]
  --samples <n>       amount of generated points
  --slope <f>         slope of the generating line
  --intercept <f>     intercept of the generating line
  --noise <f>         half-width of the uniform noise band
  --seed <n>          seed for reproducible generation
  -h, --help          print this message";

/// Parsed command line.
#[derive(Debug, Default, PartialEq)]
pub struct Args {
    pub config: Option<PathBuf>,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub samples: Option<usize>,
    pub slope: Option<f64>,
    pub intercept: Option<f64>,
    pub noise: Option<f64>,
    pub seed: Option<u64>,
    pub help: bool,
}

impl Args {
    /// Parses the arguments that follow the program name.
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Self::default();
        let mut args = args.into_iter();

        while let Some(flag) = args.next() {
            if flag == "-h" || flag == "--help" {
                parsed.help = true;
                continue;
            }

            let Some(value) = args.next() else {
                bail!("missing value for `{flag}`\n\n{USAGE}");
            };

            match flag.as_str() {
                "--config" => parsed.config = Some(value.into()),
                "--input" => parsed.input = Some(value.into()),
                "--output" => parsed.output = Some(value.into()),
                "--samples" => parsed.samples = Some(parse_value(&flag, &value)?),
                "--slope" => parsed.slope = Some(parse_value(&flag, &value)?),
                "--intercept" => parsed.intercept = Some(parse_value(&flag, &value)?),
                "--noise" => parsed.noise = Some(parse_value(&flag, &value)?),
                "--seed" => parsed.seed = Some(parse_value(&flag, &value)?),
                _ => bail!("unknown option `{flag}`\n\n{USAGE}"),
            }
        }

        Ok(parsed)
    }

    /// Builds the analysis spec: the config file if any, then the flags on top of it.
    pub fn spec(&self) -> Result<AnalysisSpec> {
        let mut spec = match &self.config {
            Some(path) => schema::read_spec(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => AnalysisSpec::default(),
        };

        let generator = &mut spec.generator;
        if let Some(samples) = self.samples {
            generator.sample_size = samples;
        }
        if let Some(slope) = self.slope {
            generator.true_slope = slope;
        }
        if let Some(intercept) = self.intercept {
            generator.true_intercept = intercept;
        }
        if let Some(noise) = self.noise {
            generator.noise_range = noise;
        }
        if self.seed.is_some() {
            generator.seed = self.seed;
        }

        Ok(spec)
    }

    pub fn output(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }
}

fn parse_value<T>(flag: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .parse()
        .with_context(|| format!("invalid value `{value}` for `{flag}`"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args> {
        Args::parse(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn no_flags_means_defaults() {
        let parsed = args(&[]).unwrap();

        assert_eq!(parsed, Args::default());
        assert_eq!(parsed.spec().unwrap(), AnalysisSpec::default());
        assert_eq!(parsed.output(), PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn flags_override_generator_fields() {
        let parsed = args(&[
            "--samples", "1000", "--slope", "-2.5", "--intercept", "4", "--noise", "0",
            "--seed", "42", "--output", "out.json",
        ])
        .unwrap();
        let spec = parsed.spec().unwrap();

        assert_eq!(spec.generator.sample_size, 1000);
        assert_eq!(spec.generator.true_slope, -2.5);
        assert_eq!(spec.generator.true_intercept, 4.0);
        assert_eq!(spec.generator.noise_range, 0.0);
        assert_eq!(spec.generator.seed, Some(42));
        assert_eq!(parsed.output(), PathBuf::from("out.json"));
    }

    #[test]
    fn help_needs_no_value() {
        assert!(args(&["--help"]).unwrap().help);
        assert!(args(&["-h"]).unwrap().help);
    }

    #[test]
    fn bad_input_is_reported() {
        let err = args(&["--samples", "many"]).unwrap_err();
        assert!(format!("{err:#}").contains("--samples"));

        assert!(args(&["--slope"]).is_err());
        assert!(args(&["--verbose", "yes"]).is_err());
    }

    #[test]
    fn missing_config_file_fails() {
        let parsed = args(&["--config", "/definitely/not/here.json"]).unwrap();
        assert!(parsed.spec().is_err());
    }
}
