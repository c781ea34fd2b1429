use std::{fs, path::Path};

use csv::{ErrorKind, ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;

use crate::{Result, SchemaErr};

/// Loads `x,y` points from a CSV file.
///
/// # Errors
/// Returns `SchemaErr::Empty` if the file holds no points, otherwise see `parse_points`.
pub fn load_points<P: AsRef<Path>>(path: P) -> Result<(Vec<f64>, Vec<f64>)> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| SchemaErr::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let (xs, ys) = parse_points(&content)?;
    if xs.is_empty() {
        return Err(SchemaErr::Empty {
            path: path.to_path_buf(),
        });
    }

    Ok((xs, ys))
}

#[derive(Debug, Deserialize)]
struct Point {
    x: f64,
    y: f64,
}

/// Parses one `x,y` pair per record.
///
/// Blank lines and lines starting with `#` are skipped, as is an `x,y` header in the first record.
///
/// # Errors
/// `SchemaErr::Parse` with the 1-based line number when a record does not hold exactly two
/// numbers.
pub fn parse_points(content: &str) -> Result<(Vec<f64>, Vec<f64>)> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .comment(Some(b'#'))
        .trim(Trim::All)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut xs = Vec::new();
    let mut ys = Vec::new();

    for (i, record) in reader.records().enumerate() {
        let record = record.map_err(parse_err)?;
        let line = record.position().map_or(0, |p| p.line() as usize);

        if i == 0 && is_header(&record) {
            continue;
        }

        if record.len() != 2 {
            return Err(SchemaErr::Parse {
                line,
                msg: format!("expected 2 values (x,y), got {}", record.len()),
            });
        }

        let Point { x, y } = record.deserialize(None).map_err(|e| SchemaErr::Parse {
            line,
            msg: cause(&e),
        })?;

        xs.push(x);
        ys.push(y);
    }

    Ok((xs, ys))
}

fn is_header(record: &StringRecord) -> bool {
    record.len() == 2 && record[0].eq_ignore_ascii_case("x") && record[1].eq_ignore_ascii_case("y")
}

fn parse_err(e: csv::Error) -> SchemaErr {
    SchemaErr::Parse {
        line: e.position().map_or(0, |p| p.line() as usize),
        msg: cause(&e),
    }
}

/// The error message without the position prefix `csv` adds.
fn cause(e: &csv::Error) -> String {
    match e.kind() {
        ErrorKind::Deserialize { err, .. } => err.to_string(),
        _ => e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_header_comments_and_blank_lines() {
        let content = "x,y\n# measured\n0.0, 1.0\n\n1.5,2.5\n";
        let (xs, ys) = parse_points(content).unwrap();

        assert_eq!(xs, [0.0, 1.5]);
        assert_eq!(ys, [1.0, 2.5]);
    }

    #[test]
    fn header_after_a_comment_is_skipped() {
        let (xs, ys) = parse_points("# data\nx,y\n1,2\n").unwrap();

        assert_eq!(xs, [1.0]);
        assert_eq!(ys, [2.0]);
    }

    #[test]
    fn header_is_only_accepted_first() {
        let err = parse_points("1,2\nx,y\n").unwrap_err();
        assert!(matches!(err, SchemaErr::Parse { line: 2, .. }), "got {err}");
    }

    #[test]
    fn reports_the_offending_line() {
        let err = parse_points("1,2\n3,four\n").unwrap_err();
        assert!(matches!(err, SchemaErr::Parse { line: 2, .. }), "got {err}");
    }

    #[test]
    fn rejects_rows_with_wrong_arity() {
        let err = parse_points("1,2,3\n").unwrap_err();
        assert!(matches!(err, SchemaErr::Parse { line: 1, .. }), "got {err}");
    }
}
