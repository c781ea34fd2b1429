mod csv;
mod error;
mod json;
pub mod report;
pub mod specs;

pub use csv::{load_points, parse_points};
pub use error::{Result, SchemaErr};
pub use json::{parse_spec, read_spec, to_json, write_report};
