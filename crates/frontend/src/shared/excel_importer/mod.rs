pub mod parser;
pub mod types;

pub use parser::{parse_csv_rows, parse_json_rows, read_excel_from_bytes};
pub use types::{ParseError, TabularRow};
