pub mod parser;

pub use parser::{StateGroups, parse_rows, read_csv};
