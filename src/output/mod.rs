pub mod json;

pub use json::{StateDocument, is_valid_state_name, state_file_path, write_state};
