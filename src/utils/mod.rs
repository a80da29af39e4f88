pub mod validation;

pub use validation::{is_valid_port, validate_port};
