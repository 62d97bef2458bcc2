pub mod error;
pub mod utils;

pub use error::{
    ArchError, ErrorCategory, ErrorClass, ErrorClassifier, LlmError, Result, ValidationError,
    ValidationErrorKind,
};
pub use utils::{capitalize_first, truncate_chars};
