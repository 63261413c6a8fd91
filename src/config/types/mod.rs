//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `choice` | String-backed enum parsing                   |
//! | `error`  | Configuration error types                    |
//! | `field`  | Dotted field paths for diagnostics           |

mod choice;
mod error;
mod field;

pub use choice::Choice;
pub use error::{ConfigDiagnostics, ConfigError};
pub use field::FieldPath;
