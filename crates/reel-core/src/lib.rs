pub mod brief;
pub mod config;
pub mod error;
pub mod prompt;

pub use brief::{FieldId, ScriptBrief};
pub use config::ReelConfig;
pub use error::{ReelError, Result};
pub use prompt::build_prompt;
