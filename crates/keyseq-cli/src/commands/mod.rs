//! CLI command implementations

pub mod generate;
pub mod json_output;
pub mod play;
pub mod replay;
pub mod validate;
