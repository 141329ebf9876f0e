mod prompt;
mod types;

pub use prompt::{build_prompt, seriousness_descriptor};
pub use types::*;
