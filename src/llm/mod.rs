pub mod client;
pub mod parse;
pub mod types;

pub use client::*;
pub use parse::extract_excuse;
pub use types::*;
