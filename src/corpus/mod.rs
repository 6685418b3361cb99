pub mod types;
mod builtin;

pub use types::*;
