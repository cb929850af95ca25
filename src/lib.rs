pub mod cs;
pub mod error;

pub use cs::{array, sort};
pub use error::{Error, MergeInput, Result};
