pub mod array;
pub mod sort;

// Re-export all modules
pub use array::*;
pub use sort::*;
