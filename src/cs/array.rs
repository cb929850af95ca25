pub mod matching;
pub mod matrix;
pub mod merge;
pub mod slicing;
pub mod transform;

// Re-export the array routines under their operation names
pub use matching::{all_match, none_match, some_match};
pub use matrix::{matrix_multiplication, validate_for_matrix_multiplication};
pub use merge::merge_sorted_arrays;
pub use slicing::{copy_values, insert_values};
pub use transform::{distinct, filter, find_second_max, rearrange, replace};
