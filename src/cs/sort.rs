pub mod config;
pub mod ordered_sort;

pub use config::SortConfig;
pub use ordered_sort::{OrderedSort, SortDirection};
