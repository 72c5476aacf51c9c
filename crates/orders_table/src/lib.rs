//! Sort, select and paginate view over a list of customer orders.

pub mod columns;
pub mod controller;
pub mod error;
pub mod format;
pub mod row;
pub mod sorting;

pub use controller::{PageSize, SelectAllState, TableRegion, TableView};
pub use error::ParseError;
pub use row::{Row, RowField};
pub use sorting::{comparator, stable_sort, FieldValue, SortDirection, SortKey};
