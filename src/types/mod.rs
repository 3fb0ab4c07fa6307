pub mod row;
pub mod summary;
