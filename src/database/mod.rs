pub mod manager;
pub mod models;
pub mod students;

pub use manager::StorageError;
pub use models::{StudentListRow, StudentRecord};
