pub mod student;

pub use student::{StudentListRow, StudentRecord};
