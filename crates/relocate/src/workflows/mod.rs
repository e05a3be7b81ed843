pub mod records;
pub mod tracking;
