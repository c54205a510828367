pub mod configs;
pub mod records;
