pub mod decoder;
pub mod payload;
