pub mod artist;
pub mod relation;
pub mod value;
