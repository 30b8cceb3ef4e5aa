pub mod manifest;
pub mod writer;
