pub mod config;
pub mod report;
pub mod sample;
pub mod scoring;
