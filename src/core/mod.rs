pub mod alignment;
pub mod indicators;
