mod processing_runner;

pub use processing_runner::{ProcessingRunner, RunReport};
