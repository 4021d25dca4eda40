//! File I/O, validation, and serialization for the stratus pipeline.

mod domain;
mod error;
mod reader;
mod writer;

pub use domain::ExperimentName;
pub use error::IoError;
pub use reader::FrameReader;
pub use writer::SplitWriter;
