//! Validated in-memory tabular container for the stratus pipeline.
//!
//! Provides a small column-oriented [`Frame`] with stable, opaque row
//! identifiers, deterministic group-by, and numeric matrix selection — the
//! three operations the splitter needs from its data source.

mod error;
mod frame;
mod key;

pub use error::FrameError;
pub use frame::{Column, Frame, RowId};
pub use key::GroupKey;
