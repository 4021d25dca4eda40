//! Density-based (DBSCAN) clustering over dense feature matrices.
//!
//! Provides deterministic DBSCAN clustering with a distinguished noise label,
//! rayon-parallel neighborhood computation, and a config-builder API.

mod config;
mod dbscan;
mod error;
mod label;
mod result;

pub use config::{DEFAULT_EPS, DEFAULT_MIN_SAMPLES, DbscanConfig};
pub use error::DbscanError;
pub use label::ClusterLabel;
pub use result::DbscanResult;
