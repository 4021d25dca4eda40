//! Stratified dataset splitting with density-based sub-grouping.
//!
//! Divides a dataset into N disjoint subsets whose sizes track a list of
//! target percentages while preserving the relative proportion of each class
//! — and of each density sub-cluster within a class — across the subsets.
//! Records are grouped into strata (class x sub-cluster), and each stratum is
//! allocated with a running-share rounding correction that keeps every
//! split's cumulative share converging toward its target as strata are
//! processed.

mod allocate;
mod config;
mod error;
mod normalize;
mod result;
mod split;
mod strata;

pub use config::SplitConfig;
pub use error::SplitError;
pub use normalize::zscore_columns;
pub use result::SplitResult;
