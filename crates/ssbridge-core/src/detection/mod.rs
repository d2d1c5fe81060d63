//! The detection core: candidate generation, geometric classification, and
//! confidence filtering.
//!
//! Data flows strictly left to right: candidate pairs come out of
//! [`candidates`], are accepted or rejected by [`classifier`], and survivors
//! are pruned by [`confidence`]. Every stage is a pure function of the
//! immutable [`crate::core::models::system::MolecularSystem`]; no stage
//! mutates shared state or caches derived values on the structure.

pub mod bridge;
pub mod candidates;
pub mod classifier;
pub mod config;
pub mod confidence;
