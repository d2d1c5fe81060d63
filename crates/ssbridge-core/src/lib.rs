//! # ssbridge Core Library
//!
//! A library for detecting candidate disulfide bridges in protein structures.
//! Given a parsed atomic structure, it enumerates cysteine sulfur pairs, applies
//! a distance and a dihedral-angle criterion to decide bond plausibility, and
//! discards candidates whose atoms fail a provenance-specific confidence
//! threshold (crystallographic B-factor for experimental structures, pLDDT for
//! predicted models).
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Stateless data models (`MolecularSystem` and
//!   its arena-backed chain/residue/atom hierarchy), file I/O (PDB reading, CSV
//!   report and PyMOL script writing), and geometry utilities.
//!
//! - **[`detection`]: The Logic Core.** The candidate generator, the geometric
//!   classifier, and the confidence filter, together with their shared
//!   configuration and the `BridgeCandidate` result type.
//!
//! - **[`workflows`]: The Public API.** Ties `detection` together into the
//!   end-to-end pipeline and applies the reporting policy. This is the entry
//!   point for end-users of the library.

pub mod core;
pub mod detection;
pub mod workflows;
