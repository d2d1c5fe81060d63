//! Input/output for structure files and pipeline artifacts.
//!
//! Contains the PDB structure reader, the CSV bridge-report writer/reader, and
//! the PyMOL visualization-script emitter. Structure reading is exposed through
//! the trait in [`traits`] so further formats can slot in beside PDB.

pub mod pdb;
pub mod pymol;
pub mod report;
pub mod traits;
