//! Arena-backed molecular data model.
//!
//! Atoms, residues, and chains live in slot maps owned by [`system::MolecularSystem`];
//! all cross-references between them are non-owning stable keys, so the
//! hierarchy can be traversed upward (atom -> residue -> chain) without
//! lifetime entanglement.

pub mod atom;
pub mod chain;
pub mod ids;
pub mod residue;
pub mod system;
