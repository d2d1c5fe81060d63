//! High-level workflows tying the detection stages together.

pub mod detect;
