use crate::core::models::system::MolecularSystem;
use crate::detection::bridge::BridgeCandidate;
use crate::detection::candidates::sulfur_pairs;
use crate::detection::classifier::is_plausible_bridge;
use crate::detection::config::DetectionConfig;
use crate::detection::confidence::ConfidencePolicy;
use tracing::{debug, info, instrument};

/// Outcome of the end-to-end detection pipeline.
///
/// A report is produced only when strictly more than one candidate survives
/// filtering; a single isolated finding is suppressed.
#[derive(Debug, Clone, PartialEq)]
pub enum DetectionOutcome {
    /// Two or more bridges survived; their report rows, in enumeration order.
    Report(Vec<BridgeCandidate>),
    /// Zero or one candidate survived; nothing is reported.
    NothingToReport { survivors: usize },
}

impl DetectionOutcome {
    pub fn bridges(&self) -> Option<&[BridgeCandidate]> {
        match self {
            DetectionOutcome::Report(bridges) => Some(bridges),
            DetectionOutcome::NothingToReport { .. } => None,
        }
    }
}

/// Runs the detection pipeline: generate -> classify -> confidence-filter.
///
/// Pure in-memory computation over the immutable system; deterministic for
/// identical input coordinates. Per-pair anomalies (missing atoms, degenerate
/// geometry) silently exclude the pair rather than failing the run.
#[instrument(skip_all, name = "detection_workflow")]
pub fn run(system: &MolecularSystem, config: &DetectionConfig) -> DetectionOutcome {
    let pairs = sulfur_pairs(system);
    info!(
        provenance = ?system.provenance(),
        candidate_pairs = pairs.len(),
        "Enumerated cysteine sulfur pairs."
    );

    let classified: Vec<BridgeCandidate> = pairs
        .into_iter()
        .filter(|&(atom1, atom2)| is_plausible_bridge(system, atom1, atom2, config))
        .filter_map(|(atom1, atom2)| BridgeCandidate::from_pair(system, atom1, atom2))
        .collect();
    debug!(
        accepted = classified.len(),
        "Geometric classification complete."
    );

    let policy = ConfidencePolicy::for_provenance(system.provenance(), config);
    let survivors = policy.filter(system, classified);
    info!(survivors = survivors.len(), policy = ?policy, "Confidence filtering complete.");

    if survivors.len() > 1 {
        DetectionOutcome::Report(survivors)
    } else {
        DetectionOutcome::NothingToReport {
            survivors: survivors.len(),
        }
    }
}
