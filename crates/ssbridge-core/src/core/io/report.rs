use crate::detection::bridge::BridgeCandidate;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use thiserror::Error;

/// One row of the bridge report.
///
/// The four-column shape and the header names are kept byte-compatible with
/// the historical output of this tool so existing consumers keep working.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeRecord {
    pub cadena1: String,
    pub res1: isize,
    pub cadena2: String,
    pub res2: isize,
}

impl From<&BridgeCandidate> for BridgeRecord {
    fn from(bridge: &BridgeCandidate) -> Self {
        Self {
            cadena1: bridge.first.chain.to_string(),
            res1: bridge.first.residue_number,
            cadena2: bridge.second.chain.to_string(),
            res2: bridge.second.residue_number,
        }
    }
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Writes the bridge report: a header row followed by one row per bridge.
pub fn write_report(
    bridges: &[BridgeCandidate],
    writer: &mut impl Write,
) -> Result<(), ReportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(["cadena1", "res1", "cadena2", "res2"])?;
    for bridge in bridges {
        csv_writer.serialize(BridgeRecord::from(bridge))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Reads a previously written bridge report back into records.
pub fn read_report(reader: impl Read) -> Result<Vec<BridgeRecord>, ReportError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for record in csv_reader.deserialize() {
        records.push(record?);
    }
    Ok(records)
}
