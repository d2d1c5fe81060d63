use crate::core::io::traits::StructureFile;
use crate::core::models::atom::Atom;
use crate::core::models::chain::ChainType;
use crate::core::models::ids::{ChainId, ResidueId};
use crate::core::models::system::{MolecularSystem, Provenance};
use nalgebra::Point3;
use std::io::{self, BufRead};
use thiserror::Error;

/// Marker token that identifies computationally predicted models. Scanned
/// case-insensitively across the whole file content.
const PREDICTION_MARKER: &str = "ALPHAFOLD";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdbMetadata {
    /// Non-coordinate record lines retained verbatim (HEADER, TITLE, REMARK, ...).
    pub header_lines: Vec<String>,
    /// Number of atom records skipped because of a non-primary altloc.
    pub skipped_altloc_atoms: usize,
}

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: PdbParseErrorKind,
    },
    #[error("Missing required record: {0}")]
    MissingRecord(String),
}

#[derive(Debug, Error)]
pub enum PdbParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: String, value: String },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: String, value: String },
    #[error("Required field in columns {columns} is empty")]
    MissingRequiredField { columns: String },
    #[error("Line is too short for an ATOM/HETATM record (needs coordinate columns up to 54)")]
    LineTooShort,
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

fn parse_float(line: &str, line_num: usize, start: usize, end: usize) -> Result<f64, PdbError> {
    let raw = slice_and_trim(line, start, end);
    raw.parse().map_err(|_| PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::InvalidFloat {
            columns: format!("{}-{}", start + 1, end),
            value: raw.into(),
        },
    })
}

/// Reader for Protein Data Bank (PDB) format files.
///
/// Parses fixed-column ATOM/HETATM records into a [`MolecularSystem`]. Only the
/// first MODEL of a multi-model file is read; alternate locations other than
/// blank or 'A' are skipped. Provenance is decided by a case-insensitive scan
/// of the entire file content for the "ALPHAFOLD" token, performed in the same
/// pass as record parsing.
pub struct PdbFile;

impl StructureFile for PdbFile {
    type Metadata = PdbMetadata;
    type Error = PdbError;

    fn read_from(
        reader: &mut impl BufRead,
    ) -> Result<(MolecularSystem, Self::Metadata), Self::Error> {
        let mut system = MolecularSystem::new();
        let mut metadata = PdbMetadata::default();
        let mut predicted = false;
        let mut atom_count: usize = 0;

        let mut current_chain: Option<(char, ChainId)> = None;
        let mut current_residue: Option<((isize, Option<char>), ResidueId)> = None;
        // Set by END/ENDMDL. The marker scan still covers the rest of the
        // file; only record parsing stops.
        let mut coordinates_done = false;

        for (line_idx, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_idx + 1;

            if !predicted && line.to_ascii_uppercase().contains(PREDICTION_MARKER) {
                predicted = true;
            }
            if coordinates_done {
                continue;
            }

            // Records like END or TER may be shorter than the full six-column
            // record name field.
            let record_type = line.get(0..6).unwrap_or(line.as_str()).trim();
            match record_type {
                "ATOM" | "HETATM" => {
                    if line.len() < 54 {
                        return Err(PdbError::Parse {
                            line: line_num,
                            kind: PdbParseErrorKind::LineTooShort,
                        });
                    }

                    let altloc = line.chars().nth(16).unwrap_or(' ');
                    if altloc != ' ' && altloc != 'A' {
                        metadata.skipped_altloc_atoms += 1;
                        continue;
                    }

                    let serial_str = slice_and_trim(&line, 6, 11);
                    let name_str = slice_and_trim(&line, 12, 16);
                    let res_name_str = slice_and_trim(&line, 17, 20);
                    let chain_char = line.chars().nth(21).unwrap_or(' ');
                    let res_seq_str = slice_and_trim(&line, 22, 26);
                    let icode_char = line.chars().nth(26).unwrap_or(' ');

                    if name_str.is_empty() {
                        return Err(PdbError::Parse {
                            line: line_num,
                            kind: PdbParseErrorKind::MissingRequiredField {
                                columns: "13-16".into(),
                            },
                        });
                    }
                    let serial: usize = serial_str.parse().map_err(|_| PdbError::Parse {
                        line: line_num,
                        kind: PdbParseErrorKind::InvalidInt {
                            columns: "7-11".into(),
                            value: serial_str.into(),
                        },
                    })?;
                    let res_seq: isize = res_seq_str.parse().map_err(|_| PdbError::Parse {
                        line: line_num,
                        kind: PdbParseErrorKind::InvalidInt {
                            columns: "23-26".into(),
                            value: res_seq_str.into(),
                        },
                    })?;
                    let icode = if icode_char == ' ' {
                        None
                    } else {
                        Some(icode_char)
                    };

                    let x = parse_float(&line, line_num, 30, 38)?;
                    let y = parse_float(&line, line_num, 38, 46)?;
                    let z = parse_float(&line, line_num, 46, 54)?;

                    // Optional columns past 54; absent in minimal files.
                    let temp_factor = {
                        let raw = slice_and_trim(&line, 60, 66);
                        if raw.is_empty() {
                            0.0
                        } else {
                            parse_float(&line, line_num, 60, 66)?
                        }
                    };

                    let chain_char = if chain_char == ' ' { 'A' } else { chain_char };
                    let chain_id = match current_chain {
                        Some((id, chain_id)) if id == chain_char => chain_id,
                        _ => {
                            let chain_type = if record_type == "HETATM" {
                                if res_name_str == "HOH" {
                                    ChainType::Water
                                } else {
                                    ChainType::Other
                                }
                            } else {
                                ChainType::Protein
                            };
                            let chain_id = system.add_chain(chain_char, chain_type);
                            current_chain = Some((chain_char, chain_id));
                            current_residue = None;
                            chain_id
                        }
                    };

                    let residue_id = match current_residue {
                        Some((key, residue_id)) if key == (res_seq, icode) => residue_id,
                        _ => {
                            let residue_id = system
                                .add_residue(chain_id, res_seq, icode, res_name_str)
                                .ok_or_else(|| {
                                    PdbError::MissingRecord(format!(
                                        "chain '{}' for residue {}",
                                        chain_char, res_seq
                                    ))
                                })?;
                            current_residue = Some(((res_seq, icode), residue_id));
                            residue_id
                        }
                    };

                    let mut atom = Atom::new(name_str, residue_id, Point3::new(x, y, z));
                    atom.serial = serial;
                    atom.temp_factor = temp_factor;
                    system.add_atom_to_residue(residue_id, atom);
                    atom_count += 1;
                }
                "TER" => {
                    current_residue = None;
                }
                // Single-model scope: the first model ends the coordinate
                // section.
                "ENDMDL" | "END" => coordinates_done = true,
                "MODEL" | "" => {}
                _ => metadata.header_lines.push(line.clone()),
            }
        }

        if atom_count == 0 {
            return Err(PdbError::MissingRecord("ATOM/HETATM records".into()));
        }

        system.set_provenance(if predicted {
            Provenance::Predicted
        } else {
            Provenance::Experimental
        });
        Ok((system, metadata))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::BufReader;

    fn atom_line(
        serial: usize,
        name: &str,
        res_name: &str,
        chain: char,
        res_seq: isize,
        x: f64,
        y: f64,
        z: f64,
        temp: f64,
    ) -> String {
        format!(
            "ATOM  {:>5} {:<4} {:<3} {}{:>4}    {:>8.3}{:>8.3}{:>8.3}{:>6.2}{:>6.2}           S",
            serial, name, res_name, chain, res_seq, x, y, z, 1.00, temp
        )
    }

    fn read(content: &str) -> Result<(MolecularSystem, PdbMetadata), PdbError> {
        PdbFile::read_from(&mut BufReader::new(content.as_bytes()))
    }

    #[test]
    fn parses_atoms_into_hierarchy() {
        let content = [
            "HEADER    OXIDOREDUCTASE                          01-JAN-00   1ABC",
            &atom_line(1, "CB", "CYS", 'A', 6, 10.0, 11.0, 12.0, 15.5),
            &atom_line(2, "SG", "CYS", 'A', 6, 10.5, 12.2, 12.9, 18.0),
            &atom_line(3, "SG", "CYS", 'B', 11, 1.0, 2.0, 3.0, 20.0),
            "END",
        ]
        .join("\n");

        let (system, metadata) = read(&content).unwrap();

        assert_eq!(system.atoms_iter().count(), 3);
        assert_eq!(system.chains_iter().count(), 2);
        assert_eq!(system.provenance(), Provenance::Experimental);
        assert_eq!(metadata.header_lines.len(), 1);

        let chain_a = system.find_chain_by_id('A').unwrap();
        let cys6 = system.find_residue_by_id(chain_a, 6, None).unwrap();
        let residue = system.residue(cys6).unwrap();
        assert!(residue.is_cysteine());

        let sg = system
            .atom(residue.get_atom_id_by_name("SG").unwrap())
            .unwrap();
        assert_eq!(sg.serial, 2);
        assert!((sg.position.x - 10.5).abs() < 1e-9);
        assert!((sg.temp_factor - 18.0).abs() < 1e-9);
    }

    #[test]
    fn alphafold_marker_sets_predicted_provenance() {
        let content = [
            "TITLE     ALPHAFOLD MONOMER V2.0 PREDICTION FOR TEST PROTEIN",
            &atom_line(1, "SG", "CYS", 'A', 1, 0.0, 0.0, 0.0, 92.1),
            "END",
        ]
        .join("\n");

        let (system, _) = read(&content).unwrap();
        assert_eq!(system.provenance(), Provenance::Predicted);
    }

    #[test]
    fn prediction_marker_scan_is_case_insensitive() {
        let content = [
            "REMARK   1 generated by AlphaFold",
            &atom_line(1, "SG", "CYS", 'A', 1, 0.0, 0.0, 0.0, 92.1),
        ]
        .join("\n");

        let (system, _) = read(&content).unwrap();
        assert_eq!(system.provenance(), Provenance::Predicted);
    }

    #[test]
    fn non_primary_altloc_atoms_are_skipped() {
        let mut with_altloc = atom_line(2, "SG", "CYS", 'A', 6, 1.0, 1.0, 1.0, 10.0);
        with_altloc.replace_range(16..17, "B");

        let content = [
            atom_line(1, "SG", "CYS", 'A', 6, 0.0, 0.0, 0.0, 10.0),
            with_altloc,
        ]
        .join("\n");

        let (system, metadata) = read(&content).unwrap();
        assert_eq!(system.atoms_iter().count(), 1);
        assert_eq!(metadata.skipped_altloc_atoms, 1);
    }

    #[test]
    fn only_first_model_is_read() {
        let content = [
            "MODEL        1".to_string(),
            atom_line(1, "SG", "CYS", 'A', 1, 0.0, 0.0, 0.0, 10.0),
            "ENDMDL".to_string(),
            "MODEL        2".to_string(),
            atom_line(2, "SG", "CYS", 'A', 1, 5.0, 5.0, 5.0, 10.0),
            "ENDMDL".to_string(),
        ]
        .join("\n");

        let (system, _) = read(&content).unwrap();
        assert_eq!(system.atoms_iter().count(), 1);
    }

    #[test]
    fn atoms_after_unpadded_end_are_ignored() {
        let content = [
            atom_line(1, "SG", "CYS", 'A', 1, 0.0, 0.0, 0.0, 10.0),
            "END".to_string(),
            atom_line(2, "SG", "CYS", 'A', 2, 5.0, 0.0, 0.0, 10.0),
        ]
        .join("\n");

        let (system, _) = read(&content).unwrap();
        assert_eq!(system.atoms_iter().count(), 1);
    }

    #[test]
    fn prediction_marker_after_end_still_sets_provenance() {
        let content = [
            atom_line(1, "SG", "CYS", 'A', 1, 0.0, 0.0, 0.0, 92.1),
            "END".to_string(),
            "REMARK   1 ALPHAFOLD DB METADATA".to_string(),
        ]
        .join("\n");

        let (system, _) = read(&content).unwrap();
        assert_eq!(system.provenance(), Provenance::Predicted);
    }

    #[test]
    fn missing_temp_factor_defaults_to_zero() {
        // Coordinates only, line ends at column 54.
        let line = format!(
            "ATOM      1 SG   CYS A   1    {:>8.3}{:>8.3}{:>8.3}",
            1.0, 2.0, 3.0
        );
        let (system, _) = read(&line).unwrap();
        let (_, atom) = system.atoms_iter().next().unwrap();
        assert_eq!(atom.temp_factor, 0.0);
    }

    #[test]
    fn short_atom_line_is_a_parse_error() {
        let result = read("ATOM      1 SG   CYS A   1    1.0");
        assert!(matches!(
            result,
            Err(PdbError::Parse {
                kind: PdbParseErrorKind::LineTooShort,
                ..
            })
        ));
    }

    #[test]
    fn invalid_coordinate_reports_line_number() {
        let mut line = atom_line(1, "SG", "CYS", 'A', 1, 0.0, 0.0, 0.0, 10.0);
        line.replace_range(30..38, "   xxx  ");
        let result = read(&line);
        match result {
            Err(PdbError::Parse { line: 1, kind }) => {
                assert!(matches!(kind, PdbParseErrorKind::InvalidFloat { .. }));
            }
            other => panic!("expected parse error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn file_without_atoms_is_rejected() {
        let result = read("HEADER    EMPTY\nEND");
        assert!(matches!(result, Err(PdbError::MissingRecord(_))));
    }

    #[test]
    fn read_from_path_loads_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{}", atom_line(1, "SG", "CYS", 'A', 1, 0.0, 0.0, 0.0, 10.0)).unwrap();

        let (system, _) = PdbFile::read_from_path(file.path()).unwrap();
        assert_eq!(system.atoms_iter().count(), 1);

        assert!(matches!(
            PdbFile::read_from_path("/nonexistent/structure.pdb"),
            Err(PdbError::Io(_))
        ));
    }

    #[test]
    fn insertion_codes_split_residues() {
        let mut a = atom_line(1, "SG", "CYS", 'A', 52, 0.0, 0.0, 0.0, 10.0);
        let mut b = atom_line(2, "SG", "CYS", 'A', 52, 3.0, 0.0, 0.0, 10.0);
        a.replace_range(26..27, " ");
        b.replace_range(26..27, "A");

        let content = [a, b].join("\n");
        let (system, _) = read(&content).unwrap();
        assert_eq!(system.residues_iter().count(), 2);
    }
}
