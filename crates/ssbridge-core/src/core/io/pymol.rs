use crate::core::io::report::BridgeRecord;
use std::io::{self, Write};
use std::path::Path;

/// Writes a PyMOL script that highlights the reported bridges.
///
/// The script loads the structure in cartoon representation with a pale base
/// color, then for each bridge defines two named SG selections and renders
/// them as yellow spheres. Pure templating over an already-computed bridge
/// list; no geometry is recomputed here.
pub fn write_script(
    structure_path: &Path,
    bridges: &[BridgeRecord],
    writer: &mut impl Write,
) -> io::Result<()> {
    writeln!(writer, "load {}", structure_path.display())?;
    writeln!(writer, "hide everything")?;
    writeln!(writer, "show cartoon")?;
    writeln!(writer, "color palecyan, all")?;

    for (index, record) in bridges.iter().enumerate() {
        let index = index + 1;
        writeln!(
            writer,
            "select bridge{}_1, resi {} and chain {} and name SG",
            index, record.res1, record.cadena1
        )?;
        writeln!(
            writer,
            "select bridge{}_2, resi {} and chain {} and name SG",
            index, record.res2, record.cadena2
        )?;
        writeln!(
            writer,
            "show spheres, bridge{index}_1 or bridge{index}_2"
        )?;
        writeln!(
            writer,
            "color yellow, bridge{index}_1 or bridge{index}_2"
        )?;
    }

    writeln!(writer, "zoom")?;
    Ok(())
}
