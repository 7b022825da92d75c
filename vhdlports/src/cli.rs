//! Per-file driver shared by the `vhdl-portdiag` binary and tests.

use std::io::Write;
use std::path::PathBuf;

use crate::{BlockDiagram, EntityPorts, Error};

/// Parses every file in order and writes its diagram to `out`.
///
/// With more than one file, each diagram is preceded by the file
/// name and diagrams are separated by a blank line. Stops at the
/// first file that cannot be read or parsed; nothing is written
/// for that file.
pub fn process_files(files: &[PathBuf], out: &mut impl Write) -> Result<(), Error> {
    if files.is_empty() {
        return Err(Error::MissingArguments);
    }
    let with_headers = files.len() > 1;
    for (i, path) in files.iter().enumerate() {
        clilog::info!(VP_FILE, "processing {}", path.display());
        let ports = EntityPorts::parse_file(path)
            .map_err(|e| {
                clilog::debug!(VP_FILE, "{}: {}", path.display(), e);
                Error::from_parse(path.clone(), e)
            })?;
        let diagram = BlockDiagram::from_ports(&ports);
        if i > 0 {
            writeln!(out).map_err(Error::Output)?;
        }
        if with_headers {
            writeln!(out, "{}", path.display()).map_err(Error::Output)?;
        }
        write!(out, "{}", diagram).map_err(Error::Output)?;
    }
    out.flush().map_err(Error::Output)
}
