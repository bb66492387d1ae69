use crate::error::CliError;
use ilshim_bindings::{BindingTable, HeaderOptions, HeaderWriter};
use std::fs;
use std::io::Write;
use std::path::Path;

pub fn handle_header(
    table: &BindingTable,
    options: &HeaderOptions,
    output: Option<&Path>,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let header = HeaderWriter::new(table, options).to_string();
    match output {
        Some(path) => {
            fs::write(path, header).map_err(|source| CliError::IoError {
                path: path.to_path_buf(),
                operation: "writing header".to_string(),
                source,
            })?;
            log::info!("wrote header to {}", path.display());
        }
        None => out.write_all(header.as_bytes())?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_header_to_file() {
        let table = BindingTable::standard().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ilshim.h");
        let mut stdout = Vec::new();

        handle_header(&table, &HeaderOptions::default(), Some(&path), &mut stdout).unwrap();

        assert!(stdout.is_empty());
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("#define System_Int128_op_ExclusiveOr_i128i128(a, b) ((a) ^ (b))"));
    }

    #[test]
    fn unwritable_path_reports_io_error() {
        let table = BindingTable::standard().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("ilshim.h");
        let err = handle_header(&table, &HeaderOptions::default(), Some(&path), &mut Vec::new()).unwrap_err();
        assert!(matches!(err, CliError::IoError { .. }));
    }
}
