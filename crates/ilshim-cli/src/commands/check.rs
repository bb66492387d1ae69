use crate::error::CliError;
use ilshim_bindings::BindingTable;
use ilshim_rt::ffi::exported_symbols;
use std::io::Write;

/// Verifies that every binding links against a runtime export.
pub fn handle_check(table: &BindingTable, out: &mut impl Write) -> Result<(), CliError> {
    let exports = exported_symbols();
    table.verify_exports(exports.iter().map(|symbol| symbol.name))?;

    let unbound = exports
        .iter()
        .filter(|symbol| !symbol.name.starts_with("ilshim_") && table.get(symbol.name).is_none())
        .inspect(|symbol| log::warn!("export {} has no binding", symbol.name))
        .count();

    writeln!(
        out,
        "{} bindings resolved against {} runtime exports ({} unbound)",
        table.len(),
        exports.len(),
        unbound
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ilshim_bindings::{Abi, BindingError, Group, IntrinsicBinding};

    #[test]
    fn standard_table_checks_clean() {
        let table = BindingTable::standard().unwrap();
        let mut out = Vec::new();
        handle_check(&table, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().ends_with("(0 unbound)\n"));
    }

    #[test]
    fn missing_export_fails() {
        let bogus = IntrinsicBinding::new(Group::Math, "System", "Math", "Cbrt")
            .params([Abi::F64])
            .returns(Abi::F64);
        let table = BindingTable::from_bindings(vec![bogus]).unwrap();
        let err = handle_check(&table, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, CliError::Binding(BindingError::MissingExport(ref missing)) if missing == &["System_Math_Cbrt_f64"]));
    }
}
