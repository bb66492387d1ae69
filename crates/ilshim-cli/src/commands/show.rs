use crate::error::CliError;
use ilshim_bindings::{BindingTable, Lowering, Receiver};
use std::io::Write;

pub fn handle_show(table: &BindingTable, symbol: &str, out: &mut impl Write) -> Result<(), CliError> {
    let binding = table.resolve(symbol)?;

    writeln!(out, "symbol:   {}", binding.symbol())?;
    writeln!(out, "managed:  {}", binding.managed_name())?;
    writeln!(out, "group:    {}", binding.group)?;
    if let Receiver::Constructed(ty) = binding.receiver {
        writeln!(out, "receiver: {} (constructed)", ty)?;
    }
    writeln!(out, "params:   {}", binding.c_params())?;
    writeln!(out, "returns:  {}", binding.ret)?;
    match binding.lowering(true) {
        Lowering::Inline(template) => writeln!(out, "lowering: inline {}", template)?,
        Lowering::Call => writeln!(out, "lowering: call")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ilshim_bindings::BindingError;

    #[test]
    fn shows_constructor_details() {
        let table = BindingTable::standard().unwrap();
        let mut out = Vec::new();
        handle_show(&table, "System_UInt128__ctor_mu128u64u64", &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("managed:  System.UInt128::.ctor"));
        assert!(text.contains("receiver: unsigned __int128 (constructed)"));
        assert!(text.contains("params:   uint64_t a, uint64_t b"));
    }

    #[test]
    fn unknown_symbol_is_a_binding_error() {
        let table = BindingTable::standard().unwrap();
        let err = handle_show(&table, "System_Console_Write_s", &mut Vec::new()).unwrap_err();
        assert!(matches!(err, CliError::Binding(BindingError::UnknownSymbol { .. })));
    }
}
