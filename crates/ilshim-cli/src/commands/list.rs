use crate::error::CliError;
use ilshim_bindings::{BindingTable, Group, Lowering};
use std::io::Write;

/// Prints one line per binding: symbol, group and how it is lowered.
pub fn handle_list(table: &BindingTable, group: Option<Group>, out: &mut impl Write) -> Result<(), CliError> {
    let bindings = table
        .iter()
        .filter(|binding| group.map_or(true, |group| binding.group == group));
    for binding in bindings {
        let lowering = match binding.lowering(true) {
            Lowering::Inline(_) => "inline",
            Lowering::Call => "call",
        };
        writeln!(out, "{:<72} {:<10} {}", binding.symbol(), binding.group, lowering)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_filter_limits_output() {
        let table = BindingTable::standard().unwrap();
        let mut out = Vec::new();
        handle_list(&table, Some(Group::Memory), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|line| line.contains("NativeMemory") && line.ends_with("call")));
    }
}
