//! C header export for generated code.
//!
//! The header declares the shared typedefs and the bootstrap entry point,
//! then one line per binding: a `#define` when the binding has an inline
//! template and inlining is enabled, otherwise an `extern` prototype that
//! links against the runtime export of the same name.

use crate::binding::{Group, IntrinsicBinding, Lowering};
use crate::table::BindingTable;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderOptions {
    pub guard: String,
    pub includes: Vec<String>,
    pub prefer_inline: bool,
    /// Restrict output to these groups. `None` emits every group.
    pub groups: Option<Vec<Group>>,
}

impl Default for HeaderOptions {
    fn default() -> Self {
        Self {
            guard: "ILSHIM_H".to_string(),
            includes: ["stdint.h", "stddef.h", "stdbool.h", "math.h"]
                .into_iter()
                .map(String::from)
                .collect(),
            prefer_inline: true,
            groups: None,
        }
    }
}

impl HeaderOptions {
    fn emits(&self, group: Group) -> bool {
        self.groups.as_ref().map_or(true, |groups| groups.contains(&group))
    }
}

/// Renders a [`BindingTable`] as a C header through [`fmt::Display`].
pub struct HeaderWriter<'a> {
    table: &'a BindingTable,
    options: &'a HeaderOptions,
}

impl<'a> HeaderWriter<'a> {
    pub fn new(table: &'a BindingTable, options: &'a HeaderOptions) -> Self {
        Self { table, options }
    }

    fn write_binding(&self, f: &mut fmt::Formatter<'_>, binding: &IntrinsicBinding) -> fmt::Result {
        match binding.lowering(self.options.prefer_inline) {
            Lowering::Inline(template) => writeln!(
                f,
                "#define {}({}) {}",
                binding.symbol(),
                binding.macro_params(),
                template
            ),
            Lowering::Call => writeln!(
                f,
                "extern {} {}({});",
                binding.ret.c_type(),
                binding.symbol(),
                binding.c_params()
            ),
        }
    }
}

impl fmt::Display for HeaderWriter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = &self.options.guard;
        writeln!(f, "#ifndef {}", guard)?;
        writeln!(f, "#define {}", guard)?;
        writeln!(f)?;
        for include in &self.options.includes {
            writeln!(f, "#include <{}>", include)?;
        }
        writeln!(f)?;
        writeln!(f, "typedef char *System_String;")?;
        writeln!(f, "typedef struct TypeInfo {{ int32_t hash; }} TypeInfo;")?;
        writeln!(f)?;
        writeln!(f, "int ilshim_bootstrap(int argc, char **argv);")?;

        for group in Group::ALL {
            if !self.options.emits(group) {
                continue;
            }
            writeln!(f)?;
            writeln!(f, "/* {} */", group)?;
            for binding in self.table.by_group(group) {
                self.write_binding(f, binding)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "#endif /* {} */", guard)
    }
}
