use crate::abi::{Abi, Param};
use crate::binding::{Group, IntrinsicBinding};
use crate::error::{BindingError, BindingResult};
use crate::standard::standard_bindings;
use rustc_hash::{FxHashMap, FxHashSet};

/// Immutable lookup table from symbol name to binding.
#[derive(Debug, Clone)]
pub struct BindingTable {
    bindings: Vec<IntrinsicBinding>,
    index: FxHashMap<String, usize>,
}

impl BindingTable {
    /// Builds a table, rejecting two bindings that map to the same symbol.
    pub fn from_bindings(bindings: Vec<IntrinsicBinding>) -> BindingResult<Self> {
        let mut index = FxHashMap::default();
        index.reserve(bindings.len());
        for (slot, binding) in bindings.iter().enumerate() {
            let symbol = binding.symbol();
            if index.insert(symbol.clone(), slot).is_some() {
                return Err(BindingError::DuplicateSymbol(symbol));
            }
        }
        log::debug!("binding table built with {} entries", bindings.len());
        Ok(Self { bindings, index })
    }

    /// The table of every intrinsic the runtime provides.
    pub fn standard() -> BindingResult<Self> {
        Self::from_bindings(standard_bindings())
    }

    pub fn get(&self, symbol: &str) -> Option<&IntrinsicBinding> {
        self.index.get(symbol).map(|&slot| &self.bindings[slot])
    }

    /// Like [`get`](Self::get), but an unknown symbol is an error whose help
    /// text lists the overloads sharing its stem.
    pub fn resolve(&self, symbol: &str) -> BindingResult<&IntrinsicBinding> {
        self.get(symbol).ok_or_else(|| BindingError::UnknownSymbol {
            symbol: symbol.to_string(),
            hint: self.hint_for(symbol),
        })
    }

    /// Finds a binding by its managed shape rather than by symbol.
    pub fn find(
        &self,
        namespace: &str,
        type_name: &str,
        member: &str,
        params: &[Param],
        ret: Abi,
    ) -> Option<&IntrinsicBinding> {
        self.bindings.iter().find(|binding| {
            binding.namespace == namespace
                && binding.type_name == type_name
                && binding.member == member
                && binding.params == params
                && binding.ret == ret
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &IntrinsicBinding> {
        self.bindings.iter()
    }

    pub fn by_group(&self, group: Group) -> impl Iterator<Item = &IntrinsicBinding> {
        self.bindings.iter().filter(move |binding| binding.group == group)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Checks every binding against a set of exported symbol names.
    pub fn verify_exports<'a, I>(&self, exports: I) -> BindingResult<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let exported: FxHashSet<&str> = exports.into_iter().collect();
        let missing: Vec<String> = self
            .bindings
            .iter()
            .map(IntrinsicBinding::symbol)
            .filter(|symbol| !exported.contains(symbol.as_str()))
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            log::warn!("{} binding(s) lack a runtime export", missing.len());
            Err(BindingError::MissingExport(missing))
        }
    }

    fn hint_for(&self, symbol: &str) -> String {
        let stem = match symbol.rfind('_') {
            Some(end) => &symbol[..=end],
            None => symbol,
        };
        let mut candidates: Vec<&str> = self
            .index
            .keys()
            .map(String::as_str)
            .filter(|candidate| candidate.starts_with(stem))
            .collect();
        if candidates.is_empty() {
            return "Run `ilshim list` to see every known binding".to_string();
        }
        candidates.sort_unstable();
        format!("Known overloads: {}", candidates.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pop_count(operand: Abi) -> IntrinsicBinding {
        IntrinsicBinding::new(Group::Bits, "System.Numerics", "BitOperations", "PopCount")
            .params([operand])
            .returns(Abi::I32)
    }

    #[test]
    fn duplicate_symbols_are_rejected() {
        let err = BindingTable::from_bindings(vec![pop_count(Abi::U32), pop_count(Abi::U32)]).unwrap_err();
        assert!(matches!(err, BindingError::DuplicateSymbol(ref s) if s == "System_Numerics_BitOperations_PopCount_u32"));
    }

    #[test]
    fn unknown_symbol_hint_lists_overloads() {
        let table = BindingTable::from_bindings(vec![pop_count(Abi::U32), pop_count(Abi::U64)]).unwrap();
        let err = table.resolve("System_Numerics_BitOperations_PopCount_u16").unwrap_err();
        match err {
            BindingError::UnknownSymbol { hint, .. } => {
                assert!(hint.contains("PopCount_u32"));
                assert!(hint.contains("PopCount_u64"));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn missing_exports_are_listed() {
        let table = BindingTable::from_bindings(vec![pop_count(Abi::U32), pop_count(Abi::U64)]).unwrap();
        let err = table.verify_exports(["System_Numerics_BitOperations_PopCount_u32"]).unwrap_err();
        match err {
            BindingError::MissingExport(missing) => {
                assert_eq!(missing, vec!["System_Numerics_BitOperations_PopCount_u64".to_string()]);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}
