use crate::abi::{Abi, Param};
use crate::error::BindingError;
use std::fmt;
use std::str::FromStr;

/// Parameter names used by inline templates and header prototypes, in order.
pub const PARAM_NAMES: [&str; 4] = ["a", "b", "c", "d"];

/// Functional group a binding belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Group {
    Wide,
    Atomic,
    Memory,
    Bits,
    Math,
    Reflection,
    Interop,
}

impl Group {
    pub const ALL: [Group; 7] = [
        Group::Wide,
        Group::Atomic,
        Group::Memory,
        Group::Bits,
        Group::Math,
        Group::Reflection,
        Group::Interop,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Group::Wide => "wide",
            Group::Atomic => "atomic",
            Group::Memory => "memory",
            Group::Bits => "bits",
            Group::Math => "math",
            Group::Reflection => "reflection",
            Group::Interop => "interop",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Group {
    type Err = BindingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Group::ALL
            .into_iter()
            .find(|group| group.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| BindingError::UnknownGroup(s.to_string()))
    }
}

/// How the receiver of an instance member appears in the signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Receiver {
    Static,
    /// A constructor of a value type. Encoded as `m` + type in the suffix;
    /// the constructed value is returned rather than passed.
    Constructed(Abi),
}

/// How generated code reaches a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lowering<'a> {
    /// Expand the C expression template in place.
    Inline(&'a str),
    /// Call the runtime export of the same name.
    Call,
}

/// A symbolic intrinsic name bound to its native implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntrinsicBinding {
    pub namespace: &'static str,
    pub type_name: &'static str,
    pub member: &'static str,
    pub receiver: Receiver,
    pub params: Vec<Param>,
    pub ret: Abi,
    /// Append the return type to the suffix. Only set for overloads that
    /// differ solely by return type.
    pub ret_in_name: bool,
    pub group: Group,
    /// C expression over `a`, `b`, ... for inline expansion.
    pub inline: Option<String>,
}

impl IntrinsicBinding {
    pub fn new(group: Group, namespace: &'static str, type_name: &'static str, member: &'static str) -> Self {
        Self {
            namespace,
            type_name,
            member,
            receiver: Receiver::Static,
            params: Vec::new(),
            ret: Abi::Void,
            ret_in_name: false,
            group,
            inline: None,
        }
    }

    pub fn params<I, P>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Param>,
    {
        self.params = params.into_iter().map(Into::into).collect();
        self
    }

    pub fn returns(mut self, ret: Abi) -> Self {
        self.ret = ret;
        self
    }

    pub fn constructs(mut self, ty: Abi) -> Self {
        self.receiver = Receiver::Constructed(ty);
        self.ret = ty;
        self
    }

    pub fn named_by_return(mut self) -> Self {
        self.ret_in_name = true;
        self
    }

    pub fn inline(mut self, template: impl Into<String>) -> Self {
        self.inline = Some(template.into());
        self
    }

    /// The signature suffix: receiver, parameters, and optionally `_` + return.
    pub fn signature(&self) -> String {
        let mut sig = String::new();
        if let Receiver::Constructed(ty) = self.receiver {
            sig.push('m');
            sig.push_str(ty.abbrev());
        }
        for param in &self.params {
            sig.push_str(&param.abbrev());
        }
        if self.ret_in_name {
            sig.push('_');
            sig.push_str(self.ret.abbrev());
        }
        sig
    }

    /// The symbol generated code uses: namespace, type, member and signature
    /// joined by `_`, with `.` in the namespace and member replaced by `_`.
    pub fn symbol(&self) -> String {
        format!(
            "{}_{}_{}_{}",
            self.namespace.replace('.', "_"),
            self.type_name,
            self.member.replace('.', "_"),
            self.signature()
        )
    }

    /// The managed member this binding stands in for, e.g. `System.Int128::op_Addition`.
    pub fn managed_name(&self) -> String {
        format!("{}.{}::{}", self.namespace, self.type_name, self.member)
    }

    pub fn lowering(&self, prefer_inline: bool) -> Lowering<'_> {
        match &self.inline {
            Some(template) if prefer_inline => Lowering::Inline(template),
            _ => Lowering::Call,
        }
    }

    /// C parameter list with the standard parameter names, `void` if empty.
    pub fn c_params(&self) -> String {
        if self.params.is_empty() {
            return "void".to_string();
        }
        self.params
            .iter()
            .zip(PARAM_NAMES)
            .map(|(param, name)| {
                let ty = param.c_type();
                if ty.ends_with('*') {
                    format!("{}{}", ty, name)
                } else {
                    format!("{} {}", ty, name)
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Macro parameter names, e.g. `a, b`.
    pub fn macro_params(&self) -> String {
        PARAM_NAMES
            .iter()
            .take(self.params.len())
            .copied()
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor_suffix_carries_receiver() {
        let ctor = IntrinsicBinding::new(Group::Wide, "System", "UInt128", ".ctor")
            .constructs(Abi::U128)
            .params([Abi::U64, Abi::U64]);
        assert_eq!(ctor.symbol(), "System_UInt128__ctor_mu128u64u64");
        assert_eq!(ctor.macro_params(), "a, b");
    }

    #[test]
    fn group_parsing_is_case_insensitive() {
        assert_eq!("Atomic".parse::<Group>().unwrap(), Group::Atomic);
        assert!("threads".parse::<Group>().is_err());
    }
}
