/// Minimal runtime type stand-in. Carries nothing but an identity hash.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    pub hash: i32,
}

impl TypeInfo {
    pub const fn new(hash: i32) -> Self {
        Self { hash }
    }

    pub const fn hash_code(&self) -> i32 {
        self.hash
    }
}

/// A runtime type handle already is the type descriptor; no registry lookup.
#[inline]
pub fn type_from_handle(handle: TypeInfo) -> TypeInfo {
    handle
}
