//! Aligned native allocation.
//!
//! Blocks come from the global allocator. A small [`BlockHeader`] sits
//! immediately before every returned address so that [`aligned_free`] can
//! rebuild the layout from the pointer alone, the way `_mm_free` does.

use crate::error::{ShimError, ShimResult};
use std::alloc::{self, Layout};
use std::mem;
use std::ptr::{self, NonNull};

#[repr(C)]
#[derive(Clone, Copy)]
struct BlockHeader {
    /// Distance from the start of the underlying allocation to the user pointer.
    offset: usize,
    /// Size requested by the caller.
    size: usize,
    /// Effective alignment of the underlying allocation.
    align: usize,
}

const HEADER_SIZE: usize = mem::size_of::<BlockHeader>();

/// Computes the underlying layout and the user offset for a request.
fn block_layout(size: usize, align: usize) -> Option<(Layout, usize)> {
    if !align.is_power_of_two() {
        return None;
    }
    let align = align.max(mem::align_of::<BlockHeader>());
    // Smallest multiple of `align` that leaves room for the header.
    let offset = HEADER_SIZE.checked_add(align - 1)? & !(align - 1);
    let total = offset.checked_add(size)?;
    let layout = Layout::from_size_align(total, align).ok()?;
    Some((layout, offset))
}

/// Allocates at least `size` bytes aligned to `align`.
///
/// Returns null when `align` is not a power of two, when the size overflows,
/// or when the allocator is out of memory. Callers must check. A zero-size
/// request still yields a unique pointer that must be passed to
/// [`aligned_free`].
pub fn aligned_alloc(size: usize, align: usize) -> *mut u8 {
    let Some((layout, offset)) = block_layout(size, align) else {
        log::warn!("aligned_alloc: rejected layout (size {}, align {})", size, align);
        return ptr::null_mut();
    };
    // SAFETY: `layout` has non-zero size since `offset >= HEADER_SIZE`.
    let base = unsafe { alloc::alloc(layout) };
    if base.is_null() {
        log::warn!("aligned_alloc: out of memory (size {}, align {})", size, align);
        return ptr::null_mut();
    }
    // SAFETY: `offset <= layout.size()`, and the header slot lies within
    // [base, base + offset) and is suitably aligned because `offset` is a
    // multiple of an alignment that is at least the header's.
    unsafe {
        let user = base.add(offset);
        let header = user.sub(HEADER_SIZE) as *mut BlockHeader;
        ptr::write(header, BlockHeader { offset, size, align: layout.align() });
        log::trace!("aligned_alloc: {:p} (size {}, align {})", user, size, align);
        user
    }
}

/// Releases a block returned by [`aligned_alloc`]. Null is ignored.
///
/// # Safety
/// `ptr` must be null or a live pointer obtained from [`aligned_alloc`].
/// Passing any other pointer, or freeing twice, is undefined behavior.
pub unsafe fn aligned_free(ptr: *mut u8) {
    if ptr.is_null() {
        return;
    }
    let header = ptr::read(ptr.sub(HEADER_SIZE) as *const BlockHeader);
    let base = ptr.sub(header.offset);
    let layout = Layout::from_size_align_unchecked(header.offset + header.size, header.align);
    log::trace!("aligned_free: {:p} (size {})", ptr, header.size);
    alloc::dealloc(base, layout);
}

/// Reallocation of aligned blocks is not supported.
///
/// Translated code assumes a relocated buffer keeps every outstanding
/// reference into it valid, which a non-moving shim cannot honor. This always
/// returns [`ShimError::Unsupported`] and leaves `ptr` untouched; the C export
/// turns it into a process abort.
pub fn aligned_realloc(ptr: *mut u8, new_size: usize, align: usize) -> ShimResult<*mut u8> {
    log::error!(
        "aligned_realloc: relocating {:p} to {} bytes (align {}) is not supported",
        ptr,
        new_size,
        align
    );
    Err(ShimError::Unsupported("NativeMemory.AlignedRealloc"))
}

/// An owned aligned block, freed on drop.
pub struct AlignedBlock {
    ptr: NonNull<u8>,
    len: usize,
    align: usize,
}

impl AlignedBlock {
    /// Allocates a zero-initialized block of `len` bytes aligned to `align`.
    pub fn new(len: usize, align: usize) -> ShimResult<Self> {
        if block_layout(len, align).is_none() {
            return Err(ShimError::InvalidLayout { size: len, align });
        }
        let ptr = NonNull::new(aligned_alloc(len, align))
            .ok_or(ShimError::AllocationFailed { size: len, align })?;
        // SAFETY: the block is valid for `len` bytes.
        unsafe { ptr::write_bytes(ptr.as_ptr(), 0, len) };
        Ok(Self { ptr, len, align })
    }

    pub fn as_ptr(&self) -> *mut u8 {
        self.ptr.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn align(&self) -> usize {
        self.align
    }

    pub fn as_slice(&self) -> &[u8] {
        // SAFETY: owned, initialized, valid for `len` bytes.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        // SAFETY: owned, initialized, valid for `len` bytes, uniquely borrowed.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Gives up ownership; the caller must eventually call [`aligned_free`].
    pub fn into_raw(self) -> *mut u8 {
        let ptr = self.ptr.as_ptr();
        mem::forget(self);
        ptr
    }
}

impl Drop for AlignedBlock {
    fn drop(&mut self) {
        // SAFETY: `ptr` came from `aligned_alloc` and is freed exactly once.
        unsafe { aligned_free(self.ptr.as_ptr()) }
    }
}

// SAFETY: the block is uniquely owned raw memory with no thread affinity.
unsafe impl Send for AlignedBlock {}
unsafe impl Sync for AlignedBlock {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_fits_before_user_pointer() {
        for align in [1, 2, 8, 16, 64, 4096] {
            let (layout, offset) = block_layout(10, align).unwrap();
            assert!(offset >= HEADER_SIZE);
            assert_eq!(offset % layout.align(), 0);
            assert!(layout.align() >= align);
        }
    }

    #[test]
    fn non_power_of_two_alignment_is_rejected() {
        assert!(block_layout(8, 0).is_none());
        assert!(block_layout(8, 24).is_none());
    }
}
