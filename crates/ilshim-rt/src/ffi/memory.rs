use crate::memory;
use std::ffi::c_void;

#[no_mangle]
pub extern "C" fn System_Runtime_InteropServices_NativeMemory_AlignedAlloc_usus(
    byte_count: usize,
    alignment: usize,
) -> *mut c_void {
    memory::aligned_alloc(byte_count, alignment) as *mut c_void
}

/// # Safety
/// `ptr` must be null or come from `AlignedAlloc` and not have been freed.
#[no_mangle]
pub unsafe extern "C" fn System_Runtime_InteropServices_NativeMemory_AlignedFree_p(ptr: *mut c_void) {
    memory::aligned_free(ptr as *mut u8)
}

/// Aligned reallocation is unsupported; this never returns.
#[no_mangle]
pub extern "C" fn System_Runtime_InteropServices_NativeMemory_AlignedRealloc_pusus(
    ptr: *mut c_void,
    byte_count: usize,
    alignment: usize,
) -> *mut c_void {
    match memory::aligned_realloc(ptr as *mut u8, byte_count, alignment) {
        Ok(relocated) => relocated as *mut c_void,
        Err(err) => {
            log::error!("{} Aborting.", err);
            std::process::abort()
        }
    }
}

symbol_table!(register => [
    System_Runtime_InteropServices_NativeMemory_AlignedAlloc_usus,
    System_Runtime_InteropServices_NativeMemory_AlignedFree_p,
    System_Runtime_InteropServices_NativeMemory_AlignedRealloc_pusus,
]);
