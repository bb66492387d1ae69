use crate::bootstrap::{self, ExecutionContext};
use crate::interop;
use crate::reflect::{self, TypeInfo};
use std::ffi::CStr;
use std::os::raw::{c_char, c_int};
use std::ptr;

// --- Bootstrap ---

/// Captures `argc`/`argv` as the process execution context. Must be called
/// once from the generated `main` before any other generated code runs.
/// Returns 0 on success and -1 if the context was already installed or the
/// arguments could not be captured.
///
/// # Safety
/// `argv` must point to at least `argc` valid NUL-terminated strings.
#[no_mangle]
pub unsafe extern "C" fn ilshim_bootstrap(argc: c_int, argv: *const *const c_char) -> c_int {
    let installed = ExecutionContext::from_raw(argc, argv).and_then(bootstrap::install);
    match installed {
        Ok(_) => 0,
        Err(err) => {
            log::error!("ilshim_bootstrap failed: {}", err);
            -1
        }
    }
}

// --- Reflection stand-ins ---

/// The entry assembly is the executable path. Null before bootstrap.
#[no_mangle]
pub extern "C" fn System_Reflection_Assembly_GetEntryAssembly_() -> *const c_char {
    match bootstrap::installed() {
        Ok(context) => context.entry_assembly().as_ptr(),
        Err(err) => {
            log::error!("GetEntryAssembly: {}", err);
            ptr::null()
        }
    }
}

#[no_mangle]
pub extern "C" fn System_Reflection_Assembly_get_Location_s(assembly: *const c_char) -> *const c_char {
    assembly
}

/// NULL-terminated argument vector, program name first. Null before bootstrap.
#[no_mangle]
pub extern "C" fn System_Environment_GetCommandLineArgs_() -> *const *const c_char {
    match bootstrap::installed() {
        Ok(context) => context.argv_ptr(),
        Err(err) => {
            log::error!("GetCommandLineArgs: {}", err);
            ptr::null()
        }
    }
}

#[no_mangle]
pub extern "C" fn System_Type_GetTypeFromHandle_t(handle: TypeInfo) -> TypeInfo {
    reflect::type_from_handle(handle)
}

#[no_mangle]
pub extern "C" fn System_Object_GetHashCode_t(object: TypeInfo) -> i32 {
    object.hash_code()
}

// --- Strings ---

/// Byte length minus one. A null string is treated as empty and yields -1.
///
/// # Safety
/// `text` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn System_String_get_Length_s(text: *const c_char) -> i32 {
    if text.is_null() {
        log::warn!("String.get_Length called on a null string");
        return -1;
    }
    interop::string_length(CStr::from_ptr(text))
}

/// Strings are already NUL-terminated UTF-8; marshalling is the identity.
#[no_mangle]
pub extern "C" fn System_Runtime_InteropServices_Marshal_StringToCoTaskMemUTF8_s(
    text: *const c_char,
) -> *const c_char {
    text
}

// --- Console ---

/// Writes one UTF-16 unit. Returns the unit, or -1 on a write error.
#[no_mangle]
pub extern "C" fn System_Console_Write_c(unit: u16) -> c_int {
    match interop::write_char(unit) {
        Ok(()) => unit as c_int,
        Err(err) => {
            log::warn!("Console.Write failed: {}", err);
            -1
        }
    }
}

/// Writes `value` in decimal. No newline is appended.
#[no_mangle]
pub extern "C" fn System_Console_WriteLine_u32(value: u32) {
    if let Err(err) = interop::write_u32(value) {
        log::warn!("Console.WriteLine failed: {}", err);
    }
}

// --- Constants ---

#[no_mangle]
pub extern "C" fn System_UIntPtr_get_MinValue_() -> usize {
    usize::MIN
}

#[no_mangle]
pub extern "C" fn System_UIntPtr_get_MaxValue_() -> usize {
    usize::MAX
}

symbol_table!(register => [
    ilshim_bootstrap,
    System_Reflection_Assembly_GetEntryAssembly_,
    System_Reflection_Assembly_get_Location_s,
    System_Environment_GetCommandLineArgs_,
    System_Type_GetTypeFromHandle_t,
    System_Object_GetHashCode_t,
    System_String_get_Length_s,
    System_Runtime_InteropServices_Marshal_StringToCoTaskMemUTF8_s,
    System_Console_Write_c,
    System_Console_WriteLine_u32,
    System_UIntPtr_get_MinValue_,
    System_UIntPtr_get_MaxValue_,
]);
