//! Process execution context: executable path and argument vector.
//!
//! Rust callers build an [`ExecutionContext`] at startup and pass it by
//! reference. Generated C code has nowhere to thread a context through, so
//! the C surface reads a single instance that the bootstrap sequence
//! [`install`]s once before any generated code runs.
//!
//! The argument vector always includes the program name as element 0, like
//! the platform `argv`.

use crate::error::{ShimError, ShimResult};
use once_cell::sync::OnceCell;
use std::ffi::{CStr, CString, OsString};
use std::os::raw::{c_char, c_int};
use std::ptr;

pub struct ExecutionContext {
    executable: CString,
    args: Vec<CString>,
    /// NULL-terminated pointers into `args`, handed out to C callers.
    argv: Vec<*const c_char>,
}

// SAFETY: `argv` only points into the heap buffers owned by `args`, which are
// never mutated or dropped while the context lives.
unsafe impl Send for ExecutionContext {}
unsafe impl Sync for ExecutionContext {}

static INSTALLED: OnceCell<ExecutionContext> = OnceCell::new();

impl ExecutionContext {
    /// Creates a context from an executable path and the full argument
    /// vector (program name first).
    pub fn new<E, I, A>(executable: E, args: I) -> ShimResult<Self>
    where
        E: Into<Vec<u8>>,
        I: IntoIterator<Item = A>,
        A: Into<Vec<u8>>,
    {
        let executable = CString::new(executable)?;
        let args = args
            .into_iter()
            .map(CString::new)
            .collect::<Result<Vec<_>, _>>()?;
        let argv = args
            .iter()
            .map(|arg| arg.as_ptr())
            .chain(std::iter::once(ptr::null()))
            .collect();
        Ok(Self { executable, args, argv })
    }

    /// Captures the current process: `current_exe()` as the executable path
    /// (falling back to `argv[0]`), and `args_os()` as the argument vector.
    /// Arguments keep their raw bytes on unix.
    pub fn from_env() -> ShimResult<Self> {
        let args: Vec<Vec<u8>> = std::env::args_os().map(os_bytes).collect();
        let executable = match std::env::current_exe() {
            Ok(path) => os_bytes(path.into_os_string()),
            Err(err) => {
                log::debug!("current_exe unavailable ({}), using argv[0]", err);
                args.first().cloned().unwrap_or_default()
            }
        };
        Self::new(executable, args)
    }

    /// Captures a C `main`'s arguments. The executable path is `argv[0]`.
    /// Reading stops at the first null entry even if `argc` claims more.
    ///
    /// # Safety
    /// `argv` must point to at least `argc` entries, each null or a valid
    /// NUL-terminated string.
    pub unsafe fn from_raw(argc: c_int, argv: *const *const c_char) -> ShimResult<Self> {
        let count = if argv.is_null() { 0 } else { argc.max(0) as usize };
        let args: Vec<Vec<u8>> = (0..count)
            .map(|i| *argv.add(i))
            .take_while(|arg| !arg.is_null())
            .map(|arg| CStr::from_ptr(arg).to_bytes().to_vec())
            .collect();
        if args.len() < count {
            log::warn!("argv has a null entry at {} of {}; ignoring the rest", args.len(), count);
        }
        let executable = args.first().cloned().unwrap_or_default();
        Self::new(executable, args)
    }

    pub fn executable(&self) -> &CStr {
        &self.executable
    }

    pub fn args(&self) -> &[CString] {
        &self.args
    }

    pub fn argc(&self) -> usize {
        self.args.len()
    }

    /// NULL-terminated argument vector, valid while `self` lives.
    pub fn argv_ptr(&self) -> *const *const c_char {
        self.argv.as_ptr()
    }

    /// The entry assembly is represented by the executable path.
    pub fn entry_assembly(&self) -> &CStr {
        self.executable()
    }
}

impl std::fmt::Debug for ExecutionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecutionContext")
            .field("executable", &self.executable)
            .field("args", &self.args)
            .finish()
    }
}

#[cfg(unix)]
fn os_bytes(text: OsString) -> Vec<u8> {
    use std::os::unix::ffi::OsStringExt;
    text.into_vec()
}

#[cfg(not(unix))]
fn os_bytes(text: OsString) -> Vec<u8> {
    text.to_string_lossy().into_owned().into_bytes()
}

/// The location of an assembly is the assembly handle itself.
pub fn assembly_location(assembly: &CStr) -> &CStr {
    assembly
}

/// Makes `context` the process-wide instance read by the C surface.
/// Fails if a context was already installed.
pub fn install(context: ExecutionContext) -> ShimResult<&'static ExecutionContext> {
    match INSTALLED.try_insert(context) {
        Ok(installed) => {
            log::debug!(
                "Execution context installed: {:?} ({} args)",
                installed.executable,
                installed.argc()
            );
            Ok(installed)
        }
        Err(_) => {
            log::warn!("Execution context already installed; ignoring second bootstrap");
            Err(ShimError::AlreadyInitialized)
        }
    }
}

/// The installed process-wide context.
pub fn installed() -> ShimResult<&'static ExecutionContext> {
    INSTALLED.get().ok_or(ShimError::NotInitialized)
}
