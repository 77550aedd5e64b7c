use std::ffi::{CStr, CString, NulError};
use std::path::Path;

use crate::ffi;

/// Owns a `CXString` returned by libclang and disposes it on drop.
pub(crate) struct CxString(ffi::CXString);

impl CxString {
    pub(crate) fn new(raw: ffi::CXString) -> Self {
        CxString(raw)
    }

    pub(crate) fn as_string(&self) -> String {
        unsafe { borrowed(self.0) }
    }

    pub(crate) fn into_string(self) -> String {
        self.as_string()
    }
}

impl Drop for CxString {
    fn drop(&mut self) {
        unsafe { ffi::clang_disposeString(self.0) }
    }
}

/// Converts and disposes a `CXString` in one step.
pub(crate) fn take(raw: ffi::CXString) -> String {
    CxString::new(raw).into_string()
}

/// Reads a `CXString` without disposing it.
///
/// # Safety
/// `raw` must be a string libclang still considers alive, e.g. one embedded
/// in a struct whose own dispose call releases it.
pub(crate) unsafe fn borrowed(raw: ffi::CXString) -> String {
    let ptr = ffi::clang_getCString(raw);
    if ptr.is_null() {
        return String::new();
    }
    CStr::from_ptr(ptr).to_string_lossy().into_owned()
}

/// Native spelling of `path`, byte for byte on unix.
#[cfg(unix)]
pub(crate) fn path_to_cstring(path: &Path) -> Result<CString, NulError> {
    use std::os::unix::ffi::OsStrExt;
    CString::new(path.as_os_str().as_bytes())
}

#[cfg(not(unix))]
pub(crate) fn path_to_cstring(path: &Path) -> Result<CString, NulError> {
    CString::new(path.to_string_lossy().into_owned())
}

/// Like [`take`], but maps an empty string to `None`.
pub(crate) fn take_non_empty(raw: ffi::CXString) -> Option<String> {
    let s = take(raw);
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
