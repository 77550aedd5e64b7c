//! In-memory file contents that override what is on disk.

use std::collections::{BTreeMap, HashMap};
use std::ffi::CString;
use std::marker::PhantomData;
use std::os::raw::{c_char, c_uint, c_ulong};
use std::ptr;

use crate::error::Result;
use crate::ffi;

/// Files that have not yet been saved to disk, keyed by filename.
///
/// Iteration order is the filename order, which is also the order the files
/// are handed to libclang.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnsavedFiles {
    files: BTreeMap<String, String>,
}

impl UnsavedFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a file, returning the previous contents.
    pub fn insert(&mut self, filename: impl Into<String>, contents: impl Into<String>) -> Option<String> {
        self.files.insert(filename.into(), contents.into())
    }

    pub fn remove(&mut self, filename: &str) -> Option<String> {
        self.files.remove(filename)
    }

    pub fn get(&self, filename: &str) -> Option<&str> {
        self.files.get(filename).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub(crate) fn to_native(&self) -> Result<NativeUnsavedFiles<'_>> {
        let names = self
            .files
            .keys()
            .map(|name| CString::new(name.as_str()))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let entries = names
            .iter()
            .zip(self.files.values())
            .map(|(name, contents)| ffi::CXUnsavedFile {
                Filename: name.as_ptr(),
                Contents: contents.as_ptr() as *const c_char,
                Length: contents.len() as c_ulong,
            })
            .collect();
        Ok(NativeUnsavedFiles { _names: names, entries, _files: PhantomData })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for UnsavedFiles {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let files = iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        UnsavedFiles { files }
    }
}

impl From<HashMap<String, String>> for UnsavedFiles {
    fn from(map: HashMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

/// `CXUnsavedFile` array borrowing from an [`UnsavedFiles`].
pub(crate) struct NativeUnsavedFiles<'a> {
    _names: Vec<CString>,
    entries: Vec<ffi::CXUnsavedFile>,
    _files: PhantomData<&'a UnsavedFiles>,
}

impl NativeUnsavedFiles<'_> {
    /// NULL when there are no files.
    pub(crate) fn as_mut_ptr(&mut self) -> *mut ffi::CXUnsavedFile {
        if self.entries.is_empty() {
            ptr::null_mut()
        } else {
            self.entries.as_mut_ptr()
        }
    }

    pub(crate) fn len(&self) -> c_uint {
        self.entries.len() as c_uint
    }
}
