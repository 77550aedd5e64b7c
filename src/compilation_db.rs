//! Access to `compile_commands.json` compilation databases.

use std::ffi::CString;
use std::fmt;
use std::marker::PhantomData;
use std::path::Path;

use tracing::debug;

use crate::cxstring;
use crate::error::{ClangError, CompilationDatabaseError, Result};
use crate::ffi;

/// A compilation database loaded from a build directory.
pub struct CompilationDatabase {
    ptr: ffi::CXCompilationDatabase,
}

impl CompilationDatabase {
    /// Loads `compile_commands.json` from `build_dir`.
    pub fn from_directory(build_dir: impl AsRef<Path>) -> Result<Self> {
        let path = build_dir.as_ref();
        let c_path = cxstring::path_to_cstring(path)?;
        let mut code = ffi::CXCompilationDatabase_NoError;
        let ptr = unsafe { ffi::clang_CompilationDatabase_fromDirectory(c_path.as_ptr(), &mut code) };
        let failure = CompilationDatabaseError::from_raw(code)
            .or(ptr.is_null().then_some(CompilationDatabaseError::CanNotLoadDatabase));
        if let Some(source) = failure {
            if !ptr.is_null() {
                unsafe { ffi::clang_CompilationDatabase_dispose(ptr) };
            }
            debug!(dir = %path.display(), %source, "no compilation database");
            return Err(ClangError::CompilationDatabase { path: path.to_path_buf(), source });
        }
        debug!(dir = %path.display(), "loaded compilation database");
        Ok(CompilationDatabase { ptr })
    }

    /// Commands used to compile `complete_file_name`.
    pub fn compile_commands(&self, complete_file_name: &str) -> Result<CompileCommands<'_>> {
        let name = CString::new(complete_file_name)?;
        let raw = unsafe { ffi::clang_CompilationDatabase_getCompileCommands(self.ptr, name.as_ptr()) };
        Ok(CompileCommands::from_raw(raw))
    }

    pub fn all_compile_commands(&self) -> CompileCommands<'_> {
        CompileCommands::from_raw(unsafe { ffi::clang_CompilationDatabase_getAllCompileCommands(self.ptr) })
    }
}

impl Drop for CompilationDatabase {
    fn drop(&mut self) {
        unsafe { ffi::clang_CompilationDatabase_dispose(self.ptr) }
    }
}

impl fmt::Debug for CompilationDatabase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompilationDatabase").finish_non_exhaustive()
    }
}

/// A list of compile commands, disposed on drop.
pub struct CompileCommands<'db> {
    ptr: ffi::CXCompileCommands,
    _db: PhantomData<&'db CompilationDatabase>,
}

impl<'db> CompileCommands<'db> {
    fn from_raw(ptr: ffi::CXCompileCommands) -> Self {
        CompileCommands { ptr, _db: PhantomData }
    }

    pub fn len(&self) -> usize {
        if self.ptr.is_null() {
            return 0;
        }
        unsafe { ffi::clang_CompileCommands_getSize(self.ptr) as usize }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<CompileCommand<'_>> {
        if index >= self.len() {
            return None;
        }
        let raw = unsafe { ffi::clang_CompileCommands_getCommand(self.ptr, index as u32) };
        if raw.is_null() {
            None
        } else {
            Some(CompileCommand { ptr: raw, _commands: PhantomData })
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = CompileCommand<'_>> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }
}

impl Drop for CompileCommands<'_> {
    fn drop(&mut self) {
        if !self.ptr.is_null() {
            unsafe { ffi::clang_CompileCommands_dispose(self.ptr) }
        }
    }
}

/// One compiler invocation.
#[derive(Clone, Copy)]
pub struct CompileCommand<'c> {
    ptr: ffi::CXCompileCommand,
    _commands: PhantomData<&'c ()>,
}

impl CompileCommand<'_> {
    /// Working directory the command runs in.
    pub fn directory(&self) -> String {
        cxstring::take(unsafe { ffi::clang_CompileCommand_getDirectory(self.ptr) })
    }

    pub fn filename(&self) -> String {
        cxstring::take(unsafe { ffi::clang_CompileCommand_getFilename(self.ptr) })
    }

    pub fn num_args(&self) -> u32 {
        unsafe { ffi::clang_CompileCommand_getNumArgs(self.ptr) }
    }

    /// Argument `index`; argument 0 is the compiler executable.
    pub fn arg(&self, index: u32) -> Option<String> {
        if index >= self.num_args() {
            return None;
        }
        Some(cxstring::take(unsafe { ffi::clang_CompileCommand_getArg(self.ptr, index) }))
    }

    pub fn arguments(&self) -> Vec<String> {
        (0..self.num_args()).filter_map(|i| self.arg(i)).collect()
    }
}

impl fmt::Debug for CompileCommand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompileCommand")
            .field("directory", &self.directory())
            .field("arguments", &self.arguments())
            .finish()
    }
}
