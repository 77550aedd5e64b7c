use std::fmt;
use std::marker::PhantomData;

use crate::cxstring;
use crate::ffi;
use crate::source::File;

/// A clang module, as named by a module import declaration.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Module<'tu> {
    pub(crate) raw: ffi::CXModule,
    _tu: PhantomData<&'tu ()>,
}

impl<'tu> Module<'tu> {
    pub(crate) fn from_raw(raw: ffi::CXModule) -> Option<Self> {
        if raw.is_null() {
            None
        } else {
            Some(Module { raw, _tu: PhantomData })
        }
    }

    /// The module file the module was loaded from.
    pub fn ast_file(&self) -> Option<File<'tu>> {
        File::from_raw(unsafe { ffi::clang_Module_getASTFile(self.raw) })
    }

    /// `None` for a top-level module.
    pub fn parent(&self) -> Option<Module<'tu>> {
        Module::from_raw(unsafe { ffi::clang_Module_getParent(self.raw) })
    }

    /// Last component of the module name, e.g. `vector` for `std.vector`.
    pub fn name(&self) -> String {
        cxstring::take(unsafe { ffi::clang_Module_getName(self.raw) })
    }

    pub fn full_name(&self) -> String {
        cxstring::take(unsafe { ffi::clang_Module_getFullName(self.raw) })
    }

    pub fn is_system(&self) -> bool {
        unsafe { ffi::clang_Module_isSystem(self.raw) != 0 }
    }
}

impl fmt::Debug for Module<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Module").field(&self.full_name()).finish()
    }
}
