//! Diagnostics reported by the compiler.

use std::fmt;
use std::marker::PhantomData;
use std::os::raw::c_uint;
use std::ptr;

use bitflags::bitflags;
use serde::Serialize;

use crate::cxstring;
use crate::ffi;
use crate::source::{SourceLocation, SourceRange};

/// `CXDiagnosticSeverity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum DiagnosticSeverity {
    Ignored,
    Note,
    Warning,
    Error,
    Fatal,
}

impl DiagnosticSeverity {
    fn from_raw(raw: c_uint) -> Self {
        match raw {
            1 => Self::Note,
            2 => Self::Warning,
            3 => Self::Error,
            4 => Self::Fatal,
            _ => Self::Ignored,
        }
    }

    /// Error or fatal.
    pub fn is_error(self) -> bool {
        self >= Self::Error
    }
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Ignored => "ignored",
            Self::Note => "note",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Fatal => "fatal error",
        };
        f.write_str(s)
    }
}

bitflags! {
    /// `CXDiagnosticDisplayOptions`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DiagnosticDisplayOptions: u32 {
        const SOURCE_LOCATION = 0x01;
        const COLUMN = 0x02;
        const SOURCE_RANGES = 0x04;
        const OPTION = 0x08;
        const CATEGORY_ID = 0x10;
        const CATEGORY_NAME = 0x20;
    }
}

impl Default for DiagnosticDisplayOptions {
    /// The options clang itself uses for command line output.
    fn default() -> Self {
        Self::from_bits_retain(unsafe { ffi::clang_defaultDiagnosticDisplayOptions() })
    }
}

/// A replacement the compiler suggests for a range of source.
#[derive(Debug, Clone)]
pub struct FixIt<'tu> {
    pub replacement: String,
    pub range: SourceRange<'tu>,
}

/// The command line flag that controls a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticOption {
    /// e.g. `-Wunused-variable`
    pub enable: String,
    /// e.g. `-Wno-unused-variable`
    pub disable: String,
}

/// A single diagnostic, owned and disposed on drop.
pub struct Diagnostic<'tu> {
    ptr: ffi::CXDiagnostic,
    _tu: PhantomData<&'tu ()>,
}

impl<'tu> Diagnostic<'tu> {
    pub(crate) fn from_raw(ptr: ffi::CXDiagnostic) -> Option<Self> {
        if ptr.is_null() {
            None
        } else {
            Some(Diagnostic { ptr, _tu: PhantomData })
        }
    }

    pub fn severity(&self) -> DiagnosticSeverity {
        DiagnosticSeverity::from_raw(unsafe { ffi::clang_getDiagnosticSeverity(self.ptr) })
    }

    pub fn location(&self) -> SourceLocation<'tu> {
        SourceLocation::from_raw(unsafe { ffi::clang_getDiagnosticLocation(self.ptr) })
    }

    /// The diagnostic text alone, without location or severity.
    pub fn spelling(&self) -> String {
        cxstring::take(unsafe { ffi::clang_getDiagnosticSpelling(self.ptr) })
    }

    /// `None` when no command line option controls this diagnostic.
    pub fn option(&self) -> Option<DiagnosticOption> {
        let mut disable = ffi::CXString { data: ptr::null(), private_flags: 0 };
        let enable = cxstring::take(unsafe { ffi::clang_getDiagnosticOption(self.ptr, &mut disable) });
        let disable = cxstring::take(disable);
        if enable.is_empty() {
            None
        } else {
            Some(DiagnosticOption { enable, disable })
        }
    }

    pub fn category(&self) -> u32 {
        unsafe { ffi::clang_getDiagnosticCategory(self.ptr) }
    }

    pub fn category_text(&self) -> String {
        cxstring::take(unsafe { ffi::clang_getDiagnosticCategoryText(self.ptr) })
    }

    pub fn ranges(&self) -> Vec<SourceRange<'tu>> {
        let n = unsafe { ffi::clang_getDiagnosticNumRanges(self.ptr) };
        (0..n)
            .map(|i| SourceRange::from_raw(unsafe { ffi::clang_getDiagnosticRange(self.ptr, i) }))
            .collect()
    }

    pub fn fix_its(&self) -> Vec<FixIt<'tu>> {
        let n = unsafe { ffi::clang_getDiagnosticNumFixIts(self.ptr) };
        (0..n)
            .map(|i| {
                let mut range = unsafe { ffi::clang_getNullRange() };
                let replacement = cxstring::take(unsafe { ffi::clang_getDiagnosticFixIt(self.ptr, i, &mut range) });
                FixIt { replacement, range: SourceRange::from_raw(range) }
            })
            .collect()
    }

    /// Renders the diagnostic the way clang prints it.
    pub fn format(&self, options: DiagnosticDisplayOptions) -> String {
        cxstring::take(unsafe { ffi::clang_formatDiagnostic(self.ptr, options.bits()) })
    }
}

impl Drop for Diagnostic<'_> {
    fn drop(&mut self) {
        unsafe { ffi::clang_disposeDiagnostic(self.ptr) }
    }
}

impl fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(DiagnosticDisplayOptions::default()))
    }
}

impl fmt::Debug for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostic")
            .field("severity", &self.severity())
            .field("spelling", &self.spelling())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::Index;
    use crate::translation_unit::TranslationUnitFlags;
    use crate::unsaved::UnsavedFiles;

    #[test]
    fn reports_errors_and_warnings() {
        let index = Index::new(false, false);
        let source = "int main(void) {\n    int unused;\n    return undeclared;\n}\n";
        let unsaved: UnsavedFiles = [("diag.c", source)].into_iter().collect();
        let tu = index.parse(Some("diag.c"), &["-Wall"], &unsaved, TranslationUnitFlags::NONE).unwrap();

        let diagnostics = tu.diagnostics();
        assert_eq!(diagnostics.len() as u32, tu.num_diagnostics());

        let error = diagnostics
            .iter()
            .find(|d| d.severity() == DiagnosticSeverity::Error)
            .expect("undeclared identifier is an error");
        assert!(error.spelling().contains("undeclared"), "{}", error.spelling());
        let loc = error.location().spelling_location();
        assert_eq!(loc.line, 3);
        assert!(error.to_string().starts_with("diag.c:3:"), "{error}");
        assert!(error.severity().is_error());

        let warning = diagnostics
            .iter()
            .find(|d| d.severity() == DiagnosticSeverity::Warning)
            .expect("-Wall reports the unused variable");
        let option = warning.option().expect("warning has a flag");
        assert_eq!(option.enable, "-Wunused-variable");
        assert_eq!(option.disable, "-Wno-unused-variable");
        assert!(!warning.category_text().is_empty());
    }

    #[test]
    fn fix_its_carry_replacements() {
        let index = Index::new(false, false);
        let source = "struct point { int x; };\nint get(struct point *p) { return p.x; }\n";
        let unsaved: UnsavedFiles = [("fixit.c", source)].into_iter().collect();
        let tu = index.parse(Some("fixit.c"), &[], &unsaved, TranslationUnitFlags::NONE).unwrap();

        let fix_its: Vec<String> = tu
            .diagnostics()
            .iter()
            .flat_map(|d| d.fix_its())
            .map(|f| f.replacement)
            .collect();
        assert!(fix_its.iter().any(|r| r == "->"), "{fix_its:?}");
    }

    #[test]
    fn ranges_cover_both_operands() {
        let index = Index::new(false, false);
        let source = "struct s { int a; } v;\nint g(void) { return v + 1; }\n";
        let unsaved: UnsavedFiles = [("operands.c", source)].into_iter().collect();
        let tu = index.parse(Some("operands.c"), &[], &unsaved, TranslationUnitFlags::NONE).unwrap();

        let diagnostics = tu.diagnostics();
        let error = diagnostics
            .iter()
            .find(|d| d.spelling().starts_with("invalid operands"))
            .unwrap_or_else(|| panic!("no operand error in {diagnostics:?}"));
        let columns: Vec<(u32, u32)> = error
            .ranges()
            .iter()
            .map(|r| {
                let start = r.start().spelling_location();
                (start.line, start.column)
            })
            .collect();
        assert_eq!(columns, [(2, 22), (2, 26)]);

        assert_ne!(error.category(), 0);
        assert_eq!(error.category_text(), "Semantic Issue");
    }

    #[test]
    fn display_options_from_libclang() {
        let options = DiagnosticDisplayOptions::default();
        assert!(options.contains(DiagnosticDisplayOptions::SOURCE_LOCATION));
        let minimal = DiagnosticDisplayOptions::empty();
        assert_ne!(minimal, options);
    }
}
