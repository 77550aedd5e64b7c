//! Source locations, ranges and files.

use std::marker::PhantomData;
use std::os::raw::c_uint;
use std::ptr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::cxstring;
use crate::error::{ClangError, Result};
use crate::ffi;

/// A file known to a translation unit.
#[derive(Clone, Copy)]
pub struct File<'tu> {
    pub(crate) raw: ffi::CXFile,
    _tu: PhantomData<&'tu ()>,
}

impl<'tu> File<'tu> {
    pub(crate) fn from_raw(raw: ffi::CXFile) -> Option<Self> {
        if raw.is_null() {
            None
        } else {
            Some(File { raw, _tu: PhantomData })
        }
    }

    /// The complete file and path name.
    pub fn name(&self) -> String {
        cxstring::take(unsafe { ffi::clang_getFileName(self.raw) })
    }

    /// Last modification time, as libclang saw it when parsing.
    pub fn modification_time(&self) -> SystemTime {
        let secs = unsafe { ffi::clang_getFileTime(self.raw) };
        match u64::try_from(secs) {
            Ok(secs) => UNIX_EPOCH + Duration::from_secs(secs),
            Err(_) => UNIX_EPOCH,
        }
    }

    /// Identifier that stays the same for a file across translation units.
    pub fn unique_id(&self) -> Result<FileUniqueId> {
        let mut id = ffi::CXFileUniqueID::default();
        let status = unsafe { ffi::clang_getFileUniqueID(self.raw, &mut id) };
        if status != 0 {
            return Err(ClangError::FileUniqueId { file: self.name() });
        }
        Ok(FileUniqueId(id.data))
    }
}

impl PartialEq for File<'_> {
    fn eq(&self, other: &Self) -> bool {
        unsafe { ffi::clang_File_isEqual(self.raw, other.raw) != 0 }
    }
}

impl Eq for File<'_> {}

impl std::fmt::Debug for File<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("File").field(&self.name()).finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileUniqueId(pub [u64; 3]);

/// A position decomposed into file, line, column and byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location<'tu> {
    pub file: Option<File<'tu>>,
    pub line: u32,
    pub column: u32,
    pub offset: u32,
}

/// A position as adjusted by `#line` directives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresumedLocation {
    pub filename: String,
    pub line: u32,
    pub column: u32,
}

type Decompose = unsafe extern "C" fn(
    ffi::CXSourceLocation,
    *mut ffi::CXFile,
    *mut c_uint,
    *mut c_uint,
    *mut c_uint,
);

/// A position within the source of a translation unit.
#[derive(Clone, Copy)]
pub struct SourceLocation<'tu> {
    pub(crate) raw: ffi::CXSourceLocation,
    _tu: PhantomData<&'tu ()>,
}

impl<'tu> SourceLocation<'tu> {
    pub(crate) fn from_raw(raw: ffi::CXSourceLocation) -> Self {
        SourceLocation { raw, _tu: PhantomData }
    }

    /// A location that refers to no particular source.
    pub fn null() -> Self {
        Self::from_raw(unsafe { ffi::clang_getNullLocation() })
    }

    pub fn is_null(&self) -> bool {
        *self == Self::null()
    }

    pub fn is_in_system_header(&self) -> bool {
        unsafe { ffi::clang_Location_isInSystemHeader(self.raw) != 0 }
    }

    pub fn is_from_main_file(&self) -> bool {
        unsafe { ffi::clang_Location_isFromMainFile(self.raw) != 0 }
    }

    /// Where the location ends up after macro expansion.
    pub fn expansion_location(&self) -> Location<'tu> {
        self.decompose(ffi::clang_getExpansionLocation)
    }

    pub fn presumed_location(&self) -> PresumedLocation {
        let mut filename = ffi::CXString { data: ptr::null(), private_flags: 0 };
        let mut line = 0;
        let mut column = 0;
        unsafe { ffi::clang_getPresumedLocation(self.raw, &mut filename, &mut line, &mut column) };
        PresumedLocation { filename: cxstring::take(filename), line, column }
    }

    /// Legacy name for [`expansion_location`](Self::expansion_location).
    pub fn instantiation_location(&self) -> Location<'tu> {
        self.decompose(ffi::clang_getInstantiationLocation)
    }

    pub fn spelling_location(&self) -> Location<'tu> {
        self.decompose(ffi::clang_getSpellingLocation)
    }

    pub fn file_location(&self) -> Location<'tu> {
        self.decompose(ffi::clang_getFileLocation)
    }

    fn decompose(&self, f: Decompose) -> Location<'tu> {
        let mut file = ptr::null_mut();
        let mut line = 0;
        let mut column = 0;
        let mut offset = 0;
        unsafe { f(self.raw, &mut file, &mut line, &mut column, &mut offset) };
        Location { file: File::from_raw(file), line, column, offset }
    }
}

impl PartialEq for SourceLocation<'_> {
    fn eq(&self, other: &Self) -> bool {
        unsafe { ffi::clang_equalLocations(self.raw, other.raw) != 0 }
    }
}

impl Eq for SourceLocation<'_> {}

impl std::fmt::Debug for SourceLocation<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let loc = self.spelling_location();
        f.debug_struct("SourceLocation")
            .field("file", &loc.file.map(|file| file.name()))
            .field("line", &loc.line)
            .field("column", &loc.column)
            .finish()
    }
}

/// A half-open range in the source of a translation unit.
#[derive(Clone, Copy)]
pub struct SourceRange<'tu> {
    pub(crate) raw: ffi::CXSourceRange,
    _tu: PhantomData<&'tu ()>,
}

impl<'tu> SourceRange<'tu> {
    pub(crate) fn from_raw(raw: ffi::CXSourceRange) -> Self {
        SourceRange { raw, _tu: PhantomData }
    }

    pub fn null() -> Self {
        Self::from_raw(unsafe { ffi::clang_getNullRange() })
    }

    pub fn new(begin: SourceLocation<'tu>, end: SourceLocation<'tu>) -> Self {
        Self::from_raw(unsafe { ffi::clang_getRange(begin.raw, end.raw) })
    }

    pub fn is_null(&self) -> bool {
        unsafe { ffi::clang_Range_isNull(self.raw) != 0 }
    }

    pub fn start(&self) -> SourceLocation<'tu> {
        SourceLocation::from_raw(unsafe { ffi::clang_getRangeStart(self.raw) })
    }

    pub fn end(&self) -> SourceLocation<'tu> {
        SourceLocation::from_raw(unsafe { ffi::clang_getRangeEnd(self.raw) })
    }
}

impl PartialEq for SourceRange<'_> {
    fn eq(&self, other: &Self) -> bool {
        unsafe { ffi::clang_equalRanges(self.raw, other.raw) != 0 }
    }
}

impl Eq for SourceRange<'_> {}

impl std::fmt::Debug for SourceRange<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceRange").field("start", &self.start()).field("end", &self.end()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::fs;

    use crate::cursor::Cursor;
    use crate::index::Index;
    use crate::translation_unit::{TranslationUnit, TranslationUnitFlags};
    use crate::unsaved::UnsavedFiles;

    fn top_level<'tu>(tu: &'tu TranslationUnit<'tu>, name: &str) -> Cursor<'tu> {
        tu.cursor()
            .children()
            .into_iter()
            .find(|c| c.spelling() == name)
            .unwrap_or_else(|| panic!("no declaration named {name}"))
    }

    fn parse_memory<'i>(index: &'i Index, name: &str, source: &str) -> TranslationUnit<'i> {
        let unsaved: UnsavedFiles = [(name, source)].into_iter().collect();
        index.parse(Some(name), &[], &unsaved, TranslationUnitFlags::NONE).unwrap()
    }

    #[test]
    fn null_location_and_range() {
        let loc = SourceLocation::null();
        assert!(loc.is_null());
        assert!(!loc.is_from_main_file());
        let loc = loc.spelling_location();
        assert!(loc.file.is_none());
        assert_eq!((loc.line, loc.column, loc.offset), (0, 0, 0));

        let range = SourceRange::null();
        assert!(range.is_null());
        assert_eq!(range, SourceRange::new(SourceLocation::null(), SourceLocation::null()));
        assert!(range.start().is_null());
    }

    #[test]
    fn one_header_through_two_paths() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        let header = dir.path().join("a.h");
        fs::write(&header, "extern int from_a;\n").unwrap();
        let main = dir.path().join("main.c");
        fs::write(&main, "#include \"a.h\"\n#include \"sub/../a.h\"\nint main_value;\n").unwrap();

        let index = Index::new(false, false);
        let tu = index.parse_path(&main, &[], &UnsavedFiles::new(), TranslationUnitFlags::NONE).unwrap();
        let direct = tu.file(&header).unwrap().expect("a.h is known");
        let dotted = tu.file(dir.path().join("sub/../a.h")).unwrap().expect("a.h is known");
        let main_file = tu.file(&main).unwrap().expect("main file is known");

        assert_eq!(direct.unique_id().unwrap(), dotted.unique_id().unwrap());
        assert_eq!(direct, dotted);
        assert_ne!(direct, main_file);
        let ids: HashSet<FileUniqueId> =
            [direct, dotted, main_file].iter().map(|f| f.unique_id().unwrap()).collect();
        assert_eq!(ids.len(), 2);

        let modified = fs::metadata(&header).unwrap().modified().unwrap();
        let secs = modified.duration_since(UNIX_EPOCH).unwrap().as_secs();
        assert_eq!(direct.modification_time(), UNIX_EPOCH + Duration::from_secs(secs));
    }

    #[test]
    fn line_directive_moves_presumed_location() {
        let index = Index::new(false, false);
        let tu = parse_memory(&index, "lines.c", "int before;\n#line 100 \"x.c\"\nint after;\n");

        let after = top_level(&tu, "after").location();
        assert_eq!(after.presumed_location(), PresumedLocation { filename: "x.c".into(), line: 100, column: 5 });
        let spelled = after.spelling_location();
        assert_eq!((spelled.line, spelled.column), (3, 5));
        assert_eq!(spelled.file.map(|f| f.name()).as_deref(), Some("lines.c"));

        let before = top_level(&tu, "before").location().presumed_location();
        assert_eq!((before.filename.as_str(), before.line), ("lines.c", 1));
    }

    #[test]
    fn macro_locations_split_expansion_and_spelling() {
        let index = Index::new(false, false);
        let source = "#define DECLARE_FLAG int flag_from_macro\nDECLARE_FLAG;\n";
        let tu = parse_memory(&index, "macro.c", source);
        let loc = top_level(&tu, "flag_from_macro").location();

        let expansion = loc.expansion_location();
        assert_eq!((expansion.line, expansion.column), (2, 1));
        assert_eq!(loc.file_location(), expansion);
        assert_eq!(loc.instantiation_location(), expansion);

        let spelling = loc.spelling_location();
        assert_eq!((spelling.line, spelling.column), (1, 26));
        assert_eq!(spelling.file, expansion.file);
    }

    #[test]
    fn system_headers_are_flagged() {
        let dir = tempfile::tempdir().unwrap();
        let sys = dir.path().join("sys");
        fs::create_dir(&sys).unwrap();
        fs::write(sys.join("sys.h"), "int from_system;\n").unwrap();
        let main = dir.path().join("main.c");
        fs::write(&main, "#include <sys.h>\nint local;\n").unwrap();

        let index = Index::new(false, false);
        let sys_arg = sys.to_str().unwrap();
        let tu = index
            .parse_path(&main, &["-isystem", sys_arg], &UnsavedFiles::new(), TranslationUnitFlags::NONE)
            .unwrap();

        let system = top_level(&tu, "from_system").location();
        assert!(system.is_in_system_header());
        assert!(!system.is_from_main_file());
        let local = top_level(&tu, "local").location();
        assert!(!local.is_in_system_header());
        assert!(local.is_from_main_file());
    }
}
