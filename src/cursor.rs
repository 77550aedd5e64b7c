//! Cursors: references to entities in the AST, and the child visitor.

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::os::raw::{c_int, c_uint, c_void};
use std::panic::{self, AssertUnwindSafe};
use std::ptr;
use std::slice;

use bitflags::bitflags;
use tracing::warn;

use crate::availability::{AvailabilityKind, CursorAvailability, PlatformAvailability};
use crate::comment::Comment;
use crate::completion::CompletionString;
use crate::cursor_kind::CursorKind;
use crate::cxstring;
use crate::ffi;
use crate::module::Module;
use crate::source::{File, SourceLocation, SourceRange};
use crate::translation_unit::TranslationUnit;
use crate::types::{Type, TypeLayoutError};

/// What the visitor wants to happen after a cursor was visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChildVisit {
    /// Stop the whole traversal.
    Break,
    /// Go on with the next sibling without visiting the children.
    Continue,
    /// Visit the children of this cursor before the next sibling.
    Recurse,
}

impl ChildVisit {
    fn into_raw(self) -> ffi::CXChildVisitResult {
        match self {
            ChildVisit::Break => ffi::CXChildVisit_Break,
            ChildVisit::Continue => ffi::CXChildVisit_Continue,
            ChildVisit::Recurse => ffi::CXChildVisit_Recurse,
        }
    }
}

/// `CXLinkageKind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkageKind {
    Invalid,
    NoLinkage,
    Internal,
    UniqueExternal,
    External,
}

impl LinkageKind {
    fn from_raw(raw: c_uint) -> Self {
        match raw {
            1 => Self::NoLinkage,
            2 => Self::Internal,
            3 => Self::UniqueExternal,
            4 => Self::External,
            _ => Self::Invalid,
        }
    }
}

/// `CXLanguageKind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageKind {
    Invalid,
    C,
    ObjC,
    CPlusPlus,
}

impl LanguageKind {
    fn from_raw(raw: c_uint) -> Self {
        match raw {
            1 => Self::C,
            2 => Self::ObjC,
            3 => Self::CPlusPlus,
            _ => Self::Invalid,
        }
    }
}

/// `CX_CXXAccessSpecifier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessSpecifier {
    Invalid,
    Public,
    Protected,
    Private,
}

impl AccessSpecifier {
    fn from_raw(raw: c_uint) -> Self {
        match raw {
            1 => Self::Public,
            2 => Self::Protected,
            3 => Self::Private,
            _ => Self::Invalid,
        }
    }
}

bitflags! {
    /// `CXNameRefFlags` for [`Cursor::reference_name_range`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct NameRefFlags: u32 {
        /// Include the nested-name-specifier, e.g. `Foo::` in `x.Foo::y`.
        const WANT_QUALIFIER = 0x1;
        /// Include explicit template arguments, e.g. `<int>` in `x.f<int>`.
        const WANT_TEMPLATE_ARGS = 0x2;
        /// Treat multi-piece names such as `operator[]` as one piece.
        const WANT_SINGLE_PIECE = 0x4;
    }
}

/// A reference to an element in the AST of a translation unit.
#[derive(Clone, Copy)]
pub struct Cursor<'tu> {
    pub(crate) raw: ffi::CXCursor,
    tu: &'tu TranslationUnit<'tu>,
}

impl<'tu> Cursor<'tu> {
    pub(crate) fn from_raw(raw: ffi::CXCursor, tu: &'tu TranslationUnit<'tu>) -> Self {
        Cursor { raw, tu }
    }

    fn non_null(raw: ffi::CXCursor, tu: &'tu TranslationUnit<'tu>) -> Option<Self> {
        let cursor = Cursor::from_raw(raw, tu);
        if cursor.is_null() {
            None
        } else {
            Some(cursor)
        }
    }

    fn wrap_type(&self, raw: ffi::CXType) -> Type<'tu> {
        Type::from_raw(raw, self.tu)
    }

    /// The NULL cursor, which represents no entity.
    pub fn null(tu: &'tu TranslationUnit<'tu>) -> Self {
        Cursor::from_raw(unsafe { ffi::clang_getNullCursor() }, tu)
    }

    pub fn is_null(&self) -> bool {
        unsafe { ffi::clang_Cursor_isNull(self.raw) != 0 }
    }

    pub fn kind(&self) -> CursorKind {
        CursorKind(unsafe { ffi::clang_getCursorKind(self.raw) })
    }

    /// Name of the entity, e.g. `main` for a function declaration.
    pub fn spelling(&self) -> String {
        cxstring::take(unsafe { ffi::clang_getCursorSpelling(self.raw) })
    }

    /// Like [`spelling`](Self::spelling) with extra detail, such as the
    /// parameter list of a function: `main(int, char **)`.
    pub fn display_name(&self) -> String {
        cxstring::take(unsafe { ffi::clang_getCursorDisplayName(self.raw) })
    }

    pub fn linkage(&self) -> LinkageKind {
        LinkageKind::from_raw(unsafe { ffi::clang_getCursorLinkage(self.raw) })
    }

    pub fn availability(&self) -> AvailabilityKind {
        AvailabilityKind::from_raw(unsafe { ffi::clang_getCursorAvailability(self.raw) })
    }

    /// Availability attributes attached to the declaration, copied out of
    /// libclang.
    pub fn platform_availability(&self) -> CursorAvailability {
        let count = unsafe {
            ffi::clang_getCursorPlatformAvailability(
                self.raw,
                ptr::null_mut(),
                ptr::null_mut(),
                ptr::null_mut(),
                ptr::null_mut(),
                ptr::null_mut(),
                0,
            )
        };
        let capacity = usize::try_from(count).unwrap_or(0);
        let mut platforms: Vec<ffi::CXPlatformAvailability> = (0..capacity).map(|_| empty_availability()).collect();

        let mut always_deprecated: c_int = 0;
        let mut deprecated_message = empty_string();
        let mut always_unavailable: c_int = 0;
        let mut unavailable_message = empty_string();
        let filled = unsafe {
            ffi::clang_getCursorPlatformAvailability(
                self.raw,
                &mut always_deprecated,
                &mut deprecated_message,
                &mut always_unavailable,
                &mut unavailable_message,
                if capacity == 0 { ptr::null_mut() } else { platforms.as_mut_ptr() },
                capacity as c_int,
            )
        };
        let filled = usize::try_from(filled).unwrap_or(0).min(capacity);

        CursorAvailability {
            always_deprecated: always_deprecated != 0,
            deprecated_message: cxstring::take(deprecated_message),
            always_unavailable: always_unavailable != 0,
            unavailable_message: cxstring::take(unavailable_message),
            platforms: platforms[..filled]
                .iter_mut()
                .map(|raw| unsafe { PlatformAvailability::take(raw) })
                .collect(),
        }
    }

    pub fn language(&self) -> LanguageKind {
        LanguageKind::from_raw(unsafe { ffi::clang_getCursorLanguage(self.raw) })
    }

    /// The translation unit this cursor belongs to.
    pub fn translation_unit(&self) -> &'tu TranslationUnit<'tu> {
        self.tu
    }

    pub fn objc_type_encoding(&self) -> String {
        cxstring::take(unsafe { ffi::clang_getDeclObjCTypeEncoding(self.raw) })
    }

    /// The cursor that semantically contains this one, e.g. the class of an
    /// out-of-line method definition.
    pub fn semantic_parent(&self) -> Option<Cursor<'tu>> {
        Cursor::non_null(unsafe { ffi::clang_getCursorSemanticParent(self.raw) }, self.tu)
    }

    /// The cursor that lexically contains this one in the source.
    pub fn lexical_parent(&self) -> Option<Cursor<'tu>> {
        Cursor::non_null(unsafe { ffi::clang_getCursorLexicalParent(self.raw) }, self.tu)
    }

    /// Methods this method overrides.
    pub fn overridden_cursors(&self) -> Vec<Cursor<'tu>> {
        let mut raw: *mut ffi::CXCursor = ptr::null_mut();
        let mut count: c_uint = 0;
        unsafe { ffi::clang_getOverriddenCursors(self.raw, &mut raw, &mut count) };
        if raw.is_null() {
            return Vec::new();
        }
        let cursors = unsafe { slice::from_raw_parts(raw, count as usize) }
            .iter()
            .map(|c| Cursor::from_raw(*c, self.tu))
            .collect();
        unsafe { ffi::clang_disposeOverriddenCursors(raw) };
        cursors
    }

    /// For an inclusion directive, the file it includes.
    pub fn included_file(&self) -> Option<File<'tu>> {
        File::from_raw(unsafe { ffi::clang_getIncludedFile(self.raw) })
    }

    pub fn location(&self) -> SourceLocation<'tu> {
        SourceLocation::from_raw(unsafe { ffi::clang_getCursorLocation(self.raw) })
    }

    /// Source range covered by the entity.
    pub fn extent(&self) -> SourceRange<'tu> {
        SourceRange::from_raw(unsafe { ffi::clang_getCursorExtent(self.raw) })
    }

    pub fn cursor_type(&self) -> Type<'tu> {
        self.wrap_type(unsafe { ffi::clang_getCursorType(self.raw) })
    }

    pub fn typedef_underlying_type(&self) -> Type<'tu> {
        self.wrap_type(unsafe { ffi::clang_getTypedefDeclUnderlyingType(self.raw) })
    }

    pub fn enum_integer_type(&self) -> Type<'tu> {
        self.wrap_type(unsafe { ffi::clang_getEnumDeclIntegerType(self.raw) })
    }

    /// Value of an enum constant; `i64::MIN` for other cursors.
    pub fn enum_constant_value(&self) -> i64 {
        unsafe { ffi::clang_getEnumConstantDeclValue(self.raw) }
    }

    /// Value of an enum constant as unsigned; `u64::MAX` for other cursors.
    pub fn enum_constant_unsigned_value(&self) -> u64 {
        unsafe { ffi::clang_getEnumConstantDeclUnsignedValue(self.raw) }
    }

    /// Width of a bit field, `None` for other cursors.
    pub fn field_bit_width(&self) -> Option<u32> {
        u32::try_from(unsafe { ffi::clang_getFieldDeclBitWidth(self.raw) }).ok()
    }

    /// Number of arguments of a function or call, `None` for other cursors.
    pub fn num_arguments(&self) -> Option<u32> {
        u32::try_from(unsafe { ffi::clang_Cursor_getNumArguments(self.raw) }).ok()
    }

    pub fn argument(&self, index: u32) -> Option<Cursor<'tu>> {
        Cursor::non_null(unsafe { ffi::clang_Cursor_getArgument(self.raw, index) }, self.tu)
    }

    pub fn arguments(&self) -> Vec<Cursor<'tu>> {
        let n = self.num_arguments().unwrap_or(0);
        (0..n).filter_map(|i| self.argument(i)).collect()
    }

    pub fn result_type(&self) -> Type<'tu> {
        self.wrap_type(unsafe { ffi::clang_getCursorResultType(self.raw) })
    }

    pub fn is_bit_field(&self) -> bool {
        unsafe { ffi::clang_Cursor_isBitField(self.raw) != 0 }
    }

    pub fn is_virtual_base(&self) -> bool {
        unsafe { ffi::clang_isVirtualBase(self.raw) != 0 }
    }

    pub fn access_specifier(&self) -> AccessSpecifier {
        AccessSpecifier::from_raw(unsafe { ffi::clang_getCXXAccessSpecifier(self.raw) })
    }

    pub fn num_overloaded_decls(&self) -> u32 {
        unsafe { ffi::clang_getNumOverloadedDecls(self.raw) }
    }

    pub fn overloaded_decl(&self, index: u32) -> Option<Cursor<'tu>> {
        Cursor::non_null(unsafe { ffi::clang_getOverloadedDecl(self.raw, index) }, self.tu)
    }

    pub fn ib_outlet_collection_type(&self) -> Type<'tu> {
        self.wrap_type(unsafe { ffi::clang_getIBOutletCollectionType(self.raw) })
    }

    /// Unified Symbol Resolution string, stable across translation units.
    pub fn usr(&self) -> String {
        cxstring::take(unsafe { ffi::clang_getCursorUSR(self.raw) })
    }

    /// For a reference or expression, the entity it refers to.
    pub fn referenced(&self) -> Option<Cursor<'tu>> {
        Cursor::non_null(unsafe { ffi::clang_getCursorReferenced(self.raw) }, self.tu)
    }

    pub fn definition(&self) -> Option<Cursor<'tu>> {
        Cursor::non_null(unsafe { ffi::clang_getCursorDefinition(self.raw) }, self.tu)
    }

    pub fn is_definition(&self) -> bool {
        unsafe { ffi::clang_isCursorDefinition(self.raw) != 0 }
    }

    /// The canonical declaration among all redeclarations of an entity.
    pub fn canonical(&self) -> Cursor<'tu> {
        Cursor::from_raw(unsafe { ffi::clang_getCanonicalCursor(self.raw) }, self.tu)
    }

    pub fn is_dynamic_call(&self) -> bool {
        unsafe { ffi::clang_Cursor_isDynamicCall(self.raw) != 0 }
    }

    pub fn receiver_type(&self) -> Type<'tu> {
        self.wrap_type(unsafe { ffi::clang_Cursor_getReceiverType(self.raw) })
    }

    pub fn is_variadic(&self) -> bool {
        unsafe { ffi::clang_Cursor_isVariadic(self.raw) != 0 }
    }

    pub fn comment_range(&self) -> SourceRange<'tu> {
        SourceRange::from_raw(unsafe { ffi::clang_Cursor_getCommentRange(self.raw) })
    }

    pub fn raw_comment_text(&self) -> Option<String> {
        cxstring::take_non_empty(unsafe { ffi::clang_Cursor_getRawCommentText(self.raw) })
    }

    /// First paragraph of the documentation comment.
    pub fn brief_comment_text(&self) -> Option<String> {
        cxstring::take_non_empty(unsafe { ffi::clang_Cursor_getBriefCommentText(self.raw) })
    }

    pub fn parsed_comment(&self) -> Comment<'tu> {
        Comment::from_raw(unsafe { ffi::clang_Cursor_getParsedComment(self.raw) })
    }

    /// For a module import declaration, the imported module.
    pub fn module(&self) -> Option<Module<'tu>> {
        Module::from_raw(unsafe { ffi::clang_Cursor_getModule(self.raw) })
    }

    pub fn is_pure_virtual_method(&self) -> bool {
        unsafe { ffi::clang_CXXMethod_isPureVirtual(self.raw) != 0 }
    }

    pub fn is_static_method(&self) -> bool {
        unsafe { ffi::clang_CXXMethod_isStatic(self.raw) != 0 }
    }

    pub fn is_virtual_method(&self) -> bool {
        unsafe { ffi::clang_CXXMethod_isVirtual(self.raw) != 0 }
    }

    /// Kind of the declarations a template produces when instantiated.
    pub fn template_kind(&self) -> CursorKind {
        CursorKind(unsafe { ffi::clang_getTemplateCursorKind(self.raw) })
    }

    pub fn specialized_template(&self) -> Option<Cursor<'tu>> {
        Cursor::non_null(unsafe { ffi::clang_getSpecializedCursorTemplate(self.raw) }, self.tu)
    }

    pub fn reference_name_range(&self, flags: NameRefFlags, piece: u32) -> SourceRange<'tu> {
        SourceRange::from_raw(unsafe { ffi::clang_getCursorReferenceNameRange(self.raw, flags.bits(), piece) })
    }

    pub fn completion_string(&self) -> Option<CompletionString<'tu>> {
        CompletionString::from_raw(unsafe { ffi::clang_getCursorCompletionString(self.raw) })
    }

    /// Offset of a field in bits from the start of its record.
    pub fn offset_of_field(&self) -> Result<u64, TypeLayoutError> {
        TypeLayoutError::check(unsafe { ffi::clang_Cursor_getOffsetOfField(self.raw) })
    }

    /// Runs `visitor` over the children of this cursor.
    ///
    /// The callback receives each cursor and its parent; its return value
    /// decides how libclang continues. Returns `false` if the traversal was
    /// stopped with [`ChildVisit::Break`].
    ///
    /// A panic in `visitor` stops the traversal and is re-raised once
    /// libclang has returned.
    pub fn visit_children<F>(&self, visitor: F) -> bool
    where
        F: FnMut(Cursor<'tu>, Cursor<'tu>) -> ChildVisit,
    {
        let mut state = VisitState { tu: self.tu, visitor, panic: None };
        let broken = unsafe {
            ffi::clang_visitChildren(
                self.raw,
                visit_trampoline::<F>,
                &mut state as *mut VisitState<'tu, F> as *mut c_void,
            )
        };
        if let Some(payload) = state.panic.take() {
            panic::resume_unwind(payload);
        }
        broken == 0
    }

    /// The immediate children of this cursor.
    pub fn children(&self) -> Vec<Cursor<'tu>> {
        let mut out = Vec::new();
        self.visit_children(|cursor, _| {
            out.push(cursor);
            ChildVisit::Continue
        });
        out
    }
}

fn empty_string() -> ffi::CXString {
    ffi::CXString { data: ptr::null(), private_flags: 0 }
}

fn empty_availability() -> ffi::CXPlatformAvailability {
    ffi::CXPlatformAvailability {
        Platform: empty_string(),
        Introduced: ffi::CXVersion::default(),
        Deprecated: ffi::CXVersion::default(),
        Obsoleted: ffi::CXVersion::default(),
        Unavailable: 0,
        Message: empty_string(),
    }
}

struct VisitState<'tu, F> {
    tu: &'tu TranslationUnit<'tu>,
    visitor: F,
    panic: Option<Box<dyn Any + Send>>,
}

extern "C" fn visit_trampoline<'tu, F>(
    cursor: ffi::CXCursor,
    parent: ffi::CXCursor,
    data: ffi::CXClientData,
) -> ffi::CXChildVisitResult
where
    F: FnMut(Cursor<'tu>, Cursor<'tu>) -> ChildVisit,
{
    let state = unsafe { &mut *(data as *mut VisitState<'tu, F>) };
    let tu = state.tu;
    let visitor = &mut state.visitor;
    match panic::catch_unwind(AssertUnwindSafe(|| {
        visitor(Cursor::from_raw(cursor, tu), Cursor::from_raw(parent, tu))
    })) {
        Ok(action) => action.into_raw(),
        Err(payload) => {
            warn!("cursor visitor panicked, stopping traversal");
            state.panic = Some(payload);
            ffi::CXChildVisit_Break
        }
    }
}

impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        unsafe { ffi::clang_equalCursors(self.raw, other.raw) != 0 }
    }
}

impl Eq for Cursor<'_> {}

impl Hash for Cursor<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        unsafe { ffi::clang_hashCursor(self.raw) }.hash(state);
    }
}

impl fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("kind", &self.kind())
            .field("spelling", &self.spelling())
            .field("location", &self.location())
            .finish()
    }
}

/// A set of cursors, hashed and compared the way libclang does it.
pub struct CursorSet<'tu> {
    ptr: ffi::CXCursorSet,
    _tu: PhantomData<&'tu ()>,
}

impl<'tu> CursorSet<'tu> {
    pub fn new() -> Self {
        CursorSet { ptr: unsafe { ffi::clang_createCXCursorSet() }, _tu: PhantomData }
    }

    pub fn contains(&self, cursor: &Cursor<'tu>) -> bool {
        unsafe { ffi::clang_CXCursorSet_contains(self.ptr, cursor.raw) != 0 }
    }

    /// Returns `true` if the cursor was not in the set yet.
    pub fn insert(&mut self, cursor: &Cursor<'tu>) -> bool {
        unsafe { ffi::clang_CXCursorSet_insert(self.ptr, cursor.raw) != 0 }
    }
}

impl Default for CursorSet<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CursorSet<'_> {
    fn drop(&mut self) {
        unsafe { ffi::clang_disposeCXCursorSet(self.ptr) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::availability::Version;
    use crate::completion::CompletionChunkKind;
    use crate::index::Index;
    use crate::translation_unit::TranslationUnitFlags;
    use crate::types::TypeKind;
    use crate::unsaved::UnsavedFiles;

    const C_SOURCE: &str = "\
struct flags { unsigned ready : 1; unsigned mode : 3; int count; };
enum color { RED, GREEN = 5, BLUE };
static int hidden;
int sum(int a, int b) { return a + b; }
int twice(int x) { return sum(x, x); }
__attribute__((deprecated(\"use sum\"))) int old_sum(int a, int b);
";

    const CXX_SOURCE: &str = "\
namespace geo {
class Shape {
public:
    virtual ~Shape();
    virtual double area() const = 0;
    static int count();
protected:
    int id;
private:
    int secret;
};
class Circle : public Shape {
public:
    double area() const override;
};
double Circle::area() const { return 3.14; }
}
";

    fn parse<'i>(index: &'i Index, name: &str, source: &str) -> TranslationUnit<'i> {
        let unsaved: UnsavedFiles = [(name, source)].into_iter().collect();
        index.parse(Some(name), &[], &unsaved, TranslationUnitFlags::NONE).unwrap()
    }

    fn find<'tu>(root: Cursor<'tu>, kind: CursorKind, name: &str) -> Cursor<'tu> {
        let mut found = None;
        root.visit_children(|cursor, _| {
            if cursor.kind() == kind && cursor.spelling() == name {
                found = Some(cursor);
                return ChildVisit::Break;
            }
            ChildVisit::Recurse
        });
        found.unwrap_or_else(|| panic!("no {kind:?} named {name}"))
    }

    #[test]
    fn break_stops_the_traversal() {
        let index = Index::new(false, false);
        let tu = parse(&index, "visit.c", C_SOURCE);

        let mut visited = 0;
        let finished = tu.cursor().visit_children(|_, _| {
            visited += 1;
            ChildVisit::Break
        });
        assert!(!finished);
        assert_eq!(visited, 1);

        let finished = tu.cursor().visit_children(|_, _| ChildVisit::Continue);
        assert!(finished);
    }

    #[test]
    fn recurse_visits_nested_cursors_with_parents() {
        let index = Index::new(false, false);
        let tu = parse(&index, "visit.c", C_SOURCE);

        let mut fields = Vec::new();
        tu.cursor().visit_children(|cursor, parent| {
            if cursor.kind() == CursorKind::FIELD_DECL {
                assert_eq!(parent.kind(), CursorKind::STRUCT_DECL);
                fields.push(cursor.spelling());
            }
            ChildVisit::Recurse
        });
        assert_eq!(fields, ["ready", "mode", "count"]);

        let top: Vec<String> = tu.cursor().children().iter().map(|c| c.spelling()).collect();
        assert_eq!(top, ["flags", "color", "hidden", "sum", "twice", "old_sum"]);
    }

    #[test]
    fn visitor_panic_is_propagated() {
        let index = Index::new(false, false);
        let tu = parse(&index, "visit.c", C_SOURCE);
        let root = tu.cursor();

        let mut calls = 0;
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            root.visit_children(|_, _| {
                calls += 1;
                panic!("boom");
            })
        }));
        let payload = result.expect_err("panic must escape visit_children");
        assert_eq!(payload.downcast_ref::<&str>(), Some(&"boom"));
        assert_eq!(calls, 1);
        // the translation unit is still usable afterwards
        assert_eq!(root.children().len(), 6);
    }

    #[test]
    fn declarations_and_references() {
        let index = Index::new(false, false);
        let tu = parse(&index, "visit.c", C_SOURCE);
        let root = tu.cursor();

        let sum = find(root, CursorKind::FUNCTION_DECL, "sum");
        assert!(sum.is_definition());
        assert_eq!(sum.display_name(), "sum(int, int)");
        assert_eq!(sum.usr(), "c:@F@sum");
        assert_eq!(sum.linkage(), LinkageKind::External);
        assert_eq!(sum.language(), LanguageKind::C);
        assert_eq!(sum.num_arguments(), Some(2));
        let names: Vec<String> = sum.arguments().iter().map(|a| a.spelling()).collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(sum.result_type().kind(), TypeKind::INT);
        assert!(sum.semantic_parent().is_some_and(|p| p.kind().is_translation_unit()));
        assert_eq!(sum.canonical(), sum);
        assert_eq!(sum.translation_unit().spelling(), "visit.c");

        let call = find(find(root, CursorKind::FUNCTION_DECL, "twice"), CursorKind::CALL_EXPR, "sum");
        assert_eq!(call.num_arguments(), Some(2));
        assert_eq!(call.referenced(), Some(sum));
        assert_eq!(call.referenced().and_then(|c| c.definition()), Some(sum));

        let hidden = find(root, CursorKind::VAR_DECL, "hidden");
        assert_eq!(hidden.linkage(), LinkageKind::Internal);
        assert_eq!(hidden.num_arguments(), None);

        assert!(Cursor::null(&tu).is_null());
        assert!(root.semantic_parent().is_none());
    }

    #[test]
    fn fields_and_enums() {
        let index = Index::new(false, false);
        let tu = parse(&index, "visit.c", C_SOURCE);
        let root = tu.cursor();

        let mode = find(root, CursorKind::FIELD_DECL, "mode");
        assert!(mode.is_bit_field());
        assert_eq!(mode.field_bit_width(), Some(3));
        assert_eq!(mode.offset_of_field(), Ok(1));
        let count = find(root, CursorKind::FIELD_DECL, "count");
        assert!(!count.is_bit_field());
        assert_eq!(count.field_bit_width(), None);

        let color = find(root, CursorKind::ENUM_DECL, "color");
        assert_eq!(color.enum_integer_type().kind(), TypeKind::UINT);
        let values: Vec<i64> = color.children().iter().map(|c| c.enum_constant_value()).collect();
        assert_eq!(values, [0, 5, 6]);
        assert_eq!(find(root, CursorKind::ENUM_CONSTANT_DECL, "BLUE").enum_constant_unsigned_value(), 6);
    }

    #[test]
    fn deprecation_is_reported() {
        let index = Index::new(false, false);
        let tu = parse(&index, "visit.c", C_SOURCE);
        let old = find(tu.cursor(), CursorKind::FUNCTION_DECL, "old_sum");
        assert_eq!(old.availability(), AvailabilityKind::Deprecated);
        let availability = old.platform_availability();
        assert!(availability.always_deprecated);
        assert_eq!(availability.deprecated_message, "use sum");
        assert!(!availability.always_unavailable);

        let sum = find(tu.cursor(), CursorKind::FUNCTION_DECL, "sum");
        assert_eq!(sum.availability(), AvailabilityKind::Available);
        assert_eq!(sum.platform_availability(), CursorAvailability::default());
    }

    #[test]
    fn cxx_methods() {
        let index = Index::new(false, false);
        let tu = parse(&index, "shapes.cpp", CXX_SOURCE);
        let root = tu.cursor();

        let shape = find(root, CursorKind::CLASS_DECL, "Shape");
        let area = find(shape, CursorKind::CXX_METHOD, "area");
        assert!(area.is_virtual_method());
        assert!(area.is_pure_virtual_method());
        assert!(!area.is_static_method());
        assert!(find(shape, CursorKind::CXX_METHOD, "count").is_static_method());
        assert_eq!(area.access_specifier(), AccessSpecifier::Public);
        assert_eq!(find(shape, CursorKind::FIELD_DECL, "id").access_specifier(), AccessSpecifier::Protected);
        assert_eq!(find(shape, CursorKind::FIELD_DECL, "secret").access_specifier(), AccessSpecifier::Private);
        assert_eq!(shape.semantic_parent().map(|p| p.kind()), Some(CursorKind::NAMESPACE));
        assert_eq!(area.language(), LanguageKind::CPlusPlus);

        let circle = find(root, CursorKind::CLASS_DECL, "Circle");
        let base = circle
            .children()
            .into_iter()
            .find(|c| c.kind() == CursorKind::CXX_BASE_SPECIFIER)
            .expect("Circle has a base class");
        assert_eq!(base.referenced(), Some(shape));
        assert!(!base.is_virtual_base());
        assert_eq!(base.access_specifier(), AccessSpecifier::Public);

        let circle_area = find(circle, CursorKind::CXX_METHOD, "area");
        assert_eq!(circle_area.overridden_cursors(), [area]);
        assert!(area.overridden_cursors().is_empty());

        // the out-of-line definition lives lexically in the namespace
        let mut definitions = Vec::new();
        root.visit_children(|cursor, _| {
            if cursor.kind() == CursorKind::CXX_METHOD && cursor.is_definition() {
                definitions.push(cursor);
            }
            ChildVisit::Recurse
        });
        assert_eq!(definitions.len(), 1);
        let out_of_line = definitions[0];
        assert_eq!(out_of_line.semantic_parent(), Some(circle));
        assert_eq!(out_of_line.lexical_parent().map(|p| p.kind()), Some(CursorKind::NAMESPACE));
        assert_eq!(out_of_line.canonical(), circle_area);
        assert_eq!(circle_area.definition(), Some(out_of_line));
    }

    #[test]
    fn cursor_set_tracks_membership() {
        let index = Index::new(false, false);
        let tu = parse(&index, "visit.c", C_SOURCE);
        let children = tu.cursor().children();

        let mut set = CursorSet::new();
        assert!(set.insert(&children[0]));
        assert!(!set.insert(&children[0]));
        assert!(set.contains(&children[0]));
        assert!(!set.contains(&children[1]));

        let unique: std::collections::HashSet<Cursor<'_>> = children.iter().copied().chain(children.iter().copied()).collect();
        assert_eq!(unique.len(), children.len());
    }

    const TEMPLATE_SOURCE: &str = "\
template <typename T> struct box { T value; };
template <typename T> T identity(T v) { return v; }
template <> struct box<int> { int value; int extra; };
namespace n { void used(int); void used(char); }
using n::used;
struct S { int member; int get() const { return member; } };
/// Counts things.
int counted();
int call() { S s; return s.member + identity(1); }
";

    const OBJC_SOURCE: &str = "\
@interface Counter
- (int)step:(int)by;
+ (id)make;
@end
int counter;
struct pt { int x; char y; } origin;
void drive(Counter *c) { [c step:2]; [Counter make]; }
";

    #[test]
    fn platform_availability_is_copied_out() {
        let index = Index::new(false, false);
        let source = "int old_api(void) __attribute__((availability(macos,introduced=10.7,deprecated=10.9,message=\"m\")));\n";
        let tu = parse(&index, "avail.c", source);
        let availability = find(tu.cursor(), CursorKind::FUNCTION_DECL, "old_api").platform_availability();
        assert!(!availability.always_deprecated);
        assert!(!availability.always_unavailable);
        assert_eq!(availability.platforms.len(), 1);

        let mac = &availability.platforms[0];
        assert_eq!(mac.platform, "macos");
        assert_eq!(mac.introduced, Version { major: 10, minor: 7, subminor: -1 });
        assert_eq!(mac.deprecated.major(), Some(10));
        assert_eq!(mac.deprecated.minor(), Some(9));
        assert_eq!(mac.deprecated.to_string(), "10.9");
        assert!(mac.obsoleted.is_absent());
        assert!(!mac.unavailable);
        assert_eq!(mac.message, "m");
    }

    #[test]
    fn templates_and_specializations() {
        let index = Index::new(false, false);
        let tu = parse(&index, "templates.cpp", TEMPLATE_SOURCE);
        let root = tu.cursor();

        let primary = find(root, CursorKind::CLASS_TEMPLATE, "box");
        assert_eq!(primary.template_kind(), CursorKind::STRUCT_DECL);
        let identity = find(root, CursorKind::FUNCTION_TEMPLATE, "identity");
        assert_eq!(identity.template_kind(), CursorKind::FUNCTION_DECL);

        let specialization = find(root, CursorKind::STRUCT_DECL, "box");
        assert_eq!(specialization.display_name(), "box<int>");
        assert_eq!(specialization.specialized_template(), Some(primary));
        assert_eq!(find(root, CursorKind::STRUCT_DECL, "S").specialized_template(), None);
    }

    #[test]
    fn using_declaration_lists_overloads() {
        let index = Index::new(false, false);
        let tu = parse(&index, "templates.cpp", TEMPLATE_SOURCE);
        let using = find(tu.cursor(), CursorKind::USING_DECLARATION, "used");
        assert_eq!(using.num_overloaded_decls(), 2);
        for i in 0..2 {
            let decl = using.overloaded_decl(i).expect("overload in range");
            assert_eq!(decl.kind(), CursorKind::FUNCTION_DECL);
            assert_eq!(decl.spelling(), "used");
        }
        assert!(using.overloaded_decl(2).is_none());
        assert_eq!(find(tu.cursor(), CursorKind::FUNCTION_DECL, "counted").num_overloaded_decls(), 0);
    }

    #[test]
    fn member_reference_name_range() {
        let index = Index::new(false, false);
        let tu = parse(&index, "templates.cpp", TEMPLATE_SOURCE);
        let call = find(tu.cursor(), CursorKind::FUNCTION_DECL, "call");
        let member = find(call, CursorKind::MEMBER_REF_EXPR, "member");

        let range = member.reference_name_range(NameRefFlags::empty(), 0);
        assert!(!range.is_null());
        let start = range.start().spelling_location();
        assert_eq!((start.line, start.column), (9, 28));
        let tokens = tu.tokenize(range);
        assert_eq!(tokens.get(0).map(|t| t.spelling()).as_deref(), Some("member"));
    }

    #[test]
    fn comment_range_and_completion_string() {
        let index = Index::new(false, false);
        let tu = parse(&index, "templates.cpp", TEMPLATE_SOURCE);
        let counted = find(tu.cursor(), CursorKind::FUNCTION_DECL, "counted");

        let range = counted.comment_range();
        assert!(!range.is_null());
        let (start, end) = (range.start().spelling_location(), range.end().spelling_location());
        assert_eq!((start.line, start.column), (7, 1));
        assert_eq!(end.line, 7);
        assert!(find(tu.cursor(), CursorKind::FUNCTION_DECL, "call").comment_range().is_null());

        let completion = counted.completion_string().expect("declarations complete");
        assert_eq!(completion.typed_text().as_deref(), Some("counted"));
        let chunks = completion.chunks();
        assert_eq!(chunks[0].kind(), Some(CompletionChunkKind::ResultType));
        assert_eq!(chunks[0].text(), "int");
    }

    #[test]
    fn objc_encodings_and_messages() {
        let index = Index::new(false, false);
        let tu = parse(&index, "messages.m", OBJC_SOURCE);
        let root = tu.cursor();

        assert_eq!(find(root, CursorKind::VAR_DECL, "counter").objc_type_encoding(), "i");
        assert_eq!(find(root, CursorKind::VAR_DECL, "origin").objc_type_encoding(), "{pt=ic}");
        let step = find(root, CursorKind::OBJC_INSTANCE_METHOD_DECL, "step:");
        assert!(step.objc_type_encoding().starts_with('i'), "{}", step.objc_type_encoding());

        let drive = find(root, CursorKind::FUNCTION_DECL, "drive");
        let instance = find(drive, CursorKind::OBJC_MESSAGE_EXPR, "step:");
        assert!(instance.is_dynamic_call());
        let receiver = instance.receiver_type();
        assert_eq!(receiver.kind(), TypeKind::OBJC_OBJECT_POINTER);
        assert_eq!(receiver.pointee_type().spelling(), "Counter");

        let class = find(drive, CursorKind::OBJC_MESSAGE_EXPR, "make");
        assert!(!class.is_dynamic_call());
        assert_eq!(class.receiver_type().spelling(), "Counter");
    }
}
