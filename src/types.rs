//! Types as libclang sees them (`CXType`) and their classification enums.

use std::ffi::CString;
use std::fmt;
use std::os::raw::c_uint;

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::cursor::Cursor;
use crate::cxstring;
use crate::ffi;
use crate::translation_unit::TranslationUnit;

/// `CXTypeKind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeKind(pub u32);

impl TypeKind {
    pub const INVALID: TypeKind = TypeKind(0);
    pub const UNEXPOSED: TypeKind = TypeKind(1);

    // builtin types
    pub const VOID: TypeKind = TypeKind(2);
    pub const BOOL: TypeKind = TypeKind(3);
    pub const CHAR_U: TypeKind = TypeKind(4);
    pub const UCHAR: TypeKind = TypeKind(5);
    pub const CHAR16: TypeKind = TypeKind(6);
    pub const CHAR32: TypeKind = TypeKind(7);
    pub const USHORT: TypeKind = TypeKind(8);
    pub const UINT: TypeKind = TypeKind(9);
    pub const ULONG: TypeKind = TypeKind(10);
    pub const ULONG_LONG: TypeKind = TypeKind(11);
    pub const UINT128: TypeKind = TypeKind(12);
    pub const CHAR_S: TypeKind = TypeKind(13);
    pub const SCHAR: TypeKind = TypeKind(14);
    pub const WCHAR: TypeKind = TypeKind(15);
    pub const SHORT: TypeKind = TypeKind(16);
    pub const INT: TypeKind = TypeKind(17);
    pub const LONG: TypeKind = TypeKind(18);
    pub const LONG_LONG: TypeKind = TypeKind(19);
    pub const INT128: TypeKind = TypeKind(20);
    pub const FLOAT: TypeKind = TypeKind(21);
    pub const DOUBLE: TypeKind = TypeKind(22);
    pub const LONG_DOUBLE: TypeKind = TypeKind(23);
    pub const NULL_PTR: TypeKind = TypeKind(24);
    pub const OVERLOAD: TypeKind = TypeKind(25);
    pub const DEPENDENT: TypeKind = TypeKind(26);
    pub const OBJC_ID: TypeKind = TypeKind(27);
    pub const OBJC_CLASS: TypeKind = TypeKind(28);
    pub const OBJC_SEL: TypeKind = TypeKind(29);
    pub const FLOAT128: TypeKind = TypeKind(30);
    pub const HALF: TypeKind = TypeKind(31);
    pub const FLOAT16: TypeKind = TypeKind(32);
    pub const FIRST_BUILTIN: TypeKind = TypeKind(2);

    pub const COMPLEX: TypeKind = TypeKind(100);
    pub const POINTER: TypeKind = TypeKind(101);
    pub const BLOCK_POINTER: TypeKind = TypeKind(102);
    pub const LVALUE_REFERENCE: TypeKind = TypeKind(103);
    pub const RVALUE_REFERENCE: TypeKind = TypeKind(104);
    pub const RECORD: TypeKind = TypeKind(105);
    pub const ENUM: TypeKind = TypeKind(106);
    pub const TYPEDEF: TypeKind = TypeKind(107);
    pub const OBJC_INTERFACE: TypeKind = TypeKind(108);
    pub const OBJC_OBJECT_POINTER: TypeKind = TypeKind(109);
    pub const FUNCTION_NO_PROTO: TypeKind = TypeKind(110);
    pub const FUNCTION_PROTO: TypeKind = TypeKind(111);
    pub const CONSTANT_ARRAY: TypeKind = TypeKind(112);
    pub const VECTOR: TypeKind = TypeKind(113);
    pub const INCOMPLETE_ARRAY: TypeKind = TypeKind(114);
    pub const VARIABLE_ARRAY: TypeKind = TypeKind(115);
    pub const DEPENDENT_SIZED_ARRAY: TypeKind = TypeKind(116);
    pub const MEMBER_POINTER: TypeKind = TypeKind(117);
    pub const AUTO: TypeKind = TypeKind(118);
    pub const ELABORATED: TypeKind = TypeKind(119);

    pub fn spelling(self) -> String {
        cxstring::take(unsafe { ffi::clang_getTypeKindSpelling(self.0) })
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.spelling())
    }
}

impl Serialize for TypeKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.spelling())
    }
}

/// `CXCallingConv`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallingConv {
    Default,
    C,
    X86StdCall,
    X86FastCall,
    X86ThisCall,
    X86Pascal,
    Aapcs,
    AapcsVfp,
    X86RegCall,
    IntelOclBicc,
    Win64,
    X86_64SysV,
    X86VectorCall,
    Swift,
    PreserveMost,
    PreserveAll,
    AArch64VectorCall,
    Invalid,
    Unexposed,
    Other(u32),
}

impl CallingConv {
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => Self::Default,
            1 => Self::C,
            2 => Self::X86StdCall,
            3 => Self::X86FastCall,
            4 => Self::X86ThisCall,
            5 => Self::X86Pascal,
            6 => Self::Aapcs,
            7 => Self::AapcsVfp,
            8 => Self::X86RegCall,
            9 => Self::IntelOclBicc,
            10 => Self::Win64,
            11 => Self::X86_64SysV,
            12 => Self::X86VectorCall,
            13 => Self::Swift,
            14 => Self::PreserveMost,
            15 => Self::PreserveAll,
            16 => Self::AArch64VectorCall,
            100 => Self::Invalid,
            200 => Self::Unexposed,
            other => Self::Other(other),
        }
    }
}

/// `CXRefQualifierKind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefQualifierKind {
    None,
    LValue,
    RValue,
}

impl RefQualifierKind {
    fn from_raw(raw: c_uint) -> Self {
        match raw {
            1 => Self::LValue,
            2 => Self::RValue,
            _ => Self::None,
        }
    }
}

/// Why a size, alignment or offset query failed (`CXTypeLayoutError`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum TypeLayoutError {
    #[error("invalid type")]
    Invalid,
    #[error("incomplete type")]
    Incomplete,
    #[error("dependent type")]
    Dependent,
    #[error("type is not a constant size type")]
    NotConstantSize,
    #[error("field name is not valid for this record")]
    InvalidFieldName,
    #[error("type is undeduced")]
    Undeduced,
    #[error("unknown layout error {0}")]
    Unknown(i64),
}

impl TypeLayoutError {
    pub(crate) fn check(value: i64) -> Result<u64, TypeLayoutError> {
        match value {
            -1 => Err(Self::Invalid),
            -2 => Err(Self::Incomplete),
            -3 => Err(Self::Dependent),
            -4 => Err(Self::NotConstantSize),
            -5 => Err(Self::InvalidFieldName),
            -6 => Err(Self::Undeduced),
            v if v < 0 => Err(Self::Unknown(v)),
            v => Ok(v as u64),
        }
    }
}

/// The type of an element in the AST.
#[derive(Clone, Copy)]
pub struct Type<'tu> {
    pub(crate) raw: ffi::CXType,
    pub(crate) tu: &'tu TranslationUnit<'tu>,
}

impl<'tu> Type<'tu> {
    pub(crate) fn from_raw(raw: ffi::CXType, tu: &'tu TranslationUnit<'tu>) -> Self {
        Type { raw, tu }
    }

    pub fn kind(&self) -> TypeKind {
        TypeKind(self.raw.kind)
    }

    /// Pretty-printed type, e.g. `const char *`.
    pub fn spelling(&self) -> String {
        cxstring::take(unsafe { ffi::clang_getTypeSpelling(self.raw) })
    }

    /// The underlying type with all typedefs resolved.
    pub fn canonical_type(&self) -> Type<'tu> {
        self.wrap(unsafe { ffi::clang_getCanonicalType(self.raw) })
    }

    pub fn is_const_qualified(&self) -> bool {
        unsafe { ffi::clang_isConstQualifiedType(self.raw) != 0 }
    }

    pub fn is_volatile_qualified(&self) -> bool {
        unsafe { ffi::clang_isVolatileQualifiedType(self.raw) != 0 }
    }

    pub fn is_restrict_qualified(&self) -> bool {
        unsafe { ffi::clang_isRestrictQualifiedType(self.raw) != 0 }
    }

    /// For pointer types, the type pointed to.
    pub fn pointee_type(&self) -> Type<'tu> {
        self.wrap(unsafe { ffi::clang_getPointeeType(self.raw) })
    }

    pub fn declaration(&self) -> Cursor<'tu> {
        Cursor::from_raw(unsafe { ffi::clang_getTypeDeclaration(self.raw) }, self.tu)
    }

    /// Result type of a function type.
    pub fn result_type(&self) -> Type<'tu> {
        self.wrap(unsafe { ffi::clang_getResultType(self.raw) })
    }

    pub fn is_pod(&self) -> bool {
        unsafe { ffi::clang_isPODType(self.raw) != 0 }
    }

    pub fn array_element_type(&self) -> Type<'tu> {
        self.wrap(unsafe { ffi::clang_getArrayElementType(self.raw) })
    }

    /// Size of a constant array, `None` for anything else.
    pub fn array_size(&self) -> Option<u64> {
        u64::try_from(unsafe { ffi::clang_getArraySize(self.raw) }).ok()
    }

    /// Element type of an array, complex or vector type.
    pub fn element_type(&self) -> Type<'tu> {
        self.wrap(unsafe { ffi::clang_getElementType(self.raw) })
    }

    pub fn num_elements(&self) -> Option<u64> {
        u64::try_from(unsafe { ffi::clang_getNumElements(self.raw) }).ok()
    }

    pub fn calling_convention(&self) -> CallingConv {
        CallingConv::from_raw(unsafe { ffi::clang_getFunctionTypeCallingConv(self.raw) })
    }

    /// Parameter types of a function type, `None` for non-function types.
    pub fn argument_types(&self) -> Option<Vec<Type<'tu>>> {
        let n = u32::try_from(unsafe { ffi::clang_getNumArgTypes(self.raw) }).ok()?;
        Some((0..n).map(|i| self.wrap(unsafe { ffi::clang_getArgType(self.raw, i) })).collect())
    }

    pub fn is_variadic(&self) -> bool {
        unsafe { ffi::clang_isFunctionTypeVariadic(self.raw) != 0 }
    }

    /// For member pointer types, the class the member belongs to.
    pub fn class_type(&self) -> Type<'tu> {
        self.wrap(unsafe { ffi::clang_Type_getClassType(self.raw) })
    }

    pub fn ref_qualifier(&self) -> RefQualifierKind {
        RefQualifierKind::from_raw(unsafe { ffi::clang_Type_getCXXRefQualifier(self.raw) })
    }

    /// Name of a typedef type, empty for other kinds.
    pub fn typedef_name(&self) -> String {
        cxstring::take(unsafe { ffi::clang_getTypedefName(self.raw) })
    }

    /// Size in bytes, following `sizeof` semantics.
    pub fn size_of(&self) -> Result<u64, TypeLayoutError> {
        TypeLayoutError::check(unsafe { ffi::clang_Type_getSizeOf(self.raw) })
    }

    /// Alignment in bytes, following `alignof` semantics.
    pub fn align_of(&self) -> Result<u64, TypeLayoutError> {
        TypeLayoutError::check(unsafe { ffi::clang_Type_getAlignOf(self.raw) })
    }

    /// Offset of `field` in bits, following `offsetof` semantics.
    pub fn offset_of(&self, field: &str) -> Result<u64, TypeLayoutError> {
        let field = CString::new(field).map_err(|_| TypeLayoutError::InvalidFieldName)?;
        TypeLayoutError::check(unsafe { ffi::clang_Type_getOffsetOf(self.raw, field.as_ptr()) })
    }

    fn wrap(&self, raw: ffi::CXType) -> Type<'tu> {
        Type::from_raw(raw, self.tu)
    }
}

impl PartialEq for Type<'_> {
    fn eq(&self, other: &Self) -> bool {
        unsafe { ffi::clang_equalTypes(self.raw, other.raw) != 0 }
    }
}

impl Eq for Type<'_> {}

impl fmt::Debug for Type<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Type").field("kind", &self.kind()).field("spelling", &self.spelling()).finish()
    }
}

impl fmt::Display for Type<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.spelling())
    }
}
