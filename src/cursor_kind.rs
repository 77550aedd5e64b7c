//! `CXCursorKind`.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::cxstring;
use crate::ffi;

/// The kind of entity a cursor points at.
///
/// Kept as a newtype rather than an enum so kinds added by newer libclang
/// releases still round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CursorKind(pub u32);

impl CursorKind {
    // declarations
    pub const UNEXPOSED_DECL: CursorKind = CursorKind(1);
    pub const STRUCT_DECL: CursorKind = CursorKind(2);
    pub const UNION_DECL: CursorKind = CursorKind(3);
    pub const CLASS_DECL: CursorKind = CursorKind(4);
    pub const ENUM_DECL: CursorKind = CursorKind(5);
    pub const FIELD_DECL: CursorKind = CursorKind(6);
    pub const ENUM_CONSTANT_DECL: CursorKind = CursorKind(7);
    pub const FUNCTION_DECL: CursorKind = CursorKind(8);
    pub const VAR_DECL: CursorKind = CursorKind(9);
    pub const PARM_DECL: CursorKind = CursorKind(10);
    pub const OBJC_INTERFACE_DECL: CursorKind = CursorKind(11);
    pub const OBJC_CATEGORY_DECL: CursorKind = CursorKind(12);
    pub const OBJC_PROTOCOL_DECL: CursorKind = CursorKind(13);
    pub const OBJC_PROPERTY_DECL: CursorKind = CursorKind(14);
    pub const OBJC_IVAR_DECL: CursorKind = CursorKind(15);
    pub const OBJC_INSTANCE_METHOD_DECL: CursorKind = CursorKind(16);
    pub const OBJC_CLASS_METHOD_DECL: CursorKind = CursorKind(17);
    pub const OBJC_IMPLEMENTATION_DECL: CursorKind = CursorKind(18);
    pub const OBJC_CATEGORY_IMPL_DECL: CursorKind = CursorKind(19);
    pub const TYPEDEF_DECL: CursorKind = CursorKind(20);
    pub const CXX_METHOD: CursorKind = CursorKind(21);
    pub const NAMESPACE: CursorKind = CursorKind(22);
    pub const LINKAGE_SPEC: CursorKind = CursorKind(23);
    pub const CONSTRUCTOR: CursorKind = CursorKind(24);
    pub const DESTRUCTOR: CursorKind = CursorKind(25);
    pub const CONVERSION_FUNCTION: CursorKind = CursorKind(26);
    pub const TEMPLATE_TYPE_PARAMETER: CursorKind = CursorKind(27);
    pub const NON_TYPE_TEMPLATE_PARAMETER: CursorKind = CursorKind(28);
    pub const TEMPLATE_TEMPLATE_PARAMETER: CursorKind = CursorKind(29);
    pub const FUNCTION_TEMPLATE: CursorKind = CursorKind(30);
    pub const CLASS_TEMPLATE: CursorKind = CursorKind(31);
    pub const CLASS_TEMPLATE_PARTIAL_SPECIALIZATION: CursorKind = CursorKind(32);
    pub const NAMESPACE_ALIAS: CursorKind = CursorKind(33);
    pub const USING_DIRECTIVE: CursorKind = CursorKind(34);
    pub const USING_DECLARATION: CursorKind = CursorKind(35);
    pub const TYPE_ALIAS_DECL: CursorKind = CursorKind(36);
    pub const OBJC_SYNTHESIZE_DECL: CursorKind = CursorKind(37);
    pub const OBJC_DYNAMIC_DECL: CursorKind = CursorKind(38);
    pub const CXX_ACCESS_SPECIFIER: CursorKind = CursorKind(39);
    pub const FIRST_DECL: CursorKind = CursorKind(1);
    pub const LAST_DECL: CursorKind = CursorKind(39);

    // references
    pub const FIRST_REF: CursorKind = CursorKind(40);
    pub const OBJC_SUPER_CLASS_REF: CursorKind = CursorKind(40);
    pub const OBJC_PROTOCOL_REF: CursorKind = CursorKind(41);
    pub const OBJC_CLASS_REF: CursorKind = CursorKind(42);
    pub const TYPE_REF: CursorKind = CursorKind(43);
    pub const CXX_BASE_SPECIFIER: CursorKind = CursorKind(44);
    pub const TEMPLATE_REF: CursorKind = CursorKind(45);
    pub const NAMESPACE_REF: CursorKind = CursorKind(46);
    pub const MEMBER_REF: CursorKind = CursorKind(47);
    pub const LABEL_REF: CursorKind = CursorKind(48);
    pub const OVERLOADED_DECL_REF: CursorKind = CursorKind(49);
    pub const VARIABLE_REF: CursorKind = CursorKind(50);
    pub const LAST_REF: CursorKind = CursorKind(50);

    // error conditions
    pub const FIRST_INVALID: CursorKind = CursorKind(70);
    pub const INVALID_FILE: CursorKind = CursorKind(70);
    pub const NO_DECL_FOUND: CursorKind = CursorKind(71);
    pub const NOT_IMPLEMENTED: CursorKind = CursorKind(72);
    pub const INVALID_CODE: CursorKind = CursorKind(73);
    pub const LAST_INVALID: CursorKind = CursorKind(73);

    // expressions
    pub const FIRST_EXPR: CursorKind = CursorKind(100);
    pub const UNEXPOSED_EXPR: CursorKind = CursorKind(100);
    pub const DECL_REF_EXPR: CursorKind = CursorKind(101);
    pub const MEMBER_REF_EXPR: CursorKind = CursorKind(102);
    pub const CALL_EXPR: CursorKind = CursorKind(103);
    pub const OBJC_MESSAGE_EXPR: CursorKind = CursorKind(104);
    pub const BLOCK_EXPR: CursorKind = CursorKind(105);
    pub const INTEGER_LITERAL: CursorKind = CursorKind(106);
    pub const FLOATING_LITERAL: CursorKind = CursorKind(107);
    pub const IMAGINARY_LITERAL: CursorKind = CursorKind(108);
    pub const STRING_LITERAL: CursorKind = CursorKind(109);
    pub const CHARACTER_LITERAL: CursorKind = CursorKind(110);
    pub const PAREN_EXPR: CursorKind = CursorKind(111);
    pub const UNARY_OPERATOR: CursorKind = CursorKind(112);
    pub const ARRAY_SUBSCRIPT_EXPR: CursorKind = CursorKind(113);
    pub const BINARY_OPERATOR: CursorKind = CursorKind(114);
    pub const COMPOUND_ASSIGN_OPERATOR: CursorKind = CursorKind(115);
    pub const CONDITIONAL_OPERATOR: CursorKind = CursorKind(116);
    pub const CSTYLE_CAST_EXPR: CursorKind = CursorKind(117);
    pub const COMPOUND_LITERAL_EXPR: CursorKind = CursorKind(118);
    pub const INIT_LIST_EXPR: CursorKind = CursorKind(119);
    pub const ADDR_LABEL_EXPR: CursorKind = CursorKind(120);
    pub const STMT_EXPR: CursorKind = CursorKind(121);
    pub const GENERIC_SELECTION_EXPR: CursorKind = CursorKind(122);
    pub const GNU_NULL_EXPR: CursorKind = CursorKind(123);
    pub const CXX_STATIC_CAST_EXPR: CursorKind = CursorKind(124);
    pub const CXX_DYNAMIC_CAST_EXPR: CursorKind = CursorKind(125);
    pub const CXX_REINTERPRET_CAST_EXPR: CursorKind = CursorKind(126);
    pub const CXX_CONST_CAST_EXPR: CursorKind = CursorKind(127);
    pub const CXX_FUNCTIONAL_CAST_EXPR: CursorKind = CursorKind(128);
    pub const CXX_TYPEID_EXPR: CursorKind = CursorKind(129);
    pub const CXX_BOOL_LITERAL_EXPR: CursorKind = CursorKind(130);
    pub const CXX_NULL_PTR_LITERAL_EXPR: CursorKind = CursorKind(131);
    pub const CXX_THIS_EXPR: CursorKind = CursorKind(132);
    pub const CXX_THROW_EXPR: CursorKind = CursorKind(133);
    pub const CXX_NEW_EXPR: CursorKind = CursorKind(134);
    pub const CXX_DELETE_EXPR: CursorKind = CursorKind(135);
    pub const UNARY_EXPR: CursorKind = CursorKind(136);
    pub const OBJC_STRING_LITERAL: CursorKind = CursorKind(137);
    pub const OBJC_ENCODE_EXPR: CursorKind = CursorKind(138);
    pub const OBJC_SELECTOR_EXPR: CursorKind = CursorKind(139);
    pub const OBJC_PROTOCOL_EXPR: CursorKind = CursorKind(140);
    pub const OBJC_BRIDGED_CAST_EXPR: CursorKind = CursorKind(141);
    pub const PACK_EXPANSION_EXPR: CursorKind = CursorKind(142);
    pub const SIZE_OF_PACK_EXPR: CursorKind = CursorKind(143);
    pub const LAMBDA_EXPR: CursorKind = CursorKind(144);
    pub const OBJC_BOOL_LITERAL_EXPR: CursorKind = CursorKind(145);
    pub const OBJC_SELF_EXPR: CursorKind = CursorKind(146);

    // statements
    pub const FIRST_STMT: CursorKind = CursorKind(200);
    pub const UNEXPOSED_STMT: CursorKind = CursorKind(200);
    pub const LABEL_STMT: CursorKind = CursorKind(201);
    pub const COMPOUND_STMT: CursorKind = CursorKind(202);
    pub const CASE_STMT: CursorKind = CursorKind(203);
    pub const DEFAULT_STMT: CursorKind = CursorKind(204);
    pub const IF_STMT: CursorKind = CursorKind(205);
    pub const SWITCH_STMT: CursorKind = CursorKind(206);
    pub const WHILE_STMT: CursorKind = CursorKind(207);
    pub const DO_STMT: CursorKind = CursorKind(208);
    pub const FOR_STMT: CursorKind = CursorKind(209);
    pub const GOTO_STMT: CursorKind = CursorKind(210);
    pub const INDIRECT_GOTO_STMT: CursorKind = CursorKind(211);
    pub const CONTINUE_STMT: CursorKind = CursorKind(212);
    pub const BREAK_STMT: CursorKind = CursorKind(213);
    pub const RETURN_STMT: CursorKind = CursorKind(214);
    pub const GCC_ASM_STMT: CursorKind = CursorKind(215);
    pub const ASM_STMT: CursorKind = CursorKind(215);
    pub const OBJC_AT_TRY_STMT: CursorKind = CursorKind(216);
    pub const OBJC_AT_CATCH_STMT: CursorKind = CursorKind(217);
    pub const OBJC_AT_FINALLY_STMT: CursorKind = CursorKind(218);
    pub const OBJC_AT_THROW_STMT: CursorKind = CursorKind(219);
    pub const OBJC_AT_SYNCHRONIZED_STMT: CursorKind = CursorKind(220);
    pub const OBJC_AUTORELEASE_POOL_STMT: CursorKind = CursorKind(221);
    pub const OBJC_FOR_COLLECTION_STMT: CursorKind = CursorKind(222);
    pub const CXX_CATCH_STMT: CursorKind = CursorKind(223);
    pub const CXX_TRY_STMT: CursorKind = CursorKind(224);
    pub const CXX_FOR_RANGE_STMT: CursorKind = CursorKind(225);
    pub const SEH_TRY_STMT: CursorKind = CursorKind(226);
    pub const SEH_EXCEPT_STMT: CursorKind = CursorKind(227);
    pub const SEH_FINALLY_STMT: CursorKind = CursorKind(228);
    pub const MS_ASM_STMT: CursorKind = CursorKind(229);
    pub const NULL_STMT: CursorKind = CursorKind(230);
    pub const DECL_STMT: CursorKind = CursorKind(231);
    pub const OMP_PARALLEL_DIRECTIVE: CursorKind = CursorKind(232);

    /// Cursor that represents the translation unit itself.
    pub const TRANSLATION_UNIT: CursorKind = CursorKind(350);

    // attributes
    pub const FIRST_ATTR: CursorKind = CursorKind(400);
    pub const UNEXPOSED_ATTR: CursorKind = CursorKind(400);
    pub const IB_ACTION_ATTR: CursorKind = CursorKind(401);
    pub const IB_OUTLET_ATTR: CursorKind = CursorKind(402);
    pub const IB_OUTLET_COLLECTION_ATTR: CursorKind = CursorKind(403);
    pub const CXX_FINAL_ATTR: CursorKind = CursorKind(404);
    pub const CXX_OVERRIDE_ATTR: CursorKind = CursorKind(405);
    pub const ANNOTATE_ATTR: CursorKind = CursorKind(406);
    pub const ASM_LABEL_ATTR: CursorKind = CursorKind(407);
    pub const PACKED_ATTR: CursorKind = CursorKind(408);
    pub const PURE_ATTR: CursorKind = CursorKind(409);
    pub const CONST_ATTR: CursorKind = CursorKind(410);
    pub const NO_DUPLICATE_ATTR: CursorKind = CursorKind(411);

    // preprocessing
    pub const PREPROCESSING_DIRECTIVE: CursorKind = CursorKind(500);
    pub const MACRO_DEFINITION: CursorKind = CursorKind(501);
    pub const MACRO_EXPANSION: CursorKind = CursorKind(502);
    pub const MACRO_INSTANTIATION: CursorKind = CursorKind(502);
    pub const INCLUSION_DIRECTIVE: CursorKind = CursorKind(503);
    pub const FIRST_PREPROCESSING: CursorKind = CursorKind(500);
    pub const LAST_PREPROCESSING: CursorKind = CursorKind(503);

    // extra declarations
    pub const MODULE_IMPORT_DECL: CursorKind = CursorKind(600);
    pub const FIRST_EXTRA_DECL: CursorKind = CursorKind(600);

    pub fn is_declaration(self) -> bool {
        unsafe { ffi::clang_isDeclaration(self.0) != 0 }
    }

    pub fn is_reference(self) -> bool {
        unsafe { ffi::clang_isReference(self.0) != 0 }
    }

    pub fn is_expression(self) -> bool {
        unsafe { ffi::clang_isExpression(self.0) != 0 }
    }

    pub fn is_statement(self) -> bool {
        unsafe { ffi::clang_isStatement(self.0) != 0 }
    }

    pub fn is_attribute(self) -> bool {
        unsafe { ffi::clang_isAttribute(self.0) != 0 }
    }

    pub fn is_invalid(self) -> bool {
        unsafe { ffi::clang_isInvalid(self.0) != 0 }
    }

    pub fn is_translation_unit(self) -> bool {
        unsafe { ffi::clang_isTranslationUnit(self.0) != 0 }
    }

    pub fn is_preprocessing(self) -> bool {
        unsafe { ffi::clang_isPreprocessing(self.0) != 0 }
    }

    pub fn is_unexposed(self) -> bool {
        unsafe { ffi::clang_isUnexposed(self.0) != 0 }
    }

    /// libclang's name for this kind, e.g. `FunctionDecl`.
    pub fn spelling(self) -> String {
        cxstring::take(unsafe { ffi::clang_getCursorKindSpelling(self.0) })
    }
}

impl fmt::Display for CursorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.spelling())
    }
}

impl Serialize for CursorKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.spelling())
    }
}
