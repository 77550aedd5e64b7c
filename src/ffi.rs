//! Raw declarations for the libclang C API.
//!
//! Nothing in here is safe to call directly; the wrappers in the sibling
//! modules own the handles and uphold the lifetime rules the C headers
//! document. Linking is set up by `build.rs`.

#![allow(non_camel_case_types, non_snake_case)]

use std::os::raw::{c_char, c_int, c_longlong, c_uint, c_ulong, c_ulonglong, c_void};

pub type CXIndex = *mut c_void;
pub type CXTranslationUnit = *mut c_void;
pub type CXFile = *mut c_void;
pub type CXDiagnostic = *mut c_void;
pub type CXModule = *mut c_void;
pub type CXCursorSet = *mut c_void;
pub type CXCompletionString = *mut c_void;
pub type CXCompilationDatabase = *mut c_void;
pub type CXCompileCommands = *mut c_void;
pub type CXCompileCommand = *mut c_void;
pub type CXClientData = *mut c_void;

pub type CXChildVisitResult = c_uint;
pub type CXVisitorResult = c_uint;
pub type CXResult = c_uint;
pub type CXErrorCode = c_int;

pub const CXChildVisit_Break: CXChildVisitResult = 0;
pub const CXChildVisit_Continue: CXChildVisitResult = 1;
pub const CXChildVisit_Recurse: CXChildVisitResult = 2;

pub const CXVisit_Break: CXVisitorResult = 0;
pub const CXVisit_Continue: CXVisitorResult = 1;

pub const CXResult_Success: CXResult = 0;
pub const CXResult_VisitBreak: CXResult = 2;

pub const CXError_Success: CXErrorCode = 0;
pub const CXError_Failure: CXErrorCode = 1;
pub const CXError_Crashed: CXErrorCode = 2;
pub const CXError_InvalidArguments: CXErrorCode = 3;
pub const CXError_ASTReadError: CXErrorCode = 4;

pub const CXSaveError_None: c_int = 0;
pub const CXSaveError_TranslationErrors: c_int = 2;
pub const CXSaveError_InvalidTU: c_int = 3;

pub const CXCompilationDatabase_NoError: c_uint = 0;
pub const CXCompilationDatabase_CanNotLoadDatabase: c_uint = 1;

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct CXString {
    pub data: *const c_void,
    pub private_flags: c_uint,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct CXCursor {
    pub kind: c_uint,
    pub xdata: c_int,
    pub data: [*const c_void; 3],
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct CXType {
    pub kind: c_uint,
    pub data: [*mut c_void; 2],
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct CXSourceLocation {
    pub ptr_data: [*const c_void; 2],
    pub int_data: c_uint,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct CXSourceRange {
    pub ptr_data: [*const c_void; 2],
    pub begin_int_data: c_uint,
    pub end_int_data: c_uint,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct CXToken {
    pub int_data: [c_uint; 4],
    pub ptr_data: *mut c_void,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct CXUnsavedFile {
    pub Filename: *const c_char,
    pub Contents: *const c_char,
    pub Length: c_ulong,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default)]
pub struct CXVersion {
    pub Major: c_int,
    pub Minor: c_int,
    pub Subminor: c_int,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct CXPlatformAvailability {
    pub Platform: CXString,
    pub Introduced: CXVersion,
    pub Deprecated: CXVersion,
    pub Obsoleted: CXVersion,
    pub Unavailable: c_int,
    pub Message: CXString,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default)]
pub struct CXFileUniqueID {
    pub data: [c_ulonglong; 3],
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct CXCompletionResult {
    pub CursorKind: c_uint,
    pub CompletionString: CXCompletionString,
}

#[repr(C)]
#[derive(Debug)]
pub struct CXCodeCompleteResults {
    pub Results: *mut CXCompletionResult,
    pub NumResults: c_uint,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct CXComment {
    pub ASTNode: *const c_void,
    pub TranslationUnit: CXTranslationUnit,
}

pub type CXCursorVisitor =
    extern "C" fn(cursor: CXCursor, parent: CXCursor, client_data: CXClientData) -> CXChildVisitResult;

#[repr(C)]
#[derive(Copy, Clone)]
pub struct CXCursorAndRangeVisitor {
    pub context: *mut c_void,
    pub visit: extern "C" fn(context: *mut c_void, cursor: CXCursor, range: CXSourceRange) -> CXVisitorResult,
}

extern "C" {
    // strings
    pub fn clang_getCString(string: CXString) -> *const c_char;
    pub fn clang_disposeString(string: CXString);
    pub fn clang_getClangVersion() -> CXString;

    // index
    pub fn clang_createIndex(exclude_declarations_from_pch: c_int, display_diagnostics: c_int) -> CXIndex;
    pub fn clang_disposeIndex(index: CXIndex);

    // translation units
    pub fn clang_createTranslationUnit2(
        index: CXIndex,
        ast_filename: *const c_char,
        out_tu: *mut CXTranslationUnit,
    ) -> CXErrorCode;
    pub fn clang_createTranslationUnitFromSourceFile(
        index: CXIndex,
        source_filename: *const c_char,
        num_clang_command_line_args: c_int,
        clang_command_line_args: *const *const c_char,
        num_unsaved_files: c_uint,
        unsaved_files: *mut CXUnsavedFile,
    ) -> CXTranslationUnit;
    pub fn clang_parseTranslationUnit2(
        index: CXIndex,
        source_filename: *const c_char,
        command_line_args: *const *const c_char,
        num_command_line_args: c_int,
        unsaved_files: *mut CXUnsavedFile,
        num_unsaved_files: c_uint,
        options: c_uint,
        out_tu: *mut CXTranslationUnit,
    ) -> CXErrorCode;
    pub fn clang_defaultEditingTranslationUnitOptions() -> c_uint;
    pub fn clang_disposeTranslationUnit(tu: CXTranslationUnit);
    pub fn clang_getTranslationUnitSpelling(tu: CXTranslationUnit) -> CXString;
    pub fn clang_getTranslationUnitCursor(tu: CXTranslationUnit) -> CXCursor;
    pub fn clang_getCursor(tu: CXTranslationUnit, location: CXSourceLocation) -> CXCursor;
    pub fn clang_getFile(tu: CXTranslationUnit, file_name: *const c_char) -> CXFile;
    pub fn clang_isFileMultipleIncludeGuarded(tu: CXTranslationUnit, file: CXFile) -> c_uint;
    pub fn clang_getLocation(tu: CXTranslationUnit, file: CXFile, line: c_uint, column: c_uint) -> CXSourceLocation;
    pub fn clang_getLocationForOffset(tu: CXTranslationUnit, file: CXFile, offset: c_uint) -> CXSourceLocation;
    pub fn clang_reparseTranslationUnit(
        tu: CXTranslationUnit,
        num_unsaved_files: c_uint,
        unsaved_files: *mut CXUnsavedFile,
        options: c_uint,
    ) -> c_int;
    pub fn clang_defaultReparseOptions(tu: CXTranslationUnit) -> c_uint;
    pub fn clang_saveTranslationUnit(tu: CXTranslationUnit, file_name: *const c_char, options: c_uint) -> c_int;
    pub fn clang_defaultSaveOptions(tu: CXTranslationUnit) -> c_uint;
    pub fn clang_getNumDiagnostics(tu: CXTranslationUnit) -> c_uint;
    pub fn clang_getDiagnostic(tu: CXTranslationUnit, index: c_uint) -> CXDiagnostic;
    pub fn clang_findIncludesInFile(tu: CXTranslationUnit, file: CXFile, visitor: CXCursorAndRangeVisitor) -> CXResult;
    pub fn clang_Module_getNumTopLevelHeaders(tu: CXTranslationUnit, module: CXModule) -> c_uint;
    pub fn clang_Module_getTopLevelHeader(tu: CXTranslationUnit, module: CXModule, index: c_uint) -> CXFile;

    // cursors
    pub fn clang_getNullCursor() -> CXCursor;
    pub fn clang_equalCursors(a: CXCursor, b: CXCursor) -> c_uint;
    pub fn clang_Cursor_isNull(cursor: CXCursor) -> c_int;
    pub fn clang_hashCursor(cursor: CXCursor) -> c_uint;
    pub fn clang_getCursorKind(cursor: CXCursor) -> c_uint;
    pub fn clang_getCursorSpelling(cursor: CXCursor) -> CXString;
    pub fn clang_getCursorDisplayName(cursor: CXCursor) -> CXString;
    pub fn clang_getCursorLinkage(cursor: CXCursor) -> c_uint;
    pub fn clang_getCursorAvailability(cursor: CXCursor) -> c_uint;
    pub fn clang_getCursorPlatformAvailability(
        cursor: CXCursor,
        always_deprecated: *mut c_int,
        deprecated_message: *mut CXString,
        always_unavailable: *mut c_int,
        unavailable_message: *mut CXString,
        availability: *mut CXPlatformAvailability,
        availability_size: c_int,
    ) -> c_int;
    pub fn clang_disposeCXPlatformAvailability(availability: *mut CXPlatformAvailability);
    pub fn clang_getCursorLanguage(cursor: CXCursor) -> c_uint;
    pub fn clang_getDeclObjCTypeEncoding(cursor: CXCursor) -> CXString;
    pub fn clang_getCursorSemanticParent(cursor: CXCursor) -> CXCursor;
    pub fn clang_getCursorLexicalParent(cursor: CXCursor) -> CXCursor;
    pub fn clang_getOverriddenCursors(cursor: CXCursor, overridden: *mut *mut CXCursor, num_overridden: *mut c_uint);
    pub fn clang_disposeOverriddenCursors(overridden: *mut CXCursor);
    pub fn clang_getIncludedFile(cursor: CXCursor) -> CXFile;
    pub fn clang_getCursorLocation(cursor: CXCursor) -> CXSourceLocation;
    pub fn clang_getCursorExtent(cursor: CXCursor) -> CXSourceRange;
    pub fn clang_getCursorType(cursor: CXCursor) -> CXType;
    pub fn clang_getTypedefDeclUnderlyingType(cursor: CXCursor) -> CXType;
    pub fn clang_getEnumDeclIntegerType(cursor: CXCursor) -> CXType;
    pub fn clang_getEnumConstantDeclValue(cursor: CXCursor) -> c_longlong;
    pub fn clang_getEnumConstantDeclUnsignedValue(cursor: CXCursor) -> c_ulonglong;
    pub fn clang_getFieldDeclBitWidth(cursor: CXCursor) -> c_int;
    pub fn clang_Cursor_getNumArguments(cursor: CXCursor) -> c_int;
    pub fn clang_Cursor_getArgument(cursor: CXCursor, index: c_uint) -> CXCursor;
    pub fn clang_getCursorResultType(cursor: CXCursor) -> CXType;
    pub fn clang_Cursor_isBitField(cursor: CXCursor) -> c_uint;
    pub fn clang_isVirtualBase(cursor: CXCursor) -> c_uint;
    pub fn clang_getCXXAccessSpecifier(cursor: CXCursor) -> c_uint;
    pub fn clang_getNumOverloadedDecls(cursor: CXCursor) -> c_uint;
    pub fn clang_getOverloadedDecl(cursor: CXCursor, index: c_uint) -> CXCursor;
    pub fn clang_getIBOutletCollectionType(cursor: CXCursor) -> CXType;
    pub fn clang_visitChildren(parent: CXCursor, visitor: CXCursorVisitor, client_data: CXClientData) -> c_uint;
    pub fn clang_getCursorUSR(cursor: CXCursor) -> CXString;
    pub fn clang_getCursorReferenced(cursor: CXCursor) -> CXCursor;
    pub fn clang_getCursorDefinition(cursor: CXCursor) -> CXCursor;
    pub fn clang_isCursorDefinition(cursor: CXCursor) -> c_uint;
    pub fn clang_getCanonicalCursor(cursor: CXCursor) -> CXCursor;
    pub fn clang_Cursor_isDynamicCall(cursor: CXCursor) -> c_int;
    pub fn clang_Cursor_getReceiverType(cursor: CXCursor) -> CXType;
    pub fn clang_Cursor_isVariadic(cursor: CXCursor) -> c_uint;
    pub fn clang_Cursor_getCommentRange(cursor: CXCursor) -> CXSourceRange;
    pub fn clang_Cursor_getRawCommentText(cursor: CXCursor) -> CXString;
    pub fn clang_Cursor_getBriefCommentText(cursor: CXCursor) -> CXString;
    pub fn clang_Cursor_getParsedComment(cursor: CXCursor) -> CXComment;
    pub fn clang_Cursor_getModule(cursor: CXCursor) -> CXModule;
    pub fn clang_Cursor_getOffsetOfField(cursor: CXCursor) -> c_longlong;
    pub fn clang_CXXMethod_isPureVirtual(cursor: CXCursor) -> c_uint;
    pub fn clang_CXXMethod_isStatic(cursor: CXCursor) -> c_uint;
    pub fn clang_CXXMethod_isVirtual(cursor: CXCursor) -> c_uint;
    pub fn clang_getTemplateCursorKind(cursor: CXCursor) -> c_uint;
    pub fn clang_getSpecializedCursorTemplate(cursor: CXCursor) -> CXCursor;
    pub fn clang_getCursorReferenceNameRange(cursor: CXCursor, name_flags: c_uint, piece_index: c_uint) -> CXSourceRange;
    pub fn clang_getCursorCompletionString(cursor: CXCursor) -> CXCompletionString;

    // cursor kinds
    pub fn clang_getCursorKindSpelling(kind: c_uint) -> CXString;
    pub fn clang_isDeclaration(kind: c_uint) -> c_uint;
    pub fn clang_isReference(kind: c_uint) -> c_uint;
    pub fn clang_isExpression(kind: c_uint) -> c_uint;
    pub fn clang_isStatement(kind: c_uint) -> c_uint;
    pub fn clang_isAttribute(kind: c_uint) -> c_uint;
    pub fn clang_isInvalid(kind: c_uint) -> c_uint;
    pub fn clang_isTranslationUnit(kind: c_uint) -> c_uint;
    pub fn clang_isPreprocessing(kind: c_uint) -> c_uint;
    pub fn clang_isUnexposed(kind: c_uint) -> c_uint;

    // cursor sets
    pub fn clang_createCXCursorSet() -> CXCursorSet;
    pub fn clang_disposeCXCursorSet(set: CXCursorSet);
    pub fn clang_CXCursorSet_contains(set: CXCursorSet, cursor: CXCursor) -> c_uint;
    pub fn clang_CXCursorSet_insert(set: CXCursorSet, cursor: CXCursor) -> c_uint;

    // types
    pub fn clang_equalTypes(a: CXType, b: CXType) -> c_uint;
    pub fn clang_getTypeSpelling(ty: CXType) -> CXString;
    pub fn clang_getTypeKindSpelling(kind: c_uint) -> CXString;
    pub fn clang_getCanonicalType(ty: CXType) -> CXType;
    pub fn clang_isConstQualifiedType(ty: CXType) -> c_uint;
    pub fn clang_isVolatileQualifiedType(ty: CXType) -> c_uint;
    pub fn clang_isRestrictQualifiedType(ty: CXType) -> c_uint;
    pub fn clang_getPointeeType(ty: CXType) -> CXType;
    pub fn clang_getTypeDeclaration(ty: CXType) -> CXCursor;
    pub fn clang_getResultType(ty: CXType) -> CXType;
    pub fn clang_isPODType(ty: CXType) -> c_uint;
    pub fn clang_getArrayElementType(ty: CXType) -> CXType;
    pub fn clang_getArraySize(ty: CXType) -> c_longlong;
    pub fn clang_getElementType(ty: CXType) -> CXType;
    pub fn clang_getNumElements(ty: CXType) -> c_longlong;
    pub fn clang_getFunctionTypeCallingConv(ty: CXType) -> c_uint;
    pub fn clang_getNumArgTypes(ty: CXType) -> c_int;
    pub fn clang_getArgType(ty: CXType, index: c_uint) -> CXType;
    pub fn clang_isFunctionTypeVariadic(ty: CXType) -> c_uint;
    pub fn clang_Type_getClassType(ty: CXType) -> CXType;
    pub fn clang_Type_getCXXRefQualifier(ty: CXType) -> c_uint;
    pub fn clang_Type_getSizeOf(ty: CXType) -> c_longlong;
    pub fn clang_Type_getAlignOf(ty: CXType) -> c_longlong;
    pub fn clang_Type_getOffsetOf(ty: CXType, field: *const c_char) -> c_longlong;
    pub fn clang_getTypedefName(ty: CXType) -> CXString;

    // locations and ranges
    pub fn clang_getNullLocation() -> CXSourceLocation;
    pub fn clang_equalLocations(a: CXSourceLocation, b: CXSourceLocation) -> c_uint;
    pub fn clang_Location_isInSystemHeader(location: CXSourceLocation) -> c_int;
    pub fn clang_Location_isFromMainFile(location: CXSourceLocation) -> c_int;
    pub fn clang_getExpansionLocation(
        location: CXSourceLocation,
        file: *mut CXFile,
        line: *mut c_uint,
        column: *mut c_uint,
        offset: *mut c_uint,
    );
    pub fn clang_getPresumedLocation(
        location: CXSourceLocation,
        filename: *mut CXString,
        line: *mut c_uint,
        column: *mut c_uint,
    );
    pub fn clang_getInstantiationLocation(
        location: CXSourceLocation,
        file: *mut CXFile,
        line: *mut c_uint,
        column: *mut c_uint,
        offset: *mut c_uint,
    );
    pub fn clang_getSpellingLocation(
        location: CXSourceLocation,
        file: *mut CXFile,
        line: *mut c_uint,
        column: *mut c_uint,
        offset: *mut c_uint,
    );
    pub fn clang_getFileLocation(
        location: CXSourceLocation,
        file: *mut CXFile,
        line: *mut c_uint,
        column: *mut c_uint,
        offset: *mut c_uint,
    );
    pub fn clang_getNullRange() -> CXSourceRange;
    pub fn clang_getRange(begin: CXSourceLocation, end: CXSourceLocation) -> CXSourceRange;
    pub fn clang_equalRanges(a: CXSourceRange, b: CXSourceRange) -> c_uint;
    pub fn clang_Range_isNull(range: CXSourceRange) -> c_int;
    pub fn clang_getRangeStart(range: CXSourceRange) -> CXSourceLocation;
    pub fn clang_getRangeEnd(range: CXSourceRange) -> CXSourceLocation;

    // files
    pub fn clang_getFileName(file: CXFile) -> CXString;
    pub fn clang_getFileTime(file: CXFile) -> libc::time_t;
    pub fn clang_getFileUniqueID(file: CXFile, out_id: *mut CXFileUniqueID) -> c_int;
    pub fn clang_File_isEqual(file1: CXFile, file2: CXFile) -> c_int;

    // tokens
    pub fn clang_getTokenKind(token: CXToken) -> c_uint;
    pub fn clang_getTokenSpelling(tu: CXTranslationUnit, token: CXToken) -> CXString;
    pub fn clang_getTokenLocation(tu: CXTranslationUnit, token: CXToken) -> CXSourceLocation;
    pub fn clang_getTokenExtent(tu: CXTranslationUnit, token: CXToken) -> CXSourceRange;
    pub fn clang_tokenize(tu: CXTranslationUnit, range: CXSourceRange, tokens: *mut *mut CXToken, num_tokens: *mut c_uint);
    pub fn clang_annotateTokens(tu: CXTranslationUnit, tokens: *mut CXToken, num_tokens: c_uint, cursors: *mut CXCursor);
    pub fn clang_disposeTokens(tu: CXTranslationUnit, tokens: *mut CXToken, num_tokens: c_uint);

    // diagnostics
    pub fn clang_disposeDiagnostic(diagnostic: CXDiagnostic);
    pub fn clang_getDiagnosticSeverity(diagnostic: CXDiagnostic) -> c_uint;
    pub fn clang_getDiagnosticLocation(diagnostic: CXDiagnostic) -> CXSourceLocation;
    pub fn clang_getDiagnosticSpelling(diagnostic: CXDiagnostic) -> CXString;
    pub fn clang_getDiagnosticOption(diagnostic: CXDiagnostic, disable: *mut CXString) -> CXString;
    pub fn clang_getDiagnosticCategory(diagnostic: CXDiagnostic) -> c_uint;
    pub fn clang_getDiagnosticCategoryText(diagnostic: CXDiagnostic) -> CXString;
    pub fn clang_getDiagnosticNumRanges(diagnostic: CXDiagnostic) -> c_uint;
    pub fn clang_getDiagnosticRange(diagnostic: CXDiagnostic, index: c_uint) -> CXSourceRange;
    pub fn clang_getDiagnosticNumFixIts(diagnostic: CXDiagnostic) -> c_uint;
    pub fn clang_getDiagnosticFixIt(diagnostic: CXDiagnostic, index: c_uint, replacement_range: *mut CXSourceRange) -> CXString;
    pub fn clang_formatDiagnostic(diagnostic: CXDiagnostic, options: c_uint) -> CXString;
    pub fn clang_defaultDiagnosticDisplayOptions() -> c_uint;

    // code completion
    pub fn clang_codeCompleteAt(
        tu: CXTranslationUnit,
        complete_filename: *const c_char,
        complete_line: c_uint,
        complete_column: c_uint,
        unsaved_files: *mut CXUnsavedFile,
        num_unsaved_files: c_uint,
        options: c_uint,
    ) -> *mut CXCodeCompleteResults;
    pub fn clang_defaultCodeCompleteOptions() -> c_uint;
    pub fn clang_sortCodeCompletionResults(results: *mut CXCompletionResult, num_results: c_uint);
    pub fn clang_disposeCodeCompleteResults(results: *mut CXCodeCompleteResults);
    pub fn clang_codeCompleteGetNumDiagnostics(results: *mut CXCodeCompleteResults) -> c_uint;
    pub fn clang_codeCompleteGetDiagnostic(results: *mut CXCodeCompleteResults, index: c_uint) -> CXDiagnostic;
    pub fn clang_codeCompleteGetContexts(results: *mut CXCodeCompleteResults) -> c_ulonglong;
    pub fn clang_getCompletionPriority(completion_string: CXCompletionString) -> c_uint;
    pub fn clang_getCompletionAvailability(completion_string: CXCompletionString) -> c_uint;
    pub fn clang_getCompletionNumAnnotations(completion_string: CXCompletionString) -> c_uint;
    pub fn clang_getCompletionAnnotation(completion_string: CXCompletionString, index: c_uint) -> CXString;
    pub fn clang_getCompletionParent(completion_string: CXCompletionString, kind: *mut c_uint) -> CXString;
    pub fn clang_getCompletionBriefComment(completion_string: CXCompletionString) -> CXString;
    pub fn clang_getNumCompletionChunks(completion_string: CXCompletionString) -> c_uint;
    pub fn clang_getCompletionChunkKind(completion_string: CXCompletionString, chunk_number: c_uint) -> c_uint;
    pub fn clang_getCompletionChunkText(completion_string: CXCompletionString, chunk_number: c_uint) -> CXString;
    pub fn clang_getCompletionChunkCompletionString(
        completion_string: CXCompletionString,
        chunk_number: c_uint,
    ) -> CXCompletionString;

    // compilation databases
    pub fn clang_CompilationDatabase_fromDirectory(build_dir: *const c_char, error: *mut c_uint) -> CXCompilationDatabase;
    pub fn clang_CompilationDatabase_dispose(database: CXCompilationDatabase);
    pub fn clang_CompilationDatabase_getCompileCommands(
        database: CXCompilationDatabase,
        complete_file_name: *const c_char,
    ) -> CXCompileCommands;
    pub fn clang_CompilationDatabase_getAllCompileCommands(database: CXCompilationDatabase) -> CXCompileCommands;
    pub fn clang_CompileCommands_dispose(commands: CXCompileCommands);
    pub fn clang_CompileCommands_getSize(commands: CXCompileCommands) -> c_uint;
    pub fn clang_CompileCommands_getCommand(commands: CXCompileCommands, index: c_uint) -> CXCompileCommand;
    pub fn clang_CompileCommand_getDirectory(command: CXCompileCommand) -> CXString;
    pub fn clang_CompileCommand_getFilename(command: CXCompileCommand) -> CXString;
    pub fn clang_CompileCommand_getNumArgs(command: CXCompileCommand) -> c_uint;
    pub fn clang_CompileCommand_getArg(command: CXCompileCommand, index: c_uint) -> CXString;

    // comments
    pub fn clang_Comment_getKind(comment: CXComment) -> c_uint;
    pub fn clang_Comment_getNumChildren(comment: CXComment) -> c_uint;
    pub fn clang_Comment_getChild(comment: CXComment, index: c_uint) -> CXComment;
    pub fn clang_Comment_isWhitespace(comment: CXComment) -> c_uint;
    pub fn clang_TextComment_getText(comment: CXComment) -> CXString;
    pub fn clang_InlineCommandComment_getCommandName(comment: CXComment) -> CXString;
    pub fn clang_InlineCommandComment_getRenderKind(comment: CXComment) -> c_uint;
    pub fn clang_InlineCommandComment_getNumArgs(comment: CXComment) -> c_uint;
    pub fn clang_InlineCommandComment_getArgText(comment: CXComment, index: c_uint) -> CXString;
    pub fn clang_BlockCommandComment_getCommandName(comment: CXComment) -> CXString;
    pub fn clang_ParamCommandComment_getParamName(comment: CXComment) -> CXString;
    pub fn clang_ParamCommandComment_isDirectionExplicit(comment: CXComment) -> c_uint;
    pub fn clang_ParamCommandComment_getDirection(comment: CXComment) -> c_uint;
    pub fn clang_FullComment_getAsHTML(comment: CXComment) -> CXString;
    pub fn clang_FullComment_getAsXML(comment: CXComment) -> CXString;

    // modules
    pub fn clang_Module_getASTFile(module: CXModule) -> CXFile;
    pub fn clang_Module_getParent(module: CXModule) -> CXModule;
    pub fn clang_Module_getName(module: CXModule) -> CXString;
    pub fn clang_Module_getFullName(module: CXModule) -> CXString;
    pub fn clang_Module_isSystem(module: CXModule) -> c_int;
}
