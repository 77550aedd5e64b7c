//! Serializable snapshots of a cursor tree, and the plain-text dump format.

use std::io::{self, Write};
use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cursor::{ChildVisit, Cursor};
use crate::cursor_kind::CursorKind;
use crate::diagnostic::DiagnosticDisplayOptions;
use crate::error::Result;
use crate::index::{Index, IndexOptions};
use crate::translation_unit::TranslationUnitFlags;
use crate::unsaved::UnsavedFiles;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanJson {
    pub file: String,
    pub line: u32,
    pub column: u32,
    /// Byte offsets of the cursor extent.
    pub lo: u32,
    pub hi: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AstNode {
    pub kind: String,
    pub spelling: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub display_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub usr: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_spelling: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<SpanJson>,
    #[serde(default)]
    pub children: Vec<AstNode>,
}

impl AstNode {
    /// Snapshot of a single cursor, without children.
    pub fn from_cursor(cursor: &Cursor<'_>) -> Self {
        let ty = cursor.cursor_type();
        let type_spelling = Some(ty.spelling()).filter(|s| !s.is_empty());
        AstNode {
            kind: cursor.kind().spelling(),
            spelling: cursor.spelling(),
            display_name: cursor.display_name(),
            usr: cursor.usr(),
            type_spelling,
            location: span_of(cursor),
            children: Vec::new(),
        }
    }
}

fn span_of(cursor: &Cursor<'_>) -> Option<SpanJson> {
    let extent = cursor.extent();
    let start = extent.start().spelling_location();
    let end = extent.end().spelling_location();
    let file = start.file?;
    Some(SpanJson {
        file: file.name(),
        line: start.line,
        column: start.column,
        lo: start.offset,
        hi: end.offset,
    })
}

/// Controls which cursors a dump visits.
#[derive(Debug, Clone, Default)]
pub struct DumpOptions {
    /// Recurse into every cursor instead of only records, enums and
    /// namespaces.
    pub full_depth: bool,
    /// Skip cursors located outside the main file.
    pub main_file_only: bool,
    /// Keep only cursors whose spelling matches; a rejected cursor is
    /// skipped together with its children.
    pub filter: Option<Regex>,
}

impl DumpOptions {
    fn accepts(&self, cursor: &Cursor<'_>) -> bool {
        if self.main_file_only && !cursor.location().is_from_main_file() {
            return false;
        }
        match &self.filter {
            Some(re) => re.is_match(&cursor.spelling()),
            None => true,
        }
    }

    fn descends(&self, kind: CursorKind) -> bool {
        self.full_depth
            || matches!(
                kind,
                CursorKind::CLASS_DECL | CursorKind::STRUCT_DECL | CursorKind::ENUM_DECL | CursorKind::NAMESPACE
            )
    }
}

/// A dump as requested in JSON: how to create the index plus the
/// [`DumpOptions`], with the filter still a pattern string.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DumpRequest {
    pub index: IndexOptions,
    pub full_depth: bool,
    pub main_file_only: bool,
    pub filter: Option<String>,
}

impl DumpRequest {
    pub fn dump_options(&self) -> std::result::Result<DumpOptions, regex::Error> {
        let filter = self.filter.as_deref().map(Regex::new).transpose()?;
        Ok(DumpOptions { full_depth: self.full_depth, main_file_only: self.main_file_only, filter })
    }
}

/// Builds the tree rooted at `cursor`.
pub fn build_tree(cursor: &Cursor<'_>, options: &DumpOptions) -> AstNode {
    let mut root = AstNode::from_cursor(cursor);
    root.children = build_children(cursor, options);
    root
}

fn build_children(cursor: &Cursor<'_>, options: &DumpOptions) -> Vec<AstNode> {
    let mut out = Vec::new();
    cursor.visit_children(|child, _parent| {
        if options.accepts(&child) {
            let mut node = AstNode::from_cursor(&child);
            if options.descends(child.kind()) {
                node.children = build_children(&child, options);
            }
            out.push(node);
        }
        ChildVisit::Continue
    });
    out
}

/// Writes one `Kind: spelling (usr)` line per visited cursor below `cursor`.
pub fn dump_text<W: Write>(cursor: &Cursor<'_>, options: &DumpOptions, out: &mut W) -> io::Result<()> {
    let mut result = Ok(());
    cursor.visit_children(|child, _parent| {
        if child.is_null() {
            result = writeln!(out, "cursor: <none>");
            return if result.is_ok() { ChildVisit::Continue } else { ChildVisit::Break };
        }
        if !options.accepts(&child) {
            return ChildVisit::Continue;
        }
        let kind = child.kind();
        result = writeln!(out, "{}: {} ({})", kind, child.spelling(), child.usr());
        if result.is_err() {
            ChildVisit::Break
        } else if options.descends(kind) {
            ChildVisit::Recurse
        } else {
            ChildVisit::Continue
        }
    });
    result
}

/// Everything `parse_file` learned about one source file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DumpReport {
    pub file: String,
    pub root: AstNode,
    pub diagnostics: Vec<String>,
}

impl DumpReport {
    pub fn node_count(&self) -> u32 {
        let mut counter = Counter(0);
        traverse_ast(&self.root, &mut counter);
        counter.0
    }
}

struct Counter(u32);

impl Visitor for Counter {
    fn enter(&mut self, _node: &AstNode) {
        self.0 += 1;
    }
}

/// Parses `path` with a fresh index and dumps it.
pub fn parse_file(path: &Path, args: &[&str], options: &DumpOptions) -> Result<DumpReport> {
    let index = Index::new(false, false);
    dump_with_index(&index, path, args, options)
}

/// Like [`parse_file`], reusing an existing index.
pub fn dump_with_index(index: &Index, path: &Path, args: &[&str], options: &DumpOptions) -> Result<DumpReport> {
    let tu = index.parse_path(path, args, &UnsavedFiles::new(), TranslationUnitFlags::NONE)?;
    let file = path.to_string_lossy();
    let root = build_tree(&tu.cursor(), options);
    let diagnostics = tu
        .diagnostics()
        .iter()
        .map(|d| d.format(DiagnosticDisplayOptions::default()))
        .collect::<Vec<_>>();
    debug!(file = %file, nodes = root.children.len(), diagnostics = diagnostics.len(), "dumped");
    Ok(DumpReport { file: file.into_owned(), root, diagnostics })
}

pub trait Visitor {
    fn enter(&mut self, _node: &AstNode) {}
    fn exit(&mut self, _node: &AstNode) {}
}

pub fn traverse_ast(node: &AstNode, visitor: &mut dyn Visitor) {
    visitor.enter(node);
    for child in &node.children {
        traverse_ast(child, visitor);
    }
    visitor.exit(node);
}
