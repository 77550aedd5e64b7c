//! Parsed documentation comments (`CXComment`).

use std::marker::PhantomData;
use std::os::raw::c_uint;

use crate::cxstring;
use crate::ffi;

/// `CXCommentKind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentKind {
    Null,
    Text,
    InlineCommand,
    HtmlStartTag,
    HtmlEndTag,
    Paragraph,
    BlockCommand,
    ParamCommand,
    TParamCommand,
    VerbatimBlockCommand,
    VerbatimBlockLine,
    VerbatimLine,
    FullComment,
}

impl CommentKind {
    fn from_raw(raw: c_uint) -> Self {
        match raw {
            1 => Self::Text,
            2 => Self::InlineCommand,
            3 => Self::HtmlStartTag,
            4 => Self::HtmlEndTag,
            5 => Self::Paragraph,
            6 => Self::BlockCommand,
            7 => Self::ParamCommand,
            8 => Self::TParamCommand,
            9 => Self::VerbatimBlockCommand,
            10 => Self::VerbatimBlockLine,
            11 => Self::VerbatimLine,
            12 => Self::FullComment,
            _ => Self::Null,
        }
    }
}

/// How an inline command such as `\b` should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentInlineCommandRenderKind {
    Normal,
    Bold,
    Monospaced,
    Emphasized,
    Anchor,
}

impl CommentInlineCommandRenderKind {
    fn from_raw(raw: c_uint) -> Self {
        match raw {
            1 => Self::Bold,
            2 => Self::Monospaced,
            3 => Self::Emphasized,
            4 => Self::Anchor,
            _ => Self::Normal,
        }
    }
}

/// Direction given in a `\param [in,out]` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentParamPassDirection {
    In,
    Out,
    InOut,
}

impl CommentParamPassDirection {
    fn from_raw(raw: c_uint) -> Self {
        match raw {
            1 => Self::Out,
            2 => Self::InOut,
            _ => Self::In,
        }
    }
}

/// A node of a parsed documentation comment.
#[derive(Clone, Copy)]
pub struct Comment<'tu> {
    raw: ffi::CXComment,
    _tu: PhantomData<&'tu ()>,
}

impl<'tu> Comment<'tu> {
    pub(crate) fn from_raw(raw: ffi::CXComment) -> Self {
        Comment { raw, _tu: PhantomData }
    }

    pub fn kind(&self) -> CommentKind {
        CommentKind::from_raw(unsafe { ffi::clang_Comment_getKind(self.raw) })
    }

    pub fn is_null(&self) -> bool {
        self.kind() == CommentKind::Null
    }

    pub fn children(&self) -> Vec<Comment<'tu>> {
        let n = unsafe { ffi::clang_Comment_getNumChildren(self.raw) };
        (0..n)
            .map(|i| Comment::from_raw(unsafe { ffi::clang_Comment_getChild(self.raw, i) }))
            .collect()
    }

    /// True for text and paragraph nodes that hold only whitespace.
    pub fn is_whitespace(&self) -> bool {
        unsafe { ffi::clang_Comment_isWhitespace(self.raw) != 0 }
    }

    /// Text of a text node.
    pub fn text(&self) -> String {
        cxstring::take(unsafe { ffi::clang_TextComment_getText(self.raw) })
    }

    pub fn inline_command_name(&self) -> String {
        cxstring::take(unsafe { ffi::clang_InlineCommandComment_getCommandName(self.raw) })
    }

    pub fn inline_command_render_kind(&self) -> CommentInlineCommandRenderKind {
        CommentInlineCommandRenderKind::from_raw(unsafe { ffi::clang_InlineCommandComment_getRenderKind(self.raw) })
    }

    pub fn inline_command_arguments(&self) -> Vec<String> {
        let n = unsafe { ffi::clang_InlineCommandComment_getNumArgs(self.raw) };
        (0..n)
            .map(|i| cxstring::take(unsafe { ffi::clang_InlineCommandComment_getArgText(self.raw, i) }))
            .collect()
    }

    pub fn block_command_name(&self) -> String {
        cxstring::take(unsafe { ffi::clang_BlockCommandComment_getCommandName(self.raw) })
    }

    pub fn param_name(&self) -> String {
        cxstring::take(unsafe { ffi::clang_ParamCommandComment_getParamName(self.raw) })
    }

    pub fn is_param_direction_explicit(&self) -> bool {
        unsafe { ffi::clang_ParamCommandComment_isDirectionExplicit(self.raw) != 0 }
    }

    pub fn param_direction(&self) -> CommentParamPassDirection {
        CommentParamPassDirection::from_raw(unsafe { ffi::clang_ParamCommandComment_getDirection(self.raw) })
    }

    /// HTML rendering of a full comment.
    pub fn html(&self) -> String {
        cxstring::take(unsafe { ffi::clang_FullComment_getAsHTML(self.raw) })
    }

    /// XML rendering of a full comment.
    pub fn xml(&self) -> String {
        cxstring::take(unsafe { ffi::clang_FullComment_getAsXML(self.raw) })
    }
}

impl std::fmt::Debug for Comment<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Comment").field("kind", &self.kind()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::index::Index;
    use crate::translation_unit::TranslationUnitFlags;
    use crate::unsaved::UnsavedFiles;

    const SOURCE: &str = "\
/// Copies \\b bytes between buffers.
/// \\param[in] src where to read from
/// \\param[out] dst where to write to
/// \\returns the number of bytes copied
int copy(const char *src, char *dst);
int undocumented(void);
";

    fn collect<'tu>(comment: Comment<'tu>, out: &mut Vec<Comment<'tu>>) {
        out.push(comment);
        for child in comment.children() {
            collect(child, out);
        }
    }

    #[test]
    fn parses_doxygen_commands() {
        let index = Index::new(false, false);
        let unsaved: UnsavedFiles = [("doc.c", SOURCE)].into_iter().collect();
        let tu = index.parse(Some("doc.c"), &[], &unsaved, TranslationUnitFlags::NONE).unwrap();
        let children: Vec<Cursor<'_>> = tu.cursor().children();
        let copy = children[0];

        assert_eq!(copy.brief_comment_text().as_deref(), Some("Copies bytes between buffers."));
        assert!(copy.raw_comment_text().is_some_and(|t| t.starts_with("/// Copies")));

        let full = copy.parsed_comment();
        assert_eq!(full.kind(), CommentKind::FullComment);
        let mut nodes = Vec::new();
        collect(full, &mut nodes);

        let params: Vec<(String, CommentParamPassDirection)> = nodes
            .iter()
            .filter(|c| c.kind() == CommentKind::ParamCommand)
            .map(|c| (c.param_name(), c.param_direction()))
            .collect();
        assert_eq!(
            params,
            [("src".to_string(), CommentParamPassDirection::In), ("dst".to_string(), CommentParamPassDirection::Out)]
        );
        assert!(nodes
            .iter()
            .filter(|c| c.kind() == CommentKind::ParamCommand)
            .all(|c| c.is_param_direction_explicit()));

        let bold = nodes.iter().find(|c| c.kind() == CommentKind::InlineCommand).unwrap();
        assert_eq!(bold.inline_command_name(), "b");
        assert_eq!(bold.inline_command_render_kind(), CommentInlineCommandRenderKind::Bold);
        assert_eq!(bold.inline_command_arguments(), ["bytes"]);

        assert!(nodes
            .iter()
            .any(|c| c.kind() == CommentKind::BlockCommand && c.block_command_name() == "returns"));
        assert!(nodes.iter().any(|c| c.kind() == CommentKind::Text && c.text().contains("between buffers")));
        assert!(full.xml().contains("<Name>copy</Name>"));
        assert!(full.html().contains("src"));

        let bare = children[1].parsed_comment();
        assert!(bare.is_null());
        assert!(children[1].brief_comment_text().is_none());
    }
}
