//! Lint context for rule execution

use common::DOC_COMMENT_MARKER;
use oxc_ast::{AstKind, Comment};
use oxc_semantic::{NodeId, Semantic};
use oxc_span::Span;

/// Read-only view of the document handed to every rule
pub struct LintContext<'a> {
    /// Source code being linted
    source_text: &'a str,
    /// Path of the document as given by the host
    filename: &'a str,
    /// Node table, parent index and comments
    semantic: &'a Semantic<'a>,
}

impl<'a> LintContext<'a> {
    pub fn new(semantic: &'a Semantic<'a>, filename: &'a str) -> Self {
        Self {
            source_text: semantic.source_text(),
            filename,
            semantic,
        }
    }

    /// Get the source text
    pub fn source_text(&self) -> &'a str {
        self.source_text
    }

    /// Get the document path
    pub fn filename(&self) -> &'a str {
        self.filename
    }

    pub fn semantic(&self) -> &'a Semantic<'a> {
        self.semantic
    }

    /// Kind of the parent of `node_id`
    pub fn parent_kind(&self, node_id: NodeId) -> AstKind<'a> {
        self.semantic.nodes().parent_kind(node_id)
    }

    /// Get a slice of source text for a span
    pub fn span_text(&self, span: Span) -> &'a str {
        &self.source_text[span.start as usize..span.end as usize]
    }

    /// Comments directly before `offset`, separated from it and from each
    /// other only by whitespace, in source order
    pub fn comments_before(&self, offset: u32) -> Vec<&'a Comment> {
        let comments = self.semantic.comments();
        let mut cursor = offset;
        let end = comments.partition_point(|comment| comment.span.end <= cursor);

        let mut found = Vec::new();
        for comment in comments[..end].iter().rev() {
            let gap = &self.source_text[comment.span.end as usize..cursor as usize];
            if !gap.trim().is_empty() {
                break;
            }
            found.push(comment);
            cursor = comment.span.start;
        }
        found.reverse();
        found
    }

    /// Check if a comment is a block comment using the `/** ... */` marker
    pub fn is_doc_comment(&self, comment: &Comment) -> bool {
        comment.is_block()
            && self
                .span_text(comment.content_span())
                .starts_with(DOC_COMMENT_MARKER)
    }
}
