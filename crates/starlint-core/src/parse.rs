use std::path::Path;

use swc_common::comments::{Comment, CommentKind, Comments, SingleThreadedComments};
use swc_common::sync::Lrc;
use swc_common::{BytePos, FileName, SourceFile, SourceMap};
use swc_ecma_ast::Program;
use swc_ecma_parser::{Parser, StringInput, Syntax};

use crate::error::ParseError;

/// A parsed JavaScript file together with everything needed to resolve
/// comments back to source positions.
pub struct ParsedSource {
    pub program: Program,
    comments: SingleThreadedComments,
    source_map: Lrc<SourceMap>,
    source_file: Lrc<SourceFile>,
}

impl ParsedSource {
    /// Leading comments attached to the token at `pos`, block-style only.
    /// Line comments are out of scope for the canonical layout.
    pub fn leading_block_comments(&self, pos: BytePos) -> Vec<Comment> {
        self.comments
            .get_leading(pos)
            .unwrap_or_default()
            .into_iter()
            .filter(|comment| comment.kind == CommentKind::Block)
            .collect()
    }

    /// 0-based column of `pos` on its line.
    pub fn start_column(&self, pos: BytePos) -> usize {
        self.source_map.lookup_char_pos(pos).col.0
    }

    /// Byte offset of `pos` within the file contents.
    pub fn relative_offset(&self, pos: BytePos) -> usize {
        (pos.0 - self.source_file.start_pos.0) as usize
    }
}

// Takes the JavaScript code as a string, parses it, and collects the comment
// map alongside the AST. Comment attachment is the parser's: a comment
// belongs to the first token that follows it.
pub fn parse_js(contents: &str, file: &Path) -> Result<ParsedSource, ParseError> {
    let source_map: Lrc<SourceMap> = Default::default();
    let source_file =
        source_map.new_source_file(FileName::Real(file.to_path_buf()), contents.to_string());

    let comments = SingleThreadedComments::default();
    let mut parser = Parser::new(
        Syntax::default(),
        StringInput::from(&*source_file),
        Some(&comments),
    );

    let program = parser
        .parse_program()
        .map_err(|_| ParseError { filename: file.to_path_buf() })?;

    if !parser.take_errors().is_empty() {
        return Err(ParseError { filename: file.to_path_buf() });
    }

    Ok(ParsedSource {
        program,
        comments,
        source_map,
        source_file,
    })
}
