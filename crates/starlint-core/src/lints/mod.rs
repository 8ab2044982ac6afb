pub(crate) mod comment_indent;

pub use comment_indent::comment_indent::{
    CommentViolation, classify_lines, format_comment, validate,
};
