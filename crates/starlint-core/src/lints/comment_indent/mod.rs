pub(crate) mod comment_indent;
