use swc_common::comments::Comment;

use crate::diagnostic::*;
use crate::location::TextRange;
use crate::parse::ParsedSource;

/// A single line of a comment body.
///
/// `is_last` tags the terminal line, i.e. the one that precedes the closing
/// delimiter and should hold only the whitespace aligning it.
#[derive(Debug, PartialEq, Eq)]
pub struct LineRecord<'a> {
    pub text: &'a str,
    pub is_last: bool,
}

/// Split a comment body (after header removal) into classified lines.
pub fn classify_lines(body: &str) -> Vec<LineRecord<'_>> {
    let lines: Vec<&str> = body.split('\n').collect();
    let last = lines.len() - 1;
    lines
        .into_iter()
        .enumerate()
        .map(|(i, text)| LineRecord { text, is_last: i == last })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentViolation {
    /// The comment was not opened as `/**` followed immediately by a newline.
    Style,
    /// A line is not indented with exactly the required number of spaces
    /// before its star.
    Indent,
    /// An interior line lacks the continuation star.
    MissingStar,
    /// The continuation star is not followed by a single space before the
    /// content.
    MissingSpace,
}

/// ## What it does
///
/// Checks that documentation comments attached to declarations follow the
/// canonical multi-line layout, with every continuation star aligned under
/// the one in the opener:
///
/// ```js
/// /**
///  * A
///  * B
///  */
/// class A {}
/// ```
///
/// ## Why is this bad?
///
/// Mixed comment styles (`/* ... */` one-liners, drifting star columns,
/// missing stars) make documentation blocks hard to scan and produce noisy
/// diffs when a comment is later extended.
///
/// The violation is always fixable: the whole comment is rewritten into the
/// canonical form derived from its source column.
impl Violation for CommentViolation {
    fn name(&self) -> String {
        match self {
            Self::Style => "comment_style",
            Self::Indent => "star_indent",
            Self::MissingStar => "missing_star",
            Self::MissingSpace => "star_space",
        }
        .to_string()
    }
    fn body(&self) -> String {
        match self {
            Self::Style => "multiline comments must be like\n/**\n *\n */",
            Self::Indent => "stars must have identical indent",
            Self::MissingStar => "each line must start with *",
            Self::MissingSpace => "space must be after *",
        }
        .to_string()
    }
    fn suggestion(&self) -> Option<String> {
        match self {
            Self::Style => Some("Open documentation comments with `/**` on its own line.".to_string()),
            Self::Indent => Some("Align every `*` under the first one in `/**`.".to_string()),
            Self::MissingStar | Self::MissingSpace => None,
        }
    }
}

/// Validate a comment body against the canonical layout.
///
/// `body` is the text strictly between the `/*` and `*/` delimiters, `indent`
/// the number of spaces required before each continuation star. Rules are
/// ordered: the first failure wins, scanning lines top to bottom.
pub fn validate(body: &str, indent: usize) -> Option<CommentViolation> {
    // The canonical opener is `/**` directly followed by a line break, so the
    // body must start with the two characters `*\n`.
    let Some(body) = body.strip_prefix("*\n") else {
        return Some(CommentViolation::Style);
    };

    let prefix = " ".repeat(indent);
    for line in classify_lines(body) {
        let x = line.text;
        if !line.is_last && x.trim_start().chars().next() != Some('*') {
            return Some(CommentViolation::MissingStar);
        }
        if !x.starts_with(&prefix) {
            return Some(CommentViolation::Indent);
        }
        if line.is_last {
            continue;
        }
        if x[prefix.len()..].chars().next() != Some('*') {
            // extra spaces case
            return Some(CommentViolation::Indent);
        }
        if x.len() > prefix.len() + 1 && x[prefix.len() + 1..].chars().next() != Some(' ') {
            return Some(CommentViolation::MissingSpace);
        }
    }

    None
}

/// Rewrite any comment body into the canonical layout.
///
/// Total function: it never fails, its output is independent of whether the
/// input was valid, and reformatting its own output is a no-op. Returns the
/// full replacement text, delimiters included.
pub fn format_comment(body: &str, indent: usize) -> String {
    // Drop the canonical header if present, else a bare leading newline; this
    // also normalizes the plain `/* ... */` style.
    let body = if let Some(rest) = body.strip_prefix("*\n") {
        rest
    } else if let Some(rest) = body.strip_prefix('\n') {
        rest
    } else {
        body
    };

    let p = " ".repeat(indent);

    if !body.contains('\n') {
        let line = body.trim_start();
        let line = line.strip_prefix('*').unwrap_or(line);
        let line = line.trim_end();
        return format!("/**\n{p}* {line}\n{p}*/");
    }

    let lines: Vec<String> = classify_lines(body)
        .into_iter()
        .map(|line| {
            if line.is_last {
                return p.clone();
            }
            let x = line.text.trim();
            if x.is_empty() {
                return format!("{p}*");
            }
            let x = x.trim_start_matches('*');
            if x.is_empty() {
                return format!("{p}*");
            }
            if x.starts_with(' ') {
                format!("{p}*{x}")
            } else {
                format!("{p}* {x}")
            }
        })
        .collect();

    // The joined text ends with the bare prefix, so appending the closing
    // delimiter directly yields an aligned `*/`.
    format!("/**\n{}*/", lines.join("\n"))
}

pub fn comment_indent(comment: &Comment, source: &ParsedSource) -> Option<Diagnostic> {
    let indent = source.start_column(comment.span.lo) + 1;

    let violation = validate(&comment.text, indent)?;

    let start = source.relative_offset(comment.span.lo);
    let end = source.relative_offset(comment.span.hi);
    let range = TextRange::new(start, end);

    Some(Diagnostic::new(
        violation,
        range,
        Some(Fix {
            content: format_comment(&comment.text, indent),
            start,
            end,
        }),
    ))
}
