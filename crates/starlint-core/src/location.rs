use serde::{Deserialize, Serialize};

use crate::diagnostic::Diagnostic;

/// Byte range of a diagnostic within a source file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TextRange {
    start: usize,
    end: usize,
}

impl TextRange {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }
}

/// Sourcecode location.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    row: usize,
    column: usize,
}

impl Location {
    pub fn new(row: usize, column: usize) -> Self {
        Location { row, column }
    }

    /// Current row
    pub fn row(&self) -> usize {
        self.row
    }

    /// Current column
    pub fn column(&self) -> usize {
        self.column
    }
}

pub fn find_new_lines(contents: &str) -> Vec<usize> {
    contents
        .match_indices('\n')
        .map(|x| x.0)
        .collect::<Vec<usize>>()
}

pub fn find_row_col(start: usize, loc_new_lines: &[usize]) -> (usize, usize) {
    let n_new_lines = loc_new_lines.partition_point(|x| *x <= start);
    let last_new_line = if n_new_lines == 0 {
        0
    } else {
        loc_new_lines[n_new_lines - 1]
    };

    let col = start - last_new_line;
    let row = n_new_lines + 1;
    (row, col)
}

// If there are diagnostics to report, this is where their byte range in the
// file is converted to their location (row, column).
pub fn compute_lints_location(
    diagnostics: Vec<Diagnostic>,
    loc_new_lines: &[usize],
) -> Vec<Diagnostic> {
    diagnostics
        .into_iter()
        .map(|mut diagnostic| {
            let start = diagnostic.range.start();
            let loc = find_row_col(start, loc_new_lines);
            diagnostic.location = Some(Location::new(loc.0, loc.1));
            diagnostic
        })
        .collect()
}
