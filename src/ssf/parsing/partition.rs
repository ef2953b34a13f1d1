//! Chunk partitioning
//!
//! Splits the body of a sentence or chunk into its maximal top-level units by
//! scanning lines with a nesting-depth counter. A unit is either a single line at
//! depth 0 (a token) or the full span of a chunk, from its opening line to the
//! line that brings the depth back to 0, including everything nested inside.
//!
//! ```text
//! 1.1	the	DT          → unit (token)
//! 1.2	((	JJP         ┐
//! 1.2.1	((	X       │
//! 1.2.1.1	big	JJ      │ → unit (chunk)
//! 	))              │
//! 	))              ┘
//! 1.3	dog	NN          → unit (token)
//! ```
//!
//! Nesting is unbounded, which is why this is a counter scan and not a pattern
//! match. Markers that do not balance fail only their own fragment: a close with
//! nothing open ends an unbalanced unit on the spot and the scan restarts at depth
//! 0, and a chunk left open at the end is flagged as unbalanced. Sibling units on
//! either side are unaffected.

use crate::ssf::lexing::{classify_line, is_pseudo_chunk_header, LineKind};

/// One top-level unit of a partitioned body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit<'a> {
    lines: Vec<&'a str>,
    balanced: bool,
}

impl<'a> Unit<'a> {
    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    /// The unit's full text, lines joined with `\n`
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// False for fragments whose markers never balanced
    pub fn is_balanced(&self) -> bool {
        self.balanced
    }

    /// Whether the unit starts with a chunk opening line
    pub fn is_chunk(&self) -> bool {
        self.lines
            .first()
            .is_some_and(|line| classify_line(line) == LineKind::Open)
    }

    /// Whether every line of the unit is blank
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|line| line.trim().is_empty())
    }
}

/// Partition `lines` into top-level units
///
/// Every input line lands in exactly one unit and units keep source order, so
/// concatenating the units reproduces the input.
pub fn partition<'a>(lines: &[&'a str]) -> Vec<Unit<'a>> {
    let mut units = Vec::new();
    let mut buffer = Vec::new();
    let mut depth: i64 = 0;

    for &line in lines {
        depth += classify_line(line).depth_delta();
        buffer.push(line);

        if depth < 0 {
            // a stray close fails only the fragment it ends
            units.push(Unit {
                lines: std::mem::take(&mut buffer),
                balanced: false,
            });
            depth = 0;
        } else if depth == 0 {
            units.push(Unit {
                lines: std::mem::take(&mut buffer),
                balanced: true,
            });
        }
    }

    if !buffer.is_empty() {
        units.push(Unit {
            lines: buffer,
            balanced: false,
        });
    }

    units
}

/// Remove the `SSF` wrapper pseudo-chunk from a sentence body
///
/// When the first non-blank line opens the wrapper, that line and the last
/// closing line of the body are dropped, leaving the wrapped chunks at depth 0.
/// Bodies without the wrapper are returned as they are.
pub fn strip_pseudo_chunk<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    let Some(header) = lines.iter().position(|line| !line.trim().is_empty()) else {
        return lines.to_vec();
    };
    if !is_pseudo_chunk_header(lines[header]) {
        return lines.to_vec();
    }

    let rest = &lines[header + 1..];
    let closing = rest
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .filter(|&i| classify_line(rest[i]) == LineKind::Close);

    match closing {
        Some(i) => rest[..i].to_vec(),
        None => rest.to_vec(),
    }
}

/// Partition a sentence body, dropping the `SSF` wrapper first
pub fn partition_body(body: &str) -> Vec<Unit<'_>> {
    let lines: Vec<&str> = body.lines().collect();
    partition(&strip_pseudo_chunk(&lines))
}
