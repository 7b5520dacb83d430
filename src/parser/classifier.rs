//! Line classification: depth and name recovery from decorated text.
//!
//! Each input line may use box-drawing connectors (`├──`, `└──`), vertical
//! continuation glyphs (`│`), or plain space indentation. All three reduce to
//! one canonical depth rule: one level per 4 columns of indentation, with a
//! connector marking the entry one level below the column it sits in.

use crate::types::Depth;

/// Branch connectors marking a tree entry ("tee" and "elbow").
const CONNECTORS: [char; 2] = ['├', '└'];

/// Characters that decorate a line without being part of the entry name.
const DECORATION: [char; 5] = [' ', '│', '├', '└', '─'];

/// A raw input line reduced to its structural content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    /// Nesting level relative to the root (root = 0)
    pub depth: Depth,
    /// Entry name with all decoration and any trailing separator stripped
    pub name: String,
    /// Folder per the trailing-separator / no-dot heuristic
    pub is_folder: bool,
}

/// Classify one raw line. Returns `None` for blank or decoration-only lines,
/// which contribute no node.
pub fn classify(raw: &str) -> Option<ClassifiedLine> {
    if raw.trim().is_empty() {
        return None;
    }
    let name = extract_name(raw)?;
    let is_folder = is_folder_name(&name);
    Some(ClassifiedLine {
        depth: line_depth(raw),
        name: name.trim_end_matches('/').to_string(),
        is_folder,
    })
}

/// Canonical depth rule, in precedence order:
/// 1. connector present: depth = connector column / 4, plus 1;
/// 2. continuation glyph leads the line: depth = first content column / 4;
/// 3. no glyphs: depth 0 at column 0, otherwise leading-space count / 4.
///
/// Columns are counted in characters, not bytes.
pub fn line_depth(line: &str) -> Depth {
    for (col, ch) in line.chars().enumerate() {
        if CONNECTORS.contains(&ch) {
            return col / 4 + 1;
        }
    }

    if line.trim_start().starts_with('│') {
        for (col, ch) in line.chars().enumerate() {
            if !DECORATION.contains(&ch) {
                return col / 4;
            }
        }
        return 0;
    }

    for (col, ch) in line.chars().enumerate() {
        if !DECORATION.contains(&ch) {
            return if col == 0 { 0 } else { col / 4 };
        }
    }
    0
}

/// Strip leading decoration, trailing whitespace, and residual dash/space
/// runs from both ends. Returns `None` when nothing remains.
pub fn extract_name(line: &str) -> Option<String> {
    let cleaned = line.trim_end();
    let name: String = cleaned
        .chars()
        .skip_while(|c| DECORATION.contains(c))
        .collect();
    let name = name.trim_matches(|c| c == '─' || c == ' ');
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Folder heuristic: explicit trailing separator, or a final path segment
/// with no "." in it. A dotted folder name without a trailing separator
/// (e.g. `.config`) classifies as a file; that ambiguity is documented
/// behavior, not corrected here.
pub fn is_folder_name(name: &str) -> bool {
    if name.ends_with('/') {
        return true;
    }
    let last_segment = name.rsplit('/').next().unwrap_or(name);
    !last_segment.contains('.')
}
