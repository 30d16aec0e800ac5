//! Line classification for block markers.
//!
//! Markers are recognised only when they make up a whole line:
//!
//! - `[% IF <name> %]` opens a positive block
//! - `[% IF NOT <name> %]` opens a negated block
//! - `[% END IF %]` closes the innermost open block of either kind
//!
//! Anything that does not match exactly is ordinary text.

/// Prefix of a negated opener.
const IF_NOT_PREFIX: &str = "[% IF NOT ";

/// Prefix of a positive opener.
const IF_PREFIX: &str = "[% IF ";

/// Suffix shared by both opener kinds.
const OPENER_SUFFIX: &str = " %]";

/// The closer line, shared by both opener kinds.
pub const CLOSER: &str = "[% END IF %]";

/// Kind of a conditional block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// `[% IF name %]`: kept when `name` is bound.
    If,
    /// `[% IF NOT name %]`: kept when `name` is unbound.
    IfNot,
}

impl BlockKind {
    /// Whether a block of this kind survives, given whether its variable is bound.
    pub fn keeps(self, bound: bool) -> bool {
        match self {
            BlockKind::If => bound,
            BlockKind::IfNot => !bound,
        }
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockKind::If => write!(f, "IF"),
            BlockKind::IfNot => write!(f, "IF NOT"),
        }
    }
}

/// What a single template line is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// A block opener with the variable name it tests.
    Open { kind: BlockKind, name: &'a str },
    /// `[% END IF %]`
    Close,
    /// Anything else.
    Text,
}

/// Classify a raw line.
///
/// Openers and the closer are matched with trailing whitespace removed. When
/// `inside_block` is set, a closer may also carry leading whitespace.
pub fn classify(line: &str, inside_block: bool) -> Line<'_> {
    let trimmed = line.trim_end();

    if trimmed == CLOSER || (inside_block && trimmed.trim_start() == CLOSER) {
        return Line::Close;
    }

    if let Some(name) = opener_name(trimmed, IF_NOT_PREFIX) {
        return Line::Open {
            kind: BlockKind::IfNot,
            name,
        };
    }

    // A line that starts like a negated opener is never a positive one.
    if !trimmed.starts_with(IF_NOT_PREFIX)
        && let Some(name) = opener_name(trimmed, IF_PREFIX)
    {
        return Line::Open {
            kind: BlockKind::If,
            name,
        };
    }

    Line::Text
}

/// Extract the name between `prefix` and the opener suffix; the name must be non-empty.
fn opener_name<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    if line.len() <= prefix.len() + OPENER_SUFFIX.len() {
        return None;
    }
    line.strip_prefix(prefix)?.strip_suffix(OPENER_SUFFIX)
}

/// The placeholder text for `name`, e.g. `[% CLASS %]`.
pub fn placeholder(name: &str) -> String {
    format!("[% {} %]", name)
}
