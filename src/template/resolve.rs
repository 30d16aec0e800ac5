//! Conditional block resolution.
//!
//! Resolution runs in two passes over a template's lines:
//!
//! 1. [`parse`] builds a tree of blocks. Every opener is pushed onto a single
//!    stack of open blocks, tagged with its kind, whether or not another block
//!    is already open. A closer pops the top of that stack, which is always
//!    the open opener with the largest line number regardless of its kind.
//! 2. [`evaluate`] walks the tree top-down. A kept block contributes its
//!    (recursively evaluated) body; a dropped block contributes nothing and
//!    its contents are never looked at. Each surviving text line has trailing
//!    whitespace removed and is substituted exactly once.
//!
//! Line numbers are 1-based positions in the input and never shift, so error
//! reports always point at the template as written.

use super::marker::{BlockKind, Line, classify};
use super::substitute::substitute;
use crate::vars::VariableTable;
use thiserror::Error;
use tracing::trace;

/// Why a template's blocks could not be resolved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// `[% END IF %]` with no block open.
    #[error("line {line}: unbalanced END IF")]
    UnmatchedCloser {
        /// 1-based line number of the closer in the input as written.
        line: usize,
    },

    /// End of input with openers never closed.
    #[error("{}", unterminated_report(.if_lines, .if_not_lines))]
    UnterminatedBlock {
        /// 1-based line numbers of unclosed `[% IF name %]` openers, outermost first.
        if_lines: Vec<usize>,
        /// 1-based line numbers of unclosed `[% IF NOT name %]` openers, outermost first.
        if_not_lines: Vec<usize>,
    },
}

/// One report per opener kind that has unclosed entries.
fn unterminated_report(if_lines: &[usize], if_not_lines: &[usize]) -> String {
    let mut reports = Vec::new();
    for (kind, lines) in [(BlockKind::If, if_lines), (BlockKind::IfNot, if_not_lines)] {
        if lines.is_empty() {
            continue;
        }
        let joined: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        reports.push(format!("Unhandled {} at lines: {}", kind, joined.join(",")));
    }
    reports.join("; ")
}

/// A node of the block tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<'a> {
    /// A line outside any marker, as written.
    Text(&'a str),
    /// A resolved opener/closer pair and everything between them.
    Block(Block<'a>),
}

/// A conditional block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'a> {
    pub kind: BlockKind,
    /// The variable name the block tests.
    pub name: &'a str,
    /// Line number of the opener.
    pub opened_at: usize,
    /// Line number of the matching closer.
    pub closed_at: usize,
    pub body: Vec<Node<'a>>,
}

/// A block whose closer has not been seen yet.
struct OpenBlock<'a> {
    kind: BlockKind,
    name: &'a str,
    opened_at: usize,
    body: Vec<Node<'a>>,
}

impl<'a> OpenBlock<'a> {
    fn close(self, closed_at: usize) -> Block<'a> {
        Block {
            kind: self.kind,
            name: self.name,
            opened_at: self.opened_at,
            closed_at,
            body: self.body,
        }
    }
}

/// Build the block tree for a template.
///
/// Fails on the first closer with no open block, or at end of input if any
/// block is still open.
pub fn parse<'a, S: AsRef<str>>(lines: &'a [S]) -> Result<Vec<Node<'a>>, ResolveError> {
    let mut root: Vec<Node<'a>> = Vec::new();
    let mut open: Vec<OpenBlock<'a>> = Vec::new();

    for (idx, raw) in lines.iter().enumerate() {
        let line = idx + 1;
        let text = raw.as_ref();

        let node = match classify(text, !open.is_empty()) {
            Line::Open { kind, name } => {
                open.push(OpenBlock {
                    kind,
                    name,
                    opened_at: line,
                    body: Vec::new(),
                });
                continue;
            }
            Line::Close => match open.pop() {
                Some(block) => Node::Block(block.close(line)),
                None => return Err(ResolveError::UnmatchedCloser { line }),
            },
            Line::Text => Node::Text(text),
        };

        match open.last_mut() {
            Some(parent) => parent.body.push(node),
            None => root.push(node),
        }
    }

    if !open.is_empty() {
        let lines_of = |kind: BlockKind| -> Vec<usize> {
            open.iter()
                .filter(|b| b.kind == kind)
                .map(|b| b.opened_at)
                .collect()
        };
        return Err(ResolveError::UnterminatedBlock {
            if_lines: lines_of(BlockKind::If),
            if_not_lines: lines_of(BlockKind::IfNot),
        });
    }

    Ok(root)
}

/// Counters gathered while evaluating a tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub lines_in: usize,
    pub lines_out: usize,
    /// Blocks whose body was kept, nested ones included.
    pub blocks_kept: usize,
    /// Blocks removed whole. Blocks nested inside a removed block are not counted.
    pub blocks_dropped: usize,
}

/// Flatten a block tree into output lines.
pub fn evaluate(nodes: &[Node<'_>], vars: &VariableTable, stats: &mut RenderStats) -> Vec<String> {
    let mut out = Vec::new();
    emit(nodes, vars, stats, &mut out);
    stats.lines_out = out.len();
    out
}

fn emit(nodes: &[Node<'_>], vars: &VariableTable, stats: &mut RenderStats, out: &mut Vec<String>) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push(substitute(text.trim_end(), vars)),
            Node::Block(block) => {
                let kept = block.kind.keeps(vars.has(block.name));
                trace!(
                    kind = %block.kind,
                    name = block.name,
                    opened_at = block.opened_at,
                    closed_at = block.closed_at,
                    kept,
                    "resolved block"
                );
                if kept {
                    stats.blocks_kept += 1;
                    emit(&block.body, vars, stats, out);
                } else {
                    stats.blocks_dropped += 1;
                }
            }
        }
    }
}
