//! Level-order tree notation.
//!
//! `1,null,2,null,3` describes root `1` with an absent left child, right child `2`,
//! and `3` as the right child of `2`. Each present node takes the next two tokens
//! as its children, in breadth-first order. Surrounding brackets are optional and
//! missing trailing tokens mean absent children.

use std::collections::VecDeque;

use thiserror::Error;
use tracing::{debug, instrument};

use crate::domain::{Node, Tree};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty token at position {position}")]
    EmptyToken { position: usize },

    #[error("value '{token}' at position {position} has no parent to attach to")]
    UnattachedValue { position: usize, token: String },
}

pub type ParseResult<T> = Result<T, ParseError>;

struct Entry {
    value: String,
    children: [Option<usize>; 2],
}

/// Parses level-order notation into a tree of string values.
///
/// Positions in errors are zero-based token indices. Leftover `null_token`s after
/// the last present node are ignored, leftover values are rejected.
#[instrument(level = "debug")]
pub fn parse_level_order(input: &str, null_token: &str) -> ParseResult<Tree<String>> {
    let trimmed = input.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(trimmed)
        .trim();
    if inner.is_empty() {
        return Ok(None);
    }

    let tokens: Vec<&str> = inner.split(',').map(str::trim).collect();
    if let Some(position) = tokens.iter().position(|t| t.is_empty()) {
        return Err(ParseError::EmptyToken { position });
    }
    debug!("{} tokens", tokens.len());

    let mut tokens = tokens.into_iter().enumerate();
    let mut entries: Vec<Entry> = Vec::new();
    let mut queue = VecDeque::new();

    if let Some((_, root)) = tokens.next() {
        if root != null_token {
            entries.push(Entry {
                value: root.to_string(),
                children: [None, None],
            });
            queue.push_back(0);
        }
    }

    'attach: while let Some(parent) = queue.pop_front() {
        for side in 0..2 {
            let Some((_, token)) = tokens.next() else {
                break 'attach;
            };
            if token == null_token {
                continue;
            }
            let idx = entries.len();
            entries.push(Entry {
                value: token.to_string(),
                children: [None, None],
            });
            entries[parent].children[side] = Some(idx);
            queue.push_back(idx);
        }
    }

    if let Some((position, token)) = tokens.find(|(_, t)| *t != null_token) {
        return Err(ParseError::UnattachedValue {
            position,
            token: token.to_string(),
        });
    }

    Ok(assemble(entries))
}

/// Builds owned nodes bottom-up; children always come after their parent in `entries`.
fn assemble(entries: Vec<Entry>) -> Tree<String> {
    let mut built: Vec<Option<Node<String>>> = Vec::with_capacity(entries.len());
    built.resize_with(entries.len(), || None);

    for (idx, entry) in entries.into_iter().enumerate().rev() {
        let [left, right] = entry.children;
        let mut node = Node::new(entry.value);
        node.left = left.and_then(|i| built[i].take()).map(Box::new);
        node.right = right.and_then(|i| built[i].take()).map(Box::new);
        built[idx] = Some(node);
    }

    built.into_iter().next().flatten().map(Box::new)
}
