//! Treeviz formatter
//!
//! One line per node, nesting drawn with box connectors:
//!
//! ```text
//! ⧉ corpus eng
//! └─ ▤ document d1
//!    └─ ¶ sentence 1
//!       ├─ ◇ 1 NP
//!       │  ├─ • the DT
//!       │  └─ • dog NN
//!       └─ ◇ 2 VGF
//!          └─ • barked VBD
//! ```
//!
//! Labels are truncated to 30 characters.
//!
//! Icons
//!     Corpus: ⧉
//!     Document: ▤
//!     Sentence: ¶
//!     Chunk: ◇
//!     Token: •

use super::registry::{FormatError, Formatter};
use crate::ssf::ast::{AstNode, Corpus};

const MAX_LABEL_CHARS: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

/// Get the icon for a node type
fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Corpus" => "⧉",
        "Document" => "▤",
        "Sentence" => "¶",
        "Chunk" => "◇",
        "Token" => "•",
        _ => "○",
    }
}

fn format_node(node: &dyn AstNode, prefix: &str, child_index: usize, child_count: usize) -> String {
    let mut output = String::new();

    let is_last = child_index == child_count - 1;
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        get_icon(node.node_type()),
        truncate(&node.display_label(), MAX_LABEL_CHARS)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "   " } else { "│  " });
    let children = node.child_nodes();
    for (i, child) in children.iter().enumerate() {
        output.push_str(&format_node(*child, &child_prefix, i, children.len()));
    }

    output
}

/// Render any node and its subtree
pub fn to_treeviz_str(node: &dyn AstNode) -> String {
    let mut output = format!(
        "{} {}\n",
        get_icon(node.node_type()),
        truncate(&node.display_label(), MAX_LABEL_CHARS)
    );
    let children = node.child_nodes();
    for (i, child) in children.iter().enumerate() {
        output.push_str(&format_node(*child, "", i, children.len()));
    }
    output
}

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, corpus: &Corpus) -> Result<String, FormatError> {
        Ok(to_treeviz_str(corpus))
    }

    fn description(&self) -> &str {
        "Tree view, one line per node"
    }
}
