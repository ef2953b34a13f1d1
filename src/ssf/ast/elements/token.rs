//! Token element
//!
//! The leaf of the tree: one tab-separated SSF line such as
//!
//! ```text
//! 1.1	dog	NN	<fs af='dog,n,m,sg,3,d,0,0' name='dog'>
//! ```
//!
//! carrying its number, surface value, tag and feature structure.

use super::super::traits::{AstNode, Visitor};
use super::feature_structure::FeatureStructure;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    uid: usize,
    number: String,
    value: String,
    tag: String,
    features: FeatureStructure,
}

impl Token {
    pub fn new(
        uid: usize,
        number: impl Into<String>,
        value: impl Into<String>,
        tag: impl Into<String>,
        features: FeatureStructure,
    ) -> Self {
        Self {
            uid,
            number: number.into(),
            value: value.into(),
            tag: tag.into(),
            features,
        }
    }

    pub fn uid(&self) -> usize {
        self.uid
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    /// The surface word form
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn features(&self) -> &FeatureStructure {
        &self.features
    }

    /// Render the token back to its SSF line (without trailing newline)
    pub fn to_ssf_line(&self) -> String {
        if self.features.is_empty() {
            format!("{}\t{}\t{}", self.number, self.value, self.tag)
        } else {
            format!(
                "{}\t{}\t{}\t{}",
                self.number, self.value, self.tag, self.features
            )
        }
    }

    /// Equality on content, ignoring the machine uid
    pub fn same_content(&self, other: &Token) -> bool {
        self.number == other.number
            && self.value == other.value
            && self.tag == other.tag
            && self.features == other.features
    }
}

impl AstNode for Token {
    fn node_type(&self) -> &'static str {
        "Token"
    }

    fn display_label(&self) -> String {
        format!("{} {}", self.value, self.tag)
    }

    fn uid(&self) -> usize {
        self.uid
    }

    fn child_nodes(&self) -> Vec<&dyn AstNode> {
        Vec::new()
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_token(self);
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({} '{}' {})", self.number, self.value, self.tag)
    }
}
