use serde::Serialize;

use crate::trees::attribute::Attribute;
use crate::trees::node::TreeNode;

/// Share of the total information gain contributed by one attribute, as a
/// percentage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureImportance {
    pub attribute: Attribute,
    pub importance: f64,
}

/// Display-oriented rendering of a trained tree. Internal nodes are named
/// after their upper-cased splitting attribute, leaves as
/// `PREDICTION: <label>`, and every child name carries the bin value that
/// selects it as a `<bin> ➜ ` prefix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeView {
    pub name: String,
    pub samples: usize,
    pub entropy: f64,
    pub children: Vec<TreeView>,
}

impl TreeView {
    pub fn from_node(node: &TreeNode) -> Self {
        let name = match node {
            TreeNode::Leaf { prediction, .. } => format!("PREDICTION: {prediction}"),
            TreeNode::Internal { attribute, .. } => attribute.name().to_uppercase(),
        };

        let children = match node {
            TreeNode::Internal { children, .. } => children
                .iter()
                .map(|(bin, child)| {
                    let mut view = TreeView::from_node(child);
                    view.name = format!("{bin} ➜ {}", view.name);
                    view
                })
                .collect(),
            TreeNode::Leaf { .. } => Vec::new(),
        };

        TreeView {
            name,
            samples: node.samples(),
            entropy: round_entropy(node.entropy()),
            children,
        }
    }
}

fn round_entropy(entropy: f64) -> f64 {
    (entropy * 1000.0).round() / 1000.0
}
