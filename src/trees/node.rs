use crate::data::book::SalesStatus;
use crate::trees::attribute::Attribute;

/// Decision tree node
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    Leaf {
        prediction: SalesStatus,
        samples: usize,
        entropy: f64,
    },
    Internal {
        attribute: Attribute,
        /// Child per observed bin, in first-observed order.
        children: Vec<(&'static str, TreeNode)>,
        samples: usize,
        entropy: f64,
    },
}

impl TreeNode {
    pub fn samples(&self) -> usize {
        match self {
            TreeNode::Leaf { samples, .. } => *samples,
            TreeNode::Internal { samples, .. } => *samples,
        }
    }

    pub fn entropy(&self) -> f64 {
        match self {
            TreeNode::Leaf { entropy, .. } => *entropy,
            TreeNode::Internal { entropy, .. } => *entropy,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf { .. })
    }

    /// The subtree a record with this bin value descends into, if the bin
    /// was seen during training.
    pub fn child(&self, bin: &str) -> Option<&TreeNode> {
        match self {
            TreeNode::Internal { children, .. } => children
                .iter()
                .find(|(child_bin, _)| *child_bin == bin)
                .map(|(_, child)| child),
            TreeNode::Leaf { .. } => None,
        }
    }
}
