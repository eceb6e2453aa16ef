use crate::avl_tree::tree::{self, Direction, Tree};
use std::cmp;

/// Classification of a node by the difference of its subtree heights.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BalanceFactor {
    LeftHeavy,
    Balanced,
    RightHeavy,
}

/// A struct representing an internal node of an avl tree.
///
/// A node exclusively owns both of its subtrees, so dropping a node drops everything below it.
#[derive(Debug)]
pub struct Node {
    pub(crate) key: i32,
    pub(crate) height: usize,
    pub(crate) left: Tree,
    pub(crate) right: Tree,
}

impl Node {
    pub(crate) fn new(key: i32) -> Self {
        Node {
            key,
            height: 1,
            left: None,
            right: None,
        }
    }

    /// Returns the key stored in the node.
    pub fn key(&self) -> i32 {
        self.key
    }

    /// Returns the height of the subtree rooted at the node. A leaf has a height of one.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the left child of the node, if any.
    pub fn left(&self) -> Option<&Node> {
        self.left.as_ref().map(|node| &**node)
    }

    /// Returns the right child of the node, if any.
    pub fn right(&self) -> Option<&Node> {
        self.right.as_ref().map(|node| &**node)
    }

    /// Returns the height of the right subtree minus the height of the left subtree.
    pub fn balance(&self) -> i32 {
        (tree::height(&self.right) as i32) - (tree::height(&self.left) as i32)
    }

    pub(crate) fn balance_factor(&self) -> BalanceFactor {
        let balance = self.balance();
        if balance < -1 {
            BalanceFactor::LeftHeavy
        } else if balance > 1 {
            BalanceFactor::RightHeavy
        } else {
            BalanceFactor::Balanced
        }
    }

    pub(crate) fn update(&mut self) {
        let Node { ref mut height, ref left, ref right, .. } = self;
        *height = cmp::max(tree::height(left), tree::height(right)) + 1;
    }

    pub(crate) fn child_mut(&mut self, direction: Direction) -> &mut Tree {
        match direction {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }
}
