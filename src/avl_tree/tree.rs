use crate::avl_tree::node::{BalanceFactor, Node};
use crate::error::{Error, Result};
use log::{debug, trace};
use std::cmp::Ordering;

/// An owning link to a subtree. The link held by a parent (or by the tree, for the root) is the
/// slot that a rotation rewrites.
pub type Tree = Option<Box<Node>>;

/// A side of a node.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Left,
    Right,
}

enum Placement {
    Here,
    Below(Direction),
    Duplicate,
}

pub fn height(tree: &Tree) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

// precondition: `node` has a right child
fn rotate_left(mut node: Box<Node>) -> Box<Node> {
    let mut pivot = match node.right.take() {
        Some(pivot) => pivot,
        None => unreachable!(),
    };
    debug!("rotating left around {} (pivot {})", node.key, pivot.key);
    node.right = pivot.left.take();
    node.update();
    pivot.left = Some(node);
    pivot.update();
    pivot
}

// precondition: `node` has a left child
fn rotate_right(mut node: Box<Node>) -> Box<Node> {
    let mut pivot = match node.left.take() {
        Some(pivot) => pivot,
        None => unreachable!(),
    };
    debug!("rotating right around {} (pivot {})", node.key, pivot.key);
    node.left = pivot.right.take();
    node.update();
    pivot.right = Some(node);
    pivot.update();
    pivot
}

/// Restores the height and balance of the node in `tree`. `direction` is the side of the heavy
/// child that was modified last, and picks between a single and a double rotation.
fn balance(tree: &mut Tree, direction: Direction) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    node = match (node.balance_factor(), direction) {
        (BalanceFactor::Balanced, _) => node,
        (BalanceFactor::LeftHeavy, Direction::Left) => rotate_right(node),
        (BalanceFactor::LeftHeavy, Direction::Right) => {
            node.left = node.left.take().map(rotate_left);
            rotate_right(node)
        },
        (BalanceFactor::RightHeavy, Direction::Right) => rotate_left(node),
        (BalanceFactor::RightHeavy, Direction::Left) => {
            node.right = node.right.take().map(rotate_right);
            rotate_left(node)
        },
    };

    *tree = Some(node);
}

// After a removal the heavy child may be level, in which case a single rotation suffices.
fn heavy_grandchild_side(node: &Node) -> Direction {
    match node.balance_factor() {
        BalanceFactor::LeftHeavy => match node.left {
            Some(ref child) if child.balance() > 0 => Direction::Right,
            _ => Direction::Left,
        },
        BalanceFactor::RightHeavy => match node.right {
            Some(ref child) if child.balance() < 0 => Direction::Left,
            _ => Direction::Right,
        },
        BalanceFactor::Balanced => Direction::Left,
    }
}

fn rebalance(tree: &mut Tree) {
    let direction = match tree {
        Some(ref node) => heavy_grandchild_side(node),
        None => return,
    };
    balance(tree, direction);
}

fn place(tree: &mut Tree, key: i32) -> Placement {
    let (direction, grown) = match tree {
        Some(ref mut node) => {
            let direction = match key.cmp(&node.key) {
                Ordering::Less => Direction::Left,
                Ordering::Greater => Direction::Right,
                Ordering::Equal => return Placement::Duplicate,
            };
            match place(node.child_mut(direction), key) {
                Placement::Duplicate => return Placement::Duplicate,
                Placement::Here => (direction, direction),
                Placement::Below(grown) => (direction, grown),
            }
        },
        None => {
            *tree = Some(Box::new(Node::new(key)));
            return Placement::Here;
        },
    };

    balance(tree, grown);
    Placement::Below(direction)
}

/// Inserts `key` into `tree`. Returns `false` and leaves the tree untouched if the key is
/// already present.
pub fn insert(tree: &mut Tree, key: i32) -> bool {
    match place(tree, key) {
        Placement::Duplicate => {
            debug!("ignoring duplicate key {}", key);
            false
        },
        _ => {
            trace!("inserted {}", key);
            true
        },
    }
}

// precondition: `tree` is not empty
fn remove_min(tree: &mut Tree) -> Box<Node> {
    if let Some(ref mut node) = tree {
        if node.left.is_some() {
            let min = remove_min(&mut node.left);
            rebalance(tree);
            return min;
        }
    }

    match tree.take() {
        Some(mut node) => {
            *tree = node.right.take();
            node
        },
        None => unreachable!(),
    }
}

// precondition: `tree` is not empty
fn remove_root(tree: &mut Tree) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => unreachable!(),
    };

    match (node.left.take(), node.right.take()) {
        (None, None) => trace!("removed leaf {}", node.key),
        (Some(child), None) | (None, Some(child)) => {
            trace!("removed {}, promoting {}", node.key, child.key);
            *tree = Some(child);
        },
        (Some(left), Some(right)) => {
            node.left = Some(left);
            node.right = Some(right);
            let successor = remove_min(&mut node.right);
            trace!("replacing {} with its in-order successor {}", node.key, successor.key);
            node.key = successor.key;
            *tree = Some(node);
            rebalance(tree);
        },
    }
}

/// Removes `key` from `tree`, rebalancing every ancestor of the removed node on the way back up.
pub fn remove(tree: &mut Tree, key: i32) -> Result<()> {
    let node = match tree {
        Some(ref mut node) => node,
        None => return Err(Error::NotFound(key)),
    };

    match key.cmp(&node.key) {
        Ordering::Less => remove(&mut node.left, key)?,
        Ordering::Greater => remove(&mut node.right, key)?,
        Ordering::Equal => {
            remove_root(tree);
            return Ok(());
        },
    }

    rebalance(tree);
    Ok(())
}

pub fn contains(tree: &Tree, key: i32) -> bool {
    let mut curr = tree;
    while let Some(ref node) = curr {
        curr = match key.cmp(&node.key) {
            Ordering::Less => &node.left,
            Ordering::Greater => &node.right,
            Ordering::Equal => return true,
        };
    }
    false
}

pub fn min(tree: &Tree) -> Option<i32> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        curr.key
    })
}

pub fn max(tree: &Tree) -> Option<i32> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        curr.key
    })
}

#[cfg(test)]
pub fn check_invariants(tree: &Tree, lower: Option<i32>, upper: Option<i32>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => {
            assert!(lower.map_or(true, |lower| lower < node.key));
            assert!(upper.map_or(true, |upper| node.key < upper));
            let left = check_invariants(&node.left, lower, Some(node.key));
            let right = check_invariants(&node.right, Some(node.key), upper);
            assert_eq!(node.height, left.max(right) + 1);
            assert!((right as i32 - left as i32).abs() <= 1);
            node.height
        },
    }
}
