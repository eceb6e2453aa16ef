use crate::avl_tree::node::Node;
use crate::avl_tree::tree::Tree;
use crate::error::{Error, Result};
use serde_derive::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// The order in which a traversal visits the keys of a tree.
///
/// An order can be parsed from its kebab-case name or from its numeric tag (`0` for
/// breadth-first through `3` for post-order).
///
/// # Examples
/// ```
/// use avl::Order;
///
/// assert_eq!("in-order".parse::<Order>().unwrap(), Order::InOrder);
/// assert_eq!("0".parse::<Order>().unwrap(), Order::Bfs);
/// assert!("zigzag".parse::<Order>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Order {
    Bfs,
    PreOrder,
    InOrder,
    PostOrder,
}

impl Order {
    /// Every traversal order, breadth-first first.
    pub const ALL: [Order; 4] = [Order::Bfs, Order::PreOrder, Order::InOrder, Order::PostOrder];

    /// Returns a human readable name of the traversal, used as a header when reporting it.
    pub fn header(self) -> &'static str {
        match self {
            Order::Bfs => "BFS",
            Order::PreOrder => "DFS pre-order",
            Order::InOrder => "DFS in-order",
            Order::PostOrder => "DFS post-order",
        }
    }

    fn tag(self) -> &'static str {
        match self {
            Order::Bfs => "bfs",
            Order::PreOrder => "pre-order",
            Order::InOrder => "in-order",
            Order::PostOrder => "post-order",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl TryFrom<u8> for Order {
    type Error = Error;

    fn try_from(tag: u8) -> Result<Order> {
        match tag {
            0 => Ok(Order::Bfs),
            1 => Ok(Order::PreOrder),
            2 => Ok(Order::InOrder),
            3 => Ok(Order::PostOrder),
            _ => Err(Error::InvalidArgument(tag.to_string())),
        }
    }
}

impl FromStr for Order {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Order> {
        if let Ok(numeric) = tag.parse::<u8>() {
            return Order::try_from(numeric);
        }
        let normalized = tag.trim().to_ascii_lowercase();
        Order::ALL
            .iter()
            .cloned()
            .find(|order| order.tag() == normalized)
            .ok_or_else(|| Error::InvalidArgument(tag.to_string()))
    }
}

fn breadth_first(tree: &Tree, keys: &mut Vec<i32>) {
    let mut queue: VecDeque<&Node> = VecDeque::new();
    if let Some(ref root) = tree {
        queue.push_back(root);
    }

    while let Some(node) = queue.pop_front() {
        keys.push(node.key);
        if let Some(ref left) = node.left {
            queue.push_back(left);
        }
        if let Some(ref right) = node.right {
            queue.push_back(right);
        }
    }
}

fn depth_first(tree: &Tree, order: Order, keys: &mut Vec<i32>) {
    if let Some(ref node) = tree {
        if order == Order::PreOrder {
            keys.push(node.key);
        }
        depth_first(&node.left, order, keys);
        if order == Order::InOrder {
            keys.push(node.key);
        }
        depth_first(&node.right, order, keys);
        if order == Order::PostOrder {
            keys.push(node.key);
        }
    }
}

pub fn traverse(tree: &Tree, order: Order) -> Vec<i32> {
    let mut keys = Vec::new();
    match order {
        Order::Bfs => breadth_first(tree, &mut keys),
        _ => depth_first(tree, order, &mut keys),
    }
    keys
}

/// An iterator for `AvlTree`.
///
/// This iterator traverses the keys of the tree in-order.
pub struct AvlTreeIter<'a> {
    pub(crate) current: &'a Tree,
    pub(crate) stack: Vec<&'a Node>,
}

impl<'a> Iterator for AvlTreeIter<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = *self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = &node.right;
            node.key
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{traverse, AvlTreeIter, Order};
    use crate::avl_tree::tree::{insert, Tree};
    use crate::error::Error;
    use serde_test::{assert_de_tokens_error, assert_tokens, Token};
    use std::convert::TryFrom;

    fn ascending(n: i32) -> Tree {
        let mut tree = None;
        for key in 1..=n {
            insert(&mut tree, key);
        }
        tree
    }

    #[test]
    fn test_traverse_empty() {
        for order in Order::ALL.iter() {
            assert!(traverse(&None, *order).is_empty());
        }
    }

    #[test]
    fn test_traverse_orders() {
        let tree = ascending(7);
        assert_eq!(traverse(&tree, Order::Bfs), vec![4, 2, 6, 1, 3, 5, 7]);
        assert_eq!(traverse(&tree, Order::PreOrder), vec![4, 2, 1, 3, 6, 5, 7]);
        assert_eq!(traverse(&tree, Order::InOrder), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(traverse(&tree, Order::PostOrder), vec![1, 3, 2, 5, 7, 6, 4]);
    }

    #[test]
    fn test_iter_matches_in_order() {
        let tree = ascending(20);
        let iter = AvlTreeIter {
            current: &tree,
            stack: Vec::new(),
        };
        assert_eq!(iter.collect::<Vec<i32>>(), traverse(&tree, Order::InOrder));
    }

    #[test]
    fn test_parse() {
        assert_eq!("bfs".parse::<Order>().unwrap(), Order::Bfs);
        assert_eq!("Pre-Order".parse::<Order>().unwrap(), Order::PreOrder);
        assert_eq!("post-order".parse::<Order>().unwrap(), Order::PostOrder);
        assert_eq!("2".parse::<Order>().unwrap(), Order::InOrder);
        match "level-order".parse::<Order>() {
            Err(Error::InvalidArgument(tag)) => assert_eq!(tag, "level-order"),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_try_from_numeric_tag() {
        assert_eq!(Order::try_from(3u8).unwrap(), Order::PostOrder);
        match Order::try_from(4u8) {
            Err(Error::InvalidArgument(tag)) => assert_eq!(tag, "4"),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for order in Order::ALL.iter() {
            assert_eq!(order.to_string().parse::<Order>().unwrap(), *order);
        }
    }

    #[test]
    fn test_serde_tokens() {
        assert_tokens(
            &Order::PreOrder,
            &[Token::UnitVariant { name: "Order", variant: "pre-order" }],
        );
        assert_tokens(
            &Order::Bfs,
            &[Token::UnitVariant { name: "Order", variant: "bfs" }],
        );
        assert_de_tokens_error::<Order>(
            &[Token::UnitVariant { name: "Order", variant: "zigzag" }],
            concat!(
                "unknown variant `zigzag`, ",
                "expected one of `bfs`, `pre-order`, `in-order`, `post-order`",
            ),
        );
    }
}
