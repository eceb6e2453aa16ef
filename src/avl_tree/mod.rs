//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one.

mod node;
mod traversal;
mod tree;

pub use self::node::Node;
pub use self::traversal::{AvlTreeIter, Order};

use crate::error::Result;
use crate::reporter::Reporter;
use log::debug;

/// An ordered collection of `i32` keys implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Every insertion and deletion
/// repairs heights and rotates on the way back up from the modified node, so the height of the
/// tree stays logarithmic in the number of keys.
///
/// `AvlTree` carries no internal synchronization. Wrap it in a `Mutex` or `RwLock` to share it
/// between threads.
///
/// # Examples
/// ```
/// use avl::{AvlTree, Order};
///
/// let mut tree = AvlTree::new();
/// tree.insert(1);
/// tree.insert(2);
/// tree.insert(3);
///
/// assert_eq!(tree.traverse(Order::Bfs), vec![2, 1, 3]);
/// assert_eq!(tree.traverse(Order::InOrder), vec![1, 2, 3]);
///
/// tree.delete(2).unwrap();
/// assert_eq!(tree.traverse(Order::PreOrder), vec![3, 1]);
/// assert!(tree.delete(2).is_err());
/// ```
#[derive(Debug, Default)]
pub struct AvlTree {
    tree: tree::Tree,
    len: usize,
}

impl AvlTree {
    /// Constructs a new, empty `AvlTree`.
    ///
    /// # Examples
    /// ```
    /// use avl::AvlTree;
    ///
    /// let tree = AvlTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        AvlTree {
            tree: None,
            len: 0,
        }
    }

    /// Inserts a key into the tree. Returns `false` and leaves the tree unchanged if the key
    /// already exists.
    ///
    /// # Examples
    /// ```
    /// use avl::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: i32) -> bool {
        let inserted = tree::insert(&mut self.tree, key);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Deletes a key from the tree. Returns `Error::NotFound` if the key is not in the tree, in
    /// which case the tree is left unchanged.
    ///
    /// # Examples
    /// ```
    /// use avl::{AvlTree, Error};
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert!(tree.delete(1).is_ok());
    /// match tree.delete(1) {
    ///     Err(Error::NotFound(key)) => assert_eq!(key, 1),
    ///     _ => unreachable!(),
    /// }
    /// ```
    pub fn delete(&mut self, key: i32) -> Result<()> {
        tree::remove(&mut self.tree, key).map_err(|err| {
            debug!("{}", err);
            err
        })?;
        self.len -= 1;
        Ok(())
    }

    /// Returns the keys of the tree in the given order. An empty tree yields no keys.
    ///
    /// # Examples
    /// ```
    /// use avl::{AvlTree, Order};
    ///
    /// let mut tree = AvlTree::new();
    /// for key in &[3, 1, 2] {
    ///     tree.insert(*key);
    /// }
    /// assert_eq!(tree.traverse(Order::PostOrder), vec![1, 3, 2]);
    /// ```
    pub fn traverse(&self, order: Order) -> Vec<i32> {
        traversal::traverse(&self.tree, order)
    }

    /// Returns the keys of the tree in the order named by `tag`. Returns
    /// `Error::InvalidArgument` if `tag` does not name a traversal order.
    ///
    /// # Examples
    /// ```
    /// use avl::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.traverse_tag("in-order").unwrap(), vec![1]);
    /// assert!(tree.traverse_tag("sideways").is_err());
    /// ```
    pub fn traverse_tag(&self, tag: &str) -> Result<Vec<i32>> {
        Ok(self.traverse(tag.parse()?))
    }

    /// Hands the keys of the tree in the given order to `reporter`. Nothing is reported for an
    /// empty tree.
    pub fn print<R>(&self, order: Order, reporter: &mut R) -> Result<()>
    where
        R: Reporter + ?Sized,
    {
        if self.is_empty() {
            return Ok(());
        }
        reporter.report(order, &self.traverse(order))
    }

    /// Checks if a key exists in the tree.
    ///
    /// # Examples
    /// ```
    /// use avl::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert!(!tree.contains(0));
    /// assert!(tree.contains(1));
    /// ```
    pub fn contains(&self, key: i32) -> bool {
        tree::contains(&self.tree, key)
    }

    /// Returns the number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.tree.is_none()
    }

    /// Returns the height of the tree. An empty tree has a height of zero.
    pub fn height(&self) -> usize {
        tree::height(&self.tree)
    }

    /// Removes every key from the tree.
    ///
    /// # Examples
    /// ```
    /// use avl::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns the root node of the tree, if any.
    pub fn root(&self) -> Option<&Node> {
        self.tree.as_ref().map(|node| &**node)
    }

    /// Returns the minimum key of the tree. Returns `None` if the tree is empty.
    pub fn min(&self) -> Option<i32> {
        tree::min(&self.tree)
    }

    /// Returns the maximum key of the tree. Returns `None` if the tree is empty.
    pub fn max(&self) -> Option<i32> {
        tree::max(&self.tree)
    }

    /// Returns an iterator over the tree. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    /// ```
    /// use avl::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(3);
    /// tree.insert(1);
    ///
    /// let mut iterator = tree.iter();
    /// assert_eq!(iterator.next(), Some(1));
    /// assert_eq!(iterator.next(), Some(3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlTreeIter {
        AvlTreeIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }
}

impl<'a> IntoIterator for &'a AvlTree {
    type Item = i32;
    type IntoIter = AvlTreeIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
