//! Presentation of traversals.

use crate::avl_tree::Order;
use crate::error::Result;
use std::io::{self, Write};

/// A collaborator that receives the keys produced by a traversal and presents them.
pub trait Reporter {
    /// Presents `keys`, which were produced by a traversal in `order`.
    fn report(&mut self, order: Order, keys: &[i32]) -> Result<()>;
}

/// A `Reporter` that writes one line per traversal, prefixed with a header naming the
/// traversal.
///
/// # Examples
/// ```
/// use avl::reporter::{ConsoleReporter, Reporter};
/// use avl::Order;
///
/// let mut reporter = ConsoleReporter::new(Vec::new());
/// reporter.report(Order::Bfs, &[2, 1, 3]).unwrap();
/// assert_eq!(reporter.into_inner(), b"BFS traversal: 2 1 3\n".to_vec());
/// ```
pub struct ConsoleReporter<W> {
    writer: W,
}

impl ConsoleReporter<io::Stdout> {
    /// Constructs a `ConsoleReporter` that writes to standard output.
    pub fn stdout() -> Self {
        ConsoleReporter::new(io::stdout())
    }
}

impl<W> ConsoleReporter<W>
where
    W: Write,
{
    pub fn new(writer: W) -> Self {
        ConsoleReporter { writer }
    }

    /// Consumes the reporter, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> Reporter for ConsoleReporter<W>
where
    W: Write,
{
    fn report(&mut self, order: Order, keys: &[i32]) -> Result<()> {
        write!(self.writer, "{} traversal:", order.header())?;
        for key in keys {
            write!(self.writer, " {}", key)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConsoleReporter, Reporter};
    use crate::avl_tree::{AvlTree, Order};

    #[test]
    fn test_report_headers() {
        let mut reporter = ConsoleReporter::new(Vec::new());
        reporter.report(Order::PreOrder, &[2, 1, 3]).unwrap();
        reporter.report(Order::PostOrder, &[-1]).unwrap();
        let output = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(
            output,
            "DFS pre-order traversal: 2 1 3\nDFS post-order traversal: -1\n",
        );
    }

    #[test]
    fn test_print_tree() {
        let mut tree = AvlTree::new();
        for key in 1..=7 {
            tree.insert(key);
        }

        let mut reporter = ConsoleReporter::new(Vec::new());
        for order in Order::ALL.iter() {
            tree.print(*order, &mut reporter).unwrap();
        }
        let output = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(
            output,
            "BFS traversal: 4 2 6 1 3 5 7\n\
             DFS pre-order traversal: 4 2 1 3 6 5 7\n\
             DFS in-order traversal: 1 2 3 4 5 6 7\n\
             DFS post-order traversal: 1 3 2 5 7 6 4\n",
        );
    }

    #[test]
    fn test_print_empty_tree_writes_nothing() {
        let mut reporter = ConsoleReporter::new(Vec::new());
        AvlTree::new().print(Order::InOrder, &mut reporter).unwrap();
        assert!(reporter.into_inner().is_empty());
    }
}
