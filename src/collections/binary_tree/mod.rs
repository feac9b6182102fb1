//! Binary trees: [`BinaryTree`], which is filled structurally without looking at its elements, and
//! [`SearchTree`], an unbalanced binary search tree which stores its nodes in a BinaryTree.
//!
//! Both trees export their elements in-order and provide preorder, postorder and level-order
//! iterators as well. Every traversal uses an explicit stack or queue, so degenerate (list-shaped)
//! trees don't risk overflowing the call stack.

mod binary_tree;
mod iter;
mod node;
mod search_tree;

pub use binary_tree::*;
pub use iter::*;
pub(crate) use node::*;
pub use search_tree::*;
