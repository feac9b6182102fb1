use std::fmt::{self, Debug, Formatter};
use std::mem;
use std::ops::{Deref, DerefMut};

pub(crate) struct Branch<T>(pub Option<Box<Node<T>>>);

pub(crate) struct Node<T> {
    pub value: T,
    pub left: Branch<T>,
    pub right: Branch<T>,
}

/// One step of a path from the root of a tree to one of its nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl<T> Node<T> {
    pub fn boxed(value: T) -> Box<Node<T>> {
        Box::new(Node {
            value,
            left: Branch(None),
            right: Branch(None),
        })
    }

    pub const fn child(&self, side: Side) -> &Branch<T> {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn child_mut(&mut self, side: Side) -> &mut Branch<T> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

impl<T> Branch<T> {
    /// Follows `path` down from this branch, returning the branch it ends at. Returns [`None`] if
    /// the path runs past a leaf.
    pub fn follow_mut(&mut self, path: &[Side]) -> Option<&mut Branch<T>> {
        let mut branch = self;
        for &side in path {
            branch = branch.0.as_mut()?.child_mut(side);
        }
        Some(branch)
    }

    /// Walks the tree in-order and returns the path to the first node whose value matches
    /// `predicate`.
    pub fn path_where<P: FnMut(&T) -> bool>(&self, mut predicate: P) -> Option<Vec<Side>> {
        let mut path = Vec::new();
        // Each pending node is stored with the length of the path leading to it.
        let mut stack: Vec<(&Node<T>, usize)> = Vec::new();
        let mut current = self.as_deref();

        loop {
            while let Some(node) = current {
                stack.push((node, path.len()));
                path.push(Side::Left);
                current = node.left.as_deref();
            }

            let (node, depth) = stack.pop()?;
            path.truncate(depth);
            if predicate(&node.value) {
                return Some(path);
            }

            path.push(Side::Right);
            current = node.right.as_deref();
        }
    }

    /// Unlinks the node on this branch and returns its value. A node with two children has its
    /// value replaced by its in-order successor instead, so the in-order sequence of the remaining
    /// values doesn't change.
    pub fn unlink(&mut self) -> Option<T> {
        let node = self.0.as_deref_mut()?;

        if node.left.is_some() && node.right.is_some() {
            let path = vec![Side::Left; node.right.leftmost_depth()];
            let successor_branch = node.right.follow_mut(&path)?;
            let mut successor = successor_branch.0.take()?;
            successor_branch.0 = successor.right.0.take();

            Some(mem::replace(&mut node.value, successor.value))
        } else {
            let mut old = self.0.take()?;
            self.0 = old.left.0.take().or_else(|| old.right.0.take());
            Some(old.value)
        }
    }

    /// The number of left links between this branch's node and the leftmost node below it.
    fn leftmost_depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.as_deref();
        while let Some(next) = current.and_then(|node| node.left.as_deref()) {
            depth += 1;
            current = Some(next);
        }
        depth
    }

    /// Writes the tree sideways, one node per line in preorder, indented by depth.
    pub fn write_tree(&self, f: &mut Formatter<'_>) -> fmt::Result
    where
        T: Debug,
    {
        let Some(root) = self.as_deref() else {
            return write!(f, "-");
        };

        let mut stack = vec![(root, 0, "")];
        let mut first = true;
        while let Some((node, depth, marker)) = stack.pop() {
            if !first {
                writeln!(f)?;
            }
            first = false;

            write!(f, "{}{}{:?}", "    ".repeat(depth), marker, node.value)?;

            if let Some(right) = node.right.as_deref() {
                stack.push((right, depth + 1, "└ "));
            }
            if let Some(left) = node.left.as_deref() {
                stack.push((left, depth + 1, "┌ "));
            }
        }
        Ok(())
    }
}

impl<T> Deref for Branch<T> {
    type Target = Option<Box<Node<T>>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Branch<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T: Debug> Debug for Branch<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_tree(f)
    }
}
