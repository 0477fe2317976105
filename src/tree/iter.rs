//! In-order iterators over a [`BalancedTree`](super::BalancedTree).

use std::iter::FusedIterator;

use super::node::{Link, Node};

/// A borrowing iterator over the records of a tree in ascending key order.
///
/// The traversal is lazy: it keeps the path of pending ancestors on a stack
/// (at most the tree's height) and visits one node per call to `next`.
pub struct Iter<'a, R> {
    stack: Vec<&'a Node<R>>,
    remaining: usize,
}

impl<'a, R> Iter<'a, R> {
    pub(super) fn new(root: Option<&'a Node<R>>, length: usize, height: usize) -> Self {
        let mut iterator = Self {
            stack: Vec::with_capacity(height),
            remaining: length,
        };
        iterator.push_left_spine(root);
        iterator
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<R>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a, R> Iterator for Iter<'a, R> {
    type Item = &'a R;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R> ExactSizeIterator for Iter<'_, R> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<R> FusedIterator for Iter<'_, R> {}

impl<R> Clone for Iter<'_, R> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

/// An owning iterator over the records of a tree in ascending key order.
pub struct IntoIter<R> {
    stack: Vec<Box<Node<R>>>,
    remaining: usize,
}

impl<R> IntoIter<R> {
    pub(super) fn new(root: Link<R>, length: usize, height: usize) -> Self {
        let mut iterator = Self {
            stack: Vec::with_capacity(height),
            remaining: length,
        };
        iterator.push_left_spine(root);
        iterator
    }

    fn push_left_spine(&mut self, mut link: Link<R>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<R> Iterator for IntoIter<R> {
    type Item = R;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        self.push_left_spine(node.right.take());
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R> ExactSizeIterator for IntoIter<R> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<R> FusedIterator for IntoIter<R> {}
