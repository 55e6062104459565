//! A last-in-first-out container with checked access to the top.

use std::fmt;
use thiserror::Error;

/// Operation that found the stack empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackOp {
    Pop,
    Peek,
}

impl fmt::Display for StackOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackOp::Pop => f.write_str("pop"),
            StackOp::Peek => f.write_str("peek"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot {op} from an empty stack")]
pub struct EmptyStackError {
    pub op: StackOp,
}

/// A LIFO stack backed by a `Vec`. The end of the vector is the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Place `item` on top of the stack.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the top item.
    pub fn pop(&mut self) -> Result<T, EmptyStackError> {
        self.items
            .pop()
            .ok_or(EmptyStackError { op: StackOp::Pop })
    }

    /// Borrow the top item without removing it.
    pub fn peek(&self) -> Result<&T, EmptyStackError> {
        self.items
            .last()
            .ok_or(EmptyStackError { op: StackOp::Peek })
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterate from the top of the stack down to the bottom.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.items.iter().rev()
    }

    /// Consume the stack, yielding its items bottom first.
    pub(crate) fn into_bottom_up(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Items are pushed in iteration order, so the last one ends up on top.
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
