use std::fmt;

/// A change or inspection of a stack, reported to observers as it happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackEvent<T> {
    /// `item` was pushed; `depth` is the stack size afterwards.
    Push { item: T, depth: usize },

    /// `item` was popped; `depth` is the stack size afterwards.
    Pop { item: T, depth: usize },

    /// `item` is on top and was left in place.
    Peek { item: T },

    /// A pop was attempted on an empty stack.
    PopEmpty,

    /// A peek was attempted on an empty stack.
    PeekEmpty,
}

impl<T> StackEvent<T> {
    /// Create a Push event
    pub fn push(item: T, depth: usize) -> Self {
        StackEvent::Push { item, depth }
    }

    /// Create a Pop event
    pub fn pop(item: T, depth: usize) -> Self {
        StackEvent::Pop { item, depth }
    }
}

/// One line of console narration for the event.
impl<T: fmt::Display> fmt::Display for StackEvent<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackEvent::Push { item, .. } => write!(f, "Pushed {item} onto the stack."),
            StackEvent::Pop { item, .. } => write!(f, "Popped {item} from the stack."),
            StackEvent::Peek { item } => write!(f, "The top element is {item}."),
            StackEvent::PopEmpty => f.write_str("The stack is empty. Cannot pop!"),
            StackEvent::PeekEmpty => f.write_str("The stack is empty. Nothing to peek."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            StackEvent::push(10, 1).to_string(),
            "Pushed 10 onto the stack."
        );
        assert_eq!(
            StackEvent::pop('(', 0).to_string(),
            "Popped ( from the stack."
        );
        assert_eq!(StackEvent::Peek { item: 30 }.to_string(), "The top element is 30.");
        assert_eq!(
            StackEvent::<i32>::PopEmpty.to_string(),
            "The stack is empty. Cannot pop!"
        );
        assert_eq!(
            StackEvent::<i32>::PeekEmpty.to_string(),
            "The stack is empty. Nothing to peek."
        );
    }
}
