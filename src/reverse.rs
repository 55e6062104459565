//! String reversal through a [`Stack`].

use crate::event::StackEvent;
use crate::stack::Stack;

/// Reverse `text` by pushing every character and popping until the stack is empty.
///
/// ```
/// assert_eq!(stacky::reverse("Hello, World!"), "!dlroW ,olleH");
/// ```
pub fn reverse(text: &str) -> String {
    reverse_with(text, |_| {})
}

/// Like [`reverse`], calling `observer` on every push and pop.
pub fn reverse_with(text: &str, mut observer: impl FnMut(&StackEvent<char>)) -> String {
    let mut stack = Stack::new();
    for ch in text.chars() {
        stack.push(ch);
        observer(&StackEvent::push(ch, stack.len()));
    }

    let mut reversed = String::with_capacity(text.len());
    while let Ok(ch) = stack.pop() {
        observer(&StackEvent::pop(ch, stack.len()));
        reversed.push(ch);
    }
    reversed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse() {
        assert_eq!(reverse("Hello, World!"), "!dlroW ,olleH");
        assert_eq!(reverse(""), "");
        assert_eq!(reverse("a"), "a");
    }

    #[test]
    fn test_reverse_multibyte() {
        assert_eq!(reverse("añb→"), "→bña");
    }

    #[test]
    fn test_reverse_twice_is_identity() {
        let text = "stack {of} [chars]";
        assert_eq!(reverse(&reverse(text)), text);
    }

    #[test]
    fn test_reverse_events() {
        let mut events = Vec::new();
        reverse_with("ab", |e| events.push(e.clone()));
        assert_eq!(
            events,
            vec![
                StackEvent::push('a', 1),
                StackEvent::push('b', 2),
                StackEvent::pop('b', 1),
                StackEvent::pop('a', 0),
            ]
        );
    }
}
