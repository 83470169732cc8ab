//! Clue ledger: the player's notebook
//!
//! An unbalanced binary search tree keyed by clue text. Keys compare
//! byte-wise (`str` ordering), so the order is case-sensitive and
//! independent of locale. Inserting a key that is already present leaves
//! the tree untouched. Nothing is ever removed before teardown.

use std::cmp::Ordering;

#[derive(Debug)]
struct ClueNode {
    text: String,
    left: Option<Box<ClueNode>>,
    right: Option<Box<ClueNode>>,
}

impl ClueNode {
    fn leaf(text: &str) -> Box<Self> {
        Box::new(Self {
            text: text.to_string(),
            left: None,
            right: None,
        })
    }
}

/// Ordered set of collected clue texts
#[derive(Debug, Default)]
pub struct ClueLedger {
    root: Option<Box<ClueNode>>,
    len: usize,
}

impl ClueLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Whether `text` has been recorded
    pub fn contains(&self, text: &str) -> bool {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match text.cmp(node.text.as_str()) {
                Ordering::Equal => return true,
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }

    /// Record `text`; returns `false` if it was already there
    pub fn insert(&mut self, text: &str) -> bool {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match text.cmp(node.text.as_str()) {
                Ordering::Equal => return false,
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
            };
        }
        *slot = Some(ClueNode::leaf(text));
        self.len += 1;
        true
    }

    /// Clue texts in ascending order
    pub fn iter(&self) -> InOrder<'_> {
        let mut iter = InOrder { stack: Vec::new() };
        iter.push_left(self.root.as_deref());
        iter
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.iter().map(str::to_string).collect()
    }

    /// Number of nodes on the longest root-to-leaf path
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(&ClueNode, usize)> =
            self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            for child in [node.left.as_deref(), node.right.as_deref()].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        deepest
    }

    /// Release every node; returns how many were released
    pub fn teardown(mut self) -> usize {
        let released = self.len;
        self.release();
        released
    }

    /// Unlink nodes one at a time so a list-shaped tree cannot blow the stack
    fn release(&mut self) {
        let mut pending: Vec<Box<ClueNode>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
        self.len = 0;
    }
}

impl Drop for ClueLedger {
    fn drop(&mut self) {
        self.release();
    }
}

impl<'a> IntoIterator for &'a ClueLedger {
    type Item = &'a str;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order traversal over a [`ClueLedger`]
pub struct InOrder<'a> {
    stack: Vec<&'a ClueNode>,
}

impl<'a> InOrder<'a> {
    fn push_left(&mut self, mut node: Option<&'a ClueNode>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some(node.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_ledger() {
        let ledger = ClueLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
        assert!(!ledger.contains("Manuscrito Antigo"));
        assert_eq!(ledger.iter().count(), 0);
        assert_eq!(ledger.height(), 0);
    }

    #[test]
    fn test_insert_and_contains() {
        let mut ledger = ClueLedger::new();
        assert!(ledger.insert("Pegada de Lama"));
        assert!(ledger.insert("Chave Enferrujada"));
        assert!(ledger.contains("Pegada de Lama"));
        assert!(ledger.contains("Chave Enferrujada"));
        assert!(!ledger.contains("Pó de Folhas"));
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_duplicate_insert_is_noop() {
        let mut ledger = ClueLedger::new();
        assert!(ledger.insert("Manuscrito Antigo"));
        let before = ledger.to_vec();
        assert!(!ledger.insert("Manuscrito Antigo"));
        assert_eq!(ledger.to_vec(), before);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_in_order_is_alphabetical() {
        let mut ledger = ClueLedger::new();
        for clue in ["Pó de Folhas", "Chave Enferrujada", "Pegada de Lama", "Manuscrito Antigo"] {
            ledger.insert(clue);
        }
        assert_eq!(
            ledger.to_vec(),
            ["Chave Enferrujada", "Manuscrito Antigo", "Pegada de Lama", "Pó de Folhas"]
        );
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        let mut ledger = ClueLedger::new();
        ledger.insert("faca");
        ledger.insert("Faca");
        ledger.insert("Zinco");
        // Uppercase bytes sort before lowercase ones.
        assert_eq!(ledger.to_vec(), ["Faca", "Zinco", "faca"]);
        assert!(!ledger.contains("FACA"));
    }

    #[test]
    fn test_iteration_is_restartable() {
        let mut ledger = ClueLedger::new();
        ledger.insert("b");
        ledger.insert("a");
        let first: Vec<_> = ledger.iter().collect();
        let second: Vec<_> = (&ledger).into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_sorted_insertion_degenerates() {
        let mut ledger = ClueLedger::new();
        for i in 0..50 {
            ledger.insert(&format!("clue {i:03}"));
        }
        assert_eq!(ledger.height(), 50);
        assert_eq!(ledger.iter().next(), Some("clue 000"));
    }

    #[test]
    fn test_deep_tree_drops_without_overflow() {
        let mut ledger = ClueLedger::new();
        for i in 0..10_000 {
            ledger.insert(&format!("{i:08}"));
        }
        assert_eq!(ledger.teardown(), 10_000);
    }
}
