use crate::alphabet::{letter, ALPHABET_SIZE};
use crate::wordlist::trie::node::TrieNode;

/// Walks the occupied child slots of one node in alphabet order.
#[derive(Debug)]
pub struct TrieCursor<'a> {
    front: usize,
    back: usize,
    node: &'a TrieNode,
}

impl<'a> TrieCursor<'a> {
    pub(crate) fn new(node: &'a TrieNode) -> TrieCursor<'a> {
        TrieCursor { front: 0, back: ALPHABET_SIZE, node }
    }
}

impl<'a> Iterator for TrieCursor<'a> {
    type Item = (char, &'a TrieNode);

    fn next(&mut self) -> Option<Self::Item> {
        while self.front < self.back {
            let idx = self.front;
            self.front += 1;
            if let Some(child) = self.node.get_child(idx) {
                return Some((letter(idx), child));
            }
        }
        None
    }
}

impl<'a> DoubleEndedIterator for TrieCursor<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        while self.back > self.front {
            self.back -= 1;
            if let Some(child) = self.node.get_child(self.back) {
                return Some((letter(self.back), child));
            }
        }
        None
    }
}

/// Depth-first enumeration of the words stored below a node, in alphabet order.
///
/// Each word is produced on demand from an explicit stack, so deep tries do
/// not grow the call stack. A node's own word comes out before any of its
/// descendants. One path buffer is shared by the whole walk.
#[derive(Debug)]
pub struct Words<'a> {
    pending: Option<String>,
    path: String,
    // node, length of its parent's path, edge letter (none for the start node)
    stack: Vec<(&'a TrieNode, usize, Option<char>)>,
}

impl<'a> Words<'a> {
    pub(crate) fn empty() -> Words<'a> {
        Words { pending: None, path: String::new(), stack: vec![] }
    }

    pub(crate) fn single(word: String) -> Words<'a> {
        Words { pending: Some(word), path: String::new(), stack: vec![] }
    }

    pub(crate) fn subtree(node: &'a TrieNode, prefix: String) -> Words<'a> {
        let len = prefix.len();
        Words { pending: None, path: prefix, stack: vec![(node, len, None)] }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if let Some(word) = self.pending.take() {
            return Some(word);
        }
        while let Some((node, len, edge)) = self.stack.pop() {
            self.path.truncate(len);
            if let Some(c) = edge {
                self.path.push(c);
            }
            let here = self.path.len();
            if !node.is_leaf() {
                // reversed so the smallest letter is popped first
                for (c, child) in node.into_iter().rev() {
                    self.stack.push((child, here, Some(c)));
                }
            }
            if node.is_end_of_word() {
                return Some(self.path.clone());
            }
        }
        None
    }
}
