use std::fmt::{Debug, Formatter};

use derive_new::new;

use crate::alphabet::{letter, ALPHABET_SIZE};
use crate::wordlist::trie::iterators::{TrieCursor, Words};

/// One vertex of the trie. Each non-empty slot exclusively owns its child.
#[derive(new, Default)]
pub struct TrieNode {
    value: Option<char>,
    #[new(default)]
    pub(crate) is_end_of_word: bool,
    #[new(default)]
    pub(crate) children: [Option<Box<TrieNode>>; ALPHABET_SIZE],
}

impl TrieNode {
    /// The symbol on the edge leading here; `None` only for the root.
    pub fn value(&self) -> Option<char> {
        self.value
    }

    pub fn is_end_of_word(&self) -> bool {
        self.is_end_of_word
    }

    /// True when no child slot is occupied, whether or not a word ends here.
    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(|x| x.is_none())
    }

    pub(crate) fn get_child(&self, idx: usize) -> Option<&TrieNode> {
        self.children[idx].as_deref()
    }

    pub(crate) fn get_or_create_child(&mut self, idx: usize) -> &mut TrieNode {
        self.children[idx].get_or_insert_with(|| Box::new(TrieNode::new(Some(letter(idx)))))
    }

    pub(crate) fn words(&self, prefix: String) -> Words<'_> {
        Words::subtree(self, prefix)
    }
}

// Unlinks descendants onto a heap stack so teardown depth does not follow word length.
impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut stack: Vec<Box<TrieNode>> = self.children.iter_mut().filter_map(Option::take).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.iter_mut().filter_map(Option::take));
        }
    }
}

impl<'a> IntoIterator for &'a TrieNode {
    type Item = (char, &'a TrieNode);
    type IntoIter = TrieCursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        TrieCursor::new(self)
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("value", &self.value)
            .field("is_end_of_word", &self.is_end_of_word)
            .field("children", &self.into_iter()
                .map(|(c, _)| c)
                .collect::<Vec<_>>(),
            )
            .finish()
    }
}
