use std::fmt::{Debug, Formatter};

use crate::alphabet::get_idx;
use crate::error::{Result, TrieError};
use crate::wordlist::index::Index;
use crate::wordlist::trie::node::TrieNode;

/// Prefix tree over the lowercase alphabet.
///
/// Nodes are created lazily on insertion and never removed; dropping the
/// trie drops every node it owns.
pub struct Trie {
    pub(crate) root: TrieNode,
    len: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Trie::new()
    }
}

impl Trie {
    pub fn new() -> Trie {
        Trie {
            root: TrieNode::new(None),
            len: 0,
        }
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Stores `word`. Inserting a word that is already present changes nothing.
    ///
    /// The whole word is checked against the alphabet before any node is
    /// created, so a rejected word leaves the trie untouched. The empty word
    /// marks the root.
    pub fn insert(&mut self, word: &str) -> Result<()> {
        let indices = Self::indices(word)?;
        let mut current = &mut self.root;
        for idx in indices {
            current = current.get_or_create_child(idx);
        }
        if !current.is_end_of_word {
            current.is_end_of_word = true;
            self.len += 1;
        }
        Ok(())
    }

    /// True only if `word` itself was inserted; a bare prefix of a stored word is not a member.
    pub fn contains(&self, word: &str) -> Result<bool> {
        Ok(self.get_node(word)?
            .map(|x| x.is_end_of_word()).unwrap_or(false))
    }

    /// The node reached by spelling `word` from the root, if that path exists.
    pub fn get_node(&self, word: &str) -> Result<Option<&TrieNode>> {
        let indices = Self::indices(word)?;
        let mut current = &self.root;
        for idx in indices {
            match current.get_child(idx) {
                Some(child) => current = child,
                None => return Ok(None),
            }
        }
        Ok(Some(current))
    }

    fn indices(word: &str) -> Result<Vec<usize>> {
        word.chars()
            .enumerate()
            .map(|(position, symbol)| get_idx(symbol).ok_or_else(|| TrieError::InvalidSymbol {
                symbol,
                position,
                word: word.to_string(),
            }))
            .collect()
    }
}

impl Index for Trie {
    fn add(&mut self, word: &str) -> Result<()> {
        self.insert(word)
    }

    fn contains(&self, word: &str) -> Result<bool> {
        Trie::contains(self, word)
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.root.words(String::new()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::error::TrieError;
    use crate::wordlist::index::Index;
    use crate::wordlist::trie::trie::Trie;

    const WORDS: [&str; 8] = ["hello", "dog", "hell", "cat", "a", "help", "helps", "helping"];

    fn sample_trie() -> Trie {
        let mut trie = Trie::new();
        trie.add_all(WORDS).unwrap();
        trie
    }

    fn random_word(rng: &mut StdRng) -> String {
        let len = rng.gen_range(1..10);
        (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
    }

    #[test]
    fn finds_words_in_trie() {
        let trie = sample_trie();
        WORDS.iter().for_each(|word| assert!(trie.contains(word).unwrap(), "{}", word));
        assert!(trie.contains("dog").unwrap());
    }

    #[test]
    fn doesnt_find_words_not_in_trie() {
        let trie = sample_trie();
        let bad_words = vec!["hel", "he", "h", "do", "cats", "banana", ""];
        bad_words.iter().for_each(|word| assert!(!trie.contains(word).unwrap(), "{}", word));
    }

    #[test]
    fn prefix_becomes_member_once_inserted() {
        let mut trie = sample_trie();
        assert!(!trie.contains("hel").unwrap());
        trie.insert("hel").unwrap();
        assert!(trie.contains("hel").unwrap());
        assert!(trie.contains("hello").unwrap());
    }

    #[test]
    fn empty_word_marks_root() {
        let mut trie = Trie::new();
        assert!(!trie.contains("").unwrap());
        trie.insert("").unwrap();
        assert!(trie.contains("").unwrap());
        assert!(trie.root().is_end_of_word());
        assert!(trie.root().is_leaf());
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn reinsertion_is_idempotent() {
        let mut once = sample_trie();
        let mut twice = sample_trie();
        twice.add_all(WORDS).unwrap();
        assert_eq!(once.len(), WORDS.len());
        assert_eq!(twice.len(), WORDS.len());
        assert_eq!(format!("{:?}", once), format!("{:?}", twice));

        once.insert("dog").unwrap();
        assert_eq!(once.len(), WORDS.len());
    }

    #[test]
    fn rejects_symbols_outside_alphabet() {
        let mut trie = sample_trie();
        match trie.insert("heLlo") {
            Err(TrieError::InvalidSymbol { symbol, position, word }) => {
                assert_eq!(symbol, 'L');
                assert_eq!(position, 2);
                assert_eq!(word, "heLlo");
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(trie.contains("do g"), Err(TrieError::InvalidSymbol { .. })));
        assert!(matches!(trie.insert("naïve"), Err(TrieError::InvalidSymbol { position: 2, .. })));
    }

    #[test]
    fn rejected_insert_leaves_trie_unchanged() {
        let mut trie = sample_trie();
        let before = format!("{:?}", trie);
        assert!(trie.insert("zebra1").is_err());
        assert_eq!(format!("{:?}", trie), before);
        assert!(trie.get_node("z").unwrap().is_none());
        assert_eq!(trie.len(), WORDS.len());
    }

    #[test]
    fn get_node_follows_prefix() {
        let trie = sample_trie();
        let node = trie.get_node("hel").unwrap().unwrap();
        assert_eq!(node.value(), Some('l'));
        assert!(!node.is_end_of_word());
        assert!(trie.get_node("hex").unwrap().is_none());
        assert_eq!(trie.get_node("").unwrap().unwrap().value(), None);
    }

    #[test]
    fn debug_lists_words_in_order() {
        let trie = sample_trie();
        assert_eq!(format!("{:?}", trie),
                   r#"["a", "cat", "dog", "hell", "hello", "help", "helping", "helps"]"#);
    }

    #[test]
    fn very_long_word_drops_cleanly() {
        let word = "a".repeat(200_000);
        let mut trie = Trie::new();
        trie.insert(&word).unwrap();
        trie.insert("ab").unwrap();
        assert!(trie.contains(&word).unwrap());
        assert!(!trie.contains(&word[..199_999]).unwrap());
        assert_eq!(trie.auto_suggest("aaaa").unwrap(), vec![word.clone()]);
        drop(trie);
    }

    #[test]
    fn random_words_stay_members() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut trie = Trie::new();
        let mut inserted = vec![];
        for _ in 0..500 {
            let word = random_word(&mut rng);
            trie.insert(&word).unwrap();
            assert!(trie.contains(&word).unwrap());
            inserted.push(word);
        }
        inserted.iter().for_each(|word| assert!(trie.contains(word).unwrap(), "{}", word));
    }
}
