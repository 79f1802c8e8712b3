pub mod alphabet;
pub mod error;
pub mod wordlist;

pub use crate::error::{Result, TrieError};
pub use crate::wordlist::index::Index;
pub use crate::wordlist::trie::ranking::{rank_by_similarity, similarity};
pub use crate::wordlist::trie::searchconfig::SuggestConfig;
pub use crate::wordlist::trie::trie::Trie;
pub use crate::wordlist::wordlist::{FileFormat, Wordlist};
