pub mod trie;
pub mod index;
pub mod wordlist;
