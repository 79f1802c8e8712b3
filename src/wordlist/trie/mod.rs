pub mod trie;
pub mod search;
pub mod ranking;
pub mod searchconfig;
pub mod node;
pub mod iterators;
