use tracing::debug;

use crate::error::Result;
use crate::wordlist::trie::iterators::Words;
use crate::wordlist::trie::ranking::rank_by_similarity;
use crate::wordlist::trie::searchconfig::SuggestConfig;
use crate::wordlist::trie::trie::Trie;

impl Trie {
    /// Lazily yields every stored word that starts with `query`, in alphabet order.
    ///
    /// Each call starts a fresh walk, so the sequence can be restarted by
    /// calling again.
    pub fn suggestions(&self, query: &str) -> Result<Words<'_>> {
        let node = match self.get_node(query)? {
            Some(node) => node,
            None => return Ok(Words::empty()),
        };

        let is_a_word = node.is_end_of_word();
        let is_leaf = node.is_leaf();

        // a complete word with nothing below it
        if is_a_word && is_leaf {
            return Ok(Words::single(query.to_string()));
        }

        if !is_leaf {
            return Ok(node.words(query.to_string()));
        }

        Ok(Words::empty())
    }

    pub fn auto_suggest(&self, query: &str) -> Result<Vec<String>> {
        Ok(self.suggestions(query)?
            .inspect(|word| debug!(query = query, word = word.as_str(), "suggestion"))
            .collect())
    }

    /// Suggestions for `query` ranked down to the single best match, or an
    /// empty string when nothing reaches the configured threshold.
    pub fn best_match(&self, query: &str, config: &SuggestConfig) -> Result<String> {
        let suggestions = self.auto_suggest(query)?;
        Ok(rank_by_similarity(&suggestions, query, config.threshold_percent))
    }
}
