use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use tracing::{info, warn};
use typed_builder::TypedBuilder;

use crate::alphabet::normalize;
use crate::error::Result;
use crate::wordlist::index::Index;
use crate::wordlist::trie::searchconfig::SuggestConfig;
use crate::wordlist::trie::trie::Trie;

/// A dictionary backed by a [`Trie`], usually loaded from a word file.
///
/// A list loaded with normalization also normalizes the words it is
/// queried with, so lookups match what was stored.
#[derive(Debug, Default)]
pub struct Wordlist {
    trie: Trie,
    normalize_queries: bool,
}

/// How lines of a word file are read.
#[derive(TypedBuilder, Debug, Clone)]
pub struct FileFormat {
    #[builder(default, setter(strip_option))]
    delimiter: Option<char>,
    #[builder(default)]
    word_column: usize,
    /// Lowercase and drop out-of-alphabet characters before inserting.
    #[builder(default = true)]
    normalize: bool,
}

impl FileFormat {
    fn parse_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        match self.delimiter {
            None => Some(line.trim()),
            Some(delimiter) => line.split(delimiter).nth(self.word_column).map(str::trim),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    pub count: usize,
    pub failures: usize,
}

impl Wordlist {
    pub fn new() -> Wordlist {
        Wordlist { trie: Trie::new(), normalize_queries: false }
    }

    pub fn from_words<'a, I>(words: I) -> Result<Wordlist>
        where I: IntoIterator<Item = &'a str> {
        let mut wl = Wordlist::new();
        wl.trie.add_all(words)?;
        Ok(wl)
    }

    pub fn from_file<P: AsRef<Path>>(filename: P, format: FileFormat) -> Result<Wordlist> {
        let mut wl = Wordlist::new();
        wl.load_file(filename, &format)?;
        Ok(wl)
    }

    /// Adds every word in `filename`. Lines whose word cannot be stored are
    /// skipped and counted as failures; I/O errors abort the load.
    pub fn load_file<P: AsRef<Path>>(&mut self, filename: P, format: &FileFormat) -> Result<LoadStats> {
        let filename = filename.as_ref();
        info!(file = %filename.display(), "reading words");

        let buf_reader = BufReader::new(File::open(filename)?);
        self.normalize_queries = format.normalize;
        let mut stats = LoadStats { count: 0, failures: 0 };
        let start = Instant::now();

        for (lineno, line) in buf_reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let word = match format.parse_line(&line) {
                Some(word) if format.normalize => normalize(word),
                Some(word) => word.to_string(),
                None => {
                    warn!(line = lineno + 1, "missing word column {}", format.word_column);
                    stats.failures += 1;
                    continue;
                }
            };
            if word.is_empty() {
                warn!(line = lineno + 1, "no alphabet letters in {:?}", line);
                stats.failures += 1;
                continue;
            }
            match self.trie.add(&word) {
                Ok(()) => stats.count += 1,
                Err(e) => {
                    warn!(line = lineno + 1, "skipping: {}", e);
                    stats.failures += 1;
                }
            }
        }

        info!(count = stats.count, failures = stats.failures, words = self.trie.len(),
              elapsed_ms = start.elapsed().as_millis() as u64, "read words");
        Ok(stats)
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    fn query<'q>(&self, text: &'q str) -> Cow<'q, str> {
        if self.normalize_queries {
            Cow::Owned(normalize(text))
        } else {
            Cow::Borrowed(text)
        }
    }

    pub fn contains(&self, word: &str) -> Result<bool> {
        self.trie.contains(&self.query(word))
    }

    /// Suggestions for `prefix`, cut to `config.max_results` if set.
    pub fn suggest(&self, prefix: &str, config: &SuggestConfig) -> Result<Vec<String>> {
        let prefix = self.query(prefix);
        let suggestions = self.trie.suggestions(&prefix)?;
        Ok(match config.max_results {
            Some(n) => suggestions.take(n).collect(),
            None => suggestions.collect(),
        })
    }

    pub fn best_match(&self, prefix: &str, config: &SuggestConfig) -> Result<String> {
        self.trie.best_match(&self.query(prefix), config)
    }
}
