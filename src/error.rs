use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrieError {
    #[error("symbol {symbol:?} at position {position} of {word:?} is not in the alphabet")]
    InvalidSymbol {
        symbol: char,
        position: usize,
        word: String,
    },

    #[error("{}", .0)]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {}", .0)]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TrieError>;
