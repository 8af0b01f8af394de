//! Token counting seam
//!
//! The pipeline treats token counting as an opaque function from text to a
//! count. [`TiktokenCounter`] is the production implementation; tests swap
//! in cheap fakes through the trait.

use crate::{MinifierError, Result};
use tiktoken_rs::CoreBPE;

/// Counts tokens in a piece of text
pub trait TokenCounter {
    /// Number of tokens `text` encodes to
    fn count(&self, text: &str) -> usize;
}

/// Token counter over the cl100k_base vocabulary
pub struct TiktokenCounter {
    bpe: CoreBPE,
}

impl TiktokenCounter {
    /// Build a counter over the bundled cl100k_base vocabulary
    pub fn new() -> Result<Self> {
        let bpe = tiktoken_rs::cl100k_base()
            .map_err(|e| MinifierError::Tokenizer(e.to_string()))?;
        Ok(Self { bpe })
    }
}

impl TokenCounter for TiktokenCounter {
    fn count(&self, text: &str) -> usize {
        self.bpe.encode_ordinary(text).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_tokens() {
        let counter = TiktokenCounter::new().unwrap();
        assert_eq!(counter.count(""), 0);
        assert!(counter.count("list all compute instances") > 0);
    }
}
