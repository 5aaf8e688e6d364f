/// Strategy for distilling a search query out of a raw user message.
///
/// The pipeline only depends on this trait, so the word-slice below can be
/// swapped for real entity extraction without touching the callers.
pub trait ClaimExtraction: Send + Sync {
    fn extract(&self, message: &str) -> String;
}

const MAX_CLAIM_WORDS: usize = 8;
const MIN_WORDS_TO_TRUNCATE: usize = 3;

/// Takes the leading words of the message as the claim.
///
/// Messages under three words are kept whole; everything else is cut to the
/// first eight whitespace-separated words. Surrounding whitespace and
/// trailing `.`/`,` are stripped either way.
pub struct LeadingWords {
    max_words: usize,
}

impl Default for LeadingWords {
    fn default() -> Self {
        Self {
            max_words: MAX_CLAIM_WORDS,
        }
    }
}

impl ClaimExtraction for LeadingWords {
    fn extract(&self, message: &str) -> String {
        let words: Vec<&str> = message.split_whitespace().collect();

        let claim = if words.len() >= MIN_WORDS_TO_TRUNCATE {
            words[..words.len().min(self.max_words)].join(" ")
        } else {
            message.to_string()
        };

        claim
            .trim_matches(|c: char| c.is_whitespace() || c == '.' || c == ',')
            .to_string()
    }
}
