
use std::sync::OnceLock;
use regex::Regex;


// defines the behavior needed for splitting a text into words
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct WordTokenizer {
    pub lowercase: bool
}

impl WordTokenizer {
    pub fn new(lowercase: bool) -> Self {
        Self { lowercase }
    }
}

impl Tokenizer for WordTokenizer {
    // split by whitespace, fold case, then keep only alphabetic characters of every piece.
    // pieces left with nothing (numbers, punctuation) are dropped
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
        .map(|piece| {
            let piece = if self.lowercase { piece.to_lowercase() } else { piece.to_owned() };
            piece.chars().filter(|c| c.is_alphabetic()).collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect()
    }
}

/// Extract words from a string containing English words, in order of appearance.
pub fn tokenize(text: &str, lowercase: bool) -> Vec<String> {
    WordTokenizer::new(lowercase).tokenize(text)
}


fn hashtag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"#\w+").expect("hashtag pattern is valid"))
}

fn mention_pattern() -> &'static Regex {
    // the handle must not be glued to a preceding word or '@', this rules out email addresses
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?:^|[^@\w])@(\w{1,15})").expect("mention pattern is valid"))
}

/// Extract hashtags (`#` followed by at least one word character) from a tweet.
pub fn extract_hashtags(tweet: &str) -> Vec<String> {
    hashtag_pattern()
    .find_iter(tweet)
    .map(|m| m.as_str().to_owned())
    .collect()
}

/// Extract `@mentions` from a tweet. Handles are at most 15 characters long.
pub fn extract_mentions(tweet: &str) -> Vec<String> {
    mention_pattern()
    .captures_iter(tweet)
    .filter_map(|caps| caps.get(1))
    .map(|handle| format!("@{}", handle.as_str()))
    .collect()
}


#[cfg(test)]
mod tests {

    use super::{tokenize, extract_hashtags, extract_mentions, Tokenizer, WordTokenizer};

    #[test]
    fn tokenize_test() {
        let tokens = tokenize("The dog ate the hat.", false);
        assert_eq!(tokens, vec!["The", "dog", "ate", "the", "hat"]);

        let tokens = tokenize("The dog ate the hat.", true);
        assert_eq!(tokens, vec!["the", "dog", "ate", "the", "hat"]);

        assert_eq!(tokenize("Café, naïve!", true), vec!["café", "naïve"]);
        assert_eq!(tokenize("Ünïcode ΛΌΓΟΣ", false), vec!["Ünïcode", "ΛΌΓΟΣ"]);
    }

    #[test]
    fn tokenize_folds_case_before_filtering() {
        // 'İ' lowers to 'i' followed by a combining dot, which is not alphabetic
        assert_eq!(tokenize("İstanbul", true), vec!["istanbul"]);
        assert_eq!(tokenize("İstanbul", false), vec!["İstanbul"]);
    }

    #[test]
    fn tokenize_drops_punctuation_only_tokens() {
        let tokens = tokenize("wait ... what -- 42 !", true);
        assert_eq!(tokens, vec!["wait", "what"]);
        assert!(tokenize("  ?! 123 ", false).is_empty());
        assert!(tokenize("", true).is_empty());
    }

    #[test]
    fn tokenize_keeps_order_across_lines() {
        let tokenizer = WordTokenizer::new(true);
        let tokens = tokenizer.tokenize("Hello,\nWorld!\tdon't");
        assert_eq!(tokens, vec!["hello", "world", "dont"]);
    }

    #[test]
    fn hashtags_test() {
        assert_eq!(extract_hashtags("RT @HouseGOP: The #StateOfTheUnion is strong."), vec!["#StateOfTheUnion"]);
        assert!(extract_hashtags("This tweet contains a # but not a hashtag.").is_empty());
        assert_eq!(extract_hashtags("#a and #b_2"), vec!["#a", "#b_2"]);
        assert_eq!(extract_hashtags("love #café culture"), vec!["#café"]);
        assert_eq!(extract_hashtags("#Zürich #東京"), vec!["#Zürich", "#東京"]);
    }

    #[test]
    fn mentions_test() {
        assert_eq!(extract_mentions("RT @HouseGOP: The #StateOfTheUnion is strong."), vec!["@HouseGOP"]);
        assert!(extract_mentions("user@example.net contains no mention").is_empty());
        assert!(extract_mentions("This tweet contains an email address, user@example.net.").is_empty());
        assert_eq!(extract_mentions("@nytimes and @washtimes"), vec!["@nytimes", "@washtimes"]);
    }

    #[test]
    fn mentions_unicode_handles() {
        assert_eq!(extract_mentions("hi @josé"), vec!["@josé"]);
        assert!(extract_mentions("write to café@example.net").is_empty());
        assert_eq!(extract_mentions("ça va @müller?"), vec!["@müller"]);
    }

    #[test]
    fn mentions_truncate_long_handles() {
        assert_eq!(extract_mentions("hi @abcdefghijklmnopqrst"), vec!["@abcdefghijklmno"]);
    }
}
