use crate::lemmatizer::lemmatize;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    // Word runs and punctuation runs, like a word tokenizer would split them.
    static ref RE: Regex = Regex::new(r"(?u)\w+|[^\w\s]+").expect("valid regex");
    static ref STOPWORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "a","about","above","after","again","against","ain","all","am","an","and","any","are","aren","as","at",
            "be","because","been","before","being","below","between","both","but","by",
            "can","couldn","d","did","didn","do","does","doesn","doing","don","down","during",
            "each","few","for","from","further",
            "had","hadn","has","hasn","have","haven","having","he","her","here","hers","herself","him","himself","his","how",
            "i","if","in","into","is","isn","it","its","itself","just",
            "ll","m","ma","me","mightn","more","most","mustn","my","myself",
            "needn","no","nor","not","now","o","of","off","on","once","only","or","other","our","ours","ourselves","out","over","own",
            "re","s","same","shan","she","should","shouldn","so","some","such",
            "t","than","that","the","their","theirs","them","themselves","then","there","these","they","this","those","through","to","too",
            "under","until","up","ve","very",
            "was","wasn","we","were","weren","what","when","where","which","while","who","whom","why","will","with","won","wouldn",
            "y","you","your","yours","yourself","yourselves"
        ];
        words.iter().copied().collect()
    };
}

/// Lemmatization policy applied after stopword removal.
///
/// Each index family is built with one mode, and query terms aimed at that
/// family are normalized with the same mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NormalizationMode {
    /// Inflectional noun lemmatization; used by the boolean term index.
    #[default]
    General,
    /// Collapses verb inflections to a shared base ("searching" -> "search");
    /// used by the positional and biword indexes.
    VerbPreferring,
}

pub fn is_stopword(token: &str) -> bool { STOPWORDS.contains(token) }

fn is_alphabetic(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

/// Case-fold, tokenize, keep alphabetic tokens, drop stopwords and lemmatize.
///
/// The index of a token in the returned vector is its position.
pub fn normalize(text: &str, mode: NormalizationMode) -> Vec<String> {
    let folded = text.nfkc().collect::<String>().to_lowercase();
    RE.find_iter(&folded)
        .map(|mat| mat.as_str())
        .filter(|token| is_alphabetic(token))
        .filter(|token| !is_stopword(token))
        .map(|token| lemmatize(token, mode))
        .collect()
}

/// Normalize a single query word. Returns the first surviving token, if any.
pub fn normalize_term(term: &str, mode: NormalizationMode) -> Option<String> {
    normalize(term, mode).into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_numbers_punctuation_and_mixed_tokens() {
        let t = normalize("Order 66, shipped: x86 r2d2 today!", NormalizationMode::General);
        assert_eq!(t, vec!["order", "shipped", "today"]);
    }

    #[test]
    fn positions_close_gaps_left_by_stopwords() {
        let t = normalize("The quick brown fox and the dog", NormalizationMode::VerbPreferring);
        assert_eq!(t, vec!["quick", "brown", "fox", "dog"]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(normalize("", NormalizationMode::General).is_empty());
        assert!(normalize("  ... 42 ", NormalizationMode::VerbPreferring).is_empty());
        assert_eq!(normalize_term("the", NormalizationMode::General), None);
    }

    #[test]
    fn modes_differ_on_verbs() {
        assert_eq!(normalize_term("Searching", NormalizationMode::VerbPreferring).as_deref(), Some("search"));
        assert_eq!(normalize_term("searching", NormalizationMode::General).as_deref(), Some("searching"));
    }
}
