use crate::normalizer::NormalizationMode;
use lazy_static::lazy_static;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::{HashMap, HashSet};

lazy_static! {
    static ref STEMMER: Stemmer = Stemmer::create(Algorithm::English);
    static ref IRREGULAR_NOUNS: HashMap<&'static str, &'static str> = [
        ("children", "child"),
        ("feet", "foot"),
        ("geese", "goose"),
        ("lives", "life"),
        ("knives", "knife"),
        ("men", "man"),
        ("mice", "mouse"),
        ("people", "person"),
        ("teeth", "tooth"),
        ("wives", "wife"),
        ("women", "woman"),
    ]
    .into_iter()
    .collect();
    // Words that end in "s" without being plurals.
    static ref INVARIANT_NOUNS: HashSet<&'static str> = [
        "alias", "always", "analysis", "atlas", "bias", "bus", "basis", "canvas", "chaos",
        "cosmos", "crisis", "ethos", "gas", "kudos", "lens", "mathematics", "news",
        "pancreas", "perhaps", "physics", "series", "species", "thus", "whereas", "yes",
    ]
    .into_iter()
    .collect();
    // Nouns whose singular ends in "ie", so "-ies" must not become "-y".
    static ref IE_NOUNS: HashSet<&'static str> = [
        "brownie", "calorie", "cookie", "goalie", "hippie", "lingerie", "movie", "newbie",
        "pixie", "prairie", "rookie", "selfie", "smoothie", "sortie", "veggie", "zombie",
    ]
    .into_iter()
    .collect();
}

/// Reduce an already case-folded, alphabetic token to its base form.
pub fn lemmatize(word: &str, mode: NormalizationMode) -> String {
    match mode {
        NormalizationMode::General => lemmatize_noun(word),
        NormalizationMode::VerbPreferring => STEMMER.stem(word).into_owned(),
    }
}

fn lemmatize_noun(word: &str) -> String {
    if let Some(base) = IRREGULAR_NOUNS.get(word) {
        return (*base).to_string();
    }
    if word.chars().count() <= 3 || INVARIANT_NOUNS.contains(word) {
        return word.to_string();
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix("ies") {
        let singular = format!("{stem}ie");
        // lies, pies, ties, dies
        if stem.chars().count() == 1 || IE_NOUNS.contains(singular.as_str()) {
            singular
        } else {
            format!("{stem}y")
        }
    } else if let Some(stem) = word.strip_suffix("sses") {
        format!("{stem}ss")
    } else if ["xes", "zes", "ches", "shes"].iter().any(|suffix| word.ends_with(suffix)) {
        word[..word.len() - 2].to_string()
    } else if let Some(stem) = word.strip_suffix('s') {
        stem.to_string()
    } else {
        word.to_string()
    }
}
