use crate::index::{DocSet, Position, PositionalIndex, PostingList};
use crate::normalizer::normalize_term;

fn lookup<'a>(term: &str, index: &'a PositionalIndex) -> Option<&'a PostingList> {
    let term = normalize_term(term, index.mode())?;
    index.postings(&term)
}

/// True if some pair of positions is at most `max_distance` apart.
/// Both slices are sorted, so a merge walk finds the closest pair.
fn within(first: &[Position], second: &[Position], max_distance: u32) -> bool {
    let (mut i, mut j) = (0, 0);
    while i < first.len() && j < second.len() {
        if first[i].abs_diff(second[j]) <= max_distance {
            return true;
        }
        if first[i] < second[j] {
            i += 1;
        } else {
            j += 1;
        }
    }
    false
}

/// Documents where `first` and `second` occur within `max_distance`
/// positions of each other (inclusive).
pub fn proximity(first: &str, second: &str, max_distance: u32, index: &PositionalIndex) -> DocSet {
    let (Some(first), Some(second)) = (lookup(first, index), lookup(second, index)) else {
        return DocSet::new();
    };

    first
        .iter()
        .filter_map(|(&doc_id, positions)| {
            let other = second.get(&doc_id)?;
            within(positions, other, max_distance).then_some(doc_id)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{Corpus, Document};
    use crate::index::build_positional;
    use crate::normalizer::NormalizationMode;

    #[test]
    fn merge_walk_finds_closest_pair() {
        assert!(within(&[2, 9], &[4, 20], 2));
        assert!(!within(&[2, 9], &[4, 20], 1));
        assert!(within(&[30], &[1, 5, 29], 1));
        assert!(!within(&[], &[1], 10));
    }

    #[test]
    fn distance_is_symmetric_and_inclusive() {
        let corpus = Corpus::from_documents(vec![
            Document::new("1.txt", "cloud storage pricing plan"),
            Document::new("2.txt", "pricing for the storage of every cloud"),
            Document::new("3.txt", "cloud only"),
        ]);
        let (index, _) = build_positional(&corpus, NormalizationMode::VerbPreferring);

        assert_eq!(proximity("cloud", "pricing", 2, &index), DocSet::from([1]));
        assert_eq!(proximity("pricing", "cloud", 2, &index), DocSet::from([1]));
        assert_eq!(proximity("cloud", "pricing", 3, &index), DocSet::from([1, 2]));
        assert_eq!(proximity("cloud", "storage", 0, &index), DocSet::new());
        assert!(proximity("cloud", "missing", 100, &index).is_empty());
        assert!(proximity("the", "cloud", 100, &index).is_empty());
    }
}
