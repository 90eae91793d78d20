use super::Operator;
use crate::error::{Result, SearchError};
use crate::index::{DocSet, PositionalIndex};
use crate::soundex;

/// Documents containing any indexed term whose Soundex code equals `name`'s.
///
/// Scans the whole vocabulary, so cost grows with the number of terms.
pub fn phonetic_match(name: &str, index: &PositionalIndex) -> Result<DocSet> {
    let target = soundex::encode(name).ok_or(SearchError::EmptyPhoneticInput)?;

    let mut docs = DocSet::new();
    for (term, postings) in index.terms() {
        if soundex::encode(term).as_deref() == Some(target.as_str()) {
            docs.extend(postings.keys().copied());
        }
    }
    Ok(docs)
}

/// Phonetic terms joined by lower-case `and` / `or` / `not`, strictly left
/// to right. Terms and operators must alternate, starting with a term.
pub fn phonetic_boolean(query: &str, index: &PositionalIndex) -> Result<DocSet> {
    let mut result: Option<DocSet> = None;
    let mut pending: Option<(Operator, &str)> = None;

    for token in query.split_whitespace() {
        if let Some(op) = Operator::parse_lowercase(token) {
            if let Some((_, previous)) = pending {
                return Err(SearchError::DanglingOperator { operator: previous.to_string() });
            }
            if result.is_none() {
                return Err(SearchError::MissingLeftOperand { operator: token.to_string() });
            }
            pending = Some((op, token));
            continue;
        }

        let docs = phonetic_match(token, index)?;
        result = match (result, pending.take()) {
            (None, _) => Some(docs),
            (Some(acc), Some((op, _))) => Some(op.apply(acc, &docs)),
            (Some(_), None) => return Err(SearchError::MissingOperator { term: token.to_string() }),
        };
    }

    if let Some((_, operator)) = pending {
        return Err(SearchError::DanglingOperator { operator: operator.to_string() });
    }
    Ok(result.unwrap_or_default())
}
