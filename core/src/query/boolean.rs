//! Left-to-right AND / OR / NOT over single terms.
//!
//! Operators are binary and take the next token as their right operand.
//! There is no precedence and no grouping.

use super::Operator;
use crate::error::{Result, SearchError};
use crate::index::{DocSet, TermIndex};
use crate::normalizer::normalize_term;

/// Postings of `term` after normalizing it the way the index was built.
/// Unknown terms and terms that normalize away give an empty set.
pub fn get_docs(term: &str, index: &TermIndex) -> DocSet {
    normalize_term(term, index.mode())
        .and_then(|term| index.docs(&term).cloned())
        .unwrap_or_default()
}

pub fn evaluate(query: &str, index: &TermIndex) -> Result<DocSet> {
    let mut stack: Vec<DocSet> = Vec::new();
    let mut tokens = query.split_whitespace();

    while let Some(token) = tokens.next() {
        let Some(op) = Operator::parse_any_case(token) else {
            stack.push(get_docs(token, index));
            continue;
        };
        let operand = tokens
            .next()
            .ok_or_else(|| SearchError::DanglingOperator { operator: token.to_string() })?;
        let right = get_docs(operand, index);

        match (op, stack.pop()) {
            (Operator::Not, None) => {
                // Leading NOT negates against the whole collection.
                stack.push(index.all_docs().difference(&right).copied().collect());
            }
            (_, None) => {
                return Err(SearchError::MissingLeftOperand { operator: token.to_string() });
            }
            (op, Some(left)) => stack.push(op.apply(left, &right)),
        }
    }

    Ok(stack.pop().unwrap_or_default())
}
