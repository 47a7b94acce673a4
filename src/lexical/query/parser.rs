//! Query string parser.
//!
//! # Syntax
//!
//! A query is a whitespace-separated list of words. A word starting with `+`
//! intersects, a word starting with `-` excludes, any other word unions. The
//! sigil is removed before the rest of the word is normalized, so `+Apple!`
//! becomes an intersect clause on `apple`.

use crate::analysis::normalize::normalize;
use crate::lexical::query::boolean::{BooleanQuery, Clause, Operator};

/// Parser turning query strings into [`BooleanQuery`] values.
///
/// Parsing never fails. A word that normalizes to nothing (`+2024`, `-!!`)
/// still produces a clause with an empty term, which matches no document but
/// keeps its operator.
///
/// # Example
///
/// ```
/// use revdex::lexical::query::{Operator, QueryParser};
///
/// let query = QueryParser::new().parse("hello +World! -there");
/// let ops: Vec<Operator> = query.clauses().iter().map(|c| c.operator).collect();
/// assert_eq!(ops, vec![Operator::Union, Operator::Intersect, Operator::Exclude]);
/// assert_eq!(query.description(), "(hello +world -there)");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryParser;

impl QueryParser {
    /// Create a new query parser.
    pub fn new() -> Self {
        QueryParser
    }

    /// Parse a query string.
    pub fn parse(&self, query_str: &str) -> BooleanQuery {
        query_str.split_whitespace().map(parse_clause).collect()
    }
}

/// Parse one raw word into a clause.
fn parse_clause(word: &str) -> Clause {
    let (operator, rest) = if let Some(rest) = word.strip_prefix('+') {
        (Operator::Intersect, rest)
    } else if let Some(rest) = word.strip_prefix('-') {
        (Operator::Exclude, rest)
    } else {
        (Operator::Union, word)
    };

    Clause::new(operator, normalize(rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_operators() {
        let query = QueryParser::new().parse("apple +banana -cherry");

        assert_eq!(
            query.clauses(),
            &[
                Clause::union("apple"),
                Clause::intersect("banana"),
                Clause::exclude("cherry"),
            ]
        );
    }

    #[test]
    fn test_parse_normalizes_after_sigil() {
        let query = QueryParser::new().parse("+\"Quoted\" -(Paren). Mixed!");

        assert_eq!(
            query.clauses(),
            &[
                Clause::intersect("quoted"),
                Clause::exclude("paren"),
                Clause::union("mixed"),
            ]
        );
    }

    #[test]
    fn test_parse_only_first_character_is_a_sigil() {
        let query = QueryParser::new().parse("+-apple -+banana");

        // The second character is ordinary leading punctuation.
        assert_eq!(
            query.clauses(),
            &[Clause::intersect("apple"), Clause::exclude("banana")]
        );
    }

    #[test]
    fn test_parse_keeps_degenerate_clauses() {
        let query = QueryParser::new().parse("apple + -2024 !!");

        assert_eq!(
            query.clauses(),
            &[
                Clause::union("apple"),
                Clause::intersect(""),
                Clause::exclude(""),
                Clause::union(""),
            ]
        );
    }

    #[test]
    fn test_parse_empty_and_blank() {
        let parser = QueryParser::new();
        assert!(parser.parse("").is_empty());
        assert!(parser.parse("   \t \n").is_empty());
    }

    #[test]
    fn test_parse_collapses_whitespace() {
        let query = QueryParser::new().parse("  hello\t\t+world \n");
        assert_eq!(query.description(), "(hello +world)");
    }
}
