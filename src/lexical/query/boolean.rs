//! Boolean queries folded over document id sets.

use std::fmt;

use crate::lexical::index::{DocIdSet, InvertedIndex};

/// The set of documents a query evaluates to.
pub type ResultSet = DocIdSet;

/// How a clause combines with the results accumulated so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Add the clause's documents (no sigil).
    Union,
    /// Keep only documents the clause also matches (`+`).
    Intersect,
    /// Drop documents the clause matches (`-`).
    Exclude,
}

impl Operator {
    /// The sigil selecting this operator in query text.
    pub fn sigil(self) -> &'static str {
        match self {
            Operator::Union => "",
            Operator::Intersect => "+",
            Operator::Exclude => "-",
        }
    }

    /// Combine `acc` with `docs` according to this operator.
    pub fn apply(self, acc: ResultSet, docs: &DocIdSet) -> ResultSet {
        match self {
            Operator::Union => {
                let mut acc = acc;
                acc.extend(docs.iter().cloned());
                acc
            }
            Operator::Intersect => acc.into_iter().filter(|id| docs.contains(id)).collect(),
            Operator::Exclude => acc.into_iter().filter(|id| !docs.contains(id)).collect(),
        }
    }
}

/// A clause in a boolean query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    /// The occurrence operator.
    pub operator: Operator,
    /// The normalized term. May be empty if the raw word had no letters, in
    /// which case the clause matches nothing.
    pub term: String,
}

impl Clause {
    /// Create a new clause.
    pub fn new(operator: Operator, term: impl Into<String>) -> Self {
        Clause {
            operator,
            term: term.into(),
        }
    }

    /// Create a union clause.
    pub fn union(term: impl Into<String>) -> Self {
        Clause::new(Operator::Union, term)
    }

    /// Create an intersect clause.
    pub fn intersect(term: impl Into<String>) -> Self {
        Clause::new(Operator::Intersect, term)
    }

    /// Create an exclude clause.
    pub fn exclude(term: impl Into<String>) -> Self {
        Clause::new(Operator::Exclude, term)
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.term.is_empty() {
            write!(f, "{}\"\"", self.operator.sigil())
        } else {
            write!(f, "{}{}", self.operator.sigil(), self.term)
        }
    }
}

/// An ordered list of clauses, evaluated strictly left to right.
///
/// Evaluation starts from the empty set and the first clause is always merged
/// as a union, whatever its operator. So `+apple -banana` yields the documents
/// with `apple` but not `banana`, and a lone `-apple` yields the documents with
/// `apple`. The operators of later clauses apply as written, with no
/// precedence or grouping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BooleanQuery {
    clauses: Vec<Clause>,
}

impl BooleanQuery {
    /// Create a new empty boolean query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a clause to this query.
    pub fn add_clause(&mut self, clause: Clause) {
        self.clauses.push(clause);
    }

    /// Add a clause, builder style.
    pub fn with_clause(mut self, clause: Clause) -> Self {
        self.add_clause(clause);
        self
    }

    /// Get the clauses.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Check if this query is empty.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Evaluate the query against `index`.
    ///
    /// Terms missing from the index contribute the empty set.
    pub fn evaluate(&self, index: &InvertedIndex) -> ResultSet {
        let empty = DocIdSet::new();
        let mut clauses = self.clauses.iter();

        let Some(first) = clauses.next() else {
            return ResultSet::new();
        };
        let seed = Operator::Union.apply(
            ResultSet::new(),
            index.get(&first.term).unwrap_or(&empty),
        );

        clauses.fold(seed, |acc, clause| {
            let docs = index.get(&clause.term).unwrap_or(&empty);
            clause.operator.apply(acc, docs)
        })
    }

    /// Render the query, e.g. `(hello +world -there)`.
    pub fn description(&self) -> String {
        let parts: Vec<String> = self.clauses.iter().map(Clause::to_string).collect();
        format!("({})", parts.join(" "))
    }
}

impl FromIterator<Clause> for BooleanQuery {
    fn from_iter<I: IntoIterator<Item = Clause>>(iter: I) -> Self {
        BooleanQuery {
            clauses: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::stop_words::StopWords;
    use crate::lexical::document::Document;
    use crate::lexical::writer::build_index;

    fn ids(items: &[&str]) -> ResultSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn fruit_index() -> InvertedIndex {
        let documents = vec![
            Document::new("d1", "apple banana"),
            Document::new("d2", "apple cherry"),
            Document::new("d3", "banana cherry"),
            Document::new("d4", "apple banana cherry"),
        ];
        build_index(&documents, &StopWords::new()).0
    }

    #[test]
    fn test_operator_apply() {
        let acc = ids(&["a", "b", "c"]);
        let docs = ids(&["b", "c", "d"]);

        assert_eq!(
            Operator::Union.apply(acc.clone(), &docs),
            ids(&["a", "b", "c", "d"])
        );
        assert_eq!(Operator::Intersect.apply(acc.clone(), &docs), ids(&["b", "c"]));
        assert_eq!(Operator::Exclude.apply(acc, &docs), ids(&["a"]));
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        let index = fruit_index();
        assert!(BooleanQuery::new().evaluate(&index).is_empty());
    }

    #[test]
    fn test_first_operator_is_masked() {
        let index = fruit_index();

        let plain = BooleanQuery::new().with_clause(Clause::union("apple"));
        let intersect = BooleanQuery::new().with_clause(Clause::intersect("apple"));
        let exclude = BooleanQuery::new().with_clause(Clause::exclude("apple"));

        let expected = ids(&["d1", "d2", "d4"]);
        assert_eq!(plain.evaluate(&index), expected);
        assert_eq!(intersect.evaluate(&index), expected);
        assert_eq!(exclude.evaluate(&index), expected);
    }

    #[test]
    fn test_left_fold_order() {
        let index = fruit_index();

        // (apple) − banana
        let query = BooleanQuery::new()
            .with_clause(Clause::intersect("apple"))
            .with_clause(Clause::exclude("banana"));
        assert_eq!(query.evaluate(&index), ids(&["d2"]));

        // ((apple − banana) ∪ banana) ∩ cherry
        let query = BooleanQuery::new()
            .with_clause(Clause::union("apple"))
            .with_clause(Clause::exclude("banana"))
            .with_clause(Clause::union("banana"))
            .with_clause(Clause::intersect("cherry"));
        assert_eq!(query.evaluate(&index), ids(&["d2", "d3", "d4"]));

        // ((apple ∩ cherry) ∪ banana)
        let query = BooleanQuery::new()
            .with_clause(Clause::union("apple"))
            .with_clause(Clause::intersect("cherry"))
            .with_clause(Clause::union("banana"));
        assert_eq!(query.evaluate(&index), ids(&["d1", "d2", "d3", "d4"]));
    }

    #[test]
    fn test_missing_terms_are_empty_sets() {
        let index = fruit_index();

        let query = BooleanQuery::new()
            .with_clause(Clause::union("durian"))
            .with_clause(Clause::union("apple"));
        assert_eq!(query.evaluate(&index), ids(&["d1", "d2", "d4"]));

        let query = BooleanQuery::new()
            .with_clause(Clause::union("apple"))
            .with_clause(Clause::intersect("durian"));
        assert!(query.evaluate(&index).is_empty());

        let query = BooleanQuery::new()
            .with_clause(Clause::union("apple"))
            .with_clause(Clause::exclude("durian"))
            .with_clause(Clause::exclude(""));
        assert_eq!(query.evaluate(&index), ids(&["d1", "d2", "d4"]));
    }

    #[test]
    fn test_description() {
        let query: BooleanQuery = vec![
            Clause::union("hello"),
            Clause::intersect("world"),
            Clause::exclude("there"),
            Clause::intersect(""),
        ]
        .into_iter()
        .collect();

        assert_eq!(query.description(), "(hello +world -there +\"\")");
        assert_eq!(BooleanQuery::new().description(), "()");
    }
}
