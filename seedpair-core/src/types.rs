use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type Offset = u64;

/// Grouped match records: database name -> query name -> matches.
pub type MatchMap = BTreeMap<String, BTreeMap<String, Vec<Match>>>;

/// Grouped adjacent pairs, same two-level keying as [`MatchMap`].
pub type PairMap = BTreeMap<String, BTreeMap<String, Vec<AdjacentPair>>>;

/// One exact window match between a database and a query sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// The shared window content.
    pub word: String,
    /// Window length.
    pub length: usize,
    /// Database sequence name.
    pub db: String,
    /// Query sequence name.
    pub query: String,
    /// Start offset in the database sequence.
    pub dindex: Offset,
    /// Start offset in the query sequence.
    pub qindex: Offset,
}

impl Match {
    pub fn new(word: String, db: String, query: String, dindex: Offset, qindex: Offset) -> Self {
        let length = word.len();
        Self {
            word,
            length,
            db,
            query,
            dindex,
            qindex,
        }
    }

    /// Sort rank within one group: database offset, ties by query offset.
    pub fn rank(&self) -> (Offset, Offset) {
        (self.dindex, self.qindex)
    }
}

/// Two matches from one group that are within the proximity bound of each
/// other on both the database and the query axis.
///
/// The earlier-ranked match is always member 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacentPair {
    pub word1: String,
    pub word2: String,
    /// Window length shared by both words.
    pub length: usize,
    pub dindex1: Offset,
    pub qindex1: Offset,
    pub dindex2: Offset,
    pub qindex2: Offset,
}

impl AdjacentPair {
    /// Build a pair from two matches of the same group, canonicalized so the
    /// lower-ranked match comes first.
    pub fn new(m1: &Match, m2: &Match) -> Self {
        let (first, second) = if m1.rank() <= m2.rank() { (m1, m2) } else { (m2, m1) };
        Self {
            word1: first.word.clone(),
            word2: second.word.clone(),
            length: first.length,
            dindex1: first.dindex,
            qindex1: first.qindex,
            dindex2: second.dindex,
            qindex2: second.qindex,
        }
    }

    /// Combined extent on the database axis, min start to max end.
    pub fn db_span(&self) -> Offset {
        let start = self.dindex1.min(self.dindex2);
        let end = self.dindex1.max(self.dindex2) + self.length as Offset;
        end - start
    }

    /// Combined extent on the query axis, min start to max end.
    pub fn query_span(&self) -> Offset {
        let start = self.qindex1.min(self.qindex2);
        let end = self.qindex1.max(self.qindex2) + self.length as Offset;
        end - start
    }
}
