//! Match index
//!
//! Finds every exact window match between named database and query
//! sequences using hash-based lookup of query windows. Matches are grouped
//! by (database name, query name) and emitted in ascending database-offset
//! order, ties broken by ascending query offset.

use std::collections::{BTreeMap, HashMap};

use rayon::prelude::*;
use thiserror::Error;

use crate::cancel::CancelToken;
use crate::split::{self, SplitError};
use crate::types::{Match, MatchMap, Offset};

/// Errors that can occur during match indexing.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("window length must be at least 1, got {length}")]
    InvalidLength { length: usize },

    #[error("matching was cancelled")]
    Cancelled,
}

impl From<SplitError> for IndexError {
    fn from(err: SplitError) -> Self {
        match err {
            SplitError::InvalidLength { length } => IndexError::InvalidLength { length },
        }
    }
}

pub type IndexResult<T> = Result<T, IndexError>;

/// Hash index from window content to the ascending offsets it occurs at.
struct WordIndex<'a> {
    words: HashMap<&'a str, Vec<Offset>>,
}

impl<'a> WordIndex<'a> {
    fn build(seq: &'a str, length: usize) -> IndexResult<Self> {
        let mut words: HashMap<&str, Vec<Offset>> = HashMap::new();
        for (offset, word) in split::windows(seq, length)? {
            words.entry(word).or_default().push(offset as Offset);
        }
        Ok(Self { words })
    }

    fn lookup(&self, word: &str) -> Option<&[Offset]> {
        self.words.get(word).map(Vec::as_slice)
    }
}

/// Find every exact window match between the databases and the queries.
///
/// Every (database name, query name) pair gets an entry in the result, even
/// when no matches exist for it.
pub fn find_matches(
    databases: &BTreeMap<String, String>,
    queries: &BTreeMap<String, String>,
    length: usize,
) -> IndexResult<MatchMap> {
    find_matches_with(databases, queries, length, &CancelToken::default())
}

/// [`find_matches`] with a cancellation token, checked once per database
/// sequence.
pub fn find_matches_with(
    databases: &BTreeMap<String, String>,
    queries: &BTreeMap<String, String>,
    length: usize,
    cancel: &CancelToken,
) -> IndexResult<MatchMap> {
    if length == 0 {
        return Err(IndexError::InvalidLength { length });
    }

    // One index per query sequence, shared read-only by every database scan.
    let query_indexes = queries
        .iter()
        .map(|(qname, qseq)| {
            if qseq.len() < length {
                log::warn!(
                    "query {} ({} bytes) is shorter than window length {}, no matches possible",
                    qname,
                    qseq.len(),
                    length
                );
            }
            Ok((qname.as_str(), WordIndex::build(qseq, length)?))
        })
        .collect::<IndexResult<Vec<_>>>()?;

    let groups = databases
        .par_iter()
        .map(|(dname, dseq)| {
            if cancel.is_cancelled() {
                return Err(IndexError::Cancelled);
            }
            if dseq.len() < length {
                log::warn!(
                    "database {} ({} bytes) is shorter than window length {}, no matches possible",
                    dname,
                    dseq.len(),
                    length
                );
            }

            let dwindows = split::windows(dseq, length)?;
            let mut per_query = BTreeMap::new();
            for (qname, index) in &query_indexes {
                // Database windows ascend, stored query offsets ascend: the
                // group comes out in (dindex, qindex) order with no sort.
                let mut matches = Vec::new();
                for &(dindex, word) in &dwindows {
                    if let Some(qoffsets) = index.lookup(word) {
                        for &qindex in qoffsets {
                            matches.push(Match::new(
                                word.to_string(),
                                dname.clone(),
                                (*qname).to_string(),
                                dindex as Offset,
                                qindex,
                            ));
                        }
                    }
                }
                log::debug!("group {}/{}: {} match(es)", dname, qname, matches.len());
                per_query.insert((*qname).to_string(), matches);
            }
            Ok((dname.clone(), per_query))
        })
        .collect::<IndexResult<Vec<_>>>()?;

    Ok(groups.into_iter().collect())
}
