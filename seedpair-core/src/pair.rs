//! Adjacency pairing engine
//!
//! Groups exact matches that are close to each other in both the database
//! and the query coordinate axes. Matches are paired only within their
//! (database name, query name) group, using a sorted forward scan instead of
//! the full cross product.

use std::collections::BTreeMap;

use rayon::prelude::*;
use thiserror::Error;

use crate::cancel::CancelToken;
use crate::types::{AdjacentPair, Match, MatchMap, PairMap};

/// Errors that can occur during pairing.
#[derive(Debug, Error)]
pub enum PairError {
    #[error("proximity bound must be non-negative, got {0}")]
    InvalidBound(i64),

    #[error("pairing was cancelled")]
    Cancelled,
}

pub type PairResult<T> = Result<T, PairError>;

/// Parameters for the pairing pass.
#[derive(Debug, Clone)]
pub struct PairParams {
    /// Maximum offset distance, inclusive, on both axes.
    pub proximity_bound: i64,
    /// Keep (database, query) keys whose groups produced no pairs.
    pub keep_empty_groups: bool,
}

impl PairParams {
    pub fn new(proximity_bound: i64) -> Self {
        Self {
            proximity_bound,
            keep_empty_groups: true,
        }
    }
}

/// Pairing engine over grouped matches.
pub struct Pairer {
    params: PairParams,
}

impl Pairer {
    pub fn new(params: PairParams) -> Self {
        Self { params }
    }

    fn bound(&self) -> PairResult<u64> {
        if self.params.proximity_bound < 0 {
            return Err(PairError::InvalidBound(self.params.proximity_bound));
        }
        Ok(self.params.proximity_bound as u64)
    }

    /// Pair one group of matches sharing a (database, query) identity.
    ///
    /// Pairs come out ordered by the first member's sort rank, then the
    /// second's; each unordered pair is emitted exactly once with the
    /// earlier-ranked match first. A group of fewer than two matches yields
    /// no pairs.
    pub fn pair_group(&self, matches: &[Match]) -> PairResult<Vec<AdjacentPair>> {
        let bound = self.bound()?;
        if matches.len() < 2 {
            return Ok(Vec::new());
        }

        let mut order: Vec<&Match> = matches.iter().collect();
        order.sort_by_key(|m| m.rank());

        let mut pairs = Vec::new();
        for (i, &mi) in order.iter().enumerate() {
            for &mj in &order[i + 1..] {
                // Sorted by database offset, so the first distant match ends
                // the forward window.
                if mj.dindex - mi.dindex > bound {
                    break;
                }
                if mi.qindex.abs_diff(mj.qindex) <= bound {
                    pairs.push(AdjacentPair::new(mi, mj));
                }
            }
        }
        Ok(pairs)
    }

    /// Pair every group of a match map, folding the per-group pair lists
    /// back into the same two-level keying.
    pub fn pair_all(&self, matches: &MatchMap) -> PairResult<PairMap> {
        self.pair_all_with(matches, &CancelToken::default())
    }

    /// [`Pairer::pair_all`] with a cancellation token, checked once per
    /// group.
    pub fn pair_all_with(&self, matches: &MatchMap, cancel: &CancelToken) -> PairResult<PairMap> {
        self.bound()?;

        let folded = matches
            .par_iter()
            .map(|(dname, queries)| {
                let mut per_query = BTreeMap::new();
                for (qname, group) in queries {
                    if cancel.is_cancelled() {
                        return Err(PairError::Cancelled);
                    }
                    let pairs = self.pair_group(group)?;
                    log::debug!("group {}/{}: {} pair(s)", dname, qname, pairs.len());
                    if !pairs.is_empty() || self.params.keep_empty_groups {
                        per_query.insert(qname.clone(), pairs);
                    }
                }
                Ok((dname.clone(), per_query))
            })
            .collect::<PairResult<Vec<_>>>()?;

        let mut result = PairMap::new();
        for (dname, per_query) in folded {
            if !per_query.is_empty() || self.params.keep_empty_groups {
                result.insert(dname, per_query);
            }
        }
        Ok(result)
    }
}

/// Pair every group of `matches` with the given proximity bound, keeping
/// empty groups for symmetry with the input map.
pub fn filter_pairs(matches: &MatchMap, proximity_bound: i64) -> PairResult<PairMap> {
    Pairer::new(PairParams::new(proximity_bound)).pair_all(matches)
}
