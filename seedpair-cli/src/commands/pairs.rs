//! `seedpair pairs` - the full pipeline, matches grouped into adjacent pairs

use std::collections::BTreeMap;

use anyhow::Result;
use seedpair_core::{find_matches, PairMap, PairParams, Pairer};

use crate::input::load_sequences;

pub fn execute(
    databases: &[String],
    queries: &[String],
    length: usize,
    bound: Option<i64>,
    skip_empty: bool,
    json: bool,
) -> Result<()> {
    let databases = load_sequences(databases)?;
    let queries = load_sequences(queries)?;

    let matches = find_matches(&databases, &queries, length)?;

    let pairs = match bound {
        Some(bound) => {
            let mut params = PairParams::new(bound);
            params.keep_empty_groups = !skip_empty;
            Pairer::new(params).pair_all(&matches)?
        }
        // Default bound per group: that query's length.
        None => {
            let mut result = PairMap::new();
            for (dname, per_query) in &matches {
                let mut folded = BTreeMap::new();
                for (qname, group) in per_query {
                    let qlen = queries.get(qname).map_or(0, |seq| seq.len());
                    let mut params = PairParams::new(qlen as i64);
                    params.keep_empty_groups = !skip_empty;
                    let group_pairs = Pairer::new(params).pair_group(group)?;
                    if !group_pairs.is_empty() || !skip_empty {
                        folded.insert(qname.clone(), group_pairs);
                    }
                }
                if !folded.is_empty() || !skip_empty {
                    result.insert(dname.clone(), folded);
                }
            }
            result
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&pairs)?);
        return Ok(());
    }

    for (dname, per_query) in &pairs {
        for (qname, group) in per_query {
            println!("{dname} / {qname}: {} pair(s)", group.len());
            for p in group {
                println!(
                    "  {} db:{} query:{}  +  {} db:{} query:{}  span db:{} query:{}",
                    p.word1,
                    p.dindex1,
                    p.qindex1,
                    p.word2,
                    p.dindex2,
                    p.qindex2,
                    p.db_span(),
                    p.query_span(),
                );
            }
        }
    }
    Ok(())
}
