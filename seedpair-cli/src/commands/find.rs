//! `seedpair find` - exact window matches between databases and queries

use anyhow::Result;
use seedpair_core::find_matches;

use crate::input::load_sequences;

pub fn execute(databases: &[String], queries: &[String], length: usize, json: bool) -> Result<()> {
    let databases = load_sequences(databases)?;
    let queries = load_sequences(queries)?;

    let matches = find_matches(&databases, &queries, length)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    for (dname, per_query) in &matches {
        for (qname, group) in per_query {
            println!("{dname} / {qname}: {} match(es)", group.len());
            for m in group {
                println!("  {}  db:{}  query:{}", m.word, m.dindex, m.qindex);
            }
        }
    }
    Ok(())
}
