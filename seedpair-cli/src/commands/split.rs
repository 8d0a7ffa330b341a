//! `seedpair split` - enumerate the windows of one sequence

use anyhow::Result;
use seedpair_core::split;

pub fn execute(sequence: &str, length: usize, json: bool) -> Result<()> {
    let windows = split::windows(sequence, length)?;

    if json {
        let words: Vec<&str> = windows.iter().map(|(_, word)| *word).collect();
        println!("{}", serde_json::to_string_pretty(&words)?);
        return Ok(());
    }

    // Staggered listing: each window indented to its offset lines it up
    // under its position in the input sequence.
    println!("{sequence}");
    for &(offset, word) in &windows {
        println!("{:indent$}{word}", "", indent = offset);
    }
    log::info!("{} window(s) of length {}", windows.len(), length);
    Ok(())
}
