//! Sequence input handling
//!
//! Sequences arrive either inline as `name=SEQUENCE` specs or as paths to
//! FASTA/FASTQ files (plain or gzipped), parsed with needletail. The core
//! library itself knows nothing about file formats.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use needletail::parse_fastx_file;

/// Load named sequences from a list of `name=SEQUENCE` specs and file paths.
pub fn load_sequences(specs: &[String]) -> Result<BTreeMap<String, String>> {
    let mut sequences = BTreeMap::new();
    for spec in specs {
        if let Some((name, seq)) = spec.split_once('=') {
            if name.is_empty() || seq.is_empty() {
                bail!("invalid sequence spec '{spec}', expected name=SEQUENCE");
            }
            insert_sequence(&mut sequences, name.to_string(), seq.to_string());
        } else {
            read_fastx(Path::new(spec), &mut sequences)?;
        }
    }
    Ok(sequences)
}

fn read_fastx(path: &Path, out: &mut BTreeMap<String, String>) -> Result<()> {
    let mut reader = parse_fastx_file(path)
        .with_context(|| format!("failed to open sequence file {}", path.display()))?;

    let mut records = 0usize;
    while let Some(record) = reader.next() {
        let record = record
            .with_context(|| format!("failed to parse record in {}", path.display()))?;

        let id = String::from_utf8_lossy(record.id());
        // Record name is the first word of the header, FASTA convention.
        let name = id.split_whitespace().next().unwrap_or("").to_string();
        if name.is_empty() {
            bail!("record without a name in {}", path.display());
        }

        let seq = String::from_utf8_lossy(&record.seq()).into_owned();
        insert_sequence(out, name, seq);
        records += 1;
    }

    if records == 0 {
        bail!("no sequences found in {}", path.display());
    }
    log::info!("loaded {} sequence(s) from {}", records, path.display());
    Ok(())
}

fn insert_sequence(out: &mut BTreeMap<String, String>, name: String, seq: String) {
    if out.contains_key(&name) {
        log::warn!("duplicate sequence name {}, keeping the last occurrence", name);
    }
    out.insert(name, seq);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_specs() {
        let specs = vec!["db1=ACGT".to_string(), "db2=TTTT".to_string()];
        let sequences = load_sequences(&specs).unwrap();

        assert_eq!(sequences["db1"], "ACGT");
        assert_eq!(sequences["db2"], "TTTT");
    }

    #[test]
    fn test_invalid_inline_spec() {
        assert!(load_sequences(&["=ACGT".to_string()]).is_err());
        assert!(load_sequences(&["name=".to_string()]).is_err());
    }

    #[test]
    fn test_duplicate_names_keep_last() {
        let specs = vec!["s=AAAA".to_string(), "s=CCCC".to_string()];
        let sequences = load_sequences(&specs).unwrap();

        assert_eq!(sequences.len(), 1);
        assert_eq!(sequences["s"], "CCCC");
    }

    #[test]
    fn test_missing_file() {
        assert!(load_sequences(&["/no/such/file.fa".to_string()]).is_err());
    }
}
