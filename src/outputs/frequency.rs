//! Per-article frequency tables as headerless `token,count` CSV.
//!
//! Files are named `<site>-<title>.csv` inside the topic directory and are
//! overwritten, never appended.

use crate::analysis::FrequencyTable;
use crate::error::PipelineError;
use crate::scrapers::SiteConfig;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, instrument};

/// Where the frequency table for an article is written.
pub fn frequency_path(topic_dir: &Path, site: &SiteConfig, title: &str) -> PathBuf {
    topic_dir.join(format!("{}-{}.csv", site.label, title))
}

/// Encode `table` as CSV records in the table's iteration order.
pub fn encode_frequency(table: &FrequencyTable) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    for (word, count) in table.iter() {
        writer.write_record([word, count.to_string().as_str()])?;
    }
    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}

/// Write `table` to `path`, replacing any previous contents.
#[instrument(level = "info", skip_all, fields(path = %path.display(), words = table.len()))]
pub async fn write_frequency(table: &FrequencyTable, path: &Path) -> Result<(), PipelineError> {
    let bytes = encode_frequency(table).map_err(|source| PipelineError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    if table.is_empty() {
        debug!("No words extracted; writing empty frequency file");
    }
    fs::write(path, bytes)
        .await
        .map_err(|e| PipelineError::io(path, e))?;
    info!("Wrote frequency table");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrapers::SiteId;
    use std::collections::HashMap;

    fn read_back(path: &Path) -> HashMap<String, u64> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(path)
            .unwrap();
        reader
            .deserialize::<(String, u64)>()
            .map(|row| row.unwrap())
            .collect()
    }

    #[test]
    fn test_frequency_path_uses_label_and_title() {
        let path = frequency_path(Path::new("out/Debate"), SiteId::Cnn.config(), "takeaways");
        assert_eq!(path, PathBuf::from("out/Debate/cnn-takeaways.csv"));
    }

    #[test]
    fn test_encode_has_no_header_and_keeps_order() {
        let table: FrequencyTable = ["trump", "said", "hello", "hello"].into_iter().collect();
        let bytes = encode_frequency(&table).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "trump,1\nsaid,1\nhello,2\n");
    }

    #[test]
    fn test_encode_empty_table() {
        let bytes = encode_frequency(&FrequencyTable::new()).unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn test_write_then_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cnn-x.csv");
        let table: FrequencyTable = ["it's", "well-known", "it's", "a", "fact"].into_iter().collect();

        write_frequency(&table, &path).await.unwrap();

        let expected: HashMap<String, u64> = table
            .iter()
            .map(|(word, count)| (word.to_string(), count))
            .collect();
        assert_eq!(read_back(&path), expected);
    }

    #[tokio::test]
    async fn test_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cnn-x.csv");
        let first: FrequencyTable = ["old", "words"].into_iter().collect();
        let second: FrequencyTable = ["new"].into_iter().collect();

        write_frequency(&first, &path).await.unwrap();
        write_frequency(&second, &path).await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new,1\n");
    }
}
