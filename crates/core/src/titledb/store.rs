//! Cache-or-build store for the reference database.

use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use flate2::read::GzDecoder;
use reqwest::Client;
use tokio::io::AsyncWriteExt;
use tracing::info;

use crate::prompt::Prompt;

use super::types::TitleRecord;
use super::TitleDbError;

/// Fixed location of the bulk title dataset.
pub const DATASET_URL: &str = "https://datasets.imdbws.com/title.basics.tsv.gz";

/// Flattened cache table, kept between runs.
const CACHE_FILE: &str = "titles.csv";
/// Intermediate files, deleted once the cache is written.
const ARCHIVE_FILE: &str = "title.basics.tsv.gz";
const RAW_FILE: &str = "title.basics.tsv";

/// In-memory reference database, keyed by identifier.
///
/// The dataset holds tens of millions of rows, so lookups go through a
/// hash index rather than a scan.
pub struct TitleDb {
    records: HashMap<String, TitleRecord>,
}

impl TitleDb {
    /// Build a database from an explicit record set.
    pub fn from_records(records: impl IntoIterator<Item = TitleRecord>) -> Self {
        Self {
            records: records
                .into_iter()
                .map(|record| (record.id.clone(), record))
                .collect(),
        }
    }

    /// Look up a record by identifier. Absent identifiers are a normal
    /// outcome, not an error.
    pub fn lookup(&self, source_id: &str) -> Option<&TitleRecord> {
        self.records.get(source_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Load the cached dataset, or fetch, filter and persist it on first
    /// use.
    ///
    /// Returns `Ok(None)` when there is no cache yet and the operator
    /// declines the download.
    pub async fn open(
        cache_dir: &Path,
        prompt: &dyn Prompt,
    ) -> Result<Option<Self>, TitleDbError> {
        let cache_path = cache_dir.join(CACHE_FILE);

        if cache_path.is_file() {
            info!("Loading local title database from {}", cache_path.display());
            return Ok(Some(Self::load_cache(&cache_path)?));
        }

        if !prompt.confirm("No local title database found, download it now? [Y/n]") {
            return Ok(None);
        }

        let db = build_cache(cache_dir, &cache_path).await?;
        Ok(Some(db))
    }

    /// Read a previously persisted cache table into memory.
    pub fn load_cache(path: &Path) -> Result<Self, TitleDbError> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut records = HashMap::new();

        for row in reader.deserialize() {
            let record: TitleRecord = row?;
            records.insert(record.id.clone(), record);
        }

        Ok(Self { records })
    }
}

/// Directory the cache lives in: alongside the program's own install
/// location.
pub fn default_cache_dir() -> Result<PathBuf, TitleDbError> {
    let exe = std::env::current_exe()
        .map_err(|e| TitleDbError::NoCacheLocation(e.to_string()))?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| TitleDbError::NoCacheLocation("executable has no parent".to_string()))
}

/// Download, decompress, filter and persist the dataset, then clean up the
/// intermediate files.
async fn build_cache(work_dir: &Path, cache_path: &Path) -> Result<TitleDb, TitleDbError> {
    let archive_path = work_dir.join(ARCHIVE_FILE);
    let raw_path = work_dir.join(RAW_FILE);

    info!("Downloading {}", DATASET_URL);
    download(DATASET_URL, &archive_path).await?;

    info!("Extracting {}", archive_path.display());
    extract_gzip(&archive_path, &raw_path)?;

    info!("Filtering movie rows");
    let file = std::fs::File::open(&raw_path)?;
    let records = filter_dataset(file)?;

    info!("Saving {} titles to {}", records.len(), cache_path.display());
    write_cache(cache_path, &records)?;

    tokio::fs::remove_file(&archive_path).await?;
    tokio::fs::remove_file(&raw_path).await?;

    Ok(TitleDb::from_records(records))
}

/// Stream the archive to disk.
async fn download(url: &str, dest: &Path) -> Result<(), TitleDbError> {
    // No overall timeout: the archive runs to hundreds of megabytes.
    let client = Client::builder()
        .connect_timeout(Duration::from_secs(30))
        .build()?;

    let mut response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(TitleDbError::DownloadFailed {
            status: status.as_u16(),
        });
    }

    let mut file = tokio::fs::File::create(dest).await?;
    while let Some(chunk) = response.chunk().await? {
        file.write_all(&chunk).await?;
    }
    file.flush().await?;

    Ok(())
}

fn extract_gzip(src: &Path, dest: &Path) -> Result<(), TitleDbError> {
    let archive = std::fs::File::open(src)?;
    let mut decoder = GzDecoder::new(archive);
    let mut out = std::fs::File::create(dest)?;
    std::io::copy(&mut decoder, &mut out)?;
    Ok(())
}

/// Stream the tab-separated dataset, keeping only `movie` rows projected
/// down to the three columns the renamer needs.
fn filter_dataset<R: Read>(input: R) -> Result<Vec<TitleRecord>, TitleDbError> {
    // The dataset is unquoted TSV with a header row; some rows carry stray
    // quote characters, so quoting is disabled outright.
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .quoting(false)
        .flexible(true)
        .from_reader(input);

    let mut records = Vec::new();
    let mut row = csv::StringRecord::new();

    while reader.read_record(&mut row)? {
        if row.get(1) != Some("movie") {
            continue;
        }
        let (Some(id), Some(primary), Some(original)) = (row.get(0), row.get(2), row.get(3))
        else {
            continue;
        };

        records.push(TitleRecord {
            id: id.to_string(),
            primary_title: primary.to_string(),
            original_title: original.to_string(),
        });
    }

    Ok(records)
}

fn write_cache(path: &Path, records: &[TitleRecord]) -> Result<(), TitleDbError> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
