// ============================================================
// Layer 6 — Reading-Time Record Log
// ============================================================
// Writes the session's measurements to a CSV file, one row per
// word, in display order.
//
// Output file format:
//   Condition,IsWordOfInterest,Global Index,Sentence Index,Word Index,Word,RT(s)
//   a,false,3,2,1,The,0.412333
//   a,true,3,2,2,"cat,",0.601287
//
// Durability contract:
//   - the file is created/truncated and the header written the
//     moment the log is constructed, before the session starts
//   - every appended row is flushed immediately, so killing the
//     process mid-session loses nothing already acknowledged
//   - exactly one writer exists for the lifetime of the run and
//     the file is never read back
//
// The csv crate does the quoting: tokens keep their punctuation
// after whitespace-only tokenization, so a word (or a condition
// label) may itself contain a comma and must be quoted.
//
// Reference: Rust Book §12 (I/O and File Handling)
//            csv crate documentation

use anyhow::{Context, Result};
use std::{
    fs::File,
    path::{Path, PathBuf},
};

use crate::domain::record::WordRecord;
use crate::domain::traits::RecordSink;

/// The fixed header row, written once at creation
const HEADER: [&str; 7] = [
    "Condition",
    "IsWordOfInterest",
    "Global Index",
    "Sentence Index",
    "Word Index",
    "Word",
    "RT(s)",
];

/// Append-only CSV log of WordRecords.
pub struct RecordLog {
    writer: csv::Writer<File>,
    /// Where the log lives — kept for confirmation messages
    path: PathBuf,
}

impl RecordLog {
    /// Create (or truncate) the output file and write the header
    /// row immediately. Fails fast if the path can't be opened —
    /// better before the participant sits down than after.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let file = File::create(&path)
            .with_context(|| format!("failed to create output file '{}'", path.display()))?;

        // The header is written by hand rather than derived on
        // the first serialize, so even a session that records
        // nothing leaves a well-formed file behind
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.write_record(HEADER)?;
        writer.flush()?;

        tracing::debug!("Created record log '{}'", path.display());
        Ok(Self { writer, path })
    }

    /// Return the path of the log file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSink for RecordLog {
    /// Append one row and make it durable before returning.
    fn append(&mut self, record: &WordRecord) -> Result<()> {
        self.writer
            .serialize(record)
            .with_context(|| format!("failed to write record for word '{}'", record.word))?;
        // Flush per row: an aborted run keeps every acknowledged
        // word
        self.writer
            .flush()
            .with_context(|| format!("failed to flush record log '{}'", self.path.display()))?;
        Ok(())
    }
}
