//! JSONL persistence for the conversation log

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, warn};

use super::log::ConversationLog;
use crate::models::Turn;

/// Maximum history file size (10MB)
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Conversation history stored as one JSON turn per line
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole log. A missing file is an empty conversation.
    pub fn load(&self) -> Result<ConversationLog> {
        if !self.path.exists() {
            return Ok(ConversationLog::new());
        }

        // Open once and validate size on the same handle
        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open history file: {}", self.path.display()))?;
        validate_file_size(&file, &self.path)?;

        let reader = BufReader::new(file);
        let mut turns = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.context("Failed to read line from history file")?;
            if line.trim().is_empty() {
                continue;
            }

            let turn: Turn = serde_json::from_str(&line).with_context(|| {
                format!(
                    "Malformed turn on line {} of history file: {}",
                    line_num + 1,
                    self.path.display()
                )
            })?;
            turns.push(turn);
        }

        debug!(path = %self.path.display(), turns = turns.len(), "loaded conversation history");
        Ok(ConversationLog::from_turns(turns))
    }

    /// Append turns as one unit. A failed write truncates the file back to its prior length.
    pub fn append(&self, turns: &[Turn]) -> Result<()> {
        if turns.is_empty() {
            return Ok(());
        }

        let mut payload = String::new();
        for turn in turns {
            payload.push_str(&serde_json::to_string(turn).context("Failed to serialize turn")?);
            payload.push('\n');
        }

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create history directory: {}", parent.display())
            })?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open history file: {}", self.path.display()))?;
        append_or_rollback(&mut file, payload.as_bytes())
            .with_context(|| format!("Failed to write history file: {}", self.path.display()))
    }
}

/// Append target that can be cut back to an earlier length
trait RollbackTarget: Write {
    fn current_len(&self) -> io::Result<u64>;
    fn truncate_to(&mut self, len: u64) -> io::Result<()>;
    fn sync(&mut self) -> io::Result<()>;
}

impl RollbackTarget for File {
    fn current_len(&self) -> io::Result<u64> {
        Ok(self.metadata()?.len())
    }

    fn truncate_to(&mut self, len: u64) -> io::Result<()> {
        self.set_len(len)
    }

    fn sync(&mut self) -> io::Result<()> {
        self.sync_data()
    }
}

/// Write all of `payload` or none of it: a partial line would make the next load fail
fn append_or_rollback<T: RollbackTarget>(target: &mut T, payload: &[u8]) -> Result<()> {
    let original_len = target.current_len().context("Failed to read history file length")?;

    let result = target.write_all(payload).and_then(|()| target.sync());
    if let Err(e) = result {
        warn!(error = %e, original_len, "history write failed, rolling back");
        target.truncate_to(original_len).with_context(|| {
            format!("Failed to roll back history file to {} bytes after: {}", original_len, e)
        })?;
        return Err(e).context("Failed to append exchange");
    }

    Ok(())
}

/// Validate file size to prevent loading an unbounded log into memory
fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > MAX_FILE_SIZE_BYTES {
        bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_FILE_SIZE_BYTES
        );
    }

    Ok(())
}
