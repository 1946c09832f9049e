//! Rate limit for owner downloads.
//!
//! The time of the last download is stored as an RFC 3339 timestamp in
//! `owner-last-update`. A new download is allowed once
//! [`DOWNLOAD_TIMEOUT`] has passed.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::debug;

use crate::data::init_file;
use crate::error::{Result, StandardsError};

pub const TIMESTAMP_FILENAME: &str = "owner-last-update";

pub const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(5 * 60);

const INITIAL_TIMESTAMP: &str = "2018-10-29T15:00:00Z\n";

#[derive(Debug, Clone)]
pub struct TimestampGate {
    path: PathBuf,
    last_update: DateTime<Utc>,
}

impl TimestampGate {
    /// Read the timestamp file in `data_dir`, creating it if missing.
    pub fn open(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(TIMESTAMP_FILENAME);
        init_file(&path, INITIAL_TIMESTAMP)?;
        let content = fs::read_to_string(&path).map_err(|source| StandardsError::io(&path, source))?;
        let last_update = DateTime::parse_from_rfc3339(content.trim())
            .map_err(|err| StandardsError::Timestamp {
                path: path.clone(),
                message: err.to_string(),
            })?
            .with_timezone(&Utc);
        Ok(Self { path, last_update })
    }

    pub fn last_update(&self) -> DateTime<Utc> {
        self.last_update
    }

    /// Record `now` as the last update if the timeout has passed.
    pub fn try_update(&mut self, now: DateTime<Utc>) -> Result<()> {
        let elapsed = (now - self.last_update).num_seconds();
        let timeout = DOWNLOAD_TIMEOUT.as_secs() as i64;
        if elapsed <= timeout {
            return Err(StandardsError::RateLimited {
                retry_in: (timeout - elapsed).max(0) as u64,
            });
        }
        let content = format!("{}\n", now.to_rfc3339_opts(SecondsFormat::Secs, true));
        fs::write(&self.path, content).map_err(|source| StandardsError::io(&self.path, source))?;
        debug!(path = %self.path.display(), %now, "updated download timestamp");
        self.last_update = now;
        Ok(())
    }
}
