//! Download of the owner registry.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Utc};
use icm_model::Owner;
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use tracing::{debug, info};

use crate::error::{Result, StandardsError};
use crate::owners::{parse_owners, write_owners_csv};
use crate::timestamp::TimestampGate;

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Provider of a complete owner list.
pub trait OwnerSource {
    fn fetch_owners(&self) -> Result<Vec<Owner>>;
}

/// Fetches owners in the registry CSV format from a URL.
#[derive(Debug)]
pub struct HttpOwnerSource {
    client: Client,
    url: String,
}

impl HttpOwnerSource {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| StandardsError::Download {
                url: url.clone(),
                message: err.to_string(),
            })?;
        Ok(Self { client, url })
    }

    fn download_error(&self, message: impl ToString) -> StandardsError {
        StandardsError::Download {
            url: self.url.clone(),
            message: message.to_string(),
        }
    }
}

impl OwnerSource for HttpOwnerSource {
    fn fetch_owners(&self) -> Result<Vec<Owner>> {
        debug!(url = %self.url, "downloading owners");
        let response = self
            .client
            .get(&self.url)
            .header(USER_AGENT, concat!("icm/", env!("CARGO_PKG_VERSION")))
            .send()
            .map_err(|err| self.download_error(err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.download_error(format!("HTTP status {}", status.as_u16())));
        }
        let body = response.text().map_err(|err| self.download_error(err))?;
        parse_owners(body.as_bytes(), Path::new(&self.url))
    }
}

/// Download owners and overwrite `output` with them.
///
/// The timestamp gate is checked and advanced before anything is fetched.
pub fn update_owner_file(
    source: &dyn OwnerSource,
    gate: &mut TimestampGate,
    now: DateTime<Utc>,
    output: &Path,
) -> Result<usize> {
    gate.try_update(now)?;
    let owners = source.fetch_owners()?;
    let file = File::create(output).map_err(|err| StandardsError::io(output, err))?;
    write_owners_csv(&owners, BufWriter::new(file), output)?;
    info!(path = %output.display(), count = owners.len(), "wrote owners");
    Ok(owners.len())
}
