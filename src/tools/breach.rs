// src/tools/breach.rs
use std::time::Duration;

use thiserror::Error;

use crate::crypto;
use crate::models::BreachResult;

/// Default endpoint for k-anonymity range lookups.
pub const DEFAULT_ENDPOINT: &str = "https://api.pwnedpasswords.com";

const PREFIX_LEN: usize = 5;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Range service returned status {0}")]
    Status(u16),
}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            LookupError::Timeout(e.to_string())
        } else if let Some(status) = e.status() {
            LookupError::Status(status.as_u16())
        } else {
            LookupError::Transport(e.to_string())
        }
    }
}

/// External service answering hash-prefix range queries.
///
/// Implementations return the raw response body: `SUFFIX:COUNT` records
/// separated by newlines.
pub trait RangeLookup {
    fn range(&self, prefix: &str) -> Result<String, LookupError>;
}

pub struct PwnedRangeClient {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl PwnedRangeClient {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, LookupError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("passengen/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            client,
        })
    }
}

impl RangeLookup for PwnedRangeClient {
    fn range(&self, prefix: &str) -> Result<String, LookupError> {
        let url = format!("{}/range/{}", self.endpoint, prefix);
        log::debug!("Range lookup {}", url);

        let res = self.client.get(&url).send()?;
        let status = res.status();
        log::debug!("Range lookup response status {}", status);
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        Ok(res.text()?)
    }
}

/// SHA-1 of a candidate split into the prefix sent to the service and the
/// suffix that never leaves the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashRange {
    pub prefix: String,
    pub suffix: String,
}

impl HashRange {
    pub fn of(candidate: &str) -> Self {
        let digest = crypto::sha1_hex_upper(candidate.as_bytes());
        let (prefix, suffix) = digest.split_at(PREFIX_LEN);
        Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        }
    }
}

// Find our suffix in a range response and return its occurrence count
fn find_suffix(body: &str, suffix: &str) -> Option<u64> {
    body.lines().find_map(|line| {
        let (candidate, count) = line.trim().split_once(':')?;
        if candidate.trim().eq_ignore_ascii_case(suffix) {
            Some(count.trim().parse().unwrap_or(0))
        } else {
            None
        }
    })
}

/// Look up a candidate password without revealing its full hash.
///
/// Lookup failures come back as [`BreachResult::LookupFailed`]: the
/// candidate could not be verified, which is not the same as clean.
pub fn check_breach(candidate: &str, lookup: &dyn RangeLookup) -> BreachResult {
    let range = HashRange::of(candidate);

    match lookup.range(&range.prefix) {
        Ok(body) => match find_suffix(&body, &range.suffix) {
            Some(count) => BreachResult::Found { count },
            None => BreachResult::NotFound,
        },
        Err(e) => {
            log::warn!("Breach lookup failed for prefix {}: {}", range.prefix, e);
            BreachResult::LookupFailed {
                reason: e.to_string(),
            }
        }
    }
}
