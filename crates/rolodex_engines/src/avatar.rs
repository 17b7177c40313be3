#![forbid(unsafe_code)]

use std::io::Read;
use std::time::Duration;

pub const DEFAULT_FETCH_TIMEOUT_MS: u32 = 10_000;

// Upper bound on the in-memory body read.
const MAX_AVATAR_BYTES: u64 = 8 * 1024 * 1024;

#[derive(Debug)]
pub enum FetchError {
    InvalidReference(String),
    Status(u16),
    Transport(String),
    Read(std::io::Error),
    TooLarge(u64),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidReference(reference) => write!(f, "invalid avatar reference: {reference}"),
            Self::Status(code) => write!(f, "avatar fetch returned status {code}"),
            Self::Transport(err) => write!(f, "avatar fetch transport failure: {err}"),
            Self::Read(err) => write!(f, "avatar body read failed: {err}"),
            Self::TooLarge(limit) => write!(f, "avatar body exceeds {limit} byte limit"),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<std::io::Error> for FetchError {
    fn from(value: std::io::Error) -> Self {
        Self::Read(value)
    }
}

/// Fetches the caller-supplied avatar reference and reads it fully into
/// memory. The read is time-bounded; the reference must be an http(s) URL.
pub fn fetch_avatar(reference: &str, timeout_ms: u32) -> Result<Vec<u8>, FetchError> {
    let parsed = url::Url::parse(reference)
        .map_err(|_| FetchError::InvalidReference(reference.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(FetchError::InvalidReference(reference.to_string()));
    }

    let timeout = Duration::from_millis(u64::from(timeout_ms).max(100));
    let agent = ureq::AgentBuilder::new()
        .timeout_connect(timeout)
        .timeout_read(timeout)
        .timeout_write(timeout)
        .build();

    let response = match agent.get(parsed.as_str()).call() {
        Ok(response) => response,
        Err(ureq::Error::Status(code, _)) => return Err(FetchError::Status(code)),
        Err(ureq::Error::Transport(transport)) => {
            return Err(FetchError::Transport(transport.to_string()))
        }
    };

    // Read one byte past the cap so an oversized body fails instead of
    // coming back shortened.
    let mut body = Vec::new();
    response
        .into_reader()
        .take(MAX_AVATAR_BYTES + 1)
        .read_to_end(&mut body)?;
    if body.len() as u64 > MAX_AVATAR_BYTES {
        return Err(FetchError::TooLarge(MAX_AVATAR_BYTES));
    }
    Ok(body)
}
