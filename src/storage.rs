/// Best-effort contact message persistence.
///
/// Messages accumulate in a single flat JSON array on disk. Appending
/// rewrites the whole file; failures are reported to the caller, which
/// logs and drops them. A message can be accepted without ever being
/// durably stored.

use std::error::Error as StdError;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// chrono is built without its serde feature, so timestamps get an
// explicit RFC 3339 adapter.
pub(crate) mod datetime_format {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(dt: &DateTime<Utc>, ser: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        ser.serialize_str(&dt.to_rfc3339())
    }

    pub fn deserialize<'de, D>(deser: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deser)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

/// One accepted contact form submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    #[serde(with = "datetime_format")]
    pub timestamp: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub message: String,
    pub ip: String,
}

impl ContactMessage {
    pub fn new(name: String, email: String, message: String, ip: String) -> Self {
        Self {
            timestamp: Utc::now(),
            name,
            email,
            message,
            ip,
        }
    }
}

#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Serialization(serde_json::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "I/O error: {}", e),
            StorageError::Serialization(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl StdError for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err)
    }
}

/// Flat-file store holding a JSON array of contact messages.
pub struct MessageStore {
    path: PathBuf,
}

impl MessageStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Appends one message to the on-disk array, creating the file on
    /// first use. The existing file must parse as a JSON array or the
    /// append fails.
    pub fn append(&self, message: &ContactMessage) -> Result<(), StorageError> {
        let mut messages: Vec<serde_json::Value> = if self.path.exists() {
            serde_json::from_str(&fs::read_to_string(&self.path)?)?
        } else {
            Vec::new()
        };

        messages.push(serde_json::to_value(message)?);
        fs::write(&self.path, serde_json::to_string_pretty(&messages)?)?;

        Ok(())
    }
}
