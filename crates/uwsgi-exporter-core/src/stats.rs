//! uWSGI stats server wire model.
//!
//! Only the fields the exporter reads are modelled. The stats server emits
//! many more (`pid`, `requests`, `cores`, ...) and they are ignored, so no
//! `deny_unknown_fields` here.

use serde::Deserialize;

use crate::error::{Result, ScrapeFailure};

/// Worker status as reported by the stats server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum WorkerStatus {
    Busy,
    Idle,
    /// Anything else (`cheap`, `pause`, `sig<N>`, ...).
    Other(String),
}

impl From<String> for WorkerStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "busy" => WorkerStatus::Busy,
            "idle" => WorkerStatus::Idle,
            _ => WorkerStatus::Other(s),
        }
    }
}

impl WorkerStatus {
    pub fn is_busy(&self) -> bool {
        matches!(self, WorkerStatus::Busy)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkerRecord {
    pub status: WorkerStatus,
}

/// One fetch worth of workers. Fetched fresh every tick.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkerSnapshot {
    pub workers: Vec<WorkerRecord>,
}

impl WorkerSnapshot {
    /// Decode a stats document. A missing `workers` array or a worker without
    /// `status` is malformed.
    pub fn from_json(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|e| ScrapeFailure::Malformed(e.to_string()).into())
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }
}
