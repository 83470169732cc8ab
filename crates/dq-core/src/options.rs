//! Session options
//!
//! Tunables for one exploration session. Everything here has a sensible
//! default; the binary overrides fields from the command line.

use serde::{Deserialize, Serialize};

/// Default capacity of the path record
pub const DEFAULT_PATH_CAPACITY: usize = 128;

/// Default number of suspect index buckets
pub const DEFAULT_SUSPECT_BUCKETS: usize = 31;

/// Per-session configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionOptions {
    /// Maximum number of rooms kept in the path record
    pub path_capacity: usize,

    /// Number of buckets in the suspect index (clamped to at least 1)
    pub suspect_buckets: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            path_capacity: DEFAULT_PATH_CAPACITY,
            suspect_buckets: DEFAULT_SUSPECT_BUCKETS,
        }
    }
}

impl SessionOptions {
    pub fn with_path_capacity(mut self, capacity: usize) -> Self {
        self.path_capacity = capacity;
        self
    }

    pub fn with_suspect_buckets(mut self, buckets: usize) -> Self {
        self.suspect_buckets = buckets;
        self
    }

    /// Bucket count actually used by the suspect index
    pub fn effective_buckets(&self) -> usize {
        self.suspect_buckets.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = SessionOptions::default();
        assert_eq!(opts.path_capacity, 128);
        assert_eq!(opts.suspect_buckets, 31);
    }

    #[test]
    fn test_zero_buckets_clamped() {
        let opts = SessionOptions::default().with_suspect_buckets(0);
        assert_eq!(opts.effective_buckets(), 1);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let opts: SessionOptions = serde_json::from_str(r#"{"path_capacity": 4}"#).unwrap();
        assert_eq!(opts.path_capacity, 4);
        assert_eq!(opts.suspect_buckets, DEFAULT_SUSPECT_BUCKETS);
    }
}
