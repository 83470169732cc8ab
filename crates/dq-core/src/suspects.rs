//! Suspect index: which clues point at whom
//!
//! A fixed-size hash table with chained buckets. Each suspect appears in
//! exactly one bucket and keeps the distinct clue names attributed to
//! it; the number of those clues is the suspect's citation count.

use std::collections::TryReserveError;

use serde::Serialize;

use crate::error::IndexError;

/// A suspect and the clues attributed to them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuspectEntry {
    pub name: String,
    /// Distinct clue names, in the order they were first attributed
    pub clues: Vec<String>,
}

impl SuspectEntry {
    pub fn citations(&self) -> usize {
        self.clues.len()
    }
}

/// What [`SuspectIndex::associate`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Association {
    /// Clue or suspect name was empty
    Ignored,
    /// First clue for a suspect not seen before
    NewSuspect,
    /// Known suspect, clue not yet attributed to them
    NewClue,
    /// This pair was already recorded
    Duplicate,
}

/// Hash table from suspect name to [`SuspectEntry`]
#[derive(Debug, Clone)]
pub struct SuspectIndex {
    buckets: Vec<Vec<SuspectEntry>>,

    /// Next `associate` fails as if allocation had failed
    #[cfg(test)]
    fail_next: bool,
}

impl SuspectIndex {
    /// Create an index with `buckets` chains (at least one)
    pub fn new(buckets: usize) -> Self {
        Self {
            buckets: vec![Vec::new(); buckets.max(1)],
            #[cfg(test)]
            fail_next: false,
        }
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Bucket that holds `name`
    pub fn bucket_of(&self, name: &str) -> usize {
        let hash = name
            .bytes()
            .fold(0u64, |h, b| h.wrapping_mul(31).wrapping_add(u64::from(b)));
        (hash % self.buckets.len() as u64) as usize
    }

    /// Number of suspects
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    pub fn get(&self, name: &str) -> Option<&SuspectEntry> {
        self.buckets[self.bucket_of(name)]
            .iter()
            .find(|entry| entry.name == name)
    }

    /// Citation count of `name`, zero if unknown
    pub fn citation_count(&self, name: &str) -> usize {
        self.get(name).map_or(0, SuspectEntry::citations)
    }

    /// Attribute `clue` to `suspect`
    ///
    /// Repeating a pair never grows the suspect's clue set. Memory is
    /// reserved before anything is written, so an error leaves the index
    /// unchanged.
    pub fn associate(&mut self, clue: &str, suspect: &str) -> Result<Association, IndexError> {
        if clue.is_empty() || suspect.is_empty() {
            return Ok(Association::Ignored);
        }
        let oom = |source| IndexError::OutOfMemory {
            clue: clue.to_string(),
            suspect: suspect.to_string(),
            source,
        };

        if let Some(source) = self.injected_failure() {
            return Err(oom(source));
        }

        let bucket_index = self.bucket_of(suspect);
        let bucket = &mut self.buckets[bucket_index];
        match bucket.iter_mut().find(|entry| entry.name == suspect) {
            Some(entry) => {
                if entry.clues.iter().any(|c| c == clue) {
                    return Ok(Association::Duplicate);
                }
                entry.clues.try_reserve(1).map_err(oom)?;
                entry.clues.push(clue.to_string());
                Ok(Association::NewClue)
            }
            None => {
                let mut clues = Vec::new();
                clues.try_reserve_exact(1).map_err(oom)?;
                clues.push(clue.to_string());
                bucket.try_reserve(1).map_err(oom)?;
                bucket.push(SuspectEntry {
                    name: suspect.to_string(),
                    clues,
                });
                Ok(Association::NewSuspect)
            }
        }
    }

    /// Every entry, bucket by bucket then in chain order
    pub fn iter(&self) -> impl Iterator<Item = &SuspectEntry> + '_ {
        self.buckets.iter().flatten()
    }

    /// Snapshot of every entry in enumeration order
    pub fn list_all(&self) -> Vec<SuspectEntry> {
        self.iter().cloned().collect()
    }

    /// Suspects with the highest citation count, ties included
    ///
    /// Empty when no suspect has at least one clue.
    pub fn most_cited(&self) -> Vec<String> {
        let max = self.iter().map(SuspectEntry::citations).max().unwrap_or(0);
        if max == 0 {
            return Vec::new();
        }
        self.iter()
            .filter(|entry| entry.citations() == max)
            .map(|entry| entry.name.clone())
            .collect()
    }

    /// Release every entry; returns how many suspects were released
    pub fn teardown(mut self) -> usize {
        self.buckets.iter_mut().map(|bucket| bucket.drain(..).count()).sum()
    }

    #[cfg(test)]
    pub(crate) fn fail_next_associate(&mut self) {
        self.fail_next = true;
    }

    #[cfg(test)]
    fn injected_failure(&mut self) -> Option<TryReserveError> {
        if !std::mem::take(&mut self.fail_next) {
            return None;
        }
        Vec::<u8>::new().try_reserve(usize::MAX).err()
    }

    #[cfg(not(test))]
    fn injected_failure(&mut self) -> Option<TryReserveError> {
        None
    }

    #[cfg(test)]
    fn insert_empty(&mut self, name: &str) {
        let b = self.bucket_of(name);
        self.buckets[b].push(SuspectEntry {
            name: name.to_string(),
            clues: Vec::new(),
        });
    }
}

impl Default for SuspectIndex {
    fn default() -> Self {
        Self::new(crate::options::DEFAULT_SUSPECT_BUCKETS)
    }
}
