//! Process-wide memory allocation ledger
//!
//! The append-only record of simulated memory leaks. Buffers accumulate
//! for the lifetime of the process and are never released; unbounded
//! growth across requests is the simulated defect, bounded per request by
//! the 100 MB parameter cap.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

/// Fill byte for leaked buffers
///
/// Writing a non-zero pattern forces the pages to be touched instead of
/// staying lazily zero-mapped.
const FILL_BYTE: u8 = b' ';

/// Shared append-only sequence of leaked byte buffers
///
/// Cloning shares the same underlying ledger. Appends are serialized by a
/// mutex held only for the push, so the reported length is always
/// consistent with the set of completed appends; concurrent appends may
/// interleave in any order but none is lost or duplicated.
#[derive(Clone, Default)]
pub struct MemoryLedger {
    blocks: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl MemoryLedger {
    /// Create an empty ledger
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one buffer of exactly `bytes` bytes, returning the ledger's
    /// new length
    ///
    /// The buffer is allocated and filled outside the critical section;
    /// the lock covers only the push.
    pub fn append(&self, bytes: usize) -> usize {
        let block = vec![FILL_BYTE; bytes];
        let mut blocks = self.blocks.lock();
        blocks.push(block);
        blocks.len()
    }

    /// Number of buffers appended so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.lock().len()
    }

    /// Whether nothing has been appended yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.lock().is_empty()
    }

    /// Total bytes held across all buffers
    #[must_use]
    pub fn total_bytes(&self) -> usize {
        self.blocks.lock().iter().map(Vec::len).sum()
    }
}

impl fmt::Debug for MemoryLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let blocks = self.blocks.lock();
        f.debug_struct("MemoryLedger")
            .field("allocations", &blocks.len())
            .field("total_bytes", &blocks.iter().map(Vec::len).sum::<usize>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let ledger = MemoryLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
        assert_eq!(ledger.total_bytes(), 0);
    }

    #[test]
    fn append_returns_new_length() {
        let ledger = MemoryLedger::new();
        assert_eq!(ledger.append(10), 1);
        assert_eq!(ledger.append(20), 2);
        assert_eq!(ledger.append(0), 3);
    }

    #[test]
    fn total_bytes_sums_declared_sizes() {
        let ledger = MemoryLedger::new();
        ledger.append(1000);
        ledger.append(500);
        assert_eq!(ledger.total_bytes(), 1500);
    }

    #[test]
    fn zero_byte_append_still_counts() {
        let ledger = MemoryLedger::new();
        assert_eq!(ledger.append(0), 1);
        assert_eq!(ledger.total_bytes(), 0);
    }

    #[test]
    fn clones_share_the_same_ledger() {
        let ledger = MemoryLedger::new();
        let shared = ledger.clone();
        ledger.append(100);
        shared.append(200);
        assert_eq!(ledger.len(), 2);
        assert_eq!(shared.total_bytes(), 300);
    }

    #[test]
    fn concurrent_appends_lose_nothing() {
        let ledger = MemoryLedger::new();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let ledger = ledger.clone();
                std::thread::spawn(move || {
                    for _ in 0..50 {
                        ledger.append(10);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(ledger.len(), 400);
        assert_eq!(ledger.total_bytes(), 4000);
    }

    #[test]
    fn debug_reports_counts_not_contents() {
        let ledger = MemoryLedger::new();
        ledger.append(64);
        let debug = format!("{ledger:?}");
        assert!(debug.contains("allocations: 1"));
        assert!(debug.contains("total_bytes: 64"));
    }
}
