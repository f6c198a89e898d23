// Mon Feb 02 2026 - Alex

use crate::memory::{Address, MemoryError, MemoryReader};
use crate::pattern::{scanner, Pattern};
use std::fmt;
use std::sync::Arc;

/// A contiguous memory region: base address plus size, with shared read
/// access to the underlying bytes. Read-only for the lifetime of a scan;
/// clones share the reader.
#[derive(Clone)]
pub struct MemoryRange {
    base: Address,
    size: usize,
    reader: Arc<dyn MemoryReader>,
}

impl MemoryRange {
    pub fn new(
        base: Address,
        size: usize,
        reader: Arc<dyn MemoryReader>,
    ) -> Result<Self, MemoryError> {
        if size == 0 {
            return Err(MemoryError::EmptyRegion);
        }
        Ok(Self { base, size, reader })
    }

    /// Range covering everything the reader exposes.
    pub fn from_reader(reader: Arc<dyn MemoryReader>) -> Result<Self, MemoryError> {
        let base = reader.base();
        let size = reader.size();
        Self::new(base, size, reader)
    }

    pub fn begin(&self) -> Address {
        self.base
    }

    pub fn end(&self) -> Address {
        self.base.add(self.size as u64)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Inclusive on both ends: one-past-the-end counts as contained.
    /// Longstanding boundary behavior, pinned by tests.
    pub fn contains(&self, addr: Address) -> bool {
        addr >= self.begin() && addr <= self.end()
    }

    /// First occurrence of `sig` in the region, as an address relative to
    /// `begin()`, or `None`. A reader failure degrades to no-match.
    pub fn scan(&self, sig: &Pattern) -> Option<Address> {
        let data = match self.reader.view(self.base, self.size) {
            Ok(data) => data,
            Err(e) => {
                log::warn!("Region read failed during scan: {}", e);
                return None;
            }
        };

        scanner::find_first(data, sig).map(|offset| Address::new(offset as u64))
    }
}

impl fmt::Debug for MemoryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryRange")
            .field("base", &self.base)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for MemoryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.begin(), self.end())
    }
}
