// Mon Feb 02 2026 - Alex

use crate::memory::{Address, MemoryError, MemoryReader};

/// Owned byte buffer presented at a synthetic base address. Backs offline
/// scans over dumped regions and every test in the crate.
pub struct BufferMemory {
    data: Vec<u8>,
    base: Address,
}

impl BufferMemory {
    pub fn new(base: Address, data: Vec<u8>) -> Self {
        Self { data, base }
    }

    pub fn from_slice(base: Address, data: &[u8]) -> Self {
        Self::new(base, data.to_vec())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl MemoryReader for BufferMemory {
    fn base(&self) -> Address {
        self.base
    }

    fn size(&self) -> usize {
        self.data.len()
    }

    fn view(&self, addr: Address, len: usize) -> Result<&[u8], MemoryError> {
        if addr < self.base {
            return Err(MemoryError::InvalidAddress(addr.as_u64()));
        }
        let offset = (addr - self.base) as usize;
        let end = offset
            .checked_add(len)
            .ok_or(MemoryError::OutOfBounds(addr.as_u64(), len))?;
        if end > self.data.len() {
            return Err(MemoryError::OutOfBounds(addr.as_u64(), len));
        }
        Ok(&self.data[offset..end])
    }
}
