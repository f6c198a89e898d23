// Mon Feb 02 2026 - Alex

use crate::memory::{Address, MemoryError, MemoryReader};
use std::slice;

/// Raw view over a region of the host process's own address space, as
/// reported by the module/region provider. All views are bounds-checked
/// against the region handed in at construction.
pub struct InProcessMemory {
    base: Address,
    size: usize,
}

impl InProcessMemory {
    /// # Safety
    /// The caller guarantees `base..base + size` is mapped and readable
    /// for the lifetime of the value.
    pub unsafe fn new(base: Address, size: usize) -> Result<Self, MemoryError> {
        if size == 0 {
            return Err(MemoryError::EmptyRegion);
        }
        Ok(Self { base, size })
    }
}

impl MemoryReader for InProcessMemory {
    fn base(&self) -> Address {
        self.base
    }

    fn size(&self) -> usize {
        self.size
    }

    fn view(&self, addr: Address, len: usize) -> Result<&[u8], MemoryError> {
        if addr < self.base {
            return Err(MemoryError::InvalidAddress(addr.as_u64()));
        }
        let offset = (addr - self.base) as usize;
        let end = offset
            .checked_add(len)
            .ok_or(MemoryError::OutOfBounds(addr.as_u64(), len))?;
        if end > self.size {
            return Err(MemoryError::OutOfBounds(addr.as_u64(), len));
        }
        Ok(unsafe { slice::from_raw_parts(addr.as_ptr(), len) })
    }
}
