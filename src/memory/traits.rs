// Mon Feb 02 2026 - Alex

use crate::memory::{Address, MemoryError};

/// Read access to one contiguous region of memory. Implementations hand
/// out borrowed windows so scans run without copying the region.
pub trait MemoryReader: Send + Sync {
    /// Base address of the readable region.
    fn base(&self) -> Address;

    /// Readable size in bytes.
    fn size(&self) -> usize;

    /// Borrow `len` bytes starting at `addr`.
    fn view(&self, addr: Address, len: usize) -> Result<&[u8], MemoryError>;

    fn read_u8(&self, addr: Address) -> Result<u8, MemoryError> {
        Ok(self.view(addr, 1)?[0])
    }

    fn read_u32(&self, addr: Address) -> Result<u32, MemoryError> {
        let bytes = self.view(addr, 4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn read_u64(&self, addr: Address) -> Result<u64, MemoryError> {
        let bytes = self.view(addr, 8)?;
        let mut buf = [0u8; 8];
        buf.copy_from_slice(bytes);
        Ok(u64::from_le_bytes(buf))
    }

    fn read_ptr(&self, addr: Address) -> Result<Address, MemoryError> {
        Ok(Address::new(self.read_u64(addr)?))
    }
}
