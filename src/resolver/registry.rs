// Wed Feb 04 2026 - Alex

use crate::memory::Address;
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Process-lifetime name -> address table populated by batch callbacks.
/// Stored addresses are relative to the scanned region; `adjust` rebases
/// them against the module base captured at construction. Insertion is
/// safe from concurrent callbacks; each callback writes its own key.
pub struct AddressRegistry {
    module_base: Address,
    table: RwLock<HashMap<String, Address>>,
}

impl AddressRegistry {
    pub fn new(module_base: Address) -> Self {
        Self {
            module_base,
            table: RwLock::new(HashMap::new()),
        }
    }

    pub fn module_base(&self) -> Address {
        self.module_base
    }

    pub fn insert(&self, name: impl Into<String>, addr: Address) {
        self.table.write().insert(name.into(), addr);
    }

    /// Resolved address for `name`, or zero if it was never resolved.
    /// With `adjust`, the stored region-relative value is rebased onto the
    /// module base.
    pub fn get(&self, name: &str, adjust: bool) -> Address {
        let table = self.table.read();
        let Some(&addr) = table.get(name) else {
            return Address::zero();
        };

        if adjust {
            self.module_base.add(addr.as_u64())
        } else {
            addr
        }
    }

    /// As `get`, with `offset` applied on top. A missed base lookup stays
    /// zero rather than becoming a dangling offset.
    pub fn get_with_offset(&self, name: &str, offset: u64, adjust: bool) -> Address {
        let addr = self.get(name, adjust);
        if addr.is_null() {
            return Address::zero();
        }
        addr.add(offset)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table.read().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.table.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.read().is_empty()
    }
}

static INSTANCE: OnceCell<AddressRegistry> = OnceCell::new();

/// Install the process-wide registry. The first call wins; later calls
/// return the existing instance untouched.
pub fn init(module_base: Address) -> &'static AddressRegistry {
    INSTANCE.get_or_init(|| AddressRegistry::new(module_base))
}

/// The process-wide registry, if `init` has run.
pub fn global() -> Option<&'static AddressRegistry> {
    INSTANCE.get()
}
