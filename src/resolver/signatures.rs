// Wed Feb 04 2026 - Alex

use crate::config::ScanConfig;
use crate::engine::{BatchScheduler, EngineError};
use crate::memory::MemoryRange;
use crate::pattern::Pattern;
use crate::resolver::AddressRegistry;
use std::sync::Arc;

/// Build-time registration row: a named signature and the offset into the
/// match at which the interesting address lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureDef {
    pub name: &'static str,
    pub pattern: &'static str,
    pub offset: u64,
}

impl SignatureDef {
    pub const fn new(name: &'static str, pattern: &'static str, offset: u64) -> Self {
        Self {
            name,
            pattern,
            offset,
        }
    }
}

/// Resolve every def against `range` in one batch run, recording each hit
/// in `registry` under the def's name with the def's offset applied.
/// A def whose signature fails to parse is skipped; a def that never
/// matches leaves no registry entry. Returns the resolved count.
pub fn resolve_signatures(
    defs: &[SignatureDef],
    range: MemoryRange,
    registry: Arc<AddressRegistry>,
    config: &ScanConfig,
) -> Result<usize, EngineError> {
    let scheduler = BatchScheduler::with_config(config);

    for def in defs {
        let pattern = match Pattern::parse(def.pattern) {
            Ok(pattern) => pattern,
            Err(e) => {
                log::warn!("Skipping signature '{}': {}", def.name, e);
                continue;
            }
        };

        let registry = registry.clone();
        let name = def.name;
        let offset = def.offset;
        scheduler.add(name, pattern, move |handle| {
            registry.insert(name, handle.add(offset));
        })?;
    }

    scheduler.run(range)
}
