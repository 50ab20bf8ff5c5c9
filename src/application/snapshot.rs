//! Shared raw descriptor slot
//!
//! One publisher writes the raw descriptor of every applied fetch; any
//! number of readers observe the latest write. Each write bumps a version
//! so readers can tell whether anything changed since they last looked.

use std::sync::{Arc, PoisonError, RwLock};

use serde::Serialize;

use crate::domain::entities::MenuDescriptor;

use super::menu_fetch::FetchedMenu;

/// One published descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescriptorSnapshot {
    pub version: u64,
    pub product: String,
    pub package: Option<String>,
    pub descriptors: Vec<MenuDescriptor>,
}

#[derive(Debug, Default)]
struct Slot {
    version: u64,
    latest: Option<Arc<DescriptorSnapshot>>,
}

/// Create a connected publisher/reader pair over an empty slot
pub fn snapshot_channel() -> (SnapshotPublisher, SnapshotReader) {
    let slot = Arc::new(RwLock::new(Slot::default()));
    let reader = SnapshotReader {
        slot: Arc::clone(&slot),
    };
    (SnapshotPublisher { slot }, reader)
}

/// The single writer of the slot
#[derive(Debug)]
pub struct SnapshotPublisher {
    slot: Arc<RwLock<Slot>>,
}

impl SnapshotPublisher {
    /// Replace the slot contents and return the new version
    pub fn publish(&self, menu: &FetchedMenu) -> u64 {
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        slot.version += 1;
        slot.latest = Some(Arc::new(DescriptorSnapshot {
            version: slot.version,
            product: menu.product.clone(),
            package: menu.package.clone(),
            descriptors: menu.descriptors.clone(),
        }));
        slot.version
    }

    pub fn reader(&self) -> SnapshotReader {
        SnapshotReader {
            slot: Arc::clone(&self.slot),
        }
    }
}

/// Read handle on the slot
#[derive(Debug, Clone)]
pub struct SnapshotReader {
    slot: Arc<RwLock<Slot>>,
}

impl SnapshotReader {
    pub fn latest(&self) -> Option<Arc<DescriptorSnapshot>> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .latest
            .clone()
    }

    /// Number of writes so far
    pub fn version(&self) -> u64 {
        self.slot.read().unwrap_or_else(PoisonError::into_inner).version
    }

    pub fn changed_since(&self, version: u64) -> bool {
        self.version() > version
    }
}
