//! Expansion state of a menu tree.
//!
//! One top-level slot plus one nested slot per parent index path. Each slot
//! holds at most one open child, so single-open holds at every depth.
//!
//! Nested slots opened by the user are pinned: they survive the collapse of
//! an ancestor and show again when that ancestor reopens. Slots set while
//! following the current location are unpinned and are released on
//! collapse. Opening a different top-level entry clears every slot under
//! the other top-level entries, pinned or not.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::value_objects::Expansion;

/// Open child of one parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NestedSlot {
    pub index: usize,
    /// Opened by a user toggle rather than by location sync
    pub pinned: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    top: Expansion,
    /// Keyed by the index path of the parent node
    nested: BTreeMap<Vec<usize>, NestedSlot>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn top(&self) -> Expansion {
        self.top
    }

    /// Open child under `parent`, whether or not `parent` itself is visible
    pub fn nested(&self, parent: &[usize]) -> Expansion {
        Expansion::from_index(self.nested.get(parent).map(|slot| slot.index))
    }

    pub fn is_pinned(&self, parent: &[usize]) -> bool {
        self.nested.get(parent).is_some_and(|slot| slot.pinned)
    }

    pub fn slots(&self) -> impl Iterator<Item = (&[usize], NestedSlot)> + '_ {
        self.nested
            .iter()
            .map(|(parent, slot)| (parent.as_slice(), *slot))
    }

    /// Whether the node at `path` shows its children: every slot along the
    /// path must point at the next index.
    pub fn is_expanded(&self, path: &[usize]) -> bool {
        let Some((&first, rest)) = path.split_first() else {
            return false;
        };
        if !self.top.is_open_at(first) {
            return false;
        }
        let mut parent = vec![first];
        for &idx in rest {
            if !self.nested(&parent).is_open_at(idx) {
                return false;
            }
            parent.push(idx);
        }
        true
    }

    /// User toggle on a top-level entry
    pub fn toggle_top(&mut self, index: usize) {
        if self.top.is_open_at(index) {
            self.top = Expansion::Closed;
            self.release_unpinned(&[index]);
        } else {
            self.top = Expansion::OpenAt(index);
            self.nested.retain(|parent, _| parent.first() == Some(&index));
        }
    }

    /// User toggle on child `index` of the node at `parent`.
    ///
    /// An empty `parent` addresses the top level. Toggles under a parent
    /// that is not expanded are ignored.
    pub fn toggle_nested(&mut self, parent: &[usize], index: usize) {
        if parent.is_empty() {
            self.toggle_top(index);
            return;
        }
        if !self.is_expanded(parent) {
            return;
        }

        match self.nested(parent).toggled(index) {
            Expansion::Closed => {
                self.nested.remove(parent);
                self.release_unpinned(&child_path(parent, index));
            }
            Expansion::OpenAt(open) => {
                if let Some(previous) = self.nested.get(parent).map(|slot| slot.index) {
                    self.release_unpinned(&child_path(parent, previous));
                }
                self.nested.insert(
                    parent.to_vec(),
                    NestedSlot {
                        index: open,
                        pinned: true,
                    },
                );
            }
        }
    }

    /// Force the state to show the active chain (top index, then one child
    /// index per level). An empty chain leaves the state untouched.
    pub fn sync_to(&mut self, chain: &[usize]) {
        let Some(&top) = chain.first() else {
            return;
        };

        self.top = Expansion::OpenAt(top);
        self.nested.retain(|parent, _| parent.first() == Some(&top));

        for depth in 1..=chain.len() {
            let parent = &chain[..depth];
            match chain.get(depth) {
                Some(&idx) => {
                    let pinned = self
                        .nested
                        .get(parent)
                        .is_some_and(|slot| slot.pinned && slot.index == idx);
                    self.release_siblings(parent, idx);
                    self.nested
                        .insert(parent.to_vec(), NestedSlot { index: idx, pinned });
                }
                None => {
                    if !self.is_pinned(parent) {
                        self.nested.remove(parent);
                    }
                }
            }
        }
    }

    pub fn reset(&mut self) {
        self.top = Expansion::Closed;
        self.nested.clear();
    }

    /// Drop unpinned slots at or below `prefix`
    fn release_unpinned(&mut self, prefix: &[usize]) {
        self.nested
            .retain(|parent, slot| slot.pinned || !parent.starts_with(prefix));
    }

    /// Drop unpinned slots below children of `parent` other than `keep`
    fn release_siblings(&mut self, parent: &[usize], keep: usize) {
        let depth = parent.len();
        self.nested.retain(|key, slot| {
            slot.pinned || key.len() <= depth || !key.starts_with(parent) || key[depth] == keep
        });
    }
}

fn child_path(parent: &[usize], index: usize) -> Vec<usize> {
    let mut path = parent.to_vec();
    path.push(index);
    path
}
