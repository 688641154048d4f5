//! Inventory model: ordered stackable entries, selection and current page.
//!
//! Selection and page are independent cursors. Selection walks the whole
//! entry list with wraparound; the page only decides which slice of entries
//! the layout engine places on screen.
use std::sync::Arc;

use crate::catalog::{ItemCatalog, ItemDefinition, ItemId};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    #[error("item id {0} is not in the catalog")]
    UnknownItem(ItemId),

    #[error("inventory capacity must be positive")]
    ZeroCapacity,

    #[error("inventory is full ({capacity} entries)")]
    Full { capacity: usize },

    #[error("entry index {index} is out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// One stack of a single item kind.
///
/// A count of zero is allowed and the entry is kept; nothing prunes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryEntry {
    pub item: ItemId,
    pub count: u64,
}

impl InventoryEntry {
    pub const fn new(item: ItemId, count: u64) -> Self {
        Self { item, count }
    }
}

/// `max(1, ceil(len / items_per_page))`. An `items_per_page` of zero counts as one.
pub fn total_pages(len: usize, items_per_page: usize) -> usize {
    len.div_ceil(items_per_page.max(1)).max(1)
}

#[derive(Clone, Debug)]
pub struct Inventory {
    catalog: Arc<ItemCatalog>,
    capacity: usize,
    entries: Vec<InventoryEntry>,
    selected: usize,
    page: usize,
}

impl Inventory {
    /// Builds an inventory whose entries must all name catalog items.
    ///
    /// The initial entry list may exceed `capacity`; capacity only limits
    /// [`Inventory::add`] from then on.
    pub fn new(
        catalog: Arc<ItemCatalog>,
        capacity: usize,
        entries: Vec<InventoryEntry>,
    ) -> Result<Self, InventoryError> {
        if capacity == 0 {
            return Err(InventoryError::ZeroCapacity);
        }
        if let Some(unknown) = entries.iter().find(|e| !catalog.contains(e.item)) {
            return Err(InventoryError::UnknownItem(unknown.item));
        }

        Ok(Self {
            catalog,
            capacity,
            entries,
            selected: 0,
            page: 0,
        })
    }

    pub fn empty(catalog: Arc<ItemCatalog>, capacity: usize) -> Self {
        Self {
            catalog,
            capacity,
            entries: Vec::new(),
            selected: 0,
            page: 0,
        }
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn entries(&self) -> &[InventoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, index: usize) -> Option<&InventoryEntry> {
        self.entries.get(index)
    }

    /// Resolves the catalog definition behind an entry.
    pub fn definition(&self, index: usize) -> Option<&ItemDefinition> {
        self.entries
            .get(index)
            .and_then(|entry| self.catalog.get(entry.item))
    }

    // ===== selection =====

    /// Selected entry index, `None` while the inventory is empty.
    pub fn selected_index(&self) -> Option<usize> {
        (!self.entries.is_empty()).then_some(self.selected)
    }

    /// Moves the selection forward, wrapping to the first entry.
    ///
    /// Returns `false` (and does nothing) when there are no entries.
    pub fn select_next(&mut self) -> bool {
        let len = self.entries.len();
        if len == 0 {
            return false;
        }
        self.selected = (self.selected + 1) % len;
        true
    }

    /// Moves the selection backward, wrapping to the last entry.
    pub fn select_prev(&mut self) -> bool {
        let len = self.entries.len();
        if len == 0 {
            return false;
        }
        self.selected = (self.selected + len - 1) % len;
        true
    }

    // ===== pagination =====

    pub fn current_page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self, items_per_page: usize) -> usize {
        total_pages(self.entries.len(), items_per_page)
    }

    /// Goes back one page; no-op on the first page.
    pub fn prev_page(&mut self) -> bool {
        if self.page == 0 {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Advances one page unless the next page would start at or beyond the
    /// last entry.
    pub fn next_page(&mut self, items_per_page: usize) -> bool {
        let end = (self.page + 1) * items_per_page.max(1);
        if end >= self.entries.len() {
            return false;
        }
        self.page += 1;
        true
    }

    /// Pulls the current page back into `[0, total_pages - 1]`.
    pub fn clamp_page(&mut self, items_per_page: usize) {
        let last = self.total_pages(items_per_page) - 1;
        self.page = self.page.min(last);
    }

    // ===== mutation =====

    /// Adds `count` of `item`, stacking onto an existing entry of the same
    /// item when there is one. Returns the index of the affected entry.
    pub fn add(&mut self, item: ItemId, count: u64) -> Result<usize, InventoryError> {
        if !self.catalog.contains(item) {
            return Err(InventoryError::UnknownItem(item));
        }

        if let Some(index) = self.entries.iter().position(|e| e.item == item) {
            let entry = &mut self.entries[index];
            entry.count = entry.count.saturating_add(count);
            return Ok(index);
        }

        if self.entries.len() >= self.capacity {
            return Err(InventoryError::Full {
                capacity: self.capacity,
            });
        }

        self.entries.push(InventoryEntry::new(item, count));
        Ok(self.entries.len() - 1)
    }

    pub fn set_count(&mut self, index: usize, count: u64) -> Result<(), InventoryError> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(InventoryError::IndexOutOfRange { index, len })?;
        entry.count = count;
        Ok(())
    }
}
