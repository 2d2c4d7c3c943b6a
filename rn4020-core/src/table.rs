//! Characteristic handle lookup table
//!
//! Rebuilt from `LS` output on every refresh. The module assigns handles
//! when services are declared, so they stay valid until the next refresh.

use heapless::Vec;
use rn4020_protocol::{HandleEntry, Uuid, UUID128_LEN};

use crate::error::ProtocolError;

/// Table capacity used when none is specified
pub const DEFAULT_TABLE_CAPACITY: usize = 20;

/// One characteristic handle and the UUID it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HandleLookupItem {
    /// Handle assigned by the module
    pub handle: u16,
    /// Characteristic UUID, 2 or 16 bytes
    pub uuid: Uuid,
    /// Property bits reported alongside the handle, if any
    pub properties: Option<u8>,
}

impl HandleLookupItem {
    /// True only for a 16-bit UUID equal to `uuid`
    pub fn matches_uuid16(&self, uuid: u16) -> bool {
        self.uuid.is_uuid16(uuid)
    }

    /// True only for a 128-bit UUID with all bytes equal to `uuid`
    pub fn matches_uuid128(&self, uuid: &[u8; UUID128_LEN]) -> bool {
        self.uuid.is_uuid128(uuid)
    }
}

impl From<HandleEntry> for HandleLookupItem {
    fn from(entry: HandleEntry) -> Self {
        Self {
            handle: entry.handle,
            uuid: entry.uuid,
            properties: entry.properties,
        }
    }
}

/// Bounded table of handle lookup items, in reporting order
#[derive(Debug, Clone)]
pub struct HandleTable<const N: usize = DEFAULT_TABLE_CAPACITY> {
    items: Vec<HandleLookupItem, N>,
}

impl<const N: usize> Default for HandleTable<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> HandleTable<N> {
    /// Create an empty table
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Drop all items
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Append an item
    ///
    /// Fails without modifying the table when it is full or when the
    /// handle is already present.
    pub fn insert(&mut self, item: HandleLookupItem) -> Result<(), ProtocolError> {
        if self.lookup(item.handle).is_some() {
            return Err(ProtocolError::DuplicateHandle);
        }
        self.items
            .push(item)
            .map_err(|_| ProtocolError::TableOverflow)
    }

    /// Find the item for a handle
    pub fn lookup(&self, handle: u16) -> Option<&HandleLookupItem> {
        self.items.iter().find(|item| item.handle == handle)
    }

    /// Find the first item with a 16-bit UUID
    pub fn find_uuid16(&self, uuid: u16) -> Option<&HandleLookupItem> {
        self.items.iter().find(|item| item.matches_uuid16(uuid))
    }

    /// Find the first item with a 128-bit UUID
    pub fn find_uuid128(&self, uuid: &[u8; UUID128_LEN]) -> Option<&HandleLookupItem> {
        self.items.iter().find(|item| item.matches_uuid128(uuid))
    }

    /// Iterate items in reporting order
    pub fn iter(&self) -> impl Iterator<Item = &HandleLookupItem> {
        self.items.iter()
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Maximum number of items
    pub const fn capacity(&self) -> usize {
        N
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRIVATE: [u8; 16] = [0x11; 16];

    fn item(handle: u16, uuid: Uuid) -> HandleLookupItem {
        HandleLookupItem {
            handle,
            uuid,
            properties: None,
        }
    }

    #[test]
    fn test_lookup_by_handle() {
        let mut table = HandleTable::<4>::new();
        table.insert(item(0x0025, Uuid::Uuid16(0x2A19))).unwrap();
        table.insert(item(0x0027, Uuid::Uuid128(PRIVATE))).unwrap();

        let found = table.lookup(0x0027).unwrap();
        assert!(found.matches_uuid128(&PRIVATE));
        assert!(!found.matches_uuid16(0x1111));
        assert!(table.lookup(0x0099).is_none());
    }

    #[test]
    fn test_reverse_lookup() {
        let mut table = HandleTable::<4>::new();
        table.insert(item(0x000B, Uuid::Uuid16(0x2A19))).unwrap();
        table.insert(item(0x001B, Uuid::Uuid128(PRIVATE))).unwrap();

        assert_eq!(table.find_uuid16(0x2A19).map(|i| i.handle), Some(0x000B));
        assert_eq!(table.find_uuid128(&PRIVATE).map(|i| i.handle), Some(0x001B));
        assert!(table.find_uuid16(0x2A29).is_none());
    }

    #[test]
    fn test_overflow_is_reported_not_overrun() {
        let mut table = HandleTable::<2>::new();
        table.insert(item(1, Uuid::Uuid16(1))).unwrap();
        table.insert(item(2, Uuid::Uuid16(2))).unwrap();
        assert_eq!(
            table.insert(item(3, Uuid::Uuid16(3))),
            Err(ProtocolError::TableOverflow)
        );
        assert_eq!(table.len(), 2);
        assert_eq!(table.capacity(), 2);
    }

    #[test]
    fn test_duplicate_handle_rejected() {
        let mut table = HandleTable::<4>::new();
        table.insert(item(7, Uuid::Uuid16(0x2A19))).unwrap();
        assert_eq!(
            table.insert(item(7, Uuid::Uuid16(0x2A29))),
            Err(ProtocolError::DuplicateHandle)
        );
        assert!(table.lookup(7).unwrap().matches_uuid16(0x2A19));
    }

    #[test]
    fn test_empty_and_cleared_table_match_nothing() {
        let mut table: HandleTable = HandleTable::new();
        assert!(table.is_empty());
        assert!(table.lookup(0x0025).is_none());
        assert!(table.find_uuid16(0x2A19).is_none());

        table.insert(item(0x0025, Uuid::Uuid16(0x2A19))).unwrap();
        table.clear();
        assert!(table.lookup(0x0025).is_none());
        assert!(table.find_uuid16(0x2A19).is_none());
        assert!(table.find_uuid128(&PRIVATE).is_none());
        assert_eq!(table.iter().count(), 0);
    }
}
