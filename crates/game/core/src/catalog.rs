//! Immutable item catalog.
//!
//! The catalog is built once from a list of definitions and then shared
//! read-only (usually behind an `Arc`). Inventories refer to definitions by
//! [`ItemId`] and resolve them here, so image handles are never duplicated.
use std::collections::BTreeMap;

/// Catalog key of an item definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemId(pub u32);

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque reference to an image owned by the rendering backend.
///
/// The core never inspects the value; it only passes it back to
/// [`crate::render::Canvas::draw_image`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ImageHandle(pub u32);

impl ImageHandle {
    pub const MENU_BACKGROUND: Self = Self(1);
    pub const PLAY_BACKGROUND: Self = Self(2);
    pub const PLAYER: Self = Self(3);

    /// Handles the scene renderer draws itself; items may not use them.
    pub fn is_reserved(self) -> bool {
        matches!(self, Self::MENU_BACKGROUND | Self::PLAY_BACKGROUND | Self::PLAYER)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub id: ItemId,
    pub display_name: String,
    pub image: ImageHandle,
}

impl ItemDefinition {
    pub fn new(id: ItemId, display_name: impl Into<String>, image: ImageHandle) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            image,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("item id {0} is defined more than once")]
    DuplicateItem(ItemId),

    #[error("item id {id} uses reserved image handle {image}")]
    ReservedImage { id: ItemId, image: u32 },
}

/// Read-only lookup table of item definitions keyed by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemCatalog {
    definitions: BTreeMap<ItemId, ItemDefinition>,
}

impl ItemCatalog {
    pub fn new(definitions: impl IntoIterator<Item = ItemDefinition>) -> Result<Self, CatalogError> {
        let mut table = BTreeMap::new();
        for definition in definitions {
            let id = definition.id;
            if definition.image.is_reserved() {
                return Err(CatalogError::ReservedImage {
                    id,
                    image: definition.image.0,
                });
            }
            if table.insert(id, definition).is_some() {
                return Err(CatalogError::DuplicateItem(id));
            }
        }
        Ok(Self { definitions: table })
    }

    pub fn get(&self, id: ItemId) -> Option<&ItemDefinition> {
        self.definitions.get(&id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.definitions.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
