//! Catalog payloads and the record retained from them.

use serde::{Deserialize, Serialize};

/// Named reference inside a catalog payload
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

/// One entry of the payload's `types` array
#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// Raw catalog response.
///
/// Only the fields needed downstream are declared; everything else in the
/// payload is ignored during decoding.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogPayload {
    pub id: u32,
    pub types: Vec<TypeSlot>,
    pub height: u32,
    pub weight: u32,
}

/// Catalog data kept for a resolved name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
    /// Catalog number
    pub id: u32,
    /// Category tags in slot order, deduplicated
    pub types: Vec<String>,
    /// Height (decimetres)
    pub height: u32,
    /// Weight (hectograms)
    pub weight: u32,
}

impl CatalogPayload {
    /// Reduce the payload to a [`CatalogRecord`].
    ///
    /// Returns `None` when the payload carries no category tags.
    pub fn into_record(mut self) -> Option<CatalogRecord> {
        self.types.sort_by_key(|slot| slot.slot);

        let mut types: Vec<String> = Vec::with_capacity(self.types.len());
        for slot in self.types {
            if !types.contains(&slot.kind.name) {
                types.push(slot.kind.name);
            }
        }

        if types.is_empty() {
            return None;
        }

        Some(CatalogRecord {
            id: self.id,
            types,
            height: self.height,
            weight: self.weight,
        })
    }
}
