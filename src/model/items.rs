// src/model/items.rs
//! The item cache: every known page and database keyed by id, with
//! parent links resolved as items arrive.
//!
//! Links are kept as ids and looked up in the collection on access, so a
//! resolved parent is always the copy currently held. Resolution is
//! monotonic per item: a stored item's link is never cleared, and only a
//! fresh copy of the child (which starts unresolved) can change it.

use super::Item;
use crate::error::{ClientError, PaginationError};
use crate::types::ItemId;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Keyed collection of [`Item`]s with resolved parent links.
#[derive(Debug, Clone, Default)]
pub struct Items {
    /// Items indexed by their ID
    entries: HashMap<ItemId, Arc<Item>>,
    /// Resolved links: child_id -> parent_id, both present in `entries`
    parents: HashMap<ItemId, ItemId>,
    /// Children whose parent has not arrived yet: parent_id -> child_ids
    pending: HashMap<ItemId, HashSet<ItemId>>,
}

impl Items {
    /// Creates a new empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collection from `items`, resolving parents among them.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Self {
        let mut collection = Self::new();
        collection.merge(items);
        collection
    }

    /// Inserts or overwrites each item by id, then resolves parents.
    ///
    /// Afterwards no item in the collection has an unresolved parent whose
    /// referent is present.
    pub fn merge(&mut self, items: impl IntoIterator<Item = Item>) {
        let arrived: Vec<ItemId> = items
            .into_iter()
            .map(|item| {
                let id = item.id().clone();
                self.entries.insert(id.clone(), Arc::new(item));
                // A fresh copy starts unresolved.
                self.parents.remove(&id);
                id
            })
            .collect();

        // New items look for their parents...
        for id in &arrived {
            self.resolve(id);
        }
        // ...and earlier items that were waiting on them get resolved.
        for id in &arrived {
            if let Some(waiting) = self.pending.remove(id) {
                for child in waiting {
                    self.resolve(&child);
                }
            }
        }

        log::debug!(
            "Merged {} items ({} cached, {} awaiting parent)",
            arrived.len(),
            self.entries.len(),
            self.unresolved().count()
        );
    }

    /// Converts every record in a search response's `results` and merges them.
    ///
    /// All records are validated before any is merged, so a rejected page
    /// leaves the collection untouched. Returns the number of records merged.
    pub fn populate_from_search_page(
        &mut self,
        page: &serde_json::Value,
    ) -> Result<usize, ClientError> {
        let results = page
            .get("results")
            .ok_or(PaginationError::MissingField("results"))?
            .as_array()
            .ok_or_else(|| PaginationError::InvalidField {
                field: "results",
                reason: "expected an array".to_string(),
            })?;

        let items = results
            .iter()
            .map(Item::from_raw)
            .collect::<Result<Vec<_>, _>>()?;
        let count = items.len();
        self.merge(items);
        Ok(count)
    }

    /// Links `child` to its parent if the parent is present, otherwise
    /// parks it until the parent arrives.
    fn resolve(&mut self, child: &ItemId) {
        if self.parents.contains_key(child) {
            return;
        }
        let Some(parent_id) = self.entries.get(child).and_then(|item| item.parent_id()) else {
            return;
        };
        if self.entries.contains_key(parent_id) {
            self.parents.insert(child.clone(), parent_id.clone());
        } else {
            self.pending
                .entry(parent_id.clone())
                .or_default()
                .insert(child.clone());
        }
    }

    pub fn get(&self, id: &str) -> Option<&Arc<Item>> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all items in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Item>> {
        self.entries.values()
    }

    /// The resolved parent of `item`, if any.
    pub fn parent_of(&self, item: &Item) -> Option<&Arc<Item>> {
        self.parent_by_id(item.id())
    }

    fn parent_by_id(&self, child: &ItemId) -> Option<&Arc<Item>> {
        self.parents
            .get(child)
            .and_then(|parent_id| self.entries.get(parent_id))
    }

    /// Items whose parent has been resolved to the item with `id`.
    pub fn children_of<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Arc<Item>> + 'a {
        self.entries.values().filter(move |item| {
            self.parents
                .get(item.id())
                .is_some_and(|parent_id| parent_id.as_str() == id)
        })
    }

    /// Walks resolved parent links upwards from `item`, nearest first.
    pub fn ancestors<'a>(&'a self, item: &Item) -> Ancestors<'a> {
        Ancestors {
            items: self,
            next: self.parent_by_id(item.id()),
            seen: HashSet::from([item.id().clone()]),
        }
    }

    /// Items that name a parent which is not (yet) in the collection.
    pub fn unresolved(&self) -> impl Iterator<Item = &Arc<Item>> {
        self.entries
            .values()
            .filter(|item| item.parent_id().is_some() && !self.parents.contains_key(item.id()))
    }
}

impl PartialEq for Items {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries && self.parents == other.parents
    }
}

impl FromIterator<Item> for Items {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

impl Extend<Item> for Items {
    fn extend<I: IntoIterator<Item = Item>>(&mut self, iter: I) {
        self.merge(iter);
    }
}

impl<'a> IntoIterator for &'a Items {
    type Item = &'a Arc<Item>;
    type IntoIter = std::collections::hash_map::Values<'a, ItemId, Arc<Item>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

/// Iterator returned by [`Items::ancestors`]. Stops at the first item
/// without a resolved parent, or when a cycle is detected.
pub struct Ancestors<'a> {
    items: &'a Items,
    next: Option<&'a Arc<Item>>,
    seen: HashSet<ItemId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Arc<Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if !self.seen.insert(current.id().clone()) {
            return None;
        }
        self.next = self.items.parent_by_id(current.id());
        Some(current)
    }
}
