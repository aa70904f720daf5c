//! Form Slot Collection
//!
//! Ordered map backing the multi-form screen: an ordered sequence of stable
//! slot keys plus a key -> draft map. A slot's key never changes with its
//! position, and removing a slot never renumbers the survivors. The next key
//! is always `max(existing) + 1` (or 0 when empty), so a key freed by removal
//! is only ever reused once every later key is gone too.

use std::collections::HashMap;

use crate::models::ItemDraft;

/// Ordered collection of form slots with stable keys
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotMap {
    keys: Vec<u32>,
    drafts: HashMap<u32, ItemDraft>,
}

impl SlotMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key the next added slot would receive
    pub fn next_key(&self) -> u32 {
        self.keys.iter().max().map(|k| k + 1).unwrap_or(0)
    }

    /// Append one empty slot and return its key. The draft map is left
    /// untouched; the child form initializes its data lazily.
    pub fn add(&mut self) -> u32 {
        let key = self.next_key();
        self.keys.push(key);
        key
    }

    /// Append one slot per draft, keyed sequentially from `next_key`, writing
    /// each draft into the map. Existing slots are not disturbed. Returns the
    /// newly assigned keys in order.
    pub fn seed(&mut self, drafts: impl IntoIterator<Item = ItemDraft>) -> Vec<u32> {
        let base = self.next_key();
        let mut assigned = Vec::new();
        for (offset, draft) in drafts.into_iter().enumerate() {
            let key = base + offset as u32;
            self.keys.push(key);
            self.drafts.insert(key, draft);
            assigned.push(key);
        }
        assigned
    }

    /// Remove a slot from both the sequence and the map
    pub fn remove(&mut self, key: u32) {
        self.keys.retain(|k| *k != key);
        self.drafts.remove(&key);
    }

    /// Slot keys in display order
    pub fn keys(&self) -> &[u32] {
        &self.keys
    }

    pub fn contains(&self, key: u32) -> bool {
        self.keys.contains(&key)
    }

    pub fn get(&self, key: u32) -> Option<&ItemDraft> {
        self.drafts.get(&key)
    }

    pub fn set(&mut self, key: u32, draft: ItemDraft) {
        self.drafts.insert(key, draft);
    }

    /// Drafts in slot order (slots without published data are skipped)
    pub fn drafts_in_order(&self) -> impl Iterator<Item = (u32, &ItemDraft)> {
        self.keys
            .iter()
            .filter_map(|k| self.drafts.get(k).map(|d| (*k, d)))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> ItemDraft {
        ItemDraft {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_first_key_is_zero() {
        let mut slots = SlotMap::new();
        assert_eq!(slots.add(), 0);
        assert_eq!(slots.keys(), &[0]);
    }

    #[test]
    fn test_removal_keeps_survivor_keys() {
        let mut slots = SlotMap::new();
        slots.add();
        slots.add();
        slots.add();
        assert_eq!(slots.keys(), &[0, 1, 2]);

        slots.remove(1);
        assert_eq!(slots.keys(), &[0, 2]);

        // Next key continues past the highest survivor, not the hole
        assert_eq!(slots.add(), 3);
        assert_eq!(slots.keys(), &[0, 2, 3]);
    }

    #[test]
    fn test_remove_drops_draft_data() {
        let mut slots = SlotMap::new();
        let key = slots.add();
        slots.set(key, named("Pizza"));
        assert!(slots.get(key).is_some());

        slots.remove(key);
        assert!(slots.get(key).is_none());
        assert!(slots.is_empty());
    }

    #[test]
    fn test_seed_assigns_sequential_keys_after_existing() {
        let mut slots = SlotMap::new();
        slots.add();
        let assigned = slots.seed([named("Soup"), named("Salad")]);

        assert_eq!(assigned, vec![1, 2]);
        assert_eq!(slots.keys(), &[0, 1, 2]);
        assert_eq!(slots.get(1).unwrap().name, "Soup");
        assert_eq!(slots.get(2).unwrap().name, "Salad");
        // Slot 0 had no published data and still has none
        assert!(slots.get(0).is_none());
    }

    #[test]
    fn test_seed_does_not_disturb_existing_data() {
        let mut slots = SlotMap::new();
        let key = slots.add();
        slots.set(key, named("Pizza"));

        slots.seed([named("Soup")]);
        assert_eq!(slots.get(key).unwrap().name, "Pizza");
    }

    #[test]
    fn test_keys_unique_after_interleaved_ops() {
        let mut slots = SlotMap::new();
        slots.add();
        slots.add();
        slots.remove(0);
        slots.seed([named("A"), named("B")]);
        slots.add();

        let mut seen = slots.keys().to_vec();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), slots.len());
    }

    #[test]
    fn test_drafts_in_order_follow_key_sequence() {
        let mut slots = SlotMap::new();
        slots.seed([named("A"), named("B"), named("C")]);
        slots.remove(1);

        let names: Vec<&str> = slots
            .drafts_in_order()
            .map(|(_, d)| d.name.as_str())
            .collect();
        assert_eq!(names, vec!["A", "C"]);
    }
}
