//! Multi-Form Aggregator
//!
//! Owns the ordered collection of menu-item form slots: add/remove with
//! confirmation gating, seeding from bulk image ingestion, deduplicated
//! child-change merging, candidate filtering, and the parallel bulk submit.

use std::future::Future;

use futures::future::join_all;

use crate::models::{BulkIngestResult, ItemDraft};
use crate::price;
use crate::slots::SlotMap;

pub const NO_VALID_ITEMS_MESSAGE: &str = "No valid menu items to add!";
pub const SUBMIT_ERROR_MESSAGE: &str = "Error adding menu items. Please try again.";

/// Deletion confirmation state. A visible prompt always carries its target,
/// so "dialog open with nothing to delete" cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Removal {
    #[default]
    Idle,
    PendingConfirmation(u32),
}

/// Aggregated state for the manage-menu screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiFormAggregator {
    slots: SlotMap,
    removal: Removal,
    error: Option<String>,
    busy: bool,
}

impl MultiFormAggregator {
    /// Fresh screen state: a single empty form slot
    pub fn new() -> Self {
        let mut slots = SlotMap::new();
        slots.add();
        Self {
            slots,
            ..Default::default()
        }
    }

    pub fn slot_keys(&self) -> &[u32] {
        self.slots.keys()
    }

    pub fn draft(&self, key: u32) -> Option<&ItemDraft> {
        self.slots.get(key)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn busy(&self) -> bool {
        self.busy
    }

    /// Append one empty slot; the child form publishes its data lazily
    pub fn add_slot(&mut self) -> u32 {
        self.slots.add()
    }

    /// Seed one fully-formed draft per ingested item, keyed sequentially
    /// after the existing slots. Existing slots and their data are untouched.
    pub fn seed_from_bulk_ingest(&mut self, result: &BulkIngestResult) -> Vec<u32> {
        let drafts = result.items.iter().map(|item| {
            let numeric = item.price.unwrap_or(0.0);
            ItemDraft {
                name: item.name.clone().unwrap_or_default(),
                description: item.description.clone().unwrap_or_default(),
                price_display: price::format_price(numeric),
                price_numeric: numeric,
                allergens: item.allergens.clone().unwrap_or_default(),
                dietary_categories: item.dietary_categories.clone().unwrap_or_default(),
                ingredients: item.ingredients.clone().unwrap_or_default(),
            }
        });
        self.slots.seed(drafts)
    }

    pub fn pending_removal(&self) -> Option<u32> {
        match self.removal {
            Removal::Idle => None,
            Removal::PendingConfirmation(key) => Some(key),
        }
    }

    /// Show the confirmation prompt for one slot; nothing is removed yet
    pub fn request_remove(&mut self, key: u32) {
        self.removal = Removal::PendingConfirmation(key);
    }

    /// Remove the pending slot and its draft. No-op when nothing is pending.
    pub fn confirm_remove(&mut self) {
        if let Removal::PendingConfirmation(key) = self.removal {
            self.slots.remove(key);
        }
        self.removal = Removal::Idle;
    }

    pub fn cancel_remove(&mut self) {
        self.removal = Removal::Idle;
    }

    /// Merge a child's published snapshot. Writes only when the content
    /// actually differs from what is stored, so identical re-publishes do not
    /// ripple through the reactive graph.
    pub fn on_child_change(&mut self, key: u32, draft: ItemDraft) {
        if self.slots.get(key) != Some(&draft) {
            self.slots.set(key, draft);
        }
    }

    /// Drafts valid enough to submit: non-empty name and nonzero price, in
    /// slot order. Everything else is silently dropped.
    pub fn candidates(&self) -> Vec<ItemDraft> {
        self.slots
            .drafts_in_order()
            .filter(|(_, d)| !d.name.is_empty() && d.price_numeric != 0.0)
            .map(|(_, d)| d.clone())
            .collect()
    }

    /// Start a bulk submit: validate, set busy, and hand the candidate list
    /// to the caller for dispatch. Returns `None` (with the error recorded)
    /// when there is nothing valid to send, or while already busy.
    pub fn begin_submit(&mut self) -> Option<Vec<ItemDraft>> {
        if self.busy {
            return None;
        }
        let candidates = self.candidates();
        if candidates.is_empty() {
            self.error = Some(NO_VALID_ITEMS_MESSAGE.to_string());
            return None;
        }
        self.error = None;
        self.busy = true;
        Some(candidates)
    }

    pub fn submit_succeeded(&mut self) {
        self.busy = false;
        self.error = None;
    }

    /// Record a failed bulk submit. No rollback: items already created on the
    /// backend stay created, and the failure carries no per-item attribution.
    pub fn submit_failed(&mut self) {
        self.busy = false;
        self.error = Some(SUBMIT_ERROR_MESSAGE.to_string());
    }
}

/// Issue one creation call per candidate, all in flight simultaneously, and
/// wait for the whole set to settle. Returns the number of items created when
/// every call succeeded; a single failure fails the batch with no indication
/// of which item was responsible.
pub async fn submit_candidates<F, Fut, T>(
    candidates: Vec<ItemDraft>,
    submit_one: F,
) -> Result<usize, String>
where
    F: Fn(ItemDraft) -> Fut,
    Fut: Future<Output = Result<T, String>>,
{
    let count = candidates.len();
    let results = join_all(candidates.into_iter().map(submit_one)).await;
    for result in results {
        result?;
    }
    Ok(count)
}
