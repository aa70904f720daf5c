//! Menu Item Form Model
//!
//! State machine behind one menu-item form: owns the draft for a single item,
//! reconciles parent-supplied seed data against in-progress edits, masks the
//! price field, folds AI ingredient-parse results into the draft, and emits a
//! published snapshot upward only when the content genuinely changed.

use crate::models::{ItemDraft, ParsedIngredientsResult};
use crate::price;

/// Shown when the AI ingredient parse fails; the draft is left untouched.
pub const PARSE_ERROR_MESSAGE: &str =
    "Could not parse ingredients. Please check the text and try again, or set allergens manually.";

/// Initial data handed down by the parent screen. Missing fields keep
/// whatever the draft currently holds.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormSeed {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Raw price text; may carry a currency symbol
    pub price: Option<String>,
    /// Pre-computed numeric price; trusted over `price` when present
    pub price_numeric: Option<f64>,
    pub allergens: Option<Vec<String>>,
    pub dietary_categories: Option<Vec<String>>,
    pub ingredients: Option<String>,
}

impl From<&ItemDraft> for FormSeed {
    fn from(draft: &ItemDraft) -> Self {
        Self {
            id: None,
            name: Some(draft.name.clone()),
            description: Some(draft.description.clone()),
            price: Some(draft.price_display.clone()),
            price_numeric: Some(draft.price_numeric),
            allergens: Some(draft.allergens.clone()),
            dietary_categories: Some(draft.dietary_categories.clone()),
            ingredients: Some(draft.ingredients.clone()),
        }
    }
}

/// One form's draft plus the bookkeeping needed for deduplicated publishing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemFormModel {
    draft: ItemDraft,
    last_published: Option<ItemDraft>,
    applied_seed: Option<FormSeed>,
    parse_error: Option<String>,
    parsed_allergens: Vec<String>,
}

impl ItemFormModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ItemDraft {
        &self.draft
    }

    pub fn parse_error(&self) -> Option<&str> {
        self.parse_error.as_deref()
    }

    /// Allergen ids from the last successful parse, for display only
    pub fn parsed_allergens(&self) -> &[String] {
        &self.parsed_allergens
    }

    /// Parse action is available only for non-blank ingredients text
    pub fn can_parse(&self) -> bool {
        !self.draft.ingredients.trim().is_empty()
    }

    /// Merge parent-supplied seed data into the draft.
    ///
    /// Applied on first receipt, or when the seed's identity fields (`id`,
    /// `name`) differ from the previously applied seed; otherwise a no-op.
    /// Seeding never emits a change: the parent already holds this data.
    pub fn initialize(&mut self, seed: &FormSeed) -> Option<ItemDraft> {
        let identity_changed = match &self.applied_seed {
            None => true,
            Some(prev) => prev.id != seed.id || prev.name != seed.name,
        };
        if !identity_changed {
            return None;
        }

        if let Some(name) = &seed.name {
            self.draft.name = name.clone();
        }
        if let Some(description) = &seed.description {
            self.draft.description = description.clone();
        }
        if let Some(allergens) = &seed.allergens {
            self.draft.allergens = allergens.clone();
        }
        if let Some(dietary) = &seed.dietary_categories {
            self.draft.dietary_categories = dietary.clone();
        }
        if let Some(ingredients) = &seed.ingredients {
            self.draft.ingredients = ingredients.clone();
        }

        // Trust a pre-computed numeric price; otherwise parse the raw text,
        // falling back to 0 when it is missing or malformed.
        let numeric = seed
            .price_numeric
            .unwrap_or_else(|| seed.price.as_deref().map(parse_price_text).unwrap_or(0.0));
        self.draft.price_numeric = numeric;
        self.draft.price_display = price::format_price(numeric);

        self.applied_seed = Some(seed.clone());
        self.last_published = Some(self.draft.clone());
        None
    }

    pub fn set_name(&mut self, value: &str) -> Option<ItemDraft> {
        self.draft.name = value.to_string();
        self.publish_if_changed()
    }

    pub fn set_description(&mut self, value: &str) -> Option<ItemDraft> {
        self.draft.description = value.to_string();
        self.publish_if_changed()
    }

    pub fn set_ingredients(&mut self, value: &str) -> Option<ItemDraft> {
        self.draft.ingredients = value.to_string();
        self.publish_if_changed()
    }

    /// Run raw price input through the mask, storing both forms
    pub fn set_price(&mut self, raw: &str) -> Option<ItemDraft> {
        let masked = price::apply_digit_input(raw);
        self.draft.price_display = masked.display;
        self.draft.price_numeric = masked.numeric;
        self.publish_if_changed()
    }

    /// Add the allergen id if absent, remove it if present
    pub fn toggle_allergen(&mut self, id: &str) -> Option<ItemDraft> {
        toggle(&mut self.draft.allergens, id);
        self.publish_if_changed()
    }

    /// Add the dietary category id if absent, remove it if present
    pub fn toggle_dietary(&mut self, id: &str) -> Option<ItemDraft> {
        toggle(&mut self.draft.dietary_categories, id);
        self.publish_if_changed()
    }

    /// Fold a successful AI parse into the draft.
    ///
    /// Allergens are replaced outright. Dietary categories are replaced only
    /// when the parser returned some, so manual selections survive an empty
    /// result. Free-text ingredients are replaced by the comma-joined
    /// normalized list only when one came back.
    pub fn apply_parse_result(&mut self, result: &ParsedIngredientsResult) -> Option<ItemDraft> {
        self.parse_error = None;
        self.parsed_allergens = result.allergens.clone();

        self.draft.allergens = result.allergens.clone();
        if !result.dietary_categories.is_empty() {
            self.draft.dietary_categories = result.dietary_categories.clone();
        }
        if !result.extracted_ingredients.is_empty() {
            self.draft.ingredients = result.extracted_ingredients.join(", ");
        }
        self.publish_if_changed()
    }

    /// Record a parse failure. Local to this form: the draft is untouched and
    /// nothing is published.
    pub fn parse_failed(&mut self) {
        self.parse_error = Some(PARSE_ERROR_MESSAGE.to_string());
    }

    fn publish_if_changed(&mut self) -> Option<ItemDraft> {
        if self.last_published.as_ref() == Some(&self.draft) {
            return None;
        }
        self.last_published = Some(self.draft.clone());
        Some(self.draft.clone())
    }
}

fn toggle(ids: &mut Vec<String>, id: &str) {
    if let Some(pos) = ids.iter().position(|existing| existing == id) {
        ids.remove(pos);
    } else {
        ids.push(id.to_string());
    }
}

fn parse_price_text(text: &str) -> f64 {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    cleaned.parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_named(name: &str) -> FormSeed {
        FormSeed {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_initialize_never_emits() {
        let mut model = ItemFormModel::new();
        let seed = FormSeed {
            name: Some("Pizza".to_string()),
            price_numeric: Some(12.99),
            ..Default::default()
        };
        assert!(model.initialize(&seed).is_none());
        assert_eq!(model.draft().name, "Pizza");
        assert_eq!(model.draft().price_display, "$12.99");
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let mut model = ItemFormModel::new();
        let seed = seed_named("Pizza");
        model.initialize(&seed);
        let before = model.clone();

        assert!(model.initialize(&seed).is_none());
        assert_eq!(model, before);
    }

    #[test]
    fn test_initialize_reapplies_when_identity_changes() {
        let mut model = ItemFormModel::new();
        model.initialize(&seed_named("Pizza"));
        model.initialize(&seed_named("Calzone"));
        assert_eq!(model.draft().name, "Calzone");
    }

    #[test]
    fn test_initialize_parses_price_text_when_numeric_missing() {
        let mut model = ItemFormModel::new();
        let seed = FormSeed {
            price: Some("$7.50".to_string()),
            ..Default::default()
        };
        model.initialize(&seed);
        assert_eq!(model.draft().price_numeric, 7.5);
        assert_eq!(model.draft().price_display, "$7.50");
    }

    #[test]
    fn test_initialize_defaults_malformed_price_to_zero() {
        let mut model = ItemFormModel::new();
        let seed = FormSeed {
            price: Some("market".to_string()),
            ..Default::default()
        };
        model.initialize(&seed);
        assert_eq!(model.draft().price_numeric, 0.0);
        assert_eq!(model.draft().price_display, "$0.00");
    }

    #[test]
    fn test_field_edit_publishes_once_per_change() {
        let mut model = ItemFormModel::new();
        model.initialize(&FormSeed::default());

        let published = model.set_name("Soup").expect("change should publish");
        assert_eq!(published.name, "Soup");

        // Same value again: nothing new to publish
        assert!(model.set_name("Soup").is_none());
    }

    #[test]
    fn test_set_price_stores_both_forms() {
        let mut model = ItemFormModel::new();
        let published = model.set_price("1299").unwrap();
        assert_eq!(published.price_display, "$12.99");
        assert_eq!(published.price_numeric, 12.99);
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut model = ItemFormModel::new();
        model.toggle_allergen("milk");
        assert_eq!(model.draft().allergens, vec!["milk".to_string()]);

        model.toggle_allergen("milk");
        assert!(model.draft().allergens.is_empty());
    }

    #[test]
    fn test_parse_result_replaces_allergens() {
        let mut model = ItemFormModel::new();
        model.toggle_allergen("sesame");

        let result = ParsedIngredientsResult {
            allergens: vec!["milk".to_string(), "wheat".to_string()],
            ..Default::default()
        };
        model.apply_parse_result(&result);
        assert_eq!(
            model.draft().allergens,
            vec!["milk".to_string(), "wheat".to_string()]
        );
        assert_eq!(model.parsed_allergens(), model.draft().allergens);
    }

    #[test]
    fn test_empty_dietary_result_preserves_manual_selection() {
        let mut model = ItemFormModel::new();
        model.toggle_dietary("vegan");

        model.apply_parse_result(&ParsedIngredientsResult::default());
        assert_eq!(model.draft().dietary_categories, vec!["vegan".to_string()]);
    }

    #[test]
    fn test_extracted_ingredients_replace_free_text() {
        let mut model = ItemFormModel::new();
        model.set_ingredients("flour,milk and also eggs");

        let result = ParsedIngredientsResult {
            extracted_ingredients: vec![
                "flour".to_string(),
                "milk".to_string(),
                "eggs".to_string(),
            ],
            ..Default::default()
        };
        model.apply_parse_result(&result);
        assert_eq!(model.draft().ingredients, "flour, milk, eggs");
    }

    #[test]
    fn test_empty_extraction_keeps_free_text() {
        let mut model = ItemFormModel::new();
        model.set_ingredients("house blend");

        model.apply_parse_result(&ParsedIngredientsResult::default());
        assert_eq!(model.draft().ingredients, "house blend");
    }

    #[test]
    fn test_parse_failure_leaves_draft_untouched() {
        let mut model = ItemFormModel::new();
        model.toggle_allergen("milk");
        model.toggle_dietary("vegan");
        model.set_ingredients("milk, oats");
        let draft_before = model.draft().clone();

        model.parse_failed();
        assert_eq!(model.parse_error(), Some(PARSE_ERROR_MESSAGE));
        assert_eq!(model.draft(), &draft_before);
    }

    #[test]
    fn test_parse_failure_is_isolated_between_forms() {
        let mut failing = ItemFormModel::new();
        let mut sibling = ItemFormModel::new();
        sibling.toggle_allergen("fish");
        sibling.set_ingredients("cod, lemon");
        let sibling_before = sibling.clone();

        failing.parse_failed();
        assert_eq!(sibling, sibling_before);
        assert!(sibling.parse_error().is_none());
    }

    #[test]
    fn test_successful_parse_clears_prior_error() {
        let mut model = ItemFormModel::new();
        model.parse_failed();
        model.apply_parse_result(&ParsedIngredientsResult::default());
        assert!(model.parse_error().is_none());
    }

    #[test]
    fn test_can_parse_requires_non_blank_text() {
        let mut model = ItemFormModel::new();
        assert!(!model.can_parse());
        model.set_ingredients("   ");
        assert!(!model.can_parse());
        model.set_ingredients("milk");
        assert!(model.can_parse());
    }
}
