//! Reordering & mutation engine
//!
//! [`FormConfigEditor`] holds one form type's in-memory draft. All
//! operations are synchronous list edits; nothing touches persistence
//! until the caller takes a [`FormConfigEditor::snapshot`] and saves
//! it through the REST boundary. Each form type gets its own editor
//! instance so tab switches never cross-contaminate drafts.
//!
//! The editor has exactly two states: Clean (mirrors the last
//! resolved/persisted config) and Dirty (pending edits). Every
//! mutation moves Clean to Dirty; [`FormConfigEditor::mark_saved`]
//! moves Dirty back to Clean after a successful save.

use super::defaults::default_fields_for;
use super::resolver::ResolvedFormConfig;
use super::{CustomField, CustomFieldType, FormConfig, FormFieldConfig, FormType};

/// Shallow-merge update for one custom field
#[derive(Debug, Clone, Default)]
pub struct CustomFieldPatch {
    pub label: Option<String>,
    pub field_type: Option<CustomFieldType>,
    pub required: Option<bool>,
    pub options: Option<Vec<String>>,
}

/// In-memory draft editor for one (church, form type) configuration
#[derive(Debug, Clone)]
pub struct FormConfigEditor {
    form_type: FormType,
    title: String,
    hero_title: String,
    description: String,
    fields: Vec<FormFieldConfig>,
    custom_fields: Vec<CustomField>,
    dirty: bool,
}

impl FormConfigEditor {
    /// Start a Clean editor from a resolved configuration
    pub fn from_resolved(resolved: ResolvedFormConfig) -> Self {
        Self {
            form_type: resolved.form_type,
            title: resolved.title.unwrap_or_default(),
            hero_title: resolved.hero_title.unwrap_or_default(),
            description: resolved.description.unwrap_or_default(),
            fields: resolved.field_config,
            custom_fields: resolved.custom_fields,
            dirty: false,
        }
    }

    pub fn form_type(&self) -> FormType {
        self.form_type
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn fields(&self) -> &[FormFieldConfig] {
        &self.fields
    }

    pub fn custom_fields(&self) -> &[CustomField] {
        &self.custom_fields
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    // ==================== Standard field operations ====================

    /// Move the field `from_key` to the position where `to_key`
    /// currently sits, shifting intermediate entries. No-op if either
    /// key is absent or both are equal.
    pub fn reorder(&mut self, from_key: &str, to_key: &str) {
        if from_key == to_key {
            return;
        }
        let Some(from) = self.fields.iter().position(|f| f.key == from_key) else {
            return;
        };
        let Some(to) = self.fields.iter().position(|f| f.key == to_key) else {
            return;
        };
        let field = self.fields.remove(from);
        self.fields.insert(to, field);
        self.dirty = true;
    }

    /// Flip `visible` at `index`; absorbed silently when the entry is
    /// locked or the index is out of range.
    pub fn toggle_visible(&mut self, index: usize) {
        let Some(field) = self.fields.get_mut(index) else {
            return;
        };
        if field.locked {
            return;
        }
        field.visible = !field.visible;
        self.dirty = true;
    }

    /// Flip `required` at `index`; same locked/out-of-range guard as
    /// [`Self::toggle_visible`].
    pub fn toggle_required(&mut self, index: usize) {
        let Some(field) = self.fields.get_mut(index) else {
            return;
        };
        if field.locked {
            return;
        }
        field.required = !field.required;
        self.dirty = true;
    }

    /// Overwrite the label at `index`. Emptiness is not constrained
    /// here; validation happens at save time.
    pub fn relabel(&mut self, index: usize, new_label: &str) {
        let Some(field) = self.fields.get_mut(index) else {
            return;
        };
        field.label = new_label.to_string();
        self.dirty = true;
    }

    // ==================== Title overrides ====================

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
        self.dirty = true;
    }

    pub fn set_hero_title(&mut self, hero_title: &str) {
        self.hero_title = hero_title.to_string();
        self.dirty = true;
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = description.to_string();
        self.dirty = true;
    }

    // ==================== Custom field operations ====================

    /// Append a blank custom field (generated id, text type, optional)
    /// and return its id.
    pub fn add_custom_field(&mut self) -> String {
        let field = CustomField::blank();
        let id = field.id.clone();
        self.custom_fields.push(field);
        self.dirty = true;
        id
    }

    /// Shallow-merge `patch` into the custom field at `index`.
    pub fn update_custom_field(&mut self, index: usize, patch: CustomFieldPatch) {
        let Some(field) = self.custom_fields.get_mut(index) else {
            return;
        };
        if let Some(label) = patch.label {
            field.label = label;
        }
        if let Some(field_type) = patch.field_type {
            field.field_type = field_type;
        }
        if let Some(required) = patch.required {
            field.required = required;
        }
        if let Some(options) = patch.options {
            field.options = options;
        }
        self.dirty = true;
    }

    pub fn remove_custom_field(&mut self, index: usize) {
        if index >= self.custom_fields.len() {
            return;
        }
        self.custom_fields.remove(index);
        self.dirty = true;
    }

    /// Move the custom field at `from` to position `to`.
    pub fn reorder_custom_field(&mut self, from: usize, to: usize) {
        if from == to || from >= self.custom_fields.len() || to >= self.custom_fields.len() {
            return;
        }
        let field = self.custom_fields.remove(from);
        self.custom_fields.insert(to, field);
        self.dirty = true;
    }

    pub fn add_option(&mut self, field_index: usize) {
        let Some(field) = self.custom_fields.get_mut(field_index) else {
            return;
        };
        field.options.push(String::new());
        self.dirty = true;
    }

    pub fn update_option(&mut self, field_index: usize, option_index: usize, value: &str) {
        let Some(field) = self.custom_fields.get_mut(field_index) else {
            return;
        };
        let Some(option) = field.options.get_mut(option_index) else {
            return;
        };
        *option = value.to_string();
        self.dirty = true;
    }

    pub fn remove_option(&mut self, field_index: usize, option_index: usize) {
        let Some(field) = self.custom_fields.get_mut(field_index) else {
            return;
        };
        if option_index >= field.options.len() {
            return;
        }
        field.options.remove(option_index);
        self.dirty = true;
    }

    // ==================== Lifecycle ====================

    /// Discard all in-memory edits: default fields, empty overrides,
    /// no custom fields. Affects only the draft; the persisted config
    /// is untouched until the next save.
    pub fn reset_to_default(&mut self) {
        self.fields = default_fields_for(self.form_type);
        self.custom_fields.clear();
        self.title.clear();
        self.hero_title.clear();
        self.description.clear();
        self.dirty = true;
    }

    /// The aggregate to send to the persistence boundary, stored
    /// verbatim for the (church, form type) pair.
    pub fn snapshot(&self) -> FormConfig {
        FormConfig {
            form_type: self.form_type,
            title: self.title.clone(),
            hero_title: self.hero_title.clone(),
            description: self.description.clone(),
            field_config: self.fields.clone(),
            custom_fields: self.custom_fields.clone(),
        }
    }

    /// Dirty → Clean after a successful save. The caller is expected
    /// to re-resolve from the newly persisted value and rebuild the
    /// editor if the server reshaped anything.
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::resolver::resolve;
    use std::collections::BTreeMap;

    fn editor(form_type: FormType) -> FormConfigEditor {
        FormConfigEditor::from_resolved(resolve(form_type, None))
    }

    fn key_multiset(fields: &[FormFieldConfig]) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for f in fields {
            *counts.entry(f.key.clone()).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn fresh_editor_is_clean_and_mirrors_defaults() {
        let ed = editor(FormType::Convert);
        assert!(!ed.is_dirty());
        assert_eq!(ed.fields(), default_fields_for(FormType::Convert));
        assert!(ed.custom_fields().is_empty());
        assert!(ed.title().is_empty());
    }

    #[test]
    fn reorder_is_a_permutation() {
        let mut ed = editor(FormType::Convert);
        let before = key_multiset(ed.fields());
        ed.reorder("email", "firstName");
        assert_eq!(key_multiset(ed.fields()), before);
        assert_eq!(ed.fields()[0].key, "email");
        assert!(ed.is_dirty());
    }

    #[test]
    fn reorder_downward_lands_after_the_target() {
        // Moving a field toward the back: the removal shifts every
        // later index left, so inserting at the target's original
        // position places the field just after it.
        let mut ed = editor(FormType::Convert);
        ed.reorder("firstName", "phone");

        let keys: Vec<&str> = ed.fields().iter().map(|f| f.key.as_str()).collect();
        assert_eq!(
            keys,
            [
                "lastName",
                "phone",
                "firstName",
                "email",
                "gender",
                "ageGroup",
                "address",
                "prayerRequest"
            ]
        );
        assert!(ed.is_dirty());
    }

    #[test]
    fn reorder_same_key_or_missing_key_is_noop() {
        let mut ed = editor(FormType::Convert);
        let before = ed.fields().to_vec();
        ed.reorder("email", "email");
        ed.reorder("nope", "email");
        ed.reorder("email", "nope");
        assert_eq!(ed.fields(), before);
        assert!(!ed.is_dirty());
    }

    #[test]
    fn drag_email_to_front_preserves_other_relative_order() {
        // email sits at position 4 of the convert defaults; dragging
        // it to position 1 leaves everything else in its old relative
        // order and locked flags untouched.
        let mut ed = editor(FormType::Convert);
        assert_eq!(ed.fields()[3].key, "email");
        ed.reorder("email", "firstName");

        let keys: Vec<&str> = ed.fields().iter().map(|f| f.key.as_str()).collect();
        assert_eq!(
            keys,
            [
                "email",
                "firstName",
                "lastName",
                "phone",
                "gender",
                "ageGroup",
                "address",
                "prayerRequest"
            ]
        );
        let first = ed.fields().iter().find(|f| f.key == "firstName").unwrap();
        assert!(first.locked && first.visible && first.required);
    }

    #[test]
    fn toggles_on_locked_fields_are_absorbed() {
        let mut ed = editor(FormType::Convert);
        let locked_index = 0; // firstName
        let before = ed.fields()[locked_index].clone();
        ed.toggle_visible(locked_index);
        ed.toggle_required(locked_index);
        assert_eq!(ed.fields()[locked_index], before);
        assert!(!ed.is_dirty());
    }

    #[test]
    fn toggle_flips_exactly_one_unlocked_entry() {
        let mut ed = editor(FormType::Convert);
        let index = 3; // email, unlocked
        let before = ed.fields().to_vec();
        ed.toggle_visible(index);
        for (i, field) in ed.fields().iter().enumerate() {
            if i == index {
                assert_eq!(field.visible, !before[i].visible);
                assert_eq!(field.required, before[i].required);
            } else {
                assert_eq!(*field, before[i]);
            }
        }
        assert!(ed.is_dirty());
    }

    #[test]
    fn toggle_out_of_range_is_noop() {
        let mut ed = editor(FormType::Member);
        ed.toggle_visible(99);
        ed.toggle_required(99);
        assert!(!ed.is_dirty());
    }

    #[test]
    fn relabel_allows_empty_during_editing() {
        let mut ed = editor(FormType::Member);
        ed.relabel(2, "");
        assert_eq!(ed.fields()[2].label, "");
        assert!(ed.is_dirty());
    }

    #[test]
    fn add_custom_field_starts_blank() {
        let mut ed = editor(FormType::Convert);
        let id = ed.add_custom_field();
        assert_eq!(ed.custom_fields().len(), 1);
        let field = &ed.custom_fields()[0];
        assert_eq!(field.id, id);
        assert_eq!(field.field_type, CustomFieldType::Text);
        assert!(field.label.is_empty());
        assert!(!field.required);
        assert!(field.options.is_empty());
    }

    #[test]
    fn update_custom_field_is_shallow_merge() {
        let mut ed = editor(FormType::Convert);
        ed.add_custom_field();
        ed.update_custom_field(
            0,
            CustomFieldPatch {
                field_type: Some(CustomFieldType::Dropdown),
                options: Some(vec!["A".into(), "B".into()]),
                ..Default::default()
            },
        );
        let field = &ed.custom_fields()[0];
        assert_eq!(field.field_type, CustomFieldType::Dropdown);
        assert_eq!(field.options, ["A", "B"]);
        // Untouched parts survive the merge
        assert!(field.label.is_empty());
        assert!(!field.required);
    }

    #[test]
    fn remove_option_shrinks_only_the_addressed_field() {
        let mut ed = editor(FormType::Convert);
        ed.add_custom_field();
        ed.add_custom_field();
        ed.update_custom_field(
            0,
            CustomFieldPatch {
                field_type: Some(CustomFieldType::Dropdown),
                options: Some(vec!["A".into(), "B".into()]),
                ..Default::default()
            },
        );
        ed.update_custom_field(
            1,
            CustomFieldPatch {
                field_type: Some(CustomFieldType::Dropdown),
                options: Some(vec!["X".into()]),
                ..Default::default()
            },
        );

        ed.remove_option(0, 0); // drop "A"
        assert_eq!(ed.custom_fields()[0].options, ["B"]);
        assert_eq!(ed.custom_fields()[1].options, ["X"]);
    }

    #[test]
    fn option_edits_out_of_range_are_noops() {
        let mut ed = editor(FormType::Convert);
        ed.add_custom_field();
        ed.mark_saved();
        ed.remove_option(0, 5);
        ed.update_option(0, 5, "x");
        ed.add_option(9);
        assert!(!ed.is_dirty());
    }

    #[test]
    fn reset_to_default_clears_everything_in_memory() {
        let mut ed = editor(FormType::Convert);
        ed.set_title("Our Revival Form");
        ed.reorder("email", "firstName");
        ed.add_custom_field();
        ed.reset_to_default();

        assert_eq!(ed.fields(), default_fields_for(FormType::Convert));
        assert!(ed.custom_fields().is_empty());
        assert!(ed.title().is_empty());
        // Reset is itself an edit that must still be saved.
        assert!(ed.is_dirty());
    }

    #[test]
    fn snapshot_then_resolve_round_trips() {
        let mut ed = editor(FormType::NewMember);
        ed.set_title("Become a Member");
        ed.reorder("email", "phone");
        ed.toggle_visible(6); // previousChurch
        ed.add_custom_field();
        ed.update_custom_field(
            0,
            CustomFieldPatch {
                label: Some("How did you hear about us?".into()),
                field_type: Some(CustomFieldType::Dropdown),
                options: Some(vec!["Friend".into(), "Online".into()]),
                ..Default::default()
            },
        );

        let saved = ed.snapshot();
        let resolved = resolve(FormType::NewMember, Some(&saved));
        assert_eq!(resolved.field_config, ed.fields());
        assert_eq!(resolved.custom_fields, ed.custom_fields());
        assert_eq!(resolved.title.as_deref(), Some("Become a Member"));
    }

    #[test]
    fn save_cycle_transitions_dirty_to_clean() {
        let mut ed = editor(FormType::Member);
        assert!(!ed.is_dirty());
        ed.toggle_required(2);
        assert!(ed.is_dirty());
        ed.mark_saved();
        assert!(!ed.is_dirty());
    }
}
