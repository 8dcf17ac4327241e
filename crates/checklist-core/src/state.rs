//! Checklist State
//!
//! The single state object behind the editor and its transition function.
//!
//! The draft lifecycle is a two-state machine:
//! - `Idle`: a commit appends a new titled list.
//! - `Editing(id)`: entered by loading a committed list; a commit overwrites
//!   that list's title and items, then returns to `Idle`.
//!
//! [`Checklist::dispatch`] applies one [`Action`] atomically. The transition
//! runs on a staged copy and replaces the current state only when it succeeds,
//! so a rejected action never leaves a half-applied state behind.

use serde::{Deserialize, Serialize};

use crate::collection::TitledLists;
use crate::draft::{DraftField, DraftForm, FieldValue};
use crate::error::{ChecklistError, Result};
use crate::id::{IdGenerator, ItemId, ListId};
use crate::model::{Item, TitledList};
use crate::pending::PendingItems;

/// Whether the next commit creates a list or overwrites one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditMode {
    #[default]
    Idle,
    Editing(ListId),
}

impl EditMode {
    pub fn editing_id(&self) -> Option<ListId> {
        match self {
            EditMode::Idle => None,
            EditMode::Editing(id) => Some(*id),
        }
    }
}

/// Editor toggles that change how events are interpreted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryOptions {
    /// The expanded item-entry row is shown
    pub item_entry: bool,
    /// Items carry a secondary sub-item field
    pub sub_field: bool,
}

/// Everything the UI can ask the checklist to do
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetField(DraftField, FieldValue),
    ResetField(DraftField),
    ResetDraft,
    /// Clear the item and sub-item inputs
    ClearItemInput,
    /// Turn the item inputs into a new in-progress item (confirm key or blur)
    AddItem,
    UpdateItemValue(ItemId, String),
    UpdateItemSubValue(ItemId, String),
    ToggleItem(ItemId),
    RemoveItem(ItemId),
    /// Move an in-progress item before the item at the given slot
    MoveItem(ItemId, usize),
    Commit,
    /// Confirm key pressed in the title input
    TitleEnter,
    LoadForEdit(ListId),
    CancelEdit,
    RemoveList(ListId),
    ToggleListItem(ListId, ItemId),
    ToggleItemEntry,
    ToggleSubField,
}

/// What a successful transition changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    DraftChanged,
    ItemAdded(ItemId),
    ItemUpdated(ItemId),
    ItemRemoved(ItemId),
    ItemMoved(ItemId, usize),
    ListCreated(ListId),
    ListUpdated(ListId),
    ListLoaded(ListId),
    EditCancelled,
    ListRemoved(ListId),
    ListItemChecked(ListId, ItemId, bool),
    OptionsChanged(EntryOptions),
}

/// Draft, in-progress items, committed lists and edit mode of one editor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Checklist {
    draft: DraftForm,
    pending: PendingItems,
    lists: TitledLists,
    mode: EditMode,
    options: EntryOptions,
    ids: IdGenerator,
}

impl Checklist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: EntryOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn draft(&self) -> &DraftForm {
        &self.draft
    }

    pub fn pending(&self) -> &PendingItems {
        &self.pending
    }

    pub fn lists(&self) -> &TitledLists {
        &self.lists
    }

    pub fn list(&self, id: ListId) -> Option<&TitledList> {
        self.lists.get(id)
    }

    /// Items of a committed list
    pub fn list_items(&self, id: ListId) -> Option<&[Item]> {
        self.lists.get(id).map(|list| list.items.as_slice())
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode != EditMode::Idle
    }

    pub fn options(&self) -> EntryOptions {
        self.options
    }

    /// Apply one action. On error the state is left exactly as it was.
    pub fn dispatch(&mut self, action: Action) -> Result<Outcome> {
        let mut next = self.clone();
        let outcome = next.apply(action)?;
        *self = next;
        Ok(outcome)
    }

    /// Append an in-progress item directly, bypassing the draft inputs
    pub fn add_item(&mut self, value: impl Into<String>, sub_value: Option<String>, checked: bool) -> ItemId {
        let id = self.pending.add_item(&mut self.ids, value, sub_value, checked);
        log::debug!(target: "checklist", "added in-progress item {}", id);
        id
    }

    fn apply(&mut self, action: Action) -> Result<Outcome> {
        match action {
            Action::SetField(field, value) => {
                self.draft.set_field(field, value)?;
                Ok(Outcome::DraftChanged)
            }
            Action::ResetField(field) => {
                self.draft.reset_field(field);
                Ok(Outcome::DraftChanged)
            }
            Action::ResetDraft => {
                self.draft.reset_all();
                Ok(Outcome::DraftChanged)
            }
            Action::ClearItemInput => {
                self.draft.clear_item_input();
                Ok(Outcome::DraftChanged)
            }
            Action::AddItem => self.add_from_draft().map(Outcome::ItemAdded),
            Action::UpdateItemValue(id, value) => {
                self.pending.update_item_value(id, value)?;
                Ok(Outcome::ItemUpdated(id))
            }
            Action::UpdateItemSubValue(id, value) => {
                self.pending.update_item_sub_value(id, value)?;
                Ok(Outcome::ItemUpdated(id))
            }
            Action::ToggleItem(id) => {
                self.pending.toggle_checked(id)?;
                Ok(Outcome::ItemUpdated(id))
            }
            Action::RemoveItem(id) => {
                self.pending.remove_item(id)?;
                Ok(Outcome::ItemRemoved(id))
            }
            Action::MoveItem(id, slot) => {
                let index = self.pending.move_item(id, slot)?;
                Ok(Outcome::ItemMoved(id, index))
            }
            Action::Commit => self.commit(),
            Action::TitleEnter => {
                if self.options.item_entry {
                    return Err(ChecklistError::CommitSkipped("item entry is open"));
                }
                if self.draft.title.is_empty() {
                    return Err(ChecklistError::CommitSkipped("title is empty"));
                }
                self.commit()
            }
            Action::LoadForEdit(id) => self.load_for_edit(id),
            Action::CancelEdit => {
                self.mode = EditMode::Idle;
                self.pending.take();
                self.draft.reset_all();
                Ok(Outcome::EditCancelled)
            }
            Action::RemoveList(id) => self.remove_list(id),
            Action::ToggleListItem(list_id, item_id) => {
                let checked = self.lists.toggle_item_checked(list_id, item_id)?;
                Ok(Outcome::ListItemChecked(list_id, item_id, checked))
            }
            Action::ToggleItemEntry => {
                self.options.item_entry = !self.options.item_entry;
                Ok(Outcome::OptionsChanged(self.options))
            }
            Action::ToggleSubField => {
                self.options.sub_field = !self.options.sub_field;
                Ok(Outcome::OptionsChanged(self.options))
            }
        }
    }

    fn add_from_draft(&mut self) -> Result<ItemId> {
        let sub_field = self.options.sub_field;
        if !self.draft.item_ready(sub_field) {
            return Err(ChecklistError::IncompleteItem);
        }
        let value = std::mem::take(&mut self.draft.item);
        let sub_item = std::mem::take(&mut self.draft.sub_item);
        let sub_value = sub_field.then_some(sub_item);
        let checked = self.draft.checked;
        Ok(self.add_item(value, sub_value, checked))
    }

    fn commit(&mut self) -> Result<Outcome> {
        let title = std::mem::take(&mut self.draft.title);
        let items = self.pending.take();
        let count = items.len();
        let mode = std::mem::take(&mut self.mode);
        self.draft.reset_all();

        if let Some(id) = mode.editing_id() {
            if self.lists.get(id).is_some() {
                self.lists.replace(id, title, items)?;
                log::info!(target: "checklist", "updated list {} ({} items)", id, count);
                return Ok(Outcome::ListUpdated(id));
            }
            log::warn!(target: "checklist", "list {} under edit is gone, committing as new", id);
        }

        let id = self.ids.list();
        self.lists.push(TitledList::new(id, title, items));
        log::info!(target: "checklist", "created list {} ({} items)", id, count);
        Ok(Outcome::ListCreated(id))
    }

    fn load_for_edit(&mut self, id: ListId) -> Result<Outcome> {
        let list = self.lists.get(id).ok_or(ChecklistError::ListNotFound(id))?;
        self.draft.title = list.title.clone();
        self.pending = PendingItems::from_items(list.items.clone());
        self.mode = EditMode::Editing(id);
        log::debug!(target: "checklist", "editing list {}", id);
        Ok(Outcome::ListLoaded(id))
    }

    fn remove_list(&mut self, id: ListId) -> Result<Outcome> {
        self.lists.remove(id)?;
        if self.mode == EditMode::Editing(id) {
            // Keep the draft so nothing typed is lost; the next commit creates a list
            self.mode = EditMode::Idle;
        }
        log::info!(target: "checklist", "removed list {}", id);
        Ok(Outcome::ListRemoved(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(checklist: &mut Checklist, field: DraftField, value: impl Into<FieldValue>) {
        checklist.dispatch(Action::SetField(field, value.into())).unwrap();
    }

    fn add(checklist: &mut Checklist, value: &str, checked: bool) -> ItemId {
        set(checklist, DraftField::Item, value);
        set(checklist, DraftField::Checked, checked);
        match checklist.dispatch(Action::AddItem).unwrap() {
            Outcome::ItemAdded(id) => id,
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    fn commit_groceries(checklist: &mut Checklist) -> ListId {
        set(checklist, DraftField::Title, "Groceries");
        add(checklist, "Milk", false);
        add(checklist, "Eggs", true);
        match checklist.dispatch(Action::Commit).unwrap() {
            Outcome::ListCreated(id) => id,
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_add_item_grows_by_one_and_copies_checked() {
        let mut checklist = Checklist::new();
        add(&mut checklist, "Milk", false);
        let before = checklist.pending().len();

        let id = add(&mut checklist, "Eggs", true);

        assert_eq!(checklist.pending().len(), before + 1);
        assert!(checklist.pending().get(id).unwrap().checked);
        assert_eq!(checklist.pending().get(id).unwrap().sub_value, None);
        // Item inputs reset, title and checked kept
        assert_eq!(checklist.draft().item, "");
        assert!(checklist.draft().checked);
    }

    #[test]
    fn test_add_item_requires_text() {
        let mut checklist = Checklist::new();
        assert_eq!(checklist.dispatch(Action::AddItem), Err(ChecklistError::IncompleteItem));
        assert!(checklist.pending().is_empty());
    }

    #[test]
    fn test_add_item_with_sub_field_requires_both_values() {
        let mut checklist = Checklist::with_options(EntryOptions { item_entry: true, sub_field: true });
        set(&mut checklist, DraftField::Item, "Milk");

        assert_eq!(checklist.dispatch(Action::AddItem), Err(ChecklistError::IncompleteItem));
        assert!(checklist.pending().is_empty());
        assert_eq!(checklist.draft().item, "Milk");

        set(&mut checklist, DraftField::SubItem, "2L");
        let Outcome::ItemAdded(id) = checklist.dispatch(Action::AddItem).unwrap() else {
            panic!("item not added");
        };
        assert_eq!(checklist.pending().get(id).unwrap().sub_value.as_deref(), Some("2L"));
        assert_eq!(checklist.draft().sub_item, "");
    }

    #[test]
    fn test_remove_item_and_unknown_id() {
        let mut checklist = Checklist::new();
        let milk = add(&mut checklist, "Milk", false);
        add(&mut checklist, "Eggs", false);

        checklist.dispatch(Action::RemoveItem(milk)).unwrap();
        assert_eq!(checklist.pending().len(), 1);
        assert!(checklist.pending().get(milk).is_none());

        let before = checklist.clone();
        assert_eq!(
            checklist.dispatch(Action::RemoveItem(milk)),
            Err(ChecklistError::ItemNotFound(milk))
        );
        assert_eq!(checklist, before);
    }

    #[test]
    fn test_toggle_item_round_trip() {
        let mut checklist = Checklist::new();
        let id = add(&mut checklist, "Milk", false);
        checklist.dispatch(Action::ToggleItem(id)).unwrap();
        assert!(checklist.pending().get(id).unwrap().checked);
        checklist.dispatch(Action::ToggleItem(id)).unwrap();
        assert!(!checklist.pending().get(id).unwrap().checked);
    }

    #[test]
    fn test_commit_creates_list_and_resets_draft() {
        let mut checklist = Checklist::new();
        let id = commit_groceries(&mut checklist);

        let list = checklist.list(id).unwrap();
        assert_eq!(list.title, "Groceries");
        let items: Vec<(&str, bool)> = list.items.iter().map(|i| (i.value.as_str(), i.checked)).collect();
        assert_eq!(items, [("Milk", false), ("Eggs", true)]);

        assert_eq!(checklist.draft(), &DraftForm::default());
        assert!(checklist.pending().is_empty());
        assert_eq!(checklist.mode(), EditMode::Idle);
    }

    #[test]
    fn test_commit_allows_empty_title_and_items() {
        let mut checklist = Checklist::new();
        let Outcome::ListCreated(id) = checklist.dispatch(Action::Commit).unwrap() else {
            panic!("list not created");
        };
        let list = checklist.list(id).unwrap();
        assert_eq!(list.display_title("Untitled note"), "Untitled note");
        assert!(list.items.is_empty());
    }

    #[test]
    fn test_edit_then_commit_replaces_in_place() {
        let mut checklist = Checklist::new();
        let id = commit_groceries(&mut checklist);
        set(&mut checklist, DraftField::Title, "Chores");
        checklist.dispatch(Action::Commit).unwrap();
        assert_eq!(checklist.lists().len(), 2);

        checklist.dispatch(Action::LoadForEdit(id)).unwrap();
        assert_eq!(checklist.mode(), EditMode::Editing(id));
        assert_eq!(checklist.draft().title, "Groceries");
        assert_eq!(checklist.pending().len(), 2);

        set(&mut checklist, DraftField::Title, "Market");
        let eggs = checklist.pending().as_slice()[1].id;
        checklist.dispatch(Action::RemoveItem(eggs)).unwrap();

        assert_eq!(checklist.dispatch(Action::Commit), Ok(Outcome::ListUpdated(id)));
        assert_eq!(checklist.lists().len(), 2);
        let list = checklist.list(id).unwrap();
        assert_eq!(list.title, "Market");
        assert_eq!(list.items.len(), 1);
        assert_eq!(checklist.lists().as_slice()[0].id, id);
        assert_eq!(checklist.mode(), EditMode::Idle);
        assert!(checklist.pending().is_empty());
    }

    #[test]
    fn test_editing_draft_does_not_touch_committed_list_until_commit() {
        let mut checklist = Checklist::new();
        let id = commit_groceries(&mut checklist);
        checklist.dispatch(Action::LoadForEdit(id)).unwrap();
        let milk = checklist.pending().as_slice()[0].id;
        checklist.dispatch(Action::UpdateItemValue(milk, "Oat milk".to_string())).unwrap();

        assert_eq!(checklist.list_items(id).unwrap()[0].value, "Milk");
    }

    #[test]
    fn test_update_only_matching_id() {
        let mut checklist = Checklist::new();
        let first = add(&mut checklist, "Milk", false);
        let second = add(&mut checklist, "Milk", false);

        checklist.dispatch(Action::UpdateItemValue(second, "Soy milk".to_string())).unwrap();
        checklist.dispatch(Action::UpdateItemSubValue(second, "1L".to_string())).unwrap();

        assert_eq!(checklist.pending().get(first).unwrap().value, "Milk");
        assert_eq!(checklist.pending().get(first).unwrap().sub_value, None);
        assert_eq!(checklist.pending().get(second).unwrap().value, "Soy milk");
    }

    #[test]
    fn test_reset_actions_and_shape_errors() {
        let mut checklist = Checklist::new();
        set(&mut checklist, DraftField::Title, "Groceries");
        set(&mut checklist, DraftField::Item, "Milk");

        checklist.dispatch(Action::ResetField(DraftField::Item)).unwrap();
        assert_eq!(checklist.draft().item, "");
        assert_eq!(checklist.draft().title, "Groceries");

        let before = checklist.clone();
        assert!(matches!(
            checklist.dispatch(Action::SetField(DraftField::Checked, "yes".into())),
            Err(ChecklistError::FieldShape { .. })
        ));
        assert_eq!(checklist, before);

        checklist.dispatch(Action::ResetDraft).unwrap();
        assert_eq!(checklist.draft(), &DraftForm::default());
    }

    #[test]
    fn test_title_enter_guards() {
        let mut checklist = Checklist::new();
        assert_eq!(
            checklist.dispatch(Action::TitleEnter),
            Err(ChecklistError::CommitSkipped("title is empty"))
        );

        set(&mut checklist, DraftField::Title, "Quick note");
        checklist.dispatch(Action::ToggleItemEntry).unwrap();
        assert_eq!(
            checklist.dispatch(Action::TitleEnter),
            Err(ChecklistError::CommitSkipped("item entry is open"))
        );
        assert!(checklist.lists().is_empty());

        checklist.dispatch(Action::ToggleItemEntry).unwrap();
        let Outcome::ListCreated(id) = checklist.dispatch(Action::TitleEnter).unwrap() else {
            panic!("list not created");
        };
        assert_eq!(checklist.list(id).unwrap().title, "Quick note");
        assert_eq!(checklist.draft().title, "");
    }

    #[test]
    fn test_title_enter_while_editing_overwrites() {
        let mut checklist = Checklist::new();
        let id = commit_groceries(&mut checklist);
        checklist.dispatch(Action::LoadForEdit(id)).unwrap();
        set(&mut checklist, DraftField::Title, "Renamed");

        assert_eq!(checklist.dispatch(Action::TitleEnter), Ok(Outcome::ListUpdated(id)));
        assert_eq!(checklist.lists().len(), 1);
        assert_eq!(checklist.list(id).unwrap().items.len(), 2);
        assert!(checklist.pending().is_empty());
    }

    #[test]
    fn test_removing_list_under_edit_returns_to_idle() {
        let mut checklist = Checklist::new();
        let id = commit_groceries(&mut checklist);
        checklist.dispatch(Action::LoadForEdit(id)).unwrap();

        checklist.dispatch(Action::RemoveList(id)).unwrap();
        assert_eq!(checklist.mode(), EditMode::Idle);
        assert_eq!(checklist.draft().title, "Groceries");

        let Outcome::ListCreated(new_id) = checklist.dispatch(Action::Commit).unwrap() else {
            panic!("list not created");
        };
        assert_ne!(new_id, id);
        assert_eq!(checklist.lists().len(), 1);
    }

    #[test]
    fn test_removing_other_list_keeps_edit_mode() {
        let mut checklist = Checklist::new();
        let first = commit_groceries(&mut checklist);
        let second = commit_groceries(&mut checklist);
        checklist.dispatch(Action::LoadForEdit(first)).unwrap();

        checklist.dispatch(Action::RemoveList(second)).unwrap();
        assert_eq!(checklist.mode(), EditMode::Editing(first));
    }

    #[test]
    fn test_commit_with_list_under_edit_gone_creates_new_list() {
        let mut checklist = Checklist::new();
        let id = commit_groceries(&mut checklist);
        checklist.dispatch(Action::LoadForEdit(id)).unwrap();

        // A saved state can hold an edit mode whose list no longer exists
        let mut json = serde_json::to_value(&checklist).unwrap();
        json["lists"] = serde_json::json!([]);
        let mut restored: Checklist = serde_json::from_value(json).unwrap();
        assert_eq!(restored.mode(), EditMode::Editing(id));

        let Outcome::ListCreated(new_id) = restored.dispatch(Action::Commit).unwrap() else {
            panic!("list not created");
        };
        assert_ne!(new_id, id);
        assert_eq!(restored.lists().len(), 1);
        assert_eq!(restored.list(new_id).unwrap().title, "Groceries");
        assert_eq!(restored.list(new_id).unwrap().items.len(), 2);
        assert_eq!(restored.mode(), EditMode::Idle);
        assert!(restored.pending().is_empty());
    }

    #[test]
    fn test_checking_entry_box_waits_for_add() {
        let mut checklist = Checklist::new();
        assert!(!checklist.options().sub_field);
        set(&mut checklist, DraftField::Item, "Bread");

        set(&mut checklist, DraftField::Checked, true);
        assert!(checklist.pending().is_empty());
        assert_eq!(checklist.draft().item, "Bread");

        let Outcome::ItemAdded(id) = checklist.dispatch(Action::AddItem).unwrap() else {
            panic!("item not added");
        };
        assert!(checklist.pending().get(id).unwrap().checked);
        assert_eq!(checklist.draft().item, "");
    }

    #[test]
    fn test_cancel_edit_leaves_collection_alone() {
        let mut checklist = Checklist::new();
        let id = commit_groceries(&mut checklist);
        checklist.dispatch(Action::LoadForEdit(id)).unwrap();
        set(&mut checklist, DraftField::Title, "Discarded");

        checklist.dispatch(Action::CancelEdit).unwrap();
        assert!(!checklist.is_editing());
        assert!(checklist.pending().is_empty());
        assert_eq!(checklist.list(id).unwrap().title, "Groceries");
    }

    #[test]
    fn test_toggle_committed_item_outside_edit_flow() {
        let mut checklist = Checklist::new();
        let id = commit_groceries(&mut checklist);
        let milk = checklist.list_items(id).unwrap()[0].id;

        assert_eq!(
            checklist.dispatch(Action::ToggleListItem(id, milk)),
            Ok(Outcome::ListItemChecked(id, milk, true))
        );
        assert_eq!(checklist.list(id).unwrap().checked_count(), 2);
        checklist.dispatch(Action::ToggleListItem(id, milk)).unwrap();
        assert_eq!(checklist.list(id).unwrap().checked_count(), 1);
        assert!(checklist.pending().is_empty());
    }

    #[test]
    fn test_load_unknown_list_is_rejected() {
        let mut checklist = Checklist::new();
        let missing = ListId::new(404);
        assert_eq!(
            checklist.dispatch(Action::LoadForEdit(missing)),
            Err(ChecklistError::ListNotFound(missing))
        );
        assert!(!checklist.is_editing());
    }

    #[test]
    fn test_ids_never_reused_after_delete() {
        let mut checklist = Checklist::new();
        let first = add(&mut checklist, "a", false);
        checklist.dispatch(Action::RemoveItem(first)).unwrap();
        let second = add(&mut checklist, "a", false);
        assert_ne!(first, second);
    }

    #[test]
    fn test_move_item_action() {
        let mut checklist = Checklist::new();
        let a = add(&mut checklist, "a", false);
        add(&mut checklist, "b", false);
        assert_eq!(checklist.dispatch(Action::MoveItem(a, 2)), Ok(Outcome::ItemMoved(a, 1)));
        let order: Vec<&str> = checklist.pending().iter().map(|i| i.value.as_str()).collect();
        assert_eq!(order, ["b", "a"]);
    }

    #[test]
    fn test_state_serializes() {
        let mut checklist = Checklist::new();
        commit_groceries(&mut checklist);
        let json = serde_json::to_value(&checklist).unwrap();
        assert_eq!(json["lists"][0]["title"], "Groceries");
        assert_eq!(json["lists"][0]["items"][1]["checked"], true);
        assert_eq!(json["mode"], "Idle");
    }
}
