//! Outline store: pure state transitions over the item tree.
//!
//! Every transition consumes the current outline and returns a new one,
//! rebuilding the path from the root to any changed node; subtrees off
//! that path are moved into the result untouched. Lookups recurse
//! depth-first through every level, so an action can target an item at
//! any depth. An id that matches nothing leaves the outline
//! structurally unchanged.

use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::models::{Action, Item, Outline};

// ============================================================
// Store
// ============================================================

/// Shared handle to the current outline.
///
/// Cheap to clone; all clones see the same state. Each dispatched
/// action is applied atomically under the lock, so there is exactly one
/// logical writer and never a partially-applied transition.
#[derive(Clone)]
pub struct Store {
    state: Arc<Mutex<Outline>>,
}

impl Store {
    /// Create a store holding the empty outline.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// The current outline.
    pub fn snapshot(&self) -> Outline {
        self.state.lock().expect("store lock poisoned").clone()
    }

    /// Apply one action and return the resulting outline.
    pub fn dispatch(&self, action: Action) -> Outline {
        let mut state = self.state.lock().expect("store lock poisoned");
        let next = transition(std::mem::take(&mut *state), action);
        *state = next.clone();
        next
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================
// Transitions
// ============================================================

/// Map an outline plus one action to the next outline.
///
/// Total over all six action kinds; ids that match no item fall through
/// as no-ops.
pub fn transition(outline: Outline, action: Action) -> Outline {
    match action {
        Action::AddItem { parent_id, name } => add_item(outline, parent_id, &name),
        Action::RemoveItem { id } => remove_item(outline, id),
        Action::MoveUp { id } => move_up(outline, id),
        Action::MoveDown { id } => move_down(outline, id),
        Action::AddSublist { id } => add_sublist(outline, id),
        Action::RemoveSublist { id } => remove_sublist(outline, id),
    }
}

fn add_item(mut outline: Outline, parent_id: Option<Uuid>, name: &str) -> Outline {
    match parent_id {
        None => {
            outline.push(Item::leaf(name));
            outline
        }
        Some(parent_id) => append_child(outline, parent_id, name),
    }
}

/// Append a new leaf to the children of `parent_id`, wherever that item
/// sits. A leaf parent gains a children sequence in the process.
fn append_child(outline: Outline, parent_id: Uuid, name: &str) -> Outline {
    outline
        .into_iter()
        .map(|item| match item {
            Item::List {
                id,
                name: label,
                children,
            } => {
                let mut children = append_child(children, parent_id, name);
                if id == parent_id {
                    children.push(Item::leaf(name));
                }
                Item::List {
                    id,
                    name: label,
                    children,
                }
            }
            Item::Leaf { id, name: label } if id == parent_id => Item::List {
                id,
                name: label,
                children: vec![Item::leaf(name)],
            },
            leaf => leaf,
        })
        .collect()
}

fn remove_item(outline: Outline, target: Uuid) -> Outline {
    outline
        .into_iter()
        .filter(|item| item.id() != target)
        .map(|item| match item {
            Item::List { id, name, children } => Item::List {
                id,
                name,
                children: remove_item(children, target),
            },
            leaf => leaf,
        })
        .collect()
}

/// Swap `target` with its previous sibling. Moves never cross a
/// parent/child boundary: the first item of a sibling list stays put.
fn move_up(outline: Outline, target: Uuid) -> Outline {
    let mut items: Outline = outline
        .into_iter()
        .map(|item| match item {
            Item::List { id, name, children } => Item::List {
                id,
                name,
                children: move_up(children, target),
            },
            leaf => leaf,
        })
        .collect();
    if let Some(pos) = items.iter().position(|item| item.id() == target) {
        if pos > 0 {
            items.swap(pos, pos - 1);
        }
    }
    items
}

/// Swap `target` with its next sibling; the last item of a sibling
/// list stays put.
fn move_down(outline: Outline, target: Uuid) -> Outline {
    let mut items: Outline = outline
        .into_iter()
        .map(|item| match item {
            Item::List { id, name, children } => Item::List {
                id,
                name,
                children: move_down(children, target),
            },
            leaf => leaf,
        })
        .collect();
    if let Some(pos) = items.iter().position(|item| item.id() == target) {
        if pos + 1 < items.len() {
            items.swap(pos, pos + 1);
        }
    }
    items
}

/// Give `target` an empty sublist. An existing children sequence is
/// reset, not preserved.
fn add_sublist(outline: Outline, target: Uuid) -> Outline {
    outline
        .into_iter()
        .map(|item| match item {
            Item::List { id, name, children } => {
                if id == target {
                    Item::List {
                        id,
                        name,
                        children: Vec::new(),
                    }
                } else {
                    Item::List {
                        id,
                        name,
                        children: add_sublist(children, target),
                    }
                }
            }
            Item::Leaf { id, name } if id == target => Item::List {
                id,
                name,
                children: Vec::new(),
            },
            leaf => leaf,
        })
        .collect()
}

/// Demote `target` back to a leaf, discarding any subtree it held.
fn remove_sublist(outline: Outline, target: Uuid) -> Outline {
    outline
        .into_iter()
        .map(|item| match item {
            Item::List { id, name, children } => {
                if id == target {
                    Item::Leaf { id, name }
                } else {
                    Item::List {
                        id,
                        name,
                        children: remove_sublist(children, target),
                    }
                }
            }
            leaf => leaf,
        })
        .collect()
}
