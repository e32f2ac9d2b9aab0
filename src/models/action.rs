use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One editing intent, as emitted by a frontend.
///
/// The wire shape is `{"type": "…", "payload": {…}}` with camelCase
/// names, e.g.
///
/// ```json
/// {"type": "addItem", "payload": {"parentId": null, "name": "Milk"}}
/// {"type": "moveUp", "payload": {"id": "…"}}
/// ```
///
/// There is no catch-all variant: an unknown `type` fails
/// deserialization, so a misbehaving client is rejected at the boundary
/// instead of reaching the store. An id that matches no item is not an
/// error; the store absorbs it as a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "payload",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum Action {
    /// Append a new leaf named `name` to the children of `parent_id`,
    /// or to the end of the root sequence when `parent_id` is `None`.
    AddItem {
        #[serde(default)]
        parent_id: Option<Uuid>,
        name: String,
    },
    /// Remove the item and its entire subtree.
    RemoveItem { id: Uuid },
    /// Swap the item with its previous sibling; the first sibling
    /// stays put.
    MoveUp { id: Uuid },
    /// Swap the item with its next sibling; the last sibling stays put.
    MoveDown { id: Uuid },
    /// Give the item an empty sublist. Existing children are reset,
    /// not preserved.
    AddSublist { id: Uuid },
    /// Drop the item's sublist entirely, children included.
    RemoveSublist { id: Uuid },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn add_item_round_trips_through_the_wire_shape() {
        let action: Action = serde_json::from_value(json!({
            "type": "addItem",
            "payload": {"parentId": null, "name": "Milk"}
        }))
        .expect("deserializes");
        assert_eq!(
            action,
            Action::AddItem {
                parent_id: None,
                name: "Milk".to_string()
            }
        );

        let value = serde_json::to_value(&action).expect("serializes");
        assert_eq!(value["type"], "addItem");
        assert_eq!(value["payload"]["name"], "Milk");
    }

    #[test]
    fn id_actions_use_camel_case_type_tags() {
        let action: Action = serde_json::from_value(json!({
            "type": "removeSublist",
            "payload": {"id": "00000000-0000-0000-0000-000000000000"}
        }))
        .expect("deserializes");
        assert_eq!(action, Action::RemoveSublist { id: Uuid::nil() });
    }

    #[test]
    fn unknown_type_tag_is_rejected() {
        let result: Result<Action, _> = serde_json::from_value(json!({
            "type": "renameItem",
            "payload": {"id": "00000000-0000-0000-0000-000000000000"}
        }));
        assert!(result.is_err());
    }
}
