use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One node of the outline.
///
/// The presence of a children sequence is the sole distinction between
/// a plain item and a sublist: a `List` with no children is an *empty
/// sublist*, not a `Leaf`. The JSON projection preserves that contract,
/// so a leaf has no `children` key at all while a list always has one:
///
/// ```json
/// {"id": "…", "name": "Groceries", "children": []}
/// {"id": "…", "name": "Milk"}
/// ```
///
/// Ids are assigned once at creation and never reused. Names are fixed
/// for the lifetime of the item; there is no rename operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Item {
    /// Item holding a sublist of child items, possibly empty.
    ///
    /// Listed before `Leaf` so that untagged deserialization picks it
    /// whenever a `children` key is present.
    List {
        id: Uuid,
        name: String,
        children: Vec<Item>,
    },
    /// Plain item with no sublist.
    Leaf { id: Uuid, name: String },
}

/// The whole editor state: the ordered sequence of root items.
pub type Outline = Vec<Item>;

impl Item {
    /// Create a new leaf with a fresh id.
    pub fn leaf(name: impl Into<String>) -> Self {
        Item::Leaf {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            Item::List { id, .. } | Item::Leaf { id, .. } => *id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Item::List { name, .. } | Item::Leaf { name, .. } => name,
        }
    }

    /// Child items, or `None` for a leaf. `Some(&[])` is an empty
    /// sublist, which is not the same as a leaf.
    pub fn children(&self) -> Option<&[Item]> {
        match self {
            Item::List { children, .. } => Some(children),
            Item::Leaf { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn leaf_serializes_without_children_key() {
        let item = Item::Leaf {
            id: Uuid::nil(),
            name: "Milk".to_string(),
        };
        let value = serde_json::to_value(&item).expect("serializes");
        assert_eq!(
            value,
            json!({"id": "00000000-0000-0000-0000-000000000000", "name": "Milk"})
        );
    }

    #[test]
    fn empty_sublist_serializes_with_children_key() {
        let item = Item::List {
            id: Uuid::nil(),
            name: "Groceries".to_string(),
            children: Vec::new(),
        };
        let value = serde_json::to_value(&item).expect("serializes");
        assert_eq!(
            value,
            json!({
                "id": "00000000-0000-0000-0000-000000000000",
                "name": "Groceries",
                "children": []
            })
        );
    }

    #[test]
    fn deserializes_leaf_and_list_shapes() {
        let leaf: Item = serde_json::from_value(json!({
            "id": "00000000-0000-0000-0000-000000000000",
            "name": "Milk"
        }))
        .expect("leaf deserializes");
        assert!(leaf.children().is_none());

        let list: Item = serde_json::from_value(json!({
            "id": "00000000-0000-0000-0000-000000000000",
            "name": "Groceries",
            "children": [{"id": "11111111-1111-1111-1111-111111111111", "name": "Milk"}]
        }))
        .expect("list deserializes");
        let children = list.children().expect("has a sublist");
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].name(), "Milk");
    }

    #[test]
    fn fresh_leaves_get_distinct_ids() {
        assert_ne!(Item::leaf("A").id(), Item::leaf("A").id());
    }
}
