//! ASCII tree rendering for outlines.

use crate::models::Item;

/// Render an outline as an ASCII tree.
///
/// Items that hold a sublist get a `/` suffix, so an empty sublist is
/// visibly different from a leaf. Example output:
///
/// ```text
/// Groceries/
/// ├── Milk
/// └── Bakery/
///     ├── Bread
///     └── Bagels
/// Errands
/// ```
pub fn render_outline(items: &[Item]) -> String {
    let mut output = String::new();
    for (i, item) in items.iter().enumerate() {
        let is_last = i == items.len() - 1;
        render_item(&mut output, item, "", is_last, true);
    }
    output
}

fn label(item: &Item) -> String {
    match item.children() {
        Some(_) => format!("{}/", item.name()),
        None => item.name().to_string(),
    }
}

/// Recursively render an item and its children.
fn render_item(output: &mut String, item: &Item, prefix: &str, is_last: bool, is_root: bool) {
    if is_root {
        // Root items: no branch characters.
        output.push_str(&label(item));
        output.push('\n');
    } else {
        let branch = if is_last { "└── " } else { "├── " };
        output.push_str(prefix);
        output.push_str(branch);
        output.push_str(&label(item));
        output.push('\n');
    }

    let Some(children) = item.children() else {
        return;
    };

    let child_prefix = if is_root {
        String::new()
    } else {
        let continuation = if is_last { "    " } else { "│   " };
        format!("{}{}", prefix, continuation)
    };

    for (i, child) in children.iter().enumerate() {
        let child_is_last = i == children.len() - 1;
        render_item(output, child, &child_prefix, child_is_last, false);
    }
}
