//! Flattening of exported UDT / tag JSON into a flat listing
//!
//! The walk is depth-first with parents before their descendants. There is
//! no cycle detection: a parsed JSON value is a tree.

mod entry;
mod node;

pub use entry::{FlatTagEntry, Flag, TagSummary};
pub use node::{
    ContainerNode, Node, PARAM_MARKER, ParameterNode, TagNode, UNKNOWN_NAME, is_truthy,
};

use serde_json::Value;

/// Flatten a whole document.
///
/// Documents that are not objects, or objects with none of `tags`,
/// `parameters`, `typeId`, `tagType`, yield an empty listing.
pub fn flatten(root: &Value) -> Vec<FlatTagEntry> {
    let mut entries = Vec::new();
    visit(Node::root(root), "", &mut entries);
    entries
}

fn visit(node: Node<'_>, parent: &str, out: &mut Vec<FlatTagEntry>) {
    match node {
        Node::Container(container) => {
            for child in container.dispatch() {
                visit(child, parent, out);
            }
        }
        Node::Tag(tag) => {
            let path = join_path(parent, &tag.name());
            out.push(FlatTagEntry {
                tag: path.clone(),
                documentation: tag.documentation(),
                alarm: tag.has_alarm().into(),
                history: tag.has_history().into(),
            });
            for child in tag.children() {
                visit(Node::Tag(child), &path, out);
            }
        }
        Node::Parameter(param) => {
            out.push(FlatTagEntry {
                tag: join_path(parent, &format!("{PARAM_MARKER}{}", param.name())),
                documentation: param.documentation(),
                alarm: Flag::No,
                history: Flag::No,
            });
        }
    }
}

fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}/{name}")
    }
}

/// Name and documentation of each direct child of the root `tags`.
///
/// Unlike [`flatten`] this does not recurse; missing values are empty.
pub fn list_top_level(root: &Value) -> Vec<TagSummary> {
    ContainerNode::new(root)
        .tags()
        .iter()
        .map(|tag| TagSummary {
            name: tag.explicit_name().unwrap_or_default(),
            documentation: tag.documentation(),
        })
        .collect()
}
