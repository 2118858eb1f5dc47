use crate::record::{ItemRecord, EMPTY};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

/// A node of the menu hierarchy.
///
/// Groups and headings are branches, subheadings are leaves. A branch may
/// also carry items of its own (records that stop at that level) next to
/// its keyed children.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Branch(Branch),
    Leaf(Vec<ItemRecord>),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Branch {
    /// Records filed directly at this level.
    #[serde(rename = "_items", skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ItemRecord>,

    /// Keyed children in first-seen order.
    #[serde(flatten)]
    pub children: IndexMap<String, Node>,
}

impl Node {
    /// Child keys in display order, skipping the `"EMPTY"` sentinel.
    pub fn child_keys(&self) -> Vec<String> {
        match self {
            Self::Branch(branch) => branch
                .children
                .keys()
                .filter(|key| key.as_str() != EMPTY)
                .cloned()
                .collect(),
            Self::Leaf(_) => Vec::new(),
        }
    }

    pub fn child(&self, key: &str) -> Option<&Self> {
        match self {
            Self::Branch(branch) => branch.children.get(key),
            Self::Leaf(_) => None,
        }
    }

    /// The branch's own items, if it has any.
    pub fn direct_items(&self) -> Option<&[ItemRecord]> {
        match self {
            Self::Branch(branch) if !branch.items.is_empty() => Some(&branch.items),
            _ => None,
        }
    }

    /// Every record held at or below this node.
    pub fn records(&self) -> Vec<&ItemRecord> {
        match self {
            Self::Leaf(items) => items.iter().collect(),
            Self::Branch(branch) => branch
                .items
                .iter()
                .chain(branch.children.values().flat_map(Self::records))
                .collect(),
        }
    }
}

/// The full menu: group key to group branch, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Hierarchy {
    groups: IndexMap<String, Node>,
}

impl Hierarchy {
    /// Files each record under its group, heading and subheading.
    ///
    /// Records without a group are dropped. Records without a heading land
    /// in the group's own items, records without a subheading in the
    /// heading's own items.
    pub fn build<I>(records: I) -> Self
    where
        I: IntoIterator<Item = ItemRecord>,
    {
        let mut groups: IndexMap<String, Shelf<Shelf<Vec<ItemRecord>>>> = IndexMap::new();
        let mut dropped = 0_usize;

        for record in records {
            let Some(group_key) = record.group_key().map(str::to_string) else {
                dropped += 1;
                continue;
            };
            let heading_key = record.heading_key().map(str::to_string);
            let subheading_key = record.subheading_key().map(str::to_string);

            let group = groups.entry(group_key).or_default();
            match (heading_key, subheading_key) {
                (Some(heading_key), Some(subheading_key)) => group
                    .children
                    .entry(heading_key)
                    .or_default()
                    .children
                    .entry(subheading_key)
                    .or_default()
                    .push(record),
                (Some(heading_key), None) => {
                    group.children.entry(heading_key).or_default().items.push(record);
                }
                (None, _) => group.items.push(record),
            }
        }

        if dropped > 0 {
            debug!(dropped, "skipped menu records without a group");
        }

        Self {
            groups: groups
                .into_iter()
                .map(|(key, shelf)| (key, Node::from(shelf)))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn group_keys(&self) -> Vec<String> {
        self.groups
            .keys()
            .filter(|key| key.as_str() != EMPTY)
            .cloned()
            .collect()
    }

    pub fn group(&self, group: &str) -> Option<&Node> {
        self.groups.get(group)
    }

    pub fn heading(&self, group: &str, heading: &str) -> Option<&Node> {
        self.group(group)?.child(heading)
    }

    pub fn subheading(&self, group: &str, heading: &str, subheading: &str) -> Option<&Node> {
        self.heading(group, heading)?.child(subheading)
    }

    /// Every record in the hierarchy, group by group.
    pub fn records(&self) -> Vec<&ItemRecord> {
        self.groups.values().flat_map(Node::records).collect()
    }
}

/// Build-time bucket for one level: records stopping here plus keyed
/// children of the next level down.
struct Shelf<T> {
    items: Vec<ItemRecord>,
    children: IndexMap<String, T>,
}

impl<T> Default for Shelf<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            children: IndexMap::new(),
        }
    }
}

impl From<Vec<ItemRecord>> for Node {
    fn from(items: Vec<ItemRecord>) -> Self {
        Self::Leaf(items)
    }
}

impl<T: Into<Node>> From<Shelf<T>> for Node {
    fn from(shelf: Shelf<T>) -> Self {
        Self::Branch(Branch {
            items: shelf.items,
            children: shelf
                .children
                .into_iter()
                .map(|(key, child)| (key, child.into()))
                .collect(),
        })
    }
}
