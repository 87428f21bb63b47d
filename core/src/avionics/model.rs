use serde::{Deserialize, Serialize};

/// Item types understood by the avionics framework checklist.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Actionable,
    Branch,
    Link,
    Note,
    Title,
    Spacer,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Actionable => "actionable",
            ItemType::Branch => "branch",
            ItemType::Link => "link",
            ItemType::Note => "note",
            ItemType::Title => "title",
            ItemType::Spacer => "spacer",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Layout {
    /// Indent level, the final character of an `indentN` justification.
    Indent(char),
    Justification(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ItemKind {
    Actionable {
        label: String,
        action: Option<String>,
    },
    Branch {
        uid: String,
        omit_checkbox: bool,
        /// Branch identifiers, each rendered with `logic="sufficient"`.
        targets: Vec<String>,
        text: String,
    },
    Link {
        target: String,
        text: String,
    },
    Note {
        text: String,
    },
    Title {
        text: String,
    },
    Spacer {
        height: u32,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub color: Option<String>,
    pub layout: Option<Layout>,
    pub kind: ItemKind,
}

impl Item {
    pub fn spacer(height: u32) -> Self {
        Item {
            color: None,
            layout: None,
            kind: ItemKind::Spacer { height },
        }
    }

    pub fn item_type(&self) -> ItemType {
        match self.kind {
            ItemKind::Actionable { .. } => ItemType::Actionable,
            ItemKind::Branch { .. } => ItemType::Branch,
            ItemKind::Link { .. } => ItemType::Link,
            ItemKind::Note { .. } => ItemType::Note,
            ItemKind::Title { .. } => ItemType::Title,
            ItemKind::Spacer { .. } => ItemType::Spacer,
        }
    }
}

/// Expanded branch checklist, emitted as a sibling of the items in a list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BranchList {
    pub uid: String,
    pub name: String,
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ListChild {
    Item(Item),
    Branch(BranchList),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct List {
    pub name: String,
    pub uid: String,
    pub children: Vec<ListChild>,
}

impl List {
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.children.iter().filter_map(|c| match c {
            ListChild::Item(item) => Some(item),
            ListChild::Branch(_) => None,
        })
    }

    pub fn branches(&self) -> impl Iterator<Item = &BranchList> {
        self.children.iter().filter_map(|c| match c {
            ListChild::Branch(b) => Some(b),
            ListChild::Item(_) => None,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Group {
    pub name: String,
    pub lists: Vec<List>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AvionicsChecklist {
    pub default_group_index: Option<usize>,
    pub default_list_index: Option<usize>,
    pub groups: Vec<Group>,
}
