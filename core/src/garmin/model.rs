use serde::{Deserialize, Serialize};

/// User definable name/value pair shown on the unit. Has no effect on behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomField {
    pub name: String,
    pub value: String,
}

/// Index into the file's groups and into that group's checklists.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChecklistRef {
    pub group: usize,
    pub checklist: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(rename = "type")]
    pub type_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blanks_below: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_checklist: Option<ChecklistRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_synoptic_page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branches: Option<Vec<usize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_parent_checkbox: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_text: Option<String>,
}

/// CAS alert that triggers a checklist while active.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CasAlert {
    #[serde(rename = "class", alias = "class_")]
    pub class: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leaf_mask: Option<u16>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Checklist {
    pub name: String,
    pub entries: Vec<Entry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_alerts: Option<Vec<CasAlert>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Group {
    pub name: String,
    pub checklists: Vec<Checklist>,
}

/// How an entry behaves on the unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Checkbox,
    BranchParent,
    Link,
    ScrollStop,
    NoScrollStop,
}

impl Interaction {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "checkbox" => Some(Interaction::Checkbox),
            "branchParent" => Some(Interaction::BranchParent),
            "link" => Some(Interaction::Link),
            "scrollStop" => Some(Interaction::ScrollStop),
            "noScrollStop" => Some(Interaction::NoScrollStop),
            _ => None,
        }
    }
}

/// Format and interaction style shared by entries, referenced by name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EntryType {
    pub name: String,
    pub color: String,
    pub font_size: u32,
    // Kept as text so an unknown mode is reported against its type name.
    pub interaction: String,
}

impl EntryType {
    pub fn interaction(&self) -> Option<Interaction> {
        Interaction::parse(&self.interaction)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Image {
    pub name: String,
    pub format: String,
    pub data: String,
}

/// Root object of a Garmin checklist `.json` file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistFile {
    pub version: String,
    pub description: String,
    pub custom_fields: Vec<CustomField>,

    pub groups: Vec<Group>,
    pub branch_checklists: Vec<Checklist>,
    pub entry_types: Vec<EntryType>,
    pub images: Vec<Image>,

    #[serde(
        default,
        rename = "a661synoptics",
        skip_serializing_if = "Option::is_none"
    )]
    pub a661_synoptics: Option<Vec<serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legacy_space_encoding: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_checklist: Option<ChecklistRef>,
}

impl ChecklistFile {
    /// First entry type with the given name, if any.
    pub fn entry_type(&self, name: &str) -> Option<&EntryType> {
        self.entry_types.iter().find(|t| t.name == name)
    }
}
