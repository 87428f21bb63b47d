use super::escape_newlines;
use super::refs::{normalize_uid, resolve_branch_uid, resolve_list_uid};
use crate::avionics::model::{Item, ItemKind, ItemType, Layout};
use crate::error::{CoreError, CoreResult};
use crate::garmin::model::{ChecklistFile, ChecklistRef, Entry, EntryType, Interaction};

/// Resolves an entry's type descriptor and its interaction mode.
pub fn resolve_entry_type<'a>(
    entry: &Entry,
    doc: &'a ChecklistFile,
) -> CoreResult<(&'a EntryType, Interaction)> {
    let entry_type = doc
        .entry_type(&entry.type_name)
        .ok_or_else(|| CoreError::UnresolvedType {
            type_name: entry.type_name.clone(),
            entry_text: entry.text.clone(),
        })?;
    let interaction = entry_type
        .interaction()
        .ok_or_else(|| CoreError::UnknownInteraction {
            type_name: entry_type.name.clone(),
            interaction: entry_type.interaction.clone(),
        })?;
    Ok((entry_type, interaction))
}

pub fn item_type_for(interaction: Interaction) -> ItemType {
    match interaction {
        Interaction::Checkbox => ItemType::Actionable,
        Interaction::BranchParent => ItemType::Branch,
        Interaction::Link => ItemType::Link,
        Interaction::ScrollStop => ItemType::Note,
        Interaction::NoScrollStop => ItemType::Title,
    }
}

/// `None` when the color is the default for this interaction.
pub fn item_color(color: &str, interaction: Interaction) -> Option<String> {
    let is_default = match color {
        "white" => true,
        "cyan" => matches!(interaction, Interaction::Link | Interaction::BranchParent),
        _ => false,
    };
    if is_default {
        None
    } else {
        Some(color.to_string())
    }
}

pub fn item_layout(justification: Option<&str>) -> Option<Layout> {
    let j = justification?;
    if j.starts_with("indent") {
        j.chars().last().map(Layout::Indent)
    } else {
        Some(Layout::Justification(j.to_string()))
    }
}

/// Branch indices of a branch-parent entry.
pub fn branch_indices(entry: &Entry) -> CoreResult<&[usize]> {
    entry.branches.as_deref().ok_or_else(|| {
        CoreError::MalformedDocument(format!("branch entry '{}' has no branches", entry.text))
    })
}

/// Target of a link entry.
pub fn link_target(entry: &Entry) -> CoreResult<&ChecklistRef> {
    entry.linked_checklist.as_ref().ok_or_else(|| {
        CoreError::MalformedDocument(format!(
            "link entry '{}' has no linkedChecklist",
            entry.text
        ))
    })
}

/// Builds the single output item for `entry`.
pub fn resolve_item(entry: &Entry, doc: &ChecklistFile) -> CoreResult<Item> {
    let (entry_type, interaction) = resolve_entry_type(entry, doc)?;
    let text = escape_newlines(&entry.text);

    let kind = match interaction {
        Interaction::Checkbox => ItemKind::Actionable {
            label: text,
            action: entry.response.as_deref().map(escape_newlines),
        },
        Interaction::BranchParent => {
            let targets = branch_indices(entry)?
                .iter()
                .map(|&i| resolve_branch_uid(doc, i))
                .collect::<CoreResult<Vec<_>>>()?;
            ItemKind::Branch {
                uid: normalize_uid(&entry.text),
                omit_checkbox: entry.hide_parent_checkbox.unwrap_or(false),
                targets,
                text,
            }
        }
        Interaction::Link => ItemKind::Link {
            target: resolve_list_uid(doc, link_target(entry)?)?,
            text,
        },
        Interaction::ScrollStop => ItemKind::Note { text },
        Interaction::NoScrollStop => ItemKind::Title { text },
    };

    Ok(Item {
        color: item_color(&entry_type.color, interaction),
        layout: item_layout(entry.justification.as_deref()),
        kind,
    })
}
