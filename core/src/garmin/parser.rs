use super::model::{ChecklistFile, Entry, Interaction};
use crate::error::{CoreError, CoreResult};
use crate::translate::entry::{branch_indices, link_target, resolve_entry_type};
use crate::translate::refs::{branch_checklist, linked_checklist};
use serde_json::error::Category;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

pub fn read_checklist_file(path: impl AsRef<Path>) -> CoreResult<ChecklistFile> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "reading checklist json");
    let json = fs::read_to_string(path)?;
    parse_checklist_file(&json)
}

/// Deserializes and validates every reference the translator will follow.
pub fn parse_checklist_file(json: &str) -> CoreResult<ChecklistFile> {
    let doc: ChecklistFile = serde_json::from_str(json).map_err(|e| match e.classify() {
        Category::Data => CoreError::MalformedDocument(e.to_string()),
        _ => CoreError::Json(e),
    })?;
    validate_references(&doc)?;
    Ok(doc)
}

/// Fails on the first unresolvable entry type, interaction or index among the
/// group entries and the branch checklists they expand.
/// Features with no avionics counterpart are only logged.
pub fn validate_references(doc: &ChecklistFile) -> CoreResult<()> {
    let mut names = BTreeSet::new();
    for t in &doc.entry_types {
        if !names.insert(t.name.as_str()) {
            tracing::warn!(
                entry_type = %t.name,
                "duplicate entry type name, first definition wins"
            );
        }
    }

    if let Some(default) = &doc.default_checklist {
        let in_range = doc
            .groups
            .get(default.group)
            .is_some_and(|g| default.checklist < g.checklists.len());
        if !in_range {
            tracing::warn!(
                group = default.group,
                checklist = default.checklist,
                "defaultChecklist does not point at an existing checklist"
            );
        }
    }

    // Branch checklists are only walked when an entry expands them.
    let mut expanded = BTreeSet::new();
    let group_entries = doc
        .groups
        .iter()
        .flat_map(|g| &g.checklists)
        .flat_map(|c| &c.entries);
    for entry in group_entries {
        validate_entry(entry, doc)?;
        for &index in entry.branches.iter().flatten() {
            branch_checklist(doc, index)?;
            expanded.insert(index);
        }
    }
    for index in expanded {
        for entry in &branch_checklist(doc, index)?.entries {
            validate_entry(entry, doc)?;
        }
    }
    Ok(())
}

fn validate_entry(entry: &Entry, doc: &ChecklistFile) -> CoreResult<()> {
    let (_, interaction) = resolve_entry_type(entry, doc)?;
    match interaction {
        Interaction::BranchParent => {
            let indices = branch_indices(entry)?;
            for &index in indices {
                branch_checklist(doc, index)?;
            }
            if entry.hide_parent_checkbox == Some(true) && indices.len() < 2 {
                tracing::warn!(
                    entry = %entry.text,
                    "hideParentCheckbox set on a branch entry with fewer than two branches"
                );
            }
        }
        Interaction::Link => {
            linked_checklist(doc, link_target(entry)?)?;
        }
        Interaction::Checkbox | Interaction::ScrollStop | Interaction::NoScrollStop => {}
    }

    if entry.image.is_some() {
        tracing::warn!(entry = %entry.text, "entry image is not supported, dropped");
    }
    if entry.linked_synoptic_page.is_some() || entry.fallback_text.is_some() {
        tracing::warn!(entry = %entry.text, "synoptic page link is not supported, dropped");
    }
    Ok(())
}
