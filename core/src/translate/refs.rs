use crate::error::{CoreError, CoreResult};
use crate::garmin::model::{Checklist, ChecklistFile, ChecklistRef};

/// Spaces to hyphens, then lowercase.
pub fn normalize_uid(text: &str) -> String {
    text.replace(' ', "-").to_lowercase()
}

pub fn list_uid(group_name: &str, checklist_name: &str) -> String {
    normalize_uid(&format!("{}-{}", group_name, checklist_name))
}

pub fn branch_uid(index: usize, branch_name: &str) -> String {
    format!("{}-{}", index, normalize_uid(branch_name))
}

pub fn branch_checklist(doc: &ChecklistFile, index: usize) -> CoreResult<&Checklist> {
    doc.branch_checklists
        .get(index)
        .ok_or(CoreError::IndexOutOfRange {
            what: "branch checklist",
            index,
            len: doc.branch_checklists.len(),
        })
}

/// Identifier of the branch checklist at `index`.
pub fn resolve_branch_uid(doc: &ChecklistFile, index: usize) -> CoreResult<String> {
    let branch = branch_checklist(doc, index)?;
    Ok(branch_uid(index, &branch.name))
}

pub fn linked_checklist<'a>(
    doc: &'a ChecklistFile,
    link: &ChecklistRef,
) -> CoreResult<(&'a str, &'a Checklist)> {
    let group = doc
        .groups
        .get(link.group)
        .ok_or(CoreError::IndexOutOfRange {
            what: "linked group",
            index: link.group,
            len: doc.groups.len(),
        })?;
    let checklist = group
        .checklists
        .get(link.checklist)
        .ok_or(CoreError::IndexOutOfRange {
            what: "linked checklist",
            index: link.checklist,
            len: group.checklists.len(),
        })?;
    Ok((group.name.as_str(), checklist))
}

/// List identifier of the checklist a link entry points at.
pub fn resolve_list_uid(doc: &ChecklistFile, link: &ChecklistRef) -> CoreResult<String> {
    let (group_name, checklist) = linked_checklist(doc, link)?;
    Ok(list_uid(group_name, &checklist.name))
}
