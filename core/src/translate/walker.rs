use super::entry::resolve_item;
use super::refs::{branch_checklist, branch_uid, list_uid};
use super::{ConvertOptions, SpacerMode};
use crate::avionics::model::{AvionicsChecklist, BranchList, Group, Item, List, ListChild};
use crate::error::{CoreError, CoreResult};
use crate::garmin::model::{Checklist, ChecklistFile, Entry};
use std::collections::BTreeMap;

/// Walks groups, checklists and entries in document order.
pub fn walk_groups(doc: &ChecklistFile, options: &ConvertOptions) -> CoreResult<AvionicsChecklist> {
    let mut out = AvionicsChecklist::default();
    if let Some(default) = &doc.default_checklist {
        out.default_group_index = Some(default.group);
        out.default_list_index = Some(default.checklist);
    }

    // uid -> "group/checklist" position that first produced it
    let mut seen_uids: BTreeMap<String, String> = BTreeMap::new();

    for (gi, group) in doc.groups.iter().enumerate() {
        tracing::debug!(
            group = %group.name,
            checklists = group.checklists.len(),
            "converting group"
        );
        let mut lists = Vec::with_capacity(group.checklists.len());
        for (ci, checklist) in group.checklists.iter().enumerate() {
            let uid = list_uid(&group.name, &checklist.name);
            if options.detect_uid_collisions {
                let position = format!("groups[{}].checklists[{}]", gi, ci);
                if let Some(first) = seen_uids.get(&uid) {
                    return Err(CoreError::UidCollision {
                        uid,
                        first: first.clone(),
                        second: position,
                    });
                }
                seen_uids.insert(uid.clone(), position);
            }
            lists.push(convert_list(doc, &group.name, checklist, uid, options)?);
        }
        out.groups.push(Group {
            name: group.name.clone(),
            lists,
        });
    }
    Ok(out)
}

fn convert_list(
    doc: &ChecklistFile,
    group_name: &str,
    checklist: &Checklist,
    uid: String,
    options: &ConvertOptions,
) -> CoreResult<List> {
    tracing::debug!(group = %group_name, list = %checklist.name, %uid, "converting list");
    if let Some(alerts) = &checklist.linked_alerts {
        tracing::debug!(
            list = %checklist.name,
            alerts = alerts.len(),
            "dropping linked CAS alerts"
        );
    }

    let mut children = Vec::new();
    for entry in &checklist.entries {
        children.push(ListChild::Item(resolve_item(entry, doc)?));
        if let Some(height) = entry.blanks_below {
            children.push(ListChild::Item(Item::spacer(height)));
        }

        if let Some(branches) = &entry.branches {
            for &index in branches {
                expand_branch(doc, entry, index, options, &mut children)?;
            }
        }
    }

    Ok(List {
        name: checklist.name.clone(),
        uid,
        children,
    })
}

/// Appends the branch container for `index` and, in legacy mode, the
/// spacers keyed off the branching entry.
fn expand_branch(
    doc: &ChecklistFile,
    parent: &Entry,
    index: usize,
    options: &ConvertOptions,
    children: &mut Vec<ListChild>,
) -> CoreResult<()> {
    let branch = branch_checklist(doc, index)?;
    let mut items = Vec::with_capacity(branch.entries.len());
    let mut trailing_spacers = 0usize;

    for branch_entry in &branch.entries {
        items.push(resolve_item(branch_entry, doc)?);
        match options.spacer_mode {
            SpacerMode::Legacy => {
                if parent.blanks_below.is_some() {
                    trailing_spacers += 1;
                }
            }
            SpacerMode::PerEntry => {
                if let Some(height) = branch_entry.blanks_below {
                    items.push(Item::spacer(height));
                }
            }
        }
    }

    children.push(ListChild::Branch(BranchList {
        uid: branch_uid(index, &branch.name),
        name: branch.name.clone(),
        items,
    }));
    if let Some(height) = parent.blanks_below {
        for _ in 0..trailing_spacers {
            children.push(ListChild::Item(Item::spacer(height)));
        }
    }
    Ok(())
}
