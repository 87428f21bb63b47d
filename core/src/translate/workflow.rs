use super::walker::walk_groups;
use super::ConvertOptions;
use crate::avionics::model::{AvionicsChecklist, ItemType, ListChild};
use crate::avionics::render::render_checklist_xml;
use crate::error::CoreResult;
use crate::garmin::model::ChecklistFile;
use crate::garmin::parser::{parse_checklist_file, read_checklist_file};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConversionSummary {
    pub groups: usize,
    pub lists: usize,
    pub items: usize,
    pub spacers: usize,
    pub branch_containers: usize,
}

impl ConversionSummary {
    pub fn of(checklist: &AvionicsChecklist) -> Self {
        let mut s = ConversionSummary {
            groups: checklist.groups.len(),
            ..Default::default()
        };
        for list in checklist.groups.iter().flat_map(|g| &g.lists) {
            s.lists += 1;
            for child in &list.children {
                let items = match child {
                    ListChild::Item(item) => std::slice::from_ref(item),
                    ListChild::Branch(branch) => {
                        s.branch_containers += 1;
                        branch.items.as_slice()
                    }
                };
                for item in items {
                    if item.item_type() == ItemType::Spacer {
                        s.spacers += 1;
                    } else {
                        s.items += 1;
                    }
                }
            }
        }
        s
    }
}

/// Translates a loaded document into the avionics checklist tree.
pub fn convert_document(
    doc: &ChecklistFile,
    options: &ConvertOptions,
) -> CoreResult<AvionicsChecklist> {
    let checklist = walk_groups(doc, options)?;
    let summary = ConversionSummary::of(&checklist);
    tracing::info!(
        groups = summary.groups,
        lists = summary.lists,
        items = summary.items,
        "checklist converted"
    );
    Ok(checklist)
}

/// JSON text in, pretty-printed XML text out.
pub fn convert_str(json: &str, options: &ConvertOptions) -> CoreResult<String> {
    let doc = parse_checklist_file(json)?;
    let checklist = convert_document(&doc, options)?;
    Ok(render_checklist_xml(&checklist))
}

/// Nothing is written unless the whole conversion succeeds.
pub fn convert_file(
    json_path: impl AsRef<Path>,
    xml_path: impl AsRef<Path>,
    options: &ConvertOptions,
) -> CoreResult<ConversionSummary> {
    let doc = read_checklist_file(json_path)?;
    let checklist = convert_document(&doc, options)?;
    let xml = render_checklist_xml(&checklist);

    let xml_path = xml_path.as_ref();
    if let Some(parent) = xml_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(xml_path, xml)?;
    tracing::debug!(path = %xml_path.display(), "wrote xml");
    Ok(ConversionSummary::of(&checklist))
}
