use gcl_core::avionics::model::{Item, ItemKind, ItemType, ListChild};
use gcl_core::garmin::model::ChecklistFile;
use gcl_core::{convert_document, ConversionSummary, ConvertOptions, CoreError, SpacerMode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn document(groups: Value, branch_checklists: Value) -> ChecklistFile {
    serde_json::from_value(json!({
        "version": "1",
        "description": "walker",
        "customFields": [],
        "groups": groups,
        "branchChecklists": branch_checklists,
        "entryTypes": [
            {"name": "Action", "color": "white", "fontSize": 12, "interaction": "checkbox"},
            {"name": "Branch", "color": "cyan", "fontSize": 12, "interaction": "branchParent"},
            {"name": "Note", "color": "white", "fontSize": 12, "interaction": "scrollStop"}
        ],
        "images": []
    }))
    .unwrap()
}

fn apu_document() -> ChecklistFile {
    document(
        json!([{"name": "Abnormal", "checklists": [{"name": "APU", "entries": [
            {"text": "APU Abnormal", "type": "Branch", "branches": [0], "blanksBelow": 2},
            {"text": "Done", "type": "Note"}
        ]}]}]),
        json!([{"name": "APU Fire", "entries": [
            {"text": "APU Master", "type": "Action", "response": "Off"},
            {"text": "Land ASAP", "type": "Note", "blanksBelow": 1}
        ]}]),
    )
}

fn types(children: &[ListChild]) -> Vec<String> {
    children
        .iter()
        .map(|c| match c {
            ListChild::Item(item) => item.item_type().as_str().to_string(),
            ListChild::Branch(b) => format!("Branch:{}", b.uid),
        })
        .collect()
}

#[test]
fn groups_and_lists_keep_order_and_names() {
    let doc = document(
        json!([
            {"name": "Normal Procedures", "checklists": [
                {"name": "Before Start", "entries": [{"text": "a", "type": "Action"}]},
                {"name": "Taxi", "entries": [{"text": "b", "type": "Action"}, {"text": "c", "type": "Note"}]}
            ]},
            {"name": "Emergency", "checklists": [
                {"name": "Engine Fire", "entries": []}
            ]}
        ]),
        json!([]),
    );
    let out = convert_document(&doc, &ConvertOptions::default()).unwrap();
    assert_eq!(out.default_group_index, None);
    let names: Vec<&str> = out.groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Normal Procedures", "Emergency"]);
    let uids: Vec<&str> = out
        .groups
        .iter()
        .flat_map(|g| &g.lists)
        .map(|l| l.uid.as_str())
        .collect();
    assert_eq!(
        uids,
        vec![
            "normal-procedures-before-start",
            "normal-procedures-taxi",
            "emergency-engine-fire"
        ]
    );
    assert_eq!(out.groups[0].lists[1].items().count(), 2);
}

#[test]
fn default_checklist_sets_root_indices() {
    let mut doc = document(json!([]), json!([]));
    doc.default_checklist = Some(gcl_core::garmin::model::ChecklistRef {
        group: 1,
        checklist: 3,
    });
    let out = convert_document(&doc, &ConvertOptions::default()).unwrap();
    assert_eq!(out.default_group_index, Some(1));
    assert_eq!(out.default_list_index, Some(3));
}

#[test]
fn spacer_follows_entry_with_blanks_below() {
    let doc = document(
        json!([{"name": "G", "checklists": [{"name": "L", "entries": [
            {"text": "a", "type": "Action", "blanksBelow": 3},
            {"text": "b", "type": "Action"}
        ]}]}]),
        json!([]),
    );
    let out = convert_document(&doc, &ConvertOptions::default()).unwrap();
    let list = &out.groups[0].lists[0];
    assert_eq!(
        types(&list.children),
        vec!["actionable", "spacer", "actionable"]
    );
    assert_eq!(list.children[1], ListChild::Item(Item::spacer(3)));
}

#[test]
fn legacy_branch_expansion_uses_outer_spacer_height() {
    let out = convert_document(&apu_document(), &ConvertOptions::default()).unwrap();
    let list = &out.groups[0].lists[0];
    assert_eq!(
        types(&list.children),
        vec![
            "branch",
            "spacer",
            "Branch:0-apu-fire",
            "spacer",
            "spacer",
            "note"
        ]
    );
    for i in [1, 3, 4] {
        assert_eq!(list.children[i], ListChild::Item(Item::spacer(2)));
    }

    let branch = list.branches().next().unwrap();
    assert_eq!(branch.name, "APU Fire");
    let inner: Vec<ItemType> = branch.items.iter().map(|i| i.item_type()).collect();
    assert_eq!(inner, vec![ItemType::Actionable, ItemType::Note]);
}

#[test]
fn per_entry_spacers_stay_inside_branch() {
    let options = ConvertOptions {
        spacer_mode: SpacerMode::PerEntry,
        ..Default::default()
    };
    let out = convert_document(&apu_document(), &options).unwrap();
    let list = &out.groups[0].lists[0];
    assert_eq!(
        types(&list.children),
        vec!["branch", "spacer", "Branch:0-apu-fire", "note"]
    );
    let branch = list.branches().next().unwrap();
    assert_eq!(branch.items.len(), 3);
    assert_eq!(branch.items[2], Item::spacer(1));
}

#[test]
fn branch_item_text_matches_container_uid() {
    let out = convert_document(&apu_document(), &ConvertOptions::default()).unwrap();
    let list = &out.groups[0].lists[0];
    let first = list.items().next().unwrap();
    let container = list.branches().next().unwrap();
    match &first.kind {
        ItemKind::Branch { targets, uid, .. } => {
            assert_eq!(uid, "apu-abnormal");
            assert_eq!(targets, &vec![container.uid.clone()]);
        }
        other => panic!("expected branch item, got {:?}", other),
    }
}

#[test]
fn summary_counts_items_spacers_and_branches() {
    let out = convert_document(&apu_document(), &ConvertOptions::default()).unwrap();
    assert_eq!(
        ConversionSummary::of(&out),
        ConversionSummary {
            groups: 1,
            lists: 1,
            items: 4,
            spacers: 3,
            branch_containers: 1,
        }
    );
}

#[test]
fn colliding_list_uids_are_reported() {
    let doc = document(
        json!([{"name": "Normal", "checklists": [
            {"name": "Engine Start", "entries": []},
            {"name": "engine start", "entries": []}
        ]}]),
        json!([]),
    );
    match convert_document(&doc, &ConvertOptions::default()) {
        Err(CoreError::UidCollision { uid, first, second }) => {
            assert_eq!(uid, "normal-engine-start");
            assert_eq!(first, "groups[0].checklists[0]");
            assert_eq!(second, "groups[0].checklists[1]");
        }
        other => panic!("expected UidCollision, got {:?}", other),
    }

    let lenient = ConvertOptions {
        detect_uid_collisions: false,
        ..Default::default()
    };
    let out = convert_document(&doc, &lenient).unwrap();
    assert_eq!(out.groups[0].lists[0].uid, out.groups[0].lists[1].uid);
}

#[test]
fn repeated_branch_item_uids_across_lists_are_allowed() {
    let doc = document(
        json!([{"name": "G", "checklists": [
            {"name": "Left", "entries": [{"text": "Gear Unsafe", "type": "Branch", "branches": [0]}]},
            {"name": "Right", "entries": [{"text": "Gear Unsafe", "type": "Branch", "branches": [0]}]}
        ]}]),
        json!([{"name": "Gear", "entries": []}]),
    );
    let out = convert_document(&doc, &ConvertOptions::default()).unwrap();
    let uids: Vec<String> = out.groups[0]
        .lists
        .iter()
        .flat_map(|l| l.items())
        .filter_map(|i| match &i.kind {
            ItemKind::Branch { uid, .. } => Some(uid.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(uids, vec!["gear-unsafe", "gear-unsafe"]);
}

#[test]
fn missing_branch_checklist_aborts_walk() {
    let doc = document(
        json!([{"name": "G", "checklists": [{"name": "L", "entries": [
            {"text": "x", "type": "Branch", "branches": [5]}
        ]}]}]),
        json!([]),
    );
    assert!(matches!(
        convert_document(&doc, &ConvertOptions::default()),
        Err(CoreError::IndexOutOfRange { index: 5, .. })
    ));
}
