use super::model::{AvionicsChecklist, BranchList, Item, ItemKind, Layout, List, ListChild};
use super::xml::XmlElement;

pub fn render_checklist(checklist: &AvionicsChecklist) -> XmlElement {
    let mut root = XmlElement::new("Checklist");
    if let Some(g) = checklist.default_group_index {
        root.set_attr("default-group-index", g.to_string());
    }
    if let Some(l) = checklist.default_list_index {
        root.set_attr("default-list-index", l.to_string());
    }
    for group in &checklist.groups {
        let mut group_el = XmlElement::new("Group").attr("name", group.name.as_str());
        for list in &group.lists {
            group_el.push(render_list(list));
        }
        root.push(group_el);
    }
    root
}

pub fn render_checklist_xml(checklist: &AvionicsChecklist) -> String {
    render_checklist(checklist).to_pretty_string()
}

fn render_list(list: &List) -> XmlElement {
    let mut el = XmlElement::new("List")
        .attr("name", list.name.as_str())
        .attr("uid", list.uid.as_str());
    for child in &list.children {
        match child {
            ListChild::Item(item) => el.push(render_item(item)),
            ListChild::Branch(branch) => el.push(render_branch_list(branch)),
        }
    }
    el
}

fn render_branch_list(branch: &BranchList) -> XmlElement {
    let mut el = XmlElement::new("Branch")
        .attr("uid", branch.uid.as_str())
        .attr("name", branch.name.as_str());
    for item in &branch.items {
        el.push(render_item(item));
    }
    el
}

pub fn render_item(item: &Item) -> XmlElement {
    let mut el = XmlElement::new("Item").attr("type", item.item_type().as_str());
    if let Some(color) = &item.color {
        el.set_attr("color", color.as_str());
    }
    match &item.layout {
        Some(Layout::Indent(level)) => el.set_attr("indent", level.to_string()),
        Some(Layout::Justification(j)) => el.set_attr("justification", j.as_str()),
        None => {}
    }

    match &item.kind {
        ItemKind::Actionable { label, action } => {
            el.push(XmlElement::with_text("LabelText", label.as_str()));
            if let Some(action) = action {
                el.push(XmlElement::with_text("ActionText", action.as_str()));
            }
        }
        ItemKind::Branch {
            uid,
            omit_checkbox,
            targets,
            text,
        } => {
            el.set_attr("uid", uid.as_str());
            el.set_attr("auto-link", "true");
            if *omit_checkbox {
                el.set_attr("omit-checkbox", "true");
            }
            for target in targets {
                el.push(
                    XmlElement::with_text("Branch", target.as_str()).attr("logic", "sufficient"),
                );
            }
            el.push(XmlElement::with_text("Text", text.as_str()));
        }
        ItemKind::Link { target, text } => {
            el.push(XmlElement::with_text("Target", target.as_str()));
            el.push(XmlElement::with_text("Text", text.as_str()));
        }
        ItemKind::Note { text } | ItemKind::Title { text } => {
            el.push(XmlElement::with_text("Text", text.as_str()));
        }
        ItemKind::Spacer { height } => el.set_attr("height", height.to_string()),
    }
    el
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branch_item_attribute_order() {
        let item = Item {
            color: Some("green".to_string()),
            layout: Some(Layout::Indent('2')),
            kind: ItemKind::Branch {
                uid: "apu-abnormal".to_string(),
                omit_checkbox: true,
                targets: vec!["0-apu-fire".to_string()],
                text: "APU Abnormal".to_string(),
            },
        };
        let el = render_item(&item);
        let keys: Vec<&str> = el.attributes.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "type",
                "color",
                "indent",
                "uid",
                "auto-link",
                "omit-checkbox"
            ]
        );
        assert_eq!(el.children[0].get_attr("logic"), Some("sufficient"));
        assert_eq!(el.children[0].text.as_deref(), Some("0-apu-fire"));
        assert_eq!(el.children[1].name, "Text");
    }

    #[test]
    fn spacer_has_type_and_height_only() {
        let el = render_item(&Item::spacer(3));
        assert_eq!(
            el.attributes,
            vec![
                ("type".to_string(), "spacer".to_string()),
                ("height".to_string(), "3".to_string())
            ]
        );
        assert!(el.children.is_empty());
    }
}
