//! Tests for the serde snapshot of a tag tree.

use htmltag::TagNode;
use serde_json::json;

#[test]
fn test_snapshot_shape() {
    let mut span = TagNode::new("span").unwrap();
    span.append_content("hi");

    let mut div = TagNode::new("div").unwrap();
    div.set_attribute("ID", "main")
        .unwrap()
        .add_class("box")
        .unwrap();
    div.append_content(span);

    let value = serde_json::to_value(&div).unwrap();
    assert_eq!(
        value,
        json!({
            "tag_type": "div",
            "attributes": { "id": "main", "class": "box" },
            "content": [
                {
                    "Tag": {
                        "tag_type": "span",
                        "attributes": {},
                        "content": [{ "Text": "hi" }],
                        "closing_tag": true,
                        "xhtml_encoding": false,
                        "tag_prefix": "\t"
                    }
                }
            ],
            "closing_tag": true,
            "xhtml_encoding": false,
            "tag_prefix": "\t"
        })
    );
}

#[test]
fn test_snapshot_keeps_attribute_order() {
    let mut tag = TagNode::new("input").unwrap();
    tag.set_attribute("type", "text")
        .unwrap()
        .set_attribute("name", "q")
        .unwrap()
        .set_attribute("autofocus", "")
        .unwrap();

    let text = serde_json::to_string(tag.list_attributes()).unwrap();
    assert_eq!(text, r#"{"type":"text","name":"q","autofocus":""}"#);
}
