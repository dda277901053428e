//! The `codeartifact` sketch item: repository coordinates for registry login.

use serde_json::{json, Value};

use crate::sketches::item::SketchItem;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CodeArtifactSketchItem {
    item: SketchItem,
}

impl CodeArtifactSketchItem {
    pub fn from_value(value: Value) -> Option<Self> {
        SketchItem::from_value(value).map(|item| CodeArtifactSketchItem { item })
    }

    pub fn get_repository(&self) -> Option<String> {
        self.string_field("repository")
    }

    pub fn get_domain(&self) -> Option<String> {
        self.string_field("domain")
    }

    pub fn get_domain_owner(&self) -> Option<String> {
        self.string_field("domain-owner")
    }

    pub fn generate() -> Value {
        json!({
            "repository": "TODO",
            "domain": "TODO",
            "domain-owner": "TODO",
        })
    }

    fn string_field(&self, key: &str) -> Option<String> {
        self.item.get(key).and_then(Value::as_str).map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_item_carries_placeholders() {
        let item = CodeArtifactSketchItem::from_value(CodeArtifactSketchItem::generate()).unwrap();
        assert_eq!(item.get_repository().as_deref(), Some("TODO"));
        assert_eq!(item.get_domain().as_deref(), Some("TODO"));
        assert_eq!(item.get_domain_owner().as_deref(), Some("TODO"));
    }
}
