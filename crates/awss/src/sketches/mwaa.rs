//! The `mwaa` sketch item: the Airflow environment targeted by the CLI proxy.

use serde_json::{json, Value};

use crate::sketches::item::SketchItem;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MwaaSketchItem {
    item: SketchItem,
}

impl MwaaSketchItem {
    pub fn from_value(value: Value) -> Option<Self> {
        SketchItem::from_value(value).map(|item| MwaaSketchItem { item })
    }

    pub fn get_environment(&self) -> Option<String> {
        self.item
            .get("environment")
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    pub fn generate() -> Value {
        json!({ "environment": "TODO" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_accessor() {
        let item = MwaaSketchItem::from_value(json!({"environment": "data-prod"})).unwrap();
        assert_eq!(item.get_environment().as_deref(), Some("data-prod"));

        let empty = MwaaSketchItem::from_value(json!({})).unwrap();
        assert_eq!(empty.get_environment(), None);
    }
}
