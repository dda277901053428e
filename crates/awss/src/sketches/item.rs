//! Generic sketch item: a JSON object with typed access primitives.
//!
//! Three recurring shapes are supported on top of plain scalar fields:
//! ordered lists of unique strings, and ordered lists of objects uniquely
//! keyed by an identity field (`Classification`, `name`, `Key`, ...). Every
//! insert enforces at-most-one entry per identity value; replacements are
//! appended at the end of the list, since EMR applies configurations in
//! list order.

use serde_json::{Map, Value};

/// A mutable key-value document backing one sketch item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SketchItem {
    content: Map<String, Value>,
}

impl SketchItem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing JSON object; `None` when the value is not an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(content) => Some(SketchItem { content }),
            _ => None,
        }
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.content)
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.content.clone())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.content.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.content.get(key)
    }

    pub fn put(&mut self, key: &str, value: Value) {
        self.content.insert(key.to_string(), value);
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.content.remove(key)
    }

    fn list(&self, list_name: &str) -> Option<&Vec<Value>> {
        self.content.get(list_name).and_then(Value::as_array)
    }

    fn list_mut(&mut self, list_name: &str) -> &mut Vec<Value> {
        let entry = self
            .content
            .entry(list_name.to_string())
            .or_insert_with(|| Value::Array(vec![]));
        if !entry.is_array() {
            *entry = Value::Array(vec![]);
        }
        entry.as_array_mut().expect("just ensured an array")
    }

    fn identity_matches(item: &Value, identity_field: &str, identity: &str) -> bool {
        item.get(identity_field).and_then(Value::as_str) == Some(identity)
    }

    /// Removes any entry whose `identity_field` equals the new item's, then
    /// appends the new item at the end.
    pub fn put_in_list_dict(&mut self, list_name: &str, identity_field: &str, item: Value) {
        if let Some(identity) = item.get(identity_field).and_then(Value::as_str) {
            let identity = identity.to_string();
            self.remove_in_list_dict(list_name, identity_field, &identity);
        }
        self.list_mut(list_name).push(item);
    }

    pub fn has_in_list_dict(&self, list_name: &str, identity_field: &str, identity: &str) -> bool {
        self.list(list_name)
            .map(|items| {
                items
                    .iter()
                    .any(|item| Self::identity_matches(item, identity_field, identity))
            })
            .unwrap_or(false)
    }

    pub fn get_in_list_dict(
        &self,
        list_name: &str,
        identity_field: &str,
        identity: &str,
    ) -> Option<&Value> {
        self.list(list_name)?
            .iter()
            .find(|item| Self::identity_matches(item, identity_field, identity))
    }

    /// Removes the matching entry if present; a no-op otherwise.
    pub fn remove_in_list_dict(&mut self, list_name: &str, identity_field: &str, identity: &str) {
        if self.has_in_list_dict(list_name, identity_field, identity) {
            self.list_mut(list_name)
                .retain(|item| !Self::identity_matches(item, identity_field, identity));
        }
    }

    pub fn get_list(&self, list_name: &str) -> Vec<Value> {
        self.list(list_name).cloned().unwrap_or_default()
    }

    /// Appends a string to a list, removing any equal entry first.
    pub fn put_in_set(&mut self, list_name: &str, value: &str) {
        self.remove_from_set(list_name, value);
        self.list_mut(list_name).push(Value::String(value.to_string()));
    }

    pub fn remove_from_set(&mut self, list_name: &str, value: &str) {
        if self.has_in_set(list_name, value) {
            self.list_mut(list_name)
                .retain(|item| item.as_str() != Some(value));
        }
    }

    pub fn has_in_set(&self, list_name: &str, value: &str) -> bool {
        self.list(list_name)
            .map(|items| items.iter().any(|item| item.as_str() == Some(value)))
            .unwrap_or(false)
    }

    pub fn get_string_list(&self, list_name: &str) -> Vec<String> {
        self.list(list_name)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalar_fields_roundtrip() {
        let mut item = SketchItem::new();
        assert!(!item.contains("log_uri"));
        assert_eq!(item.get("log_uri"), None);

        item.put("log_uri", json!("s3://bucket/logs"));
        assert!(item.contains("log_uri"));
        assert_eq!(item.get("log_uri"), Some(&json!("s3://bucket/logs")));

        item.remove("log_uri");
        assert!(!item.contains("log_uri"));
    }

    #[test]
    fn put_in_list_dict_deduplicates_by_identity() {
        let mut item = SketchItem::new();
        item.put_in_list_dict("tags", "Key", json!({"Key": "team", "Value": "data"}));
        item.put_in_list_dict("tags", "Key", json!({"Key": "env", "Value": "dev"}));
        item.put_in_list_dict("tags", "Key", json!({"Key": "team", "Value": "ml"}));

        let tags = item.get_list("tags");
        assert_eq!(tags.len(), 2);
        // The replaced entry moves to the end; the untouched one keeps its slot.
        assert_eq!(tags[0]["Key"], "env");
        assert_eq!(tags[1]["Key"], "team");
        assert_eq!(tags[1]["Value"], "ml");
    }

    #[test]
    fn put_in_list_dict_is_idempotent() {
        let mut item = SketchItem::new();
        let tag = json!({"Key": "team", "Value": "data"});
        item.put_in_list_dict("tags", "Key", tag.clone());
        item.put_in_list_dict("tags", "Key", tag.clone());
        assert_eq!(item.get_list("tags"), vec![tag]);
    }

    #[test]
    fn get_and_has_in_list_dict() {
        let mut item = SketchItem::new();
        item.put_in_list_dict(
            "configurations",
            "Classification",
            json!({"Classification": "spark", "Properties": {}}),
        );

        assert!(item.has_in_list_dict("configurations", "Classification", "spark"));
        assert!(!item.has_in_list_dict("configurations", "Classification", "yarn-site"));
        assert_eq!(
            item.get_in_list_dict("configurations", "Classification", "spark")
                .unwrap()["Classification"],
            "spark"
        );
        assert_eq!(
            item.get_in_list_dict("configurations", "Classification", "yarn-site"),
            None
        );
    }

    #[test]
    fn remove_in_list_dict_on_absent_entry_is_a_noop() {
        let mut item = SketchItem::new();
        item.remove_in_list_dict("tags", "Key", "team");
        assert!(item.get_list("tags").is_empty());
        // The list key itself is not created by the probe.
        assert!(!item.contains("tags"));
    }

    #[test]
    fn set_semantics_for_string_lists() {
        let mut item = SketchItem::new();
        item.put_in_set("subnets", "subnet-1");
        item.put_in_set("subnets", "subnet-2");
        item.put_in_set("subnets", "subnet-1");

        assert_eq!(item.get_string_list("subnets"), vec!["subnet-2", "subnet-1"]);
        assert!(item.has_in_set("subnets", "subnet-2"));

        item.remove_from_set("subnets", "subnet-2");
        assert_eq!(item.get_string_list("subnets"), vec!["subnet-1"]);
    }

    #[test]
    fn from_value_rejects_non_objects() {
        assert!(SketchItem::from_value(json!([1, 2])).is_none());
        assert!(SketchItem::from_value(json!("emr")).is_none());
        assert!(SketchItem::from_value(json!({"a": 1})).is_some());
    }
}
