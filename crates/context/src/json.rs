//! Read-only path queries over free-form JSON payloads.

use serde_json::Value;

/// Result of parsing or querying a JSON document.
///
/// Parsing is lenient: bytes that are not valid JSON give a result that
/// does not exist rather than an error.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JsonQuery {
    value: Option<Value>,
}

impl JsonQuery {
    /// Parse a JSON document.
    pub fn parse(bytes: &[u8]) -> Self {
        Self {
            value: serde_json::from_slice(bytes).ok(),
        }
    }

    fn missing() -> Self {
        Self { value: None }
    }

    fn found(value: Value) -> Self {
        Self { value: Some(value) }
    }

    /// Look up a dot-separated path such as `"owner.name"` or `"holders.0"`.
    ///
    /// Array elements are addressed by index, `#` yields an array's length,
    /// and `\.` matches a literal dot inside a field name.
    pub fn get(&self, path: &str) -> JsonQuery {
        let Some(mut current) = self.value.as_ref() else {
            return Self::missing();
        };

        let segments = split_path(path);
        for (i, segment) in segments.iter().enumerate() {
            if segment == "#" {
                return match current {
                    Value::Array(items) if i + 1 == segments.len() => {
                        Self::found(Value::from(items.len()))
                    }
                    _ => Self::missing(),
                };
            }

            let next = match current {
                Value::Object(map) => map.get(segment.as_str()),
                Value::Array(items) => segment
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| items.get(index)),
                _ => None,
            };
            match next {
                Some(value) => current = value,
                None => return Self::missing(),
            }
        }

        Self::found(current.clone())
    }

    /// Whether the document or path resolved to a value (`null` included).
    pub fn exists(&self) -> bool {
        self.value.is_some()
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn as_str(&self) -> Option<&str> {
        self.value.as_ref()?.as_str()
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.value.as_ref()?.as_i64()
    }

    pub fn as_u64(&self) -> Option<u64> {
        self.value.as_ref()?.as_u64()
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.value.as_ref()?.as_f64()
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.value.as_ref()?.as_bool()
    }

    /// Elements of an array; empty for anything else.
    pub fn array(&self) -> Vec<JsonQuery> {
        match &self.value {
            Some(Value::Array(items)) => items.iter().cloned().map(Self::found).collect(),
            _ => Vec::new(),
        }
    }
}

fn split_path(path: &str) -> Vec<String> {
    let mut segments = Vec::new();
    if path.is_empty() {
        return segments;
    }

    let mut current = String::new();
    let mut chars = path.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
            }
            '.' => segments.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    segments.push(current);
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &[u8] = br#"{
        "owner": {"name": "alice", "age": 30},
        "holders": ["bob", "carol"],
        "paused": false,
        "rate": 1.5,
        "fee.bps": 25,
        "memo": null
    }"#;

    #[test]
    fn test_nested_lookup() {
        let doc = JsonQuery::parse(DOC);
        assert_eq!(doc.get("owner.name").as_str(), Some("alice"));
        assert_eq!(doc.get("owner.age").as_u64(), Some(30));
        assert_eq!(doc.get("owner.age").as_i64(), Some(30));
        assert_eq!(doc.get("paused").as_bool(), Some(false));
        assert_eq!(doc.get("rate").as_f64(), Some(1.5));
    }

    #[test]
    fn test_arrays() {
        let doc = JsonQuery::parse(DOC);
        assert_eq!(doc.get("holders.1").as_str(), Some("carol"));
        assert_eq!(doc.get("holders.#").as_u64(), Some(2));
        assert!(!doc.get("holders.2").exists());
        assert!(!doc.get("holders.x").exists());

        let holders: Vec<_> = doc
            .get("holders")
            .array()
            .iter()
            .filter_map(|h| h.as_str().map(str::to_string))
            .collect();
        assert_eq!(holders, vec!["bob", "carol"]);
        assert!(doc.get("owner").array().is_empty());
    }

    #[test]
    fn test_escaped_dot() {
        let doc = JsonQuery::parse(DOC);
        assert_eq!(doc.get(r"fee\.bps").as_u64(), Some(25));
        assert!(!doc.get("fee.bps").exists());
    }

    #[test]
    fn test_missing_and_null() {
        let doc = JsonQuery::parse(DOC);
        assert!(!doc.get("owner.email").exists());
        assert!(!doc.get("owner.name.first").exists());
        assert!(doc.get("memo").exists());
        assert_eq!(doc.get("memo").value(), Some(&Value::Null));
    }

    #[test]
    fn test_invalid_json() {
        let doc = JsonQuery::parse(b"not json");
        assert!(!doc.exists());
        assert!(!doc.get("anything").exists());
    }

    #[test]
    fn test_empty_path_is_document() {
        let doc = JsonQuery::parse(b"42");
        assert_eq!(doc.get("").as_u64(), Some(42));
    }
}
