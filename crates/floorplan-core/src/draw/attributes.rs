//! Semantic `data-*` attributes attached to exported primitives.
//!
//! These attributes are a stable contract for tooling that parses the
//! exported document, so keys are written exactly as given and in insertion
//! order.

/// Ordered list of `data-*` attributes.
///
/// # Examples
///
/// ```
/// # use floorplan_core::draw::DataAttributes;
/// let attributes = DataAttributes::new()
///     .with("element-type", "item")
///     .with("element-id", "desk-1");
///
/// assert_eq!(attributes.get("element-type"), Some("item"));
/// assert_eq!(attributes.get("missing"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataAttributes {
    entries: Vec<(&'static str, String)>,
}

impl DataAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `data-{key}`, replacing any previous value for the same key.
    pub fn with(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Adds `data-{key}` only when `value` is non-empty.
    pub fn with_non_empty(self, key: &'static str, value: &str) -> Self {
        if value.is_empty() {
            self
        } else {
            self.with(key, value)
        }
    }

    pub fn set(&mut self, key: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Returns `self` followed by the entries of `other`; keys in `other` win.
    pub fn merged(&self, other: &DataAttributes) -> DataAttributes {
        let mut merged = self.clone();
        for (key, value) in &other.entries {
            merged.set(key, value.clone());
        }
        merged
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(attribute name, value)` pairs with the `data-` prefix applied.
    pub fn iter(&self) -> impl Iterator<Item = (String, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (format!("data-{key}"), value.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_existing_key() {
        let attributes = DataAttributes::new()
            .with("availability", "available")
            .with("availability", "unavailable");

        assert_eq!(attributes.get("availability"), Some("unavailable"));
        assert_eq!(attributes.iter().count(), 1);
    }

    #[test]
    fn test_with_non_empty_skips_empty_values() {
        let attributes = DataAttributes::new().with_non_empty("custom-id", "");
        assert!(attributes.is_empty());
    }

    #[test]
    fn test_merged_keeps_order_and_overrides() {
        let base = DataAttributes::new()
            .with("element-type", "item")
            .with("element-id", "i1");
        let own = DataAttributes::new()
            .with("part", "chair")
            .with("element-id", "override");

        let merged = base.merged(&own);
        let keys: Vec<_> = merged.iter().map(|(key, _)| key).collect();
        assert_eq!(
            keys,
            vec!["data-element-type", "data-element-id", "data-part"]
        );
        assert_eq!(merged.get("element-id"), Some("override"));
    }

    #[test]
    fn test_iter_prefixes_keys() {
        let attributes = DataAttributes::new().with("line-type", "wall");
        let pairs: Vec<_> = attributes.iter().collect();
        assert_eq!(pairs, vec![("data-line-type".to_string(), "wall")]);
    }
}
