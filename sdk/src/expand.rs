use serde::Serialize;

/// Kind of one path segment inside an expand item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SegmentKind {
    /// Navigation edge; the only kind that participates in matching.
    Navigation,
    /// Structural property traversed on the way to an edge.
    Property,
    /// Trailing count segment.
    Count,
}

/// One path segment of an expand item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpandSegment {
    pub kind: SegmentKind,
    pub name: String,
}

impl ExpandSegment {
    pub fn navigation(name: impl Into<String>) -> Self {
        Self {
            kind: SegmentKind::Navigation,
            name: name.into(),
        }
    }

    pub fn property(name: impl Into<String>) -> Self {
        Self {
            kind: SegmentKind::Property,
            name: name.into(),
        }
    }

    pub fn count() -> Self {
        Self {
            kind: SegmentKind::Count,
            name: "$count".to_string(),
        }
    }
}

/// One requested expansion: a segment path plus an optional nested option
/// applied when recursing into the matched records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpandItem {
    path: Vec<ExpandSegment>,
    nested: Option<ExpandOption>,
}

impl ExpandItem {
    pub fn new(path: Vec<ExpandSegment>) -> Self {
        Self { path, nested: None }
    }

    /// Item with a single navigation segment, the common case.
    pub fn navigation(name: impl Into<String>) -> Self {
        Self::new(vec![ExpandSegment::navigation(name)])
    }

    pub fn with_nested(mut self, nested: ExpandOption) -> Self {
        self.nested = Some(nested);
        self
    }

    pub fn path(&self) -> &[ExpandSegment] {
        &self.path
    }

    pub fn nested(&self) -> Option<&ExpandOption> {
        self.nested.as_ref()
    }

    /// Whether any navigation segment in the path names this edge.
    pub fn matches_navigation(&self, wire_name: &str) -> bool {
        self.path
            .iter()
            .any(|s| s.kind == SegmentKind::Navigation && s.name == wire_name)
    }
}

/// The caller's declaration of which navigation edges to materialize.
///
/// Arrives pre-parsed, immutable, and is consumed top-down during
/// projection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExpandOption {
    items: Vec<ExpandItem>,
}

impl ExpandOption {
    pub fn new(items: Vec<ExpandItem>) -> Self {
        Self { items }
    }

    /// Option requesting a single navigation edge.
    pub fn edge(name: impl Into<String>) -> Self {
        Self::new(vec![ExpandItem::navigation(name)])
    }

    pub fn with_item(mut self, item: ExpandItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn items(&self) -> &[ExpandItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_segments_match_by_name() {
        let item = ExpandItem::navigation("items");
        assert!(item.matches_navigation("items"));
        assert!(!item.matches_navigation("customer"));
    }

    #[test]
    fn non_navigation_segments_never_match() {
        let item = ExpandItem::new(vec![
            ExpandSegment::property("shipTo"),
            ExpandSegment::count(),
        ]);
        assert!(!item.matches_navigation("shipTo"));
        assert!(!item.matches_navigation("$count"));
    }

    #[test]
    fn deep_paths_match_on_the_navigation_part() {
        let item = ExpandItem::new(vec![
            ExpandSegment::property("shipTo"),
            ExpandSegment::navigation("carrier"),
        ]);
        assert!(item.matches_navigation("carrier"));
    }

    #[test]
    fn nested_options_ride_along() {
        let nested = ExpandOption::edge("lines");
        let item = ExpandItem::navigation("orders").with_nested(nested.clone());
        assert_eq!(item.nested(), Some(&nested));
        assert!(ExpandOption::default().is_empty());
        assert_eq!(ExpandOption::edge("orders").items().len(), 1);
    }
}
