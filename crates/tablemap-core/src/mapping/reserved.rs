use indexmap::IndexSet;

/// Property names that resolve to themselves on every field.
pub const DEFAULT_RESERVED_COLUMNS: &[&str] = &["deleted"];

/// The set of reserved property names.
///
/// A reserved property is stored in a column named after the property alone,
/// never prefixed by its field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedColumns {
    names: IndexSet<String>,
}

impl ReservedColumns {
    /// An empty set. No property bypasses field-name prefixing.
    pub fn none() -> Self {
        Self {
            names: IndexSet::new(),
        }
    }

    pub fn contains(&self, property: &str) -> bool {
        self.names.contains(property)
    }

    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for ReservedColumns {
    fn default() -> Self {
        DEFAULT_RESERVED_COLUMNS.iter().copied().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for ReservedColumns {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}
