use super::{ReservedColumns, TableMapping};
use crate::storage::FieldStorageDefinition;

/// Configures and constructs a [`TableMapping`].
#[derive(Debug, Clone, Default)]
pub struct Builder {
    /// Property names that are never prefixed with their field name
    reserved: ReservedColumns,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a name to the reserved column set.
    pub fn reserved_column(&mut self, name: &str) -> &mut Self {
        self.reserved.insert(name);
        self
    }

    /// Replaces the reserved column set, including the defaults.
    pub fn reserved_columns<I>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.reserved = names.into_iter().collect();
        self
    }

    /// Builds a mapping seeded with the given field storage definitions.
    ///
    /// Definitions are looked up by name. If two definitions share a name the
    /// later one wins.
    pub fn build<D, I>(&self, definitions: I) -> TableMapping<D>
    where
        D: FieldStorageDefinition,
        I: IntoIterator<Item = D>,
    {
        TableMapping::from_parts(definitions, self.reserved.clone())
    }
}
