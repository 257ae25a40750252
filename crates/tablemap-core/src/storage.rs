use std::sync::Arc;

/// Storage metadata for a single entity field.
///
/// This is the only view the table mapping has of a field. Everything else
/// about the field (its type, cardinality, settings) belongs to the entity
/// field subsystem and is not consulted when computing names.
pub trait FieldStorageDefinition {
    /// The field name. Non-empty and stable for the lifetime of the schema.
    fn name(&self) -> &str;

    /// Returns `true` if the field's storage is shared across all bundles of
    /// the entity type, `false` for bundle-specific storage.
    fn is_base_field(&self) -> bool;

    /// Property names the field decomposes into, in declared order.
    fn columns(&self) -> &[String];

    /// Returns `true` if the field persists itself outside the mapped tables.
    fn has_custom_storage(&self) -> bool;
}

impl<T: FieldStorageDefinition + ?Sized> FieldStorageDefinition for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_base_field(&self) -> bool {
        (**self).is_base_field()
    }

    fn columns(&self) -> &[String] {
        (**self).columns()
    }

    fn has_custom_storage(&self) -> bool {
        (**self).has_custom_storage()
    }
}

impl<T: FieldStorageDefinition + ?Sized> FieldStorageDefinition for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_base_field(&self) -> bool {
        (**self).is_base_field()
    }

    fn columns(&self) -> &[String] {
        (**self).columns()
    }

    fn has_custom_storage(&self) -> bool {
        (**self).has_custom_storage()
    }
}

/// An owned field storage definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldStorage {
    /// Field name
    pub name: String,

    /// Shared across bundles (`true`) or bundle-specific (`false`)
    pub base_field: bool,

    /// Property names, in declared order
    pub columns: Vec<String>,

    /// The field manages its own persistence
    pub custom_storage: bool,
}

impl FieldStorage {
    /// A base field with the given property columns.
    pub fn base<I>(name: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::new(name, true, columns)
    }

    /// A bundle field with the given property columns.
    pub fn bundle<I>(name: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::new(name, false, columns)
    }

    fn new<I>(name: impl Into<String>, base_field: bool, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            name: name.into(),
            base_field,
            columns: columns.into_iter().map(Into::into).collect(),
            custom_storage: false,
        }
    }

    pub fn custom_storage(mut self, custom_storage: bool) -> Self {
        self.custom_storage = custom_storage;
        self
    }
}

impl FieldStorageDefinition for FieldStorage {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_base_field(&self) -> bool {
        self.base_field
    }

    fn columns(&self) -> &[String] {
        &self.columns
    }

    fn has_custom_storage(&self) -> bool {
        self.custom_storage
    }
}
