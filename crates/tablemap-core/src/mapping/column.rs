use super::ReservedColumns;
use crate::storage::FieldStorageDefinition;

use indexmap::IndexMap;
use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock},
};

/// Separates field name and property name for base fields.
const BASE_FIELD_SEPARATOR: &str = "__";

/// Separates field name and property name for bundle fields.
const BUNDLE_FIELD_SEPARATOR: &str = "_";

/// The parts of a field's storage definition that decide its column names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum FieldShape {
    /// Exactly one property column
    Single,

    /// Several property columns, shared across bundles
    Base,

    /// Several property columns, bundle-specific
    Bundle,
}

impl FieldShape {
    pub(super) fn of<F>(field: &F) -> Self
    where
        F: FieldStorageDefinition + ?Sized,
    {
        if field.columns().len() == 1 {
            FieldShape::Single
        } else if field.is_base_field() {
            FieldShape::Base
        } else {
            FieldShape::Bundle
        }
    }

    fn slot(self) -> usize {
        match self {
            FieldShape::Single => 0,
            FieldShape::Base => 1,
            FieldShape::Bundle => 2,
        }
    }
}

/// Computes the SQL column holding `property` of the given field.
///
/// The caller has already rejected custom-storage fields.
pub(super) fn column_name<F>(field: &F, property: &str, reserved: &ReservedColumns) -> String
where
    F: FieldStorageDefinition + ?Sized,
{
    if reserved.contains(property) {
        return property.to_string();
    }

    let field_name = field.name();

    let separator = match FieldShape::of(field) {
        FieldShape::Single => return field_name.to_string(),
        FieldShape::Base => BASE_FIELD_SEPARATOR,
        FieldShape::Bundle => BUNDLE_FIELD_SEPARATOR,
    };

    format!("{field_name}{separator}{property}")
}

/// Memoized column names, keyed by field name, field shape and property name.
///
/// The key holds every input of [`column_name`], so two definitions sharing a
/// name but differing in shape never see each other's entries, and concurrent
/// fills racing on the same key store the same value.
#[derive(Debug, Default)]
pub(super) struct ColumnCache {
    fields: RwLock<HashMap<String, [IndexMap<String, String>; 3]>>,
}

impl ColumnCache {
    pub(super) fn get(&self, field_name: &str, shape: FieldShape, property: &str) -> Option<String> {
        let fields = self.fields.read().unwrap_or_else(PoisonError::into_inner);
        fields.get(field_name)?[shape.slot()].get(property).cloned()
    }

    pub(super) fn get_or_insert_with(
        &self,
        field_name: &str,
        shape: FieldShape,
        property: &str,
        f: impl FnOnce() -> String,
    ) -> String {
        if let Some(column) = self.get(field_name, shape, property) {
            return column;
        }

        log::trace!("column cache miss; field={field_name:?} shape={shape:?} property={property:?}");
        let column = f();

        let mut fields = self.fields.write().unwrap_or_else(PoisonError::into_inner);
        fields.entry(field_name.to_string()).or_default()[shape.slot()]
            .insert(property.to_string(), column.clone());

        column
    }

    #[cfg(test)]
    pub(super) fn len(&self) -> usize {
        let fields = self.fields.read().unwrap_or_else(PoisonError::into_inner);
        fields.values().flatten().map(IndexMap::len).sum()
    }
}
