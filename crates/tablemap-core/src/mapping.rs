mod builder;
pub use builder::Builder;

mod column;
use column::{ColumnCache, FieldShape};

mod reserved;
pub use reserved::{ReservedColumns, DEFAULT_RESERVED_COLUMNS};

mod table;
use table::Table;

use crate::storage::{FieldStorage, FieldStorageDefinition};
use crate::{Error, Result};
use indexmap::IndexMap;

/// Defines the correspondence between entity fields and SQL tables and
/// columns.
///
/// The mapping is populated by the storage layer during schema setup and is
/// only queried afterwards. It records which tables exist, which fields and
/// extra columns each table stores, and computes the column name holding each
/// field property.
///
/// The storage definitions supplied at construction are the source of
/// per-field metadata and are looked up by field name. Registering a field
/// name on a table does not require a matching definition; fields without one
/// simply contribute no columns.
#[derive(Debug)]
pub struct TableMapping<D = FieldStorage> {
    /// Field storage definitions indexed by field name
    definitions: IndexMap<String, D>,

    /// Registered tables, in first-registration order
    tables: IndexMap<String, Table>,

    /// Property names resolved without a field prefix
    reserved: ReservedColumns,

    /// Resolved column names
    cache: ColumnCache,
}

impl TableMapping {
    pub fn builder() -> Builder {
        Builder::default()
    }
}

impl<D: FieldStorageDefinition> TableMapping<D> {
    /// Creates a mapping with the default reserved columns.
    pub fn new(definitions: impl IntoIterator<Item = D>) -> Self {
        Self::from_parts(definitions, ReservedColumns::default())
    }

    pub(crate) fn from_parts(
        definitions: impl IntoIterator<Item = D>,
        reserved: ReservedColumns,
    ) -> Self {
        let definitions = definitions
            .into_iter()
            .map(|definition| (definition.name().to_string(), definition))
            .collect();

        Self {
            definitions,
            tables: IndexMap::new(),
            reserved,
            cache: ColumnCache::default(),
        }
    }

    /// Sets the fields stored in `table`, replacing any previous list.
    ///
    /// The table is registered if it is not known yet.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `table` is empty.
    pub fn set_field_names<I>(&mut self, table: &str, field_names: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let field_names: Vec<String> = field_names.into_iter().map(Into::into).collect();
        log::debug!("set field names; table={table:?} fields={field_names:?}");

        self.table_mut(table).field_names = field_names;
        self
    }

    /// Sets the extra columns stored in `table`, replacing any previous list.
    ///
    /// The table is registered if it is not known yet.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `table` is empty.
    pub fn set_extra_columns<I>(&mut self, table: &str, columns: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        log::debug!("set extra columns; table={table:?} columns={columns:?}");

        self.table_mut(table).extra_columns = columns;
        self
    }

    fn table_mut(&mut self, name: &str) -> &mut Table {
        debug_assert!(!name.is_empty(), "table name must not be empty");

        if !self.tables.contains_key(name) {
            log::debug!("register table; table={name:?}");
        }

        self.tables.entry(name.to_string()).or_default()
    }

    /// Returns every registered table name, in first-registration order.
    pub fn table_names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.tables.keys().map(String::as_str)
    }

    /// Returns the field names stored in `table`.
    pub fn field_names(&self, table: &str) -> &[String] {
        self.tables
            .get(table)
            .map(|table| &table.field_names[..])
            .unwrap_or_default()
    }

    /// Returns the extra columns stored in `table`.
    pub fn extra_columns(&self, table: &str) -> &[String] {
        self.tables
            .get(table)
            .map(|table| &table.extra_columns[..])
            .unwrap_or_default()
    }

    /// Returns every column of `table`: the columns of each registered field
    /// in order, followed by the extra columns.
    pub fn all_columns(&self, table: &str) -> Result<Vec<String>> {
        let Some(entry) = self.tables.get(table) else {
            return Ok(vec![]);
        };

        let mut columns = vec![];

        for field_name in &entry.field_names {
            columns.extend(self.column_names(field_name)?.into_values());
        }

        columns.extend(entry.extra_columns.iter().cloned());
        Ok(columns)
    }

    /// Returns the first registered table whose field names include
    /// `field_name`.
    pub fn field_table_name(&self, field_name: &str) -> Option<&str> {
        self.tables
            .iter()
            .find(|(_, table)| table.contains_field(field_name))
            .map(|(name, _)| name.as_str())
    }

    /// Returns the seeded storage definition for `field_name`.
    pub fn storage_definition(&self, field_name: &str) -> Option<&D> {
        self.definitions.get(field_name)
    }

    /// Returns every seeded storage definition, in seeding order.
    pub fn storage_definitions(&self) -> impl ExactSizeIterator<Item = &D> + '_ {
        self.definitions.values()
    }

    /// Returns the property names resolved without a field prefix.
    pub fn reserved_columns(&self) -> &ReservedColumns {
        &self.reserved
    }

    pub fn is_reserved(&self, property: &str) -> bool {
        self.reserved.contains(property)
    }

    /// Returns the column map of the seeded definition named `field_name`.
    ///
    /// A field without a seeded definition maps to no columns.
    pub fn column_names(&self, field_name: &str) -> Result<IndexMap<String, String>> {
        match self.definitions.get(field_name) {
            Some(definition) => self.field_column_names(definition),
            None => {
                log::debug!("no storage definition, skipping; field={field_name:?}");
                Ok(IndexMap::new())
            }
        }
    }

    /// Maps each property of `field` to the column holding it, in declared
    /// property order.
    ///
    /// Fails if the field uses custom storage.
    pub fn field_column_names<F>(&self, field: &F) -> Result<IndexMap<String, String>>
    where
        F: FieldStorageDefinition + ?Sized,
    {
        ensure_mapped(field)?;

        Ok(field
            .columns()
            .iter()
            .map(|property| (property.clone(), self.resolve(field, property)))
            .collect())
    }

    /// Returns the column holding `property` of `field`.
    ///
    /// Reserved properties resolve to themselves. A field with a single
    /// property is stored in a column named after the field, whatever the
    /// property is called. Otherwise the column is the field name and the
    /// property joined by `__` for base fields or `_` for bundle fields.
    ///
    /// Fails if the field uses custom storage, for every property including
    /// reserved ones.
    pub fn field_column_name<F>(&self, field: &F, property: &str) -> Result<String>
    where
        F: FieldStorageDefinition + ?Sized,
    {
        ensure_mapped(field)?;
        Ok(self.resolve(field, property))
    }

    fn resolve<F>(&self, field: &F, property: &str) -> String
    where
        F: FieldStorageDefinition + ?Sized,
    {
        let compute = || column::column_name(field, property, &self.reserved);

        // Only declared and reserved properties are cached, so arbitrary
        // caller input cannot grow the cache.
        let declared = field.columns().iter().any(|column| column == property);
        if !declared && !self.reserved.contains(property) {
            return compute();
        }

        self.cache
            .get_or_insert_with(field.name(), FieldShape::of(field), property, compute)
    }
}

impl<D: FieldStorageDefinition> Default for TableMapping<D> {
    fn default() -> Self {
        Self::new([])
    }
}

fn ensure_mapped<F>(field: &F) -> Result<()>
where
    F: FieldStorageDefinition + ?Sized,
{
    if field.has_custom_storage() {
        return Err(Error::column_unavailable(field.name()));
    }

    Ok(())
}
