/// What a single registered table holds.
///
/// The two lists are assigned independently and each assignment replaces the
/// previous list wholesale.
#[derive(Debug, Clone, Default)]
pub(super) struct Table {
    /// Fields stored in the table, in registration order. Not deduplicated.
    pub(super) field_names: Vec<String>,

    /// Columns not derived from any field, such as bookkeeping flags.
    pub(super) extra_columns: Vec<String>,
}

impl Table {
    pub(super) fn contains_field(&self, field_name: &str) -> bool {
        self.field_names.iter().any(|name| name == field_name)
    }
}
