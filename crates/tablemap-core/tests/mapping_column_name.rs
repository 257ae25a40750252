use tablemap_core::{Error, FieldStorage, TableMapping};

fn definition(base_field: bool, columns: &[&str]) -> FieldStorage {
    if base_field {
        FieldStorage::base("test", columns.iter().copied())
    } else {
        FieldStorage::bundle("test", columns.iter().copied())
    }
}

/// (base field, declared columns, requested property, expected column)
const CASES: &[(bool, &[&str], &str, &str)] = &[
    // Base field with a single column
    (true, &["foo"], "foo", "test"),
    // Base field with multiple columns
    (true, &["foo", "bar"], "foo", "test__foo"),
    (true, &["foo", "bar"], "bar", "test__bar"),
    // Bundle field with a single column
    (false, &["foo"], "foo", "test"),
    // Bundle field with multiple columns
    (false, &["foo", "bar"], "foo", "test_foo"),
    (false, &["foo", "bar"], "bar", "test_bar"),
    // Reserved column
    (false, &["foo", "bar"], "deleted", "deleted"),
    (true, &["foo", "bar"], "deleted", "deleted"),
    (true, &["foo"], "deleted", "deleted"),
];

#[test]
fn field_column_name() {
    for &(base_field, columns, property, expected) in CASES {
        let definition = definition(base_field, columns);
        let mapping = TableMapping::new([definition.clone()]);

        let actual = mapping.field_column_name(&definition, property).unwrap();
        assert_eq!(
            actual, expected,
            "base_field={base_field} columns={columns:?} property={property:?}"
        );
    }
}

#[test]
fn field_column_name_custom_storage() {
    for &(base_field, columns, property, _) in CASES {
        let definition = definition(base_field, columns).custom_storage(true);
        let mapping = TableMapping::new([definition.clone()]);

        let err = mapping
            .field_column_name(&definition, property)
            .unwrap_err();
        assert!(err.is_column_unavailable(), "property={property:?}");
        assert_eq!(err.column_unavailable_field(), Some("test"));
        assert_eq!(
            err.to_string(),
            r#"column information not available for the "test" field"#
        );
    }
}

#[test]
fn single_column_ignores_property_name() {
    let definition = FieldStorage::bundle("status", ["value"]);
    let mapping = TableMapping::new([definition.clone()]);

    assert_eq!(
        mapping.field_column_name(&definition, "anything").unwrap(),
        "status"
    );
}

#[test]
fn field_column_name_is_idempotent() {
    let definition = FieldStorage::base("description", ["value", "format"]);
    let mapping = TableMapping::new([definition.clone()]);

    for _ in 0..2 {
        assert_eq!(
            mapping.field_column_name(&definition, "value").unwrap(),
            "description__value"
        );
        assert_eq!(
            mapping.field_column_name(&definition, "format").unwrap(),
            "description__format"
        );
    }
}

#[test]
fn field_column_name_without_seeded_definition() {
    // The definition passed in is authoritative; seeding only matters for
    // lookups by name.
    let mapping: TableMapping = TableMapping::default();
    let definition = FieldStorage::bundle("test", ["foo", "bar"]);

    assert_eq!(
        mapping.field_column_name(&definition, "bar").unwrap(),
        "test_bar"
    );
}

#[test]
fn error_propagates_with_question_mark() {
    fn columns(mapping: &TableMapping, definition: &FieldStorage) -> Result<String, Error> {
        let value = mapping.field_column_name(definition, "value")?;
        Ok(value)
    }

    let definition = FieldStorage::base("path", ["alias", "pid"]).custom_storage(true);
    let mapping = TableMapping::new([definition.clone()]);

    let err = columns(&mapping, &definition).unwrap_err();
    assert!(err.is_column_unavailable());
}

#[test]
fn cached_name_does_not_leak_across_definitions_with_same_name() {
    let seeded = FieldStorage::base("test", ["foo", "bar"]);
    let mut mapping = TableMapping::new([seeded.clone()]);
    mapping.set_field_names("test_table", ["test"]);

    // Fill the cache from the seeded base definition.
    assert_eq!(
        mapping.all_columns("test_table").unwrap(),
        ["test__foo", "test__bar"]
    );

    let bundle = FieldStorage::bundle("test", ["foo", "bar"]);
    assert_eq!(mapping.field_column_name(&bundle, "foo").unwrap(), "test_foo");

    let single = FieldStorage::bundle("test", ["foo"]);
    assert_eq!(mapping.field_column_name(&single, "foo").unwrap(), "test");

    // The seeded entries are unaffected.
    assert_eq!(mapping.field_column_name(&seeded, "foo").unwrap(), "test__foo");
}

#[test]
fn resolution_order_does_not_change_results() {
    let base = FieldStorage::base("test", ["foo", "bar"]);
    let bundle = FieldStorage::bundle("test", ["foo", "bar"]);

    let forward = TableMapping::new([base.clone()]);
    let forward = [
        forward.field_column_name(&base, "foo").unwrap(),
        forward.field_column_name(&bundle, "foo").unwrap(),
    ];

    let backward = TableMapping::new([base.clone()]);
    let bundle_first = backward.field_column_name(&bundle, "foo").unwrap();
    let backward = [backward.field_column_name(&base, "foo").unwrap(), bundle_first];

    assert_eq!(forward, ["test__foo", "test_foo"]);
    assert_eq!(forward, backward);
}
