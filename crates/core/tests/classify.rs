use symaudit_core::analysis::{build_symbol_table, classify_symbol, symbol_table_from_dump};
use symaudit_core::{ClassifiedSymbol, UNKNOWN_LIBRARY};

#[test]
fn versioned_symbol_yields_library_prefix() {
    assert_eq!(classify_symbol("printf@GLIBC_2.2.5"), ClassifiedSymbol::new("printf", "GLIBC"));
    assert_eq!(classify_symbol("foo@LIBFOO_2.1"), ClassifiedSymbol::new("foo", "LIBFOO"));
}

#[test]
fn unversioned_symbol_is_unknown() {
    let symbol = classify_symbol("custom_hook");
    assert_eq!(symbol.function, "custom_hook");
    assert_eq!(symbol.library, UNKNOWN_LIBRARY);
}

#[test]
fn tag_without_separator_is_used_whole() {
    assert_eq!(classify_symbol("zlibVersion@ZLIB"), ClassifiedSymbol::new("zlibVersion", "ZLIB"));
}

#[test]
fn default_version_marker_is_skipped() {
    assert_eq!(classify_symbol("printf@@GLIBC_2.2.5"), ClassifiedSymbol::new("printf", "GLIBC"));
}

#[test]
fn empty_tag_is_unknown() {
    assert_eq!(classify_symbol("odd@"), ClassifiedSymbol::new("odd", UNKNOWN_LIBRARY));
    assert_eq!(classify_symbol("odd@_1.0"), ClassifiedSymbol::new("odd", UNKNOWN_LIBRARY));
}

#[test]
fn table_groups_by_library_in_first_seen_order() {
    let table = build_symbol_table([
        "puts",
        "malloc@GLIBC_2.2.5",
        "pthread_create@GLIBCXX_3.4",
        "free@GLIBC_2.2.5",
        "dlopen",
    ]);

    let libraries: Vec<&str> = table.libraries().collect();
    assert_eq!(libraries, vec!["unknown", "GLIBC", "GLIBCXX"]);
    assert_eq!(table.functions("GLIBC"), Some(&["malloc".to_string(), "free".to_string()][..]));
    assert_eq!(table.functions("unknown"), Some(&["puts".to_string(), "dlopen".to_string()][..]));
    assert_eq!(table.len(), 5);
}

#[test]
fn duplicates_are_preserved() {
    let table = build_symbol_table(["read@GLIBC_2.2.5", "read@GLIBC_2.2.5"]);
    assert_eq!(table.functions("GLIBC").map(|f| f.len()), Some(2));
}

#[test]
fn pairs_follow_library_then_function_order() {
    let table = build_symbol_table(["a@X_1", "b@Y_1", "c@X_1"]);
    let pairs: Vec<(&str, &str)> = table.pairs().collect();
    assert_eq!(pairs, vec![("X", "a"), ("X", "c"), ("Y", "b")]);
}

#[test]
fn dump_pipeline_builds_table_from_nm_lines() {
    let table = symbol_table_from_dump([
        "0000000000001139 T main",
        "                 U strcpy@GLIBC_2.2.5",
        "                 U __gmon_start__",
    ]);
    assert_eq!(table.libraries().collect::<Vec<_>>(), vec!["GLIBC"]);
    assert_eq!(table.functions("GLIBC"), Some(&["strcpy".to_string()][..]));
}

#[test]
fn empty_input_gives_empty_table() {
    let table = build_symbol_table(Vec::<String>::new());
    assert!(table.is_empty());
    assert_eq!(table.len(), 0);
}

#[test]
fn table_serializes_as_ordered_groups() {
    let table = build_symbol_table(["puts", "malloc@GLIBC_2.2.5"]);
    let json = serde_json::to_value(&table).unwrap();
    assert_eq!(json[0]["library"], "unknown");
    assert_eq!(json[0]["functions"][0], "puts");
    assert_eq!(json[1]["library"], "GLIBC");
}
