use std::fs;

use symaudit_core::policy::{Policy, PolicyError};
use tempfile::tempdir;

#[test]
fn parses_all_line_kinds() {
    let policy = Policy::parse(
        "# banned for the exam\n\
         \n\
         *\n\
         *LIBC\n\
         *  LIBM  \n\
         strcpy\n\
         \tgets  \n\
         # trailing comment\n",
    );
    assert!(policy.wildcard);
    assert!(policy.libraries.contains("LIBC"));
    assert!(policy.libraries.contains("LIBM"));
    assert_eq!(policy.libraries.len(), 2);
    assert_eq!(policy.functions, vec!["strcpy", "gets"]);
}

#[test]
fn wildcard_only_set_by_bare_marker() {
    let policy = Policy::parse("*GLIBC\nmalloc\n");
    assert!(!policy.wildcard);
    assert!(policy.covers_library("GLIBC"));
    assert!(!policy.covers_library("GLIBCXX"));
}

#[test]
fn padded_wildcard_line_still_counts_as_global() {
    let policy = Policy::parse("   *   \n");
    assert!(policy.wildcard);
    assert!(policy.libraries.is_empty());
    assert!(policy.functions.is_empty());
}

#[test]
fn empty_document_yields_empty_policy() {
    assert_eq!(Policy::parse(""), Policy::default());
    assert_eq!(Policy::parse("# nothing here\n\n   \n"), Policy::default());
}

#[test]
fn function_entries_keep_document_order_and_duplicates() {
    let policy = Policy::parse("write\nread\nwrite\n");
    assert_eq!(policy.functions, vec!["write", "read", "write"]);
    assert!(policy.names_function("read"));
    assert!(!policy.names_function("open"));
}

#[test]
fn load_reads_file_from_disk() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("authorized.txt");
    fs::write(&path, "malloc\nfree\n*GLIBC\n").unwrap();

    let policy = Policy::load(&path).expect("load policy");
    assert_eq!(policy.functions, vec!["malloc", "free"]);
    assert!(policy.libraries.contains("GLIBC"));
}

#[test]
fn load_missing_file_is_not_found() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("missing.txt");
    let err = Policy::load(&path).unwrap_err();
    assert!(matches!(err, PolicyError::NotFound(ref p) if p == &path), "unexpected: {err:?}");
    assert!(err.to_string().contains("Rule file not found"));
}

#[test]
fn load_directory_is_a_read_error() {
    let temp = tempdir().unwrap();
    let err = Policy::load(temp.path()).unwrap_err();
    assert!(matches!(err, PolicyError::Read { .. }), "unexpected: {err:?}");
}
