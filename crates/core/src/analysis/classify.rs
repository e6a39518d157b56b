use crate::model::{ClassifiedSymbol, SymbolTable, UNKNOWN_LIBRARY};

/// Separator between a function name and its version tag (`printf@GLIBC_2.2.5`).
const VERSION_SEPARATOR: char = '@';

/// Separator between the library tag and the version inside a version tag.
const TAG_SEPARATOR: char = '_';

/// Split a raw token into its function name and library tag.
///
/// `f@LIBFOO_2.1` yields `(f, LIBFOO)`; a tag without `_` is used whole.
/// Tokens without `@`, or with an empty tag, land in `"unknown"`.
pub fn classify_symbol(token: &str) -> ClassifiedSymbol {
    let Some((function, version)) = token.split_once(VERSION_SEPARATOR) else {
        return ClassifiedSymbol::new(token, UNKNOWN_LIBRARY);
    };

    // `@@` marks the default version; the tag starts after the last `@`.
    let version = version.trim_start_matches(VERSION_SEPARATOR);
    let library = version.split(TAG_SEPARATOR).next().unwrap_or_default();
    if library.is_empty() {
        ClassifiedSymbol::new(function, UNKNOWN_LIBRARY)
    } else {
        ClassifiedSymbol::new(function, library)
    }
}

/// Classify every token and group the results by library tag.
pub fn build_symbol_table<I, S>(tokens: I) -> SymbolTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens.into_iter().map(|token| classify_symbol(token.as_ref())).collect()
}
