/// `nm` type marker for a symbol that is referenced but not defined here.
const UNDEFINED_MARKER: &str = "U";

/// Prefix reserved for compiler and runtime internals.
const RESERVED_PREFIX: &str = "__";

/// Filter raw symbol-table lines down to imported symbol tokens.
///
/// A line is kept when its type marker (the field just before the name) is
/// `U`. The token is the last whitespace-delimited field; tokens starting with
/// `__` are dropped.
pub fn extract_undefined<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| undefined_token(line.as_ref()).map(str::to_string))
        .filter(|token| !token.starts_with(RESERVED_PREFIX))
        .collect()
}

fn undefined_token(line: &str) -> Option<&str> {
    let mut fields = line.split_whitespace().rev();
    let token = fields.next()?;
    let marker = fields.next()?;
    (marker == UNDEFINED_MARKER).then_some(token)
}
