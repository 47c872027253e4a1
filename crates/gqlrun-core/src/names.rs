/// Whether `name` matches `/[_A-Za-z][_0-9A-Za-z]*/`.
pub(crate) fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => (),
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

/// Names starting with `__` are reserved for introspection.
pub(crate) fn is_reserved_name(name: &str) -> bool {
    name.starts_with("__")
}
