//! Process environment snapshot helpers.

/// Capture the process environment at the instant of the call.
///
/// Iteration order is whatever the host yields; callers must not depend on it.
pub fn snapshot() -> Vec<(String, String)> {
    std::env::vars().collect()
}

/// Look up `key` in a snapshot.
///
/// An unset variable yields `None`; a variable set to the empty string yields
/// `Some("")`. Mismatch reports rely on this distinction.
pub fn lookup(snapshot: &[(String, String)], key: &str) -> Option<String> {
    snapshot
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}
