//! Best-effort execution for operations that are allowed to fail.

/// Run a fallible operation and discard its error.
///
/// Returns `Some(value)` on success and `None` on failure. Useful for
/// best-effort steps in a sync pipeline, such as posting a status update,
/// where a failure should not abort the run.
pub fn trying<T, E, F>(op: F) -> Option<T>
where
    F: FnOnce() -> Result<T, E>,
{
    op().ok()
}
