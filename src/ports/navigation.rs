//! Navigation outbound port. Where a resolved short link sends the client.

/// Client navigation.
///
/// Implementations must replace the current history entry rather than push a new one,
/// so going back never lands on the short link again.
pub trait Navigator: Send + Sync {
    fn replace(&self, path: &str);
}
