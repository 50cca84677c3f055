//! Navigator for server-rendered short links: records the replacement target,
//! which the handler turns into a `303 See Other`. A redirect never leaves the
//! short link in browser history.

use crate::ports::Navigator;
use std::sync::Mutex;

#[derive(Default)]
pub struct RedirectNavigator {
    targets: Mutex<Vec<String>>,
}

impl RedirectNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every path passed to `replace`, in order.
    pub fn targets(&self) -> Vec<String> {
        self.targets
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn last(&self) -> Option<String> {
        self.targets
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .last()
            .cloned()
    }
}

impl Navigator for RedirectNavigator {
    fn replace(&self, path: &str) {
        self.targets
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(path.to_string());
    }
}
