//! Process-wide registration of custom tags.
//!
//! A tag is registered once, at startup, no matter how many lists are later mounted on the page.
use std::sync::{Mutex, PoisonError};

static REGISTERED_TAGS: Mutex<Vec<&'static str>> = Mutex::new(Vec::new());

/// Register `tag`. Returns `false` if it was already registered, in which case nothing happens.
pub fn register(tag: &'static str) -> bool {
    let mut tags = REGISTERED_TAGS
        .lock()
        .unwrap_or_else(PoisonError::into_inner);

    if tags.contains(&tag) {
        return false;
    }

    tags.push(tag);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_registered(tag: &str) -> bool {
        REGISTERED_TAGS
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|registered| *registered == tag)
    }

    #[test]
    fn test_register_once() {
        assert!(!is_registered("test-registry-list"));

        assert!(register("test-registry-list"));
        assert!(!register("test-registry-list"));
        assert!(is_registered("test-registry-list"));
    }
}
