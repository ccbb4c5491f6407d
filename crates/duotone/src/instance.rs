//! Per-instance filter identifiers.

use std::collections::HashMap;
use std::sync::Mutex;

/// Prefix of generated filter ids and instance class names.
pub const INSTANCE_PREFIX: &str = "wp-duotone";

/// Hands out identifiers that are unique per editor and stable per block.
///
/// The first request for a block's client id allocates the next number;
/// later requests for the same block return the same identifier.
///
/// ```rust
/// use duotone::InstanceIds;
///
/// let ids = InstanceIds::new();
/// assert_eq!(ids.id_for("block-a"), "wp-duotone-1");
/// assert_eq!(ids.id_for("block-b"), "wp-duotone-2");
/// assert_eq!(ids.id_for("block-a"), "wp-duotone-1");
/// ```
#[derive(Debug, Default)]
pub struct InstanceIds {
    state: Mutex<IdState>,
}

#[derive(Debug, Default)]
struct IdState {
    next: u64,
    assigned: HashMap<String, u64>,
}

impl InstanceIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the identifier of the block instance with `client_id`.
    pub fn id_for(&self, client_id: &str) -> String {
        let mut state = self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let number = match state.assigned.get(client_id) {
            Some(number) => *number,
            None => {
                state.next += 1;
                let number = state.next;
                state.assigned.insert(client_id.to_string(), number);
                tracing::debug!(client_id, number, "assigned duotone instance id");
                number
            }
        };
        format!("{}-{}", INSTANCE_PREFIX, number)
    }

    /// Returns the identifier already assigned to `client_id`, if any.
    pub fn get(&self, client_id: &str) -> Option<String> {
        let state = self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        state
            .assigned
            .get(client_id)
            .map(|number| format!("{}-{}", INSTANCE_PREFIX, number))
    }

    /// Forgets a removed block so its number is not reported again.
    ///
    /// Numbers are never reused.
    pub fn release(&self, client_id: &str) -> bool {
        let mut state = self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        state.assigned.remove(client_id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_stable_and_unique() {
        let ids = InstanceIds::new();
        let a = ids.id_for("a");
        let b = ids.id_for("b");
        assert_ne!(a, b);
        assert_eq!(ids.id_for("a"), a);
        assert_eq!(ids.get("b"), Some(b));
        assert_eq!(ids.get("c"), None);
    }

    #[test]
    fn test_release_does_not_reuse_numbers() {
        let ids = InstanceIds::new();
        assert_eq!(ids.id_for("a"), "wp-duotone-1");
        assert!(ids.release("a"));
        assert!(!ids.release("a"));
        assert_eq!(ids.id_for("a"), "wp-duotone-2");
    }

    #[test]
    fn test_separate_editors_count_independently() {
        let first = InstanceIds::new();
        let second = InstanceIds::new();
        assert_eq!(first.id_for("x"), "wp-duotone-1");
        assert_eq!(second.id_for("y"), "wp-duotone-1");
    }
}
