//! Client-side identifiers for new job posts.

use uuid::Uuid;

/// A fresh id for a record about to be created.
///
/// UUIDv7 puts a millisecond timestamp ahead of random bits, so ids sort by
/// creation time and collide only if two clients also draw the same 74
/// random bits in the same millisecond. Uniqueness is still the backend's
/// to enforce.
pub fn generate_id() -> String {
    Uuid::now_v7().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_distinct_and_non_empty() {
        let a = generate_id();
        let b = generate_id();
        assert!(!a.is_empty());
        assert_ne!(a, b);
    }

    #[test]
    fn later_ids_sort_after_earlier_ones() {
        let a = generate_id();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = generate_id();
        assert!(a < b);
    }
}
