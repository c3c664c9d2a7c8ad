use crate::commands::CmdMessage;
use crate::model::Employee;
use crate::store::RecordStore;

/// Case-insensitive equality, normalizing both operands.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Case-insensitive substring test.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Write the collection back to the store. A failed write becomes a warning
/// message rather than an error: the in-memory change survives, it just is
/// not durable until a later save succeeds.
pub fn persist<S: RecordStore>(store: &mut S, employees: &[Employee]) -> Option<CmdMessage> {
    match store.save(employees) {
        Ok(()) => None,
        Err(e) => Some(CmdMessage::warning(format!(
            "Error saving employee data: {}. Changes are kept in memory only.",
            e
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_case() {
        assert!(eq_ignore_case("Alice Johnson", "alice JOHNSON"));
        assert!(!eq_ignore_case("Alice", "Alice Johnson"));
    }

    #[test]
    fn substring_ignores_case() {
        assert!(contains_ignore_case("Anna Lee", "ann"));
        assert!(contains_ignore_case("Anna Lee", "ANNA"));
        assert!(!contains_ignore_case("Diana Prince", "ann"));
    }
}
