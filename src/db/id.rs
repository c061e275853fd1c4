//! Identifier generation for stored entities.

use uuid::Uuid;

/// Source of globally unique entity identifiers.
pub trait IdGenerator: Send + Sync {
    /// Produce a new identifier.
    fn generate(&self) -> String;
}

/// Random UUIDv4 identifiers in hyphenated form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_uuid_generator_format() {
        let id = UuidGenerator.generate();
        assert_eq!(id.len(), 36);
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn test_uuid_generator_unique() {
        let ids: HashSet<String> = (0..100).map(|_| UuidGenerator.generate()).collect();
        assert_eq!(ids.len(), 100);
    }
}
