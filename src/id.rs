use uuid::Uuid;

/// Source of user identifiers. Implementations must produce ids that are
/// unique for the lifetime of the process; no ordering is implied.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Default generator: random UUIDv4, formatted as the canonical hyphenated
/// string.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}
