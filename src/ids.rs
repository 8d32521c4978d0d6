use uuid::Uuid;

/// Source of fresh item IDs
pub trait IdGenerator {
    /// Produce an ID that has not been handed out before
    fn next_id(&mut self) -> String;
}

/// Random v4 UUIDs
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic IDs ("id-1", "id-2", ...) for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct SequentialIds {
    counter: usize,
}

#[cfg(test)]
impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        self.counter += 1;
        format!("id-{}", self.counter)
    }
}
