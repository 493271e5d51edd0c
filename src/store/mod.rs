//! # Record Store
//!
//! Owns every [`Person`] record and all mutation logic. Handlers only see
//! the [`PersonStore`] trait, so the in-memory backend can be swapped for a
//! durable one without touching the HTTP layer.

mod allocator;
mod errors;
mod memory;
mod person;

pub use allocator::IdAllocator;
pub use errors::{StoreError, StoreResult};
pub use memory::InMemoryPersonStore;
pub use person::{
    decode_mutation_request, GetPersonsResponse, Operation, Person, PersonMutationRequest,
    PersonMutationResponse,
};

/// Store capability used by the request handlers
pub trait PersonStore: Send + Sync {
    /// All records, ordered by id
    fn list(&self) -> Vec<Person>;

    /// Store a new record under a freshly allocated id
    fn insert(&self, request: PersonMutationRequest) -> Person;

    /// Overwrite the mutable fields of an existing record
    fn update(&self, id: i64, request: PersonMutationRequest) -> StoreResult<Person>;

    /// Remove a record, returning it
    fn delete(&self, id: i64) -> StoreResult<Person>;

    /// Number of stored records
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
