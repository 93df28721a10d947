//! Event storage.
//!
//! All reads and writes of event records go through the `EventRepository`
//! trait. `MemoryEventStore` is the process-lifetime implementation; a
//! persistent backend only has to implement the same trait.

pub mod error;
pub mod memory;
pub mod seed;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryEventStore;
pub use seed::{demo_events, seed_events};
pub use traits::EventRepository;
