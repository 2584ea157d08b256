//! In-memory backend for the Jot note store.
//!
//! Notes live for the lifetime of the process. A single mutex guards the
//! collection and the id counter together, so each operation is atomic with
//! respect to every other.

mod store;

pub use store::MemoryStore;

#[cfg(test)]
mod tests;
