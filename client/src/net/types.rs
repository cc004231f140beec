//! Wire DTOs used by the client, re-exported from the shared `wire` crate.

pub use wire::{Conversation, HistorialResponse, QueryRequest, QueryResponse, Source};
