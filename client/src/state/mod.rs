//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`query`, `session`, `historial`) and owned by
//! the root component, which provides each model as an `RwSignal` context.
//! Transitions are plain methods so they can be tested without a DOM.

pub mod historial;
pub mod query;
pub mod session;
