//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the question form, answer, session history and the
//! history modal from the state signals they are handed. None of them issue
//! requests; the page wires callbacks to the network layer.

pub mod answer_panel;
pub mod historial_modal;
pub mod query_form;
pub mod session_history;
