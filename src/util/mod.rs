//! Utility helpers shared across the controller and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns behind small traits so the
//! preference logic stays testable without a DOM.

pub mod cookie;
pub mod diagram;
#[cfg(feature = "csr")]
pub mod dom;
pub mod footnotes;
pub mod presenter;
pub mod store;
