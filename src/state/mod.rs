//! Domain state: preference enums and page configuration.
//!
//! DESIGN
//! ======
//! Nothing here touches the browser. Types are plain values so resolution and
//! application logic can be exercised natively.

pub mod page;
pub mod preference;
