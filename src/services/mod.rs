//! Preference services: resolution and application.

pub mod controller;
pub mod resolver;
