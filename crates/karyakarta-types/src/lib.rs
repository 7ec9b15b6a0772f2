//! Shared domain vocabulary for the karyakarta dashboard: the stored entity
//! models, their enumerated labels, and the create/patch payloads accepted
//! from the UI layer.

#[macro_use]
mod labels;

pub mod api;
pub mod models;

pub use labels::ParseLabelError;
