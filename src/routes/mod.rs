//! Route definitions for the API surface

pub mod api;
