//! Request handlers, one module per route.

pub mod histories;
pub mod predict;
pub mod root;
