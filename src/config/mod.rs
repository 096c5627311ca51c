//! Figure configuration and per-scene override tables.

pub(crate) mod model;
pub(crate) mod table;
