//! Reading a results tree: scene discovery, metadata sidecars and HDR images.

pub(crate) mod discover;
pub(crate) mod hdr;
pub(crate) mod metadata;
pub(crate) mod scene;
