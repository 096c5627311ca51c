//! Page layout and document output.

pub(crate) mod document;
pub(crate) mod layout;
pub(crate) mod raster;
