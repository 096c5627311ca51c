//! Turning one scene's inputs into a row of display cells.

pub(crate) mod caption;
pub(crate) mod crops;
pub(crate) mod row;
pub(crate) mod tonemap;
