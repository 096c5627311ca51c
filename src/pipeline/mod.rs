pub(crate) mod overview;
