pub(crate) mod compression;
pub(crate) mod container;
pub(crate) mod model;
