pub(crate) mod permute;
