pub(crate) mod tier_policy;
