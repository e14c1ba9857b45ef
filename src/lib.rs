//! Downgrade engine for SC animation/asset containers.
//!
//! A container authored for a newer runtime is rewritten so an older one can
//! load it. Three format tiers exist, `2.0 > 1.0 > 0.5`, and conversion only
//! ever goes down the ladder.
//!
//! # Pipeline overview
//!
//! 1. **Probe**: read the six-byte header and classify the input as tier-2 or older ([`probe`]).
//! 2. **Load**: parse the container into a [`Document`] plus [`DocumentFlags`] ([`load`]).
//! 3. **Geometry fix-up**: tier-2 inputs get their strip vertices reordered to the legacy
//!    winding ([`fix_vertex_order`]).
//! 4. **Tier policy**: resolve the effective target ([`resolve_target`]) and apply its
//!    [`DowngradePlan`] (texture re-encoding, flag resets, compression choice).
//! 5. **Save**: write the container with the plan's [`CompressionSignature`] ([`save`]).
//!
//! [`run`] drives the pipeline over a single file or a directory, isolating
//! per-file failures into a [`BatchReport`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod document;
mod foundation;
mod geometry;
mod pipeline;
mod policy;

pub use document::compression::{CompressionSignature, compress, decompress};
pub use document::container::{
    HEADER_LEN, PROBE_HEADER_LEN, SC_MAGIC, SaveOptions, load, load_from_bytes, probe, probe_path,
    save, to_bytes,
};
pub use document::model::{
    Document, DocumentFlags, DrawCommand, LoadedDocument, Shape, TextField, Texture,
    TextureEncoding, Vertex,
};
pub use foundation::error::{DowngradeError, DowngradeResult};
pub use foundation::tier::{RequestedTier, Tier};
pub use geometry::permute::{
    apply_permutation, fix_vertex_order, inverse_permutation, is_permutation,
    legacy_vertex_order, restore_advanced_order,
};
pub use pipeline::batch::{
    BatchFailure, BatchItem, BatchOpts, BatchReport, DEFAULT_EXTENSION, list_inputs, run,
};
pub use pipeline::downgrade::{DowngradeOutcome, downgrade_file, downgrade_loaded};
pub use policy::tier_policy::{DowngradePlan, MutationReport, TextureRule, resolve_target};
