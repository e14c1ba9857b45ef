use std::path::Path;

use crate::{
    document::{
        compression::CompressionSignature,
        container::{self, SaveOptions},
        model::{Document, LoadedDocument},
    },
    foundation::{
        error::{DowngradeError, DowngradeResult},
        tier::{RequestedTier, Tier},
    },
    geometry::permute,
    policy::tier_policy::{DowngradePlan, MutationReport, resolve_target},
};

/// What one downgrade did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DowngradeOutcome {
    /// Tier detected on the input.
    pub source: Tier,
    /// Tier written.
    pub target: Tier,
    /// Compression used for the output.
    pub signature: CompressionSignature,
    /// Draw commands whose vertices were reordered.
    pub commands_reordered: usize,
    /// Texture and text-field changes.
    pub mutations: MutationReport,
}

/// In-memory half of the pipeline: geometry fix-up, then tier mutations.
///
/// Returns the document and save options ready for [`container::save`].
pub fn downgrade_loaded(
    loaded: LoadedDocument,
    source: Tier,
    requested: RequestedTier,
) -> DowngradeResult<(Document, SaveOptions, DowngradeOutcome)> {
    let target = resolve_target(source, requested)?;
    let LoadedDocument {
        mut document,
        flags,
    } = loaded;

    let commands_reordered = if source == Tier::Tier2 {
        permute::fix_vertex_order(&mut document)
    } else {
        0
    };

    let plan = DowngradePlan::for_target(target);
    let (flags, mutations) = plan.apply(&mut document, flags);
    tracing::debug!(
        commands_reordered,
        textures_reencoded = mutations.textures_reencoded,
        text_fields_unkerned = mutations.text_fields_unkerned,
        "applied tier mutations"
    );

    let opts = SaveOptions {
        tier: target,
        signature: plan.signature,
        flags,
    };
    let outcome = DowngradeOutcome {
        source,
        target,
        signature: plan.signature,
        commands_reordered,
        mutations,
    };
    Ok((document, opts, outcome))
}

/// Downgrade one container file: probe, load, transform, save.
///
/// The input is never written to. Load and save errors propagate unchanged.
#[tracing::instrument(skip_all, fields(input = %input.display(), output = %output.display()))]
pub fn downgrade_file(
    input: &Path,
    output: &Path,
    requested: RequestedTier,
) -> DowngradeResult<DowngradeOutcome> {
    if same_file(input, output) {
        return Err(DowngradeError::validation(format!(
            "output '{}' would overwrite the input",
            output.display()
        )));
    }

    let source = if container::probe_path(input)? {
        Tier::Tier2
    } else {
        Tier::Tier1
    };
    let target = resolve_target(source, requested)?;
    tracing::info!(%source, %target, "downgrading");

    let loaded = container::load(input)?;
    let (document, opts, outcome) = downgrade_loaded(loaded, source, requested)?;

    tracing::info!(tier = %opts.tier, signature = %opts.signature, "saving");
    container::save(&document, output, opts)?;
    Ok(outcome)
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/downgrade.rs"]
mod tests;
