use crate::{
    document::{
        compression::CompressionSignature,
        model::{Document, DocumentFlags, TextureEncoding},
    },
    foundation::{
        error::{DowngradeError, DowngradeResult},
        tier::{RequestedTier, Tier},
    },
};

/// Resolve the tier a file is actually written at.
///
/// `Auto` steps one tier down from `source`. Explicit targets must be
/// strictly below `source`; anything else is rejected rather than clamped.
pub fn resolve_target(source: Tier, requested: RequestedTier) -> DowngradeResult<Tier> {
    let target = match requested {
        RequestedTier::Auto => source.next_lower().ok_or(DowngradeError::UnreachableTier {
            from: source,
            to: source,
        })?,
        RequestedTier::Explicit(t) => t,
    };
    if target >= source {
        return Err(DowngradeError::UnreachableTier {
            from: source,
            to: target,
        });
    }
    Ok(target)
}

/// Which textures get forced to [`TextureEncoding::Raw`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextureRule {
    /// Leave every texture as is.
    Keep,
    /// Only textures in the proprietary codec.
    ProprietaryToRaw,
    /// Every texture.
    AllToRaw,
}

impl TextureRule {
    fn rewrites(self, encoding: TextureEncoding) -> bool {
        match self {
            TextureRule::Keep => false,
            TextureRule::ProprietaryToRaw => encoding.is_proprietary(),
            TextureRule::AllToRaw => encoding != TextureEncoding::Raw,
        }
    }
}

/// The concrete set of mutations for one effective target tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DowngradePlan {
    /// Effective target tier.
    pub target: Tier,
    /// Texture re-encoding rule.
    pub textures: TextureRule,
    /// Force every text field's `auto_kern` off.
    pub disable_auto_kern: bool,
    /// Force `use_external_textures` off.
    pub clear_external_textures: bool,
    /// Force `save_custom_property`, `use_multi_resolution` and
    /// `use_low_resolution` off.
    pub clear_extended_flags: bool,
    /// Compression used when saving.
    pub signature: CompressionSignature,
}

/// Counters describing what a plan changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MutationReport {
    /// Textures whose encoding changed to Raw.
    pub textures_reencoded: usize,
    /// Text fields whose `auto_kern` was switched off.
    pub text_fields_unkerned: usize,
}

impl DowngradePlan {
    /// Mutation set for `target`.
    pub fn for_target(target: Tier) -> Self {
        match target {
            Tier::Tier2 => Self {
                target,
                textures: TextureRule::Keep,
                disable_auto_kern: false,
                clear_external_textures: false,
                clear_extended_flags: false,
                signature: CompressionSignature::Zstandard,
            },
            Tier::Tier1 => Self {
                target,
                textures: TextureRule::ProprietaryToRaw,
                disable_auto_kern: false,
                clear_external_textures: true,
                clear_extended_flags: false,
                signature: CompressionSignature::Zstandard,
            },
            Tier::Tier05 => Self {
                target,
                textures: TextureRule::AllToRaw,
                disable_auto_kern: true,
                clear_external_textures: true,
                clear_extended_flags: true,
                signature: CompressionSignature::Lzma,
            },
        }
    }

    /// Apply the plan to `document` and return the flags to save with.
    pub fn apply(
        &self,
        document: &mut Document,
        flags: DocumentFlags,
    ) -> (DocumentFlags, MutationReport) {
        let mut report = MutationReport::default();

        for texture in &mut document.textures {
            if self.textures.rewrites(texture.encoding) {
                texture.encoding = TextureEncoding::Raw;
                report.textures_reencoded += 1;
            }
        }

        if self.disable_auto_kern {
            for field in &mut document.text_fields {
                if field.auto_kern {
                    field.auto_kern = false;
                    report.text_fields_unkerned += 1;
                }
            }
        }

        let mut out = flags;
        if self.clear_external_textures {
            out.use_external_textures = false;
        }
        if self.clear_extended_flags {
            out.save_custom_property = false;
            out.use_multi_resolution = false;
            out.use_low_resolution = false;
        }

        (out, report)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/policy/tier_policy.rs"]
mod tests;
