use anyhow::Context as _;

use crate::foundation::error::{DowngradeError, DowngradeResult};

/// Payload compression declared in the container header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CompressionSignature {
    /// Uncompressed payload.
    #[default]
    None,
    /// LZMA-alone stream. Tier-0.5 runtimes read only this.
    Lzma,
    /// Zstandard frame.
    Zstandard,
}

impl CompressionSignature {
    /// Byte stored in the header after the version field.
    pub fn tag(self) -> u8 {
        match self {
            CompressionSignature::None => 0,
            CompressionSignature::Lzma => 1,
            CompressionSignature::Zstandard => 3,
        }
    }

    /// Inverse of [`CompressionSignature::tag`].
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(CompressionSignature::None),
            1 => Some(CompressionSignature::Lzma),
            3 => Some(CompressionSignature::Zstandard),
            _ => None,
        }
    }
}

impl std::fmt::Display for CompressionSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            CompressionSignature::None => "none",
            CompressionSignature::Lzma => "lzma",
            CompressionSignature::Zstandard => "zstd",
        })
    }
}

/// Compress `data` with the codec named by `signature`.
pub fn compress(signature: CompressionSignature, data: &[u8]) -> DowngradeResult<Vec<u8>> {
    match signature {
        CompressionSignature::None => Ok(data.to_vec()),
        CompressionSignature::Lzma => {
            let mut out = Vec::with_capacity(data.len() / 2);
            let mut input = data;
            lzma_rs::lzma_compress(&mut input, &mut out).context("lzma compress payload")?;
            Ok(out)
        }
        CompressionSignature::Zstandard => {
            Ok(zstd::stream::encode_all(data, 0).context("zstd compress payload")?)
        }
    }
}

/// Decompress `data` produced by [`compress`] with the same signature.
pub fn decompress(signature: CompressionSignature, data: &[u8]) -> DowngradeResult<Vec<u8>> {
    match signature {
        CompressionSignature::None => Ok(data.to_vec()),
        CompressionSignature::Lzma => {
            let mut out = Vec::new();
            let mut input = data;
            lzma_rs::lzma_decompress(&mut input, &mut out)
                .map_err(|e| DowngradeError::load(format!("lzma payload: {e}")))?;
            Ok(out)
        }
        CompressionSignature::Zstandard => zstd::stream::decode_all(data)
            .map_err(|e| DowngradeError::load(format!("zstd payload: {e}"))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/compression.rs"]
mod tests;
