//! Container framing around a [`Document`].
//!
//! Layout:
//!
//! | bytes | field |
//! |---|---|
//! | 2 | magic `b"SC"` |
//! | 4 | format version, big-endian `u32` |
//! | 1 | [`CompressionSignature`] tag |
//! | .. | payload: JSON `{ flags, document }`, compressed per signature |
//!
//! The first six bytes are the probe header; the tier probe never reads
//! past them.

use std::{
    fs::File,
    io::{Read, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::{
    document::{
        compression::{self, CompressionSignature},
        model::{Document, DocumentFlags, LoadedDocument},
    },
    foundation::{
        error::{DowngradeError, DowngradeResult},
        tier::Tier,
    },
};

/// Container magic.
pub const SC_MAGIC: [u8; 2] = *b"SC";
/// Bytes inspected by [`probe`]: magic plus version.
pub const PROBE_HEADER_LEN: usize = 6;
/// Full fixed header: probe header plus signature tag.
pub const HEADER_LEN: usize = PROBE_HEADER_LEN + 1;

const MIN_VERSION: u32 = 1;
const MAX_VERSION: u32 = 5;

/// Serializer settings, passed by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SaveOptions {
    /// Tier whose version marker goes into the header.
    pub tier: Tier,
    /// Payload compression.
    pub signature: CompressionSignature,
    /// Export flags written alongside the document.
    pub flags: DocumentFlags,
}

#[derive(serde::Serialize)]
struct PayloadRef<'a> {
    flags: DocumentFlags,
    document: &'a Document,
}

#[derive(serde::Deserialize)]
struct Payload {
    #[serde(default)]
    flags: DocumentFlags,
    document: Document,
}

/// Report whether the stream starts with a tier-2 header.
///
/// Reads at most [`PROBE_HEADER_LEN`] bytes. A short or unreadable stream
/// is classified as tier-1 or older.
pub fn probe<R: Read>(reader: R) -> bool {
    let mut header = [0u8; PROBE_HEADER_LEN];
    if reader
        .take(PROBE_HEADER_LEN as u64)
        .read_exact(&mut header)
        .is_err()
    {
        return false;
    }
    header[..2] == SC_MAGIC
        && u32::from_be_bytes([header[2], header[3], header[4], header[5]])
            == Tier::Tier2.header_version()
}

/// [`probe`] on a file. The handle is closed before returning.
pub fn probe_path(path: &Path) -> DowngradeResult<bool> {
    let f = File::open(path).with_context(|| format!("open '{}' for probe", path.display()))?;
    Ok(probe(f))
}

/// Parse a container from memory.
pub fn load_from_bytes(bytes: &[u8]) -> DowngradeResult<LoadedDocument> {
    if bytes.len() < HEADER_LEN {
        return Err(DowngradeError::load(format!(
            "container is {} bytes, header needs {HEADER_LEN}",
            bytes.len()
        )));
    }
    if bytes[..2] != SC_MAGIC {
        return Err(DowngradeError::load("bad magic (expected \"SC\")"));
    }
    let version = u32::from_be_bytes([bytes[2], bytes[3], bytes[4], bytes[5]]);
    if !(MIN_VERSION..=MAX_VERSION).contains(&version) {
        return Err(DowngradeError::load(format!(
            "unsupported container version {version}"
        )));
    }
    let signature = CompressionSignature::from_tag(bytes[PROBE_HEADER_LEN]).ok_or_else(|| {
        DowngradeError::load(format!(
            "unknown compression signature {}",
            bytes[PROBE_HEADER_LEN]
        ))
    })?;

    let raw = compression::decompress(signature, &bytes[HEADER_LEN..])?;
    let payload: Payload = serde_json::from_slice(&raw)
        .map_err(|e| DowngradeError::load(format!("parse document payload: {e}")))?;

    Ok(LoadedDocument {
        document: payload.document,
        flags: payload.flags,
    })
}

/// Load a container from disk.
pub fn load(path: &Path) -> DowngradeResult<LoadedDocument> {
    let bytes = std::fs::read(path).map_err(|e| {
        DowngradeError::load(format!("read container '{}': {e}", path.display()))
    })?;
    load_from_bytes(&bytes).map_err(|e| match e {
        DowngradeError::Load(msg) => DowngradeError::load(format!("'{}': {msg}", path.display())),
        other => other,
    })
}

/// Encode a document into container bytes.
pub fn to_bytes(document: &Document, opts: SaveOptions) -> DowngradeResult<Vec<u8>> {
    let json = serde_json::to_vec(&PayloadRef {
        flags: opts.flags,
        document,
    })
    .map_err(|e| DowngradeError::serialize(format!("encode document payload: {e}")))?;
    let body = compression::compress(opts.signature, &json)
        .map_err(|e| DowngradeError::serialize(e.to_string()))?;

    let mut out = Vec::with_capacity(HEADER_LEN + body.len());
    out.extend_from_slice(&SC_MAGIC);
    out.extend_from_slice(&opts.tier.header_version().to_be_bytes());
    out.push(opts.signature.tag());
    out.extend_from_slice(&body);
    Ok(out)
}

/// Write a document to `path`.
///
/// Bytes go to a sibling temporary file first and are renamed over `path`
/// only once fully written, so a failed save leaves any previous file intact.
pub fn save(document: &Document, path: &Path, opts: SaveOptions) -> DowngradeResult<()> {
    let bytes = to_bytes(document, opts)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let tmp = staging_path(path);
    let written = File::create(&tmp)
        .and_then(|mut f| {
            f.write_all(&bytes)?;
            f.sync_all()
        })
        .and_then(|()| std::fs::rename(&tmp, path));

    if let Err(e) = written {
        let _ = std::fs::remove_file(&tmp);
        return Err(DowngradeError::serialize(format!(
            "write container '{}': {e}",
            path.display()
        )));
    }
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".partial");
    path.with_file_name(name)
}

#[cfg(test)]
#[path = "../../tests/unit/document/container.rs"]
mod tests;
