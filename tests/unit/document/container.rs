use std::io::Cursor;

use super::*;
use crate::document::model::{DrawCommand, Shape, TextField, Texture, TextureEncoding, Vertex};

fn sample_document() -> Document {
    Document {
        shapes: vec![Shape {
            id: 7,
            commands: vec![DrawCommand {
                texture_index: 0,
                vertices: (0..4)
                    .map(|i| Vertex::new(i as f32, 0.0, 0.0, 1.0))
                    .collect(),
            }],
        }],
        textures: vec![Texture {
            width: 64,
            height: 32,
            encoding: TextureEncoding::SupercellTexture,
        }],
        text_fields: vec![TextField {
            id: 3,
            font_name: "Supercell-Magic".to_string(),
            text: "hello".to_string(),
            auto_kern: true,
        }],
    }
}

fn opts(tier: Tier, signature: CompressionSignature) -> SaveOptions {
    SaveOptions {
        tier,
        signature,
        flags: DocumentFlags {
            use_external_textures: true,
            save_custom_property: false,
            use_multi_resolution: true,
            use_low_resolution: false,
        },
    }
}

#[test]
fn probe_detects_tier2_header_only() {
    let doc = sample_document();
    let sc2 = to_bytes(&doc, opts(Tier::Tier2, CompressionSignature::Zstandard)).unwrap();
    let sc1 = to_bytes(&doc, opts(Tier::Tier1, CompressionSignature::Zstandard)).unwrap();
    let sc05 = to_bytes(&doc, opts(Tier::Tier05, CompressionSignature::Lzma)).unwrap();

    assert!(probe(Cursor::new(&sc2)));
    assert!(!probe(Cursor::new(&sc1)));
    assert!(!probe(Cursor::new(&sc05)));
}

#[test]
fn probe_reads_no_more_than_the_header() {
    let doc = sample_document();
    let bytes = to_bytes(&doc, opts(Tier::Tier2, CompressionSignature::None)).unwrap();
    let mut cursor = Cursor::new(bytes);
    assert!(probe(&mut cursor));
    assert_eq!(cursor.position(), PROBE_HEADER_LEN as u64);
}

#[test]
fn probe_short_or_foreign_streams_are_not_tier2() {
    assert!(!probe(Cursor::new(Vec::<u8>::new())));
    assert!(!probe(Cursor::new(b"SC\0\0".to_vec())));
    assert!(!probe(Cursor::new(b"XX\0\0\0\x05".to_vec())));
    assert!(probe(Cursor::new(b"SC\0\0\0\x05".to_vec())));
}

#[test]
fn save_then_load_keeps_document_and_flags() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("out.sc");
    let doc = sample_document();

    for sig in [
        CompressionSignature::None,
        CompressionSignature::Lzma,
        CompressionSignature::Zstandard,
    ] {
        let o = opts(Tier::Tier1, sig);
        save(&doc, &path, o).unwrap();
        let loaded = load(&path).unwrap();
        assert_eq!(loaded.document, doc, "{sig}");
        assert_eq!(loaded.flags, o.flags, "{sig}");

        let raw = std::fs::read(&path).unwrap();
        assert_eq!(raw[PROBE_HEADER_LEN], sig.tag());
    }
    assert!(!dir.path().join("nested").join("out.sc.partial").exists());
}

#[test]
fn load_rejects_malformed_containers() {
    let cases: [(&str, Vec<u8>); 5] = [
        ("short", b"SC".to_vec()),
        ("magic", b"ZZ\0\0\0\x04\0{}".to_vec()),
        ("version", b"SC\0\0\0\x09\0{}".to_vec()),
        ("signature", b"SC\0\0\0\x04\x07{}".to_vec()),
        ("payload", b"SC\0\0\0\x04\0not json".to_vec()),
    ];
    for (name, bytes) in cases {
        let err = load_from_bytes(&bytes).unwrap_err();
        assert!(matches!(err, DowngradeError::Load(_)), "{name}: {err}");
    }
}

#[test]
fn load_missing_file_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.sc");
    let err = load(&path).unwrap_err();
    assert!(matches!(err, DowngradeError::Load(_)));
    assert!(err.to_string().contains("absent.sc"));
}
