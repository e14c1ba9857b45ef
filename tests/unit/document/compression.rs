use super::*;

fn sample() -> Vec<u8> {
    br#"{"shapes":[{"id":1,"commands":[]}],"textures":[],"text_fields":[]}"#.repeat(16)
}

#[test]
fn tags_are_stable() {
    assert_eq!(CompressionSignature::None.tag(), 0);
    assert_eq!(CompressionSignature::Lzma.tag(), 1);
    assert_eq!(CompressionSignature::Zstandard.tag(), 3);
    assert_eq!(CompressionSignature::from_tag(2), None);
    for sig in [
        CompressionSignature::None,
        CompressionSignature::Lzma,
        CompressionSignature::Zstandard,
    ] {
        assert_eq!(CompressionSignature::from_tag(sig.tag()), Some(sig));
    }
}

#[test]
fn codecs_restore_the_payload() {
    let data = sample();
    for sig in [
        CompressionSignature::None,
        CompressionSignature::Lzma,
        CompressionSignature::Zstandard,
    ] {
        let packed = compress(sig, &data).unwrap();
        assert_eq!(decompress(sig, &packed).unwrap(), data, "{sig}");
    }
}

#[test]
fn zstd_shrinks_repetitive_payloads() {
    let data = sample();
    let packed = compress(CompressionSignature::Zstandard, &data).unwrap();
    assert!(packed.len() < data.len());
}

#[test]
fn zstd_frame_starts_with_magic() {
    let packed = compress(CompressionSignature::Zstandard, &sample()).unwrap();
    assert_eq!(&packed[..4], &[0x28, 0xb5, 0x2f, 0xfd]);
}

#[test]
fn garbage_fails_as_load_error() {
    let junk = [0xffu8; 32];
    for sig in [CompressionSignature::Lzma, CompressionSignature::Zstandard] {
        let err = decompress(sig, &junk).unwrap_err();
        assert!(matches!(err, DowngradeError::Load(_)), "{sig}: {err}");
    }
}
