use super::*;

#[test]
fn only_supercell_texture_is_proprietary() {
    assert!(TextureEncoding::SupercellTexture.is_proprietary());
    assert!(!TextureEncoding::Raw.is_proprietary());
    assert!(!TextureEncoding::Khronos.is_proprietary());
}

#[test]
fn draw_command_count_sums_shapes() {
    let doc = Document {
        shapes: vec![
            Shape {
                id: 0,
                commands: vec![DrawCommand::default(), DrawCommand::default()],
            },
            Shape {
                id: 1,
                commands: vec![],
            },
            Shape {
                id: 2,
                commands: vec![DrawCommand::default()],
            },
        ],
        ..Document::default()
    };
    assert_eq!(doc.draw_command_count(), 3);
}

#[test]
fn missing_collections_deserialize_empty() {
    let doc: Document = serde_json::from_str("{}").unwrap();
    assert!(doc.shapes.is_empty());
    assert!(doc.textures.is_empty());
    assert!(doc.text_fields.is_empty());

    let tex: Texture = serde_json::from_str(r#"{"width":4,"height":2}"#).unwrap();
    assert_eq!(tex.encoding, TextureEncoding::Raw);
}

#[test]
fn flag_presets() {
    assert_eq!(DocumentFlags::default(), DocumentFlags::NONE);
    assert!(DocumentFlags::ALL.use_external_textures);
    assert!(DocumentFlags::ALL.save_custom_property);
    assert!(DocumentFlags::ALL.use_multi_resolution);
    assert!(DocumentFlags::ALL.use_low_resolution);
}
