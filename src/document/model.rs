/// In-memory representation of one asset container.
///
/// Built by [`crate::load`], mutated by the downgrade steps, then handed
/// read-only to [`crate::save`]. Global export flags are kept out of this
/// struct and travel as [`DocumentFlags`] instead.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Document {
    /// Shapes in file order.
    #[serde(default)]
    pub shapes: Vec<Shape>,
    /// Textures in file order.
    #[serde(default)]
    pub textures: Vec<Texture>,
    /// Text fields in file order.
    #[serde(default)]
    pub text_fields: Vec<TextField>,
}

impl Document {
    /// Total number of draw commands across all shapes.
    pub fn draw_command_count(&self) -> usize {
        self.shapes.iter().map(|s| s.commands.len()).sum()
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// A vector shape made of textured draw commands.
pub struct Shape {
    /// Export id of the shape.
    pub id: u16,
    /// Draw commands, in render order.
    #[serde(default)]
    pub commands: Vec<DrawCommand>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// One textured triangle-strip primitive inside a [`Shape`].
pub struct DrawCommand {
    /// Index into [`Document::textures`].
    pub texture_index: u32,
    /// Strip vertices. Reordering never changes the length.
    #[serde(default)]
    pub vertices: Vec<Vertex>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Position plus texture coordinate.
pub struct Vertex {
    /// X position in twips.
    pub x: f32,
    /// Y position in twips.
    pub y: f32,
    /// Normalized U coordinate.
    pub u: f32,
    /// Normalized V coordinate.
    pub v: f32,
}

impl Vertex {
    /// Build a vertex from position and UV.
    pub fn new(x: f32, y: f32, u: f32, v: f32) -> Self {
        Self { x, y, u, v }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
/// How a texture payload is stored inside the container.
pub enum TextureEncoding {
    /// Plain pixel rows. Every tier can read it.
    #[default]
    Raw,
    /// Proprietary block codec, tier-2 runtimes only.
    SupercellTexture,
    /// KTX container. Tier-1 can read it; tier-0.5 cannot.
    Khronos,
}

impl TextureEncoding {
    /// Whether this is the proprietary codec that only tier-2 understands.
    pub fn is_proprietary(self) -> bool {
        matches!(self, TextureEncoding::SupercellTexture)
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Texture sheet referenced by draw commands.
pub struct Texture {
    /// Width in pixels.
    pub width: u16,
    /// Height in pixels.
    pub height: u16,
    /// Storage encoding. The serializer re-encodes pixels to match.
    #[serde(default)]
    pub encoding: TextureEncoding,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Dynamic text element.
pub struct TextField {
    /// Export id of the text field.
    pub id: u16,
    /// Font name as referenced by the runtime.
    #[serde(default)]
    pub font_name: String,
    /// Default text.
    #[serde(default)]
    pub text: String,
    /// Automatic kerning. Unsupported by tier-0.5 renderers.
    #[serde(default)]
    pub auto_kern: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Container-wide export switches, passed by value into the serializer.
pub struct DocumentFlags {
    /// Textures live in a sibling `_tex` file instead of inline.
    pub use_external_textures: bool,
    /// Custom property chunk is written.
    pub save_custom_property: bool,
    /// High-resolution texture variants are shipped.
    pub use_multi_resolution: bool,
    /// Low-resolution texture variants are shipped.
    pub use_low_resolution: bool,
}

impl DocumentFlags {
    /// All four switches off.
    pub const NONE: DocumentFlags = DocumentFlags {
        use_external_textures: false,
        save_custom_property: false,
        use_multi_resolution: false,
        use_low_resolution: false,
    };

    /// All four switches on.
    pub const ALL: DocumentFlags = DocumentFlags {
        use_external_textures: true,
        save_custom_property: true,
        use_multi_resolution: true,
        use_low_resolution: true,
    };
}

/// A document together with the export flags it was stored with.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoadedDocument {
    /// Parsed content.
    pub document: Document,
    /// Flags read from the container.
    pub flags: DocumentFlags,
}

#[cfg(test)]
#[path = "../../tests/unit/document/model.rs"]
mod tests;
