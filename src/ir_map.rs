//! Intermediate level representation shared by the decoders.

use macroquad::prelude::*;

use crate::geom::NativeRect;

/// Canonical, format-agnostic level description.
#[derive(Debug, Clone, Default)]
pub struct IrMap {
    /// Layers in file order, groups flattened.
    pub layers: Vec<IrLayer>,
}

impl IrMap {
    /// Object groups whose name matches `name`, ignoring ASCII case.
    pub fn object_groups<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a IrLayer> + 'a {
        self.layers.iter().filter(move |l| {
            matches!(l.kind, IrLayerKind::Objects { .. }) && l.name.eq_ignore_ascii_case(name)
        })
    }
}

/// What a layer holds.
#[derive(Debug, Clone)]
pub enum IrLayerKind {
    /// Object rectangles as exported, without the layer offset.
    Objects {
        /// Rectangles in native units.
        objects: Vec<NativeRect>,
    },
    /// Tile, image and any other layer kind; carries no collision data.
    Unsupported,
}

/// One layer of the map.
#[derive(Debug, Clone)]
pub struct IrLayer {
    /// Name as written in the file.
    pub name: String,
    /// Offset in native units, including the offsets of enclosing groups.
    pub offset: Vec2,
    /// Payload.
    pub kind: IrLayerKind,
}

impl IrLayer {
    /// Object bounds with the layer offset applied; empty for non-object layers.
    pub fn object_bounds(&self) -> Vec<NativeRect> {
        match &self.kind {
            IrLayerKind::Objects { objects } => objects
                .iter()
                .map(|o| NativeRect::new(o.x + self.offset.x, o.y + self.offset.y, o.width, o.height))
                .collect(),
            IrLayerKind::Unsupported => Vec::new(),
        }
    }
}
