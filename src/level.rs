//! Collision geometry of a loaded level, sorted into categories.

use std::fmt;
use std::path::Path;

use log::{error, info, warn};
use macroquad::math::Rect;
use serde::{Deserialize, Deserializer};

use crate::error::{LoadError, MissingLayer};
use crate::geom::native_to_world;
use crate::ir_map::IrMap;
use crate::loader::json_loader::{decode_level_file, decode_level_str};

/// Kind of static level geometry. Each maps to one Tiled object group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Solid floor the body stands on.
    Ground,
    /// Brick ledges.
    Platform,
    /// Blocks that break when hit from below and can be stood on.
    Mystery,
}

impl Category {
    /// Every category, in resolution order.
    pub const ALL: [Category; 3] = [Category::Ground, Category::Platform, Category::Mystery];

    /// Name of the object group in the level file.
    pub fn layer_name(self) -> &'static str {
        match self {
            Category::Ground => "ground",
            Category::Platform => "platform",
            Category::Mystery => "mystery",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.layer_name())
    }
}

bitflags::bitflags! {
    /// Set of categories whose collision handlers are active.
    ///
    /// Config files list the enabled categories by name.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CategorySet: u8 {
        /// See [`Category::Ground`].
        const GROUND   = 1 << 0;
        /// See [`Category::Platform`].
        const PLATFORM = 1 << 1;
        /// See [`Category::Mystery`].
        const MYSTERY  = 1 << 2;
    }
}

/// Ground and mystery blocks collide; platform handling is off.
impl Default for CategorySet {
    fn default() -> Self {
        CategorySet::GROUND | CategorySet::MYSTERY
    }
}

impl From<Category> for CategorySet {
    fn from(category: Category) -> Self {
        match category {
            Category::Ground => CategorySet::GROUND,
            Category::Platform => CategorySet::PLATFORM,
            Category::Mystery => CategorySet::MYSTERY,
        }
    }
}

impl From<Vec<Category>> for CategorySet {
    fn from(list: Vec<Category>) -> Self {
        list.into_iter().map(CategorySet::from).collect()
    }
}

impl<'de> Deserialize<'de> for CategorySet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<Category>::deserialize(deserializer).map(CategorySet::from)
    }
}

/// World-space collision rectangles for one level.
///
/// Ground and platform lists never change after load. The mystery list only
/// shrinks, as blocks get knocked out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LevelGeometry {
    ground: Vec<Rect>,
    platform: Vec<Rect>,
    mystery: Vec<Rect>,
}

impl LevelGeometry {
    /// Geometry from rectangles already in world space.
    pub fn new(ground: Vec<Rect>, platform: Vec<Rect>, mystery: Vec<Rect>) -> Self {
        Self {
            ground,
            platform,
            mystery,
        }
    }

    /// Sort the object groups of `ir` into categories, converting to world space.
    ///
    /// Missing groups leave their category empty and are returned so the caller
    /// can report them. When a name appears on several groups, the last one wins.
    pub fn from_ir(ir: &IrMap, scale: f32, sky_offset: f32) -> (Self, Vec<MissingLayer>) {
        let mut geometry = LevelGeometry::default();
        let mut missing = Vec::new();

        for category in Category::ALL {
            match ir.object_groups(category.layer_name()).last() {
                Some(layer) => {
                    *geometry.rects_mut(category) = layer
                        .object_bounds()
                        .into_iter()
                        .map(|r| native_to_world(r, scale, sky_offset))
                        .collect();
                }
                None => missing.push(MissingLayer { category }),
            }
        }

        (geometry, missing)
    }

    /// Parse a Tiled JSON document and log what was found.
    pub fn from_json_str(txt: &str, scale: f32, sky_offset: f32) -> Result<Self, LoadError> {
        let ir = decode_level_str(txt, Path::new("<inline>"))?;
        Ok(Self::from_ir_logged(&ir, scale, sky_offset))
    }

    /// Read and parse a Tiled JSON file from disk.
    pub fn load_file(path: &Path, scale: f32, sky_offset: f32) -> Result<Self, LoadError> {
        let ir = decode_level_file(path)?;
        Ok(Self::from_ir_logged(&ir, scale, sky_offset))
    }

    fn from_ir_logged(ir: &IrMap, scale: f32, sky_offset: f32) -> Self {
        let (geometry, missing) = Self::from_ir(ir, scale, sky_offset);
        for m in &missing {
            if m.is_hard() {
                error!("{m}; ground collision is disabled");
            } else {
                warn!("{m}");
            }
        }
        info!(
            "Level loaded: {} ground, {} platform, {} mystery",
            geometry.ground.len(),
            geometry.platform.len(),
            geometry.mystery.len()
        );
        geometry
    }

    /// Rectangles of one category, in file order.
    pub fn rects(&self, category: Category) -> &[Rect] {
        match category {
            Category::Ground => &self.ground,
            Category::Platform => &self.platform,
            Category::Mystery => &self.mystery,
        }
    }

    fn rects_mut(&mut self, category: Category) -> &mut Vec<Rect> {
        match category {
            Category::Ground => &mut self.ground,
            Category::Platform => &mut self.platform,
            Category::Mystery => &mut self.mystery,
        }
    }

    /// Ground rectangles.
    pub fn ground(&self) -> &[Rect] {
        &self.ground
    }

    /// Platform rectangles.
    pub fn platforms(&self) -> &[Rect] {
        &self.platform
    }

    /// Mystery blocks still standing.
    pub fn mystery(&self) -> &[Rect] {
        &self.mystery
    }

    /// Knock out the mystery block at `index`.
    pub(crate) fn remove_mystery(&mut self, index: usize) -> Rect {
        self.mystery.remove(index)
    }

    /// No geometry in any category.
    pub fn is_empty(&self) -> bool {
        self.ground.is_empty() && self.platform.is_empty() && self.mystery.is_empty()
    }
}
