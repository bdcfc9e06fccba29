//! Tiled JSON decoder.

use crate::error::LoadError;
use crate::geom::NativeRect;
use crate::ir_map::*;
use macroquad::prelude::*;
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize)]
struct JsonLayer {
    #[serde(default)]
    offsetx: f32,
    #[serde(default)]
    offsety: f32,
    #[serde(default)]
    name: String,
    #[serde(rename = "type")]
    kind: Option<String>, // "objectgroup" is the one we care about
    #[serde(default)]
    objects: Vec<JsonObject>,
    #[serde(default)]
    layers: Vec<JsonLayer>, // children of a "group" layer
}

#[derive(Deserialize)]
struct JsonMap {
    #[serde(default)]
    layers: Vec<JsonLayer>,
}

#[derive(Deserialize)]
struct JsonObject {
    #[serde(default)]
    x: f32,
    #[serde(default)]
    y: f32,
    #[serde(default)]
    width: f32,
    #[serde(default)]
    height: f32,
}

fn object_to_ir(obj: JsonObject) -> NativeRect {
    NativeRect::new(obj.x, obj.y, obj.width, obj.height)
}

/// Flatten group layers into `out`, accumulating their offsets.
fn push_layer(l: JsonLayer, parent_offset: Vec2, out: &mut Vec<IrLayer>) {
    let offset = parent_offset + vec2(l.offsetx, l.offsety);
    let kind = match l.kind.as_deref().unwrap_or("tilelayer") {
        "group" => {
            for child in l.layers {
                push_layer(child, offset, out);
            }
            return;
        }
        "objectgroup" => IrLayerKind::Objects {
            objects: l.objects.into_iter().map(object_to_ir).collect(),
        },
        _ => IrLayerKind::Unsupported,
    };
    out.push(IrLayer {
        name: l.name,
        offset,
        kind,
    });
}

/// Decode a Tiled JSON document. `origin` is only used in error messages.
pub fn decode_level_str(txt: &str, origin: &Path) -> Result<IrMap, LoadError> {
    let j: JsonMap = serde_json::from_str(txt).map_err(|source| LoadError::json(origin, source))?;

    let mut layers = Vec::with_capacity(j.layers.len());
    for l in j.layers {
        push_layer(l, Vec2::ZERO, &mut layers);
    }

    Ok(IrMap { layers })
}

/// Decode a Tiled JSON file. Any other extension is rejected before reading.
pub fn decode_level_file(path: &Path) -> Result<IrMap, LoadError> {
    if path.extension().and_then(|e| e.to_str()) != Some("json") {
        return Err(LoadError::UnsupportedFormat(path.display().to_string()));
    }

    let txt = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_level_str(&txt, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_dir() -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock went backwards")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("tiled_platformer_loader_{nanos}"));
        fs::create_dir_all(&dir).expect("failed to create temp dir");
        dir
    }

    #[test]
    fn decodes_object_groups_and_skips_tile_data() {
        let json = r#"{
          "tilewidth": 16,
          "tileheight": 16,
          "layers": [
            { "type":"tilelayer", "name":"bg", "width":2, "height":1, "data":[1,2] },
            {
              "type":"objectgroup",
              "name":"Ground",
              "visible": false,
              "objects":[
                {"id":3,"name":"","x":0,"y":208,"width":1104,"height":32,"rotation":0,"visible":true}
              ]
            },
            { "type":"imagelayer", "name":"sky", "image":"sky.png" }
          ]
        }"#;

        let ir = decode_level_str(json, Path::new("<inline>")).expect("decode");
        assert_eq!(ir.layers.len(), 3);
        assert!(matches!(ir.layers[0].kind, IrLayerKind::Unsupported));
        assert!(matches!(ir.layers[2].kind, IrLayerKind::Unsupported));

        // Hidden collision layers still count.
        let ground: Vec<_> = ir.object_groups("ground").collect();
        assert_eq!(ground.len(), 1);
        assert_eq!(
            ground[0].object_bounds(),
            vec![NativeRect::new(0.0, 208.0, 1104.0, 32.0)]
        );
    }

    #[test]
    fn flattens_groups_and_accumulates_offsets() {
        let json = r#"{
          "layers": [
            {
              "type":"group",
              "name":"collision",
              "offsetx": 8,
              "layers": [
                {
                  "type":"objectgroup",
                  "name":"mystery",
                  "offsetx": 2,
                  "offsety": 4,
                  "objects":[{"x":10,"y":20,"width":16,"height":16}]
                }
              ]
            }
          ]
        }"#;

        let ir = decode_level_str(json, Path::new("<inline>")).expect("decode");
        assert_eq!(ir.layers.len(), 1);
        let bounds = ir.layers[0].object_bounds();
        assert_eq!(bounds[0].x, 20.0);
        assert_eq!(bounds[0].y, 24.0);
    }

    #[test]
    fn returns_typed_error_for_malformed_json() {
        let dir = temp_dir();
        let path = dir.join("level.json");
        fs::write(&path, "{ not json").expect("failed to write level");

        let err = decode_level_file(&path).err().expect("expected decode error");
        assert!(matches!(err, LoadError::Json { .. }));
    }

    #[test]
    fn returns_typed_error_for_missing_file() {
        let dir = temp_dir();
        let err = decode_level_file(&dir.join("nope.json"))
            .err()
            .expect("expected decode error");
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn rejects_non_json_extension() {
        let err = decode_level_file(Path::new("world1-1.tmx"))
            .err()
            .expect("expected format error");
        match err {
            LoadError::UnsupportedFormat(p) => assert_eq!(p, "world1-1.tmx"),
            other => panic!("expected UnsupportedFormat, got {:?}", other),
        }
    }
}
