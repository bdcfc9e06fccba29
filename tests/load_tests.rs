// tests/load_tests.rs

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tiled_platformer::{InputIntent, LevelGeometry, LoadError, Session, SessionState};

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock went backwards")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("tiled_platformer_it_{nanos}"));
    fs::create_dir_all(&dir).expect("failed to create temp dir");
    let path = dir.join(name);
    fs::write(&path, contents).expect("failed to write file");
    path
}

#[test]
fn level_without_optional_layers_still_loads() {
    let json = r#"
    {
        "tilewidth": 16,
        "tileheight": 16,
        "layers": [
            { "type": "objectgroup", "name": "ground",
              "objects": [ { "x": 0, "y": 208, "width": 64, "height": 32 } ] }
        ]
    }
    "#;
    let path = temp_file("partial.json", json);

    let level = LevelGeometry::load_file(&path, 2.0, 120.0).expect("should load");
    assert_eq!(level.ground().len(), 1);
    assert!(level.platforms().is_empty());
    assert!(level.mystery().is_empty());
    fs::remove_file(&path).unwrap();
}

#[test]
fn unsupported_format_is_rejected() {
    let err = LevelGeometry::load_file(Path::new("world1-1.tmx"), 2.0, 120.0).unwrap_err();
    match err {
        LoadError::UnsupportedFormat(path) => assert_eq!(path, "world1-1.tmx"),
        other => panic!("expected UnsupportedFormat, got {:?}", other),
    }
}

#[test]
fn malformed_level_degrades_the_session() {
    let path = temp_file("broken.json", "{ \"layers\": [ ");
    let err = LevelGeometry::load_file(&path, 2.0, 120.0).unwrap_err();
    assert!(matches!(err, LoadError::Json { .. }));

    let mut session = Session::new(Default::default());
    session.attach_failed(&err);
    assert_eq!(session.state(), SessionState::Running);
    assert!(session.level().is_none());
}

#[test]
fn level_without_ground_still_collides_with_mystery_blocks() {
    let json = r#"
    {
        "layers": [
            { "type": "objectgroup", "name": "mystery",
              "objects": [ { "x": 256, "y": 144, "width": 16, "height": 16 } ] }
        ]
    }
    "#;
    let level = LevelGeometry::from_json_str(json, 2.0, 120.0).expect("should load");
    assert!(level.ground().is_empty());

    let mut session = Session::new(Default::default());
    session.attach_level(level);
    session.body_mut().x = 515.0;

    for _ in 0..200 {
        session.tick(1.0 / 60.0, &mut InputIntent::default());
        if session.body().on_platform {
            break;
        }
    }
    assert!(session.body().on_platform);
    assert_eq!(session.body().y, 408.0 - 32.0);
}
