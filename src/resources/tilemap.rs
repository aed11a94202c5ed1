//! Map data handed over by the map-asset loader.
//!
//! The core has no knowledge of any map editor's file format; it consumes a
//! JSON document of this shape and turns it into entities (see
//! [`crate::game::spawn_tiles`]). Tile ids index the sprite sheet
//! left-to-right, top-to-bottom; flip flags describe the editor's tile
//! orientation and are mapped to sprite rotations at spawn time.

use serde::{Deserialize, Serialize};

/// One placed tile: grid coordinates, sheet index, and orientation flags.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TilePosition {
    pub x: u32,
    pub y: u32,
    pub id: u32,
    #[serde(default)]
    pub flip_h: bool,
    #[serde(default)]
    pub flip_v: bool,
    #[serde(default)]
    pub flip_d: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TileLayer {
    pub name: String,
    pub positions: Vec<TilePosition>,
}

/// Non-tile map metadata: a kind tag plus a world-space rectangle.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MapObject {
    pub kind: String,
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub width: f32,
    #[serde(default)]
    pub height: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Tilemap {
    pub tile_size: u32,
    /// Tiles per row in the sprite sheet the ids index into.
    pub sheet_columns: u32,
    pub map_width: u32,
    pub map_height: u32,
    pub layers: Vec<TileLayer>,
    #[serde(default)]
    pub objects: Vec<MapObject>,
}

impl Tilemap {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn from_file(path: &str) -> Result<Self, String> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to load tilemap {path}: {e}"))?;
        Self::from_json(&json).map_err(|e| format!("Failed to parse tilemap {path}: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_map() {
        let json = r#"{
            "tile_size": 16,
            "sheet_columns": 8,
            "map_width": 2,
            "map_height": 2,
            "layers": [
                {
                    "name": "ground",
                    "positions": [
                        {"x": 0, "y": 0, "id": 3},
                        {"x": 1, "y": 0, "id": 4, "flip_d": true}
                    ]
                }
            ]
        }"#;
        let map = Tilemap::from_json(json).unwrap();
        assert_eq!(map.tile_size, 16);
        assert_eq!(map.layers.len(), 1);
        assert_eq!(map.layers[0].positions.len(), 2);
        assert!(!map.layers[0].positions[0].flip_d);
        assert!(map.layers[0].positions[1].flip_d);
        assert!(map.objects.is_empty());
    }

    #[test]
    fn test_parse_map_objects() {
        let json = r#"{
            "tile_size": 16,
            "sheet_columns": 8,
            "map_width": 1,
            "map_height": 1,
            "layers": [],
            "objects": [
                {"kind": "Collision", "x": 32.0, "y": 48.0, "width": 16.0, "height": 32.0}
            ]
        }"#;
        let map = Tilemap::from_json(json).unwrap();
        assert_eq!(map.objects.len(), 1);
        assert_eq!(map.objects[0].kind, "Collision");
        assert_eq!(map.objects[0].height, 32.0);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Tilemap::from_json("{not json").is_err());
    }
}
