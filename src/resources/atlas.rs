//! Sprite-atlas frame table loaded from TexturePacker descriptors.
//!
//! The store merges every loaded descriptor into one lookup table keyed by
//! packed source filename (e.g. `"button_0.png"`). Lookups never fail: a
//! missing key yields the zero sentinel rect, so per-tick code stays
//! error-free and only the explicit load calls return `Result`.

use std::fs;
use std::path::Path;

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use smallvec::SmallVec;

use crate::components::framerect::FrameRect;
use crate::error::AtlasError;

/// Resolution suffix inserted before a filename's extension when the screen
/// crosses the SD threshold.
pub const HD_SUFFIX_2X: &str = "2x";
/// Resolution suffix for screens past the HD threshold.
pub const HD_SUFFIX_4X: &str = "4x";
/// File extension of atlas page textures.
pub const ATLAS_TEX_EXTENSION: &str = ".png";

#[derive(Deserialize)]
struct AtlasDoc {
    frames: Vec<AtlasEntry>,
}

// TexturePacker emits many more keys (rotated, trimmed, pivot, meta...);
// serde drops the ones we do not model.
#[derive(Deserialize)]
struct AtlasEntry {
    filename: String,
    frame: FrameRect,
}

/// The frame sequence resolved for one element.
#[derive(Debug, Clone)]
pub struct FrameSequence {
    /// Frames found, in index order.
    pub frames: SmallVec<[FrameRect; 8]>,
    /// Width of the widest probed frame.
    pub natural_w: f32,
    /// Height of the tallest probed frame.
    pub natural_h: f32,
    /// True when the indexed probe failed and the exact filename was used.
    pub standalone: bool,
}

/// Frame lookup table shared by every loaded atlas.
#[derive(Resource, Default)]
pub struct AtlasStore {
    frames: FxHashMap<String, FrameRect>,
    loaded: bool,
    texture: Option<String>,
}

impl AtlasStore {
    /// Reads and parses a TexturePacker JSON descriptor, merging its frames
    /// into the table and recording the matching page texture name (the
    /// descriptor path with its extension swapped). Returns the number of
    /// frames added.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<usize, AtlasError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let count = self.load_str(&text)?;
        self.texture = Some(page_texture_name(&path.to_string_lossy()));
        Ok(count)
    }

    /// Parses a TexturePacker JSON descriptor held in memory.
    pub fn load_str(&mut self, json: &str) -> Result<usize, AtlasError> {
        let doc: AtlasDoc = serde_json::from_str(json)?;
        let count = doc.frames.len();
        for entry in doc.frames {
            self.frames.insert(entry.filename, entry.frame);
        }
        self.loaded = true;
        Ok(count)
    }

    /// Registers a single frame directly, bypassing descriptor files.
    pub fn insert(&mut self, name: impl Into<String>, rect: FrameRect) {
        self.frames.insert(name.into(), rect);
        self.loaded = true;
    }

    /// Whether any frames have been loaded or inserted.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Page texture name recorded by the last [`load_file`](Self::load_file),
    /// if any. Atlas-backed sprites sample this texture.
    pub fn texture(&self) -> Option<&str> {
        self.texture.as_deref()
    }

    /// Looks up a frame by packed filename. Unknown names yield the zero
    /// sentinel rect.
    pub fn frame(&self, name: &str) -> FrameRect {
        self.frames.get(name).copied().unwrap_or_default()
    }

    /// Resolves the frame sequence for `filename` spanning `count` frames.
    ///
    /// Probes `base_0.ext` first. When present, collects `base_i.ext` over
    /// the whole range; gaps are skipped but still probed, so the natural
    /// size covers the largest frame in the range. When the indexed form is
    /// absent, falls back to a single frame under the exact filename (which
    /// may be the zero sentinel if that is missing too).
    pub fn frame_sequence(&self, filename: &str, count: usize) -> FrameSequence {
        let first = self.frame(&indexed_name(filename, 0));
        if !first.is_valid() {
            let single = self.frame(filename);
            let mut frames = SmallVec::new();
            frames.push(single);
            return FrameSequence {
                frames,
                natural_w: single.w,
                natural_h: single.h,
                standalone: true,
            };
        }

        let mut frames = SmallVec::new();
        frames.push(first);
        let mut natural_w = first.w;
        let mut natural_h = first.h;
        for i in 1..count {
            let rect = self.frame(&indexed_name(filename, i));
            if rect.is_valid() {
                frames.push(rect);
            }
            natural_w = natural_w.max(rect.w);
            natural_h = natural_h.max(rect.h);
        }
        FrameSequence {
            frames,
            natural_w,
            natural_h,
            standalone: false,
        }
    }
}

/// Builds the packed filename of frame `i`: `"run.png"` -> `"run_3.png"`.
fn indexed_name(filename: &str, i: usize) -> String {
    match filename.rsplit_once('.') {
        Some((base, ext)) => format!("{base}_{i}.{ext}"),
        None => format!("{filename}_{i}"),
    }
}

/// Inserts a resolution suffix before the extension:
/// `"menu.png"` + `"2x"` -> `"menu2x.png"`.
pub fn hd_variant(filename: &str, suffix: &str) -> String {
    match filename.rsplit_once('.') {
        Some((base, ext)) => format!("{base}{suffix}.{ext}"),
        None => format!("{filename}{suffix}"),
    }
}

/// Page texture name for a descriptor path: `"ui/menu2x.json"` ->
/// `"ui/menu2x.png"`.
fn page_texture_name(path: &str) -> String {
    match path.rsplit_once('.') {
        Some((base, _)) => format!("{base}{ATLAS_TEX_EXTENSION}"),
        None => format!("{path}{ATLAS_TEX_EXTENSION}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ATLAS_JSON: &str = r#"{
        "frames": [
            {
                "filename": "coin_0.png",
                "frame": { "x": 0, "y": 0, "w": 32, "h": 32 },
                "rotated": false,
                "trimmed": true,
                "sourceSize": { "w": 34, "h": 34 }
            },
            {
                "filename": "coin_1.png",
                "frame": { "x": 32, "y": 0, "w": 32, "h": 48 }
            },
            {
                "filename": "logo.png",
                "frame": { "x": 64, "y": 0, "w": 120, "h": 40 }
            }
        ],
        "meta": { "app": "TexturePacker", "scale": "1" }
    }"#;

    #[test]
    fn test_load_str_merges_frames() {
        let mut store = AtlasStore::default();
        assert!(!store.is_loaded());
        let count = store.load_str(ATLAS_JSON).unwrap();
        assert_eq!(count, 3);
        assert!(store.is_loaded());
        assert_eq!(store.frame("coin_0.png"), FrameRect::new(0.0, 0.0, 32.0, 32.0));
    }

    #[test]
    fn test_missing_frame_is_zero_sentinel() {
        let mut store = AtlasStore::default();
        store.load_str(ATLAS_JSON).unwrap();
        assert!(store.frame("nope.png").is_zero());
    }

    #[test]
    fn test_malformed_descriptor_errors() {
        let mut store = AtlasStore::default();
        assert!(store.load_str("{ \"no_frames\": [] }").is_err());
        assert!(store.load_str("not json").is_err());
        assert!(!store.is_loaded());
    }

    #[test]
    fn test_frame_sequence_indexed() {
        let mut store = AtlasStore::default();
        store.load_str(ATLAS_JSON).unwrap();
        let seq = store.frame_sequence("coin.png", 2);
        assert!(!seq.standalone);
        assert_eq!(seq.frames.len(), 2);
        // Natural size is the max over the range: 32 wide, 48 tall.
        assert_eq!(seq.natural_w, 32.0);
        assert_eq!(seq.natural_h, 48.0);
    }

    #[test]
    fn test_frame_sequence_skips_gaps() {
        let mut store = AtlasStore::default();
        store.insert("walk_0.png", FrameRect::new(0.0, 0.0, 16.0, 16.0));
        store.insert("walk_2.png", FrameRect::new(32.0, 0.0, 24.0, 16.0));
        let seq = store.frame_sequence("walk.png", 3);
        assert_eq!(seq.frames.len(), 2);
        assert_eq!(seq.natural_w, 24.0);
    }

    #[test]
    fn test_frame_sequence_standalone_fallback() {
        let mut store = AtlasStore::default();
        store.load_str(ATLAS_JSON).unwrap();
        let seq = store.frame_sequence("logo.png", 4);
        assert!(seq.standalone);
        assert_eq!(seq.frames.len(), 1);
        assert_eq!(seq.natural_w, 120.0);
        assert_eq!(seq.natural_h, 40.0);
    }

    #[test]
    fn test_frame_sequence_nothing_found() {
        let store = AtlasStore::default();
        let seq = store.frame_sequence("ghost.png", 2);
        assert!(seq.standalone);
        assert_eq!(seq.frames.len(), 1);
        assert!(seq.frames[0].is_zero());
    }

    #[test]
    fn test_indexed_name() {
        assert_eq!(indexed_name("run.png", 3), "run_3.png");
        assert_eq!(indexed_name("noext", 0), "noext_0");
    }

    #[test]
    fn test_hd_variant() {
        assert_eq!(hd_variant("menu.png", HD_SUFFIX_2X), "menu2x.png");
        assert_eq!(hd_variant("menu.json", HD_SUFFIX_4X), "menu4x.json");
        assert_eq!(hd_variant("menu", HD_SUFFIX_2X), "menu2x");
    }

    #[test]
    fn test_page_texture_name() {
        assert_eq!(page_texture_name("ui/menu2x.json"), "ui/menu2x.png");
        assert_eq!(page_texture_name("menu"), "menu.png");
    }

    #[test]
    fn test_load_file_records_page_texture() {
        let path = std::env::temp_dir().join("uimotion_atlas_test.json");
        fs::write(&path, ATLAS_JSON).unwrap();

        let mut store = AtlasStore::default();
        let count = store.load_file(&path).unwrap();
        assert_eq!(count, 3);
        let texture = store.texture().unwrap();
        assert!(texture.ends_with("uimotion_atlas_test.png"));

        fs::remove_file(&path).ok();
    }
}
