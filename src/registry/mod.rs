//! Composition registry: which icon renders under which id, at what size, rate and length.

pub mod icon;

use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::core::{Canvas, Fps, FrameIndex, VideoConfig};
use crate::foundation::error::{IconError, IconResult};
use crate::registry::icon::Icon;
use crate::scene::layer::Scene;
use crate::scene::resource::ResourceScope;

/// One registered composition.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CompositionEntry {
    /// Registry id, e.g. `OnlineIcon`.
    pub id: String,
    /// Icon drawn by this composition.
    pub icon: Icon,
    /// Video configuration.
    pub config: VideoConfig,
}

impl CompositionEntry {
    /// Scene of `frame` for the first instance of this composition.
    pub fn render_scene(&self, frame: FrameIndex) -> Scene {
        self.render_scene_instance(frame, 0)
    }

    /// Scene of `frame` with resource ids namespaced for `instance`.
    ///
    /// Use distinct instances when several scenes of the same composition share one document.
    pub fn render_scene_instance(&self, frame: FrameIndex, instance: u32) -> Scene {
        self.icon.render(
            frame,
            &self.config,
            ResourceScope::new(&self.id, instance),
        )
    }
}

#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct RegistryFile {
    compositions: Vec<EntryDef>,
}

#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct EntryDef {
    id: String,
    icon: Icon,
    width: u32,
    height: u32,
    fps: u32,
    duration_in_frames: u64,
}

impl EntryDef {
    fn into_entry(self) -> IconResult<CompositionEntry> {
        let fps = Fps::new(self.fps, 1)
            .map_err(|e| IconError::validation(format!("composition '{}': {e}", self.id)))?;
        let canvas = Canvas {
            width: self.width,
            height: self.height,
        };
        let config = VideoConfig::new(fps, self.duration_in_frames, canvas)
            .map_err(|e| IconError::validation(format!("composition '{}': {e}", self.id)))?;
        Ok(CompositionEntry {
            id: self.id,
            icon: self.icon,
            config,
        })
    }
}

/// Ordered, id-unique table of compositions.
#[derive(Clone, Debug, PartialEq)]
pub struct Registry {
    entries: Vec<CompositionEntry>,
}

impl Registry {
    /// The five themed icons plus `AnimatedIcon`, all 800x800 at 30 fps for 180 frames.
    pub fn builtin() -> Self {
        let config = VideoConfig {
            fps: Fps { num: 30, den: 1 },
            duration_in_frames: 180,
            canvas: Canvas {
                width: 800,
                height: 800,
            },
        };
        let ids = [
            ("OnlineIcon", Icon::Online),
            ("DataIcon", Icon::Data),
            ("AIIcon", Icon::Ai),
            ("PlatformIcon", Icon::Platform),
            ("EcosystemIcon", Icon::Ecosystem),
            ("AnimatedIcon", Icon::Animated),
        ];
        Self {
            entries: ids
                .into_iter()
                .map(|(id, icon)| CompositionEntry {
                    id: id.to_owned(),
                    icon,
                    config,
                })
                .collect(),
        }
    }

    /// Build a registry, rejecting empty and duplicate ids.
    pub fn from_entries(entries: Vec<CompositionEntry>) -> IconResult<Self> {
        let mut seen = BTreeSet::new();
        for e in &entries {
            if e.id.trim().is_empty() {
                return Err(IconError::validation("composition id must be non-empty"));
            }
            if !seen.insert(e.id.as_str()) {
                return Err(IconError::validation(format!(
                    "duplicate composition id '{}'",
                    e.id
                )));
            }
        }
        Ok(Self { entries })
    }

    /// Parse a registry from JSON.
    pub fn from_reader<R: std::io::Read>(r: R) -> IconResult<Self> {
        let file: RegistryFile = serde_json::from_reader(r)
            .map_err(|e| IconError::serde(format!("parse registry JSON: {e}")))?;
        let entries = file
            .compositions
            .into_iter()
            .map(EntryDef::into_entry)
            .collect::<IconResult<Vec<_>>>()?;
        Self::from_entries(entries)
    }

    /// Parse a registry from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> IconResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            IconError::validation(format!("open registry JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Look up a composition by id.
    pub fn get(&self, id: &str) -> Option<&CompositionEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Look up a composition by id, failing with the list of known ids.
    pub fn require(&self, id: &str) -> IconResult<&CompositionEntry> {
        self.get(id).ok_or_else(|| {
            let known: Vec<&str> = self.entries.iter().map(|e| e.id.as_str()).collect();
            IconError::validation(format!(
                "unknown composition '{id}' (known: {})",
                known.join(", ")
            ))
        })
    }

    /// Entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CompositionEntry> {
        self.entries.iter()
    }

    /// Number of compositions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` when no composition is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/registry/mod.rs"]
mod tests;
