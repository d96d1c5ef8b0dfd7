use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::foundation::error::{DotsError, DotsResult};

/// Filesystem access used while looking for a font file.
pub trait FontProbe {
    fn exists(&self, path: &Path) -> bool;
    fn read(&self, path: &Path) -> DotsResult<Vec<u8>>;
}

/// [`FontProbe`] backed by the real filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsProbe;

impl FontProbe for FsProbe {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read(&self, path: &Path) -> DotsResult<Vec<u8>> {
        std::fs::read(path)
            .with_context(|| format!("read font bytes from '{}'", path.display()))
            .map_err(DotsError::from)
    }
}

/// Registry that accepts font bytes under a logical family name.
///
/// Registering the same logical name twice must be harmless.
pub trait FontStore {
    fn register_font(&mut self, bytes: Vec<u8>, logical_name: &str) -> DotsResult<()>;
}

/// Where to look for the caption font and what to call it.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FontSource {
    /// Tried in order; the first existing file wins.
    pub candidates: Vec<PathBuf>,
    /// Family name the registered font is addressed by.
    pub logical_name: String,
    /// Generic family used when no candidate could be registered.
    pub fallback_family: String,
}

impl Default for FontSource {
    fn default() -> Self {
        Self {
            candidates: vec![
                PathBuf::from("fonts/Inter-Regular.ttf"),
                PathBuf::from("assets/fonts/Inter-Regular.ttf"),
                PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
            ],
            logical_name: "YearDots".to_string(),
            fallback_family: "sans-serif".to_string(),
        }
    }
}

/// Font family chosen for a render, before a size is applied.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct FontFace {
    pub family: String,
    /// Set when the custom font could not be registered.
    pub fallback: bool,
}

impl FontFace {
    pub fn sized(&self, size_px: f32) -> ResolvedFont {
        ResolvedFont {
            family: self.family.clone(),
            size_px,
        }
    }
}

/// A family name plus a pixel size, ready for measuring and drawing text.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ResolvedFont {
    pub family: String,
    pub size_px: f32,
}

/// Resolve the caption font once per render.
///
/// Only the first existing candidate is loaded. A missing file, unreadable bytes, or a failed
/// registration degrade to `source.fallback_family`; this never fails.
pub fn resolve_font(
    source: &FontSource,
    probe: &dyn FontProbe,
    store: &mut dyn FontStore,
) -> FontFace {
    let fallback = || FontFace {
        family: source.fallback_family.clone(),
        fallback: true,
    };

    let Some(path) = source.candidates.iter().find(|p| probe.exists(p)) else {
        tracing::warn!(
            candidates = ?source.candidates,
            fallback = %source.fallback_family,
            "no font candidate found; using fallback family"
        );
        return fallback();
    };

    match load_and_register(path, &source.logical_name, probe, store) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), name = %source.logical_name, "registered font");
            FontFace {
                family: source.logical_name.clone(),
                fallback: false,
            }
        }
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                fallback = %source.fallback_family,
                "font registration failed; using fallback family"
            );
            fallback()
        }
    }
}

fn load_and_register(
    path: &Path,
    logical_name: &str,
    probe: &dyn FontProbe,
    store: &mut dyn FontStore,
) -> DotsResult<()> {
    let bytes = probe.read(path)?;
    store.register_font(bytes, logical_name)
}

#[cfg(test)]
#[path = "../../tests/unit/fonts/resolver.rs"]
mod tests;
