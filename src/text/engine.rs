use std::{borrow::Cow, collections::HashMap};

use crate::{
    fonts::resolver::{FontStore, ResolvedFont},
    foundation::color::Rgba8,
    foundation::error::{DotsError, DotsResult},
};

/// Parley-backed text shaping with a table of fonts registered under logical names.
///
/// Family names that were never registered are handed to Parley unchanged, so generic families
/// such as `sans-serif` resolve through the system font collection.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<Rgba8>,
    aliases: HashMap<String, String>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    /// Construct a new layout engine with fresh Parley contexts.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            aliases: HashMap::new(),
        }
    }

    /// Register raw font bytes and address them as `logical_name`.
    ///
    /// Returns the family name Parley detected in the font data.
    pub fn register_font_bytes(
        &mut self,
        font_bytes: Vec<u8>,
        logical_name: &str,
    ) -> DotsResult<String> {
        if let Some(existing) = self.aliases.get(logical_name) {
            return Ok(existing.clone());
        }

        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| DotsError::font("no font families registered from font bytes"))?;

        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| DotsError::font("registered font family has no name"))?
            .to_string();

        self.aliases
            .insert(logical_name.to_string(), family_name.clone());
        Ok(family_name)
    }

    /// Concrete family name for a logical or generic name.
    pub fn family_for<'a>(&'a self, name: &'a str) -> &'a str {
        self.aliases.get(name).map(String::as_str).unwrap_or(name)
    }

    /// Shape a single unwrapped line of text.
    pub fn layout_line(
        &mut self,
        text: &str,
        font: &ResolvedFont,
        brush: Rgba8,
    ) -> DotsResult<parley::Layout<Rgba8>> {
        if !font.size_px.is_finite() || font.size_px <= 0.0 {
            return Err(DotsError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let family = self.family_for(&font.family).to_string();
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(family)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(font.size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<Rgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }

    /// Advance width of `text` in pixels, trailing whitespace included.
    pub fn measure(&mut self, text: &str, font: &ResolvedFont) -> DotsResult<f64> {
        if text.is_empty() {
            return Ok(0.0);
        }
        let layout = self.layout_line(text, font, Rgba8::default())?;
        Ok(f64::from(layout.full_width()))
    }

    /// Whether `logical_name` has been registered.
    pub fn is_registered(&self, logical_name: &str) -> bool {
        self.aliases.contains_key(logical_name)
    }
}

impl FontStore for TextLayoutEngine {
    fn register_font(&mut self, bytes: Vec<u8>, logical_name: &str) -> DotsResult<()> {
        self.register_font_bytes(bytes, logical_name).map(|_| ())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/engine.rs"]
mod tests;
