//! Recording surface with SVG output.

use std::fmt::Write as _;

use serde::Serialize;
use serde_json::Value;

use super::Surface;
use crate::region::{Patch, Visual};

/// One item drawn on a [`Canvas`], with the style it was drawn with.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "artist", rename_all = "snake_case")]
pub enum Artist {
    Text {
        x: f64,
        y: f64,
        text: String,
        style: Visual,
    },
    Patch {
        patch: Patch,
        style: Visual,
    },
}

/// A surface that records artists in drawing order.
///
/// Serializes as `{"artists": [...]}` for inspection.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Canvas {
    artists: Vec<Artist>,
}

impl Canvas {
    /// Creates an empty canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded artists, oldest first.
    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    pub fn len(&self) -> usize {
        self.artists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    /// Removes every recorded artist.
    pub fn clear(&mut self) {
        self.artists.clear();
    }

    /// Renders the recorded artists as an SVG document of the given size.
    ///
    /// Pixel y grows upward in image coordinates, so y is flipped against
    /// `height`. Recognized style keys: "color", "fontsize", "markersize".
    pub fn to_svg(&self, width: f64, height: f64) -> String {
        let mut svg = String::new();

        writeln!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">",
            width, height, width, height
        )
        .expect("write to string");

        for artist in &self.artists {
            match artist {
                Artist::Text { x, y, text, style } => {
                    writeln!(
                        svg,
                        "  <text x=\"{}\" y=\"{}\" fill=\"{}\" font-size=\"{}\">{}</text>",
                        x,
                        height - y,
                        xml_escape(&style_str(style, "color", "black")),
                        style_str(style, "fontsize", "12"),
                        xml_escape(text)
                    )
                    .expect("write to string");
                }
                Artist::Patch {
                    patch: Patch::Marker { center, size },
                    style,
                } => {
                    writeln!(
                        svg,
                        "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>",
                        center.x,
                        height - center.y,
                        size / 2.0,
                        xml_escape(&style_str(style, "color", "black"))
                    )
                    .expect("write to string");
                }
            }
        }

        writeln!(svg, "</svg>").expect("write to string");
        svg
    }
}

impl Surface for Canvas {
    fn draw_text(&mut self, x: f64, y: f64, text: &str, style: &Visual) {
        self.artists.push(Artist::Text {
            x,
            y,
            text: text.to_string(),
            style: style.clone(),
        });
    }

    fn draw_patch(&mut self, patch: &Patch, style: &Visual) {
        self.artists.push(Artist::Patch {
            patch: patch.clone(),
            style: style.clone(),
        });
    }
}

fn style_str(style: &Visual, key: &str, default: &str) -> String {
    match style.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => default.to_string(),
    }
}

fn xml_escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
