use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Responsive breakpoint widths, smallest to largest.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Screens {
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub xl: String,
}

/// Font family stacks for body and display text.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FontFamily {
    pub sans: Vec<String>,
    pub serif: Vec<String>,
}

/// The storage UI's build-tool configuration: content globs, design
/// tokens, and formatting plugins. Static data consumed by an external
/// pipeline; this crate gives it a typed home but attaches no runtime
/// behavior beyond lookups.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Globs the build pipeline scans for class usage.
    pub content: Vec<String>,
    pub screens: Screens,
    pub font_family: FontFamily,
    /// Restricted palette, name → hex.
    pub colors: BTreeMap<String, String>,
    /// Formatting extensions enabled in the pipeline.
    pub plugins: Vec<String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        let colors = [
            ("white", "#ffffff"),
            ("blue-light", "#1fb6ff"),
            ("blue", "#3669ba"),
            ("purple", "#7e5bef"),
            ("pink", "#ff49db"),
            ("orange", "#ff7849"),
            ("green", "#13ce66"),
            ("yellow", "#fadb6f"),
            ("gray-dark", "#273444"),
            ("gray", "#8492a6"),
            ("gray-light", "#d3dce6"),
        ]
        .into_iter()
        .map(|(name, hex)| (name.to_string(), hex.to_string()))
        .collect();

        Self {
            content: vec!["./templates/*.html".to_string()],
            screens: Screens {
                sm: "480px".to_string(),
                md: "768px".to_string(),
                lg: "976px".to_string(),
                xl: "1440px".to_string(),
            },
            font_family: FontFamily {
                sans: vec!["Graphik".to_string(), "sans-serif".to_string()],
                serif: vec!["Merriweather".to_string(), "serif".to_string()],
            },
            colors,
            plugins: vec![
                "@tailwindcss/forms".to_string(),
                "@tailwindcss/typography".to_string(),
            ],
        }
    }
}

/// Decode a `#rrggbb` token into its channels, leading `#` optional.
///
/// Tokens are host-facing data, so anything malformed decodes to `None`
/// rather than panicking mid-render. The digit check runs before any
/// slicing; a six-byte token made of multi-byte characters is rejected,
/// not split.
pub fn hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

impl ThemeConfig {
    /// Hex value for a named palette color.
    pub fn color(&self, name: &str) -> Option<&str> {
        self.colors.get(name).map(String::as_str)
    }

    /// Width for a named breakpoint.
    pub fn screen(&self, name: &str) -> Option<&str> {
        match name {
            "sm" => Some(&self.screens.sm),
            "md" => Some(&self.screens.md),
            "lg" => Some(&self.screens.lg),
            "xl" => Some(&self.screens.xl),
            _ => None,
        }
    }
}
