use chem_input::{ThemeConfig, hex_rgb};

#[test]
fn default_matches_the_shipped_tokens() {
    let theme = ThemeConfig::default();

    assert_eq!(theme.content, vec!["./templates/*.html".to_string()]);
    assert_eq!(theme.screens.sm, "480px");
    assert_eq!(theme.screens.md, "768px");
    assert_eq!(theme.screens.lg, "976px");
    assert_eq!(theme.screens.xl, "1440px");
    assert_eq!(theme.font_family.sans, vec!["Graphik", "sans-serif"]);
    assert_eq!(theme.font_family.serif, vec!["Merriweather", "serif"]);
    assert_eq!(
        theme.plugins,
        vec!["@tailwindcss/forms", "@tailwindcss/typography"]
    );

    assert_eq!(theme.colors.len(), 11);
    assert_eq!(theme.color("white"), Some("#ffffff"));
    assert_eq!(theme.color("blue"), Some("#3669ba"));
    assert_eq!(theme.color("gray-light"), Some("#d3dce6"));
}

#[test]
fn lookups_miss_cleanly() {
    let theme = ThemeConfig::default();

    assert_eq!(theme.color("magenta"), None);
    assert_eq!(theme.screen("sm"), Some("480px"));
    assert_eq!(theme.screen("xl"), Some("1440px"));
    assert_eq!(theme.screen("xxl"), None);
}

#[test]
fn serializes_font_family_in_camel_case() {
    let json = serde_json::to_value(ThemeConfig::default()).unwrap();

    assert!(json.get("fontFamily").is_some());
    assert!(json.get("font_family").is_none());
    assert_eq!(json["screens"]["md"], "768px");
    assert_eq!(json["colors"]["pink"], "#ff49db");
}

#[test]
fn survives_a_json_round_trip() {
    let theme = ThemeConfig::default();
    let json = serde_json::to_string(&theme).unwrap();
    let back: ThemeConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, theme);
}

#[test]
fn decodes_palette_tokens_to_channels() {
    let theme = ThemeConfig::default();

    assert_eq!(
        hex_rgb(theme.color("white").unwrap()),
        Some((0xff, 0xff, 0xff))
    );
    assert_eq!(hex_rgb("#273444"), Some((0x27, 0x34, 0x44)));
    assert_eq!(hex_rgb("13ce66"), Some((0x13, 0xce, 0x66)));
}

#[test]
fn malformed_tokens_decode_to_none() {
    // "₁₂" is the nasty case: two three-byte characters, so the byte
    // length still reads as six.
    for bad in [
        "", "#fff", "#ffff", "#1234567", "₁₂", "#₁₂", "+12345", "#12345g", "blue",
    ] {
        assert_eq!(hex_rgb(bad), None, "{bad:?} should not decode");
    }
}

#[test]
fn reads_a_hand_written_config() {
    let json = r##"{
        "content": ["./pages/*.html", "./pages/*.js"],
        "screens": { "sm": "400px", "md": "700px", "lg": "900px", "xl": "1200px" },
        "fontFamily": { "sans": ["Inter"], "serif": ["Georgia"] },
        "colors": { "ink": "#111111" },
        "plugins": []
    }"##;

    let theme: ThemeConfig = serde_json::from_str(json).unwrap();
    assert_eq!(theme.content.len(), 2);
    assert_eq!(theme.screens.md, "700px");
    assert_eq!(theme.font_family.sans, vec!["Inter"]);
    assert_eq!(theme.color("ink"), Some("#111111"));
    assert!(theme.plugins.is_empty());
}
