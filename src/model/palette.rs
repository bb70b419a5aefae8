use rand::Rng;

/// A sticky-note style. The key doubles as the background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StickyStyle {
    pub key: &'static str,
    pub name: &'static str,
}

/// The fixed note palette. Order matters: the first entry is the fallback
/// for unknown keys.
pub const STICKY_STYLES: &[StickyStyle] = &[
    StickyStyle { key: "#FFC8C8", name: "pink" },
    StickyStyle { key: "#BDE0FE", name: "blue" },
    StickyStyle { key: "#FDFD96", name: "yellow" },
    StickyStyle { key: "#C1E1C1", name: "green" },
    StickyStyle { key: "#E2C6E8", name: "purple" },
];

/// Look up a style by key, falling back to the default entry. Unknown keys
/// are never rejected at write time; they degrade here at read time.
pub fn sticky_style(key: &str) -> &'static StickyStyle {
    STICKY_STYLES
        .iter()
        .find(|s| s.key == key)
        .unwrap_or(&STICKY_STYLES[0])
}

pub fn is_valid_color(key: &str) -> bool {
    STICKY_STYLES.iter().any(|s| s.key == key)
}

pub fn random_color() -> String {
    let idx = rand::rng().random_range(0..STICKY_STYLES.len());
    STICKY_STYLES[idx].key.to_string()
}

pub fn random_rotation() -> f64 {
    rand::rng().random_range(-3.0..3.0)
}

// ---------------------------------------------------------------------------
// Background themes
// ---------------------------------------------------------------------------

pub const DEFAULT_THEME: &str = "default";

/// Background themes: (key, background color). Light themes first.
pub const THEMES: &[(&str, &str)] = &[
    ("default", "#F3F4F6"),
    ("blue", "#E0F2FE"),
    ("purple", "#F3E8FF"),
    ("green", "#DCFCE7"),
    ("cream", "#FFFBEB"),
    ("board", "#2C2C2C"),
    ("dark", "#111827"),
    ("midnight", "#1e1b4b"),
    ("forest", "#022c22"),
    ("eggplant", "#3b0764"),
    ("chocolate", "#451a03"),
];

const DARK_THEMES: &[&str] = &["board", "dark", "midnight", "forest", "eggplant", "chocolate"];

pub fn is_theme(key: &str) -> bool {
    THEMES.iter().any(|(k, _)| *k == key)
}

/// Background color for a theme key, falling back to the default theme.
pub fn theme_bg(key: &str) -> &'static str {
    THEMES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, bg)| *bg)
        .unwrap_or(THEMES[0].1)
}

pub fn is_dark_theme(key: &str) -> bool {
    DARK_THEMES.contains(&key)
}
