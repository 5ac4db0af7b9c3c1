//! Theme registry.
//!
//! Two palettes are defined: a navy/gold `dark` palette and a blue/white
//! `light` palette. Token values are Tailwind gradient stops and CSS colors.

use std::fmt;

/// Identifier of a registered theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeId {
    #[default]
    Dark,
    Light,
}

impl ThemeId {
    /// Returns the stable key used in storage and in the selector.
    pub fn key(&self) -> &'static str {
        match self {
            ThemeId::Dark => "dark",
            ThemeId::Light => "light",
        }
    }

    /// Parses a stored key. Unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<ThemeId> {
        match key {
            "dark" => Some(ThemeId::Dark),
            "light" => Some(ThemeId::Light),
            _ => None,
        }
    }

    /// Returns all registered themes in selector order.
    pub fn all() -> &'static [ThemeId] {
        &[ThemeId::Dark, ThemeId::Light]
    }

    /// Whether this palette is the dark one.
    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeId::Dark)
    }

    /// Returns the palette for the given dark-mode flag.
    pub fn for_mode(dark_mode: bool) -> ThemeId {
        if dark_mode {
            ThemeId::Dark
        } else {
            ThemeId::Light
        }
    }

    /// Two swatch colors shown on the selector card.
    pub fn swatches(&self) -> [&'static str; 2] {
        match self {
            ThemeId::Dark => ["#2C2F4A", "#FBBF24"],
            ThemeId::Light => ["#3B82F6", "#F59E0B"],
        }
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Text colors of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextTokens {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub muted: &'static str,
    pub accent: &'static str,
}

/// The visual token bundle of one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeTokens {
    /// Display name.
    pub name: &'static str,
    /// Primary gradient stops.
    pub primary: &'static str,
    /// Secondary gradient stops.
    pub secondary: &'static str,
    /// Accent gradient stops.
    pub accent: &'static str,
    /// Page background gradient.
    pub background: &'static str,
    /// Glass panel fill.
    pub glass: &'static str,
    /// Glow color.
    pub glow: &'static str,
    pub text: TextTokens,
}

static DARK: ThemeTokens = ThemeTokens {
    name: "Dark Mode",
    primary: "from-[#2C2F4A] to-[#3C3F5A]",
    secondary: "from-[#4A4D72] to-[#5A5D82]",
    accent: "from-[#FBBF24] to-[#F59E0B]",
    background: "from-[#1E2137] via-[#2A2D45] to-[#1B1E32]",
    glass: "rgba(255, 255, 255, 0.05)",
    glow: "rgba(251,191,36,0.25)",
    text: TextTokens {
        primary: "#F3F4F6",
        secondary: "#D1D5DB",
        muted: "#9CA3AF",
        accent: "#FBBF24",
    },
};

static LIGHT: ThemeTokens = ThemeTokens {
    name: "Bright Mode",
    primary: "from-[#3B82F6] to-[#6366F1]",
    secondary: "from-[#E5E7EB] to-[#F3F4F6]",
    accent: "from-[#F59E0B] to-[#FBBF24]",
    background: "from-[#F9FAFB] via-[#FFFFFF] to-[#F3F4F6]",
    glass: "rgba(255, 255, 255, 0.85)",
    glow: "rgba(59,130,246,0.2)",
    text: TextTokens {
        primary: "#1F2937",
        secondary: "#374151",
        muted: "#6B7280",
        accent: "#2563EB",
    },
};

/// Static lookup from theme id to its token bundle.
pub struct ThemeRegistry;

impl ThemeRegistry {
    /// Token bundle for a theme.
    pub fn get(id: ThemeId) -> &'static ThemeTokens {
        match id {
            ThemeId::Dark => &DARK,
            ThemeId::Light => &LIGHT,
        }
    }

    /// Membership test for a raw key.
    pub fn lookup(key: &str) -> Option<ThemeId> {
        ThemeId::from_key(key)
    }

    /// All registered `(id, tokens)` pairs.
    pub fn entries() -> impl Iterator<Item = (ThemeId, &'static ThemeTokens)> {
        ThemeId::all().iter().map(|id| (*id, Self::get(*id)))
    }
}

/// Splits a Tailwind gradient descriptor into its color stops.
///
/// `"from-[#1E2137] via-[#2A2D45] to-[#1B1E32]"` yields the three hex colors.
pub fn gradient_stops(descriptor: &str) -> Vec<&str> {
    descriptor
        .split_whitespace()
        .filter_map(|part| {
            let start = part.find('[')?;
            let end = part.rfind(']')?;
            (end > start + 1).then(|| &part[start + 1..end])
        })
        .collect()
}

/// Converts a gradient descriptor into a CSS `linear-gradient` at `angle`.
pub fn css_gradient(descriptor: &str, angle: u16) -> String {
    let stops = gradient_stops(descriptor);
    match stops.as_slice() {
        [] => "transparent".to_string(),
        [single] => (*single).to_string(),
        _ => format!("linear-gradient({angle}deg, {})", stops.join(", ")),
    }
}
