//! Document-wide style variables derived from a theme.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::theme::{css_gradient, ThemeTokens};

/// Body class present while the light palette is active.
pub const LIGHT_MODE_CLASS: &str = "light-mode";

/// Flat mapping of CSS custom property name to value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleVars(BTreeMap<&'static str, String>);

impl StyleVars {
    /// Derives the `--theme-*` variables from a token bundle: one per
    /// token plus three resolved gradients.
    pub fn from_tokens(tokens: &ThemeTokens) -> Self {
        let mut vars = BTreeMap::new();
        vars.insert("--theme-primary", tokens.primary.to_string());
        vars.insert("--theme-secondary", tokens.secondary.to_string());
        vars.insert("--theme-accent", tokens.accent.to_string());
        vars.insert("--theme-background", tokens.background.to_string());
        vars.insert("--theme-glass", tokens.glass.to_string());
        vars.insert("--theme-glow", tokens.glow.to_string());
        vars.insert("--theme-text-primary", tokens.text.primary.to_string());
        vars.insert("--theme-text-secondary", tokens.text.secondary.to_string());
        vars.insert("--theme-text-muted", tokens.text.muted.to_string());
        vars.insert("--theme-text-accent", tokens.text.accent.to_string());
        // Resolved gradients.
        vars.insert("--theme-primary-gradient", css_gradient(tokens.primary, 135));
        vars.insert("--theme-accent-gradient", css_gradient(tokens.accent, 135));
        vars.insert("--theme-background-gradient", css_gradient(tokens.background, 135));
        Self(vars)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// Everything pushed to the document on a theme change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppliedStyle {
    pub vars: StyleVars,
    pub light_mode: bool,
}

impl AppliedStyle {
    pub fn new(tokens: &ThemeTokens, dark_mode: bool) -> Self {
        Self {
            vars: StyleVars::from_tokens(tokens),
            light_mode: !dark_mode,
        }
    }

    /// Script that sets every variable on `document.documentElement` and
    /// toggles the light-mode body class.
    pub fn to_css_script(&self) -> String {
        let mut js = String::from("(function(){var r=document.documentElement.style;");
        for (name, value) in self.vars.iter() {
            let _ = write!(js, "r.setProperty({},{});", js_string(name), js_string(value));
        }
        let op = if self.light_mode { "add" } else { "remove" };
        let _ = write!(
            js,
            "if(document.body){{document.body.classList.{op}({});}}}})();",
            js_string(LIGHT_MODE_CLASS)
        );
        js
    }

    /// The variables as an inline `style` attribute value.
    pub fn to_inline_style(&self) -> String {
        let mut style = String::new();
        for (name, value) in self.vars.iter() {
            let _ = write!(style, "{name}: {value}; ");
        }
        style.truncate(style.trim_end().len());
        style
    }
}

/// Single side-effecting seam through which a theme reaches the document.
pub trait StyleSink {
    fn apply(&mut self, style: &AppliedStyle);
}

/// Keeps the last applied style; used where no document exists.
#[derive(Debug, Default, Clone)]
pub struct DetachedStyle {
    pub last: Option<AppliedStyle>,
    pub applications: usize,
}

impl StyleSink for DetachedStyle {
    fn apply(&mut self, style: &AppliedStyle) {
        self.last = Some(style.clone());
        self.applications += 1;
    }
}

fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{ThemeId, ThemeRegistry};

    #[test]
    fn test_vars_from_tokens() {
        let vars = StyleVars::from_tokens(ThemeRegistry::get(ThemeId::Dark));
        assert_eq!(vars.get("--theme-text-accent"), Some("#FBBF24"));
        assert_eq!(vars.get("--theme-glass"), Some("rgba(255, 255, 255, 0.05)"));
        assert_eq!(vars.get("--theme-missing"), None);
        assert_eq!(vars.len(), 13);
    }

    #[test]
    fn test_script_toggles_body_class() {
        let light = AppliedStyle::new(ThemeRegistry::get(ThemeId::Light), false);
        let script = light.to_css_script();
        assert!(script.contains("classList.add(\"light-mode\")"));
        assert!(script.contains("r.setProperty(\"--theme-text-primary\",\"#1F2937\")"));

        let dark = AppliedStyle::new(ThemeRegistry::get(ThemeId::Dark), true);
        assert!(dark.to_css_script().contains("classList.remove(\"light-mode\")"));
    }

    #[test]
    fn test_inline_style() {
        let style = AppliedStyle::new(ThemeRegistry::get(ThemeId::Light), false).to_inline_style();
        assert!(style.contains("--theme-text-primary: #1F2937;"));
        assert!(style.ends_with(';'));
    }
}
