//! Process-wide settings installed once by the entry point.

use std::sync::OnceLock;

use folio_core::{ContentError, PortfolioContent, SiteConfig};

/// Site configuration chosen at startup.
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Parsed bundled content, or the reason it failed to load.
static CONTENT: OnceLock<Result<PortfolioContent, ContentError>> = OnceLock::new();

/// Installs the configuration. Returns `false` if one was already set.
pub fn install(config: SiteConfig) -> bool {
    SITE_CONFIG.set(config).is_ok()
}

/// The installed configuration, or the defaults when none was installed.
pub fn site_config() -> &'static SiteConfig {
    SITE_CONFIG.get_or_init(SiteConfig::default)
}

/// The bundled portfolio content, parsed and validated on first access.
pub fn portfolio() -> Result<&'static PortfolioContent, ContentError> {
    CONTENT
        .get_or_init(PortfolioContent::bundled)
        .as_ref()
        .map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portfolio_loads_once() {
        let first = portfolio().unwrap();
        let second = portfolio().unwrap();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.profile.first_name, "Richie");
    }
}
