//! Theme configuration: every token group of the design system in one value.

use serde::Serialize;

use super::roles::{Role, Roles};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteMode {
    Light,
    Dark,
}

/// Base palette consumed by generic components (surfaces, text, dividers)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub mode: PaletteMode,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub background_default: &'static str,
    pub background_paper: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_disabled: &'static str,
    pub divider: &'static str,
    pub action_hover: &'static str,
    pub error: &'static str,
    pub warning: &'static str,
    pub info: &'static str,
    pub success: &'static str,
}

/// Tokens for components still being redesigned.
/// `l1` is the page level, `l2` the raised (card, input) level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperimentalTokens {
    pub l1: Role,
    pub l2: Role,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonacoRule {
    pub token: &'static str,
    pub foreground: &'static str,
}

/// Code editor theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonacoTheme {
    pub base: &'static str,
    pub inherit: bool,
    pub rules: Vec<MonacoRule>,
    pub colors: Vec<(&'static str, &'static str)>,
}

impl MonacoTheme {
    pub fn color(&self, key: &str) -> Option<&'static str> {
        self.colors.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }
}

/// How a third-party icon must be adjusted to stay visible on this theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ExternalImageMode {
    Monochrome,
    Invert,
    Grayscale,
}

impl ExternalImageMode {
    /// CSS `filter` value applied to the `<img>`.
    pub fn css_filter(&self) -> &'static str {
        match self {
            ExternalImageMode::Monochrome => "grayscale(100%) contrast(0%) brightness(0%)",
            ExternalImageMode::Invert => "grayscale(100%) invert(100%)",
            ExternalImageMode::Grayscale => "grayscale(100%)",
        }
    }
}

/// Per-icon adjustments, keyed by icon URL
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExternalImages(pub Vec<(&'static str, ExternalImageMode)>);

impl ExternalImages {
    pub fn mode_for(&self, url: &str) -> Option<ExternalImageMode> {
        self.0.iter().find(|(u, _)| *u == url).map(|(_, m)| *m)
    }

    /// Inline style for an icon, empty when no adjustment is needed.
    pub fn style_for(&self, url: &str) -> String {
        self.mode_for(url)
            .map(|m| format!("filter: {};", m.css_filter()))
            .unwrap_or_default()
    }
}

/// Complete theme: base palette plus roles, experimental tokens, editor
/// theme and icon adjustments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeConfig {
    pub palette: Palette,
    pub external_images: ExternalImages,
    pub experimental: ExperimentalTokens,
    pub monaco: MonacoTheme,
    pub roles: Roles,
}

impl ThemeConfig {
    /// Flattened CSS custom properties (`--palette-*`, `--roles-*`,
    /// `--experimental-*`, `--editor-*`).
    pub fn css_variables(&self) -> Vec<(String, String)> {
        let p = &self.palette;
        let mut out: Vec<(String, String)> = [
            ("--palette-primary", p.primary),
            ("--palette-secondary", p.secondary),
            ("--palette-background-default", p.background_default),
            ("--palette-background-paper", p.background_paper),
            ("--palette-text-primary", p.text_primary),
            ("--palette-text-secondary", p.text_secondary),
            ("--palette-text-disabled", p.text_disabled),
            ("--palette-divider", p.divider),
            ("--palette-action-hover", p.action_hover),
            ("--palette-error", p.error),
            ("--palette-warning", p.warning),
            ("--palette-info", p.info),
            ("--palette-success", p.success),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        for (name, role) in self.roles.iter() {
            role.push_css_variables(&format!("roles-{}", name), &mut out);
        }
        self.experimental.l1.push_css_variables("experimental-l1", &mut out);
        self.experimental.l2.push_css_variables("experimental-l2", &mut out);

        for key in ["editor.background", "editor.foreground"] {
            if let Some(color) = self.monaco.color(key) {
                out.push((format!("--{}", key.replace('.', "-")), color.to_string()));
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::super::{dark, light};
    use super::*;

    fn var<'a>(vars: &'a [(String, String)], key: &str) -> Option<&'a str> {
        vars.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_light_variables() {
        let theme = light::theme();
        let vars = theme.css_variables();
        assert_eq!(var(&vars, "--roles-notice-fill-solid"), Some(theme.roles.notice.fill.solid));
        assert_eq!(var(&vars, "--palette-background-default"), Some("#ffffff"));
        assert!(var(&vars, "--roles-active-hover-background").is_some());
        assert!(var(&vars, "--experimental-l2-disabled-text").is_some());
        assert_eq!(var(&vars, "--editor-background"), Some("#ffffff"));
    }

    #[test]
    fn test_variable_names_are_unique() {
        let vars = dark::theme().css_variables();
        let mut names: Vec<&str> = vars.iter().map(|(k, _)| k.as_str()).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_light_and_dark_differ() {
        let l = light::theme();
        let d = dark::theme();
        assert_eq!(l.palette.mode, PaletteMode::Light);
        assert_eq!(d.palette.mode, PaletteMode::Dark);
        assert_ne!(l.palette.background_default, d.palette.background_default);
        assert_eq!(l.monaco.base, "vs");
        assert_eq!(d.monaco.base, "vs-dark");
    }

    #[test]
    fn test_external_image_style() {
        let images = light::theme().external_images;
        assert_eq!(images.mode_for("/icon/github.svg"), Some(ExternalImageMode::Invert));
        assert!(images.style_for("/icon/github.svg").starts_with("filter: "));
        assert_eq!(images.style_for("/icon/unknown.svg"), "");
    }
}
