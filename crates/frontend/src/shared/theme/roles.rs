//! Semantic color roles of the design system.
//!
//! A role describes one intent (error, notice, success...) with a background,
//! an outline, a text color and a solid "fill" for the strongest emphasis.
//! Interactive roles add `disabled` and `hover` variants.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fill {
    pub solid: &'static str,
    pub outline: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variant {
    pub background: &'static str,
    pub outline: &'static str,
    pub text: &'static str,
    pub fill: Fill,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Role {
    pub background: &'static str,
    pub outline: &'static str,
    pub text: &'static str,
    pub fill: Fill,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<Variant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover: Option<Variant>,
}

impl Role {
    pub const fn new(background: &'static str, outline: &'static str, text: &'static str, fill: Fill) -> Self {
        Self {
            background,
            outline,
            text,
            fill,
            disabled: None,
            hover: None,
        }
    }

    pub fn with_disabled(mut self, disabled: Variant) -> Self {
        self.disabled = Some(disabled);
        self
    }

    pub fn with_hover(mut self, hover: Variant) -> Self {
        self.hover = Some(hover);
        self
    }

    /// Appends `--{prefix}-*` custom properties for this role.
    pub(crate) fn push_css_variables(&self, prefix: &str, out: &mut Vec<(String, String)>) {
        push_variant(prefix, self.background, self.outline, self.text, &self.fill, out);
        if let Some(disabled) = &self.disabled {
            let p = format!("{}-disabled", prefix);
            push_variant(&p, disabled.background, disabled.outline, disabled.text, &disabled.fill, out);
        }
        if let Some(hover) = &self.hover {
            let p = format!("{}-hover", prefix);
            push_variant(&p, hover.background, hover.outline, hover.text, &hover.fill, out);
        }
    }
}

fn push_variant(
    prefix: &str,
    background: &str,
    outline: &str,
    text: &str,
    fill: &Fill,
    out: &mut Vec<(String, String)>,
) {
    out.push((format!("--{}-background", prefix), background.to_string()));
    out.push((format!("--{}-outline", prefix), outline.to_string()));
    out.push((format!("--{}-text", prefix), text.to_string()));
    out.push((format!("--{}-fill-solid", prefix), fill.solid.to_string()));
    out.push((format!("--{}-fill-outline", prefix), fill.outline.to_string()));
    out.push((format!("--{}-fill-text", prefix), fill.text.to_string()));
}

/// Every role a component may ask for
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Roles {
    /// Destructive actions
    pub danger: Role,
    /// Something went wrong
    pub error: Role,
    pub warning: Role,
    /// Draws attention without implying a problem
    pub notice: Role,
    pub info: Role,
    pub success: Role,
    /// Selected or in progress
    pub active: Role,
    pub inactive: Role,
    /// Experimental or beta features
    pub preview: Role,
}

impl Roles {
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Role)> {
        [
            ("danger", &self.danger),
            ("error", &self.error),
            ("warning", &self.warning),
            ("notice", &self.notice),
            ("info", &self.info),
            ("success", &self.success),
            ("active", &self.active),
            ("inactive", &self.inactive),
            ("preview", &self.preview),
        ]
        .into_iter()
    }
}
