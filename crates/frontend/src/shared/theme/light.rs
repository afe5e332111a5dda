//! Light theme

use super::roles::{Fill, Role, Roles, Variant};
use super::tokens::{
    ExperimentalTokens, ExternalImageMode, ExternalImages, MonacoRule, MonacoTheme, Palette,
    PaletteMode, ThemeConfig,
};

const WHITE: &str = "#ffffff";
const BLACK: &str = "#000000";

pub fn theme() -> ThemeConfig {
    ThemeConfig {
        palette: palette(),
        external_images: external_images(),
        experimental: experimental(),
        monaco: monaco(),
        roles: roles(),
    }
}

fn palette() -> Palette {
    Palette {
        mode: PaletteMode::Light,
        primary: "#0ea5e9",
        secondary: "#71717a",
        background_default: WHITE,
        background_paper: "#f4f4f5",
        text_primary: "#09090b",
        text_secondary: "#52525b",
        text_disabled: "#71717a",
        divider: "#e4e4e7",
        action_hover: "#f4f4f5",
        error: "#dc2626",
        warning: "#f59e0b",
        info: "#2563eb",
        success: "#16a34a",
    }
}

/// White-on-transparent vendor icons disappear on white backgrounds.
fn external_images() -> ExternalImages {
    ExternalImages(vec![
        ("/icon/github.svg", ExternalImageMode::Invert),
        ("/icon/docker-white.svg", ExternalImageMode::Invert),
        ("/icon/rust.svg", ExternalImageMode::Invert),
        ("/icon/terminal.svg", ExternalImageMode::Invert),
        ("/icon/widgets.svg", ExternalImageMode::Monochrome),
    ])
}

fn experimental() -> ExperimentalTokens {
    ExperimentalTokens {
        l1: Role::new(
            WHITE,
            "#e4e4e7",
            "#09090b",
            Fill {
                solid: "#3f3f46",
                outline: "#3f3f46",
                text: WHITE,
            },
        ),
        l2: Role::new(
            "#fafafa",
            "#d4d4d8",
            "#18181b",
            Fill {
                solid: "#52525b",
                outline: "#52525b",
                text: WHITE,
            },
        )
        .with_disabled(Variant {
            background: "#f4f4f5",
            outline: "#e4e4e7",
            text: "#a1a1aa",
            fill: Fill {
                solid: "#d4d4d8",
                outline: "#d4d4d8",
                text: WHITE,
            },
        })
        .with_hover(Variant {
            background: "#f4f4f5",
            outline: "#a1a1aa",
            text: BLACK,
            fill: Fill {
                solid: "#3f3f46",
                outline: "#3f3f46",
                text: WHITE,
            },
        }),
    }
}

fn monaco() -> MonacoTheme {
    MonacoTheme {
        base: "vs",
        inherit: true,
        rules: vec![
            MonacoRule {
                token: "comment",
                foreground: "#71717a",
            },
            MonacoRule {
                token: "string",
                foreground: "#15803d",
            },
            MonacoRule {
                token: "keyword",
                foreground: "#1d4ed8",
            },
        ],
        colors: vec![
            ("editor.foreground", "#09090b"),
            ("editor.background", WHITE),
            ("editor.selectionBackground", "#bae6fd"),
            ("editor.inactiveSelectionBackground", "#e0f2fe"),
        ],
    }
}

fn solid(color: &'static str) -> Fill {
    Fill {
        solid: color,
        outline: color,
        text: WHITE,
    }
}

fn roles() -> Roles {
    Roles {
        danger: Role::new("#fff7ed", "#fb923c", "#431407", solid("#ea580c"))
            .with_disabled(Variant {
                background: "#fff7ed",
                outline: "#9a3412",
                text: "#9a3412",
                fill: Fill {
                    solid: "#fdba74",
                    outline: "#fdba74",
                    text: WHITE,
                },
            })
            .with_hover(Variant {
                background: WHITE,
                outline: "#f97316",
                text: BLACK,
                fill: solid("#f97316"),
            }),
        error: Role::new("#fee2e2", "#ef4444", "#450a0a", solid("#dc2626")),
        warning: Role::new("#fffbeb", "#fcd34d", "#451a03", solid("#f59e0b")),
        notice: Role::new(
            "#eff6ff",
            "#60a5fa",
            "#172554",
            Fill {
                solid: "#1d4ed8",
                outline: "#2563eb",
                text: WHITE,
            },
        ),
        info: Role::new("#fafafa", "#a1a1aa", "#09090b", solid("#3f3f46")),
        success: Role::new("#f0fdf4", "#22c55e", "#052e16", solid("#16a34a"))
            .with_disabled(Variant {
                background: "#f0fdf4",
                outline: "#166534",
                text: "#166534",
                fill: solid("#86efac"),
            })
            .with_hover(Variant {
                background: WHITE,
                outline: "#15803d",
                text: BLACK,
                fill: solid("#15803d"),
            }),
        active: Role::new("#e0f2fe", "#0ea5e9", "#082f49", solid("#0284c7"))
            .with_disabled(Variant {
                background: "#f0f9ff",
                outline: "#7dd3fc",
                text: "#0c4a6e",
                fill: solid("#7dd3fc"),
            })
            .with_hover(Variant {
                background: WHITE,
                outline: "#0369a1",
                text: BLACK,
                fill: solid("#0369a1"),
            }),
        inactive: Role::new("#f3f4f6", "#6b7280", "#030712", solid("#9ca3af")),
        preview: Role::new("#f5f3ff", "#8b5cf6", "#2e1065", solid("#7c3aed")),
    }
}
