//! Dark theme

use super::roles::{Fill, Role, Roles, Variant};
use super::tokens::{
    ExperimentalTokens, ExternalImageMode, ExternalImages, MonacoRule, MonacoTheme, Palette,
    PaletteMode, ThemeConfig,
};

const WHITE: &str = "#ffffff";

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
        mode: PaletteMode::Dark,
        primary: "#38bdf8",
        secondary: "#a1a1aa",
        background_default: "#09090b",
        background_paper: "#18181b",
        text_primary: "#fafafa",
        text_secondary: "#a1a1aa",
        text_disabled: "#71717a",
        divider: "#27272a",
        action_hover: "#27272a",
        error: "#ef4444",
        warning: "#fbbf24",
        info: "#60a5fa",
        success: "#22c55e",
    }
}

/// Dark glyphs need to be flipped to show on dark surfaces.
fn external_images() -> ExternalImages {
    ExternalImages(vec![
        ("/icon/coder.svg", ExternalImageMode::Invert),
        ("/icon/widgets.svg", ExternalImageMode::Grayscale),
    ])
}

fn experimental() -> ExperimentalTokens {
    ExperimentalTokens {
        l1: Role::new(
            "#09090b",
            "#27272a",
            "#fafafa",
            Fill {
                solid: "#a1a1aa",
                outline: "#a1a1aa",
                text: "#09090b",
            },
        ),
        l2: Role::new(
            "#18181b",
            "#3f3f46",
            "#e4e4e7",
            Fill {
                solid: "#d4d4d8",
                outline: "#d4d4d8",
                text: "#09090b",
            },
        )
        .with_disabled(Variant {
            background: "#18181b",
            outline: "#27272a",
            text: "#52525b",
            fill: Fill {
                solid: "#3f3f46",
                outline: "#3f3f46",
                text: "#71717a",
            },
        })
        .with_hover(Variant {
            background: "#27272a",
            outline: "#52525b",
            text: WHITE,
            fill: Fill {
                solid: "#e4e4e7",
                outline: "#e4e4e7",
                text: "#09090b",
            },
        }),
    }
}

fn monaco() -> MonacoTheme {
    MonacoTheme {
        base: "vs-dark",
        inherit: true,
        rules: vec![
            MonacoRule {
                token: "comment",
                foreground: "#71717a",
            },
            MonacoRule {
                token: "string",
                foreground: "#86efac",
            },
            MonacoRule {
                token: "keyword",
                foreground: "#93c5fd",
            },
        ],
        colors: vec![
            ("editor.foreground", "#fafafa"),
            ("editor.background", "#18181b"),
            ("editor.selectionBackground", "#075985"),
            ("editor.inactiveSelectionBackground", "#0c4a6e"),
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
        danger: Role::new("#431407", "#ea580c", "#fed7aa", solid("#c2410c"))
            .with_disabled(Variant {
                background: "#431407",
                outline: "#9a3412",
                text: "#9a3412",
                fill: solid("#7c2d12"),
            })
            .with_hover(Variant {
                background: "#7c2d12",
                outline: "#f97316",
                text: WHITE,
                fill: solid("#ea580c"),
            }),
        error: Role::new("#450a0a", "#ef4444", "#fecaca", solid("#dc2626")),
        warning: Role::new("#451a03", "#f59e0b", "#fde68a", solid("#d97706")),
        notice: Role::new(
            "#172554",
            "#3b82f6",
            "#bfdbfe",
            Fill {
                solid: "#2563eb",
                outline: "#3b82f6",
                text: WHITE,
            },
        ),
        info: Role::new("#18181b", "#71717a", "#e4e4e7", solid("#52525b")),
        success: Role::new("#052e16", "#22c55e", "#bbf7d0", solid("#15803d"))
            .with_disabled(Variant {
                background: "#052e16",
                outline: "#166534",
                text: "#166534",
                fill: solid("#14532d"),
            })
            .with_hover(Variant {
                background: "#14532d",
                outline: "#4ade80",
                text: WHITE,
                fill: solid("#16a34a"),
            }),
        active: Role::new("#082f49", "#0ea5e9", "#bae6fd", solid("#0284c7"))
            .with_disabled(Variant {
                background: "#082f49",
                outline: "#075985",
                text: "#075985",
                fill: solid("#0c4a6e"),
            })
            .with_hover(Variant {
                background: "#0c4a6e",
                outline: "#38bdf8",
                text: WHITE,
                fill: solid("#0369a1"),
            }),
        inactive: Role::new("#030712", "#6b7280", "#d1d5db", solid("#4b5563")),
        preview: Role::new("#2e1065", "#8b5cf6", "#ddd6fe", solid("#6d28d9")),
    }
}
