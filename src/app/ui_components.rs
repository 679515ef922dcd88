//! Shared themed widget style helpers

use crate::core::catalog::Severity;
use crate::theme::AppTheme;
use iced::widget::{button, container, rule, scrollable, slider};
use iced::{Border, Color, Shadow, Vector};

pub fn main_container(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(theme.bg_base.into()),
        text_color: Some(theme.fg_primary),
        ..Default::default()
    }
}

pub fn card_container(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(theme.bg_surface.into()),
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 8.0.into(),
        },
        shadow: Shadow {
            color: theme.shadow_color,
            offset: Vector::new(0.0, 2.0),
            blur_radius: 3.0,
        },
        ..Default::default()
    }
}

/// Separator between the page chrome and the section content
pub fn themed_horizontal_rule(theme: &AppTheme) -> rule::Style {
    rule::Style {
        color: theme.divider,
        radius: 0.0.into(),
        fill_mode: rule::FillMode::Full,
        snap: true,
    }
}

/// Tinted panel (allowed/blocked traffic, stat boxes, prevention tips)
pub fn tinted_panel(tint: Color) -> container::Style {
    container::Style {
        background: Some(Color { a: 0.12, ..tint }.into()),
        border: Border {
            color: Color { a: 0.35, ..tint },
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

/// Terminal-style background for the iptables snippets
pub fn code_block_container(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(theme.code_bg.into()),
        text_color: Some(theme.code_fg),
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 6.0.into(),
        },
        ..Default::default()
    }
}

/// Severity badge pill, tinted by severity
pub fn severity_badge(theme: &AppTheme, severity: Severity) -> container::Style {
    let tint = severity_color(theme, severity);
    container::Style {
        background: Some(Color { a: 0.15, ..tint }.into()),
        text_color: Some(tint),
        border: Border {
            color: Color { a: 0.4, ..tint },
            width: 1.0,
            radius: 999.0.into(),
        },
        ..Default::default()
    }
}

/// Solid accent pill, used for step numbers
pub fn step_pill(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(theme.accent.into()),
        text_color: Some(theme.fg_on_accent),
        border: Border {
            color: theme.accent,
            width: 1.0,
            radius: 999.0.into(),
        },
        ..Default::default()
    }
}

pub fn severity_color(theme: &AppTheme, severity: Severity) -> Color {
    match severity {
        Severity::Low => theme.info,
        Severity::Medium => theme.warning,
        Severity::High => theme.accent_hover,
        Severity::Critical => theme.danger,
    }
}

pub fn primary_button(theme: &AppTheme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(theme.accent.into()),
        text_color: theme.fg_on_accent,
        border: Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: theme.shadow_color,
            offset: Vector::new(0.0, 2.0),
            blur_radius: 3.0,
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(theme.accent_hover.into()),
            ..base
        },
        button::Status::Pressed => button::Style {
            shadow: Shadow {
                color: theme.shadow_color,
                offset: Vector::new(0.0, 0.5),
                blur_radius: 1.5,
            },
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(
                Color {
                    a: 0.5,
                    ..theme.accent
                }
                .into(),
            ),
            text_color: theme.fg_muted,
            ..base
        },
        button::Status::Active => base,
    }
}

pub fn secondary_button(theme: &AppTheme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(theme.bg_elevated.into()),
        text_color: theme.fg_primary,
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 6.0.into(),
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(theme.bg_hover.into()),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(theme.bg_active.into()),
            ..base
        },
        button::Status::Disabled => button::Style {
            text_color: theme.fg_muted,
            ..base
        },
        button::Status::Active => base,
    }
}

/// Locale and section tab pills: accent-filled when active, quiet otherwise
pub fn tab_button(theme: &AppTheme, status: button::Status, active: bool) -> button::Style {
    if active {
        let mut style = primary_button(theme, status);
        style.border.radius = 999.0.into();
        style
    } else {
        let mut style = secondary_button(theme, status);
        style.border.radius = 999.0.into();
        style.background = match status {
            button::Status::Hovered => Some(theme.bg_hover.into()),
            _ => Some(theme.bg_surface.into()),
        };
        style
    }
}

/// Clickable scenario cards in the error grid
pub fn card_button(theme: &AppTheme, status: button::Status, active: bool) -> button::Style {
    let base = button::Style {
        background: Some(if active {
            theme.bg_active.into()
        } else {
            theme.bg_surface.into()
        }),
        text_color: theme.fg_primary,
        border: Border {
            color: if active { theme.accent } else { theme.border },
            width: 1.0,
            radius: 8.0.into(),
        },
        shadow: Shadow {
            color: theme.shadow_color,
            offset: Vector::new(0.0, 2.0),
            blur_radius: 3.0,
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered if !active => button::Style {
            background: Some(theme.bg_hover.into()),
            ..base
        },
        _ => base,
    }
}

/// Paginator dot indicators
pub fn dot_button(theme: &AppTheme, status: button::Status, active: bool) -> button::Style {
    button::Style {
        background: Some(if active {
            theme.accent.into()
        } else if matches!(status, button::Status::Hovered) {
            theme.fg_muted.into()
        } else {
            theme.bg_hover.into()
        }),
        border: Border {
            radius: 999.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn themed_slider(theme: &AppTheme, status: slider::Status) -> slider::Style {
    let rail = slider::Rail {
        backgrounds: (theme.bg_hover.into(), theme.accent.into()),
        width: 6.0,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 3.0.into(),
        },
    };

    let handle = slider::Handle {
        shape: slider::HandleShape::Circle { radius: 9.0 },
        background: theme.accent.into(),
        border_color: theme.bg_elevated,
        border_width: 2.0,
    };

    match status {
        slider::Status::Active => slider::Style { rail, handle },
        slider::Status::Hovered => slider::Style {
            rail,
            handle: slider::Handle {
                background: theme.accent_hover.into(),
                ..handle
            },
        },
        slider::Status::Dragged => slider::Style {
            rail: slider::Rail {
                backgrounds: (theme.bg_hover.into(), theme.accent_hover.into()),
                ..rail
            },
            handle: slider::Handle {
                background: theme.accent_hover.into(),
                border_width: 3.0,
                ..handle
            },
        },
    }
}

pub fn themed_scrollable(theme: &AppTheme, status: scrollable::Status) -> scrollable::Style {
    let rail = scrollable::Rail {
        background: Some(theme.bg_elevated.into()),
        border: Border {
            color: theme.border,
            width: 0.0,
            radius: 4.0.into(),
        },
        scroller: scrollable::Scroller {
            background: theme.fg_muted.into(),
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: 4.0.into(),
            },
        },
    };

    let auto_scroll = scrollable::AutoScroll {
        background: theme.bg_surface.into(),
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 4.0.into(),
        },
        shadow: Shadow {
            color: theme.shadow_color,
            offset: Vector::new(0.0, 2.0),
            blur_radius: 4.0,
        },
        icon: theme.fg_primary,
    };

    match status {
        scrollable::Status::Dragged { .. } => {
            let dragged_rail = scrollable::Rail {
                scroller: scrollable::Scroller {
                    background: theme.accent.into(),
                    border: Border {
                        color: Color::TRANSPARENT,
                        width: 0.0,
                        radius: 4.0.into(),
                    },
                },
                ..rail
            };
            scrollable::Style {
                container: container::Style::default(),
                vertical_rail: dragged_rail,
                horizontal_rail: dragged_rail,
                gap: None,
                auto_scroll,
            }
        }
        _ => scrollable::Style {
            container: container::Style::default(),
            vertical_rail: rail,
            horizontal_rail: rail,
            gap: None,
            auto_scroll,
        },
    }
}
