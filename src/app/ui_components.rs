use crate::app::{Banner, BannerSeverity, Message};
use crate::theme::AppTheme;
use iced::widget::{button, checkbox, container, row, rule, scrollable, text, text_input};
use iced::{Alignment, Border, Color, Element, Length, Shadow, Vector};

/// Multiplies RGB, keeping alpha; used for hover and pressed shades
fn shade(color: Color, factor: f32) -> Color {
    Color {
        r: (color.r * factor).min(1.0),
        g: (color.g * factor).min(1.0),
        b: (color.b * factor).min(1.0),
        ..color
    }
}

fn hover_factor(theme: &AppTheme) -> f32 {
    if theme.is_light() { 0.94 } else { 1.12 }
}

const NO_SHADOW: Shadow = Shadow {
    color: Color::TRANSPARENT,
    offset: Vector::new(0.0, 0.0),
    blur_radius: 0.0,
};

pub fn main_container(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(theme.bg_base.into()),
        text_color: Some(theme.fg_primary),
        ..Default::default()
    }
}

/// Top bar with a faint glass bottom edge
pub fn navbar_container(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(
            Color {
                a: 0.92,
                ..theme.bg_sidebar
            }
            .into(),
        ),
        border: Border {
            color: theme.divider,
            width: 1.0,
            radius: 0.0.into(),
        },
        shadow: Shadow {
            color: theme.shadow_color,
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    }
}

pub fn sidebar_container(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(theme.bg_sidebar.into()),
        border: Border {
            color: theme.divider,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

pub fn card_container(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(theme.glass(0.85).into()),
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 12.0.into(),
        },
        shadow: Shadow {
            color: theme.shadow_color,
            offset: Vector::new(0.0, 2.0),
            blur_radius: 6.0,
        },
        ..Default::default()
    }
}

/// Stand-in for thumbnails and the player surface
pub fn media_placeholder(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(shade(theme.bg_elevated, 0.8).into()),
        text_color: Some(theme.fg_muted),
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 10.0.into(),
        },
        ..Default::default()
    }
}

/// Duration badge in the thumbnail corner
pub fn badge_container(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.75).into()),
        text_color: Some(Color::WHITE),
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: theme.shadow_color,
            ..NO_SHADOW
        },
        ..Default::default()
    }
}

pub fn section_header_container(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(
            Color {
                a: 0.03,
                ..theme.fg_primary
            }
            .into(),
        ),
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn filled_button(
    fill: Color,
    text_color: Color,
    theme: &AppTheme,
    status: button::Status,
) -> button::Style {
    let base = button::Style {
        background: Some(fill.into()),
        text_color,
        border: Border {
            radius: 18.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: theme.shadow_color,
            offset: Vector::new(0.0, 2.0),
            blur_radius: 3.0,
        },
        snap: true,
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(shade(fill, 1.08).into()),
            shadow: Shadow {
                color: theme.shadow_color,
                offset: Vector::new(0.0, 2.5),
                blur_radius: 4.0,
            },
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(shade(fill, 0.95).into()),
            shadow: Shadow {
                color: theme.shadow_color,
                offset: Vector::new(0.0, 0.5),
                blur_radius: 1.5,
            },
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Color { a: 0.5, ..fill }.into()),
            text_color: Color {
                a: 0.5,
                ..text_color
            },
            shadow: NO_SHADOW,
            ..base
        },
        button::Status::Active => base,
    }
}

pub fn primary_button(theme: &AppTheme, status: button::Status) -> button::Style {
    filled_button(theme.accent, theme.fg_on_accent, theme, status)
}

pub fn secondary_button(theme: &AppTheme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(theme.bg_elevated.into()),
        text_color: theme.fg_primary,
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 18.0.into(),
        },
        shadow: NO_SHADOW,
        snap: true,
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(shade(theme.bg_elevated, hover_factor(theme)).into()),
            border: Border {
                color: theme.border_strong,
                ..base.border
            },
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(theme.bg_active.into()),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(
                Color {
                    a: 0.5,
                    ..theme.bg_elevated
                }
                .into(),
            ),
            text_color: theme.fg_muted,
            ..base
        },
        button::Status::Active => base,
    }
}

/// Like / dislike / save pills; `active` draws them in the accent color
pub fn reaction_button(theme: &AppTheme, status: button::Status, active: bool) -> button::Style {
    let mut style = secondary_button(theme, status);
    if active {
        style.text_color = theme.accent;
        style.border = Border {
            color: theme.accent,
            ..style.border
        };
    }
    style
}

/// Borderless button for icons and sidebar rows
pub fn ghost_button(theme: &AppTheme, status: button::Status, active: bool) -> button::Style {
    let background = match (status, active) {
        (button::Status::Pressed, _) | (_, true) => Some(theme.bg_active.into()),
        (button::Status::Hovered, false) => Some(theme.bg_hover.into()),
        _ => None,
    };
    button::Style {
        background,
        text_color: if active {
            theme.fg_primary
        } else {
            theme.fg_secondary
        },
        border: Border {
            radius: 10.0.into(),
            ..Default::default()
        },
        shadow: NO_SHADOW,
        snap: true,
    }
}

/// Video cards are buttons; hover lifts them slightly
pub fn card_button(theme: &AppTheme, status: button::Status) -> button::Style {
    let c = card_container(theme);
    let base = button::Style {
        background: c.background,
        text_color: theme.fg_primary,
        border: c.border,
        shadow: c.shadow,
        snap: true,
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(theme.bg_hover.into()),
            shadow: Shadow {
                color: theme.shadow_color,
                offset: Vector::new(0.0, 4.0),
                blur_radius: 10.0,
            },
            ..base
        },
        button::Status::Pressed => button::Style {
            shadow: Shadow {
                color: theme.shadow_color,
                offset: Vector::new(0.0, 1.0),
                blur_radius: 2.0,
            },
            ..base
        },
        button::Status::Active | button::Status::Disabled => base,
    }
}

/// Text input styling with theme-aware colors
pub fn themed_text_input(theme: &AppTheme, status: text_input::Status) -> text_input::Style {
    let base = text_input::Style {
        background: theme.bg_elevated.into(),
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 18.0.into(),
        },
        icon: theme.fg_muted,
        placeholder: theme.fg_muted,
        value: theme.fg_primary,
        selection: Color {
            a: 0.4,
            ..theme.accent
        },
    };

    match status {
        text_input::Status::Active => base,
        text_input::Status::Hovered => text_input::Style {
            border: Border {
                color: theme.border_strong,
                ..base.border
            },
            icon: theme.fg_secondary,
            ..base
        },
        text_input::Status::Focused { .. } => text_input::Style {
            border: Border {
                color: theme.info,
                width: 2.0,
                ..base.border
            },
            icon: theme.info,
            ..base
        },
        text_input::Status::Disabled => text_input::Style {
            background: Color {
                a: 0.5,
                ..theme.bg_elevated
            }
            .into(),
            value: theme.fg_muted,
            ..base
        },
    }
}

/// Checkbox styling with theme-aware colors
pub fn themed_checkbox(theme: &AppTheme, status: checkbox::Status) -> checkbox::Style {
    let base = checkbox::Style {
        background: theme.bg_elevated.into(),
        icon_color: theme.fg_on_accent,
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 4.0.into(),
        },
        text_color: Some(theme.fg_secondary),
    };
    let checked = checkbox::Style {
        background: theme.accent.into(),
        border: Border {
            color: theme.accent,
            ..base.border
        },
        ..base
    };

    match status {
        checkbox::Status::Active { is_checked } => {
            if is_checked {
                checked
            } else {
                base
            }
        }
        checkbox::Status::Hovered { is_checked } => {
            if is_checked {
                checkbox::Style {
                    background: theme.accent_hover.into(),
                    ..checked
                }
            } else {
                checkbox::Style {
                    background: theme.bg_hover.into(),
                    border: Border {
                        color: theme.border_strong,
                        ..base.border
                    },
                    ..base
                }
            }
        }
        checkbox::Status::Disabled { .. } => checkbox::Style {
            text_color: Some(theme.fg_muted),
            ..base
        },
    }
}

pub fn modal_backdrop(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(
            Color {
                a: 0.8,
                ..theme.bg_base
            }
            .into(),
        ),
        ..Default::default()
    }
}

/// Dialog panel on top of the backdrop
pub fn modal_container(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(theme.bg_surface.into()),
        text_color: Some(theme.fg_primary),
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 16.0.into(),
        },
        shadow: Shadow {
            color: theme.shadow_strong,
            offset: Vector::new(0.0, 10.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    }
}

pub fn themed_horizontal_rule(theme: &AppTheme) -> rule::Style {
    rule::Style {
        color: theme.divider,
        radius: 0.0.into(),
        fill_mode: rule::FillMode::Full,
        snap: true,
    }
}

/// Thin scrollbars that only light up while in use
pub fn themed_scrollable(theme: &AppTheme, status: scrollable::Status) -> scrollable::Style {
    let scroller_color = match status {
        scrollable::Status::Active { .. } => theme.fg_muted,
        scrollable::Status::Hovered {
            is_horizontal_scrollbar_hovered,
            is_vertical_scrollbar_hovered,
            ..
        } => {
            if is_horizontal_scrollbar_hovered || is_vertical_scrollbar_hovered {
                theme.fg_secondary
            } else {
                theme.fg_muted
            }
        }
        scrollable::Status::Dragged { .. } => theme.accent,
    };

    let rail = scrollable::Rail {
        background: None,
        border: Border::default(),
        scroller: scrollable::Scroller {
            background: scroller_color.into(),
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: 4.0.into(),
            },
        },
    };

    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: rail,
        horizontal_rail: rail,
        gap: None,
        auto_scroll: scrollable::AutoScroll {
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
        },
    }
}

/// One toast in the top-right stack; clicking × dismisses it
pub fn notification_banner<'a>(
    banner: &'a Banner,
    theme: &'a AppTheme,
    index: usize,
) -> Element<'a, Message> {
    let (icon, color) = match banner.severity {
        BannerSeverity::Success => ("✓", theme.success),
        BannerSeverity::Error => ("✕", theme.danger),
    };

    container(
        row![
            text(icon).size(16).color(color),
            text(&banner.message)
                .size(14)
                .color(theme.fg_primary)
                .width(Length::Fill),
            button(text("×").size(16))
                .on_press(Message::DismissBanner(index))
                .padding([0, 6])
                .style(move |_, status| ghost_button(theme, status, false)),
        ]
        .spacing(10)
        .align_y(Alignment::Center),
    )
    .padding([10, 14])
    .width(340)
    .style(move |_| container::Style {
        background: Some(theme.bg_elevated.into()),
        text_color: Some(theme.fg_primary),
        border: Border {
            color,
            width: 1.0,
            radius: 10.0.into(),
        },
        shadow: Shadow {
            color: theme.shadow_strong,
            offset: Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
        ..Default::default()
    })
    .into()
}
