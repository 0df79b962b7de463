//! Feed of video cards for the active section and query

use crate::app::ui_components::{badge_container, card_button, media_placeholder, themed_scrollable};
use crate::app::{Message, State};
use crate::core::catalog::ContentItem;
use crate::theme::AppTheme;
use iced::widget::{Space, button, column, container, row, scrollable, stack, text};
use iced::{Alignment, Element, Length, alignment};

struct CardSize {
    width: f32,
    thumb_height: f32,
    title_chars: usize,
}

const REGULAR: CardSize = CardSize {
    width: 300.0,
    thumb_height: 168.0,
    title_chars: 60,
};

const COMPACT: CardSize = CardSize {
    width: 220.0,
    thumb_height: 124.0,
    title_chars: 42,
};

/// Thumbnail stand-in with the duration pinned bottom-right
pub fn thumbnail<'a>(
    item: &'a ContentItem,
    theme: &'a AppTheme,
    width: f32,
    height: f32,
) -> Element<'a, Message> {
    let poster = container(text("▶").size(height / 4.0).color(theme.fg_muted))
        .center_x(width)
        .center_y(height)
        .style(move |_| media_placeholder(theme));

    let badge = container(
        container(text(&item.duration).size(11))
            .padding([2, 6])
            .style(move |_| badge_container(theme)),
    )
    .width(width)
    .height(height)
    .padding(8)
    .align_x(alignment::Horizontal::Right)
    .align_y(alignment::Vertical::Bottom);

    stack![poster, badge].into()
}

fn video_card<'a>(
    item: &'a ContentItem,
    theme: &'a AppTheme,
    size: &CardSize,
) -> Element<'a, Message> {
    let details = column![
        text(crate::utils::truncate_string(&item.title, size.title_chars))
            .size(14)
            .color(theme.fg_primary),
        text(&item.owner).size(12).color(theme.fg_secondary),
        text(format!("{} • {}", item.views, item.uploaded))
            .size(12)
            .color(theme.fg_muted),
    ]
    .spacing(4)
    .padding([4, 4]);

    button(
        column![
            thumbnail(item, theme, size.width - 16.0, size.thumb_height),
            details
        ]
        .spacing(8),
    )
    .on_press(Message::VideoSelected(item.id))
    .width(size.width)
    .padding(8)
    .style(move |_, status| card_button(theme, status))
    .into()
}

pub fn view_feed(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let filtered = state.portal.filtered(state.section, &state.search);
    let size = if state.config.compact_grid {
        &COMPACT
    } else {
        &REGULAR
    };

    let heading = match filtered.summary() {
        Some(summary) => summary,
        None => state.section.label().to_string(),
    };
    let header = row![
        text(state.section.icon()).size(20).color(theme.accent),
        text(heading).size(20).color(theme.fg_primary),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let body: Element<'_, Message> = if filtered.is_empty() {
        container(
            column![
                text("∅").size(40).color(theme.fg_muted),
                text(filtered.empty_message())
                    .size(16)
                    .color(theme.fg_secondary),
            ]
            .spacing(8)
            .align_x(Alignment::Center),
        )
        .center_x(Length::Fill)
        .padding(60)
        .into()
    } else {
        row(filtered
            .items
            .into_iter()
            .map(|item| video_card(item, theme, size)))
        .spacing(16)
        .wrap()
        .vertical_spacing(16)
        .into()
    };

    scrollable(
        column![header, body, Space::new().height(24)]
            .spacing(20)
            .padding(24)
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(move |_, status| themed_scrollable(theme, status))
    .into()
}
