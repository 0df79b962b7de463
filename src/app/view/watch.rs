//! Watch page: player, reactions, description, comments and related videos

use crate::app::helpers::{
    DESCRIPTION_PREVIEW_LINES, description_preview, format_count,
};
use crate::app::ui_components::{
    card_button, card_container, ghost_button, media_placeholder,
    reaction_button, secondary_button, themed_horizontal_rule, themed_scrollable,
};
use crate::app::{Message, State};
use crate::core::catalog::{ContentItem, MediaSource};
use crate::core::reaction::ReactionKind;
use crate::theme::AppTheme;
use iced::widget::{Space, button, column, container, row, rule, scrollable, text};
use iced::{Alignment, Element, Length};

const PLAYER_HEIGHT: f32 = 420.0;
const RELATED_WIDTH: f32 = 340.0;

fn player<'a>(item: &'a ContentItem, theme: &'a AppTheme) -> Element<'a, Message> {
    let overlay = match item.media_source() {
        MediaSource::Playable { media, .. } => column![
            text("▶").size(64).color(theme.fg_primary),
            text(crate::utils::truncate_string(media, 72))
                .size(12)
                .color(theme.fg_muted),
        ],
        MediaSource::Placeholder { .. } => column![
            text("▶").size(64).color(theme.fg_muted),
            text("Video unavailable").size(14).color(theme.fg_muted),
        ],
    };

    container(overlay.spacing(8).align_x(Alignment::Center))
        .center_x(Length::Fill)
        .center_y(PLAYER_HEIGHT)
        .style(move |_| media_placeholder(theme))
        .into()
}

fn reaction_row<'a>(state: &'a State, item: &'a ContentItem) -> Element<'a, Message> {
    let theme = &state.theme;
    let reaction = state.portal.reaction(item.id);
    let likes = state.portal.displayed_likes(item.id).unwrap_or(item.likes);
    let (liked, disliked, saved) = (reaction.liked(), reaction.disliked(), reaction.saved());

    row![
        button(text(format!("👍 {}", format_count(likes))).size(13))
            .on_press(Message::React(item.id, ReactionKind::Like))
            .padding([6, 14])
            .style(move |_, status| reaction_button(theme, status, liked)),
        button(text("👎").size(13))
            .on_press(Message::React(item.id, ReactionKind::Dislike))
            .padding([6, 14])
            .style(move |_, status| reaction_button(theme, status, disliked)),
        button(text(if saved { "✓ Saved" } else { "＋ Save" }).size(13))
            .on_press(Message::ToggleSave(item.id))
            .padding([6, 14])
            .style(move |_, status| reaction_button(theme, status, saved)),
    ]
    .spacing(8)
    .into()
}

fn description<'a>(state: &'a State, item: &'a ContentItem) -> Element<'a, Message> {
    let theme = &state.theme;
    let (preview, truncated) = description_preview(&item.description, DESCRIPTION_PREVIEW_LINES);
    let body = if state.show_full_description {
        item.description.clone()
    } else {
        preview
    };

    let mut content = column![
        text(format!("{} • {}", item.views, item.uploaded))
            .size(13)
            .color(theme.fg_primary),
        text(body).size(13).color(theme.fg_secondary),
    ]
    .spacing(6);

    if truncated {
        content = content.push(
            button(
                text(if state.show_full_description {
                    "Show less"
                } else {
                    "Show more"
                })
                .size(12),
            )
            .on_press(Message::ToggleDescription)
            .padding([4, 8])
            .style(move |_, status| ghost_button(theme, status, false)),
        );
    }

    container(content)
        .padding(14)
        .width(Length::Fill)
        .style(move |_| card_container(theme))
        .into()
}

fn related_card<'a>(item: &'a ContentItem, theme: &'a AppTheme) -> Element<'a, Message> {
    button(
        row![
            super::grid::thumbnail(item, theme, 140.0, 80.0),
            column![
                text(crate::utils::truncate_string(&item.title, 48))
                    .size(13)
                    .color(theme.fg_primary),
                text(&item.owner).size(11).color(theme.fg_secondary),
                text(&item.views).size(11).color(theme.fg_muted),
            ]
            .spacing(3)
            .width(Length::Fill),
        ]
        .spacing(10),
    )
    .on_press(Message::VideoSelected(item.id))
    .width(Length::Fill)
    .padding(6)
    .style(move |_, status| card_button(theme, status))
    .into()
}

pub fn view_watch_page<'a>(state: &'a State, item: &'a ContentItem) -> Element<'a, Message> {
    let theme = &state.theme;

    let channel = row![
        text(&item.owner).size(15).color(theme.fg_primary),
        Space::new().width(Length::Fill),
        reaction_row(state, item),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let main = column![
        button(text("← Back").size(13))
            .on_press(Message::BackToFeed)
            .padding([6, 14])
            .style(move |_, status| secondary_button(theme, status)),
        player(item, theme),
        text(&item.title).size(22).color(theme.fg_primary),
        channel,
        description(state, item),
        rule::horizontal(1).style(move |_| themed_horizontal_rule(theme)),
        super::comments::view_comments(state, item.id),
    ]
    .spacing(16)
    .width(Length::Fill);

    let related = column(
        state
            .portal
            .related()
            .into_iter()
            .map(|related| related_card(related, theme)),
    )
    .spacing(10);

    scrollable(
        row![
            main,
            column![
                text("Up next").size(16).color(theme.fg_primary),
                related
            ]
            .spacing(12)
            .width(RELATED_WIDTH),
        ]
        .spacing(24)
        .padding(24),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(move |_, status| themed_scrollable(theme, status))
    .into()
}
