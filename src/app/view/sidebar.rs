//! Section navigation and display preferences

use crate::app::ui_components::{
    ghost_button, section_header_container, sidebar_container, themed_checkbox,
    themed_horizontal_rule, themed_scrollable,
};
use crate::app::{Message, State};
use crate::core::directory::DEMO_ACCOUNTS;
use crate::core::filter::Section;
use iced::widget::{button, checkbox, column, container, row, rule, scrollable, text};
use iced::{Alignment, Element, Length};

const SIDEBAR_WIDTH: f32 = 220.0;

fn section_badge(state: &State, section: Section) -> Option<usize> {
    let reactions = state.portal.reactions();
    let count = match section {
        Section::WatchLater => reactions.saved_items().len(),
        Section::Liked => reactions.liked_items().len(),
        Section::Home | Section::Trending | Section::Playlists => return None,
    };
    (count > 0).then_some(count)
}

pub fn view_sidebar(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let signed_in = state.portal.is_signed_in();

    let mut nav = column![].spacing(4);
    for section in Section::visible(signed_in) {
        let active = state.section == section && state.portal.selected_item().is_none();
        let mut label = row![
            text(section.icon()).size(16).width(22),
            text(section.label()).size(14).width(Length::Fill),
        ]
        .spacing(10)
        .align_y(Alignment::Center);
        if let Some(count) = section_badge(state, section) {
            label = label.push(text(count.to_string()).size(11).color(theme.fg_muted));
        }
        nav = nav.push(
            button(label)
                .on_press(Message::SectionSelected(section))
                .width(Length::Fill)
                .padding([8, 12])
                .style(move |_, status| ghost_button(theme, status, active)),
        );
    }

    let display = column![
        container(text("DISPLAY").size(9).color(theme.fg_muted))
            .padding([2, 6])
            .style(move |_| section_header_container(theme)),
        checkbox(state.config.compact_grid)
            .label("Compact grid")
            .on_toggle(Message::ToggleCompactGrid)
            .size(16)
            .text_size(13)
            .style(move |_, status| themed_checkbox(theme, status)),
    ]
    .spacing(8);

    let mut content = column![
        nav,
        rule::horizontal(1).style(move |_| themed_horizontal_rule(theme)),
        display,
    ]
    .spacing(16)
    .padding(12);

    if !signed_in {
        let mut demo = column![
            text("Sign in to like, save and comment.")
                .size(12)
                .color(theme.fg_secondary),
        ]
        .spacing(6);
        for (index, (email, password, _, role)) in DEMO_ACCOUNTS.iter().enumerate() {
            demo = demo.push(
                button(
                    column![
                        text(format!("Demo {role}")).size(12).color(theme.fg_primary),
                        text(format!("{email} / {password}"))
                            .size(11)
                            .color(theme.fg_muted),
                    ]
                    .spacing(2),
                )
                .on_press(Message::FillDemoAccount(index))
                .width(Length::Fill)
                .padding([6, 8])
                .style(move |_, status| ghost_button(theme, status, false)),
            );
        }
        content = content
            .push(rule::horizontal(1).style(move |_| themed_horizontal_rule(theme)))
            .push(demo);
    }

    container(
        scrollable(content)
            .height(Length::Fill)
            .style(move |_, status| themed_scrollable(theme, status)),
    )
    .width(SIDEBAR_WIDTH)
    .height(Length::Fill)
    .style(move |_| sidebar_container(theme))
    .into()
}

