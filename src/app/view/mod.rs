//! UI rendering
//!
//! Navbar on top, sidebar plus feed or watch page below, and modal and
//! banner layers stacked over everything.

pub const SEARCH_INPUT_ID: &str = "search-input";

mod comments;
mod grid;
mod modals;
mod navbar;
mod sidebar;
mod watch;

use crate::app::ui_components::{main_container, modal_backdrop, notification_banner};
use crate::app::{Message, State};
use iced::widget::{center, column, container, opaque, row, stack};
use iced::{Element, Length, alignment};

pub fn view(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;

    let page: Element<'_, Message> = match state.portal.selected_item() {
        Some(item) => watch::view_watch_page(state, item),
        None => grid::view_feed(state),
    };

    let body: Element<'_, Message> = if state.sidebar_open {
        row![sidebar::view_sidebar(state), page].into()
    } else {
        page
    };

    let base = container(column![navbar::view_navbar(state), body])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| main_container(theme));

    // Upload wins over auth; both are never open from the UI at once
    let overlay: Option<Element<'_, Message>> = if let Some(form) = &state.upload_form {
        Some(modals::view_upload_modal(form, theme))
    } else {
        state
            .auth_form
            .as_ref()
            .map(|form| modals::view_auth_modal(form, theme))
    };

    // Always stack so the widget tree keeps its shape and scroll positions survive
    let with_overlay: Element<'_, Message> = if let Some(dialog) = overlay {
        stack![
            base,
            opaque(center(dialog).style(move |_| modal_backdrop(theme)))
        ]
        .into()
    } else {
        stack![base, iced::widget::Space::new()].into()
    };

    if state.banners.is_empty() {
        return stack![with_overlay, iced::widget::Space::new()].into();
    }

    let banner_column = column(
        state
            .banners
            .iter()
            .take(2)
            .enumerate()
            .map(|(index, banner)| notification_banner(banner, theme, index))
            .collect::<Vec<_>>(),
    )
    .spacing(8)
    .width(Length::Shrink)
    .padding(16);

    stack![
        with_overlay,
        container(banner_column)
            .width(Length::Fill)
            .height(Length::Shrink)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Top)
    ]
    .into()
}
