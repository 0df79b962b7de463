use crate::app::forms::AuthTab;
use crate::app::ui_components::{
    ghost_button, navbar_container, primary_button, secondary_button,
    themed_text_input,
};
use crate::app::{Message, State};
use iced::widget::{Id, Space, button, container, row, text, text_input};
use iced::{Alignment, Element, Length};

pub fn view_navbar(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;

    let menu = button(text("☰").size(18))
        .on_press(Message::ToggleSidebar)
        .padding([6, 10])
        .style(move |_, status| ghost_button(theme, status, state.sidebar_open));

    let logo = button(
        row![
            text("▶").size(18).color(theme.accent),
            text("GlassTube").size(20).color(theme.fg_primary),
        ]
        .spacing(6)
        .align_y(Alignment::Center),
    )
    .on_press(Message::BackToFeed)
    .padding([4, 8])
    .style(move |_, status| ghost_button(theme, status, false));

    let mut search = row![
        text_input("Search videos...", &state.search)
            .id(Id::new(super::SEARCH_INPUT_ID))
            .on_input(Message::SearchChanged)
            .padding([8, 16])
            .size(14)
            .style(move |_, status| themed_text_input(theme, status))
            .width(Length::Fill),
    ]
    .spacing(6)
    .align_y(Alignment::Center);
    if !state.search.is_empty() {
        search = search.push(
            button(text("×").size(16))
                .on_press(Message::ClearSearch)
                .padding([4, 10])
                .style(move |_, status| ghost_button(theme, status, false)),
        );
    }
    let search = container(search).max_width(560);

    let theme_button = button(text(state.current_theme.name()).size(12))
        .on_press(Message::CycleTheme)
        .padding([6, 12])
        .style(move |_, status| secondary_button(theme, status));

    let account: Element<'_, Message> = match state.portal.session() {
        Some(session) => {
            let mut controls = row![].spacing(10).align_y(Alignment::Center);
            if session.can_upload() {
                controls = controls.push(
                    button(text("⇪ Upload").size(13))
                        .on_press(Message::OpenUpload)
                        .padding([6, 14])
                        .style(move |_, status| secondary_button(theme, status)),
                );
            }
            controls
                .push(
                    text(&session.name)
                        .size(13)
                        .color(theme.fg_secondary),
                )
                .push(
                    button(text("Log out").size(13))
                        .on_press(Message::Logout)
                        .padding([6, 14])
                        .style(move |_, status| secondary_button(theme, status)),
                )
                .into()
        }
        None => button(text("Sign in").size(13))
            .on_press(Message::OpenAuth(AuthTab::SignIn))
            .padding([6, 16])
            .style(move |_, status| primary_button(theme, status))
            .into(),
    };

    container(
        row![
            menu,
            logo,
            Space::new().width(Length::Fill),
            search,
            Space::new().width(Length::Fill),
            theme_button,
            account,
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .padding([10, 16])
    .width(Length::Fill)
    .style(move |_| navbar_container(theme))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::handlers::test_utils::{create_admin_state, create_test_state};

    #[test]
    fn test_navbar_builds_with_active_search() {
        let mut state = create_test_state();
        state.search = "gaming".to_string();
        let _ = view_navbar(&state);

        let mut admin = create_admin_state();
        admin.search = "hub ".to_string();
        let _ = view_navbar(&admin);
    }

    #[test]
    fn test_full_view_builds_on_watch_page() {
        let mut state = create_admin_state();
        state.search = "rgb".to_string();
        let _ = state.update(Message::VideoSelected(2));
        let _ = crate::app::view::view(&state);
    }
}
