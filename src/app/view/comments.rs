use crate::app::forms::AuthTab;
use crate::app::ui_components::{
    primary_button, reaction_button, secondary_button, themed_text_input,
};
use crate::app::{Message, State};
use crate::core::comments::CommentEntry;
use crate::theme::AppTheme;
use iced::widget::{button, column, row, text, text_input};
use iced::{Alignment, Element, Length};

fn comment_row<'a>(
    entry: &'a CommentEntry,
    liked: bool,
    theme: &'a AppTheme,
) -> Element<'a, Message> {
    let likes = entry.likes + u64::from(liked);

    column![
        row![
            text(&entry.author).size(13).color(theme.fg_primary),
            text(&entry.age).size(11).color(theme.fg_muted),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
        text(&entry.body).size(13).color(theme.fg_secondary),
        button(text(format!("👍 {likes}")).size(11))
            .on_press(Message::ToggleCommentLike(entry.id))
            .padding([2, 8])
            .style(move |_, status| reaction_button(theme, status, liked)),
    ]
    .spacing(4)
    .width(Length::Fill)
    .into()
}

pub fn view_comments(state: &State, video_id: u64) -> Element<'_, Message> {
    let theme = &state.theme;
    let thread = state.portal.existing_comments(video_id);
    let count = thread.map_or(0, |t| t.len());

    let composer: Element<'_, Message> = if state.portal.is_signed_in() {
        let can_post = !state.comment_draft.trim().is_empty();
        row![
            text_input("Add a comment...", &state.comment_draft)
                .on_input(Message::CommentDraftChanged)
                .on_submit(Message::SubmitComment)
                .padding([8, 14])
                .size(13)
                .style(move |_, status| themed_text_input(theme, status))
                .width(Length::Fill),
            button(text("Comment").size(13))
                .on_press_maybe(can_post.then_some(Message::SubmitComment))
                .padding([8, 16])
                .style(move |_, status| primary_button(theme, status)),
        ]
        .spacing(8)
        .align_y(Alignment::Center)
        .into()
    } else {
        row![
            text("Sign in to join the conversation")
                .size(13)
                .color(theme.fg_muted)
                .width(Length::Fill),
            button(text("Sign in").size(13))
                .on_press(Message::OpenAuth(AuthTab::SignIn))
                .padding([6, 14])
                .style(move |_, status| secondary_button(theme, status)),
        ]
        .align_y(Alignment::Center)
        .into()
    };

    let reactions = state.portal.reactions();
    let entries = column(
        thread
            .into_iter()
            .flat_map(|t| t.entries())
            .map(|entry| comment_row(entry, reactions.comment_liked(entry.id), theme)),
    )
    .spacing(16);

    column![
        text(format!("{count} Comments")).size(16).color(theme.fg_primary),
        composer,
        entries,
    ]
    .spacing(16)
    .into()
}
