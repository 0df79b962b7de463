//! Modal dialogs (sign-in / registration and upload)

use crate::app::forms::{AuthForm, AuthTab, UploadForm};
use crate::app::ui_components::{
    ghost_button, modal_container, primary_button, secondary_button, themed_text_input,
};
use crate::app::Message;
use crate::core::directory::DEMO_ACCOUNTS;
use crate::theme::AppTheme;
use iced::widget::{Space, button, column, container, row, text, text_input};
use iced::{Alignment, Element, Length};

fn field<'a>(
    label: &'a str,
    input: impl Into<Element<'a, Message>>,
    error: Option<&'a str>,
    theme: &'a AppTheme,
) -> Element<'a, Message> {
    let mut col = column![
        text(label).size(12).color(theme.fg_secondary),
        input.into()
    ]
    .spacing(4);
    if let Some(error) = error {
        col = col.push(text(error).size(11).color(theme.danger));
    }
    col.into()
}

fn tab_button<'a>(tab: AuthTab, active: AuthTab, theme: &'a AppTheme) -> Element<'a, Message> {
    let selected = tab == active;
    button(text(tab.title()).size(14))
        .on_press(Message::AuthTabChanged(tab))
        .padding([6, 14])
        .style(move |_, status| ghost_button(theme, status, selected))
        .into()
}

fn dialog_header<'a>(
    title: &'a str,
    close: Message,
    theme: &'a AppTheme,
) -> Element<'a, Message> {
    row![
        text(title).size(20).color(theme.fg_primary),
        Space::new().width(Length::Fill),
        button(text("×").size(18))
            .on_press(close)
            .padding([0, 8])
            .style(move |_, status| ghost_button(theme, status, false)),
    ]
    .align_y(Alignment::Center)
    .into()
}

pub fn view_auth_modal<'a>(form: &'a AuthForm, theme: &'a AppTheme) -> Element<'a, Message> {
    let submit_msg = form.can_submit().then_some(Message::SubmitAuth);

    let mut fields = column![].spacing(12);
    if form.tab == AuthTab::Register {
        fields = fields.push(field(
            "Name",
            text_input("Your channel name", &form.name)
                .on_input(Message::AuthNameChanged)
                .padding([8, 14])
                .style(move |_, status| themed_text_input(theme, status)),
            None,
            theme,
        ));
    }
    fields = fields
        .push(field(
            "Email",
            text_input("you@example.com", &form.email)
                .on_input(Message::AuthEmailChanged)
                .padding([8, 14])
                .style(move |_, status| themed_text_input(theme, status)),
            None,
            theme,
        ))
        .push(field(
            "Password",
            text_input("Password", &form.password)
                .secure(true)
                .on_input(Message::AuthPasswordChanged)
                .on_submit_maybe(submit_msg.clone())
                .padding([8, 14])
                .style(move |_, status| themed_text_input(theme, status)),
            None,
            theme,
        ));

    let mut demo = column![text("Demo accounts").size(12).color(theme.fg_muted)].spacing(4);
    for (index, (email, password, name, _)) in DEMO_ACCOUNTS.iter().enumerate() {
        demo = demo.push(
            button(
                text(format!("{name}: {email} / {password}"))
                    .size(12)
                    .color(theme.fg_secondary),
            )
            .on_press(Message::FillDemoAccount(index))
            .padding([4, 8])
            .style(move |_, status| ghost_button(theme, status, false)),
        );
    }

    container(
        column![
            dialog_header(form.tab.title(), Message::CloseAuth, theme),
            row![
                tab_button(AuthTab::SignIn, form.tab, theme),
                tab_button(AuthTab::Register, form.tab, theme),
            ]
            .spacing(6),
            fields,
            row![
                Space::new().width(Length::Fill),
                button(text("Cancel").size(14))
                    .on_press(Message::CloseAuth)
                    .padding([8, 18])
                    .style(move |_, status| secondary_button(theme, status)),
                button(text(form.tab.title()).size(14))
                    .on_press_maybe(submit_msg)
                    .padding([8, 20])
                    .style(move |_, status| primary_button(theme, status)),
            ]
            .spacing(10),
            demo,
        ]
        .spacing(18)
        .padding(28),
    )
    .width(420)
    .style(move |_| modal_container(theme))
    .into()
}

pub fn view_upload_modal<'a>(form: &'a UploadForm, theme: &'a AppTheme) -> Element<'a, Message> {
    let publish_msg = form
        .errors
        .thumbnail
        .is_none()
        .then_some(Message::SubmitUpload);
    let file_row = row![
        text(form.file_label())
            .size(12)
            .color(if form.video_file.is_some() {
                theme.fg_primary
            } else {
                theme.fg_muted
            })
            .width(Length::Fill),
        button(
            text(if form.picking_file {
                "Choosing..."
            } else {
                "Choose file"
            })
            .size(13)
        )
        .on_press_maybe((!form.picking_file).then_some(Message::PickVideoFile))
        .padding([6, 14])
        .style(move |_, status| secondary_button(theme, status)),
    ]
    .spacing(10)
    .align_y(Alignment::Center);
    let file_row = if form.video_file.is_some() {
        file_row.push(
            button(text("×").size(14))
                .on_press(Message::ClearVideoFile)
                .padding([4, 8])
                .style(move |_, status| ghost_button(theme, status, false)),
        )
    } else {
        file_row
    };

    container(
        column![
            dialog_header("Upload video", Message::CloseUpload, theme),
            field(
                "Title",
                text_input("Give your video a title", &form.title)
                    .on_input(Message::UploadTitleChanged)
                    .padding([8, 14])
                    .style(move |_, status| themed_text_input(theme, status)),
                form.errors.title.as_deref(),
                theme,
            ),
            field(
                "Description",
                text_input("What is it about?", &form.description)
                    .on_input(Message::UploadDescriptionChanged)
                    .padding([8, 14])
                    .style(move |_, status| themed_text_input(theme, status)),
                form.errors.description.as_deref(),
                theme,
            ),
            field(
                "Thumbnail URL (optional)",
                text_input("https://...", &form.thumbnail_url)
                    .on_input(Message::UploadThumbnailChanged)
                    .padding([8, 14])
                    .style(move |_, status| themed_text_input(theme, status)),
                form.errors.thumbnail.as_deref(),
                theme,
            ),
            field("Video file", file_row, None, theme),
            row![
                Space::new().width(Length::Fill),
                button(text("Cancel").size(14))
                    .on_press(Message::CloseUpload)
                    .padding([8, 18])
                    .style(move |_, status| secondary_button(theme, status)),
                button(text("Publish").size(14))
                    .on_press_maybe(publish_msg)
                    .padding([8, 20])
                    .style(move |_, status| primary_button(theme, status)),
            ]
            .spacing(10),
        ]
        .spacing(16)
        .padding(28),
    )
    .width(520)
    .style(move |_| modal_container(theme))
    .into()
}
