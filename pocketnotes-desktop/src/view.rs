//! Widget trees for the list and edit screens.

use crate::{EditSession, Message, Note, PocketNotesApp, Screen};
use iced::widget::{button, column, container, row, scrollable, text, text_input, Column};
use iced::{Element, Length, Theme};

pub(crate) fn render(app: &PocketNotesApp) -> Element<'_, Message> {
    let screen: Element<'_, Message> = match app.flow().screen() {
        Screen::Listing if app.flow().info_open() => {
            info_dialog(app.flow().info_text())
        }
        Screen::Listing => listing(app.store().notes()),
        Screen::Editing(session) if session.confirming_delete => delete_dialog(session),
        Screen::Editing(session) => editor(
            session,
            app.flow().title_invalid(),
            app.flow().body_invalid(),
        ),
    };

    let mut content = column![screen].spacing(12);
    if let Some(status) = app.status() {
        content = content.push(text(status.to_string()).style(text::danger));
    }

    container(content)
        .padding(16)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn listing(notes: &[Note]) -> Element<'_, Message> {
    let actions = row![
        button(text("Create Note")).on_press(Message::CreateNote),
        button(text("Information"))
            .on_press(Message::ShowInfo)
            .style(button::secondary),
    ]
    .spacing(8);

    let rows: Element<'_, Message> = if notes.is_empty() {
        text("No notes yet").into()
    } else {
        Column::with_children(notes.iter().map(note_row))
            .spacing(8)
            .into()
    };

    column![actions, scrollable(rows).height(Length::Fill)]
        .spacing(12)
        .into()
}

fn note_row(note: &Note) -> Element<'_, Message> {
    let preview = column![
        text(note.title.as_str()).size(22),
        text(note.body.as_str()).size(14),
    ]
    .spacing(4);

    button(preview)
        .on_press(Message::OpenNote(note.id))
        .width(Length::Fill)
        .padding(12)
        .style(button::secondary)
        .into()
}

fn editor(
    session: &EditSession,
    title_invalid: bool,
    body_invalid: bool,
) -> Element<'_, Message> {
    let title = text_input("Title", &session.title)
        .on_input(Message::TitleChanged)
        .padding(10)
        .style(move |theme: &Theme, status| flag_invalid(theme, status, title_invalid));

    let body = text_input("Text", &session.body)
        .on_input(Message::BodyChanged)
        .padding(10)
        .style(move |theme: &Theme, status| flag_invalid(theme, status, body_invalid));

    let errors: Column<'_, Message> = Column::with_children(
        session
            .errors
            .iter()
            .map(|error| text(error.as_str()).style(text::danger).into()),
    )
    .spacing(4);

    let mut actions = row![button(text("Save Note")).on_press(Message::Save)].spacing(8);
    if session.can_delete() {
        actions = actions.push(
            button(text("Delete Note"))
                .on_press(Message::Delete)
                .style(button::danger),
        );
    }
    actions = actions.push(
        button(text("Cancel"))
            .on_press(Message::Cancel)
            .style(button::secondary),
    );

    column![title, body, errors, actions].spacing(12).into()
}

fn flag_invalid(theme: &Theme, status: text_input::Status, invalid: bool) -> text_input::Style {
    let mut style = text_input::default(theme, status);
    if invalid {
        style.border.color = theme.palette().danger;
        style.border.width = 2.0;
    }
    style
}

fn dialog<'a>(
    body: Element<'a, Message>,
    actions: Element<'a, Message>,
) -> Element<'a, Message> {
    container(column![body, actions].spacing(16))
        .padding(20)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}

fn info_dialog<'a>(info: String) -> Element<'a, Message> {
    dialog(
        column![text("Information").size(22), text(info)]
            .spacing(8)
            .into(),
        button(text("OK")).on_press(Message::DismissInfo).into(),
    )
}

fn delete_dialog(session: &EditSession) -> Element<'_, Message> {
    dialog(
        text(format!("Delete \"{}\"?", session.title)).into(),
        row![
            button(text("Yes"))
                .on_press(Message::ConfirmDelete)
                .style(button::danger),
            button(text("No"))
                .on_press(Message::CancelDelete)
                .style(button::secondary),
        ]
        .spacing(8)
        .into(),
    )
}
