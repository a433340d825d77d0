pub mod logging;
pub mod settings;
mod view;

// Re-export core library
pub use pocketnotes_core::*;

use iced::{Element, Size, Task, Theme};
use log::warn;
use settings::{AppSettings, ThemeChoice};

/// Application state: the note store plus the flow that drives the screens.
pub struct PocketNotesApp {
    store: NoteStore,
    flow: NoteFlow,
    theme: ThemeChoice,
    /// Last unexpected error, shown under the current screen until the next action.
    status: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Message {
    CreateNote,
    OpenNote(NoteId),
    ShowInfo,
    DismissInfo,
    TitleChanged(String),
    BodyChanged(String),
    Save,
    Delete,
    ConfirmDelete,
    CancelDelete,
    Cancel,
}

impl PocketNotesApp {
    pub fn new(settings: AppSettings) -> Self {
        Self {
            store: NoteStore::new(),
            flow: NoteFlow::new(settings.limits),
            theme: settings.theme,
            status: None,
        }
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    pub fn flow(&self) -> &NoteFlow {
        &self.flow
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn update(&mut self, message: Message) {
        self.status = None;

        let result = match message {
            Message::CreateNote => self.flow.open_create(),
            Message::OpenNote(id) => self.flow.open_edit(&self.store, id),
            Message::ShowInfo => {
                self.flow.show_info();
                Ok(())
            }
            Message::DismissInfo => {
                self.flow.dismiss_info();
                Ok(())
            }
            Message::TitleChanged(title) => self.flow.set_title(title),
            Message::BodyChanged(body) => self.flow.set_body(body),
            Message::Save => self.flow.save(&mut self.store).map(|_| ()),
            Message::Delete => self.flow.request_delete(),
            Message::ConfirmDelete => self.flow.confirm_delete(&mut self.store).map(|_| ()),
            Message::CancelDelete => {
                self.flow.cancel_delete();
                Ok(())
            }
            Message::Cancel => {
                self.flow.cancel();
                Ok(())
            }
        };

        match result {
            Ok(()) => {}
            // Rendered next to the inputs from the edit session.
            Err(PocketNotesError::ValidationFailed(_)) => {}
            Err(e) => {
                warn!("{e}");
                self.status = Some(e.user_message());
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::render(self)
    }

    pub fn theme(&self) -> Theme {
        match self.theme {
            ThemeChoice::Dark => Theme::Dark,
            ThemeChoice::Light => Theme::Light,
        }
    }
}

/// Loads settings, starts logging and opens the main window.
pub fn run() -> iced::Result {
    let (settings, warning) = settings::load_settings();
    let logging = logging::init_logging(&settings.log_level, &settings::log_directory());
    if let Err(e) = &logging {
        eprintln!("pocketnotes: logging disabled: {e}");
    }
    if let Some(warning) = warning {
        match logging {
            Ok(()) => warn!("{warning}"),
            Err(_) => eprintln!("pocketnotes: {warning}"),
        }
    }

    iced::application("PocketNotes", PocketNotesApp::update, PocketNotesApp::view)
        .theme(PocketNotesApp::theme)
        .window_size(Size::new(420.0, 760.0))
        .run_with(move || (PocketNotesApp::new(settings), Task::none()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> PocketNotesApp {
        PocketNotesApp::new(AppSettings::default())
    }

    fn create(app: &mut PocketNotesApp, title: &str, body: &str) {
        app.update(Message::CreateNote);
        app.update(Message::TitleChanged(title.to_string()));
        app.update(Message::BodyChanged(body.to_string()));
        app.update(Message::Save);
    }

    #[test]
    fn create_note_returns_to_list() {
        let mut app = app();
        create(&mut app, "Groceries", "Milk, eggs");

        assert!(app.flow().is_listing());
        assert_eq!(app.store().len(), 1);
        assert!(app.status().is_none());
    }

    #[test]
    fn invalid_save_shows_errors_without_status() {
        let mut app = app();
        create(&mut app, "Hi", "");

        assert!(app.store().is_empty());
        let session = app.flow().session().unwrap();
        assert_eq!(session.errors.len(), 1);
        assert!(app.status().is_none());
    }

    #[test]
    fn delete_goes_through_confirmation() {
        let mut app = app();
        create(&mut app, "Groceries", "Milk, eggs");
        let id = app.store().notes()[0].id;

        app.update(Message::OpenNote(id));
        app.update(Message::Delete);
        app.update(Message::CancelDelete);
        assert_eq!(app.store().len(), 1);

        app.update(Message::Delete);
        app.update(Message::ConfirmDelete);
        assert!(app.store().is_empty());
        assert!(app.flow().is_listing());
    }

    #[test]
    fn unexpected_errors_surface_in_status() {
        let mut app = app();
        app.update(Message::OpenNote(uuid_for_missing_note()));

        assert_eq!(app.status(), Some("Note no longer exists"));
        assert!(app.flow().is_listing());

        app.update(Message::ShowInfo);
        assert!(app.status().is_none());
        assert!(app.flow().info_open());
    }

    #[test]
    fn cancel_discards_edit() {
        let mut app = app();
        create(&mut app, "Groceries", "Milk, eggs");
        let id = app.store().notes()[0].id;

        app.update(Message::OpenNote(id));
        app.update(Message::TitleChanged("Changed".to_string()));
        app.update(Message::Cancel);

        assert_eq!(app.store().get(id).unwrap().title, "Groceries");
    }

    #[test]
    fn theme_follows_settings() {
        let light = PocketNotesApp::new(AppSettings {
            theme: ThemeChoice::Light,
            ..AppSettings::default()
        });
        assert_eq!(light.theme(), Theme::Light);
        assert_eq!(app().theme(), Theme::Dark);
    }

    #[test]
    fn info_text_uses_configured_limits() {
        let app = PocketNotesApp::new(AppSettings {
            limits: NoteLimits {
                title_min: 2,
                title_max: 30,
                body_max: 500,
            },
            ..AppSettings::default()
        });
        let info = app.flow().info_text();
        assert!(info.contains("2 to 30"));
        assert!(info.contains("at most 500"));
    }

    fn uuid_for_missing_note() -> NoteId {
        let mut store = NoteStore::new();
        let id = store.add(Note::new("Gone", ""));
        store.remove_by_id(id).unwrap();
        id
    }
}
