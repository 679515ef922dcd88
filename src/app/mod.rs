pub mod handlers;
pub mod ui_components;
pub mod view;

use iced::{Element, Task};

use crate::core::catalog::{CatalogEntry, ContentCatalog, ErrorScenario, FirewallType, SecurityLevel};
use crate::core::content;
use crate::core::i18n::Locale;
use crate::core::state::{PageState, Section};
use crate::theme::{AppTheme, ThemeChoice};

pub struct State {
    pub catalog: ContentCatalog,
    pub page: PageState,
    pub theme: AppTheme,
}

#[derive(Debug, Clone)]
pub enum Message {
    SectionSelected(Section),
    LocaleSelected(Locale),
    // Explainer
    NextType,
    PreviousType,
    TypeSelected(usize),
    // Slider
    LevelChanged(u8),
    ToggleTrafficDetail,
    // Error simulator
    ScenarioSelected(&'static str),
    ToggleSolution,
    // Keyboard shortcuts
    EventOccurred(iced::Event),
}

impl State {
    pub fn new() -> (Self, Task<Message>) {
        Self::with_options(Locale::default(), ThemeChoice::default())
    }

    /// Session configuration comes from the CLI; nothing is persisted.
    pub fn with_options(locale: Locale, theme_choice: ThemeChoice) -> (Self, Task<Message>) {
        let catalog = content::builtin();

        // The builtin data is covered by tests; a violation here means a
        // content edit broke an invariant.
        if let Err(e) = catalog.validate() {
            tracing::error!("builtin catalog failed validation: {e}");
        }
        for gap in catalog.missing_translations() {
            tracing::debug!(
                entry = %gap.entry_id,
                field = gap.field,
                "field falls back to English"
            );
        }

        let mut page = PageState::new(&catalog);
        page.locale = locale;

        (
            Self {
                catalog,
                page,
                theme: theme_choice.to_theme(),
            },
            Task::none(),
        )
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SectionSelected(section) => {
                handlers::navigation::handle_section_selected(self, section);
            }
            Message::NextType => handlers::navigation::handle_next_type(self),
            Message::PreviousType => handlers::navigation::handle_previous_type(self),
            Message::TypeSelected(index) => handlers::navigation::handle_type_selected(self, index),
            Message::LocaleSelected(locale) => {
                handlers::display::handle_locale_selected(self, locale);
            }
            Message::LevelChanged(level) => handlers::display::handle_level_changed(self, level),
            Message::ToggleTrafficDetail => handlers::display::handle_toggle_traffic_detail(self),
            Message::ScenarioSelected(id) => handlers::display::handle_scenario_selected(self, id),
            Message::ToggleSolution => handlers::display::handle_toggle_solution(self),
            Message::EventOccurred(event) => return self.handle_event(event),
        }
        Task::none()
    }

    fn handle_event(&mut self, event: iced::Event) -> Task<Message> {
        if let iced::Event::Keyboard(iced::keyboard::Event::KeyPressed { key, .. }) = event {
            match key.as_ref() {
                iced::keyboard::Key::Named(iced::keyboard::key::Named::ArrowRight)
                    if self.page.section == Section::Explainer =>
                {
                    return Task::done(Message::NextType);
                }
                iced::keyboard::Key::Named(iced::keyboard::key::Named::ArrowLeft)
                    if self.page.section == Section::Explainer =>
                {
                    return Task::done(Message::PreviousType);
                }
                iced::keyboard::Key::Character("1") => {
                    return Task::done(Message::SectionSelected(Section::Explainer));
                }
                iced::keyboard::Key::Character("2") => {
                    return Task::done(Message::SectionSelected(Section::Slider));
                }
                iced::keyboard::Key::Character("3") => {
                    return Task::done(Message::SectionSelected(Section::Errors));
                }
                iced::keyboard::Key::Character("l") => {
                    return Task::done(Message::LocaleSelected(self.page.locale.toggled()));
                }
                _ => {}
            }
        }
        Task::none()
    }

    pub fn subscription(&self) -> iced::Subscription<Message> {
        iced::event::listen().map(Message::EventOccurred)
    }

    // Selection resolved against the catalog, per section. Each helper
    // goes through the tagged entry so a section/variant mismatch cannot
    // slip through silently.

    pub fn current_firewall_type(&self) -> Option<&FirewallType> {
        match self.page.resolved_entry(&self.catalog) {
            Some(CatalogEntry::FirewallType(ft)) => Some(ft),
            _ => None,
        }
    }

    pub fn current_security_level(&self) -> Option<&SecurityLevel> {
        match self.page.resolved_entry(&self.catalog) {
            Some(CatalogEntry::SecurityLevel(sl)) => Some(sl),
            _ => None,
        }
    }

    pub fn current_scenario(&self) -> Option<&ErrorScenario> {
        match self.page.resolved_entry(&self.catalog) {
            Some(CatalogEntry::ErrorScenario(es)) => Some(es),
            _ => None,
        }
    }
}
