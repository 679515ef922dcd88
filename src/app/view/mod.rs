//! UI rendering module for fwlearn
//!
//! One submodule per section; this file owns the page chrome (title,
//! locale toggle, section tabs) and dispatches to the active section.

mod errors;
mod explainer;
mod slider;

use iced::widget::{button, column, container, row, rule, scrollable, text};
use iced::{Alignment, Element, Length};
use strum::IntoEnumIterator;

use crate::app::ui_components::{
    main_container, tab_button, themed_horizontal_rule, themed_scrollable,
};
use crate::app::{Message, State};
use crate::core::content::ui;
use crate::core::i18n::{Locale, LocalizedText};
use crate::core::state::Section;

/// Localized tab label for a section
fn section_label(section: Section) -> LocalizedText {
    match section {
        Section::Explainer => ui::page::TAB_BASICS,
        Section::Slider => ui::page::TAB_SLIDER,
        Section::Errors => ui::page::TAB_ERRORS,
    }
}

/// Main view entry point
pub fn view(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let locale = state.page.locale;

    let header = column![
        text(ui::page::TITLE.resolve(locale))
            .size(32)
            .color(theme.fg_primary),
        text(ui::page::SUBTITLE.resolve(locale))
            .size(15)
            .color(theme.fg_secondary),
    ]
    .spacing(8)
    .align_x(Alignment::Center);

    let locale_toggle = row(Locale::iter().map(|choice| {
        button(text(choice.native_name()).size(13))
            .on_press(Message::LocaleSelected(choice))
            .padding([6, 16])
            .style(move |_, status| tab_button(theme, status, choice == locale))
            .into()
    }))
    .spacing(4);

    let tabs = row(Section::iter().map(|section| {
        button(text(section_label(section).resolve(locale)).size(14))
            .on_press(Message::SectionSelected(section))
            .padding([10, 22])
            .style(move |_, status| tab_button(theme, status, section == state.page.section))
            .into()
    }))
    .spacing(4);

    let content: Element<'_, Message> = match state.page.section {
        Section::Explainer => explainer::view(state),
        Section::Slider => slider::view(state),
        Section::Errors => errors::view(state),
    };

    let divider = rule::horizontal(1).style(move |_| themed_horizontal_rule(theme));

    let page = column![header, locale_toggle, tabs, divider, content]
        .spacing(24)
        .align_x(Alignment::Center)
        .width(Length::Fill);

    let body = scrollable(
        container(container(page).max_width(960).padding(32))
            .width(Length::Fill)
            .align_x(Alignment::Center),
    )
    .style(move |_, status| themed_scrollable(theme, status));

    container(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| main_container(theme))
        .into()
}
