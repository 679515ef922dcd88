//! Common mistakes: scenario grid with a detail and solutions panel

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::app::ui_components::{
    card_button, card_container, code_block_container, primary_button, severity_badge,
    severity_color, tinted_panel,
};
use crate::app::{Message, State};
use crate::core::content::ui::errors as strings;

pub fn view(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let locale = state.page.locale;

    let header = column![
        text(strings::TITLE.resolve(locale))
            .size(26)
            .color(theme.fg_primary),
        text(strings::SUBTITLE.resolve(locale))
            .size(14)
            .color(theme.fg_secondary),
    ]
    .spacing(8)
    .align_x(Alignment::Center);

    let selected_id = state.page.errors.selected_id();
    let mut grid = column![].spacing(16).width(Length::Fill);
    for chunk in state.catalog.error_scenarios().chunks(3) {
        let mut cards = row![].spacing(16).width(Length::Fill);
        for scenario in chunk {
            let active = scenario.id == selected_id;
            cards = cards.push(
                button(
                    column![
                        row![
                            container(text(scenario.severity.badge()).size(10))
                                .padding([2, 8])
                                .style(move |_| severity_badge(theme, scenario.severity)),
                            Space::new().width(Length::Fill),
                            text(scenario.category.resolve(locale))
                                .size(11)
                                .color(theme.fg_muted),
                        ]
                        .align_y(Alignment::Center),
                        text(scenario.title.resolve(locale))
                            .size(15)
                            .color(theme.fg_primary),
                        text(scenario.description.resolve(locale))
                            .size(12)
                            .color(theme.fg_secondary),
                    ]
                    .spacing(8),
                )
                .width(Length::Fill)
                .padding(16)
                .on_press(Message::ScenarioSelected(scenario.id))
                .style(move |_, status| card_button(theme, status, active)),
            );
        }
        // Pad short rows so cards keep a uniform width.
        for _ in chunk.len()..3 {
            cards = cards.push(Space::new().width(Length::Fill));
        }
        grid = grid.push(cards);
    }

    let mut page = column![header, grid]
        .spacing(24)
        .align_x(Alignment::Center)
        .width(Length::Fill);

    // Unknown selection ids render the grid alone.
    if let Some(scenario) = state.current_scenario() {
        page = page.push(detail_card(state, scenario));
    }

    page.into()
}

fn detail_card<'a>(
    state: &'a State,
    scenario: &'a crate::core::catalog::ErrorScenario,
) -> Element<'a, Message> {
    let theme = &state.theme;
    let locale = state.page.locale;

    let left = column![
        row![
            container(text(scenario.severity.badge()).size(11))
                .padding([3, 10])
                .style(move |_| severity_badge(theme, scenario.severity)),
            text(format!(
                "{}: {}",
                strings::SEVERITY.resolve(locale),
                scenario.severity.badge()
            ))
            .size(11)
            .color(severity_color(theme, scenario.severity)),
        ]
        .spacing(10)
        .align_y(Alignment::Center),
        text(scenario.title.resolve(locale))
            .size(20)
            .color(theme.fg_primary),
        text(scenario.description.resolve(locale))
            .size(14)
            .color(theme.fg_secondary),
        bullet_section(
            theme.warning,
            strings::COMMON_SYMPTOMS.resolve(locale),
            scenario.symptoms.resolve(locale),
        ),
        bullet_section(
            theme.danger,
            strings::POTENTIAL_CONSEQUENCES.resolve(locale),
            scenario.consequences.resolve(locale),
        ),
    ]
    .spacing(14)
    .width(Length::Fill);

    let toggle_label = if state.page.errors.solution_visible() {
        strings::HIDE_CODE
    } else {
        strings::SHOW_CODE
    };

    let mut right = column![
        row![
            text(strings::SOLUTIONS.resolve(locale))
                .size(15)
                .color(theme.fg_primary),
            Space::new().width(Length::Fill),
            button(text(toggle_label.resolve(locale)).size(12))
                .on_press(Message::ToggleSolution)
                .padding([6, 14])
                .style(move |_, status| primary_button(theme, status)),
        ]
        .align_y(Alignment::Center),
        column(scenario.solutions.resolve(locale).iter().map(|solution| {
            row![
                text("✓").size(13).color(theme.success),
                text(*solution).size(13),
            ]
            .spacing(8)
            .into()
        }))
        .spacing(6),
    ]
    .spacing(14)
    .width(Length::Fill);

    if state.page.errors.solution_visible() {
        right = right.push(
            container(
                column![
                    row![
                        text("Code Example").size(11).color(theme.fg_muted),
                        Space::new().width(Length::Fill),
                        text("iptables").size(11).color(theme.fg_muted),
                    ],
                    text(scenario.code_example)
                        .size(12)
                        .font(iced::Font::MONOSPACE),
                ]
                .spacing(8),
            )
            .padding(14)
            .width(Length::Fill)
            .style(move |_| code_block_container(theme)),
        );
    }

    right = right.push(
        container(
            column![
                text(strings::PREVENTION_TIPS.resolve(locale))
                    .size(13)
                    .color(theme.info),
                column(strings::TIPS.iter().map(|tip| {
                    text(format!("• {}", tip.resolve(locale)))
                        .size(12)
                        .color(theme.fg_secondary)
                        .into()
                }))
                .spacing(4),
            ]
            .spacing(8),
        )
        .padding(14)
        .width(Length::Fill)
        .style(move |_| tinted_panel(theme.info)),
    );

    container(row![left, right].spacing(28))
        .padding(28)
        .width(Length::Fill)
        .style(move |_| card_container(theme))
        .into()
}

fn bullet_section<'a>(
    tint: iced::Color,
    label: &'a str,
    entries: &'a [&'a str],
) -> Element<'a, Message> {
    column![
        text(label).size(13).color(tint),
        column(entries.iter().map(|entry| {
            row![text("•").size(13).color(tint), text(*entry).size(13)]
                .spacing(8)
                .into()
        }))
        .spacing(5),
    ]
    .spacing(8)
    .into()
}
