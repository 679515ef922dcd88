//! Security levels: interactive strictness slider

use iced::widget::{Space, button, column, container, row, slider, text};
use iced::{Alignment, Element, Length};

use crate::app::ui_components::{card_container, primary_button, themed_slider, tinted_panel};
use crate::app::{Message, State};
use crate::core::content::ui::slider as strings;

pub fn view(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let locale = state.page.locale;
    let level = state.page.slider.level();

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

    let endpoints = row![
        text(strings::MINIMAL_SECURITY.resolve(locale))
            .size(12)
            .color(theme.fg_muted),
        Space::new().width(Length::Fill),
        text(strings::MAXIMUM_SECURITY.resolve(locale))
            .size(12)
            .color(theme.fg_muted),
    ]
    .width(Length::Fill);

    let level_slider = slider(1..=5u8, level, Message::LevelChanged)
        .step(1u8)
        .style(move |_, status| themed_slider(theme, status));

    let indicator = text(format!("{} {level}", strings::LEVEL.resolve(locale)))
        .size(14)
        .color(theme.accent);

    let mut page = column![
        header,
        container(column![endpoints, level_slider, indicator].spacing(10))
            .padding([16, 24])
            .width(Length::Fill)
            .style(move |_| card_container(theme)),
    ]
    .spacing(24)
    .align_x(Alignment::Center)
    .width(Length::Fill);

    // Levels are looked up by their declared number, not list position.
    if let Some(profile) = state.current_security_level() {
        let stats = row![
            stat_panel(
                theme.success,
                strings::SECURITY_LEVEL.resolve(locale),
                strings::PROTECTION.resolve(locale),
                profile.protection.resolve(locale),
            ),
            stat_panel(
                theme.info,
                strings::PERFORMANCE.resolve(locale),
                strings::SPEED.resolve(locale),
                profile.performance.resolve(locale),
            ),
        ]
        .spacing(16)
        .width(Length::Fill);

        let toggle_label = if state.page.slider.traffic_detail_visible() {
            strings::HIDE_TRAFFIC
        } else {
            strings::SHOW_TRAFFIC
        };

        let mut detail = column![
            row![
                text(strings::ACTIVE_RULES.resolve(locale))
                    .size(15)
                    .color(theme.fg_primary),
                Space::new().width(Length::Fill),
                button(text(toggle_label.resolve(locale)).size(13))
                    .on_press(Message::ToggleTrafficDetail)
                    .padding([8, 16])
                    .style(move |_, status| primary_button(theme, status)),
            ]
            .align_y(Alignment::Center),
        ]
        .spacing(16);

        if state.page.slider.traffic_detail_visible() {
            detail = detail.push(
                row![
                    traffic_panel(
                        theme.success,
                        strings::ALLOWED_TRAFFIC.resolve(locale),
                        profile.allowed_traffic.resolve(locale),
                    ),
                    traffic_panel(
                        theme.danger,
                        strings::BLOCKED_TRAFFIC.resolve(locale),
                        profile.blocked_traffic.resolve(locale),
                    ),
                ]
                .spacing(16)
                .width(Length::Fill),
            );
        }

        page = page.push(
            container(
                column![
                    text(profile.name.resolve(locale))
                        .size(20)
                        .color(theme.fg_primary),
                    text(profile.description.resolve(locale))
                        .size(14)
                        .color(theme.fg_secondary),
                    stats,
                ]
                .spacing(14),
            )
            .padding(24)
            .width(Length::Fill)
            .style(move |_| card_container(theme)),
        );
        page = page.push(
            container(detail)
                .padding(24)
                .width(Length::Fill)
                .style(move |_| card_container(theme)),
        );
    }

    page.into()
}

fn stat_panel<'a>(
    tint: iced::Color,
    header: &'a str,
    label: &'a str,
    value: &'a str,
) -> Element<'a, Message> {
    container(
        column![
            text(header).size(13).color(tint),
            row![
                text(label).size(12),
                Space::new().width(Length::Fill),
                text(value).size(14).color(tint),
            ]
            .align_y(Alignment::Center),
        ]
        .spacing(8),
    )
    .padding(14)
    .width(Length::Fill)
    .style(move |_| tinted_panel(tint))
    .into()
}

fn traffic_panel<'a>(
    tint: iced::Color,
    label: &'a str,
    entries: &'a [&'a str],
) -> Element<'a, Message> {
    container(
        column![
            text(label).size(13).color(tint),
            column(entries.iter().map(|entry| {
                row![text("●").size(9).color(tint), text(*entry).size(13)]
                    .spacing(8)
                    .align_y(Alignment::Center)
                    .into()
            }))
            .spacing(6),
        ]
        .spacing(10),
    )
    .padding(14)
    .width(Length::Fill)
    .style(move |_| tinted_panel(tint))
    .into()
}
