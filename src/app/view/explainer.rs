//! Firewall basics: cyclic tour through the firewall types

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::app::ui_components::{
    card_container, dot_button, secondary_button, step_pill, tinted_panel,
};
use crate::app::{Message, State};
use crate::core::content::ui::explainer as strings;

pub fn view(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let locale = state.page.locale;

    // Only an empty catalog could make this fail; render nothing then.
    let Some(current) = state.current_firewall_type() else {
        return Space::new().into();
    };

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

    let dots = row((0..state.page.explainer.len()).map(|index| {
        let active = index == state.page.explainer.index();
        button(Space::new())
            .width(Length::Fixed(12.0))
            .height(Length::Fixed(12.0))
            .on_press(Message::TypeSelected(index))
            .style(move |_, status| dot_button(theme, status, active))
            .into()
    }))
    .spacing(8)
    .align_y(Alignment::Center);

    let nav = row![
        button(text(strings::PREVIOUS.resolve(locale)).size(13))
            .on_press(Message::PreviousType)
            .padding([8, 16])
            .style(move |_, status| secondary_button(theme, status)),
        dots,
        button(text(strings::NEXT.resolve(locale)).size(13))
            .on_press(Message::NextType)
            .padding([8, 16])
            .style(move |_, status| secondary_button(theme, status)),
    ]
    .spacing(24)
    .align_y(Alignment::Center);

    let pros = column![
        text(format!("✓ {}", strings::ADVANTAGES.resolve(locale)))
            .size(15)
            .color(theme.success),
        column(
            current
                .pros
                .resolve(locale)
                .iter()
                .map(|item| bullet_line(theme.success, "✓", item))
        )
        .spacing(6),
    ]
    .spacing(10)
    .width(Length::Fill);

    let cons = column![
        text(format!("✗ {}", strings::DISADVANTAGES.resolve(locale)))
            .size(15)
            .color(theme.danger),
        column(
            current
                .cons
                .resolve(locale)
                .iter()
                .map(|item| bullet_line(theme.danger, "✗", item))
        )
        .spacing(6),
    ]
    .spacing(10)
    .width(Length::Fill);

    let mut walkthrough = column![
        text(strings::HOW_IT_WORKS.resolve(locale))
            .size(15)
            .color(theme.fg_primary)
    ]
    .spacing(10);
    for (number, step) in strings::STEPS.iter().enumerate() {
        if number > 0 {
            walkthrough = walkthrough.push(text("↓").size(14).color(theme.accent));
        }
        walkthrough = walkthrough.push(
            row![
                container(
                    text(format!("{}", number + 1))
                        .size(12)
                        .color(theme.fg_on_accent)
                )
                .padding([2, 9])
                .style(move |_| step_pill(theme)),
                text(step.resolve(locale)).size(13).color(theme.fg_secondary),
            ]
            .spacing(10)
            .align_y(Alignment::Center),
        );
    }

    let card = container(
        column![
            text(current.glyph).size(40),
            text(current.name.resolve(locale))
                .size(22)
                .color(theme.fg_primary),
            text(current.description.resolve(locale))
                .size(14)
                .color(theme.fg_secondary),
            row![
                pros,
                cons,
                container(walkthrough)
                    .padding(16)
                    .width(Length::Fill)
                    .style(move |_| tinted_panel(theme.info)),
            ]
            .spacing(24),
            text(format!(
                "{} {} of {}",
                strings::STEP.resolve(locale),
                state.page.explainer.index() + 1,
                state.page.explainer.len()
            ))
            .size(12)
            .color(theme.fg_muted),
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
    .padding(28)
    .width(Length::Fill)
    .style(move |_| card_container(theme));

    column![header, nav, card]
        .spacing(24)
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .into()
}

fn bullet_line<'a>(
    color: iced::Color,
    marker: &'a str,
    item: &'a str,
) -> Element<'a, Message> {
    row![
        text(marker).size(13).color(color),
        text(item).size(13),
    ]
    .spacing(8)
    .into()
}
