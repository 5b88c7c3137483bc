// SPDX-License-Identifier: MPL-2.0
//! Root view composition.

use super::{App, Message};
use crate::ui::home;
use iced::widget::container;
use iced::{Element, Length};

impl App {
    pub(super) fn view(&self) -> Element<'_, Message> {
        let home = self
            .home
            .view(home::ViewEnv {
                i18n: &self.i18n,
                theme: &self.theme,
                artwork: &self.artwork,
                route: &self.route,
                window: self.window_size,
                now: self.now,
            })
            .map(Message::Home);

        container(home)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(crate::ui::styles::surface(self.theme.colors.surface_primary))
            .into()
    }
}
