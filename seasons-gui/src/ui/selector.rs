use druid::{
    widget::{Flex, Label},
    Widget, WidgetExt,
};
use seasons_core::season::Season;

use crate::{data::AppState, widget::MyWidgetExt};

use super::theme;

/// Row of season buttons in display order, with the selected one highlighted.
pub fn selector_widget() -> impl Widget<AppState> {
    let mut row = Flex::row();
    for (index, season) in Season::iter().enumerate() {
        if index > 0 {
            row.add_spacer(theme::grid(1.0));
        }
        row.add_child(season_button(season));
    }
    row.padding(theme::grid(2.0))
}

fn season_button(season: Season) -> impl Widget<AppState> {
    Label::dynamic(move |state: &AppState, _| season.label_in(state.config.locale).to_owned())
        .with_font(theme::UI_FONT_MEDIUM)
        .padding((theme::grid(2.0), theme::grid(1.0)))
        .link()
        .active(move |state: &AppState, _| state.is_selected(season))
        .rounded(theme::BUTTON_BORDER_RADIUS)
        .on_click(move |_, state: &mut AppState, _| state.select_season(season))
}
