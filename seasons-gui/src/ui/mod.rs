use std::sync::Arc;

use druid::{Widget, WindowDesc};
use seasons_core::loader::AssetLoader;

use crate::{data::AppState, widget::Overlay};

pub mod background;
pub mod selector;
pub mod theme;

pub fn main_window(loader: Arc<AssetLoader>) -> WindowDesc<AppState> {
    WindowDesc::new(root_widget(loader))
        .title("Seasons")
        .with_min_size((theme::grid(50.0), theme::grid(25.0)))
        .window_size((theme::grid(100.0), theme::grid(60.0)))
}

fn root_widget(loader: Arc<AssetLoader>) -> impl Widget<AppState> {
    Overlay::top(
        background::background_widget(loader),
        selector::selector_widget(),
    )
}
