use std::sync::Arc;

use druid::{
    widget::{Label, SizedBox},
    Widget, WidgetExt,
};
use seasons_core::{loader::AssetLoader, playback::PlaybackOptions};

use crate::{
    controller::BackgroundLoader,
    data::{AppState, BackgroundRequest},
    error::Error,
    widget::{Async, LottiePlayer, SolidLayers},
};

use super::theme;

pub fn background_widget(loader: Arc<AssetLoader>) -> impl Widget<AppState> {
    Async::new(placeholder_widget, animation_widget, error_widget)
        .lens(AppState::background)
        .controller(BackgroundLoader::new(loader))
}

fn placeholder_widget() -> impl Widget<BackgroundRequest> {
    SizedBox::empty().expand()
}

pub(crate) fn animation_widget() -> LottiePlayer {
    LottiePlayer::new(PlaybackOptions::BACKGROUND, SolidLayers)
}

fn error_widget() -> impl Widget<Error> {
    Label::dynamic(|_: &Error, env| env.get(theme::LOAD_ERROR_NOTICE).to_string())
        .with_text_color(theme::PLACEHOLDER_COLOR)
        .center()
        .expand()
}
