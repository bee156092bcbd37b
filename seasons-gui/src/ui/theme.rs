pub use druid::theme::*;
use druid::{Color, Env, FontDescriptor, FontFamily, FontWeight, Key};
use seasons_core::season::Locale;

use crate::data::AppState;

pub fn grid(m: f64) -> f64 {
    GRID * m
}

pub const GRID: f64 = 8.0;

pub const WHITE: Color = Color::WHITE;
pub const GREY_1: Color = Color::grey8(0x33);
pub const GREY_2: Color = Color::grey8(0x4f);
pub const GREY_5: Color = Color::grey8(0xe0);
pub const GREY_6: Color = Color::grey8(0xf2);

pub const LINK_HOT_COLOR: Key<Color> = Key::new("app.link-hot-color");
pub const LINK_ACTIVE_COLOR: Key<Color> = Key::new("app.link-active-color");
pub const LINK_COLD_COLOR: Key<Color> = Key::new("app.link-cold-color");

pub const UI_FONT_MEDIUM: Key<FontDescriptor> = Key::new("app.ui-font-medium");
pub const LOAD_ERROR_NOTICE: Key<druid::ArcStr> = Key::new("app.load-error-notice");

pub fn setup(env: &mut Env, state: &AppState) {
    env.set(WINDOW_BACKGROUND_COLOR, GREY_6);
    env.set(LABEL_COLOR, GREY_1);
    env.set(PLACEHOLDER_COLOR, GREY_2);

    env.set(BACKGROUND_LIGHT, WHITE);
    env.set(BACKGROUND_DARK, GREY_6);

    env.set(BUTTON_BORDER_RADIUS, 4.0);

    env.set(LINK_HOT_COLOR, Color::rgba(1.0, 1.0, 1.0, 0.85));
    env.set(LINK_ACTIVE_COLOR, GREY_5);
    env.set(LINK_COLD_COLOR, Color::rgba(1.0, 1.0, 1.0, 0.6));

    env.set(
        UI_FONT,
        FontDescriptor::new(FontFamily::SYSTEM_UI).with_size(14.0),
    );
    env.set(
        UI_FONT_MEDIUM,
        FontDescriptor::new(FontFamily::SYSTEM_UI)
            .with_size(16.0)
            .with_weight(FontWeight::MEDIUM),
    );

    env.set(LOAD_ERROR_NOTICE, load_error_notice(state.config.locale));
}

fn load_error_notice(locale: Locale) -> &'static str {
    match locale {
        Locale::Japanese => "アニメーションを読み込めませんでした",
        Locale::English => "Could not load the animation",
    }
}
