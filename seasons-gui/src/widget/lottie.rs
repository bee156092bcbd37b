use std::{sync::Arc, time::Duration};

use druid::{widget::prelude::*, Color, Data, Rect};
use seasons_core::{
    document::AnimationDocument,
    playback::{PlaybackOptions, Playhead},
};

/// Draws one frame of an animation document into a rectangle.
pub trait Renderer {
    fn paint(&self, ctx: &mut PaintCtx, document: &AnimationDocument, frame: f64, rect: Rect);
}

/// Paints the solid-colour layers of a document, stretched from the
/// composition size to the target rectangle.
pub struct SolidLayers;

impl Renderer for SolidLayers {
    fn paint(&self, ctx: &mut PaintCtx, document: &AnimationDocument, frame: f64, rect: Rect) {
        let timing = document.timing();
        let scale = |target: f64, source: f64| if source > 0.0 { target / source } else { 1.0 };
        let scale_x = scale(rect.width(), timing.width);
        let scale_y = scale(rect.height(), timing.height);

        for layer in document.solid_layers() {
            if !layer.is_visible_at(frame) {
                continue;
            }
            let color = match Color::from_hex_str(&layer.color) {
                Ok(color) => color.with_alpha(layer.opacity),
                Err(err) => {
                    log::warn!("skipping layer with color {:?}: {:?}", layer.color, err);
                    continue;
                }
            };
            let width = if layer.width > 0.0 {
                layer.width * scale_x
            } else {
                rect.width()
            };
            let height = if layer.height > 0.0 {
                layer.height * scale_y
            } else {
                rect.height()
            };
            ctx.fill(Rect::from_origin_size(rect.origin(), (width, height)), &color);
        }
    }
}

/// Plays an animation document, filling all the space it is given.
pub struct LottiePlayer {
    options: PlaybackOptions,
    renderer: Box<dyn Renderer>,
    playhead: Option<Playhead>,
}

impl LottiePlayer {
    pub fn new(options: PlaybackOptions, renderer: impl Renderer + 'static) -> Self {
        Self {
            options,
            renderer: Box::new(renderer),
            playhead: None,
        }
    }

    fn reset(&mut self, document: &AnimationDocument) -> bool {
        let playhead = Playhead::new(document.timing(), self.options);
        let playing = playhead.is_playing();
        self.playhead = Some(playhead);
        playing
    }

    #[cfg(test)]
    pub(crate) fn options(&self) -> PlaybackOptions {
        self.options
    }

    /// Does what `WidgetAdded` does, returning whether frames were requested.
    #[cfg(test)]
    pub(crate) fn start(&mut self, document: &AnimationDocument) -> bool {
        self.reset(document)
    }
}

impl Widget<Arc<AnimationDocument>> for LottiePlayer {
    fn event(
        &mut self,
        ctx: &mut EventCtx,
        event: &Event,
        _data: &mut Arc<AnimationDocument>,
        _env: &Env,
    ) {
        if let Event::AnimFrame(interval) = event {
            if let Some(playhead) = self.playhead.as_mut() {
                if playhead.advance(Duration::from_nanos(*interval)) {
                    ctx.request_anim_frame();
                }
                ctx.request_paint();
            }
        }
    }

    fn lifecycle(
        &mut self,
        ctx: &mut LifeCycleCtx,
        event: &LifeCycle,
        data: &Arc<AnimationDocument>,
        _env: &Env,
    ) {
        if let LifeCycle::WidgetAdded = event {
            if self.reset(data) {
                ctx.request_anim_frame();
            }
            ctx.request_paint();
        }
    }

    fn update(
        &mut self,
        ctx: &mut UpdateCtx,
        old_data: &Arc<AnimationDocument>,
        data: &Arc<AnimationDocument>,
        _env: &Env,
    ) {
        if !old_data.same(data) {
            if self.reset(data) {
                ctx.request_anim_frame();
            }
            ctx.request_paint();
        }
    }

    fn layout(
        &mut self,
        _ctx: &mut LayoutCtx,
        bc: &BoxConstraints,
        data: &Arc<AnimationDocument>,
        _env: &Env,
    ) -> Size {
        if bc.is_width_bounded() && bc.is_height_bounded() {
            bc.max()
        } else {
            let timing = data.timing();
            bc.constrain((timing.width, timing.height))
        }
    }

    fn paint(&mut self, ctx: &mut PaintCtx, data: &Arc<AnimationDocument>, _env: &Env) {
        let Some(playhead) = self.playhead.as_ref() else {
            return;
        };
        let rect = ctx.size().to_rect();
        let frame = playhead.frame();
        ctx.with_save(|ctx| {
            ctx.clip(rect);
            self.renderer.paint(ctx, data, frame, rect);
        });
    }
}
