use druid::{widget::prelude::*, Data, Point, WidgetPod};

/// Lays `overlay` over the top edge of `inner`, horizontally centered.
pub struct Overlay<T, W, O> {
    inner: WidgetPod<T, W>,
    overlay: WidgetPod<T, O>,
}

impl<T, W, O> Overlay<T, W, O>
where
    T: Data,
    W: Widget<T>,
    O: Widget<T>,
{
    pub fn top(inner: W, overlay: O) -> Self {
        Self {
            inner: WidgetPod::new(inner),
            overlay: WidgetPod::new(overlay),
        }
    }
}

impl<T, W, O> Widget<T> for Overlay<T, W, O>
where
    T: Data,
    W: Widget<T>,
    O: Widget<T>,
{
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut T, env: &Env) {
        self.overlay.event(ctx, event, data, env);
        self.inner.event(ctx, event, data, env);
    }

    fn lifecycle(&mut self, ctx: &mut LifeCycleCtx, event: &LifeCycle, data: &T, env: &Env) {
        self.inner.lifecycle(ctx, event, data, env);
        self.overlay.lifecycle(ctx, event, data, env);
    }

    fn update(&mut self, ctx: &mut UpdateCtx, _old_data: &T, data: &T, env: &Env) {
        self.inner.update(ctx, data, env);
        self.overlay.update(ctx, data, env);
    }

    fn layout(&mut self, ctx: &mut LayoutCtx, bc: &BoxConstraints, data: &T, env: &Env) -> Size {
        let inner_size = self.inner.layout(ctx, bc, data, env);
        self.inner.set_origin(ctx, Point::ORIGIN);
        let over_bc = BoxConstraints::new(Size::ZERO, inner_size);
        let over_size = self.overlay.layout(ctx, &over_bc, data, env);
        let x = ((inner_size.width - over_size.width) / 2.0).max(0.0);
        self.overlay.set_origin(ctx, Point::new(x, 0.0));
        inner_size
    }

    fn paint(&mut self, ctx: &mut PaintCtx, data: &T, env: &Env) {
        self.inner.paint(ctx, data, env);
        self.overlay.paint(ctx, data, env);
    }
}
