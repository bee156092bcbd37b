use druid::{widget::prelude::*, Data, Point, WidgetExt, WidgetPod};

use crate::data::{Promise, PromiseState};

type Maker<X> = Box<dyn Fn() -> Box<dyn Widget<X>>>;

/// Shows one of three widgets depending on the state of a `Promise`.  The
/// shown widget is rebuilt whenever the state changes, so a new resolved
/// value always starts from a fresh widget.
pub struct Async<T, D, E> {
    def_maker: Maker<D>,
    res_maker: Maker<T>,
    err_maker: Maker<E>,
    shown: Shown<T, D, E>,
}

enum Shown<T, D, E> {
    Nothing,
    Deferred(WidgetPod<D, Box<dyn Widget<D>>>),
    Resolved(WidgetPod<T, Box<dyn Widget<T>>>),
    Rejected(WidgetPod<E, Box<dyn Widget<E>>>),
}

impl<T, D, E> Shown<T, D, E> {
    fn state(&self) -> PromiseState {
        match self {
            Self::Nothing => PromiseState::Empty,
            Self::Deferred(_) => PromiseState::Deferred,
            Self::Resolved(_) => PromiseState::Resolved,
            Self::Rejected(_) => PromiseState::Rejected,
        }
    }
}

impl<T: Data, D: Data, E: Data> Async<T, D, E> {
    pub fn new<WD, WT, WE>(
        def_maker: impl Fn() -> WD + 'static,
        res_maker: impl Fn() -> WT + 'static,
        err_maker: impl Fn() -> WE + 'static,
    ) -> Self
    where
        WD: Widget<D> + 'static,
        WT: Widget<T> + 'static,
        WE: Widget<E> + 'static,
    {
        Self {
            def_maker: Box::new(move || def_maker().boxed()),
            res_maker: Box::new(move || res_maker().boxed()),
            err_maker: Box::new(move || err_maker().boxed()),
            shown: Shown::Nothing,
        }
    }

    fn rebuild(&mut self, state: PromiseState) {
        self.shown = match state {
            PromiseState::Empty => Shown::Nothing,
            PromiseState::Deferred => Shown::Deferred(WidgetPod::new((self.def_maker)())),
            PromiseState::Resolved => Shown::Resolved(WidgetPod::new((self.res_maker)())),
            PromiseState::Rejected => Shown::Rejected(WidgetPod::new((self.err_maker)())),
        };
    }
}

impl<T: Data, D: Data, E: Data> Widget<Promise<T, D, E>> for Async<T, D, E> {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut Promise<T, D, E>, env: &Env) {
        match (&mut self.shown, data) {
            (Shown::Deferred(w), Promise::Deferred(d)) => w.event(ctx, event, d, env),
            (Shown::Resolved(w), Promise::Resolved(t)) => w.event(ctx, event, t, env),
            (Shown::Rejected(w), Promise::Rejected(e)) => w.event(ctx, event, e, env),
            _ => {}
        }
    }

    fn lifecycle(
        &mut self,
        ctx: &mut LifeCycleCtx,
        event: &LifeCycle,
        data: &Promise<T, D, E>,
        env: &Env,
    ) {
        // Possible on WidgetAdded, or after an event changed the data.
        if data.state() != self.shown.state() {
            self.rebuild(data.state());
        }
        match (&mut self.shown, data) {
            (Shown::Deferred(w), Promise::Deferred(d)) => w.lifecycle(ctx, event, d, env),
            (Shown::Resolved(w), Promise::Resolved(t)) => w.lifecycle(ctx, event, t, env),
            (Shown::Rejected(w), Promise::Rejected(e)) => w.lifecycle(ctx, event, e, env),
            _ => {}
        }
    }

    fn update(
        &mut self,
        ctx: &mut UpdateCtx,
        old_data: &Promise<T, D, E>,
        data: &Promise<T, D, E>,
        env: &Env,
    ) {
        if old_data.state() != data.state() {
            self.rebuild(data.state());
            ctx.children_changed();
            return;
        }
        match (&mut self.shown, data) {
            (Shown::Deferred(w), Promise::Deferred(d)) => w.update(ctx, d, env),
            (Shown::Resolved(w), Promise::Resolved(t)) => w.update(ctx, t, env),
            (Shown::Rejected(w), Promise::Rejected(e)) => w.update(ctx, e, env),
            _ => {}
        }
    }

    fn layout(
        &mut self,
        ctx: &mut LayoutCtx,
        bc: &BoxConstraints,
        data: &Promise<T, D, E>,
        env: &Env,
    ) -> Size {
        let size = match (&mut self.shown, data) {
            (Shown::Deferred(w), Promise::Deferred(d)) => {
                let size = w.layout(ctx, bc, d, env);
                w.set_origin(ctx, Point::ORIGIN);
                size
            }
            (Shown::Resolved(w), Promise::Resolved(t)) => {
                let size = w.layout(ctx, bc, t, env);
                w.set_origin(ctx, Point::ORIGIN);
                size
            }
            (Shown::Rejected(w), Promise::Rejected(e)) => {
                let size = w.layout(ctx, bc, e, env);
                w.set_origin(ctx, Point::ORIGIN);
                size
            }
            _ => bc.min(),
        };
        bc.constrain(size)
    }

    fn paint(&mut self, ctx: &mut PaintCtx, data: &Promise<T, D, E>, env: &Env) {
        match (&mut self.shown, data) {
            (Shown::Deferred(w), Promise::Deferred(d)) => w.paint(ctx, d, env),
            (Shown::Resolved(w), Promise::Resolved(t)) => w.paint(ctx, t, env),
            (Shown::Rejected(w), Promise::Rejected(e)) => w.paint(ctx, e, env),
            _ => {}
        }
    }
}
