use std::sync::Arc;

use druid::{
    widget::{prelude::*, Controller},
    Data, ExtEventSink, Selector, SingleUse, Target,
};
use seasons_core::{document::AnimationDocument, loader::AssetLoader, season::Season};
use threadpool::ThreadPool;

use crate::{
    data::{AppState, Background, BackgroundRequest, Promise},
    error::Error,
};

type LoadResult = (BackgroundRequest, Result<Arc<AnimationDocument>, Error>);

const LOAD_RESULT: Selector<SingleUse<LoadResult>> = Selector::new("app.background.load-result");

/// Runs a retrieval for every new deferred request on the app background and
/// settles it when the retrieval finishes.
pub struct BackgroundLoader {
    loader: Arc<AssetLoader>,
    pool: ThreadPool,
}

impl BackgroundLoader {
    pub fn new(loader: Arc<AssetLoader>) -> Self {
        const MAX_LOADING_THREADS: usize = 4;

        Self {
            loader,
            pool: ThreadPool::with_name("asset_loading".into(), MAX_LOADING_THREADS),
        }
    }

    fn spawn_load(&self, self_id: WidgetId, sink: ExtEventSink, request: BackgroundRequest) {
        if self.pool.active_count() > 0 {
            log::debug!("{} retrieval(s) still pending", self.pool.active_count());
        }
        let loader = self.loader.clone();
        self.pool.execute(move || {
            let result = fetch_background(&loader, request.season);
            if let Err(err) = sink.submit_command(
                LOAD_RESULT,
                SingleUse::new((request, result)),
                Target::Widget(self_id),
            ) {
                log::warn!("dropping {} animation: {:?}", request.season, err);
            }
        });
    }
}

pub(crate) fn fetch_background(
    loader: &AssetLoader,
    season: Season,
) -> Result<Arc<AnimationDocument>, Error> {
    loader
        .load(season)
        .map(Arc::new)
        .map_err(|err| Error::asset_unavailable(season, err))
}

/// Request that needs a retrieval after the background changed from `old` to
/// `new`.
fn pending_request(old: Option<&Background>, new: &Background) -> Option<BackgroundRequest> {
    match new {
        Promise::Deferred(request) if !old.is_some_and(|old| old.same(new)) => Some(*request),
        _ => None,
    }
}

impl<W: Widget<AppState>> Controller<AppState, W> for BackgroundLoader {
    fn event(
        &mut self,
        child: &mut W,
        ctx: &mut EventCtx,
        event: &Event,
        data: &mut AppState,
        env: &Env,
    ) {
        match event {
            Event::Command(cmd) if cmd.is(LOAD_RESULT) => {
                if let Some((request, result)) = cmd.get_unchecked(LOAD_RESULT).take() {
                    data.apply_background(request, result);
                }
                ctx.set_handled();
            }
            _ => {
                child.event(ctx, event, data, env);
            }
        }
    }

    fn lifecycle(
        &mut self,
        child: &mut W,
        ctx: &mut LifeCycleCtx,
        event: &LifeCycle,
        data: &AppState,
        env: &Env,
    ) {
        if let LifeCycle::WidgetAdded = event {
            if let Some(request) = pending_request(None, &data.background) {
                self.spawn_load(ctx.widget_id(), ctx.get_external_handle(), request);
            }
        }
        child.lifecycle(ctx, event, data, env)
    }

    fn update(
        &mut self,
        child: &mut W,
        ctx: &mut UpdateCtx,
        old_data: &AppState,
        data: &AppState,
        env: &Env,
    ) {
        if let Some(request) = pending_request(Some(&old_data.background), &data.background) {
            self.spawn_load(ctx.widget_id(), ctx.get_external_handle(), request);
        }
        child.update(ctx, old_data, data, env)
    }
}
