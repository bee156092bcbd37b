mod config;
mod promise;

pub use crate::data::{
    config::{Config, DEFAULT_ASSET_BASE},
    promise::{Promise, PromiseState},
};

use std::sync::Arc;

use druid::{Data, Lens};
use seasons_core::{document::AnimationDocument, season::Season};

use crate::error::Error;

pub type Background = Promise<Arc<AnimationDocument>, BackgroundRequest, Error>;

/// Identifies one retrieval of a season's animation.  The serial makes a
/// repeated selection of the same season supersede the earlier request.
#[derive(Clone, Copy, Debug, Data, Eq, PartialEq)]
pub struct BackgroundRequest {
    #[data(eq)]
    pub season: Season,
    pub serial: u64,
}

#[derive(Clone, Debug, Data, Lens)]
pub struct AppState {
    #[data(eq)]
    pub season: Season,
    pub background: Background,
    pub last_serial: u64,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let mut state = Self {
            season: Season::default(),
            background: Promise::Empty,
            last_serial: 0,
            config,
        };
        state.request_background();
        state
    }

    pub fn is_selected(&self, season: Season) -> bool {
        self.season == season
    }

    pub fn select_season(&mut self, season: Season) {
        log::info!("selected {season}");
        self.season = season;
        self.request_background();
    }

    fn request_background(&mut self) {
        self.last_serial += 1;
        self.background.defer(BackgroundRequest {
            season: self.season,
            serial: self.last_serial,
        });
    }

    /// Applies a finished retrieval.  Results of superseded requests are
    /// dropped.
    pub fn apply_background(
        &mut self,
        request: BackgroundRequest,
        result: Result<Arc<AnimationDocument>, Error>,
    ) -> bool {
        let applied = self.background.update((request, result));
        if !applied {
            log::debug!(
                "discarding stale {} animation (request #{})",
                request.season,
                request.serial
            );
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use seasons_core::{
        error::Error as CoreError, loader::AssetLoader, playback::PlaybackOptions,
        source::AssetSource,
    };

    use super::*;
    use crate::{controller::fetch_background, ui::background::animation_widget};

    const MINIMAL_DOCUMENT: &[u8] =
        br##"{"v":"5.7.4","fr":30,"ip":0,"op":60,"w":100,"h":100,"layers":[]}"##;

    /// Serves canned responses keyed by asset path and records every fetch.
    #[derive(Default)]
    struct Canned {
        responses: Vec<(&'static str, Result<&'static [u8], u16>)>,
        fetched: Mutex<Vec<String>>,
    }

    impl Canned {
        fn with(mut self, season: Season, response: Result<&'static [u8], u16>) -> Self {
            self.responses.push((season.asset_path(), response));
            self
        }
    }

    impl AssetSource for Canned {
        fn fetch(&self, path: &str) -> Result<Vec<u8>, CoreError> {
            self.fetched.lock().unwrap().push(path.to_owned());
            let response = self
                .responses
                .iter()
                .find(|(p, _)| *p == path)
                .map(|(_, response)| *response)
                .ok_or(CoreError::Status(404))?;
            response.map(<[u8]>::to_vec).map_err(CoreError::Status)
        }
    }

    fn pending(state: &AppState) -> BackgroundRequest {
        *state.background.deferred().expect("background is loading")
    }

    fn active_seasons(state: &AppState) -> Vec<Season> {
        Season::iter().filter(|s| state.is_selected(*s)).collect()
    }

    #[test]
    fn starts_loading_spring() {
        let state = AppState::new(Config::default());
        assert_eq!(state.season, Season::Spring);
        assert_eq!(pending(&state).season, Season::Spring);
        assert_eq!(active_seasons(&state), [Season::Spring]);
    }

    #[test]
    fn selecting_marks_exactly_one_season_active() {
        let mut state = AppState::new(Config::default());
        for season in Season::iter() {
            state.select_season(season);
            assert_eq!(active_seasons(&state), [season]);
            assert_eq!(pending(&state).season, season);
        }
    }

    #[test]
    fn reselecting_defers_a_fresh_request() {
        let mut state = AppState::new(Config::default());
        for season in Season::iter() {
            state.select_season(season);
            let first = pending(&state);
            state.select_season(season);
            let second = pending(&state);
            assert_eq!(second.season, season);
            assert_ne!(first, second);
            let late = Err(Error::asset_unavailable(season, "late"));
            assert!(!state.apply_background(first, late));
            assert_eq!(state.background.state(), PromiseState::Deferred);
        }
    }

    #[test]
    fn stale_result_does_not_overwrite_newer_selection() {
        let loader = AssetLoader::new(
            Canned::default()
                .with(Season::Summer, Ok(MINIMAL_DOCUMENT))
                .with(Season::Autumn, Err(500)),
        );
        let mut state = AppState::new(Config::default());

        state.select_season(Season::Summer);
        let summer = pending(&state);
        state.select_season(Season::Autumn);
        let autumn = pending(&state);

        // Autumn fails first, then the slow summer fetch succeeds.
        assert!(state.apply_background(autumn, fetch_background(&loader, autumn.season)));
        assert!(!state.apply_background(summer, fetch_background(&loader, summer.season)));

        assert_eq!(state.season, Season::Autumn);
        assert!(matches!(
            state.background,
            Promise::Rejected(Error::AssetUnavailable {
                season: Season::Autumn,
                ..
            })
        ));
    }

    #[test]
    fn malformed_document_shows_error_and_keeps_selector_usable() {
        let loader = AssetLoader::new(Canned::default().with(Season::Winter, Ok(&b"{oops"[..])));
        let mut state = AppState::new(Config::default());
        state.select_season(Season::Winter);
        let request = pending(&state);
        state.apply_background(request, fetch_background(&loader, request.season));
        assert_eq!(state.background.state(), PromiseState::Rejected);

        state.select_season(Season::Spring);
        assert_eq!(active_seasons(&state), [Season::Spring]);
        assert_eq!(pending(&state).season, Season::Spring);
    }

    #[test]
    fn spring_then_missing_summer() {
        let source = Canned::default().with(Season::Spring, Ok(MINIMAL_DOCUMENT));
        let loader = AssetLoader::new(source);
        let mut state = AppState::new(Config::default());

        // Fresh window: placeholder until spring arrives.
        let spring = pending(&state);
        assert_eq!(spring.season, Season::Spring);
        assert!(state.apply_background(spring, fetch_background(&loader, Season::Spring)));
        match &state.background {
            Promise::Resolved(doc) => {
                assert_eq!(doc.timing().out_point, 60.0);
                let mut player = animation_widget();
                assert_eq!(player.options(), PlaybackOptions { looping: true, autoplay: true });
                assert!(player.start(doc), "spring animation should start playing");
            }
            other => panic!("expected spring animation, got {:?}", other.state()),
        }

        // Summer is not served, so the request ends in a 404.
        state.select_season(Season::Summer);
        let summer = pending(&state);
        assert!(state.apply_background(summer, fetch_background(&loader, Season::Summer)));
        match &state.background {
            Promise::Rejected(err) => assert!(err.to_string().contains("404")),
            other => panic!("expected error, got {:?}", other.state()),
        }
        assert_eq!(active_seasons(&state), [Season::Summer]);
    }
}
