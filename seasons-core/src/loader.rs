use crate::{
    document::AnimationDocument,
    error::Error,
    season::Season,
    source::{AssetSource, DirSource, HttpSource},
};
use url::Url;

/// Retrieves and decodes the animation document of a season.
pub struct AssetLoader {
    source: Box<dyn AssetSource>,
}

impl AssetLoader {
    pub fn new(source: impl AssetSource + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    /// Builds a loader for `base`, which is either an `http(s)://` URL or a
    /// directory path.
    pub fn from_base(base: &str, proxy_url: Option<&str>) -> Result<Self, Error> {
        if base.starts_with("http://") || base.starts_with("https://") {
            let url = Url::parse(base)?;
            log::info!("loading animations from {url}");
            Ok(Self::new(HttpSource::new(url, proxy_url)))
        } else {
            log::info!("loading animations from directory {base:?}");
            Ok(Self::new(DirSource::new(base)))
        }
    }

    /// Blocks until the document is retrieved and decoded.  Failures are
    /// logged here, so callers only need to surface them.
    pub fn load(&self, season: Season) -> Result<AnimationDocument, Error> {
        let path = season.asset_path();
        let result = self
            .source
            .fetch(path)
            .and_then(|body| AnimationDocument::from_slice(&body));
        match &result {
            Ok(_) => log::debug!("loaded {season} animation from {path}"),
            Err(err) => log::error!("failed to load {season} animation from {path}: {err}"),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::RefCell,
        sync::{Arc, Mutex},
    };

    use log::{Level, LevelFilter, Log, Metadata, Record};

    use super::*;

    #[derive(Clone, Default)]
    struct Recorder {
        requests: Arc<Mutex<Vec<String>>>,
    }

    struct Scripted {
        body: Result<&'static [u8], u16>,
        recorder: Recorder,
    }

    impl AssetSource for Scripted {
        fn fetch(&self, path: &str) -> Result<Vec<u8>, Error> {
            self.recorder.requests.lock().unwrap().push(path.to_owned());
            self.body.map(<[u8]>::to_vec).map_err(Error::Status)
        }
    }

    fn loader(body: Result<&'static [u8], u16>) -> (AssetLoader, Recorder) {
        let recorder = Recorder::default();
        let source = Scripted {
            body,
            recorder: recorder.clone(),
        };
        (AssetLoader::new(source), recorder)
    }

    #[test]
    fn fetches_the_asset_path_once_per_load() {
        for season in Season::iter() {
            let (loader, recorder) = loader(Ok(&b"{\"fr\": 60}"[..]));
            let doc = loader.load(season).unwrap();
            assert_eq!(doc.timing().frame_rate, 60.0);
            assert_eq!(*recorder.requests.lock().unwrap(), [season.asset_path()]);
        }
    }

    #[test]
    fn bad_status_is_an_error() {
        let (loader, _) = loader(Err(404));
        assert!(matches!(loader.load(Season::Summer), Err(Error::Status(404))));
    }

    #[test]
    fn malformed_body_is_an_error() {
        let (loader, _) = loader(Ok(&b"<html>not json</html>"[..]));
        assert!(matches!(loader.load(Season::Autumn), Err(Error::Decode(_))));
    }

    thread_local! {
        static RECORDS: RefCell<Vec<(Level, String)>> = RefCell::new(Vec::new());
    }

    /// Keeps records per thread, so parallel tests only see their own.
    struct Capture;

    impl Log for Capture {
        fn enabled(&self, _: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            let line = record.args().to_string();
            RECORDS.with(|records| records.borrow_mut().push((record.level(), line)));
        }

        fn flush(&self) {}
    }

    static CAPTURE: Capture = Capture;

    fn errors_logged_by(f: impl FnOnce()) -> Vec<String> {
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(LevelFilter::Trace);
        RECORDS.with(|records| records.borrow_mut().clear());
        f();
        RECORDS.with(|records| records.take())
            .into_iter()
            .filter(|(level, _)| *level == Level::Error)
            .map(|(_, line)| line)
            .collect()
    }

    #[test]
    fn failed_load_logs_one_error_naming_season_and_cause() {
        let errors = errors_logged_by(|| {
            let (loader, _) = loader(Err(404));
            assert!(loader.load(Season::Summer).is_err());
        });
        assert_eq!(errors.len(), 1, "{errors:?}");
        assert!(errors[0].contains("summer"), "{}", errors[0]);
        assert!(errors[0].contains("/lottie/summer.json"), "{}", errors[0]);
        assert!(errors[0].contains("404"), "{}", errors[0]);

        let errors = errors_logged_by(|| {
            let (loader, _) = loader(Ok(&b"<html>not json</html>"[..]));
            assert!(loader.load(Season::Autumn).is_err());
        });
        assert_eq!(errors.len(), 1, "{errors:?}");
        assert!(errors[0].contains("autumn"), "{}", errors[0]);
        assert!(errors[0].contains("Malformed animation document"), "{}", errors[0]);
    }

    #[test]
    fn successful_load_logs_no_error() {
        let errors = errors_logged_by(|| {
            let (loader, _) = loader(Ok(&b"{}"[..]));
            assert!(loader.load(Season::Winter).is_ok());
        });
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn picks_source_from_base() {
        assert!(AssetLoader::from_base("https://example.com/", None).is_ok());
        assert!(AssetLoader::from_base("public", None).is_ok());
        assert!(matches!(
            AssetLoader::from_base("http://[::1", None),
            Err(Error::InvalidUrl(_))
        ));
    }
}
