use std::{error, fmt, sync::Arc};

use druid::Data;
use seasons_core::season::Season;

/// The one failure the view knows about.  The underlying cause is kept for
/// diagnostics and is never shown to the user.
#[derive(Clone, Debug, Data)]
pub enum Error {
    AssetUnavailable {
        #[data(eq)]
        season: Season,
        cause: Arc<str>,
    },
}

impl Error {
    pub fn asset_unavailable(season: Season, cause: impl fmt::Display) -> Self {
        Self::AssetUnavailable {
            season,
            cause: cause.to_string().into(),
        }
    }
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::AssetUnavailable { season, cause } => {
                write!(f, "{season} animation unavailable: {cause}")
            }
        }
    }
}
