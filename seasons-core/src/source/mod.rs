mod dir;
mod http;

pub use dir::DirSource;
pub use http::HttpSource;

use crate::error::Error;

/// Where animation documents are retrieved from.
pub trait AssetSource: Send + Sync {
    /// Returns the raw body of the asset at `path`, which is absolute with
    /// respect to the source's base (`/lottie/spring.json`).
    fn fetch(&self, path: &str) -> Result<Vec<u8>, Error>;
}
