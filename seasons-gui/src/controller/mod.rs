mod background;

pub use background::BackgroundLoader;

#[cfg(test)]
pub(crate) use background::fetch_background;
