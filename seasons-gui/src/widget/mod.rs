mod link;
mod lottie;
mod overlay;
mod promise;

use druid::{Data, Widget};

pub use link::Link;
pub use lottie::{LottiePlayer, SolidLayers};
pub use overlay::Overlay;
pub use promise::Async;

pub trait MyWidgetExt<T: Data>: Widget<T> + Sized + 'static {
    fn link(self) -> Link<T> {
        Link::new(self)
    }
}

impl<T: Data, W: Widget<T> + 'static> MyWidgetExt<T> for W {}
