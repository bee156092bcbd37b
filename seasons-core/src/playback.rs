use std::time::Duration;

use crate::document::Timing;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PlaybackOptions {
    pub looping: bool,
    pub autoplay: bool,
}

impl PlaybackOptions {
    /// Continuous loop, starting immediately.
    pub const BACKGROUND: Self = Self {
        looping: true,
        autoplay: true,
    };
}

/// Frame clock of a playing animation.
#[derive(Clone, Debug)]
pub struct Playhead {
    timing: Timing,
    looping: bool,
    playing: bool,
    frame: f64,
}

impl Playhead {
    pub fn new(timing: Timing, options: PlaybackOptions) -> Self {
        Self {
            timing,
            looping: options.looping,
            playing: options.autoplay,
            frame: timing.in_point,
        }
    }

    pub fn frame(&self) -> f64 {
        self.frame
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Moves the playhead forward by `elapsed` wall-clock time.  Returns whether
    /// the animation is still playing afterwards.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if !self.playing {
            return false;
        }
        self.frame += elapsed.as_secs_f64() * self.timing.frame_rate;
        if self.frame >= self.timing.out_point {
            let duration = self.timing.duration_frames();
            if self.looping && duration > 0.0 {
                self.frame =
                    self.timing.in_point + (self.frame - self.timing.in_point) % duration;
            } else {
                self.frame = self.timing.out_point;
                self.playing = false;
            }
        }
        self.playing
    }
}
