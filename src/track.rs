use std::time::Duration;

use raylib::prelude::*;
use testimonials::Track;

/// Track surface that eases toward each new offset instead of jumping.
pub struct SlideTrack {
    offset: f32,
    target: f32,
    duration: f32,
    elapsed: f32,
    tween: Option<ease::Tween>,
}

impl SlideTrack {
    pub fn new(transition: Duration) -> Self {
        Self {
            offset: 0.0,
            target: 0.0,
            duration: transition.as_secs_f32(),
            elapsed: 0.0,
            tween: None,
        }
    }

    /// Offset currently on screen, in percent of the strip width.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_moving(&self) -> bool {
        self.tween.is_some()
    }

    pub fn update(&mut self, dt: f32) {
        let Some(tween) = self.tween.as_mut() else {
            return;
        };

        self.offset = tween.apply(dt);
        self.elapsed += dt;
        if self.elapsed >= self.duration {
            self.offset = self.target;
            self.tween = None;
        }
    }
}

impl Track for SlideTrack {
    fn set_offset(&mut self, percent: f32) {
        if percent == self.target {
            return;
        }
        self.target = percent;
        if self.duration <= 0.0 {
            self.offset = percent;
            self.tween = None;
            return;
        }
        self.elapsed = 0.0;
        self.tween = Some(ease::Tween::new(
            ease::cubic_out,
            self.offset,
            percent,
            self.duration,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eases_to_target() {
        let mut track = SlideTrack::new(Duration::from_millis(800));
        track.set_offset(-25.0);
        assert!(track.is_moving());

        track.update(0.4);
        assert!(track.offset() < 0.0 && track.offset() > -25.0);

        track.update(0.5);
        assert_eq!(track.offset(), -25.0);
        assert!(!track.is_moving());
    }

    #[test]
    fn same_offset_does_not_restart() {
        let mut track = SlideTrack::new(Duration::from_millis(800));
        track.set_offset(0.0);
        assert!(!track.is_moving());
    }

    #[test]
    fn zero_duration_snaps() {
        let mut track = SlideTrack::new(Duration::ZERO);
        track.set_offset(-50.0);
        assert_eq!(track.offset(), -50.0);
        assert!(!track.is_moving());
    }
}
