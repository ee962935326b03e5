//! Seams between the controller and whatever draws it.

/// A surface carrying a single "active" marker: a slide card or a dot indicator.
pub trait Toggle {
    fn set_active(&mut self, active: bool);
    fn is_active(&self) -> bool;
}

/// The strip holding every slide side by side. Receives the horizontal offset
/// as a percentage of its own width (0 shows the first slide).
pub trait Track {
    fn set_offset(&mut self, percent: f32);
}

/// Everything a controller is bound to at mount time.
pub struct Bindings<S, D, T> {
    pub slides: Vec<S>,
    pub indicators: Vec<D>,
    pub track: Option<T>,
    pub next_trigger: bool,
    pub prev_trigger: bool,
}

impl<S, D, T> Bindings<S, D, T> {
    pub fn new(slides: Vec<S>, indicators: Vec<D>) -> Self {
        Self {
            slides,
            indicators,
            track: None,
            next_trigger: false,
            prev_trigger: false,
        }
    }

    pub fn with_track(mut self, track: T) -> Self {
        self.track = Some(track);
        self
    }

    pub fn with_next_trigger(mut self) -> Self {
        self.next_trigger = true;
        self
    }

    pub fn with_prev_trigger(mut self) -> Self {
        self.prev_trigger = true;
        self
    }
}

#[cfg(test)]
pub(crate) mod fakes {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::{Toggle, Track};

    /// Slide or dot stand-in that remembers its marker and how often it was touched.
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Marker {
        pub active: bool,
        pub writes: usize,
    }

    impl Toggle for Marker {
        fn set_active(&mut self, active: bool) {
            self.active = active;
            self.writes += 1;
        }

        fn is_active(&self) -> bool {
            self.active
        }
    }

    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Strip {
        pub offset: Option<f32>,
        pub writes: usize,
    }

    impl Track for Strip {
        fn set_offset(&mut self, percent: f32) {
            self.offset = Some(percent);
            self.writes += 1;
        }
    }

    /// Counts calls into a counter the test keeps after the probe is moved away.
    #[derive(Debug, Clone, Default)]
    pub struct Probe(pub Rc<Cell<usize>>);

    impl Toggle for Probe {
        fn set_active(&mut self, _active: bool) {
            self.0.set(self.0.get() + 1);
        }

        fn is_active(&self) -> bool {
            false
        }
    }

    impl Track for Probe {
        fn set_offset(&mut self, _percent: f32) {
            self.0.set(self.0.get() + 1);
        }
    }

    pub fn markers(count: usize) -> Vec<Marker> {
        vec![Marker::default(); count]
    }
}
