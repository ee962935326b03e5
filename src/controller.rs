//! The slide-index state machine.
//!
//! A controller owns the slide and indicator surfaces it was mounted with,
//! a single active index and two timers: the repeating auto-advance timer
//! and the one-shot settle timer that releases the transition lock.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::state::CarouselState;
use crate::target::{Bindings, Toggle, Track};
use crate::timer::{Clock, Timer, TimerHandle};

/// Environment signals delivered to a mounted controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    NextPressed,
    PrevPressed,
    DotPressed(usize),
    PointerEnter,
    PointerLeave,
    ArrowLeft,
    ArrowRight,
    Resize,
}

/// Which inputs were wired up at mount time.
#[derive(Debug, Default, Clone, Copy)]
struct Listeners {
    next: bool,
    prev: bool,
    indicators: usize,
    hover: bool,
}

#[derive(Debug, Clone, Copy)]
enum Due {
    Settle(Timer),
    AutoAdvance(Timer),
}

impl Due {
    fn timer(&self) -> &Timer {
        match self {
            Due::Settle(timer) | Due::AutoAdvance(timer) => timer,
        }
    }
}

pub struct SlideController<S, D, T> {
    slides: Vec<S>,
    indicators: Vec<D>,
    track: Option<T>,
    listeners: Listeners,
    settings: Settings,

    active: usize,
    state: CarouselState,
    offset: f32,

    clock: Clock,
    auto_advance: Option<Timer>,
    settle: Option<Timer>,
}

impl<S: Toggle, D: Toggle, T: Track> SlideController<S, D, T> {
    /// Binds a controller to its surfaces, starts auto-advance and renders the
    /// first slide. Returns `None`, leaving every surface untouched, when there
    /// are no slides.
    pub fn mount(bindings: Bindings<S, D, T>, settings: Settings) -> Option<Self> {
        let Bindings {
            slides,
            indicators,
            track,
            next_trigger,
            prev_trigger,
        } = bindings;

        if slides.is_empty() {
            warn!("No testimonial slides found");
            return None;
        }

        let mut controller = Self {
            slides,
            indicators,
            track,
            listeners: Listeners::default(),
            settings,
            active: 0,
            state: CarouselState::Idle,
            offset: 0.0,
            clock: Clock::new(),
            auto_advance: None,
            settle: None,
        };

        info!("Slider initialized with {} slides", controller.slides.len());
        controller.start_auto_advance();
        controller.add_listeners(next_trigger, prev_trigger);
        controller.render();

        Some(controller)
    }

    fn add_listeners(&mut self, next_trigger: bool, prev_trigger: bool) {
        self.listeners.next = next_trigger;
        if !next_trigger {
            warn!("Next button not found");
        }

        self.listeners.prev = prev_trigger;
        if !prev_trigger {
            warn!("Previous button not found");
        }

        // Dots past the last slide have nothing to show
        self.listeners.indicators = self.indicators.len().min(self.slides.len());
        if self.indicators.is_empty() {
            warn!("No dot indicators found");
        } else if self.indicators.len() != self.slides.len() {
            warn!(
                dots = self.indicators.len(),
                slides = self.slides.len(),
                "Dot count does not match slide count"
            );
        }

        self.listeners.hover = self.track.is_some();
        if self.track.is_none() {
            warn!("Track not found, pause on hover disabled");
        }
    }

    // --- Transitions ---

    /// Moves to the next slide, wrapping to the first. Returns whether the
    /// transition happened.
    pub fn advance(&mut self) -> bool {
        let count = self.slides.len();
        if self.is_transitioning() || count <= 1 {
            debug!("Advance dropped");
            return false;
        }
        self.begin_transition((self.active + 1) % count);
        true
    }

    /// Moves to the previous slide, wrapping to the last.
    pub fn retreat(&mut self) -> bool {
        let count = self.slides.len();
        if self.is_transitioning() || count <= 1 {
            debug!("Retreat dropped");
            return false;
        }
        self.begin_transition((self.active + count - 1) % count);
        true
    }

    /// Jumps to `index`. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.slides.len() {
            debug!(index, "Ignoring jump to missing slide");
            return false;
        }
        self.go_to_slide(index)
    }

    fn go_to_slide(&mut self, index: usize) -> bool {
        if self.is_transitioning() || index == self.active {
            return false;
        }
        self.begin_transition(index);
        true
    }

    fn begin_transition(&mut self, index: usize) {
        self.state = CarouselState::Transitioning;
        self.active = index;
        self.render();
        self.settle = Some(self.clock.once(self.settings.settle_delay));
    }

    /// Pushes the active index out to the track, slides and indicators.
    pub fn render(&mut self) {
        let step = self.settings.step_for(self.slides.len());
        self.offset = -(self.active as f32 * step);

        if let Some(track) = self.track.as_mut() {
            track.set_offset(self.offset);
        }
        for (index, dot) in self.indicators.iter_mut().enumerate() {
            dot.set_active(index == self.active);
        }
        for (index, slide) in self.slides.iter_mut().enumerate() {
            slide.set_active(index == self.active);
        }

        debug!("Slide changed to index: {}", self.active);
    }

    // --- Auto-advance ---

    pub fn start_auto_advance(&mut self) {
        // Replacing the timer cancels the previous one
        self.auto_advance = Some(self.clock.repeating(self.settings.auto_advance));
    }

    pub fn stop_auto_advance(&mut self) {
        self.auto_advance = None;
    }

    pub fn reset_auto_advance(&mut self) {
        self.stop_auto_advance();
        self.start_auto_advance();
    }

    // --- Events ---

    /// Delivers one environment signal. Returns `false` when nothing listens
    /// for it.
    pub fn handle(&mut self, input: Input) -> bool {
        match input {
            Input::NextPressed if self.listeners.next => {
                self.advance();
                self.reset_auto_advance();
            }
            Input::PrevPressed if self.listeners.prev => {
                self.retreat();
                self.reset_auto_advance();
            }
            Input::DotPressed(index) if index < self.listeners.indicators => {
                self.go_to(index);
                self.reset_auto_advance();
            }
            Input::PointerEnter if self.listeners.hover => {
                info!("Slider paused on hover");
                self.stop_auto_advance();
            }
            Input::PointerLeave if self.listeners.hover => {
                info!("Slider resumed");
                self.start_auto_advance();
            }
            Input::ArrowLeft => {
                self.retreat();
                self.reset_auto_advance();
            }
            Input::ArrowRight => {
                self.advance();
                self.reset_auto_advance();
            }
            Input::Resize => self.render(),
            _ => return false,
        }
        true
    }

    /// Lets `dt` of time pass, firing every timer that falls due on the way in
    /// deadline order.
    pub fn update(&mut self, dt: Duration) {
        let until = self.clock.now() + dt;

        while let Some(due) = self.next_due(until) {
            self.clock.set(due.timer().due());
            match due {
                Due::Settle(_) => {
                    self.settle = None;
                    self.state = CarouselState::Idle;
                }
                Due::AutoAdvance(_) => {
                    self.advance();
                    // Re-arm after the callback: a settle timer it scheduled for
                    // the same instant fires first
                    if let Some(timer) = self.auto_advance.as_mut() {
                        self.clock.rearm(timer);
                    }
                }
            }
        }

        self.clock.set(until);
    }

    fn next_due(&self, until: Duration) -> Option<Due> {
        let settle = self.settle.filter(|t| t.is_due(until)).map(Due::Settle);
        let auto = self
            .auto_advance
            .filter(|t| t.is_due(until))
            .map(Due::AutoAdvance);

        [settle, auto]
            .into_iter()
            .flatten()
            .min_by_key(|due| due.timer().sort_key())
    }
}

impl<S, D, T> SlideController<S, D, T> {
    pub fn current_index(&self) -> usize {
        self.active
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn is_transitioning(&self) -> bool {
        self.state == CarouselState::Transitioning
    }

    pub fn is_auto_advancing(&self) -> bool {
        self.auto_advance.is_some()
    }

    pub fn auto_advance_handle(&self) -> Option<TimerHandle> {
        self.auto_advance.map(|t| t.handle())
    }

    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Offset last applied to the track, in percent of the track width.
    pub fn offset_percent(&self) -> f32 {
        self.offset
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn slides(&self) -> &[S] {
        &self.slides
    }

    pub fn slides_mut(&mut self) -> &mut [S] {
        &mut self.slides
    }

    pub fn indicators(&self) -> &[D] {
        &self.indicators
    }

    pub fn indicators_mut(&mut self) -> &mut [D] {
        &mut self.indicators
    }

    pub fn track(&self) -> Option<&T> {
        self.track.as_ref()
    }

    pub fn track_mut(&mut self) -> Option<&mut T> {
        self.track.as_mut()
    }
}
