//! Testimonial carousel core.
//!
//! The controller cycles a fixed set of slides on a timer, reacts to
//! prev/next triggers, dot indicators, arrow keys and hover, and pushes the
//! result to whatever implements [`Toggle`] and [`Track`]. Nothing here
//! draws; the `testimonials` binary binds it to a raylib window.

pub mod config;
pub mod constants;
pub mod controller;
pub mod deck;
pub mod registry;
pub mod state;
pub mod target;
pub mod timer;

pub use config::Settings;
pub use controller::{Input, SlideController};
pub use deck::{Deck, Testimonial};
pub use registry::Registry;
pub use state::CarouselState;
pub use target::{Bindings, Toggle, Track};
pub use timer::TimerHandle;
