//! Mounted controllers keyed by mount point.
//!
//! Initialization is guarded: a mount point gets at most one controller, and
//! only when its section is actually present.

use std::collections::HashMap;

use tracing::info;

use crate::config::Settings;
use crate::controller::SlideController;
use crate::target::{Bindings, Toggle, Track};

pub struct Registry<S, D, T> {
    mounts: HashMap<String, SlideController<S, D, T>>,
}

impl<S, D, T> Default for Registry<S, D, T> {
    fn default() -> Self {
        Self {
            mounts: HashMap::new(),
        }
    }
}

impl<S: Toggle, D: Toggle, T: Track> Registry<S, D, T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mounts a controller at `mount` unless the section is missing or a
    /// controller already lives there. `bindings` is only called when a
    /// controller will actually be built. Returns `true` when a controller
    /// was created.
    pub fn initialize<F>(
        &mut self,
        mount: &str,
        section_present: bool,
        bindings: F,
        settings: Settings,
    ) -> bool
    where
        F: FnOnce() -> Bindings<S, D, T>,
    {
        if !section_present {
            info!(mount, "No testimonials section found");
            return false;
        }
        if self.mounts.contains_key(mount) {
            info!(mount, "Slider already initialized");
            return false;
        }

        info!(mount, "Testimonials section found, initializing slider");
        match SlideController::mount(bindings(), settings) {
            Some(controller) => {
                self.mounts.insert(mount.to_string(), controller);
                info!(mount, "Testimonials slider initialized");
                true
            }
            None => false,
        }
    }
}

impl<S, D, T> Registry<S, D, T> {
    pub fn get(&self, mount: &str) -> Option<&SlideController<S, D, T>> {
        self.mounts.get(mount)
    }

    pub fn get_mut(&mut self, mount: &str) -> Option<&mut SlideController<S, D, T>> {
        self.mounts.get_mut(mount)
    }

    pub fn contains(&self, mount: &str) -> bool {
        self.mounts.contains_key(mount)
    }

    pub fn len(&self) -> usize {
        self.mounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mounts.is_empty()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut SlideController<S, D, T>)> {
        self.mounts.iter_mut().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::fakes::{markers, Marker, Strip};

    type Carousels = Registry<Marker, Marker, Strip>;

    fn bindings(count: usize) -> Bindings<Marker, Marker, Strip> {
        Bindings::new(markers(count), markers(count)).with_track(Strip::default())
    }

    #[test]
    fn initializes_once_per_mount() {
        let mut registry = Carousels::new();
        assert!(registry.initialize("home", true, || bindings(4), Settings::default()));
        assert!(!registry.initialize("home", true, || bindings(2), Settings::default()));

        let carousel = registry.get("home").unwrap();
        assert_eq!(carousel.slide_count(), 4);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn skips_missing_section_without_building() {
        let mut registry = Carousels::new();
        let mut built = false;
        let created = registry.initialize(
            "home",
            false,
            || {
                built = true;
                bindings(4)
            },
            Settings::default(),
        );
        assert!(!created);
        assert!(!built);
        assert!(registry.is_empty());
    }

    #[test]
    fn empty_slides_leave_mount_free() {
        let mut registry = Carousels::new();
        assert!(!registry.initialize("home", true, || bindings(0), Settings::default()));
        assert!(!registry.contains("home"));

        // A later attempt with slides can still succeed
        assert!(registry.initialize("home", true, || bindings(3), Settings::default()));
    }

    #[test]
    fn independent_mounts() {
        let mut registry = Carousels::new();
        registry.initialize("home", true, || bindings(4), Settings::default());
        registry.initialize("about", true, || bindings(2), Settings::default());

        registry.get_mut("home").unwrap().go_to(3);

        assert_eq!(registry.get("home").unwrap().current_index(), 3);
        assert_eq!(registry.get("about").unwrap().current_index(), 0);

        for (_, carousel) in registry.iter_mut() {
            carousel.update(std::time::Duration::from_millis(800));
        }
        assert!(!registry.get("home").unwrap().is_transitioning());
    }
}
