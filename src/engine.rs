use std::time::Duration;

use raylib::prelude::*;
use testimonials::constants::{MOUNT_DELAY, MOUNT_POINT};
use testimonials::{Bindings, Input, Registry, Settings, SlideController};

use crate::indicator::Dot;
use crate::layout::{Hit, Layout};
use crate::slide::TestimonialSlide;
use crate::track::SlideTrack;

type Carousel = SlideController<TestimonialSlide, Dot, SlideTrack>;

/// Binds a carousel to a raylib window: turns mouse, keyboard and resize
/// events into controller inputs and draws the result.
pub struct CarouselEngine {
    registry: Registry<TestimonialSlide, Dot, SlideTrack>,
    pending: Option<Bindings<TestimonialSlide, Dot, SlideTrack>>,
    settings: Settings,
    section_present: bool,
    layout: Layout,
    mount_timer: Duration,
    hovering: bool,
}

impl CarouselEngine {
    pub fn new(
        slides: Vec<TestimonialSlide>,
        section_present: bool,
        settings: Settings,
        screen_width: i32,
        screen_height: i32,
    ) -> Self {
        let dots = vec![Dot::default(); slides.len()];
        let layout = Layout::new(screen_width as f32, screen_height as f32, dots.len());
        let bindings = Bindings::new(slides, dots)
            .with_track(SlideTrack::new(settings.settle_delay))
            .with_prev_trigger()
            .with_next_trigger();

        Self {
            registry: Registry::new(),
            pending: Some(bindings),
            settings,
            section_present,
            layout,
            mount_timer: Duration::ZERO,
            hovering: false,
        }
    }

    fn carousel(&self) -> Option<&Carousel> {
        self.registry.get(MOUNT_POINT)
    }

    fn carousel_mut(&mut self) -> Option<&mut Carousel> {
        self.registry.get_mut(MOUNT_POINT)
    }

    /// Mounts the carousel once the window has been up for the mount delay.
    fn try_mount(&mut self, dt: Duration) {
        if self.pending.is_none() {
            return;
        }
        self.mount_timer += dt;
        if self.mount_timer < MOUNT_DELAY {
            return;
        }

        if let Some(bindings) = self.pending.take() {
            self.registry.initialize(
                MOUNT_POINT,
                self.section_present,
                || bindings,
                self.settings,
            );
        }
    }

    pub fn handle_input(&mut self, rl: &RaylibHandle) {
        let mut inputs = Vec::new();

        if rl.is_window_resized() {
            self.layout = Layout::new(
                rl.get_screen_width() as f32,
                rl.get_screen_height() as f32,
                self.layout.dots.len(),
            );
            inputs.push(Input::Resize);
        }

        let mouse = rl.get_mouse_position();
        let over = self.layout.is_hovered(mouse, rl.is_cursor_on_screen());
        if over != self.hovering {
            self.hovering = over;
            inputs.push(if over { Input::PointerEnter } else { Input::PointerLeave });
        }

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            match self.layout.hit(mouse) {
                Some(Hit::Prev) => inputs.push(Input::PrevPressed),
                Some(Hit::Next) => inputs.push(Input::NextPressed),
                Some(Hit::Dot(index)) => inputs.push(Input::DotPressed(index)),
                None => {}
            }
        }

        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            inputs.push(Input::ArrowLeft);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            inputs.push(Input::ArrowRight);
        }

        if let Some(carousel) = self.carousel_mut() {
            for input in inputs {
                carousel.handle(input);
            }
        }
    }

    pub fn update(&mut self, dt: f32) {
        let dt = Duration::from_secs_f32(dt.max(0.0));
        self.try_mount(dt);

        if let Some(carousel) = self.carousel_mut() {
            carousel.update(dt);
            if let Some(track) = carousel.track_mut() {
                track.update(dt.as_secs_f32());
            }
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        d.clear_background(Color::new(244, 244, 248, 255));

        let Some(carousel) = self.carousel() else {
            let notice = if self.pending.is_some() {
                "Loading testimonials..."
            } else {
                "No testimonials to show."
            };
            d.draw_text(notice, 40, 40, 24, Color::GRAY);
            return;
        };

        let count = carousel.slide_count();
        let offset = carousel
            .track()
            .map(|t| t.offset())
            .unwrap_or(carousel.offset_percent());

        for (index, slide) in carousel.slides().iter().enumerate() {
            let slot = self.layout.slot(index, offset, count);
            if self.layout.is_visible(slot) {
                slide.draw(d, Layout::card(slot));
            }
        }

        for (dot, center) in carousel.indicators().iter().zip(&self.layout.dots) {
            dot.draw(d, *center, self.layout.dot_radius);
        }

        draw_button(d, self.layout.prev_button, "<");
        draw_button(d, self.layout.next_button, ">");

        let status = format!("{} / {}", carousel.current_index() + 1, count);
        d.draw_text(&status, 20, 20, 20, Color::GRAY);
        if !carousel.is_auto_advancing() {
            d.draw_text("Paused", 20, 44, 20, Color::GRAY);
        }
    }
}

fn draw_button(d: &mut RaylibDrawHandle, rect: Rectangle, label: &str) {
    d.draw_rectangle_rounded(rect, 0.5, 12, Color::new(255, 255, 255, 220));
    let size = (rect.height * 0.5) as i32;
    d.draw_text(
        label,
        (rect.x + rect.width * 0.5 - size as f32 * 0.25) as i32,
        (rect.y + rect.height * 0.5 - size as f32 * 0.5) as i32,
        size,
        Color::DARKGRAY,
    );
}
