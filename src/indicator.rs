use raylib::prelude::*;
use testimonials::Toggle;

#[derive(Debug, Default, Clone, Copy)]
pub struct Dot {
    active: bool,
}

impl Dot {
    pub fn draw(&self, d: &mut RaylibDrawHandle, center: Vector2, radius: f32) {
        if self.active {
            d.draw_circle_v(center, radius * 1.25, Color::DARKGRAY);
        } else {
            d.draw_circle_v(center, radius, Color::LIGHTGRAY);
        }
    }
}

impl Toggle for Dot {
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}
