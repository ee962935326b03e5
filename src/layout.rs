use raylib::prelude::*;

const CARD_INSET: f32 = 0.12;     // Horizontal inset of the card inside its slot (fraction of slot width)
const DOT_SPACING: f32 = 28.0;    // Distance between dot centers (pixels)
const DOT_RADIUS: f32 = 7.0;
const DOT_SLOP: f32 = 5.0;        // Extra click radius around each dot

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Prev,
    Next,
    Dot(usize),
}

/// Window geometry for one carousel. Recomputed whenever the window resizes.
pub struct Layout {
    pub width: f32,
    pub track: Rectangle,
    pub prev_button: Rectangle,
    pub next_button: Rectangle,
    pub dots: Vec<Vector2>,
    pub dot_radius: f32,
}

impl Layout {
    pub fn new(width: f32, height: f32, dot_count: usize) -> Self {
        // The track spans the whole window; slides sit side by side on a strip
        // N windows wide and only the one in view lands on screen.
        let track = Rectangle::new(0.0, height * 0.1, width, height * 0.62);

        let button = (width * 0.06).clamp(32.0, 72.0);
        let button_y = track.y + (track.height - button) * 0.5;
        let edge = width * 0.025;
        let prev_button = Rectangle::new(edge, button_y, button, button);
        let next_button = Rectangle::new(width - edge - button, button_y, button, button);

        let dots_y = track.y + track.height + height * 0.08;
        let span = DOT_SPACING * dot_count.saturating_sub(1) as f32;
        let first = width * 0.5 - span * 0.5;
        let dots = (0..dot_count)
            .map(|i| Vector2::new(first + i as f32 * DOT_SPACING, dots_y))
            .collect();

        Self {
            width,
            track,
            prev_button,
            next_button,
            dots,
            dot_radius: DOT_RADIUS,
        }
    }

    /// Screen rectangle of slide `index` once the strip is shifted by
    /// `offset_percent` of its own width.
    pub fn slot(&self, index: usize, offset_percent: f32, slide_count: usize) -> Rectangle {
        let strip_width = self.track.width * slide_count as f32;
        let strip_x = self.track.x + strip_width * offset_percent / 100.0;
        Rectangle::new(
            strip_x + index as f32 * self.track.width,
            self.track.y,
            self.track.width,
            self.track.height,
        )
    }

    /// The card drawn inside a slot.
    pub fn card(slot: Rectangle) -> Rectangle {
        let inset = slot.width * CARD_INSET;
        Rectangle::new(slot.x + inset, slot.y, slot.width - inset * 2.0, slot.height)
    }

    /// Area that pauses auto-advance while the pointer is over it.
    pub fn hover_area(&self) -> Rectangle {
        Self::card(self.track)
    }

    /// Whether the pointer counts as over the carousel. A cursor outside the
    /// window keeps reporting its last position, so it never hovers.
    pub fn is_hovered(&self, point: Vector2, cursor_on_screen: bool) -> bool {
        cursor_on_screen && contains(self.hover_area(), point)
    }

    pub fn is_visible(&self, rect: Rectangle) -> bool {
        rect.x < self.width && rect.x + rect.width > 0.0
    }

    pub fn hit(&self, point: Vector2) -> Option<Hit> {
        if contains(self.prev_button, point) {
            return Some(Hit::Prev);
        }
        if contains(self.next_button, point) {
            return Some(Hit::Next);
        }
        let reach = self.dot_radius + DOT_SLOP;
        self.dots
            .iter()
            .position(|center| {
                let dx = center.x - point.x;
                let dy = center.y - point.y;
                dx * dx + dy * dy <= reach * reach
            })
            .map(Hit::Dot)
    }
}

pub fn contains(rect: Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x <= rect.x + rect.width
        && point.y >= rect.y
        && point.y <= rect.y + rect.height
}
