use raylib::prelude::*;
use testimonials::{Testimonial, Toggle};

const QUOTE_SIZE: i32 = 28;
const AUTHOR_SIZE: i32 = 24;
const ROLE_SIZE: i32 = 20;
const PADDING: f32 = 36.0;
const GLYPH_WIDTH: f32 = 0.55;    // Average glyph width of the default font, relative to its size

pub struct TestimonialSlide {
    testimonial: Testimonial,
    avatar: Option<Texture2D>,
    active: bool,
}

impl TestimonialSlide {
    pub fn new(testimonial: Testimonial, avatar: Option<Texture2D>) -> Self {
        Self {
            testimonial,
            avatar,
            active: false,
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, card: Rectangle) {
        let (background, ink) = if self.active {
            (Color::WHITE, Color::new(30, 30, 40, 255))
        } else {
            (Color::new(232, 232, 238, 255), Color::new(120, 120, 130, 255))
        };
        d.draw_rectangle_rounded(card, 0.06, 12, background);

        let mut text_x = card.x + PADDING;
        let mut text_width = card.width - PADDING * 2.0;

        if let Some(avatar) = &self.avatar {
            let size = (card.height * 0.3).min(card.width * 0.2);
            let tex_width = avatar.width() as f32;
            let tex_height = avatar.height() as f32;

            // Square crop from the middle of the portrait
            let side = tex_width.min(tex_height);
            let source = Rectangle::new(
                (tex_width - side) * 0.5,
                (tex_height - side) * 0.5,
                side,
                side,
            );
            d.draw_texture_pro(
                avatar,
                source,
                Rectangle::new(card.x + PADDING, card.y + PADDING, size, size),
                Vector2::new(0.0, 0.0),
                0.0,
                Color::WHITE,
            );

            text_x += size + PADDING;
            text_width -= size + PADDING;
        }

        let max_chars = (text_width / (QUOTE_SIZE as f32 * GLYPH_WIDTH)).max(8.0) as usize;
        let mut y = card.y + PADDING;
        for line in wrap(&format!("\"{}\"", self.testimonial.quote), max_chars) {
            d.draw_text(&line, text_x as i32, y as i32, QUOTE_SIZE, ink);
            y += QUOTE_SIZE as f32 * 1.35;
        }

        y += QUOTE_SIZE as f32;
        d.draw_text(
            &format!("- {}", self.testimonial.author),
            text_x as i32,
            y as i32,
            AUTHOR_SIZE,
            ink,
        );
        if let Some(role) = &self.testimonial.role {
            y += AUTHOR_SIZE as f32 * 1.4;
            d.draw_text(role, text_x as i32, y as i32, ROLE_SIZE, Color::GRAY);
        }
    }
}

impl Toggle for TestimonialSlide {
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

/// Greedy word wrap. Words longer than a line get a line of their own.
pub fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let needed = if line.is_empty() {
            word.chars().count()
        } else {
            line.chars().count() + 1 + word.chars().count()
        };
        if needed > max_chars && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_word_boundaries() {
        let lines = wrap("the quick brown fox jumps", 10);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn long_word_gets_own_line() {
        let lines = wrap("a extraordinarily b", 5);
        assert_eq!(lines, vec!["a", "extraordinarily", "b"]);
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(wrap("   ", 10).is_empty());
    }
}
