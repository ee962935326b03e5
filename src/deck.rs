//! Testimonial decks: the content shown on each slide.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use serde::Deserialize;

const BUILTIN_DECK: &str = include_str!("../assets/testimonials.toml");

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    #[serde(default)]
    pub role: Option<String>,
    /// Portrait shown next to the quote, relative to the deck file.
    #[serde(default)]
    pub avatar: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "DeckFile")]
pub struct Deck {
    pub testimonials: Vec<Testimonial>,
    section: bool,
}

/// On-disk shape. A file without a `testimonials` key has no section at all,
/// which is different from an empty one.
#[derive(Deserialize)]
struct DeckFile {
    testimonials: Option<Vec<Testimonial>>,
}

impl From<DeckFile> for Deck {
    fn from(file: DeckFile) -> Self {
        Self {
            section: file.testimonials.is_some(),
            testimonials: file.testimonials.unwrap_or_default(),
        }
    }
}

impl Deck {
    /// Whether the deck declares a testimonials section, even an empty one.
    pub fn has_section(&self) -> bool {
        self.section
    }

    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN_DECK).context("Built-in deck is invalid")
    }

    pub fn parse(source: &str) -> Result<Self> {
        toml::from_str(source).context("Failed to parse testimonial deck")
    }

    /// Reads a deck file and resolves avatar paths against its directory.
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read deck {}", path.display()))?;
        let mut deck =
            Self::parse(&source).with_context(|| format!("In deck {}", path.display()))?;

        if let Some(base) = path.parent() {
            deck.resolve_avatars(base);
        }
        Ok(deck)
    }

    fn resolve_avatars(&mut self, base: &Path) {
        for testimonial in &mut self.testimonials {
            if let Some(avatar) = testimonial.avatar.as_mut() {
                if avatar.is_relative() {
                    *avatar = base.join(&*avatar);
                }
            }
        }
    }

    pub fn shuffle(&mut self) {
        self.testimonials.shuffle(&mut rand::rng());
    }

    pub fn len(&self) -> usize {
        self.testimonials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.testimonials.is_empty()
    }
}
