use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use raylib::prelude::*;
use testimonials::constants::{AUTO_ADVANCE_INTERVAL, FPS, SETTLE_DELAY, WINDOW_HEIGHT, WINDOW_WIDTH};
use testimonials::{Deck, Settings};
use tracing::{info, warn};

mod engine;
mod indicator;
mod layout;
mod slide;
mod texture_loader;
mod track;

use crate::engine::CarouselEngine;
use crate::slide::TestimonialSlide;
use crate::texture_loader::load_texture_with_exif_rotation;

#[derive(Parser, Debug)]
#[command(name = "testimonials")]
#[command(about = "Rotating testimonial carousel", long_about = None)]
struct Cli {
    /// Testimonial deck (TOML). The built-in deck is shown when omitted
    deck: Option<PathBuf>,

    /// Milliseconds between automatic advances
    #[arg(long, default_value_t = AUTO_ADVANCE_INTERVAL.as_millis() as u64)]
    interval_ms: u64,

    /// Milliseconds during which further slide changes are ignored
    #[arg(long, default_value_t = SETTLE_DELAY.as_millis() as u64)]
    settle_ms: u64,

    /// Fixed track offset per slide in percent (default: 100 / slide count).
    /// Only centers every slide when it equals 100 / slide count; 25 suits
    /// exactly four slides
    #[arg(long)]
    step_percent: Option<f32>,

    /// Shuffle testimonial order on start
    #[arg(long)]
    shuffle: bool,

    /// Initial window width
    #[arg(long, default_value_t = WINDOW_WIDTH)]
    width: i32,

    /// Initial window height
    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    height: i32,
}

impl Cli {
    fn settings(&self) -> Settings {
        Settings {
            auto_advance: Duration::from_millis(self.interval_ms),
            settle_delay: Duration::from_millis(self.settle_ms),
            step_percent: self.step_percent,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // --- Load Deck ---
    let mut deck = match &cli.deck {
        Some(path) => {
            info!("Loading deck {}", path.display());
            Deck::load(path)?
        }
        None => Deck::builtin()?,
    };
    if cli.shuffle {
        deck.shuffle();
    }

    let settings = cli.settings();
    if !settings.step_fits(deck.len()) {
        warn!(
            step_percent = settings.step_for(deck.len()),
            slides = deck.len(),
            "Fixed step does not match slide count, some slides will be drawn off-screen"
        );
    }
    let section_present = deck.has_section();

    let (mut rl, thread) = raylib::init()
        .size(cli.width, cli.height)
        .title("Testimonials")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Build Slides ---
    let mut slides = Vec::with_capacity(deck.len());
    for testimonial in deck.testimonials {
        let avatar = match &testimonial.avatar {
            Some(path) => match load_texture_with_exif_rotation(&mut rl, &thread, path) {
                Ok(texture) => Some(texture),
                Err(e) => {
                    warn!("{:#}", e);
                    None
                }
            },
            None => None,
        };
        slides.push(TestimonialSlide::new(testimonial, avatar));
    }

    let mut engine = CarouselEngine::new(
        slides,
        section_present,
        settings,
        rl.get_screen_width(),
        rl.get_screen_height(),
    );

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        engine.handle_input(&rl);
        engine.update(dt);

        let mut d = rl.begin_drawing(&thread);
        engine.draw(&mut d);
    }

    Ok(())
}
