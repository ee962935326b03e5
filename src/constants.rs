use std::time::Duration;

pub const AUTO_ADVANCE_INTERVAL: Duration = Duration::from_millis(5000); // Time between automatic advances
pub const SETTLE_DELAY: Duration = Duration::from_millis(800);           // Transition lock window after each slide change
pub const MOUNT_DELAY: Duration = Duration::from_millis(100);            // Delay between window open and controller mount
pub const MIN_TIMER_PERIOD: Duration = Duration::from_millis(1);         // Repeating timers never fire faster than this

pub const WINDOW_WIDTH: i32 = 1280;           // Default window width
pub const WINDOW_HEIGHT: i32 = 720;           // Default window height
pub const FPS: u32 = 60;                      // Frames per second

pub const MOUNT_POINT: &str = "testimonials"; // Registry key of the window's carousel
