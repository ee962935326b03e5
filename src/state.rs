#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum CarouselState {
    #[default]
    Idle,          // Accepting transitions
    Transitioning, // A slide change is settling, further transitions are dropped
}
