//! Feature modules - card logic separated from UI
//!
//! Nothing here depends on iced. The `app` layer translates iced events into
//! calls on [`CelebrationWidget`] and reads its rendering queries back.

pub mod celebration;
pub mod confetti;
pub mod observer;
pub mod palette;
pub mod settings;
pub mod timer;
pub mod viewport;

pub use celebration::{CelebrationWidget, SequenceConfig};
pub use confetti::{ConfettiField, ParticleShape};
pub use observer::TracingObserver;
pub use palette::PaletteColor;
pub use settings::Settings;
pub use timer::TimerId;
pub use viewport::ViewportSize;
