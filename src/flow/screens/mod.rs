//! Sub-screens of the state machine.

mod confirm;
mod ending;
mod gameplay;
mod help;
mod logo;
mod menu;
mod settings;

pub use confirm::{ConfirmGesture, ConfirmScreen};
pub use ending::EndingScreen;
pub use gameplay::GameplayScreen;
pub use help::HelpScreen;
pub use logo::{DEFAULT_LOGO_DURATION, LogoAnimation, LogoScreen, TimedLogo};
pub use menu::{MenuChoice, MenuScreen};
pub use settings::{SettingsRow, SettingsScreen};
