pub mod gamepad;
pub mod keyboard;

use log::info;

use crate::application::{Config, InputEvent};
use crate::error::Result;

/// Merges keyboard and (when present) game-controller events into one
/// queue. Polling never blocks.
pub struct InputSource {
    #[cfg(feature = "gamepad")]
    gamepad: Option<gamepad::Gamepad>,
}

impl InputSource {
    /// Look for a controller unless told not to. Not finding one is fine.
    pub fn open(config: &Config) -> Self {
        if config.keyboard_only {
            info!("keyboard-only mode requested");
        }

        #[cfg(feature = "gamepad")]
        {
            let gamepad = (!config.keyboard_only)
                .then(|| gamepad::Gamepad::discover(&config.controller_filter))
                .flatten();
            if gamepad.is_none() && !config.keyboard_only {
                info!(
                    "no device matching {:?}, running keyboard-only",
                    config.controller_filter
                );
            }
            Self { gamepad }
        }

        #[cfg(not(feature = "gamepad"))]
        {
            if !config.keyboard_only {
                info!("built without controller support, running keyboard-only");
            }
            Self {}
        }
    }

    /// Keyboard state is edge-triggered per render frame, so this runs every frame
    pub fn poll_keyboard(&self, events: &mut Vec<InputEvent>) {
        keyboard::poll(events);
    }

    /// One controller report per simulation frame. Device errors are fatal.
    pub fn poll_gamepad(&mut self, events: &mut Vec<InputEvent>) -> Result<()> {
        #[cfg(feature = "gamepad")]
        if let Some(pad) = self.gamepad.as_mut() {
            pad.poll(events)?;
        }
        #[cfg(not(feature = "gamepad"))]
        let _ = events;
        Ok(())
    }
}
