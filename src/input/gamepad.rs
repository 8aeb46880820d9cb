//! Game-controller input from raw HID reports.
//!
//! Decoding is plain byte matching and always available; talking to the
//! device needs the `gamepad` feature (hidapi). Without it, or when no
//! device matches, the program stays keyboard-only.

use crate::application::InputEvent;

/// Button byte: A and B
const BUTTONS: usize = 1;
/// Start/select byte
const SYSTEM: usize = 2;
/// D-pad hat byte
const HAT: usize = 3;

const BUTTON_A: u8 = 2;
const BUTTON_B: u8 = 1;
const START: u8 = 2;
const HAT_UP: u8 = 0;
const HAT_RIGHT: u8 = 2;
const HAT_DOWN: u8 = 4;
const HAT_LEFT: u8 = 6;

/// Decode one SNES-style report. Only the first match counts, in the
/// order A, B, left, right, up, down, start.
pub fn decode_report(report: &[u8]) -> Option<InputEvent> {
    if report.len() <= HAT {
        return None;
    }

    let checks = [
        (report[BUTTONS] == BUTTON_A, InputEvent::ToggleCreate),
        (report[BUTTONS] == BUTTON_B, InputEvent::ToggleRemove),
        (report[HAT] == HAT_LEFT, InputEvent::MoveLeft),
        (report[HAT] == HAT_RIGHT, InputEvent::MoveRight),
        (report[HAT] == HAT_UP, InputEvent::MoveUp),
        (report[HAT] == HAT_DOWN, InputEvent::MoveDown),
        (report[SYSTEM] == START, InputEvent::TogglePause),
    ];

    checks
        .into_iter()
        .find(|(hit, _)| *hit)
        .map(|(_, event)| event)
}

/// Case-insensitive substring match of a product name against the filter
pub fn name_matches(product: &str, filter: &str) -> bool {
    product.to_lowercase().contains(&filter.to_lowercase())
}

#[cfg(feature = "gamepad")]
pub use device::Gamepad;

#[cfg(feature = "gamepad")]
mod device {
    use hidapi::{HidApi, HidDevice};
    use log::{info, warn};

    use super::{decode_report, name_matches};
    use crate::application::InputEvent;
    use crate::error::{Error, Result};

    const REPORT_SIZE: usize = 128;

    /// An opened, non-blocking HID controller
    pub struct Gamepad {
        device: HidDevice,
        name: String,
        buf: [u8; REPORT_SIZE],
    }

    impl Gamepad {
        /// Open the first device whose product name matches `filter`.
        /// Any failure along the way means no controller, not an error.
        pub fn discover(filter: &str) -> Option<Self> {
            let api = match HidApi::new() {
                Ok(api) => api,
                Err(err) => {
                    warn!("HID unavailable: {err}");
                    return None;
                }
            };

            let info = api.device_list().find(|info| {
                info.product_string()
                    .is_some_and(|name| name_matches(name, filter))
            })?;
            let name = info.product_string().unwrap_or_default().to_owned();

            let device = match info.open_device(&api) {
                Ok(device) => device,
                Err(err) => {
                    warn!("could not open {name}: {err}");
                    return None;
                }
            };
            if let Err(err) = device.set_blocking_mode(false) {
                warn!("could not make {name} non-blocking: {err}");
                return None;
            }

            info!("found gamepad named {name}");
            Some(Self {
                device,
                name,
                buf: [0; REPORT_SIZE],
            })
        }

        /// Read at most one pending report; nothing pending is not an error
        pub fn poll(&mut self, events: &mut Vec<InputEvent>) -> Result<()> {
            let len = self
                .device
                .read(&mut self.buf)
                .map_err(|err| Error::Input(format!("{}: {err}", self.name)))?;
            events.extend(decode_report(&self.buf[..len]));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(buttons: u8, system: u8, hat: u8) -> [u8; 8] {
        [0, buttons, system, hat, 0x80, 0x80, 0, 0]
    }

    #[test]
    fn test_face_buttons() {
        assert_eq!(decode_report(&report(2, 0, 15)), Some(InputEvent::ToggleCreate));
        assert_eq!(decode_report(&report(1, 0, 15)), Some(InputEvent::ToggleRemove));
    }

    #[test]
    fn test_dpad() {
        assert_eq!(decode_report(&report(0, 0, 6)), Some(InputEvent::MoveLeft));
        assert_eq!(decode_report(&report(0, 0, 2)), Some(InputEvent::MoveRight));
        assert_eq!(decode_report(&report(0, 0, 0)), Some(InputEvent::MoveUp));
        assert_eq!(decode_report(&report(0, 0, 4)), Some(InputEvent::MoveDown));
    }

    #[test]
    fn test_start_pauses() {
        assert_eq!(decode_report(&report(0, 2, 15)), Some(InputEvent::TogglePause));
    }

    #[test]
    fn test_buttons_take_priority_over_dpad() {
        assert_eq!(decode_report(&report(2, 2, 6)), Some(InputEvent::ToggleCreate));
        assert_eq!(decode_report(&report(0, 2, 4)), Some(InputEvent::MoveDown));
    }

    #[test]
    fn test_idle_and_short_reports() {
        assert_eq!(decode_report(&report(0, 0, 15)), None);
        assert_eq!(decode_report(&[]), None);
        assert_eq!(decode_report(&[0, 2, 0]), None);
    }

    #[test]
    fn test_name_filter() {
        assert!(name_matches("SNES Controller", "controller"));
        assert!(name_matches("Pro CONTROLLER", "Controller"));
        assert!(!name_matches("USB Keyboard", "controller"));
    }
}
