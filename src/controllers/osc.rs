// src/controllers/osc.rs
// OSC Controller
//
// Remote taps over UDP. Messages are queued as they arrive and drained once
// per update.

use log::{debug, warn};
use nannou_osc as osc;

#[derive(Debug, Clone, PartialEq)]
pub enum OscCommand {
    Tap,
    Background { r: f32, g: f32, b: f32 },
}

pub struct OscController {
    command_queue: Vec<OscCommand>,
    receiver: osc::Receiver,
}

impl OscController {
    pub fn new(port: u16) -> Result<Self, std::io::Error> {
        let receiver = osc::receiver(port)?;

        Ok(Self {
            command_queue: Vec::new(),
            receiver,
        })
    }

    pub fn process_messages(&mut self) {
        for (packet, addr) in self.receiver.try_iter() {
            for message in packet.into_msgs() {
                match parse_message(&message.addr, &message.args) {
                    Some(command) => {
                        debug!("OSC {} from {}: {:?}", message.addr, addr, command);
                        self.command_queue.push(command);
                    }
                    None => warn!(
                        "Unknown OSC message: {} {:?}",
                        message.addr, message.args
                    ),
                }
            }
        }
    }

    pub fn take_commands(&mut self) -> Vec<OscCommand> {
        std::mem::take(&mut self.command_queue)
    }
}

/// Maps an address and argument list onto a command.
/// Integer color channels are accepted as 0-255.
pub fn parse_message(addr: &str, args: &[osc::Type]) -> Option<OscCommand> {
    match (addr, args) {
        ("/tap", []) => Some(OscCommand::Tap),
        ("/background", [osc::Type::Float(r), osc::Type::Float(g), osc::Type::Float(b)]) => {
            Some(OscCommand::Background {
                r: *r,
                g: *g,
                b: *b,
            })
        }
        ("/background", [osc::Type::Int(r), osc::Type::Int(g), osc::Type::Int(b)]) => {
            let channel = |c: i32| c.clamp(0, 255) as f32 / 255.0;
            Some(OscCommand::Background {
                r: channel(*r),
                g: channel(*g),
                b: channel(*b),
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tap() {
        assert_eq!(parse_message("/tap", &[]), Some(OscCommand::Tap));
        assert_eq!(parse_message("/tap", &[osc::Type::Int(1)]), None);
    }

    #[test]
    fn test_parse_background_floats() {
        let args = [
            osc::Type::Float(0.1),
            osc::Type::Float(0.2),
            osc::Type::Float(0.3),
        ];
        assert_eq!(
            parse_message("/background", &args),
            Some(OscCommand::Background {
                r: 0.1,
                g: 0.2,
                b: 0.3
            })
        );
    }

    #[test]
    fn test_parse_background_ints_are_clamped() {
        let args = [osc::Type::Int(255), osc::Type::Int(0), osc::Type::Int(400)];
        assert_eq!(
            parse_message("/background", &args),
            Some(OscCommand::Background {
                r: 1.0,
                g: 0.0,
                b: 1.0
            })
        );
    }

    #[test]
    fn test_unknown_address() {
        assert_eq!(parse_message("/shape/next", &[]), None);
        assert_eq!(
            parse_message("/background", &[osc::Type::Float(1.0)]),
            None
        );
    }
}
