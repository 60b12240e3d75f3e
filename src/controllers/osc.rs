// src/controllers/osc.rs
// OSC Controller

use log::{info, warn};
use nannou_osc as osc;

use super::scene::SceneCommand;
use crate::errors::{PentagridError, Result};
use crate::models::{Vec2d, GRID_COUNT};

pub struct OscController {
    command_queue: Vec<SceneCommand>,
    receiver: osc::Receiver,
}

impl OscController {
    pub fn new(port: u16) -> Result<Self> {
        let receiver = osc::receiver(port)
            .map_err(|e| PentagridError::Osc(format!("cannot listen on port {port}: {e}")))?;
        info!("listening for OSC on port {port}");

        Ok(Self {
            command_queue: Vec::new(),
            receiver,
        })
    }

    pub fn process_messages(&mut self) {
        for (packet, _addr) in self.receiver.try_iter() {
            for message in packet.into_msgs() {
                match parse_message(&message) {
                    Some(command) => self.command_queue.push(command),
                    None => warn!("ignoring OSC message {} {:?}", message.addr, message.args),
                }
            }
        }
    }

    pub fn take_commands(&mut self) -> Vec<SceneCommand> {
        std::mem::take(&mut self.command_queue)
    }
}

fn grid_index(index: i32) -> Option<usize> {
    usize::try_from(index).ok().filter(|&j| j < GRID_COUNT)
}

/// Translate one OSC message into a scene command.
/// Unknown addresses and mismatched arguments yield `None`.
pub fn parse_message(message: &osc::Message) -> Option<SceneCommand> {
    let command = match (message.addr.as_str(), &message.args[..]) {
        ("/tiling/gamma", [osc::Type::Int(index), osc::Type::Float(value)]) => {
            SceneCommand::SetGamma {
                index: grid_index(*index)?,
                value: *value as f64,
            }
        }
        (
            "/tiling/gammas",
            [osc::Type::Float(g0), osc::Type::Float(g1), osc::Type::Float(g2), osc::Type::Float(g3), osc::Type::Float(g4)],
        ) => SceneCommand::SetGammas([*g0, *g1, *g2, *g3, *g4].map(f64::from)),
        ("/tiling/rotate", [osc::Type::Int(index), osc::Type::Float(angle)]) => {
            SceneCommand::RotateFactor {
                index: grid_index(*index)?,
                angle: *angle as f64,
            }
        }
        ("/tiling/inflate", []) => SceneCommand::Inflate,
        ("/tiling/deflate", []) => SceneCommand::Deflate,
        ("/tiling/reset", []) => SceneCommand::Reset,
        ("/tiling/random", []) => SceneCommand::RandomGamma,
        ("/tiling/lines", [osc::Type::Int(min), osc::Type::Int(max)]) => SceneCommand::SetLines {
            min: *min,
            max: *max,
        },
        ("/camera/zoom", [osc::Type::Float(factor)]) => SceneCommand::Zoom(*factor as f64),
        ("/camera/move", [osc::Type::Float(x), osc::Type::Float(y)]) => {
            SceneCommand::Move(Vec2d::new(*x as f64, *y as f64))
        }
        ("/scene/switch", []) => SceneCommand::SwitchScene,
        ("/scene/pause", []) => SceneCommand::TogglePause,
        _ => return None,
    };
    Some(command)
}
