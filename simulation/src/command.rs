use serde::{Deserialize, Serialize};

use crate::blob::BlobKind;
use crate::error::{SimulationError, SimulationResult};

/// What happens to colliders at the end of a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CollisionHandler {
    /// Highlight colliders for this tick.
    #[default]
    Color,
    /// Remove colliders from the world.
    Destroy,
    /// Leave the world untouched.
    Ignore,
}

/// Blobs added by one `Scatter` command.
pub const SCATTER_COUNT: usize = 10;

/// Key-driven controls of the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Halve the tick delay (never below 1ms).
    Faster,
    /// Double the tick delay.
    Slower,
    /// Add `SCATTER_COUNT` blobs at random positions.
    Scatter,
    SetHandler(CollisionHandler),
    SetBlobKind(BlobKind),
}

impl TryFrom<char> for Command {
    type Error = SimulationError;

    fn try_from(key: char) -> Result<Self, Self::Error> {
        match key {
            'f' => Ok(Command::Faster),
            's' => Ok(Command::Slower),
            'r' => Ok(Command::Scatter),
            'c' => Ok(Command::SetHandler(CollisionHandler::Color)),
            'd' => Ok(Command::SetHandler(CollisionHandler::Destroy)),
            'i' => Ok(Command::SetHandler(CollisionHandler::Ignore)),
            'b' => Ok(Command::SetBlobKind(BlobKind::Bouncer)),
            'w' => Ok(Command::SetBlobKind(BlobKind::Wanderer)),
            other => Err(SimulationError::UnknownCommand(other)),
        }
    }
}

/// Parses a string of command keys, ignoring whitespace.
pub fn parse_script(script: &str) -> SimulationResult<Vec<Command>> {
    script
        .chars()
        .filter(|key| !key.is_whitespace())
        .map(Command::try_from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_key() {
        let commands = parse_script("f s r c d i b w").unwrap();
        assert_eq!(
            commands,
            vec![
                Command::Faster,
                Command::Slower,
                Command::Scatter,
                Command::SetHandler(CollisionHandler::Color),
                Command::SetHandler(CollisionHandler::Destroy),
                Command::SetHandler(CollisionHandler::Ignore),
                Command::SetBlobKind(BlobKind::Bouncer),
                Command::SetBlobKind(BlobKind::Wanderer),
            ]
        );
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(matches!(
            parse_script("rrx"),
            Err(SimulationError::UnknownCommand('x'))
        ));
        assert!(parse_script("").unwrap().is_empty());
    }
}
