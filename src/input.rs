//! Key-to-camera-command bindings
//!
//! A pure dispatch table from keyboard identifiers to camera commands. The
//! table holds no state; per-event magnitudes live in [`CameraTuning`] and
//! are injected where commands are applied.

use crate::consts::{CAMERA_MOVE_STEP, CAMERA_ROTATE_STEP};

/// Camera-local axis selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraAxis {
    /// Right.
    U,
    /// Up.
    V,
    /// Forward.
    N,
}

/// Direction along or about an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Pos,
    Neg,
}

impl Sign {
    pub fn factor(self) -> f32 {
        match self {
            Sign::Pos => 1.0,
            Sign::Neg => -1.0,
        }
    }
}

/// One discrete camera action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraCommand {
    /// Translate along a camera basis vector.
    Move(CameraAxis, Sign),
    /// Rotate about a camera basis vector.
    Rotate(CameraAxis, Sign),
    /// Restore the start pose.
    Reset,
}

/// Fixed per-event magnitudes for camera commands.
#[derive(Debug, Clone, Copy)]
pub struct CameraTuning {
    /// World units per move event.
    pub move_step: f32,
    /// Radians per rotate event.
    pub rotate_step: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            move_step: CAMERA_MOVE_STEP,
            rotate_step: CAMERA_ROTATE_STEP,
        }
    }
}

/// Map a `KeyboardEvent.key` identifier to a camera command.
///
/// w/s: forward/back, d/a: right/left, q/e: up/down, x: reset,
/// i/k, l/j, o/u: rotate about the right, up and forward axes.
pub fn command_for(key: &str) -> Option<CameraCommand> {
    use CameraAxis::*;
    use CameraCommand::*;
    use Sign::*;

    match key {
        "w" | "W" => Some(Move(N, Pos)),
        "s" | "S" => Some(Move(N, Neg)),
        "d" | "D" => Some(Move(U, Pos)),
        "a" | "A" => Some(Move(U, Neg)),
        "q" | "Q" => Some(Move(V, Pos)),
        "e" | "E" => Some(Move(V, Neg)),
        "i" | "I" => Some(Rotate(U, Pos)),
        "k" | "K" => Some(Rotate(U, Neg)),
        "l" | "L" => Some(Rotate(V, Pos)),
        "j" | "J" => Some(Rotate(V, Neg)),
        "o" | "O" => Some(Rotate(N, Pos)),
        "u" | "U" => Some(Rotate(N, Neg)),
        "x" | "X" => Some(Reset),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_keys_map_to_basis_moves() {
        assert_eq!(
            command_for("w"),
            Some(CameraCommand::Move(CameraAxis::N, Sign::Pos))
        );
        assert_eq!(
            command_for("a"),
            Some(CameraCommand::Move(CameraAxis::U, Sign::Neg))
        );
        assert_eq!(
            command_for("Q"),
            Some(CameraCommand::Move(CameraAxis::V, Sign::Pos))
        );
    }

    #[test]
    fn rotation_keys_pair_up_opposed() {
        for (pos, neg) in [("i", "k"), ("l", "j"), ("o", "u")] {
            let (Some(CameraCommand::Rotate(a1, s1)), Some(CameraCommand::Rotate(a2, s2))) =
                (command_for(pos), command_for(neg))
            else {
                panic!("expected rotate commands for {pos}/{neg}");
            };
            assert_eq!(a1, a2);
            assert_ne!(s1, s2);
        }
    }

    #[test]
    fn reset_and_unbound_keys() {
        assert_eq!(command_for("x"), Some(CameraCommand::Reset));
        assert_eq!(command_for("z"), None);
        assert_eq!(command_for("Escape"), None);
    }
}
