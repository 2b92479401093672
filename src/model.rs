// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Computation-side types.
//!
//! Dense `nalgebra` representations of the controller messages, ready for
//! control-law evaluation. Fixed-arity quantities (wrench, twist, pose) use
//! statically sized vectors so their lengths are checked at compile time.

use nalgebra::{DMatrix, DVector, SVector, Vector6};

/// Pose as `[x, y, z, qx, qy, qz, qw]`.
pub type Vector7 = SVector<f64, 7>;

/// Joint-space state.
///
/// `position`, `velocity` and `effort` are indexed like `name`.
#[derive(Debug, Clone, PartialEq)]
pub struct JointState {
    /// Nanoseconds since Unix epoch
    pub stamp: i64,
    pub name: Vec<String>,
    pub position: DVector<f64>,
    pub velocity: DVector<f64>,
    pub effort: DVector<f64>,
}

impl JointState {
    /// Joint state with one zeroed entry per name.
    pub fn zeros(names: Vec<String>) -> Self {
        let n = names.len();
        Self {
            stamp: 0,
            name: names,
            position: DVector::zeros(n),
            velocity: DVector::zeros(n),
            effort: DVector::zeros(n),
        }
    }

    /// Number of joints.
    pub fn len(&self) -> usize {
        self.name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }

    /// Whether all numeric arrays match the joint count.
    pub fn is_consistent(&self) -> bool {
        let n = self.name.len();
        self.position.len() == n && self.velocity.len() == n && self.effort.len() == n
    }
}

impl Default for JointState {
    fn default() -> Self {
        Self::zeros(Vec::new())
    }
}

/// End-effector contact.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub active: bool,
    /// Contact frame name
    pub name: String,
    /// `[fx, fy, fz, tx, ty, tz]`
    pub wrench: Vector6<f64>,
    /// `[x, y, z, qx, qy, qz, qw]`
    pub pose: Vector7,
}

/// Robot state snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Sensor {
    /// `[x, y, z, qx, qy, qz, qw]`
    pub base_pose: Vector7,
    /// `[vx, vy, vz, wx, wy, wz]`
    pub base_twist: Vector6<f64>,
    pub joint_state: JointState,
    pub contacts: Vec<Contact>,
}

impl Default for Sensor {
    fn default() -> Self {
        Self {
            base_pose: Vector7::zeros(),
            base_twist: Vector6::zeros(),
            joint_state: JointState::default(),
            contacts: Vec::new(),
        }
    }
}

/// Linear feedback control command.
///
/// The command is `u = feedforward + feedback_gain * (x - x0)` where `x0` is
/// derived from `initial_state`; evaluating it is left to the controller.
/// `feedforward` is expected to have `feedback_gain.nrows()` entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    pub feedback_gain: DMatrix<f64>,
    pub feedforward: DVector<f64>,
    pub initial_state: Sensor,
}

impl Control {
    /// Whether `feedforward` has one entry per gain row.
    pub fn is_consistent(&self) -> bool {
        self.feedforward.len() == self.feedback_gain.nrows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joint_state_zeros() {
        let js = JointState::zeros(vec!["a".into(), "b".into()]);
        assert_eq!(js.len(), 2);
        assert!(js.is_consistent());
        assert_eq!(js.position, DVector::zeros(2));
    }

    #[test]
    fn test_joint_state_inconsistent() {
        let mut js = JointState::zeros(vec!["a".into()]);
        js.effort = DVector::zeros(3);
        assert!(!js.is_consistent());
    }

    #[test]
    fn test_control_consistency() {
        let control = Control {
            feedback_gain: DMatrix::zeros(4, 8),
            feedforward: DVector::zeros(4),
            initial_state: Sensor::default(),
        };
        assert!(control.is_consistent());
    }
}
