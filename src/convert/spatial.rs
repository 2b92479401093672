// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Spatial codec.
//!
//! Fixed component orders:
//! - wrench: `[force.x, force.y, force.z, torque.x, torque.y, torque.z]`
//! - twist: `[linear.x, linear.y, linear.z, angular.x, angular.y, angular.z]`
//! - pose: `[position.x, position.y, position.z, orientation.x, orientation.y,
//!   orientation.z, orientation.w]`
//!
//! All mappings are total and copy components verbatim; quaternions are
//! not normalized.

use nalgebra::{Vector3, Vector6};

use crate::model::Vector7;
use crate::msg::{PointMsg, PoseMsg, QuaternionMsg, TwistMsg, Vector3Msg, WrenchMsg};

fn join(head: &Vector3Msg, tail: &Vector3Msg) -> Vector6<f64> {
    Vector6::new(head.x, head.y, head.z, tail.x, tail.y, tail.z)
}

fn split(v: &Vector6<f64>) -> (Vector3Msg, Vector3Msg) {
    (
        Vector3Msg::new(v[0], v[1], v[2]),
        Vector3Msg::new(v[3], v[4], v[5]),
    )
}

pub fn vector3_to_msg(v: &Vector3<f64>) -> Vector3Msg {
    Vector3Msg::new(v.x, v.y, v.z)
}

pub fn vector3_from_msg(msg: &Vector3Msg) -> Vector3<f64> {
    Vector3::new(msg.x, msg.y, msg.z)
}

pub fn wrench_to_vector(msg: &WrenchMsg) -> Vector6<f64> {
    join(&msg.force, &msg.torque)
}

pub fn vector_to_wrench(v: &Vector6<f64>) -> WrenchMsg {
    let (force, torque) = split(v);
    WrenchMsg { force, torque }
}

pub fn twist_to_vector(msg: &TwistMsg) -> Vector6<f64> {
    join(&msg.linear, &msg.angular)
}

pub fn vector_to_twist(v: &Vector6<f64>) -> TwistMsg {
    let (linear, angular) = split(v);
    TwistMsg { linear, angular }
}

pub fn pose_to_vector(msg: &PoseMsg) -> Vector7 {
    let p = &msg.position;
    let q = &msg.orientation;
    Vector7::from([p.x, p.y, p.z, q.x, q.y, q.z, q.w])
}

pub fn vector_to_pose(v: &Vector7) -> PoseMsg {
    PoseMsg {
        position: PointMsg::new(v[0], v[1], v[2]),
        orientation: QuaternionMsg::new(v[3], v[4], v[5], v[6]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrench_order() {
        let msg = WrenchMsg {
            force: Vector3Msg::new(1.0, 2.0, 3.0),
            torque: Vector3Msg::new(4.0, 5.0, 6.0),
        };
        let v = wrench_to_vector(&msg);
        assert_eq!(v, Vector6::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0));
        assert_eq!(vector_to_wrench(&v), msg);
    }

    #[test]
    fn test_twist_order() {
        let v = Vector6::new(0.1, 0.2, 0.3, -0.1, -0.2, -0.3);
        let msg = vector_to_twist(&v);
        assert_eq!(msg.linear, Vector3Msg::new(0.1, 0.2, 0.3));
        assert_eq!(msg.angular, Vector3Msg::new(-0.1, -0.2, -0.3));
        assert_eq!(twist_to_vector(&msg), v);
    }

    #[test]
    fn test_pose_order() {
        let v = Vector7::from([1.0, 2.0, 3.0, 0.0, 0.0, 0.0, 1.0]);
        let msg = vector_to_pose(&v);
        assert_eq!(msg.position, PointMsg::new(1.0, 2.0, 3.0));
        assert_eq!(msg.orientation, QuaternionMsg::identity());
        assert_eq!(pose_to_vector(&msg), v);
    }

    #[test]
    fn test_quaternion_not_normalized() {
        let v = Vector7::from([0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0]);
        assert_eq!(vector_to_pose(&v).orientation.x, 2.0);
    }

    #[test]
    fn test_vector3() {
        let v = Vector3::new(1.0, -2.0, 0.5);
        assert_eq!(vector3_from_msg(&vector3_to_msg(&v)), v);
    }
}
