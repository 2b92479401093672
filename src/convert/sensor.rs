// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Sensor codec.

use crate::core::Result;
use crate::model::Sensor;
use crate::msg::SensorMsg;
use crate::options::ConvertOptions;

use super::contact::{contact_from_msg, contact_to_msg};
use super::joint_state::{joint_state_from_msg_with, joint_state_to_msg};
use super::spatial::{pose_to_vector, twist_to_vector, vector_to_pose, vector_to_twist};

pub fn sensor_from_msg(msg: &SensorMsg) -> Result<Sensor> {
    sensor_from_msg_with(msg, &ConvertOptions::default())
}

/// Decode a sensor snapshot. Contacts keep their order and count.
pub fn sensor_from_msg_with(msg: &SensorMsg, options: &ConvertOptions) -> Result<Sensor> {
    Ok(Sensor {
        base_pose: pose_to_vector(&msg.base_pose),
        base_twist: twist_to_vector(&msg.base_twist),
        joint_state: joint_state_from_msg_with(&msg.joint_state, options)?,
        contacts: msg.contacts.iter().map(contact_from_msg).collect(),
    })
}

pub fn sensor_to_msg(sensor: &Sensor) -> SensorMsg {
    SensorMsg {
        base_pose: vector_to_pose(&sensor.base_pose),
        base_twist: vector_to_twist(&sensor.base_twist),
        joint_state: joint_state_to_msg(&sensor.joint_state),
        contacts: sensor.contacts.iter().map(contact_to_msg).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConversionError;
    use crate::model::{Contact, JointState, Vector7};
    use nalgebra::{DVector, Vector6};

    fn contact(name: &str, active: bool, seed: f64) -> Contact {
        Contact {
            active,
            name: name.to_string(),
            wrench: Vector6::from_element(seed),
            pose: Vector7::from_element(seed + 1.0),
        }
    }

    fn sample() -> Sensor {
        Sensor {
            base_pose: Vector7::from([0.1, 0.2, 0.3, 0.0, 0.0, 0.0, 1.0]),
            base_twist: Vector6::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0),
            joint_state: JointState {
                stamp: 5,
                name: vec!["hip".into(), "knee".into()],
                position: DVector::from_vec(vec![0.1, 0.2]),
                velocity: DVector::from_vec(vec![0.3, 0.4]),
                effort: DVector::from_vec(vec![0.5, 0.6]),
            },
            contacts: vec![
                contact("left_foot", true, 1.0),
                contact("right_foot", false, 2.0),
            ],
        }
    }

    #[test]
    fn test_round_trip() {
        let sensor = sample();
        let msg = sensor_to_msg(&sensor);
        assert_eq!(msg.contacts.len(), 2);
        assert_eq!(msg.contacts[0].name, "left_foot");
        assert_eq!(msg.contacts[1].name, "right_foot");
        assert_eq!(msg.base_twist.angular.z, 6.0);
        assert_eq!(sensor_from_msg(&msg).unwrap(), sensor);
    }

    #[test]
    fn test_zero_contacts() {
        let mut sensor = sample();
        sensor.contacts.clear();
        let back = sensor_from_msg(&sensor_to_msg(&sensor)).unwrap();
        assert!(back.contacts.is_empty());
        assert_eq!(back, sensor);
    }

    #[test]
    fn test_joint_state_error_propagates() {
        let mut msg = sensor_to_msg(&sample());
        msg.joint_state.position.clear();
        let err = sensor_from_msg(&msg).unwrap_err();
        assert_eq!(err, ConversionError::length_mismatch("position", 2, 0));
    }
}
