// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Contact codec.

use crate::model::Contact;
use crate::msg::ContactMsg;

use super::spatial::{pose_to_vector, vector_to_pose, vector_to_wrench, wrench_to_vector};

pub fn contact_from_msg(msg: &ContactMsg) -> Contact {
    Contact {
        active: msg.active,
        name: msg.name.clone(),
        wrench: wrench_to_vector(&msg.wrench),
        pose: pose_to_vector(&msg.pose),
    }
}

pub fn contact_to_msg(contact: &Contact) -> ContactMsg {
    ContactMsg {
        active: contact.active,
        name: contact.name.clone(),
        wrench: vector_to_wrench(&contact.wrench),
        pose: vector_to_pose(&contact.pose),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Vector7;
    use nalgebra::Vector6;

    #[test]
    fn test_left_foot_round_trip() {
        let contact = Contact {
            active: true,
            name: "left_foot".to_string(),
            wrench: Vector6::new(1.0, 0.0, 0.0, 0.0, 0.0, 0.0),
            pose: Vector7::from([0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]),
        };

        let msg = contact_to_msg(&contact);
        assert!(msg.active);
        assert_eq!(msg.name, "left_foot");
        assert_eq!(msg.wrench.force.x, 1.0);
        assert_eq!(msg.pose.position.z, 1.0);
        assert_eq!(msg.pose.orientation.w, 1.0);

        assert_eq!(contact_from_msg(&msg), contact);
    }

    #[test]
    fn test_inactive_default() {
        let contact = contact_from_msg(&ContactMsg::default());
        assert!(!contact.active);
        assert!(contact.name.is_empty());
        assert_eq!(contact.wrench, Vector6::zeros());
        assert_eq!(contact.pose, Vector7::zeros());
    }
}
