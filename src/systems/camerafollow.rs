//! Camera follow system.
//!
//! Pins the world camera to the position of the entity marked with
//! [`CameraFollowed`](crate::components::inputcontrolled::CameraFollowed).
//! Runs after collision resolution so the camera sees the settled position.

use bevy_ecs::prelude::*;

use crate::components::inputcontrolled::CameraFollowed;
use crate::components::mapposition::MapPosition;
use crate::resources::camera::WorldCameraRes;

pub fn camera_follow(
    query: Query<&MapPosition, With<CameraFollowed>>,
    camera: Option<ResMut<WorldCameraRes>>,
) {
    let Some(mut camera) = camera else {
        return;
    };
    if let Some(position) = query.iter().next() {
        camera.0.position = position.pos;
    }
}
