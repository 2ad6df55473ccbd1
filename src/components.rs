use bevy::prelude::*;

#[derive(Component)]
pub struct Ball;

#[derive(Component, Debug, Deref, DerefMut, Copy, Clone)]
pub struct BallRadius(pub f32);

/// Display color picked at spawn time; the mesh child material is built from it.
#[derive(Component, Debug, Copy, Clone)]
pub struct BallColor(pub Color);

/// One straight piece of the circular boundary ring.
#[derive(Component)]
pub struct BoundarySegment;
