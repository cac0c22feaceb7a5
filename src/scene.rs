//! The capability interface offered by the rendering collaborator.
//!
//! Placement requests are asynchronous because the collaborator loads and
//! caches meshes behind them. The core sequences these calls one at a time
//! and only uses the returned handles to track what is in the scene.

use glam::Vec3;

use crate::piece::PinColor;

/// Handle to a pin placed in the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PinHandle(pub usize);

/// Handle to a beam placed in the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BeamHandle(pub usize);

/// Rendering capability consumed by structure visualization. Rotations are
/// Euler angle triples, matching what the renderer feeds its mesh placer.
#[allow(async_fn_in_trait)]
pub trait Scene {
    async fn add_pin(&mut self, color: PinColor, position: Vec3, rotation: Vec3) -> PinHandle;
    async fn add_beam(&mut self, position: Vec3, rotation: Vec3) -> BeamHandle;
}

/// Scene that records every placement request instead of rendering.
/// Used by the CLI report and by tests.
#[derive(Debug, Default)]
pub struct TallyScene {
    pub pins: Vec<(PinColor, Vec3, Vec3)>,
    pub beams: Vec<(Vec3, Vec3)>,
}

impl Scene for TallyScene {
    async fn add_pin(&mut self, color: PinColor, position: Vec3, rotation: Vec3) -> PinHandle {
        self.pins.push((color, position, rotation));
        PinHandle(self.pins.len() - 1)
    }

    async fn add_beam(&mut self, position: Vec3, rotation: Vec3) -> BeamHandle {
        self.beams.push((position, rotation));
        BeamHandle(self.beams.len() - 1)
    }
}
