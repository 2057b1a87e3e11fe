//! Drawing sink the console helpers forward to

use anyhow::Result;

use crate::value::ShapeHandle;

/// Drawing capability provided by the viewer
///
/// Calls are synchronous. An error returned here reaches the script
/// unchanged.
pub trait Scene {
    fn draw_point(&mut self, x: f64, y: f64, z: f64) -> Result<()>;

    fn draw_vector(&mut self, x: f64, y: f64, z: f64, dx: f64, dy: f64, dz: f64) -> Result<()>;

    fn display_shape(&mut self, shape: ShapeHandle) -> Result<()>;
}

/// A single call received by a [`RecordingScene`]
#[derive(Debug, Clone, PartialEq)]
pub enum SceneCall {
    Point([f64; 3]),
    Vector { origin: [f64; 3], direction: [f64; 3] },
    Shape(ShapeHandle),
}

/// Scene that only remembers what it was asked to draw
#[derive(Debug, Default)]
pub struct RecordingScene {
    calls: Vec<SceneCall>,
}

impl RecordingScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[SceneCall] {
        &self.calls
    }

    /// Take the recorded calls, leaving the scene empty
    pub fn drain(&mut self) -> Vec<SceneCall> {
        std::mem::take(&mut self.calls)
    }
}

impl Scene for RecordingScene {
    fn draw_point(&mut self, x: f64, y: f64, z: f64) -> Result<()> {
        self.calls.push(SceneCall::Point([x, y, z]));
        Ok(())
    }

    fn draw_vector(&mut self, x: f64, y: f64, z: f64, dx: f64, dy: f64, dz: f64) -> Result<()> {
        self.calls.push(SceneCall::Vector {
            origin: [x, y, z],
            direction: [dx, dy, dz],
        });
        Ok(())
    }

    fn display_shape(&mut self, shape: ShapeHandle) -> Result<()> {
        self.calls.push(SceneCall::Shape(shape));
        Ok(())
    }
}
