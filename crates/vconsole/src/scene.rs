//! Scene that reports draw calls instead of rendering them

use anyhow::Result;
use tracing::info;
use vconsole_core::{Scene, ShapeHandle};

/// Echoes each drawing command to stdout and the log
#[derive(Debug, Default)]
pub struct EchoScene {
    pub drawn: usize,
}

impl Scene for EchoScene {
    fn draw_point(&mut self, x: f64, y: f64, z: f64) -> Result<()> {
        info!(x, y, z, "Drawing point");
        println!("point ({}, {}, {})", x, y, z);
        self.drawn += 1;
        Ok(())
    }

    fn draw_vector(&mut self, x: f64, y: f64, z: f64, dx: f64, dy: f64, dz: f64) -> Result<()> {
        info!(x, y, z, dx, dy, dz, "Drawing vector");
        println!("vector ({}, {}, {}) -> ({}, {}, {})", x, y, z, dx, dy, dz);
        self.drawn += 1;
        Ok(())
    }

    fn display_shape(&mut self, shape: ShapeHandle) -> Result<()> {
        info!(shape = shape.0, "Displaying shape");
        println!("shape #{}", shape.0);
        self.drawn += 1;
        Ok(())
    }
}
