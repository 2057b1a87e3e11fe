//! Argument-shape dispatch for the console drawing helpers
//!
//! `drawPoint` and `drawVector` accept either vectors or raw components.
//! Both shapes are normalized into [`PointArgs`] / [`VectorArgs`] at the
//! boundary and then forwarded to the [`Scene`] as plain scalars.

use thiserror::Error;
use tracing::{debug, trace};

use crate::scene::Scene;
use crate::value::Value;
use crate::vector::Vector3;

/// Valid call shapes for `drawPoint`
pub const DRAW_POINT_SHAPES: &str = "drawPoint(Vector3), drawPoint(x,y,z)";

/// Valid call shapes for `drawVector`
pub const DRAW_VECTOR_SHAPES: &str =
    "drawVector(Vector3, Vector3), drawVector(x,y,z, dirx, diry, dirz)";

/// Valid call shapes for `drawShape`
pub const DRAW_SHAPE_SHAPES: &str = "drawShape(shape)";

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Invalid argument count. Valid possibilities are: {shapes}")]
    InvalidArgumentCount { got: usize, shapes: &'static str },
    #[error("Invalid argument. Argument type must be {expected}. Valid possibilities are: {shapes}")]
    InvalidArgumentType {
        expected: &'static str,
        shapes: &'static str,
    },
    #[error(transparent)]
    Scene(#[from] anyhow::Error),
}

/// Accepted argument shapes for drawing a point
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointArgs {
    ByComponents(f64, f64, f64),
    ByVector(Vector3),
}

impl PointArgs {
    /// Classify a script argument list
    pub fn from_values(args: &[Value]) -> Result<Self, DispatchError> {
        match args {
            [single] => single
                .as_vector()
                .map(PointArgs::ByVector)
                .ok_or(DispatchError::InvalidArgumentType {
                    expected: "Vector3",
                    shapes: DRAW_POINT_SHAPES,
                }),
            [_, _, _] => {
                let [x, y, z] = numbers::<3>(args, DRAW_POINT_SHAPES)?;
                Ok(PointArgs::ByComponents(x, y, z))
            }
            _ => Err(DispatchError::InvalidArgumentCount {
                got: args.len(),
                shapes: DRAW_POINT_SHAPES,
            }),
        }
    }

    pub fn position(self) -> [f64; 3] {
        match self {
            PointArgs::ByComponents(x, y, z) => [x, y, z],
            PointArgs::ByVector(v) => v.to_array(),
        }
    }

    pub fn dispatch<S: Scene + ?Sized>(self, scene: &mut S) -> Result<(), DispatchError> {
        let [x, y, z] = self.position();
        trace!(x, y, z, "drawPoint");
        scene.draw_point(x, y, z)?;
        Ok(())
    }
}

/// Accepted argument shapes for drawing a vector at an origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VectorArgs {
    ByComponents([f64; 6]),
    ByVectors { origin: Vector3, direction: Vector3 },
}

impl VectorArgs {
    /// Classify a script argument list
    pub fn from_values(args: &[Value]) -> Result<Self, DispatchError> {
        match args {
            [origin, direction] => match (origin.as_vector(), direction.as_vector()) {
                (Some(origin), Some(direction)) => Ok(VectorArgs::ByVectors { origin, direction }),
                _ => Err(DispatchError::InvalidArgumentType {
                    expected: "Vector3",
                    shapes: DRAW_VECTOR_SHAPES,
                }),
            },
            [_, _, _, _, _, _] => Ok(VectorArgs::ByComponents(numbers::<6>(
                args,
                DRAW_VECTOR_SHAPES,
            )?)),
            _ => Err(DispatchError::InvalidArgumentCount {
                got: args.len(),
                shapes: DRAW_VECTOR_SHAPES,
            }),
        }
    }

    pub fn components(self) -> [f64; 6] {
        match self {
            VectorArgs::ByComponents(c) => c,
            VectorArgs::ByVectors { origin, direction } => [
                origin.x,
                origin.y,
                origin.z,
                direction.x,
                direction.y,
                direction.z,
            ],
        }
    }

    pub fn dispatch<S: Scene + ?Sized>(self, scene: &mut S) -> Result<(), DispatchError> {
        let [x, y, z, dx, dy, dz] = self.components();
        trace!(x, y, z, dx, dy, dz, "drawVector");
        scene.draw_vector(x, y, z, dx, dy, dz)?;
        Ok(())
    }
}

/// Extract exactly `N` numbers, rejecting any non-numeric argument
fn numbers<const N: usize>(args: &[Value], shapes: &'static str) -> Result<[f64; N], DispatchError> {
    let mut out = [0.0; N];
    for (slot, arg) in out.iter_mut().zip(args) {
        *slot = arg.as_number().ok_or(DispatchError::InvalidArgumentType {
            expected: "number",
            shapes,
        })?;
    }
    Ok(out)
}

/// `drawPoint(...)` as called from a script
pub fn draw_point<S: Scene + ?Sized>(scene: &mut S, args: &[Value]) -> Result<(), DispatchError> {
    let shape = PointArgs::from_values(args).inspect_err(|e| debug!(error = %e, "drawPoint rejected"))?;
    shape.dispatch(scene)
}

/// `drawVector(...)` as called from a script
pub fn draw_vector<S: Scene + ?Sized>(scene: &mut S, args: &[Value]) -> Result<(), DispatchError> {
    let shape =
        VectorArgs::from_values(args).inspect_err(|e| debug!(error = %e, "drawVector rejected"))?;
    shape.dispatch(scene)
}

/// `drawShape(shape)` as called from a script
pub fn draw_shape<S: Scene + ?Sized>(scene: &mut S, args: &[Value]) -> Result<(), DispatchError> {
    match args {
        [Value::Shape(handle)] => {
            trace!(shape = handle.0, "drawShape");
            scene.display_shape(*handle)?;
            Ok(())
        }
        [_] => Err(DispatchError::InvalidArgumentType {
            expected: "shape",
            shapes: DRAW_SHAPE_SHAPES,
        }),
        _ => Err(DispatchError::InvalidArgumentCount {
            got: args.len(),
            shapes: DRAW_SHAPE_SHAPES,
        }),
    }
}
