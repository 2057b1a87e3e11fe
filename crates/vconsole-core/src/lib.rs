//! vconsole Core - Helpers for the viewer's embedded script console
//!
//! This crate provides what scripts typed into the console use:
//! - `Vector3`, an immutable 3D vector with the usual algebra
//! - `drawPoint` / `drawVector` / `drawShape` argument-shape dispatch onto a `Scene`
//! - `help(value)`, a describer listing what can be done with any value
//! - A TOML-backed type registry implementing host reflection

pub mod describe;
pub mod dispatch;
pub mod reflect;
pub mod registry;
pub mod scene;
pub mod value;
pub mod vector;

pub use describe::{DescribeOptions, Describer};
pub use dispatch::{draw_point, draw_shape, draw_vector, DispatchError, PointArgs, VectorArgs};
pub use reflect::{OutputSink, Reflection};
pub use registry::{ClassId, ClassInfo, ObjectInfo, RegistryError, TypeRegistry};
pub use scene::{RecordingScene, Scene, SceneCall};
pub use value::{HostRef, ScriptObject, ShapeHandle, Value};
pub use vector::{DegenerateVectorError, PointDirectionResult, Vector3};
