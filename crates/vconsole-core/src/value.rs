//! Runtime values passed between console scripts and the helpers

use crate::vector::{self, Vector3};

/// Name of a host-bound object or class as the script sees it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostRef(pub String);

impl HostRef {
    pub fn new(name: &str) -> Self {
        Self(name.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for HostRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque handle to a geometry shape owned by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeHandle(pub u64);

/// A dynamic script object with named members in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScriptObject {
    members: Vec<(String, Value)>,
}

impl ScriptObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: &str, value: Value) -> Self {
        self.set(name, value);
        self
    }

    /// Insert or replace a member; a replaced member keeps its position
    pub fn set(&mut self, name: &str, value: Value) {
        match self.members.iter_mut().find(|(n, _)| n == name) {
            Some((_, slot)) => *slot = value,
            None => self.members.push((name.to_string(), value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.members.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Members in enumeration order
    pub fn members(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.members.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Any value a script can hand to a console helper
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Vector3(Vector3),
    /// A script function, by name
    Function(String),
    Object(ScriptObject),
    /// An instance of a host class
    HostObject(HostRef),
    /// A host class itself (its metadata handle, callable as a constructor)
    HostClass(HostRef),
    Shape(ShapeHandle),
}

impl Value {
    /// Runtime kind name as reported to the script author
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Function(_) | Value::HostClass(_) => "function",
            Value::Null
            | Value::Vector3(_)
            | Value::Object(_)
            | Value::HostObject(_)
            | Value::Shape(_) => "object",
        }
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Function(_) | Value::HostClass(_))
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<Vector3> {
        match self {
            Value::Vector3(v) => Some(*v),
            _ => None,
        }
    }

    /// Enumerable members when this value behaves as a plain script object.
    ///
    /// Vectors expose their components followed by their script methods.
    /// Null, host objects and shapes count as objects without script-visible
    /// members.
    pub fn script_members(&self) -> Option<ScriptObject> {
        match self {
            Value::Object(obj) => Some(obj.clone()),
            Value::Vector3(v) => {
                let mut obj = ScriptObject::new()
                    .with("x", Value::Number(v.x))
                    .with("y", Value::Number(v.y))
                    .with("z", Value::Number(v.z));
                for name in vector::SCRIPT_METHODS {
                    obj.set(name, Value::Function((*name).to_string()));
                }
                Some(obj)
            }
            Value::Null | Value::HostObject(_) | Value::Shape(_) => Some(ScriptObject::new()),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vector3> for Value {
    fn from(v: Vector3) -> Self {
        Value::Vector3(v)
    }
}

impl From<ScriptObject> for Value {
    fn from(obj: ScriptObject) -> Self {
        Value::Object(obj)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
            Value::Vector3(v) => write!(f, "{}", v),
            Value::Function(name) => write!(f, "function {}()", name),
            Value::Object(_) => write!(f, "[object Object]"),
            Value::HostObject(r) => write!(f, "[object {}]", r),
            Value::HostClass(r) => write!(f, "[class {}]", r),
            Value::Shape(h) => write!(f, "[shape #{}]", h.0),
        }
    }
}
