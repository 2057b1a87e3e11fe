//! Command-line argument to script value conversion
//!
//! - `v:x,y,z` is a vector
//! - `h:name` / `c:name` name a host object / host class
//! - `s:id` is a shape handle
//! - `true`, `false`, `null`, `undefined` and numbers are what they look like
//! - anything else is a string

use anyhow::{bail, Context, Result};
use vconsole_core::{HostRef, ScriptObject, ShapeHandle, Value, Vector3};

/// Parse a single argument
pub fn parse_value(arg: &str) -> Result<Value> {
    if let Some(components) = arg.strip_prefix("v:") {
        return parse_vector(components).map(Value::Vector3);
    }
    if let Some(name) = arg.strip_prefix("h:") {
        return Ok(Value::HostObject(HostRef::new(name)));
    }
    if let Some(name) = arg.strip_prefix("c:") {
        return Ok(Value::HostClass(HostRef::new(name)));
    }
    if let Some(id) = arg.strip_prefix("s:") {
        let id = id
            .parse()
            .with_context(|| format!("Invalid shape handle: {}", arg))?;
        return Ok(Value::Shape(ShapeHandle(id)));
    }

    Ok(match arg {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "null" => Value::Null,
        "undefined" => Value::Undefined,
        _ => match arg.parse::<f64>() {
            Ok(n) => Value::Number(n),
            Err(_) => Value::String(arg.to_string()),
        },
    })
}

pub fn parse_values(args: &[String]) -> Result<Vec<Value>> {
    args.iter().map(|a| parse_value(a)).collect()
}

fn parse_vector(components: &str) -> Result<Vector3> {
    let parts = components
        .split(',')
        .map(|p| {
            p.trim()
                .parse::<f64>()
                .with_context(|| format!("Invalid vector component: {}", p))
        })
        .collect::<Result<Vec<_>>>()?;

    match parts.as_slice() {
        [x, y, z] => Ok(Vector3::new(*x, *y, *z)),
        _ => bail!("A vector needs three components, got {}", parts.len()),
    }
}

/// The console's global script object
pub fn globals() -> Value {
    ScriptObject::new()
        .with("Vector3", Value::Function("Vector3".into()))
        .with("drawPoint", Value::Function("drawPoint".into()))
        .with("drawVector", Value::Function("drawVector".into()))
        .with("drawShape", Value::Function("drawShape".into()))
        .with("help", Value::Function("help".into()))
        .with("_objectMethods", Value::Function("_objectMethods".into()))
        .with("app", Value::HostObject(HostRef::new("app")))
        .with("scene", Value::HostObject(HostRef::new("scene")))
        .with("version", Value::String(env!("CARGO_PKG_VERSION").into()))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scalars() {
        assert_eq!(parse_value("1.5").unwrap(), Value::Number(1.5));
        assert_eq!(parse_value("-2").unwrap(), Value::Number(-2.0));
        assert_eq!(parse_value("true").unwrap(), Value::Bool(true));
        assert_eq!(parse_value("null").unwrap(), Value::Null);
        assert_eq!(parse_value("wing").unwrap(), Value::from("wing"));
    }

    #[test]
    fn test_parse_tagged() {
        assert_eq!(
            parse_value("v:1, 2,3").unwrap(),
            Value::Vector3(Vector3::new(1.0, 2.0, 3.0))
        );
        assert_eq!(
            parse_value("h:app").unwrap(),
            Value::HostObject(HostRef::new("app"))
        );
        assert_eq!(
            parse_value("c:QObject").unwrap(),
            Value::HostClass(HostRef::new("QObject"))
        );
        assert_eq!(parse_value("s:12").unwrap(), Value::Shape(ShapeHandle(12)));
    }

    #[test]
    fn test_parse_invalid_vector() {
        assert!(parse_value("v:1,2").is_err());
        assert!(parse_value("v:1,b,3").is_err());
        assert!(parse_value("s:x").is_err());
    }

    #[test]
    fn test_globals_is_object() {
        let globals = globals();
        assert_eq!(globals.type_of(), "object");
        let members = globals.script_members().unwrap();
        assert!(members.get("_objectMethods").is_some());
    }
}
