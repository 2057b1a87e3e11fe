//! Static host type registry
//!
//! A [`Reflection`] implementation backed by a TOML description of the host
//! classes and the named objects a script can reach. Useful for hosts that
//! cannot introspect at runtime and for exercising the describer offline.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::reflect::Reflection;
use crate::value::Value;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Failed to read type registry: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse type registry: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Class {0} is declared more than once")]
    DuplicateClass(String),
    #[error("Object {0} is declared more than once")]
    DuplicateObject(String),
    #[error("Class {class} derives from unknown class {superclass}")]
    UnknownSuperclass { class: String, superclass: String },
    #[error("Object {object} has unknown class {class}")]
    UnknownObjectClass { object: String, class: String },
    #[error("Inheritance cycle through class {0}")]
    InheritanceCycle(String),
}

/// One host class
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassInfo {
    pub name: String,
    #[serde(default)]
    pub superclass: Option<String>,
    /// Method signatures, e.g. "drawPoint(double,double,double)"
    #[serde(default)]
    pub methods: Vec<String>,
    #[serde(default)]
    pub properties: Vec<String>,
}

/// A named host object instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectInfo {
    pub name: String,
    pub class: String,
}

/// On-disk form of the registry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryFile {
    #[serde(default)]
    pub class: Vec<ClassInfo>,
    #[serde(default)]
    pub object: Vec<ObjectInfo>,
}

/// Index of a class in a [`TypeRegistry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassId(usize);

/// Validated host type hierarchy
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    classes: Vec<ClassInfo>,
    superclasses: Vec<Option<ClassId>>,
    by_name: HashMap<String, ClassId>,
    objects: HashMap<String, ClassId>,
}

impl TypeRegistry {
    /// Build and validate a registry
    pub fn new(file: RegistryFile) -> Result<Self, RegistryError> {
        let mut by_name = HashMap::new();
        for (index, class) in file.class.iter().enumerate() {
            if by_name.insert(class.name.clone(), ClassId(index)).is_some() {
                return Err(RegistryError::DuplicateClass(class.name.clone()));
            }
        }

        let superclasses = file
            .class
            .iter()
            .map(|class| match &class.superclass {
                None => Ok(None),
                Some(sup) => by_name.get(sup).copied().map(Some).ok_or_else(|| {
                    RegistryError::UnknownSuperclass {
                        class: class.name.clone(),
                        superclass: sup.clone(),
                    }
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut objects = HashMap::new();
        for object in &file.object {
            let id = by_name
                .get(&object.class)
                .copied()
                .ok_or_else(|| RegistryError::UnknownObjectClass {
                    object: object.name.clone(),
                    class: object.class.clone(),
                })?;
            if objects.insert(object.name.clone(), id).is_some() {
                return Err(RegistryError::DuplicateObject(object.name.clone()));
            }
        }

        let registry = Self {
            classes: file.class,
            superclasses,
            by_name,
            objects,
        };
        registry.check_acyclic()?;

        debug!(
            classes = registry.classes.len(),
            objects = registry.objects.len(),
            "Loaded type registry"
        );
        Ok(registry)
    }

    /// Load a registry from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, RegistryError> {
        let file: RegistryFile = toml::from_str(content)?;
        Self::new(file)
    }

    /// Load a registry from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, RegistryError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    fn check_acyclic(&self) -> Result<(), RegistryError> {
        for start in 0..self.classes.len() {
            let mut seen = HashSet::new();
            let mut current = Some(ClassId(start));
            while let Some(id) = current {
                if !seen.insert(id) {
                    return Err(RegistryError::InheritanceCycle(self.classes[id.0].name.clone()));
                }
                current = self.superclasses[id.0];
            }
        }
        Ok(())
    }

    pub fn class_id(&self, name: &str) -> Option<ClassId> {
        self.by_name.get(name).copied()
    }

    /// Class of a named host object
    pub fn object_class(&self, name: &str) -> Option<ClassId> {
        self.objects.get(name).copied()
    }

    pub fn class(&self, id: ClassId) -> &ClassInfo {
        &self.classes[id.0]
    }

    pub fn object_names(&self) -> impl Iterator<Item = &str> {
        self.objects.keys().map(|s| s.as_str())
    }
}

impl Reflection for TypeRegistry {
    type Handle = ClassId;

    fn meta_handle(&self, value: &Value) -> Option<ClassId> {
        match value {
            Value::HostObject(r) => self.object_class(r.as_str()),
            Value::HostClass(r) => self.class_id(r.as_str()),
            _ => None,
        }
    }

    fn is_meta_object(&self, value: &Value) -> bool {
        matches!(value, Value::HostClass(r) if self.by_name.contains_key(r.as_str()))
    }

    fn type_name(&self, handle: &ClassId) -> String {
        self.class(*handle).name.clone()
    }

    fn member_names(&self, handle: &ClassId) -> Vec<String> {
        self.class(*handle).methods.clone()
    }

    fn property_names(&self, handle: &ClassId) -> Vec<String> {
        self.class(*handle).properties.clone()
    }

    fn superclass(&self, handle: &ClassId) -> Option<ClassId> {
        self.superclasses[handle.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::describe::Describer;
    use crate::value::HostRef;
    use std::io::Write;

    const VIEWER: &str = r#"
[[class]]
name = "QObject"
methods = ["deleteLater()"]
properties = ["objectName"]

[[class]]
name = "ViewerScene"
superclass = "QObject"
methods = ["drawPoint(double,double,double)", "displayShape(TopoDS_Shape)"]

[[class]]
name = "ScriptProxy"
superclass = "QObject"
methods = ["getWingCount()", "getVersion()"]
properties = ["scene"]

[[object]]
name = "app"
class = "ScriptProxy"
"#;

    #[test]
    fn test_registry_lookup() {
        let registry = TypeRegistry::from_toml(VIEWER).unwrap();

        let app = registry.object_class("app").unwrap();
        assert_eq!(registry.type_name(&app), "ScriptProxy");
        let root = registry.superclass(&app).unwrap();
        assert_eq!(registry.type_name(&root), "QObject");
        assert!(registry.superclass(&root).is_none());

        assert_eq!(
            registry.meta_handle(&Value::HostClass(HostRef::new("ViewerScene"))),
            registry.class_id("ViewerScene")
        );
        assert!(registry.meta_handle(&Value::HostObject(HostRef::new("nobody"))).is_none());
        assert!(registry.is_meta_object(&Value::HostClass(HostRef::new("QObject"))));
        assert!(!registry.is_meta_object(&Value::HostObject(HostRef::new("app"))));
    }

    #[test]
    fn test_describe_registry_object() {
        let registry = TypeRegistry::from_toml(VIEWER).unwrap();
        let lines =
            Describer::new(&registry).describe_to_lines(&Value::HostObject(HostRef::new("app")));

        assert_eq!(
            lines,
            vec![
                "The ScriptProxy class provides the following methods:",
                "    getWingCount()",
                "    getVersion()",
                "",
                "The following properties are defined:",
                "    scene",
            ]
        );
    }

    #[test]
    fn test_unknown_superclass() {
        let toml = r#"
[[class]]
name = "Wing"
superclass = "Component"
"#;
        let err = TypeRegistry::from_toml(toml).unwrap_err();
        assert!(matches!(err, RegistryError::UnknownSuperclass { .. }));
    }

    #[test]
    fn test_unknown_object_class() {
        let toml = r#"
[[object]]
name = "app"
class = "Missing"
"#;
        let err = TypeRegistry::from_toml(toml).unwrap_err();
        assert!(matches!(err, RegistryError::UnknownObjectClass { .. }));
    }

    #[test]
    fn test_duplicate_class() {
        let toml = r#"
[[class]]
name = "A"

[[class]]
name = "A"
"#;
        assert!(matches!(
            TypeRegistry::from_toml(toml),
            Err(RegistryError::DuplicateClass(name)) if name == "A"
        ));
    }

    #[test]
    fn test_duplicate_object() {
        let toml = r#"
[[class]]
name = "QObject"

[[object]]
name = "app"
class = "QObject"

[[object]]
name = "app"
class = "QObject"
"#;
        assert!(matches!(
            TypeRegistry::from_toml(toml),
            Err(RegistryError::DuplicateObject(name)) if name == "app"
        ));
    }

    #[test]
    fn test_inheritance_cycle() {
        let toml = r#"
[[class]]
name = "A"
superclass = "B"

[[class]]
name = "B"
superclass = "A"
"#;
        assert!(matches!(
            TypeRegistry::from_toml(toml),
            Err(RegistryError::InheritanceCycle(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(VIEWER.as_bytes()).unwrap();

        let registry = TypeRegistry::from_file(file.path()).unwrap();
        assert!(registry.class_id("ViewerScene").is_some());
        assert_eq!(registry.object_names().collect::<Vec<_>>(), vec!["app"]);

        let missing = file.path().with_extension("missing");
        assert!(matches!(
            TypeRegistry::from_file(&missing),
            Err(RegistryError::IoError(_))
        ));
    }
}
