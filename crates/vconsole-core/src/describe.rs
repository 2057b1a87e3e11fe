//! `help(value)` for the script console
//!
//! Lists what a script can do with a value. Three kinds of values are
//! handled:
//! - host objects and classes, described through [`Reflection`] by walking
//!   the superclass chain up to (but excluding) the root type
//! - plain script objects, whose public callable members are listed
//! - everything else, reported by its runtime kind

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::reflect::{OutputSink, Reflection};
use crate::value::Value;

/// Formatting and traversal settings for [`Describer`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescribeOptions {
    /// Base class every host class derives from; never described as an ancestor
    #[serde(default = "default_root_type")]
    pub root_type: String,
    /// Members starting with this prefix are hidden
    #[serde(default = "default_private_prefix")]
    pub private_prefix: String,
    /// Prefix for member and property lines
    #[serde(default = "default_indent")]
    pub indent: String,
    /// Wrap class names in `<b>` tags for rich-text consoles
    #[serde(default)]
    pub emphasize_names: bool,
    /// Upper bound on levels walked; the top-level class is always described
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_root_type() -> String {
    "QObject".to_string()
}

fn default_private_prefix() -> String {
    "_".to_string()
}

fn default_indent() -> String {
    "    ".to_string()
}

fn default_max_depth() -> usize {
    64
}

impl Default for DescribeOptions {
    fn default() -> Self {
        Self {
            root_type: default_root_type(),
            private_prefix: default_private_prefix(),
            indent: default_indent(),
            emphasize_names: false,
            max_depth: default_max_depth(),
        }
    }
}

/// Renders capability listings for arbitrary values
pub struct Describer<'a, R: Reflection> {
    reflection: &'a R,
    options: DescribeOptions,
}

impl<'a, R: Reflection> Describer<'a, R> {
    pub fn new(reflection: &'a R) -> Self {
        Self::with_options(reflection, DescribeOptions::default())
    }

    pub fn with_options(reflection: &'a R, options: DescribeOptions) -> Self {
        Self {
            reflection,
            options,
        }
    }

    /// Write the description of `value` to `out`
    pub fn describe(&self, value: &Value, out: &mut dyn OutputSink) {
        if let Some(handle) = self.reflection.meta_handle(value) {
            self.describe_class(handle, out);
        } else if let Some(object) = value.script_members() {
            out.print("This object provides following methods:");
            for (name, member) in object.members() {
                if self.is_listed_method(name, member) {
                    out.print(&format!("{}{}", self.options.indent, name));
                }
            }
        } else {
            out.print(&format!("type: {}", value.type_of()));
        }
    }

    /// Convenience wrapper collecting the lines
    pub fn describe_to_lines(&self, value: &Value) -> Vec<String> {
        let mut lines = Vec::new();
        self.describe(value, &mut lines);
        lines
    }

    fn is_listed_method(&self, name: &str, member: &Value) -> bool {
        let prefix = &self.options.private_prefix;
        if !prefix.is_empty() && name.starts_with(prefix.as_str()) {
            return false;
        }
        member.is_callable() && !self.reflection.is_meta_object(member)
    }

    fn describe_class(&self, handle: R::Handle, out: &mut dyn OutputSink) {
        let mut current = Some(handle);
        let mut derived = false;
        let mut visited: Vec<R::Handle> = Vec::new();

        while let Some(handle) = current {
            let name = self.reflection.type_name(&handle);
            if derived && name == self.options.root_type {
                break;
            }
            if visited.contains(&handle) {
                warn!(class = %name, "Superclass chain loops back, stopping");
                break;
            }
            if derived && visited.len() >= self.options.max_depth {
                warn!(
                    class = %name,
                    max_depth = self.options.max_depth,
                    "Superclass chain too deep, stopping"
                );
                break;
            }
            debug!(class = %name, derived, "Describing class");

            if derived {
                out.print("");
            }
            self.describe_level(&handle, &name, derived, out);

            current = self.reflection.superclass(&handle);
            visited.push(handle);
            derived = true;
        }
    }

    fn describe_level(&self, handle: &R::Handle, name: &str, derived: bool, out: &mut dyn OutputSink) {
        let shown = if self.options.emphasize_names {
            format!("<b>{}</b>", name)
        } else {
            name.to_string()
        };
        let indent = &self.options.indent;

        if derived {
            out.print(&format!("Derived from {} with the methods:", shown));
        } else {
            out.print(&format!("The {} class provides the following methods:", shown));
        }
        for member in self.reflection.member_names(handle) {
            out.print(&format!("{}{}", indent, member));
        }

        let properties = self.reflection.property_names(handle);
        if !properties.is_empty() {
            out.print("");
            out.print(if derived {
                "And properties:"
            } else {
                "The following properties are defined:"
            });
            for property in properties {
                out.print(&format!("{}{}", indent, property));
            }
        }
    }
}
