//! Capabilities used by the describer: host introspection and line output

use crate::value::Value;

/// Introspection over host-bound objects and their class hierarchy
pub trait Reflection {
    /// Opaque token identifying one class's metadata
    type Handle: Clone + PartialEq;

    /// Metadata handle for a host object (its class) or host class (itself)
    fn meta_handle(&self, value: &Value) -> Option<Self::Handle>;

    fn is_reflectable(&self, value: &Value) -> bool {
        self.meta_handle(value).is_some()
    }

    /// True when the value is itself a class metadata handle
    fn is_meta_object(&self, value: &Value) -> bool;

    fn type_name(&self, handle: &Self::Handle) -> String;

    fn member_names(&self, handle: &Self::Handle) -> Vec<String>;

    fn property_names(&self, handle: &Self::Handle) -> Vec<String>;

    fn superclass(&self, handle: &Self::Handle) -> Option<Self::Handle>;
}

/// Where console text goes
pub trait OutputSink {
    fn print(&mut self, line: &str);
}

impl OutputSink for Vec<String> {
    fn print(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

impl OutputSink for std::io::Stdout {
    fn print(&mut self, line: &str) {
        use std::io::Write;
        let _ = writeln!(self.lock(), "{}", line);
    }
}
