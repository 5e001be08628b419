//! Go interface builder.

use gwg_codegen::builder::{CodeFragment, Renderable};

use super::Method;

/// Builder for Go interfaces; renders each method's prototype.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interface {
    name: String,
    methods: Vec<Method>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
        }
    }

    pub fn add_method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    pub fn add_methods(mut self, methods: impl IntoIterator<Item = Method>) -> Self {
        self.methods.extend(methods);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Block {
            header: format!("type {} interface {{", self.name),
            body: self
                .methods
                .iter()
                .map(|m| CodeFragment::Line(m.prototype()))
                .collect(),
            close: Some("}".to_string()),
        }]
    }
}

#[cfg(test)]
mod tests {
    use gwg_codegen::Indent;

    use super::*;
    use crate::ast::Pair;

    #[test]
    fn test_interface_renders_prototypes() {
        let i = Interface::new("AccountApiInterface")
            .add_method(Method::new("CreateAccount").add_parameter(Pair::new("good", "int")));
        assert_eq!(
            i.render(),
            "type AccountApiInterface interface {\nCreateAccount(good int)\n}\n"
        );
    }

    #[test]
    fn test_interface_keeps_method_order() {
        let i = Interface::new("Store").add_methods([
            Method::new("Get").add_output(Pair::ty("string")),
            Method::new("Set").add_parameter(Pair::new("v", "string")),
        ]);
        assert_eq!(
            i.render_with_indent(Indent::GO),
            "type Store interface {\n\tGet() (string)\n\tSet(v string)\n}\n"
        );
    }

    #[test]
    fn test_interface_does_not_claim_ownership() {
        let i = Interface::new("Store").add_method(Method::new("Get"));
        assert_eq!(i.methods()[0].owner(), None);
    }

    #[test]
    fn test_empty_interface() {
        assert_eq!(Interface::new("Any").render(), "type Any interface {\n}\n");
    }
}
