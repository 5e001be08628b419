//! Go struct builder.

use std::fmt;

use gwg_codegen::builder::{CodeFragment, Renderable};
use indexmap::IndexMap;

use super::{Method, Tag};

/// A field in a Go struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub label: String,
    pub ty: String,
    pub tags: Vec<Tag>,
}

impl Property {
    pub fn new(label: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ty: ty.into(),
            tags: Vec::new(),
        }
    }

    pub fn tag(mut self, label: impl Into<String>, content: impl Into<String>) -> Self {
        self.tags.push(Tag::new(label, content));
        self
    }

    pub fn tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.extend(tags);
        self
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label, self.ty)?;
        if !self.tags.is_empty() {
            let tags = self
                .tags
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            write!(f, " `{}`", tags)?;
        }
        Ok(())
    }
}

/// Builder for Go structs.
///
/// Methods registered here are bookkeeping only: rendering emits the type
/// declaration with its embedded types and fields, never method bodies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Struct {
    name: String,
    combinations: Vec<String>,
    properties: Vec<Property>,
    methods: IndexMap<String, Method>,
}

impl Struct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Embed another type, written verbatim (e.g. `sync.Mutex`, `*Base`).
    pub fn add_combination(mut self, combination: impl Into<String>) -> Self {
        self.combinations.push(combination.into());
        self
    }

    pub fn add_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    pub fn add_properties(mut self, properties: impl IntoIterator<Item = Property>) -> Self {
        self.properties.extend(properties);
        self
    }

    /// Register a method and record this struct as its owner.
    ///
    /// A method with the same name replaces the earlier one in place.
    pub fn add_method(mut self, method: Method) -> Self {
        let method = method.with_owner(self.name.clone());
        self.methods.insert(method.name().to_string(), method);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn combinations(&self) -> &[String] {
        &self.combinations
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn methods(&self) -> &IndexMap<String, Method> {
        &self.methods
    }

    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.get(name)
    }
}

impl Renderable for Struct {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let body = self
            .combinations
            .iter()
            .map(|c| CodeFragment::Line(c.clone()))
            .chain(
                self.properties
                    .iter()
                    .map(|p| CodeFragment::Line(p.to_string())),
            )
            .collect();

        vec![CodeFragment::Block {
            header: format!("type {} struct {{", self.name),
            body,
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
    fn test_property_without_tags() {
        assert_eq!(Property::new("Name", "string").to_string(), "Name string");
    }

    #[test]
    fn test_property_with_tags() {
        let p = Property::new("Good", "*gin.Context")
            .tag("json", "id")
            .tag("gorm", "id,index");
        assert_eq!(
            p.to_string(),
            r#"Good *gin.Context `json:"id" gorm:"id,index"`"#
        );
    }

    #[test]
    fn test_struct_renders_combinations_before_properties() {
        let s = Struct::new("Hello")
            .add_property(Property::new("Good", "*gin.Context").tag("json", "id"))
            .add_combination("Base")
            .add_combination("sync.Mutex");
        assert_eq!(
            s.render(),
            "type Hello struct {\nBase\nsync.Mutex\nGood *gin.Context `json:\"id\"`\n}\n"
        );
    }

    #[test]
    fn test_empty_struct() {
        assert_eq!(Struct::new("Empty").render(), "type Empty struct {\n}\n");
    }

    #[test]
    fn test_struct_with_indent() {
        let s = Struct::new("User")
            .add_combination("Base")
            .add_property(Property::new("ID", "int64"));
        assert_eq!(
            s.render_with_indent(Indent::GO),
            "type User struct {\n\tBase\n\tID int64\n}\n"
        );
    }

    #[test]
    fn test_add_method_sets_owner() {
        let s = Struct::new("Account").add_method(Method::new("Save").pointer());
        let save = s.method("Save").unwrap();
        assert_eq!(save.owner(), Some("Account"));
        assert!(save.is_pointer());
    }

    #[test]
    fn test_duplicate_method_last_wins() {
        let s = Struct::new("Account")
            .add_method(Method::new("Save"))
            .add_method(Method::new("Load"))
            .add_method(Method::new("Save").add_output(Pair::ty("error")));

        assert_eq!(s.methods().len(), 2);
        let save = s.method("Save").unwrap();
        assert_eq!(save.prototype(), "Save() (error)");
        assert_eq!(save.owner(), Some("Account"));
        assert_eq!(s.methods().keys().collect::<Vec<_>>(), ["Save", "Load"]);
    }

    #[test]
    fn test_methods_are_not_rendered() {
        let s = Struct::new("Account").add_method(Method::new("Save"));
        assert_eq!(s.render(), "type Account struct {\n}\n");
    }
}
