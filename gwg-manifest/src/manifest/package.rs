//! `[package]` section and the declarations it contains.

use std::collections::HashMap;

use gwg_codegen_go::{
    Package,
    ast::{Enums, Func, Import, Interface, Method, Pair, Property, Struct, Tag},
};
use indexmap::IndexMap;
use serde::Deserialize;

use super::ParseContext;
use crate::Result;

/// `[package]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageConfig {
    pub name: String,

    /// Import paths, rendered in order
    #[serde(default)]
    pub imports: Vec<String>,

    #[serde(default)]
    pub enums: Vec<EnumConfig>,

    #[serde(default)]
    pub structs: Vec<StructConfig>,

    #[serde(default)]
    pub interfaces: Vec<InterfaceConfig>,

    #[serde(default)]
    pub funcs: Vec<FuncConfig>,
}

/// `{ name = "ctx", type = "context.Context" }`; `name` may be omitted.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PairConfig {
    #[serde(default)]
    pub name: String,

    #[serde(rename = "type")]
    pub ty: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumConfig {
    pub title: String,

    #[serde(default)]
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropertyConfig {
    pub label: String,

    #[serde(rename = "type")]
    pub ty: String,

    /// Struct tags, rendered in the order written
    #[serde(default)]
    pub tags: IndexMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MethodConfig {
    pub name: String,

    /// Pointer receiver; only meaningful on struct methods
    #[serde(default)]
    pub pointer: bool,

    #[serde(default)]
    pub parameters: Vec<PairConfig>,

    #[serde(default)]
    pub outputs: Vec<PairConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StructConfig {
    pub name: String,

    /// Embedded types, written verbatim
    #[serde(default)]
    pub combinations: Vec<String>,

    #[serde(default)]
    pub properties: Vec<PropertyConfig>,

    #[serde(default)]
    pub methods: Vec<MethodConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InterfaceConfig {
    pub name: String,

    #[serde(default)]
    pub methods: Vec<MethodConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FuncConfig {
    pub name: String,

    #[serde(default)]
    pub parameters: Vec<PairConfig>,

    #[serde(default)]
    pub outputs: Vec<PairConfig>,

    /// Body statements, emitted verbatim
    #[serde(default)]
    pub lines: Vec<String>,
}

impl PairConfig {
    pub fn to_pair(&self) -> Pair {
        Pair::new(&self.name, &self.ty)
    }
}

impl EnumConfig {
    pub fn to_enums(&self) -> Enums {
        Enums::new(&self.title).add_values(&self.values)
    }
}

impl PropertyConfig {
    pub fn to_property(&self) -> Property {
        Property::new(&self.label, &self.ty).tags(
            self.tags
                .iter()
                .map(|(label, content)| Tag::new(label, content)),
        )
    }
}

impl MethodConfig {
    pub fn to_method(&self) -> Method {
        let method = Method::new(&self.name)
            .with_parameters(self.parameters.iter().map(PairConfig::to_pair).collect())
            .with_outputs(self.outputs.iter().map(PairConfig::to_pair).collect());

        if self.pointer { method.pointer() } else { method }
    }
}

impl StructConfig {
    pub fn to_struct(&self) -> Struct {
        let s = self
            .combinations
            .iter()
            .fold(Struct::new(&self.name), |s, c| s.add_combination(c))
            .add_properties(self.properties.iter().map(PropertyConfig::to_property));

        self.methods
            .iter()
            .fold(s, |s, m| s.add_method(m.to_method()))
    }
}

impl InterfaceConfig {
    pub fn to_interface(&self) -> Interface {
        Interface::new(&self.name).add_methods(self.methods.iter().map(MethodConfig::to_method))
    }
}

impl FuncConfig {
    pub fn to_func(&self) -> Func {
        Func::new(&self.name)
            .with_parameters(self.parameters.iter().map(PairConfig::to_pair).collect())
            .with_outputs(self.outputs.iter().map(PairConfig::to_pair).collect())
            .add_lines(self.lines.iter().map(String::as_str))
    }
}

impl PackageConfig {
    /// Build the package: imports first, then enums, structs, interfaces
    /// and funcs, each in the order they appear in the manifest.
    pub fn to_package(&self) -> Package {
        let mut package = Package::new(&self.name);

        if !self.imports.is_empty() {
            package = package.add_import(Import::new().add_all(&self.imports));
        }

        package
            .add_codes(self.enums.iter().map(EnumConfig::to_enums))
            .add_codes(self.structs.iter().map(StructConfig::to_struct))
            .add_codes(self.interfaces.iter().map(InterfaceConfig::to_interface))
            .add_codes(self.funcs.iter().map(FuncConfig::to_func))
    }

    /// Top-level declarations as `(name, manifest key, kind)`, in render order.
    fn declarations(&self) -> impl Iterator<Item = (&str, &'static str, &'static str)> {
        let enums = self.enums.iter().map(|e| (e.title.as_str(), "title", "enum"));
        let structs = self.structs.iter().map(|s| (s.name.as_str(), "name", "struct"));
        let interfaces = self
            .interfaces
            .iter()
            .map(|i| (i.name.as_str(), "name", "interface"));
        let funcs = self.funcs.iter().map(|f| (f.name.as_str(), "name", "func"));

        enums.chain(structs).chain(interfaces).chain(funcs)
    }

    pub(crate) fn validate<'a>(&'a self, ctx: &ParseContext<'a>) -> Result<()> {
        ctx.require_non_empty(&self.name, "name", "package name")?;
        ctx.validate_name(&self.name, "name", "package")?;

        let mut declared: HashMap<&str, (&str, &str)> = HashMap::new();
        for (name, key, kind) in self.declarations() {
            ctx.validate_name(name, key, kind)?;

            if let Some((first_key, first_kind)) = declared.insert(name, (key, kind)) {
                return Err(duplicate_error(ctx, name, (first_key, first_kind), (key, kind)));
            }
        }

        for e in &self.enums {
            let enum_ctx = ctx.push(&e.title);
            for value in &e.values {
                enum_ctx.validate_name(value, "values", "enum value")?;
            }
        }

        for s in &self.structs {
            let struct_ctx = ctx.push(&s.name);
            for method in &s.methods {
                struct_ctx.validate_name(&method.name, "name", "method")?;
            }
        }

        for i in &self.interfaces {
            let interface_ctx = ctx.push(&i.name);
            for method in &i.methods {
                interface_ctx.validate_name(&method.name, "name", "method")?;
            }
        }

        Ok(())
    }
}

fn duplicate_error(
    ctx: &ParseContext<'_>,
    name: &str,
    (first_key, first_kind): (&str, &str),
    (second_key, second_kind): (&str, &str),
) -> Box<crate::Error> {
    let first = super::validate::find_value_spans(ctx.src(), first_key, name);
    let second = super::validate::find_value_spans(ctx.src(), second_key, name);

    let first_span = first.first().copied();
    let second_span = second.into_iter().find(|span| Some(*span) != first_span);

    ctx.source_context()
        .duplicate_name_error(name, first_kind, second_kind, first_span, second_span)
}
