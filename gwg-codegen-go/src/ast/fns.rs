//! Go function builder.

use std::fmt;

use gwg_codegen::builder::{CodeFragment, Renderable};

use super::{Outputs, Pair, Parameters};

/// A raw, pre-formatted statement line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub content: String,
}

impl Line {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl From<&str> for Line {
    fn from(content: &str) -> Self {
        Self::new(content)
    }
}

impl From<String> for Line {
    fn from(content: String) -> Self {
        Self::new(content)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

impl Renderable for Line {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.content.clone())]
    }
}

/// An argument of a call statement built by [`Func::call`].
///
/// Only numbers and strings convert into a `CallArg`. Numbers render in
/// their decimal form, strings double-quoted without escaping.
#[derive(Debug, Clone, PartialEq)]
pub struct CallArg(ArgKind);

#[derive(Debug, Clone, PartialEq)]
enum ArgKind {
    Number(String),
    Text(String),
}

macro_rules! number_arg {
    ($($t:ty),*) => {
        $(
            impl From<$t> for CallArg {
                fn from(value: $t) -> Self {
                    Self(ArgKind::Number(value.to_string()))
                }
            }
        )*
    };
}

number_arg!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<&str> for CallArg {
    fn from(value: &str) -> Self {
        Self(ArgKind::Text(value.to_string()))
    }
}

impl From<String> for CallArg {
    fn from(value: String) -> Self {
        Self(ArgKind::Text(value))
    }
}

impl fmt::Display for CallArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            ArgKind::Number(n) => f.write_str(n),
            ArgKind::Text(s) => write!(f, "\"{}\"", s),
        }
    }
}

/// Builder for Go functions.
///
/// A func without outputs renders as `func Name(params) {`, with a single
/// space before the brace where an empty result list would otherwise sit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Func {
    name: String,
    parameters: Parameters,
    outputs: Outputs,
    lines: Vec<Line>,
}

impl Func {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_outputs(mut self, outputs: Outputs) -> Self {
        self.outputs = outputs;
        self
    }

    pub fn add_parameter(mut self, pair: Pair) -> Self {
        self.parameters = self.parameters.add(pair);
        self
    }

    pub fn add_output(mut self, pair: Pair) -> Self {
        self.outputs = self.outputs.add(pair);
        self
    }

    /// Add a line to the function body.
    pub fn add_line(mut self, line: impl Into<Line>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn add_lines(mut self, lines: impl IntoIterator<Item = impl Into<Line>>) -> Self {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn outputs(&self) -> &Outputs {
        &self.outputs
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Build a statement line invoking this function, e.g. `Greet("bob", 2)`.
    pub fn call<A: Into<CallArg>>(&self, args: impl IntoIterator<Item = A>) -> Line {
        let args = args
            .into_iter()
            .map(|arg| arg.into().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Line::new(format!("{}({})", self.name, args))
    }

    fn header(&self) -> String {
        if self.outputs.is_empty() {
            format!("func {}({}) {{", self.name, self.parameters)
        } else {
            format!("func {}({}) {} {{", self.name, self.parameters, self.outputs)
        }
    }
}

impl Renderable for Func {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Block {
            header: self.header(),
            body: self.lines.iter().flat_map(|line| line.to_fragments()).collect(),
            close: Some("}".to_string()),
        }]
    }
}

#[cfg(test)]
mod tests {
    use gwg_codegen::Indent;

    use super::*;

    fn hello_world() -> Func {
        Func::new("HelloWorld")
            .add_parameter(Pair::new("hello", "int"))
            .add_parameter(Pair::new("hello2", "int"))
            .add_output(Pair::ty("int"))
            .add_line("return 1")
    }

    #[test]
    fn test_func_renders_header_body_close() {
        assert_eq!(
            hello_world().render(),
            "func HelloWorld(hello int, hello2 int) int {\nreturn 1\n}\n"
        );
    }

    #[test]
    fn test_func_without_outputs() {
        let f = Func::new("main").add_line("run()");
        assert_eq!(f.render(), "func main() {\nrun()\n}\n");
    }

    #[test]
    fn test_func_with_multiple_outputs() {
        let f = Func::new("Load")
            .add_parameter(Pair::new("path", "string"))
            .with_outputs(
                Outputs::new()
                    .add(Pair::ty("[]byte"))
                    .add(Pair::ty("error")),
            );
        assert_eq!(f.render(), "func Load(path string) ([]byte, error) {\n}\n");
    }

    #[test]
    fn test_func_with_indent() {
        assert_eq!(
            hello_world().render_with_indent(Indent::GO),
            "func HelloWorld(hello int, hello2 int) int {\n\treturn 1\n}\n"
        );
    }

    #[test]
    fn test_lines_are_verbatim() {
        let f = Func::new("f").add_lines(["if x {", "  return", "}"]);
        assert_eq!(f.render(), "func f() {\nif x {\n  return\n}\n}\n");
        assert_eq!(f.lines().len(), 3);
    }

    #[test]
    fn test_call_mixes_numbers_and_strings() {
        let f = Func::new("Greet");
        let line = f.call([CallArg::from("bob"), CallArg::from(2), CallArg::from(1.5)]);
        assert_eq!(line.content, r#"Greet("bob", 2, 1.5)"#);
    }

    #[test]
    fn test_call_without_args() {
        assert_eq!(Func::new("Run").call(Vec::<CallArg>::new()).content, "Run()");
    }

    #[test]
    fn test_call_does_not_escape_strings() {
        let line = Func::new("Say").call([r#"he said "hi""#]);
        assert_eq!(line.content, r#"Say("he said "hi"")"#);
    }

    #[test]
    fn test_call_line_can_be_added_to_body() {
        let greet = Func::new("Greet");
        let main = Func::new("main").add_line(greet.call([7u8]));
        assert_eq!(main.render(), "func main() {\nGreet(7)\n}\n");
    }
}
