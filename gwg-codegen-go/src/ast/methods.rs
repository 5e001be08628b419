//! Go method signatures.

use super::{Outputs, Pair, Parameters};

/// A method signature.
///
/// Methods are registered on a [`Struct`](super::Struct) as metadata or
/// listed in an [`Interface`](super::Interface), which renders their
/// prototypes. The owner is recorded by name, not by reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Method {
    pointer: bool,
    name: String,
    owner: Option<String>,
    parameters: Parameters,
    outputs: Outputs,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Mark the receiver as a pointer (`*T`).
    pub fn pointer(mut self) -> Self {
        self.pointer = true;
        self
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

    pub(crate) fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_pointer(&self) -> bool {
        self.pointer
    }

    /// Name of the struct this method was registered on, if any.
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn outputs(&self) -> &Outputs {
        &self.outputs
    }

    /// The signature without a body: `Name(params) (results)`.
    ///
    /// Results are always parenthesized here and omitted when empty.
    pub fn prototype(&self) -> String {
        if self.outputs.is_empty() {
            format!("{}({})", self.name, self.parameters)
        } else {
            format!(
                "{}({}) ({})",
                self.name,
                self.parameters,
                self.outputs.joined()
            )
        }
    }
}
