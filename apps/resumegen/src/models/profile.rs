use serde_yaml::{Mapping, Value};

/// Rendered in place of any field the profile does not provide.
pub const PLACEHOLDER: &str = "N/A";

/// Key injected by the pipeline so the model knows where output lands.
pub const OUTPUT_DIRECTORY_KEY: &str = "outputFileDirectory";

/// The candidate profile: a free-form YAML tree.
///
/// No schema is enforced. Accessors never fail; a missing or mistyped
/// section reads as empty and a missing field reads as [`PLACEHOLDER`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Profile {
    data: Mapping,
}

impl Profile {
    pub fn new(data: Mapping) -> Self {
        Self { data }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Items of a sequence section. Anything else yields nothing.
    pub fn section_items(&self, key: &str) -> &[Value] {
        match self.get(key) {
            Some(Value::Sequence(items)) => items,
            _ => &[],
        }
    }

    /// Key/value pairs of a mapping section, rendered as strings.
    pub fn section_entries(&self, key: &str) -> Vec<(String, String)> {
        match self.get(key) {
            Some(Value::Mapping(mapping)) => mapping
                .iter()
                .map(|(k, v)| (render_value(k), render_value(v)))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// A single field nested one level under `section`.
    pub fn nested_field(&self, section: &str, field: &str) -> String {
        self.get(section)
            .map(|node| field_or_placeholder(node, field))
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    }

    /// Records the output directory in the profile. This is the only
    /// mutation a run performs on the loaded data.
    pub fn set_output_directory(&mut self, dir: &str) {
        self.data.insert(
            Value::String(OUTPUT_DIRECTORY_KEY.to_string()),
            Value::String(dir.to_string()),
        );
    }

    /// Stable string form embedded in the prompt. Keys keep file order.
    pub fn to_prompt_string(&self) -> String {
        serde_yaml::to_string(&self.data)
            .unwrap_or_else(|_| render_value(&Value::Mapping(self.data.clone())))
    }
}

/// Reads `field` from a mapping node, or [`PLACEHOLDER`].
pub fn field_or_placeholder(node: &Value, field: &str) -> String {
    match node.get(field) {
        Some(Value::Null) | None => PLACEHOLDER.to_string(),
        Some(value) => render_value(value),
    }
}

/// The first value of a mapping, or the node itself when it is a scalar.
/// Responsibility entries are written as `- responsibility_1: "..."`.
pub fn first_value(node: &Value) -> String {
    match node {
        Value::Mapping(mapping) => mapping
            .values()
            .next()
            .map(render_value)
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        other => render_value(other),
    }
}

/// Inline text form of any node: scalars as-is, collections in flow style.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => PLACEHOLDER.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(items) => format!(
            "[{}]",
            items.iter().map(render_value).collect::<Vec<_>>().join(", ")
        ),
        Value::Mapping(mapping) => format!(
            "{{{}}}",
            mapping
                .iter()
                .map(|(k, v)| format!("{}: {}", render_value(k), render_value(v)))
                .collect::<Vec<_>>()
                .join(", ")
        ),
        Value::Tagged(tagged) => render_value(&tagged.value),
    }
}
