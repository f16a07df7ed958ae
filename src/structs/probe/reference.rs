use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub title: String,
    pub link: String,
}

impl Reference {
    /// Reads one entry of `response.reference`. Both keys must be present;
    /// values that are not strings are kept as their printed form.
    pub fn from_entry(entry: &Value) -> Result<Self, String> {
        let Some(fields) = entry.as_object() else {
            return Err(format!("expected an object, found {}", entry));
        };

        let field = |key: &str| {
            fields
                .get(key)
                .map(display_value)
                .ok_or_else(|| format!("missing field `{}`", key))
        };

        Ok(Self {
            title: field("title")?,
            link: field("link")?,
        })
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        other => other.to_string(),
    }
}
