use serde::Deserialize;

/// Common `name` field of every object a manager loads from JSON.
#[derive(Clone, Deserialize)]
pub struct NamedJsonObject {
    name: String
}

impl NamedJsonObject {
    pub fn name(&self) -> &str {
        &self.name
    }
}
