use serde_json::Value;

/// A loaded module-like value, optionally wrapping its payload in a
/// `default` export.
#[derive(Debug, Clone, PartialEq)]
pub enum Module<T> {
    WithDefault { default: T },
    Plain(T),
}

impl<T> Module<T> {
    pub fn into_default(self) -> T {
        match self {
            Module::WithDefault { default } => default,
            Module::Plain(value) => value,
        }
    }

    pub fn has_default(&self) -> bool {
        matches!(self, Module::WithDefault { .. })
    }
}

impl Module<Value> {
    /// An object with a non-null `default` field is an envelope; anything
    /// else is taken verbatim.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(mut map) if map.get("default").is_some_and(|d| !d.is_null()) => {
                match map.remove("default") {
                    Some(default) => Module::WithDefault { default },
                    None => Module::Plain(Value::Object(map)),
                }
            }
            other => Module::Plain(other),
        }
    }
}

impl From<Value> for Module<Value> {
    fn from(value: Value) -> Self {
        Module::from_value(value)
    }
}
