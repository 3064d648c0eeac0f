use std::collections::HashMap;

/// Resolves $VARIABLE references in configured archive file names
#[derive(Default)]
pub struct Vars {
    values: HashMap<String, String>,
}

impl Vars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a variable with its value
    pub fn set<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.values.insert(key.into(), value.into());
    }

    /// Expand all $VARIABLE references in the input; unknown variables
    /// are left untouched
    pub fn expand(&self, input: &str) -> String {
        let mut result = input.to_string();

        for (key, value) in &self.values {
            let pattern = format!("${}", key);
            result = result.replace(&pattern, value);
        }

        result
    }
}
