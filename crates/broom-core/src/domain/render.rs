//! `{{key}}` placeholder substitution.

use std::collections::HashMap;

use crate::domain::naming::FeatureName;

/// Variables available to a template.
///
/// Rendering replaces every `{{key}}` for every known key. Unknown
/// placeholders stay in the output verbatim and values are not escaped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context seeded with every case variant of a feature name.
    ///
    /// | Key           | Value for `user_profile` |
    /// |---------------|--------------------------|
    /// | `featureName` | `user_profile`           |
    /// | `snakeName`   | `user_profile`           |
    /// | `pascalName`  | `UserProfile`            |
    /// | `camelName`   | `userProfile`            |
    /// | `kebabName`   | `user-profile`           |
    pub fn for_feature(name: &FeatureName) -> Self {
        Self::new()
            .with_variable("featureName", name.snake())
            .with_variable("snakeName", name.snake())
            .with_variable("pascalName", name.pascal())
            .with_variable("camelName", name.camel())
            .with_variable("kebabName", name.kebab())
    }

    /// Add a variable, consuming self. Later values replace earlier ones.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Replace `{{key}}` placeholders.
    ///
    /// - `{{unknown}}` remains literal
    /// - `{{a}}{{a}}` replaces both
    /// - `{{{a}}}` keeps the outer braces
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();

        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }

        result
    }
}
