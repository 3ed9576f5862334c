//! Name case derivation.
//!
//! These four functions are the only case conversions in the crate. They
//! never reject input and are pure: the same input always yields the same
//! output.
//!
//! | Input          | pascal        | camel         | snake          |
//! |----------------|---------------|---------------|----------------|
//! | `user_profile` | `UserProfile` | `userProfile` | `user_profile` |
//! | `UserProfile`  | `UserProfile` | `userProfile` | `user_profile` |
//! | `home`         | `Home`        | `home`        | `home`         |

use crate::domain::error::DomainError;

/// Split on `_` and uppercase the first character of every segment.
pub fn to_pascal_case(input: &str) -> String {
    input.split('_').map(capitalize).collect()
}

/// The pascal form with only its first character lowercased.
pub fn to_camel_case(input: &str) -> String {
    let pascal = to_pascal_case(input);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Insert `_` before every uppercase letter, lowercase, drop one leading `_`.
pub fn to_snake_case(input: &str) -> String {
    separate(input, '_')
}

/// Same as [`to_snake_case`] with `-` as the separator.
pub fn to_kebab_case(input: &str) -> String {
    separate(input, '-')
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn separate(input: &str, separator: char) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    for c in input.chars() {
        if c.is_uppercase() {
            out.push(separator);
        }
        out.extend(c.to_lowercase());
    }

    match out.strip_prefix(separator) {
        Some(rest) => rest.to_string(),
        None => out,
    }
}

/// A validated feature identifier with every case variant derived up front.
///
/// File names and route paths use [`FeatureName::snake`]; class names use
/// [`FeatureName::pascal`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureName {
    raw: String,
    pascal: String,
    camel: String,
    snake: String,
    kebab: String,
}

impl FeatureName {
    /// Validate and derive.
    ///
    /// Accepts an ASCII letter followed by ASCII letters, digits or `_`.
    /// Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let raw = input.trim();

        let invalid = |reason: &str| DomainError::InvalidFeatureName {
            name: raw.to_string(),
            reason: reason.to_string(),
        };

        let mut chars = raw.chars();
        match chars.next() {
            None => return Err(invalid("name is empty")),
            Some(first) if !first.is_ascii_alphabetic() => {
                return Err(invalid("must start with a letter"));
            }
            Some(_) => {}
        }

        if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
            return Err(invalid(&format!("character '{bad}' is not allowed")));
        }

        let pascal = to_pascal_case(raw);
        Ok(Self {
            raw: raw.to_string(),
            camel: to_camel_case(raw),
            snake: to_snake_case(&pascal),
            kebab: to_kebab_case(&pascal),
            pascal,
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn pascal(&self) -> &str {
        &self.pascal
    }

    pub fn camel(&self) -> &str {
        &self.camel
    }

    pub fn snake(&self) -> &str {
        &self.snake
    }

    pub fn kebab(&self) -> &str {
        &self.kebab
    }
}

impl std::fmt::Display for FeatureName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.snake)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_from_snake() {
        assert_eq!(to_pascal_case("user_profile"), "UserProfile");
        assert_eq!(to_pascal_case("home"), "Home");
    }

    #[test]
    fn pascal_keeps_inner_capitals() {
        assert_eq!(to_pascal_case("userProfile"), "UserProfile");
    }

    #[test]
    fn pascal_collapses_repeated_underscores() {
        assert_eq!(to_pascal_case("user__profile"), "UserProfile");
        assert_eq!(to_pascal_case("_private"), "Private");
    }

    #[test]
    fn camel_lowers_only_first_character() {
        assert_eq!(to_camel_case("user_profile"), "userProfile");
        assert_eq!(to_camel_case("UserProfile"), "userProfile");
    }

    #[test]
    fn snake_from_pascal_and_camel() {
        assert_eq!(to_snake_case("UserProfile"), "user_profile");
        assert_eq!(to_snake_case("userProfile"), "user_profile");
        assert_eq!(to_snake_case("user_profile"), "user_profile");
    }

    #[test]
    fn snake_splits_every_capital() {
        assert_eq!(to_snake_case("HTTPClient"), "h_t_t_p_client");
    }

    #[test]
    fn kebab_uses_dashes() {
        assert_eq!(to_kebab_case("UserProfile"), "user-profile");
        assert_eq!(to_kebab_case("home"), "home");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(to_pascal_case(""), "");
        assert_eq!(to_camel_case(""), "");
        assert_eq!(to_snake_case(""), "");
        assert_eq!(to_kebab_case(""), "");
    }

    #[test]
    fn derivation_is_deterministic() {
        for input in ["user_profile", "UserProfile", "a_b_c", "x"] {
            assert_eq!(to_pascal_case(input), to_pascal_case(input));
            assert_eq!(to_snake_case(input), to_snake_case(input));
        }
    }

    #[test]
    fn feature_name_derives_variants() {
        let name = FeatureName::parse("user_profile").unwrap();
        assert_eq!(name.raw(), "user_profile");
        assert_eq!(name.pascal(), "UserProfile");
        assert_eq!(name.camel(), "userProfile");
        assert_eq!(name.snake(), "user_profile");
        assert_eq!(name.kebab(), "user-profile");
    }

    #[test]
    fn feature_name_from_pascal_input_keys_files_on_snake() {
        let name = FeatureName::parse("UserProfile").unwrap();
        assert_eq!(name.snake(), "user_profile");
        assert_eq!(name.pascal(), "UserProfile");
        assert_eq!(name.to_string(), "user_profile");
    }

    #[test]
    fn feature_name_trims_whitespace() {
        let name = FeatureName::parse("  settings2 ").unwrap();
        assert_eq!(name.raw(), "settings2");
    }

    #[test]
    fn feature_name_rejects_bad_input() {
        assert!(FeatureName::parse("").is_err());
        assert!(FeatureName::parse("   ").is_err());
        assert!(FeatureName::parse("2fa").is_err());
        assert!(FeatureName::parse("_hidden").is_err());
        assert!(FeatureName::parse("user-profile").is_err());
        assert!(FeatureName::parse("user profile").is_err());
    }

    #[test]
    fn rejection_names_offending_character() {
        let err = FeatureName::parse("user-profile").unwrap_err();
        assert!(err.to_string().contains("'-'"));
    }
}
