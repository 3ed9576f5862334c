//! Idempotent text insertion into registry files.
//!
//! A registry file is a source file that lists one entry per feature: the
//! route-name constants, the route-to-page map, the dependency-injection
//! list and the package manifest. Entries are added with a plain substring
//! check ("is the sentinel already there?") and a [`Locator`] that knows
//! where the entry goes. Nothing here touches the filesystem.

use std::fmt;
use std::sync::Arc;

use regex::Regex;
use serde::Serialize;

use crate::domain::error::DomainError;

/// Finds the insertion point inside a file's content.
///
/// The regex-based [`PatternLocator`] is the only container-aware
/// implementation today; a real Dart parser can slot in behind this trait.
pub trait Locator: fmt::Debug + Send + Sync {
    /// Returns the content with `insertion` placed, or `None` when the
    /// container could not be found.
    fn insert(&self, content: &str, insertion: &str) -> Option<String>;
}

/// Regex locator with three named groups: `open`, `body` and `close`.
///
/// The first match is rewritten to `open + body + insertion + close`, with a
/// line break added before the insertion only when the body does not already
/// end one, and one after it.
#[derive(Debug, Clone)]
pub struct PatternLocator {
    regex: Regex,
}

impl PatternLocator {
    pub fn new(pattern: &str) -> Result<Self, DomainError> {
        let regex = Regex::new(pattern).map_err(|e| DomainError::InvalidLocator {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;

        for group in ["open", "body", "close"] {
            if !regex.capture_names().flatten().any(|name| name == group) {
                return Err(DomainError::InvalidLocator {
                    pattern: pattern.to_string(),
                    reason: format!("missing named group '{group}'"),
                });
            }
        }

        Ok(Self { regex })
    }
}

impl Locator for PatternLocator {
    fn insert(&self, content: &str, insertion: &str) -> Option<String> {
        let caps = self.regex.captures(content)?;
        let whole = caps.get(0)?;
        let open = caps.name("open").map_or("", |m| m.as_str());
        let body = caps.name("body").map_or("", |m| m.as_str());
        let close = caps.name("close").map_or("", |m| m.as_str());

        let mut replacement = String::with_capacity(whole.len() + insertion.len() + 2);
        replacement.push_str(open);
        replacement.push_str(trim_dangling_indent(body));
        if !replacement.ends_with('\n') {
            replacement.push('\n');
        }
        replacement.push_str(insertion);
        replacement.push('\n');
        replacement.push_str(close);

        let mut out = String::with_capacity(content.len() + insertion.len() + 2);
        out.push_str(&content[..whole.start()]);
        out.push_str(&replacement);
        out.push_str(&content[whole.end()..]);
        Some(out)
    }
}

/// Drop the indentation that precedes a closing delimiter the pattern did
/// not capture, so the insertion starts on a clean line.
fn trim_dangling_indent(body: &str) -> &str {
    let trimmed = body.trim_end_matches([' ', '\t']);
    if trimmed.is_empty() || trimmed.ends_with('\n') {
        trimmed
    } else {
        body
    }
}

/// Places the insertion on its own line at the top of the file.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrependLocator;

impl Locator for PrependLocator {
    fn insert(&self, content: &str, insertion: &str) -> Option<String> {
        Some(format!("{insertion}\n{content}"))
    }
}

/// What happened to one requested entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatchOutcome {
    /// The file did not exist; it was created from its skeleton with the entry.
    Created,
    Inserted,
    AlreadyPresent,
    /// The locator matched nothing. The file was left unchanged.
    ContainerNotFound,
}

impl fmt::Display for PatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Created => "created",
            Self::Inserted => "inserted",
            Self::AlreadyPresent => "already present",
            Self::ContainerNotFound => "container not found",
        };
        f.write_str(text)
    }
}

/// One entry to ensure in a registry file.
#[derive(Debug, Clone)]
pub struct InsertionRequest {
    sentinel: String,
    insertion: String,
    locator: Arc<dyn Locator>,
}

impl InsertionRequest {
    pub fn new(
        sentinel: impl Into<String>,
        insertion: impl Into<String>,
        locator: Arc<dyn Locator>,
    ) -> Self {
        Self {
            sentinel: sentinel.into(),
            insertion: insertion.into(),
            locator,
        }
    }

    /// A request whose sentinel is the inserted text itself.
    pub fn entry(insertion: impl Into<String>, locator: Arc<dyn Locator>) -> Self {
        let insertion = insertion.into();
        Self::new(insertion.clone(), insertion, locator)
    }

    pub fn insertion(&self) -> &str {
        &self.insertion
    }

    /// True when the trimmed sentinel already occurs anywhere in `content`.
    ///
    /// Containment is by substring, so a sentinel that happens to be part of
    /// an unrelated line counts as present.
    pub fn is_present(&self, content: &str) -> bool {
        let needle = self.sentinel.trim();
        !needle.is_empty() && content.contains(needle)
    }

    /// Apply the request to `content`.
    ///
    /// Returns [`PatchOutcome::Inserted`] with the new content,
    /// or the unchanged content with `AlreadyPresent` / `ContainerNotFound`.
    pub fn apply(&self, content: &str) -> (PatchOutcome, String) {
        if self.is_present(content) {
            return (PatchOutcome::AlreadyPresent, content.to_string());
        }

        match self.locator.insert(content, &self.insertion) {
            Some(patched) => (PatchOutcome::Inserted, patched),
            None => (PatchOutcome::ContainerNotFound, content.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROUTES: &str = "class AppRoutes {\n  // Feature routes\n}\n";

    fn class_locator() -> Arc<dyn Locator> {
        Arc::new(PatternLocator::new(r"(?P<open>class AppRoutes \{)(?P<body>[\s\S]*?)(?P<close>\})").unwrap())
    }

    fn map_locator() -> Arc<dyn Locator> {
        Arc::new(PatternLocator::new(r"(?P<open>return \{)(?P<body>[\s\S]*?)(?P<close>[ \t]*\};)").unwrap())
    }

    #[test]
    fn inserts_before_closing_brace() {
        let request = InsertionRequest::entry(
            "  static const String home = '/home';",
            class_locator(),
        );

        let (outcome, content) = request.apply(ROUTES);

        assert_eq!(outcome, PatchOutcome::Inserted);
        assert_eq!(
            content,
            "class AppRoutes {\n  // Feature routes\n  static const String home = '/home';\n}\n"
        );
    }

    #[test]
    fn second_apply_is_a_no_op() {
        let request = InsertionRequest::entry("  static const String home = '/home';", class_locator());

        let (_, once) = request.apply(ROUTES);
        let (outcome, twice) = request.apply(&once);

        assert_eq!(outcome, PatchOutcome::AlreadyPresent);
        assert_eq!(once, twice);
    }

    #[test]
    fn entries_accumulate_in_order() {
        let home = InsertionRequest::entry("  static const String home = '/home';", class_locator());
        let about = InsertionRequest::entry("  static const String about = '/about';", class_locator());

        let (_, content) = home.apply(ROUTES);
        let (_, content) = about.apply(&content);

        let home_at = content.find("home").unwrap();
        let about_at = content.find("about").unwrap();
        assert!(home_at < about_at);
        assert!(content.ends_with("'/about';\n}\n"));
    }

    #[test]
    fn empty_container_gets_a_line_break() {
        let request = InsertionRequest::entry("  static const String home = '/home';", class_locator());
        let (_, content) = request.apply("class AppRoutes {}");
        assert_eq!(content, "class AppRoutes {\n  static const String home = '/home';\n}");
    }

    #[test]
    fn closing_indent_is_preserved_when_captured() {
        let skeleton = "    return {\n      // Route mappings\n    };\n";
        let request = InsertionRequest::entry(
            "      AppRoutes.home: (context) => const HomePage(),",
            map_locator(),
        );

        let (_, content) = request.apply(skeleton);

        assert_eq!(
            content,
            "    return {\n      // Route mappings\n      AppRoutes.home: (context) => const HomePage(),\n    };\n"
        );
    }

    #[test]
    fn sentinel_match_ignores_surrounding_whitespace() {
        let request = InsertionRequest::entry("      AppRoutes.home: (context) => const HomePage(),", map_locator());
        let content = "return {\nAppRoutes.home: (context) => const HomePage(),\n};";
        assert_eq!(request.apply(content).0, PatchOutcome::AlreadyPresent);
    }

    #[test]
    fn substring_sentinel_counts_as_present() {
        let request = InsertionRequest::entry("static const String home", class_locator());
        let content = "class AppRoutes {\n  static const String homepage = '/x';\n}";
        assert_eq!(request.apply(content).0, PatchOutcome::AlreadyPresent);
    }

    #[test]
    fn missing_container_leaves_content_unchanged() {
        let request = InsertionRequest::entry("  static const String home = '/home';", class_locator());
        let content = "class SomethingElse {}\n";

        let (outcome, after) = request.apply(content);

        assert_eq!(outcome, PatchOutcome::ContainerNotFound);
        assert_eq!(after, content);
    }

    #[test]
    fn prepend_puts_line_first() {
        let request = InsertionRequest::entry(
            "import '../pages/home/home_page.dart';",
            Arc::new(PrependLocator),
        );
        let (outcome, content) = request.apply("import 'app_routes.dart';\n");
        assert_eq!(outcome, PatchOutcome::Inserted);
        assert_eq!(
            content,
            "import '../pages/home/home_page.dart';\nimport 'app_routes.dart';\n"
        );
    }

    #[test]
    fn pattern_without_named_groups_is_rejected() {
        let err = PatternLocator::new(r"class AppRoutes \{").unwrap_err();
        assert!(matches!(err, DomainError::InvalidLocator { .. }));
    }

    #[test]
    fn malformed_pattern_is_rejected() {
        assert!(PatternLocator::new(r"(?P<open>(").is_err());
    }

    #[test]
    fn only_first_container_is_patched() {
        let content = "class AppRoutes {\n}\nclass AppRoutes {\n}\n";
        let request = InsertionRequest::entry("  x", class_locator());
        let (_, after) = request.apply(content);
        assert_eq!(after.matches("  x").count(), 1);
        assert!(after.starts_with("class AppRoutes {\n  x\n}"));
    }
}
