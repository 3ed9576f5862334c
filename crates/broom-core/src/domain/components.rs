//! Reusable UI and utility components.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::{error::DomainError, layout::Location, templates::components as body};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentCategory {
    Widget,
    Theme,
    Utils,
}

/// A component file and its body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentFile {
    pub file_name: &'static str,
    pub body: &'static str,
}

const fn file(file_name: &'static str, body: &'static str) -> ComponentFile {
    ComponentFile { file_name, body }
}

const BUTTON: ComponentFile = file("custom_button.dart", body::CUSTOM_BUTTON);
const CARD: ComponentFile = file("custom_card.dart", body::CUSTOM_CARD);
const TEXT_FIELD: ComponentFile = file("custom_text_field.dart", body::CUSTOM_TEXT_FIELD);
const COLORS: ComponentFile = file("app_colors.dart", body::APP_COLORS);
const TYPOGRAPHY: ComponentFile = file("app_typography.dart", body::APP_TYPOGRAPHY);
const THEME: ComponentFile = file("app_theme.dart", body::APP_THEME);
const FORMAT: ComponentFile = file("format_utils.dart", body::FORMAT_UTILS);
const MAHAS: ComponentFile = file("mahas_utils.dart", body::MAHAS_UTILS);
const TYPE: ComponentFile = file("type_utils.dart", body::TYPE_UTILS);

impl ComponentCategory {
    pub const ALL: [Self; 3] = [Self::Widget, Self::Theme, Self::Utils];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Widget => "widget",
            Self::Theme => "theme",
            Self::Utils => "utils",
        }
    }

    pub const fn options(self) -> &'static [&'static str] {
        match self {
            Self::Widget => &["button", "card", "input"],
            Self::Theme => &["colors", "typography", "complete"],
            Self::Utils => &["format", "mahas", "type", "all"],
        }
    }

    pub const fn location(self) -> Location {
        match self {
            Self::Widget => Location::MahasWidget,
            Self::Theme => Location::CoreTheme,
            Self::Utils => Location::CoreUtils,
        }
    }

    /// Files generated for `option`. Composite options expand to several.
    pub fn files(self, option: &str) -> Result<Vec<ComponentFile>, DomainError> {
        let files = match (self, option.trim().to_ascii_lowercase().as_str()) {
            (Self::Widget, "button") => vec![BUTTON],
            (Self::Widget, "card") => vec![CARD],
            (Self::Widget, "input") => vec![TEXT_FIELD],
            (Self::Theme, "colors") => vec![COLORS],
            (Self::Theme, "typography") => vec![TYPOGRAPHY],
            (Self::Theme, "complete") => vec![COLORS, TYPOGRAPHY, THEME],
            (Self::Utils, "format") => vec![FORMAT],
            (Self::Utils, "mahas") => vec![MAHAS],
            (Self::Utils, "type") => vec![TYPE],
            (Self::Utils, "all") => vec![FORMAT, MAHAS, TYPE],
            _ => {
                return Err(DomainError::UnknownOption {
                    category: self.as_str(),
                    option: option.to_string(),
                    available: self.options().to_vec(),
                });
            }
        };
        Ok(files)
    }
}

impl fmt::Display for ComponentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == wanted)
            .ok_or_else(|| DomainError::UnknownOption {
                category: "component category",
                option: s.to_string(),
                available: Self::ALL.iter().map(|c| c.as_str()).collect(),
            })
    }
}
