use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {context} color: {key}")]
pub struct UnknownColor {
    pub context: StyleContext,
    pub key: String,
}

/// Where a color key is being applied. Each context has its own closed set of keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleContext {
    SkillTitle,
    TagPill,
}

impl std::fmt::Display for StyleContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SkillTitle => write!(f, "skill-title"),
            Self::TagPill => write!(f, "tag-pill"),
        }
    }
}

/// Heading colors for skill cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillColor {
    Cyan,
    Teal,
    Amber,
    Emerald,
}

impl SkillColor {
    pub fn class(self) -> &'static str {
        match self {
            Self::Cyan => "text-cyan-600",
            Self::Teal => "text-teal-600",
            Self::Amber => "text-amber-600",
            Self::Emerald => "text-emerald-600",
        }
    }
}

impl FromStr for SkillColor {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cyan" => Ok(Self::Cyan),
            "teal" => Ok(Self::Teal),
            "amber" => Ok(Self::Amber),
            "emerald" => Ok(Self::Emerald),
            _ => Err(UnknownColor {
                context: StyleContext::SkillTitle,
                key: s.to_string(),
            }),
        }
    }
}

/// Pill colors for project tags. Not the same set as [`SkillColor`]: orange and lime only
/// exist here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagColor {
    Cyan,
    Teal,
    Emerald,
    Amber,
    Orange,
    Lime,
}

impl TagColor {
    pub fn class(self) -> &'static str {
        match self {
            Self::Cyan => "bg-cyan-100 text-cyan-700",
            Self::Teal => "bg-teal-100 text-teal-700",
            Self::Emerald => "bg-emerald-100 text-emerald-700",
            Self::Amber => "bg-amber-100 text-amber-700",
            Self::Orange => "bg-orange-100 text-orange-700",
            Self::Lime => "bg-lime-100 text-lime-700",
        }
    }
}

impl FromStr for TagColor {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cyan" => Ok(Self::Cyan),
            "teal" => Ok(Self::Teal),
            "emerald" => Ok(Self::Emerald),
            "amber" => Ok(Self::Amber),
            "orange" => Ok(Self::Orange),
            "lime" => Ok(Self::Lime),
            _ => Err(UnknownColor {
                context: StyleContext::TagPill,
                key: s.to_string(),
            }),
        }
    }
}

/// Look up the utility classes for `key` in the table belonging to `context`.
///
/// Never fails: a key outside the context's set resolves to an empty style and the element
/// is rendered unstyled.
pub fn resolve_style(key: &str, context: StyleContext) -> &'static str {
    let style = match context {
        StyleContext::SkillTitle => key.parse::<SkillColor>().map(SkillColor::class),
        StyleContext::TagPill => key.parse::<TagColor>().map(TagColor::class),
    };
    style.unwrap_or("")
}

/// Append a resolved style to a base class list.
pub fn with_style(base: &str, style: &str) -> String {
    if style.is_empty() {
        base.to_string()
    } else {
        format!("{base} {style}")
    }
}
