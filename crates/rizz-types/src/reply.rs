//! Reply request types: the slider scales and the style palette the user
//! picks from before asking for a generated reply.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use crate::error::{ScaleError, StyleParseError};

/// An integer slider value in `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Scale(u8);

impl Scale {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(value: u8) -> Result<Self, ScaleError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ScaleError::OutOfRange(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self(5)
    }
}

impl TryFrom<u8> for Scale {
    type Error = ScaleError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Scale::new(value)
    }
}

impl From<Scale> for u8 {
    fn from(scale: Scale) -> Self {
        scale.0
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Scale {
    type Err = ScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u8 = s
            .trim()
            .parse()
            .map_err(|_| ScaleError::NotANumber(s.to_string()))?;
        Scale::new(value)
    }
}

/// The closed set of response styles offered by the style grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReplyStyle {
    Continue,
    End,
    #[default]
    Neutral,
    Playful,
    Serious,
    Flirty,
    Mysterious,
    Witty,
    Caring,
    Cool,
}

impl ReplyStyle {
    /// Every style, in grid order.
    pub const ALL: [ReplyStyle; 10] = [
        ReplyStyle::Continue,
        ReplyStyle::End,
        ReplyStyle::Neutral,
        ReplyStyle::Playful,
        ReplyStyle::Serious,
        ReplyStyle::Flirty,
        ReplyStyle::Mysterious,
        ReplyStyle::Witty,
        ReplyStyle::Caring,
        ReplyStyle::Cool,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ReplyStyle::Continue => "CONTINUE",
            ReplyStyle::End => "END",
            ReplyStyle::Neutral => "NEUTRAL",
            ReplyStyle::Playful => "PLAYFUL",
            ReplyStyle::Serious => "SERIOUS",
            ReplyStyle::Flirty => "FLIRTY",
            ReplyStyle::Mysterious => "MYSTERIOUS",
            ReplyStyle::Witty => "WITTY",
            ReplyStyle::Caring => "CARING",
            ReplyStyle::Cool => "COOL",
        }
    }

    /// Short guidance embedded into the composed prompt.
    pub fn hint(self) -> &'static str {
        match self {
            ReplyStyle::Continue => "keep the conversation going and give them something to answer",
            ReplyStyle::End => "wrap the conversation up politely without leaving an opening",
            ReplyStyle::Neutral => "stay friendly and even, without leaning in any direction",
            ReplyStyle::Playful => "be light and teasing, have a bit of fun",
            ReplyStyle::Serious => "be sincere and direct, no jokes",
            ReplyStyle::Flirty => "be charming with a clear romantic undertone",
            ReplyStyle::Mysterious => "hold something back and leave them curious",
            ReplyStyle::Witty => "lead with a clever line or a quick comeback",
            ReplyStyle::Caring => "be warm and attentive to how they are feeling",
            ReplyStyle::Cool => "stay relaxed and low-effort, never eager",
        }
    }
}

impl fmt::Display for ReplyStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ReplyStyle {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        ReplyStyle::ALL
            .into_iter()
            .find(|style| style.label() == wanted)
            .ok_or_else(|| StyleParseError(s.to_string()))
    }
}

/// Everything the user picks before asking for a reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyRequest {
    /// The message the user received and wants to answer.
    pub message: String,
    /// How interested the user is in the other person.
    #[serde(default)]
    pub interest: Scale,
    /// How intense the reply should be.
    #[serde(default)]
    pub tone: Scale,
    #[serde(default)]
    pub style: ReplyStyle,
}

impl ReplyRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            interest: Scale::default(),
            tone: Scale::default(),
            style: ReplyStyle::default(),
        }
    }

    pub fn with_interest(mut self, interest: Scale) -> Self {
        self.interest = interest;
        self
    }

    pub fn with_tone(mut self, tone: Scale) -> Self {
        self.tone = tone;
        self
    }

    pub fn with_style(mut self, style: ReplyStyle) -> Self {
        self.style = style;
        self
    }
}
