#![forbid(unsafe_code)]

//! Effect tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

/// The visual treatments the rendering layer knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectTag {
    Snowflakes,
    Confetti,
    Fireworks,
    Hearts,
    Spooky,
    Pride,
    Nice,
    Monthly,
    Rainbow,
    Sticker,
    None,
}

impl EffectTag {
    /// Every tag, in declaration order.
    pub const ALL: [Self; 11] = [
        Self::Snowflakes,
        Self::Confetti,
        Self::Fireworks,
        Self::Hearts,
        Self::Spooky,
        Self::Pride,
        Self::Nice,
        Self::Monthly,
        Self::Rainbow,
        Self::Sticker,
        Self::None,
    ];

    /// Wire name (lowercase).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Snowflakes => "snowflakes",
            Self::Confetti => "confetti",
            Self::Fireworks => "fireworks",
            Self::Hearts => "hearts",
            Self::Spooky => "spooky",
            Self::Pride => "pride",
            Self::Nice => "nice",
            Self::Monthly => "monthly",
            Self::Rainbow => "rainbow",
            Self::Sticker => "sticker",
            Self::None => "none",
        }
    }

    /// Human label for pickers and tooltips.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Snowflakes => "Snowflakes",
            Self::Confetti => "Confetti",
            Self::Fireworks => "Fireworks",
            Self::Hearts => "Hearts",
            Self::Spooky => "Spooky",
            Self::Pride => "Pride",
            Self::Nice => "Nice",
            Self::Monthly => "Monthly Colors",
            Self::Rainbow => "Rainbow",
            Self::Sticker => "Sticker",
            Self::None => "None",
        }
    }

    /// Whether the rendering layer runs a particle animation for this tag.
    /// `monthly` and `sticker` are static treatments.
    #[must_use]
    pub const fn is_animated(self) -> bool {
        !matches!(self, Self::None | Self::Monthly | Self::Sticker)
    }
}

impl fmt::Display for EffectTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A string that names no [`EffectTag`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEffectTag {
    pub raw: String,
}

impl fmt::Display for UnknownEffectTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown effect tag {:?}", self.raw)
    }
}

impl std::error::Error for UnknownEffectTag {}

impl FromStr for EffectTag {
    type Err = UnknownEffectTag;

    /// Exact, lowercase match only, so a parsed tag always prints back as the
    /// text it came from.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| UnknownEffectTag { raw: s.to_string() })
    }
}

/// What the resolver hands to the rendering layer.
///
/// Saved effects come from the server and may be newer than this build, so a
/// saved value that names no known tag is carried through verbatim as
/// [`Effect::Unrecognized`]; drawing a fallback for it is the renderer's call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Effect {
    Tag(EffectTag),
    Unrecognized(String),
}

impl Effect {
    /// The empty treatment.
    pub const NONE: Self = Self::Tag(EffectTag::None);

    /// Interpret a persisted effect string.
    #[must_use]
    pub fn from_saved(saved: &str) -> Self {
        saved
            .parse::<EffectTag>()
            .map_or_else(|_| Self::Unrecognized(saved.to_string()), Self::Tag)
    }

    /// Known tag, if any.
    #[must_use]
    pub fn tag(&self) -> Option<EffectTag> {
        match self {
            Self::Tag(tag) => Some(*tag),
            Self::Unrecognized(_) => None,
        }
    }

    /// Exact text of the effect; saved strings round-trip byte for byte.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Tag(tag) => tag.as_str(),
            Self::Unrecognized(raw) => raw,
        }
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::Tag(EffectTag::None))
    }
}

impl From<EffectTag> for Effect {
    fn from(tag: EffectTag) -> Self {
        Self::Tag(tag)
    }
}

impl PartialEq<EffectTag> for Effect {
    fn eq(&self, other: &EffectTag) -> bool {
        self.tag() == Some(*other)
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Effect {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Effect {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_saved(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for tag in EffectTag::ALL {
            assert_eq!(tag.as_str().parse::<EffectTag>(), Ok(tag));
            assert_eq!(tag.to_string(), tag.as_str());
        }
    }

    #[test]
    fn parse_is_exact() {
        assert!("Spooky".parse::<EffectTag>().is_err());
        assert!(" spooky".parse::<EffectTag>().is_err());
        assert_eq!(
            "aurora".parse::<EffectTag>(),
            Err(UnknownEffectTag {
                raw: "aurora".into()
            })
        );
    }

    #[test]
    fn animated_tags() {
        assert!(EffectTag::Fireworks.is_animated());
        assert!(EffectTag::Rainbow.is_animated());
        assert!(!EffectTag::Monthly.is_animated());
        assert!(!EffectTag::Sticker.is_animated());
        assert!(!EffectTag::None.is_animated());
    }

    #[test]
    fn saved_known_and_unknown() {
        assert_eq!(Effect::from_saved("spooky"), Effect::Tag(EffectTag::Spooky));
        let odd = Effect::from_saved("Aurora-Borealis");
        assert_eq!(odd, Effect::Unrecognized("Aurora-Borealis".into()));
        assert_eq!(odd.as_str(), "Aurora-Borealis");
        assert_eq!(odd.tag(), None);
        assert!(!odd.is_none());
        assert!(Effect::NONE.is_none());
    }

    #[test]
    fn compares_against_tags() {
        assert_eq!(Effect::from(EffectTag::Nice), EffectTag::Nice);
        assert_ne!(Effect::Unrecognized("nice ".into()), EffectTag::Nice);
    }

    #[test]
    fn serde_as_plain_string() {
        assert_eq!(
            serde_json::to_string(&Effect::Tag(EffectTag::Hearts)).unwrap(),
            "\"hearts\""
        );
        assert_eq!(
            serde_json::to_string(&Effect::Unrecognized("aurora".into())).unwrap(),
            "\"aurora\""
        );
        let back: Effect = serde_json::from_str("\"rainbow\"").unwrap();
        assert_eq!(back, EffectTag::Rainbow);
        let tag: EffectTag = serde_json::from_str("\"snowflakes\"").unwrap();
        assert_eq!(tag, EffectTag::Snowflakes);
    }
}
