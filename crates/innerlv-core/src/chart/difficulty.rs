use serde::{Deserialize, Serialize};
use strum::{EnumString, FromRepr, IntoStaticStr};

/// The five difficulty slots of a chart.
///
/// Listings index slots numerically, so the serde form is the bare index;
/// the short names only appear on the review sheet.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, FromRepr, EnumString, IntoStaticStr,
)]
#[repr(u8)]
pub enum Difficulty {
    #[strum(serialize = "bsc")]
    Basic = 0,
    #[strum(serialize = "adv")]
    Advanced = 1,
    #[strum(serialize = "exp")]
    Expert = 2,
    #[strum(serialize = "mas")]
    Master = 3,
    #[strum(serialize = "rem")]
    ReMaster = 4,
}

impl Difficulty {
    pub const ALL: [Difficulty; 5] = [
        Self::Basic,
        Self::Advanced,
        Self::Expert,
        Self::Master,
        Self::ReMaster,
    ];

    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    pub fn index(&self) -> u8 {
        *self as u8
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

impl Serialize for Difficulty {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

impl<'de> Deserialize<'de> for Difficulty {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = u8::deserialize(deserializer)?;
        Self::from_repr(value)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid difficulty slot: {value}")))
    }
}
