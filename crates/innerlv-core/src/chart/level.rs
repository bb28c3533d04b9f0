use serde::{Deserialize, Serialize};
use strum::{EnumString, FromRepr, IntoStaticStr};

/// Coarse difficulty bracket covered by the inference ladder.
///
/// Each major level spans ten internal-level buckets: the plain bracket
/// holds `.0`-`.5` and the plus bracket `.6`-`.9`. Everything below "10"
/// carries no plus brackets upstream and is not tracked here.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, FromRepr, EnumString, IntoStaticStr,
)]
#[repr(u8)]
pub enum Level {
    #[strum(serialize = "10")]
    Lv10 = 0,
    #[strum(serialize = "10+")]
    Lv10Plus = 1,
    #[strum(serialize = "11")]
    Lv11 = 2,
    #[strum(serialize = "11+")]
    Lv11Plus = 3,
    #[strum(serialize = "12")]
    Lv12 = 4,
    #[strum(serialize = "12+")]
    Lv12Plus = 5,
    #[strum(serialize = "13")]
    Lv13 = 6,
    #[strum(serialize = "13+")]
    Lv13Plus = 7,
    #[strum(serialize = "14")]
    Lv14 = 8,
    #[strum(serialize = "14+")]
    Lv14Plus = 9,
    #[strum(serialize = "15")]
    Lv15 = 10,
}

impl Level {
    /// All brackets in increasing order; inference walks them exactly so.
    pub const LADDER: [Level; 11] = [
        Self::Lv10,
        Self::Lv10Plus,
        Self::Lv11,
        Self::Lv11Plus,
        Self::Lv12,
        Self::Lv12Plus,
        Self::Lv13,
        Self::Lv13Plus,
        Self::Lv14,
        Self::Lv14Plus,
        Self::Lv15,
    ];

    pub fn from_label(label: &str) -> Option<Self> {
        label.parse().ok()
    }

    pub fn label(&self) -> &'static str {
        self.into()
    }

    /// File stem used for this bracket's listing on disk ("12_plus" for "12+").
    pub fn file_stem(&self) -> &'static str {
        match self {
            Self::Lv10 => "10",
            Self::Lv10Plus => "10_plus",
            Self::Lv11 => "11",
            Self::Lv11Plus => "11_plus",
            Self::Lv12 => "12",
            Self::Lv12Plus => "12_plus",
            Self::Lv13 => "13",
            Self::Lv13Plus => "13_plus",
            Self::Lv14 => "14",
            Self::Lv14Plus => "14_plus",
            Self::Lv15 => "15",
        }
    }

    pub fn is_plus(&self) -> bool {
        *self as u8 % 2 == 1
    }

    /// Base internal level of this bracket, scaled by 10.
    pub fn base(&self) -> u16 {
        let major = 10 + (*self as u16) / 2;
        major * 10 + if self.is_plus() { 6 } else { 0 }
    }

    pub fn next(&self) -> Option<Self> {
        Self::from_repr(*self as u8 + 1)
    }

    /// Base of the following bracket, scaled by 10. Absent for the top one.
    pub fn next_base(&self) -> Option<u16> {
        self.next().map(|level| level.base())
    }

    /// Legal quantized values (scaled) for a chart declared at this bracket.
    ///
    /// Six values for plain brackets, four for plus brackets. The open-ended
    /// top bracket gets the plain-bracket allotment.
    pub fn legal_range(&self) -> std::ops::RangeInclusive<u16> {
        let top = match self.next_base() {
            Some(next_base) => next_base - 1,
            None => self.base() + 5,
        };
        self.base()..=top
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for Level {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("unknown level label: {label}")))
    }
}

/// Fine-grained internal level, stored as the value multiplied by 10.
///
/// Fixed-point storage keeps comparisons against bucket boundaries exact;
/// floats only appear at the serialization boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InternalLv(u16);

impl InternalLv {
    pub fn from_scaled(raw: u16) -> Self {
        Self(raw)
    }

    pub fn scaled(&self) -> u16 {
        self.0
    }

    pub fn value(&self) -> f64 {
        f64::from(self.0) / 10.0
    }

    /// Nearest one-decimal level for a raw number.
    pub fn from_value(value: f64) -> Self {
        Self((value * 10.0).round() as u16)
    }

    /// Accept a raw number only if it is a non-negative one-decimal value.
    pub fn from_value_exact(value: f64) -> Option<Self> {
        let scaled = value * 10.0;
        let rounded = scaled.round();
        if value >= 0.0 && (scaled - rounded).abs() < 1e-6 {
            Some(Self(rounded as u16))
        } else {
            None
        }
    }
}

impl std::fmt::Display for InternalLv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

impl Serialize for InternalLv {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}

impl<'de> Deserialize<'de> for InternalLv {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        InternalLv::from_value_exact(value).ok_or_else(|| {
            serde::de::Error::custom(format!("not a one-decimal internal level: {value}"))
        })
    }
}
