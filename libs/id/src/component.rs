//! Ancestry components.

use crate::IdError;

/// One ancestry key: an integer in `0..=0x7FFF_FFFF_FFFF_FFFF`.
///
/// The upper bound keeps every component representable as a signed 64-bit
/// integer; values needing the 64th bit are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Component(u64);

impl Component {
    /// The smallest component.
    pub const MIN: Self = Self(0);

    /// The largest component, `0x7FFF_FFFF_FFFF_FFFF`.
    pub const MAX: Self = Self(i64::MAX as u64);

    /// Creates a component, rejecting values above [`Component::MAX`].
    pub fn new(value: u64) -> Result<Self, IdError> {
        if value > Self::MAX.0 {
            return Err(IdError::ComponentOutOfRange {
                value: i128::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Returns the underlying value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::UpperHex for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::UpperHex::fmt(&self.0, f)
    }
}

impl std::fmt::LowerHex for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::LowerHex::fmt(&self.0, f)
    }
}

impl From<u32> for Component {
    fn from(value: u32) -> Self {
        Self(u64::from(value))
    }
}

impl TryFrom<u64> for Component {
    type Error = IdError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for Component {
    type Error = IdError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map(Self)
            .map_err(|_| IdError::ComponentOutOfRange {
                value: i128::from(value),
            })
    }
}

impl From<Component> for u64 {
    fn from(component: Component) -> Self {
        component.0
    }
}

impl From<Component> for i64 {
    fn from(component: Component) -> Self {
        // MAX fits in i64 by construction.
        component.0 as i64
    }
}

impl serde::Serialize for Component {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u64(self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Component {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u64::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
