// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light emitter addressing.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Feature id of the front (white) light.
pub const FRONT_FEATURE_ID: u8 = 0x06;

/// Feature id of the back light's power and brightness controls.
pub const BACK_FEATURE_ID: u8 = 0x0A;

/// Feature id of the back light's RGB zone controls.
///
/// Zone colors live on their own feature, separate from back-light power.
pub const BACK_COLOR_FEATURE_ID: u8 = 0x0C;

/// One of the two physical emitters of the Litra Beam LX.
///
/// # Examples
///
/// ```
/// use litra_lib::types::LightTarget;
///
/// assert_eq!(LightTarget::Front.feature_id(), 0x06);
/// assert_eq!(LightTarget::Back.feature_id(), 0x0A);
/// assert!(LightTarget::Back.supports_color());
/// assert!(!LightTarget::Front.supports_color());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightTarget {
    /// The front white light with adjustable color temperature.
    Front,
    /// The back RGB bar.
    Back,
}

impl LightTarget {
    /// Both emitters, front first.
    pub const ALL: [Self; 2] = [Self::Front, Self::Back];

    /// Returns the device feature id addressed by power and brightness reports.
    #[must_use]
    pub const fn feature_id(&self) -> u8 {
        match self {
            Self::Front => FRONT_FEATURE_ID,
            Self::Back => BACK_FEATURE_ID,
        }
    }

    /// Returns true if the emitter has a color temperature control.
    #[must_use]
    pub const fn supports_temperature(&self) -> bool {
        matches!(self, Self::Front)
    }

    /// Returns true if the emitter has RGB zones.
    #[must_use]
    pub const fn supports_color(&self) -> bool {
        matches!(self, Self::Back)
    }

    /// Returns the lowercase name of the emitter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Back => "back",
        }
    }
}

impl fmt::Display for LightTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LightTarget {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "front" => Ok(Self::Front),
            "back" => Ok(Self::Back),
            _ => Err(ValueError::UnknownTarget(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_ids() {
        assert_eq!(LightTarget::Front.feature_id(), 0x06);
        assert_eq!(LightTarget::Back.feature_id(), 0x0A);
        assert_ne!(BACK_COLOR_FEATURE_ID, LightTarget::Back.feature_id());
    }

    #[test]
    fn capabilities_are_disjoint() {
        assert!(LightTarget::Front.supports_temperature());
        assert!(!LightTarget::Front.supports_color());
        assert!(LightTarget::Back.supports_color());
        assert!(!LightTarget::Back.supports_temperature());
    }

    #[test]
    fn parse_from_str() {
        assert_eq!("front".parse::<LightTarget>().unwrap(), LightTarget::Front);
        assert_eq!("BACK".parse::<LightTarget>().unwrap(), LightTarget::Back);
        assert!("side".parse::<LightTarget>().is_err());
    }

    #[test]
    fn serde_lowercase() {
        let json = serde_json::to_string(&LightTarget::Back).unwrap();
        assert_eq!(json, "\"back\"");
        let parsed: LightTarget = serde_json::from_str("\"front\"").unwrap();
        assert_eq!(parsed, LightTarget::Front);
    }
}
