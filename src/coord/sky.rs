//! Celestial coordinate value and reference frames.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Celestial reference frame a [`SkyCoord`] is expressed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkyFrame {
    #[default]
    Icrs,
    Fk5,
    Galactic,
}

impl SkyFrame {
    /// Lowercase frame name as used in descriptors and region files.
    pub fn as_str(&self) -> &'static str {
        match self {
            SkyFrame::Icrs => "icrs",
            SkyFrame::Fk5 => "fk5",
            SkyFrame::Galactic => "galactic",
        }
    }
}

impl fmt::Display for SkyFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A position on the celestial sphere.
///
/// `lon` and `lat` are in degrees (RA/Dec for equatorial frames, l/b for
/// galactic). Construction does not normalize or range-check; WCS
/// transforms reject non-finite input.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkyCoord {
    pub lon: f64,
    pub lat: f64,
    #[serde(default)]
    pub frame: SkyFrame,
}

impl SkyCoord {
    /// Creates a coordinate in the given frame.
    #[inline]
    pub fn new(lon: f64, lat: f64, frame: SkyFrame) -> Self {
        Self { lon, lat, frame }
    }

    /// Creates an ICRS coordinate from RA and Dec in degrees.
    #[inline]
    pub fn icrs(ra: f64, dec: f64) -> Self {
        Self::new(ra, dec, SkyFrame::Icrs)
    }

    /// Right ascension (or longitude) in degrees.
    #[inline]
    pub fn ra(&self) -> f64 {
        self.lon
    }

    /// Declination (or latitude) in degrees.
    #[inline]
    pub fn dec(&self) -> f64 {
        self.lat
    }

    /// Returns true if both angles are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }

    /// Great-circle separation to another coordinate, in degrees.
    ///
    /// Uses the haversine formula, which stays accurate for the tiny
    /// separations seen in round-trip checks. Frames are not reconciled.
    pub fn separation(&self, other: &SkyCoord) -> f64 {
        let (lat1, lat2) = (self.lat.to_radians(), other.lat.to_radians());
        let dlat = lat2 - lat1;
        let dlon = (other.lon - self.lon).to_radians();
        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        (2.0 * a.sqrt().min(1.0).asin()).to_degrees()
    }
}

impl fmt::Display for SkyCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}°, {}°) {}", self.lon, self.lat, self.frame)
    }
}
