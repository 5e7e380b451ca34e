//! Gnomonic (TAN) world coordinate system.
//!
//! FITS conventions: CRPIX is 1-based, while [`PixCoord`] is 0-based (the
//! first pixel's center is (0, 0)). CRVAL and the CD matrix are in degrees.
//!
//! Reference: Calabretta & Greisen (2002), FITS WCS Paper II, §5.1.1.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{CoordinateTransformError, WcsTransform};
use crate::coord::{PixCoord, SkyCoord, SkyFrame};

/// A TAN projection described by CRPIX, CRVAL and a CD matrix.
///
/// Always valid once constructed: the CD matrix is invertible and every
/// parameter is finite.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TanWcsDescriptor")]
pub struct TanWcs {
    crpix: [f64; 2],
    crval: [f64; 2],
    cd: [[f64; 2]; 2],
    #[serde(skip)]
    cd_inv: [[f64; 2]; 2],
    frame: SkyFrame,
}

/// Serialized form of [`TanWcs`]; accepts either a CD matrix or CDELT plus
/// an optional rotation (CROTA2, degrees).
#[derive(Deserialize)]
struct TanWcsDescriptor {
    crpix: [f64; 2],
    crval: [f64; 2],
    #[serde(default)]
    cd: Option<[[f64; 2]; 2]>,
    #[serde(default)]
    cdelt: Option<[f64; 2]>,
    #[serde(default)]
    crota: f64,
    #[serde(default)]
    frame: SkyFrame,
}

impl TryFrom<TanWcsDescriptor> for TanWcs {
    type Error = CoordinateTransformError;

    fn try_from(desc: TanWcsDescriptor) -> Result<Self, Self::Error> {
        match (desc.cd, desc.cdelt) {
            (Some(cd), None) => TanWcs::new(desc.crpix, desc.crval, cd, desc.frame),
            (None, Some(cdelt)) => {
                TanWcs::from_cdelt(desc.crpix, desc.crval, cdelt, desc.crota, desc.frame)
            }
            (Some(_), Some(_)) => Err(CoordinateTransformError::InvalidDescriptor(
                "specify either 'cd' or 'cdelt', not both".into(),
            )),
            (None, None) => Err(CoordinateTransformError::InvalidDescriptor(
                "missing 'cd' or 'cdelt'".into(),
            )),
        }
    }
}

impl TanWcs {
    /// Creates a TAN WCS from a CD matrix.
    ///
    /// # Errors
    /// Returns [`CoordinateTransformError::InvalidDescriptor`] if any value is
    /// non-finite, if |CRVAL2| exceeds 90°, or if the CD matrix is singular.
    pub fn new(
        crpix: [f64; 2],
        crval: [f64; 2],
        cd: [[f64; 2]; 2],
        frame: SkyFrame,
    ) -> Result<Self, CoordinateTransformError> {
        let all_finite = crpix
            .iter()
            .chain(crval.iter())
            .chain(cd.iter().flatten())
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(CoordinateTransformError::InvalidDescriptor(
                "non-finite CRPIX, CRVAL or CD value".into(),
            ));
        }
        if crval[1].abs() > 90.0 {
            return Err(CoordinateTransformError::InvalidDescriptor(format!(
                "CRVAL2 {} is outside [-90, 90]",
                crval[1]
            )));
        }
        let cd_inv = cd_inverse(&cd).ok_or_else(|| {
            CoordinateTransformError::InvalidDescriptor("CD matrix is singular".into())
        })?;

        debug!(?crpix, ?crval, ?cd, %frame, "constructed TAN WCS");
        Ok(Self {
            crpix,
            crval,
            cd,
            cd_inv,
            frame,
        })
    }

    /// Creates a TAN WCS from per-axis scales (CDELT, degrees/pixel) and a
    /// rotation angle (CROTA2, degrees).
    pub fn from_cdelt(
        crpix: [f64; 2],
        crval: [f64; 2],
        cdelt: [f64; 2],
        crota_deg: f64,
        frame: SkyFrame,
    ) -> Result<Self, CoordinateTransformError> {
        let (sin_r, cos_r) = crota_deg.to_radians().sin_cos();
        let cd = [
            [cdelt[0] * cos_r, -cdelt[1] * sin_r],
            [cdelt[0] * sin_r, cdelt[1] * cos_r],
        ];
        Self::new(crpix, crval, cd, frame)
    }

    /// Reference pixel (1-based).
    pub fn crpix(&self) -> [f64; 2] {
        self.crpix
    }

    /// Sky position of the reference pixel, in degrees.
    pub fn crval(&self) -> [f64; 2] {
        self.crval
    }

    /// Linear pixel-to-intermediate transform, degrees per pixel.
    pub fn cd(&self) -> [[f64; 2]; 2] {
        self.cd
    }

    /// Frame of the sky coordinates this WCS produces and accepts.
    pub fn frame(&self) -> SkyFrame {
        self.frame
    }

    /// Mean pixel scale in degrees per pixel.
    pub fn pixel_scale(&self) -> f64 {
        let det = self.cd[0][0] * self.cd[1][1] - self.cd[0][1] * self.cd[1][0];
        det.abs().sqrt()
    }
}

impl WcsTransform for TanWcs {
    fn pixel_to_sky(&self, pixel: PixCoord) -> Result<SkyCoord, CoordinateTransformError> {
        if !pixel.is_finite() {
            return Err(CoordinateTransformError::NonFiniteInput(pixel.x, pixel.y));
        }
        let u = pixel.x + 1.0 - self.crpix[0];
        let v = pixel.y + 1.0 - self.crpix[1];
        let xi = self.cd[0][0] * u + self.cd[0][1] * v;
        let eta = self.cd[1][0] * u + self.cd[1][1] * v;

        if xi == 0.0 && eta == 0.0 {
            return Ok(SkyCoord::new(
                self.crval[0].rem_euclid(360.0),
                self.crval[1],
                self.frame,
            ));
        }

        let (ra, dec) = inverse_tan_project(
            xi.to_radians(),
            eta.to_radians(),
            self.crval[0].to_radians(),
            self.crval[1].to_radians(),
        );
        let sky = SkyCoord::new(ra.to_degrees().rem_euclid(360.0), dec.to_degrees(), self.frame);
        if !sky.is_finite() {
            return Err(CoordinateTransformError::NonFiniteResult(pixel.x, pixel.y));
        }
        Ok(sky)
    }

    fn sky_to_pixel(&self, sky: &SkyCoord) -> Result<PixCoord, CoordinateTransformError> {
        if sky.frame != self.frame {
            return Err(CoordinateTransformError::FrameMismatch {
                expected: self.frame,
                found: sky.frame,
            });
        }
        if !sky.is_finite() {
            return Err(CoordinateTransformError::NonFiniteInput(sky.lon, sky.lat));
        }

        let (xi, eta) = tan_project(
            sky.lon.to_radians(),
            sky.lat.to_radians(),
            self.crval[0].to_radians(),
            self.crval[1].to_radians(),
        )
        .ok_or(CoordinateTransformError::OutsideProjection {
            lon: sky.lon,
            lat: sky.lat,
        })?;
        let (xi, eta) = (xi.to_degrees(), eta.to_degrees());

        let u = self.cd_inv[0][0] * xi + self.cd_inv[0][1] * eta;
        let v = self.cd_inv[1][0] * xi + self.cd_inv[1][1] * eta;
        Ok(PixCoord::new(u + self.crpix[0] - 1.0, v + self.crpix[1] - 1.0))
    }
}

/// Forward gnomonic projection of `(ra, dec)` onto the tangent plane at
/// `(crval_ra, crval_dec)`. All angles in radians.
///
/// Returns `None` for points on or behind the tangent plane.
#[inline]
fn tan_project(ra: f64, dec: f64, crval_ra: f64, crval_dec: f64) -> Option<(f64, f64)> {
    let da = ra - crval_ra;
    let (sin_dec, cos_dec) = dec.sin_cos();
    let (sin_dec0, cos_dec0) = crval_dec.sin_cos();
    let cos_da = da.cos();

    let denom = sin_dec * sin_dec0 + cos_dec * cos_dec0 * cos_da;
    if denom <= 1e-12 {
        return None;
    }

    let xi = cos_dec * da.sin() / denom;
    let eta = (sin_dec * cos_dec0 - cos_dec * sin_dec0 * cos_da) / denom;
    Some((xi, eta))
}

/// Inverse gnomonic projection. All angles in radians.
#[inline]
fn inverse_tan_project(xi: f64, eta: f64, crval_ra: f64, crval_dec: f64) -> (f64, f64) {
    let (sin_dec0, cos_dec0) = crval_dec.sin_cos();
    let rho = xi.hypot(eta);
    if rho < 1e-15 {
        return (crval_ra, crval_dec);
    }

    let c = rho.atan();
    let (sin_c, cos_c) = c.sin_cos();

    let dec = (cos_c * sin_dec0 + eta * sin_c * cos_dec0 / rho).asin();
    let ra = crval_ra + (xi * sin_c).atan2(rho * cos_dec0 * cos_c - eta * sin_dec0 * sin_c);
    (ra, dec)
}

/// Inverts a 2×2 matrix. Returns `None` if singular.
#[inline]
fn cd_inverse(cd: &[[f64; 2]; 2]) -> Option<[[f64; 2]; 2]> {
    let det = cd[0][0] * cd[1][1] - cd[0][1] * cd[1][0];
    if det.abs() < 1e-30 {
        return None;
    }
    let inv_det = 1.0 / det;
    Some([
        [cd[1][1] * inv_det, -cd[0][1] * inv_det],
        [-cd[1][0] * inv_det, cd[0][0] * inv_det],
    ])
}
