#![allow(dead_code)]

use skyregion::coord::SkyFrame;
use skyregion::region::FramedRegion;
use skyregion::shapes::AnyShape;
use skyregion::wcs::TanWcs;

pub const ARCSEC: f64 = 1.0 / 3600.0;

/// One arcsecond per pixel, pixel (100, 200) at RA 10°, Dec 20°.
pub fn sample_wcs() -> TanWcs {
    TanWcs::from_cdelt(
        [101.0, 201.0],
        [10.0, 20.0],
        [-ARCSEC, ARCSEC],
        0.0,
        SkyFrame::Icrs,
    )
    .expect("valid sample wcs")
}

/// Asserts both lists hold the same pixel-frame regions, with centers
/// within `eps` pixels and every other field equal.
pub fn assert_pixel_regions_close(
    left: &[FramedRegion<AnyShape>],
    right: &[FramedRegion<AnyShape>],
    eps: f64,
) {
    assert_eq!(left.len(), right.len(), "region count mismatch");

    for (idx, (a, b)) in left.iter().zip(right).enumerate() {
        let a = a
            .as_pixel()
            .unwrap_or_else(|| panic!("left region {} is not pixel-frame", idx));
        let b = b
            .as_pixel()
            .unwrap_or_else(|| panic!("right region {} is not pixel-frame", idx));

        let distance = a.center().separation(b.center());
        assert!(
            distance <= eps,
            "region {}: centers {} and {} differ by {}",
            idx,
            a.center(),
            b.center(),
            distance
        );
        assert_eq!(a.shape(), b.shape(), "region {}: shape mismatch", idx);
        assert_eq!(a.meta(), b.meta(), "region {}: meta mismatch", idx);
        assert_eq!(a.visual(), b.visual(), "region {}: visual mismatch", idx);
    }
}
