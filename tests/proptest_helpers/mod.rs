#![allow(dead_code)]

use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};
use serde_json::Value;

use skyregion::coord::{PixCoord, SkyFrame};
use skyregion::region::{Meta, Visual};
use skyregion::wcs::TanWcs;

/// Pixel round-trip tolerance.
pub const EPS_PIXEL: f64 = 1e-6;

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

pub fn arb_frame() -> impl Strategy<Value = SkyFrame> {
    prop_oneof![
        Just(SkyFrame::Icrs),
        Just(SkyFrame::Fk5),
        Just(SkyFrame::Galactic),
    ]
}

/// TAN WCSs with reference points away from the poles, pixel scales from
/// ~0.04" to ~18" per pixel, any rotation and either parity.
pub fn arb_wcs() -> impl Strategy<Value = TanWcs> {
    (
        (0.0..4096.0f64, 0.0..4096.0f64),
        (0.0..360.0f64, -60.0..60.0f64),
        (-5.0..-2.5f64, -5.0..-2.5f64),
        -180.0..180.0f64,
        any::<bool>(),
        arb_frame(),
    )
        .prop_map(|(crpix, crval, (log_sx, log_sy), rotation, flip, frame)| {
            let sx = 10f64.powf(log_sx);
            let sy = 10f64.powf(log_sy);
            let cdelt1 = if flip { sx } else { -sx };
            TanWcs::from_cdelt(
                [crpix.0, crpix.1],
                [crval.0, crval.1],
                [cdelt1, sy],
                rotation,
                frame,
            )
            .expect("generated wcs is valid")
        })
}

/// Pixel positions within 2000 pixels of the WCS reference pixel, which
/// keeps every generated position well inside the projection domain.
pub fn arb_pixel_near(wcs: &TanWcs) -> impl Strategy<Value = PixCoord> {
    let [crpix1, crpix2] = wcs.crpix();
    (-2000.0..2000.0f64, -2000.0..2000.0f64)
        .prop_map(move |(dx, dy)| PixCoord::new(crpix1 - 1.0 + dx, crpix2 - 1.0 + dy))
}

pub fn arb_wcs_and_pixel() -> impl Strategy<Value = (TanWcs, PixCoord)> {
    arb_wcs().prop_flat_map(|wcs| {
        let pixel = arb_pixel_near(&wcs);
        (Just(wcs), pixel)
    })
}

pub fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z ]{0,12}".prop_map(Value::from),
    ]
}

pub fn arb_meta() -> impl Strategy<Value = Meta> {
    prop::collection::btree_map("[a-z]{1,8}", arb_value(), 0..4)
        .prop_map(|entries| entries.into_iter().collect())
}

pub fn arb_visual() -> impl Strategy<Value = Visual> {
    prop::collection::btree_map("[a-z]{1,8}", arb_value(), 0..4)
        .prop_map(|entries| entries.into_iter().collect())
}

pub fn arb_text() -> impl Strategy<Value = String> {
    ".{0,24}"
}
