use std::cell::Cell;

use skyregion::coord::{PixCoord, Pixel, Sky, SkyCoord, SkyFrame};
use skyregion::region::{FramedRegion, Meta, Patch, PatchCapability, Region, Shape, Visual};
use skyregion::render::{self, Artist, Canvas, Surface};
use skyregion::shapes::{AnyShape, Point, PointPixelRegion, Text, TextPixelRegion, TextSkyRegion};
use skyregion::wcs::{CoordinateTransformError, WcsTransform};
use skyregion::RegionError;

mod common;

/// Counts calls and fails every sky -> pixel request.
#[derive(Default)]
struct CountingWcs {
    calls: Cell<usize>,
}

impl WcsTransform for CountingWcs {
    fn pixel_to_sky(&self, pixel: PixCoord) -> Result<SkyCoord, CoordinateTransformError> {
        self.calls.set(self.calls.get() + 1);
        Ok(SkyCoord::icrs(pixel.x / 100.0, pixel.y / 100.0))
    }

    fn sky_to_pixel(&self, sky: &SkyCoord) -> Result<PixCoord, CoordinateTransformError> {
        self.calls.set(self.calls.get() + 1);
        Err(CoordinateTransformError::OutsideProjection {
            lon: sky.lon,
            lat: sky.lat,
        })
    }
}

#[test]
fn target_scenario_maps_to_known_sky_position() {
    let wcs = common::sample_wcs();
    let region = TextPixelRegion::labeled(PixCoord::new(100.0, 200.0), "target");

    let sky: TextSkyRegion = region.to_sky(&wcs).expect("pixel -> sky");
    assert_eq!(sky.center(), &SkyCoord::icrs(10.0, 20.0));
    assert_eq!(sky.text(), "target");
    assert_eq!(sky.frame_name(), "sky");
}

#[test]
fn wcs_failure_propagates_unchanged() {
    let wcs = CountingWcs::default();
    let region = TextSkyRegion::labeled(SkyCoord::icrs(1.0, 2.0), "x");

    let err = region.to_pixel(&wcs).unwrap_err();
    assert_eq!(
        err,
        CoordinateTransformError::OutsideProjection { lon: 1.0, lat: 2.0 }
    );

    // Lifted into the crate error it stays distinguishable from capability gaps
    let lifted: RegionError = err.into();
    assert!(matches!(lifted, RegionError::CoordinateTransform(_)));
}

#[test]
fn custom_wcs_plugs_in() {
    let wcs = CountingWcs::default();
    let region = PointPixelRegion::at(PixCoord::new(150.0, 250.0));
    let sky = region.to_sky(&wcs).expect("pixel -> sky");
    assert_eq!(sky.center(), &SkyCoord::icrs(1.5, 2.5));
    assert_eq!(wcs.calls.get(), 1);
}

#[test]
fn framed_region_same_frame_is_identity() {
    let wcs = CountingWcs::default();

    let pixel: FramedRegion<Text> =
        TextPixelRegion::labeled(PixCoord::new(1.0, 2.0), "p").into();
    let same = pixel.to_pixel(&wcs).expect("identity");
    assert_eq!(Some(&same), pixel.as_pixel());

    let sky: FramedRegion<Text> = TextSkyRegion::labeled(SkyCoord::icrs(3.0, 4.0), "s").into();
    let same = sky.to_sky(&wcs).expect("identity");
    assert_eq!(Some(&same), sky.as_sky());

    assert_eq!(wcs.calls.get(), 0, "identity conversions must not call the WCS");
}

#[test]
fn framed_region_cross_frame_uses_wcs() {
    let wcs = common::sample_wcs();
    let framed: FramedRegion<Text> = TextPixelRegion::labeled(PixCoord::new(100.0, 200.0), "t")
        .with_meta(Meta::new().with("k", "v"))
        .into();

    let sky = framed.to_sky(&wcs).expect("pixel -> sky");
    assert_eq!(sky.center(), &SkyCoord::icrs(10.0, 20.0));
    assert_eq!(sky.meta(), framed.meta());
    assert_eq!(framed.frame_name(), "pixel");
}

/// A caller that knows nothing about the concrete shape.
fn convert_and_plot<S: Shape>(
    region: &Region<Pixel, S>,
    wcs: &dyn WcsTransform,
    canvas: &mut Canvas,
) -> Result<SkyCoord, CoordinateTransformError> {
    let sky = region.to_sky(wcs)?;
    region.plot(canvas, &Visual::new());
    Ok(*sky.center())
}

#[test]
fn generic_callers_handle_every_shape() {
    let wcs = common::sample_wcs();
    let mut canvas = Canvas::new();

    let text = TextPixelRegion::labeled(PixCoord::new(100.0, 200.0), "t");
    let point = PointPixelRegion::at(PixCoord::new(100.0, 200.0));
    let a = convert_and_plot(&text, &wcs, &mut canvas).unwrap();
    let b = convert_and_plot(&point, &wcs, &mut canvas).unwrap();

    assert_eq!(a, b);
    assert_eq!(canvas.len(), 2);
}

#[test]
fn mixed_shapes_share_one_list() {
    let wcs = common::sample_wcs();
    let regions: Vec<Region<Pixel, AnyShape>> = vec![
        Region::<Pixel, AnyShape>::new(PixCoord::new(10.0, 10.0), Point.into()),
        Region::<Pixel, AnyShape>::new(PixCoord::new(20.0, 20.0), Text::new("m").into()),
    ];

    let capabilities: Vec<bool> = regions
        .iter()
        .map(|r| r.patch_capability(&Visual::new()).is_supported())
        .collect();
    assert_eq!(capabilities, vec![true, false]);

    let sky: Vec<Region<Sky, AnyShape>> = regions
        .iter()
        .map(|r| r.to_sky(&wcs))
        .collect::<Result<_, _>>()
        .expect("convert all");
    assert_eq!(sky[1].shape().text(), Some("m"));
    assert_eq!(sky[0].kind(), "point");
}

#[test]
fn capability_gap_and_transform_failure_are_distinct() {
    let text = TextPixelRegion::labeled(PixCoord::new(1.0, 1.0), "no patch");
    match text.as_patch(&Visual::new()) {
        Err(RegionError::UnsupportedOperation { shape, operation }) => {
            assert_eq!(shape, "text");
            assert_eq!(operation, "as_patch");
        }
        other => panic!("expected UnsupportedOperation, got {:?}", other),
    }

    let point = PointPixelRegion::at(PixCoord::new(1.0, 1.0));
    assert!(matches!(
        point.patch_capability(&Visual::new()),
        PatchCapability::HasPatch(Patch::Marker { .. })
    ));
}

#[test]
fn plot_returns_the_surface_for_chaining() {
    let mut canvas = Canvas::new();
    let first = TextPixelRegion::labeled(PixCoord::new(5.0, 5.0), "label");
    let second = TextPixelRegion::labeled(PixCoord::new(6.0, 6.0), "next");

    let surface = first.plot(&mut canvas, &Visual::new());
    second.plot(surface, &Visual::new());

    assert_eq!(canvas.len(), 2);
    assert_eq!(
        canvas.artists()[0],
        Artist::Text {
            x: 5.0,
            y: 5.0,
            text: "label".into(),
            style: Visual::new(),
        }
    );
}

/// A surface that only counts draw requests.
#[derive(Default)]
struct TallySurface {
    texts: usize,
    patches: usize,
}

impl Surface for TallySurface {
    fn draw_text(&mut self, _x: f64, _y: f64, _text: &str, _style: &Visual) {
        self.texts += 1;
    }

    fn draw_patch(&mut self, _patch: &Patch, _style: &Visual) {
        self.patches += 1;
    }
}

#[test]
fn plot_works_with_any_surface() {
    let mut tally = TallySurface::default();
    TextPixelRegion::labeled(PixCoord::new(0.0, 0.0), "a").plot(&mut tally, &Visual::new());
    PointPixelRegion::at(PixCoord::new(0.0, 0.0)).plot(&mut tally, &Visual::new());
    assert_eq!((tally.texts, tally.patches), (1, 1));

    let dyn_surface: &mut dyn Surface = &mut tally;
    TextPixelRegion::labeled(PixCoord::new(0.0, 0.0), "b").plot(dyn_surface, &Visual::new());
    assert_eq!(tally.texts, 2);
}

#[test]
fn plot_current_draws_on_the_process_canvas() {
    let region = TextPixelRegion::labeled(PixCoord::new(7.0, 8.0), "current-canvas-label");

    // Other tests may plot concurrently; look for this region's artist only
    let found = region.plot_current(&Visual::new().with("color", "white"), |canvas| {
        canvas.artists().iter().any(|artist| {
            matches!(artist, Artist::Text { text, x, y, .. }
                if text == "current-canvas-label" && *x == 7.0 && *y == 8.0)
        })
    });
    assert!(found);

    let still_there = render::with_current_canvas(|canvas| {
        canvas.artists().iter().any(
            |artist| matches!(artist, Artist::Text { text, .. } if text == "current-canvas-label"),
        )
    });
    assert!(still_there);
}

#[test]
fn regions_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TextPixelRegion>();
    assert_send_sync::<TextSkyRegion>();
    assert_send_sync::<FramedRegion<AnyShape>>();
}

#[test]
fn sky_frame_is_kept_through_conversion() {
    let wcs = skyregion::wcs::TanWcs::from_cdelt(
        [1.0, 1.0],
        [266.4, -28.9],
        [-common::ARCSEC, common::ARCSEC],
        0.0,
        SkyFrame::Galactic,
    )
    .unwrap();
    let sky = TextPixelRegion::labeled(PixCoord::new(0.0, 0.0), "gc")
        .to_sky(&wcs)
        .unwrap();
    assert_eq!(sky.center().frame, SkyFrame::Galactic);
}
