//! JSON region lists.
//!
//! A region file is a JSON array of records:
//!
//! ```json
//! [
//!   {"shape": "text", "center": {"x": 100.0, "y": 200.0}, "text": "target"},
//!   {"shape": "point", "center": {"lon": 10.0, "lat": 20.0, "frame": "icrs"},
//!    "meta": {"label": "M31"}, "visual": {"color": "red"}}
//! ]
//! ```
//!
//! The keys of `center` decide the frame: `x`/`y` for pixel, `lon`/`lat`
//! for sky. This is the CLI's interchange format, not a region-file
//! standard such as DS9.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::coord::{PixCoord, Pixel, Sky, SkyCoord};
use crate::error::RegionError;
use crate::region::{FramedRegion, Meta, Region, Visual};
use crate::shapes::{AnyShape, Point, Text};
use crate::wcs::TanWcs;

/// Serialized form of one region.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegionRecord {
    pub shape: ShapeKind,
    pub center: RecordCenter,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Meta::is_empty")]
    pub meta: Meta,
    #[serde(default, skip_serializing_if = "Visual::is_empty")]
    pub visual: Visual,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Point,
    Text,
}

/// A record's center; its keys select the frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordCenter {
    Pixel(PixCoord),
    Sky(SkyCoord),
}

impl RegionRecord {
    /// Builds the region this record describes.
    ///
    /// `index` is only used in error messages.
    pub fn into_region(self, index: usize) -> Result<FramedRegion<AnyShape>, RegionError> {
        let shape = match (self.shape, self.text) {
            (ShapeKind::Point, None) => AnyShape::Point(Point),
            (ShapeKind::Text, Some(text)) => AnyShape::Text(Text::new(text)),
            (ShapeKind::Point, Some(_)) => {
                return Err(RegionError::InvalidRecord {
                    index,
                    message: "point regions do not take 'text'".into(),
                })
            }
            (ShapeKind::Text, None) => {
                return Err(RegionError::InvalidRecord {
                    index,
                    message: "text regions require 'text'".into(),
                })
            }
        };

        let region = match self.center {
            RecordCenter::Pixel(center) => FramedRegion::Pixel(
                Region::<Pixel, AnyShape>::new(center, shape)
                    .with_meta(self.meta)
                    .with_visual(self.visual),
            ),
            RecordCenter::Sky(center) => FramedRegion::Sky(
                Region::<Sky, AnyShape>::new(center, shape)
                    .with_meta(self.meta)
                    .with_visual(self.visual),
            ),
        };
        Ok(region)
    }

    /// Describes `region` as a record.
    pub fn from_region(region: &FramedRegion<AnyShape>) -> Self {
        let (shape, text) = match region.shape() {
            AnyShape::Point(_) => (ShapeKind::Point, None),
            AnyShape::Text(text) => (ShapeKind::Text, Some(text.as_str().to_string())),
        };
        let center = match region {
            FramedRegion::Pixel(r) => RecordCenter::Pixel(*r.center()),
            FramedRegion::Sky(r) => RecordCenter::Sky(*r.center()),
        };
        Self {
            shape,
            center,
            text,
            meta: region.meta().clone(),
            visual: region.visual().clone(),
        }
    }
}

/// Reads a region list from a JSON file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed, or if a record is
/// inconsistent (e.g. a text region without text).
pub fn read_regions_json(path: &Path) -> Result<Vec<FramedRegion<AnyShape>>, RegionError> {
    let file = File::open(path).map_err(RegionError::Io)?;
    let reader = BufReader::new(file);

    let records: Vec<RegionRecord> =
        serde_json::from_reader(reader).map_err(|source| RegionError::RegionJsonParse {
            path: path.to_path_buf(),
            source,
        })?;
    records_to_regions(records)
}

/// Writes a region list to a JSON file.
pub fn write_regions_json(
    path: &Path,
    regions: &[FramedRegion<AnyShape>],
) -> Result<(), RegionError> {
    let file = File::create(path).map_err(RegionError::Io)?;
    let mut writer = BufWriter::new(file);
    let records: Vec<RegionRecord> = regions.iter().map(RegionRecord::from_region).collect();

    serde_json::to_writer_pretty(&mut writer, &records).map_err(|source| {
        RegionError::RegionJsonWrite {
            path: path.to_path_buf(),
            source,
        }
    })?;
    writer.flush().map_err(RegionError::Io)?;
    Ok(())
}

/// Reads a region list from a JSON string.
pub fn from_json_str(json: &str) -> Result<Vec<FramedRegion<AnyShape>>, RegionError> {
    let records: Vec<RegionRecord> = serde_json::from_str(json)?;
    records_to_regions(records)
}

/// Writes a region list to a pretty-printed JSON string.
pub fn to_json_string(regions: &[FramedRegion<AnyShape>]) -> Result<String, serde_json::Error> {
    let records: Vec<RegionRecord> = regions.iter().map(RegionRecord::from_region).collect();
    serde_json::to_string_pretty(&records)
}

/// Reads a TAN WCS descriptor from a JSON file.
pub fn read_wcs_json(path: &Path) -> Result<TanWcs, RegionError> {
    let file = File::open(path).map_err(RegionError::Io)?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|source| RegionError::WcsParse {
        path: path.to_path_buf(),
        source,
    })
}

fn records_to_regions(
    records: Vec<RegionRecord>,
) -> Result<Vec<FramedRegion<AnyShape>>, RegionError> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.into_region(index))
        .collect()
}
