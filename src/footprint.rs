//! KiCad footprint document assembly.
//!
//! Turns a binary bitmap into an s-expression footprint: one filled
//! `fp_poly` square per ink pixel, centered on the board origin, wrapped
//! in a header carrying the standard property records. The output is a
//! single string in the KiCad 9 footprint file format.

use halftone::{Bitmap, INK};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::FootprintError;
use crate::ident::UuidSource;

/// File format stamp understood by KiCad 9.
const FORMAT_VERSION: &str = "20241229";
const GENERATOR: &str = "pcbink";
const GENERATOR_VERSION: &str = "1.0";

/// Geometry records between progress reports.
const PROGRESS_INTERVAL: usize = 1000;

/// Placement and naming options for a generated footprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FootprintOptions {
    /// Edge length of one pixel square, in millimeters.
    pub pixel_size: f64,
    pub footprint_name: String,
    pub library_name: String,
    /// Board layer the polygons land on. The document header itself is
    /// always tagged `F.Cu`.
    pub layer: String,
}

impl Default for FootprintOptions {
    fn default() -> Self {
        Self {
            pixel_size: 1.0,
            footprint_name: "IMAGE".to_string(),
            library_name: "Image".to_string(),
            layer: "F.SilkS".to_string(),
        }
    }
}

/// Snapshot of geometry emission, reported every [`PROGRESS_INTERVAL`]
/// records. `percent` is floored, so a run whose total is not a multiple
/// of the interval never reports 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub stage: &'static str,
    pub current: usize,
    pub total: usize,
    pub percent: u8,
}

/// Assembles the footprint document for `bitmap`.
///
/// Ink pixels are emitted in row-major order. `on_progress` is called
/// after every [`PROGRESS_INTERVAL`] polygons; a bitmap with fewer ink
/// pixels than that produces no progress calls at all. The only failure
/// mode is the random source refusing to yield identifier bytes.
pub fn generate<R: RngCore>(
    bitmap: &Bitmap,
    options: &FootprintOptions,
    ids: &mut UuidSource<R>,
    mut on_progress: impl FnMut(&Progress),
) -> Result<String, FootprintError> {
    let width = bitmap.width();
    let height = bitmap.height();
    let center_x = width as f64 * options.pixel_size / 2.0;
    let center_y = height as f64 * options.pixel_size / 2.0;

    // Collect ink coordinates up front so progress totals are known
    // before the first polygon goes out.
    let mut ink_pixels = Vec::new();
    for y in 0..height {
        for x in 0..width {
            if bitmap.get(x, y) == INK {
                ink_pixels.push((x, y));
            }
        }
    }
    let total = ink_pixels.len();
    debug!(records = total, width, height, "generating footprint geometry");

    let mut out = String::with_capacity(1024 + total * 280);
    push_header(&mut out, options, center_y, ids)?;

    for (index, &(x, y)) in ink_pixels.iter().enumerate() {
        let left = x as f64 * options.pixel_size - center_x;
        let right = (x + 1) as f64 * options.pixel_size - center_x;
        let top = y as f64 * options.pixel_size - center_y;
        let bottom = (y + 1) as f64 * options.pixel_size - center_y;
        push_poly(&mut out, left, top, right, bottom, &options.layer, ids)?;

        let emitted = index + 1;
        if emitted % PROGRESS_INTERVAL == 0 {
            on_progress(&Progress {
                stage: "generating",
                current: emitted,
                total,
                percent: (emitted * 100 / total) as u8,
            });
        }
    }

    out.push_str(
        r#"
    (embedded_fonts no)
)"#,
    );
    Ok(out)
}

fn push_header<R: RngCore>(
    out: &mut String,
    options: &FootprintOptions,
    center_y: f64,
    ids: &mut UuidSource<R>,
) -> Result<(), FootprintError> {
    let header_id = ids.next_id()?;
    let reference_id = ids.next_id()?;
    let value_id = ids.next_id()?;
    let datasheet_id = ids.next_id()?;
    let description_id = ids.next_id()?;

    let library = &options.library_name;
    let name = &options.footprint_name;
    let layer = &options.layer;
    let reference_y = format!("{:.2}", -center_y - 2.0);
    let value_y = format!("{:.2}", center_y + 2.0);

    out.push_str(&format!(
        r#"(footprint "{library}:{name}"
    (version {FORMAT_VERSION})
    (generator "{GENERATOR}")
    (generator_version "{GENERATOR_VERSION}")
    (layer "F.Cu")
    (uuid "{header_id}")
    (at 0 0)
    (property "Reference" "G***"
        (at 0 {reference_y} 0)
        (layer "{layer}")
        (uuid "{reference_id}")
        (effects
            (font (size 1.5 1.5) (thickness 0.3))
        )
    )
    (property "Value" "{name}"
        (at 0 {value_y} 0)
        (layer "{layer}")
        (hide yes)
        (uuid "{value_id}")
        (effects
            (font (size 1.5 1.5) (thickness 0.3))
        )
    )
    (property "Datasheet" ""
        (at 0 0 0)
        (layer "F.Fab")
        (hide yes)
        (uuid "{datasheet_id}")
        (effects
            (font (size 1.27 1.27) (thickness 0.15))
        )
    )
    (property "Description" "Image converted to footprint"
        (at 0 0 0)
        (layer "F.Fab")
        (hide yes)
        (uuid "{description_id}")
        (effects
            (font (size 1.27 1.27) (thickness 0.15))
        )
    )
    (attr board_only exclude_from_pos_files exclude_from_bom)"#
    ));
    Ok(())
}

fn push_poly<R: RngCore>(
    out: &mut String,
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
    layer: &str,
    ids: &mut UuidSource<R>,
) -> Result<(), FootprintError> {
    let id = ids.next_id()?;
    out.push_str(&format!(
        r#"
    (fp_poly
        (pts
            (xy {left:.6} {top:.6}) (xy {right:.6} {top:.6}) (xy {right:.6} {bottom:.6}) (xy {left:.6} {bottom:.6})
        )
        (stroke (width 0) (type solid))
        (fill yes)
        (layer "{layer}")
        (uuid "{id}")
    )"#
    ));
    Ok(())
}
