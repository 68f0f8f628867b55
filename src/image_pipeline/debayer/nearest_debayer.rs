use tracing::{info, warn};

use crate::image_pipeline::common::alloc_buffer;
use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::debayer::types::{CfaPattern, EdgePolicy, RgbBuffer};
use crate::image_pipeline::raw::types::SamplePlane;

/// Nearest-neighbour BGGR reconstruction.
///
/// Each output pixel takes its blue, green and red values from sites in the
/// current and previous sensor rows. Positions are 1-based (`line` for the
/// row, `row` for the column) and sample indices are linear into the plane,
/// so a column offset past the right edge continues on the next row.
///
/// Indices never fall below zero. On the last row, and on the last column
/// when the width is odd, they can run past the end of the plane; the
/// configured [`EdgePolicy`] decides what those reads return.
pub struct NearestDebayer {
    pattern: CfaPattern,
    edge_policy: EdgePolicy,
}

impl NearestDebayer {
    pub fn new(pattern: CfaPattern, edge_policy: EdgePolicy) -> Self {
        Self {
            pattern,
            edge_policy,
        }
    }

    pub fn process(&self, plane: &SamplePlane) -> Result<RgbBuffer> {
        let width = plane.width;
        let height = plane.height;
        let expected = width * height;
        if plane.data.len() != expected {
            return Err(ConversionError::InvalidPlane {
                expected,
                got: plane.data.len(),
            });
        }

        let mut data = alloc_buffer("rgb", expected * 3)?;

        if self.pattern != CfaPattern::Bggr {
            warn!(
                "CFA pattern {:?} is not supported, leaving RGB buffer blank",
                self.pattern
            );
            return Ok(RgbBuffer {
                width,
                height,
                data,
            });
        }

        info!("Debayering {}x{} BGGR plane, edge policy {:?}", width, height, self.edge_policy);

        let samples = &plane.data;
        let at = |index: usize| -> Result<u8> {
            let replacement = match self.edge_policy {
                EdgePolicy::Replicate => samples.last(),
                EdgePolicy::Error => None,
            };
            samples
                .get(index)
                .or(replacement)
                .copied()
                .ok_or(ConversionError::SampleOutOfBounds {
                    index,
                    len: samples.len(),
                })
        };

        let w = width;
        let mut offset = 0;
        for line in 1..=height {
            for row in 1..=width {
                let (b, g, r) = match (line % 2 == 1, row % 2 == 1) {
                    // blue site
                    (true, true) => (
                        at(w * line + row)?,
                        at(w * (line - 1) + row)?,
                        at(w * (line - 1) + row - 1)?,
                    ),
                    // green site on a blue row
                    (true, false) => {
                        let above = at(w * (line - 1) + row - 1)? as u16;
                        let left = at(w * line + row - 2)? as u16;
                        let blue = at(w * line + row - 1)?;
                        let red = at(w * (line - 1) + row - 2)?;
                        (blue, ((above + left) / 2) as u8, red)
                    }
                    // green site on a red row
                    (false, true) => (
                        at(w * (line - 1) + row)?,
                        at(w * (line - 1) + row - 1)?,
                        at(w * (line - 2) + row - 1)?,
                    ),
                    // red site
                    (false, false) => (
                        at(w * (line - 1) + row - 1)?,
                        at(w * (line - 1) + row - 2)?,
                        at(w * (line - 2) + row - 2)?,
                    ),
                };
                data[offset..offset + 3].copy_from_slice(&[b, g, r]);
                offset += 3;
            }
        }

        Ok(RgbBuffer {
            width,
            height,
            data,
        })
    }
}
