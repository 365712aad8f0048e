use itertools::Itertools;
use serde::Serialize;

use crate::{
    error::{CourtError, Result, check_lengths},
    geometry::{
        spec::CourtSpec,
        types::{Orientation, Side},
    },
};

/// Axis-aligned bounds of the court (or one half) in the working frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Extent {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl Extent {
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.xmin && x <= self.xmax && y >= self.ymin && y <= self.ymax
    }
}

/// Court bounds in the working frame of `spec`. Horizontal halves cut x at the center,
/// vertical halves cut y (`Left` is the lower half).
pub fn extent(spec: &CourtSpec, half: Option<Side>) -> Extent {
    let (w, h) = spec.dims();
    let c = spec.center();
    let (span_x, span_y) = match spec.orientation {
        Orientation::Horizontal => (w, h),
        Orientation::Vertical => (h, w),
    };
    let mut e = Extent {
        xmin: c.x - span_x / 2.0,
        xmax: c.x + span_x / 2.0,
        ymin: c.y - span_y / 2.0,
        ymax: c.y + span_y / 2.0,
    };
    match (spec.orientation, half) {
        (_, None) => {}
        (Orientation::Horizontal, Some(Side::Left)) => e.xmax = c.x,
        (Orientation::Horizontal, Some(Side::Right)) => e.xmin = c.x,
        (Orientation::Vertical, Some(Side::Left)) => e.ymax = c.y,
        (Orientation::Vertical, Some(Side::Right)) => e.ymin = c.y,
    }
    e
}

fn linspace(start: f64, end: f64, bins: usize) -> Vec<f64> {
    let step = (end - start) / bins as f64;
    (0..=bins)
        .map(|i| if i == bins { end } else { start + step * i as f64 })
        .collect()
}

fn check_bins(field: &'static str, n: usize) -> Result<()> {
    if n == 0 {
        return Err(CourtError::InvalidSampleCount { field, min: 1, got: n });
    }
    Ok(())
}

/// Uniform bin edges spanning the extent: `nx + 1` x-edges and `ny + 1` y-edges
pub fn court_edges(spec: &CourtSpec, nx: usize, ny: usize, half: Option<Side>) -> Result<(Vec<f64>, Vec<f64>)> {
    check_bins("x bins", nx)?;
    check_bins("y bins", ny)?;
    let e = extent(spec, half);
    Ok((linspace(e.xmin, e.xmax, nx), linspace(e.ymin, e.ymax, ny)))
}

/// Points inside the (half-)court extent, bounds inclusive
pub fn in_bounds_mask(x: &[f64], y: &[f64], spec: &CourtSpec, half: Option<Side>) -> Result<Vec<bool>> {
    check_lengths(x, y)?;
    let e = extent(spec, half);
    Ok(x.iter().zip_eq(y).map(|(&px, &py)| e.contains(px, py)).collect())
}
