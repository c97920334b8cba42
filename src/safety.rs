//! Structural classification of QR modules.
//!
//! Every function here is a pure function of coordinates and matrix width.
//! Coordinates are signed and all arithmetic saturates or widens, so odd
//! inputs (tiny or non-standard widths, out of range cells, the `i32`
//! extremes) never overflow; they simply classify as unprotected.

use std::iter::once;

use crate::common::metadata::version_from_width;

// Finder pattern
//------------------------------------------------------------------------------

const FINDER_SZ: i32 = 7;
const FINDER_MARGIN: i32 = 1;

/// True if the cell lies in one of the three 7x7 finder blocks. There is no
/// finder at the bottom right corner.
pub fn is_finder_pattern_cell(r: i32, c: i32, w: i32) -> bool {
    let top = r < FINDER_SZ;
    let left = c < FINDER_SZ;
    let right = c >= w.saturating_sub(FINDER_SZ);
    let bottom = r >= w.saturating_sub(FINDER_SZ);
    (top && left) || (top && right) || (bottom && left)
}

fn is_finder_margin_cell(r: i32, c: i32, w: i32) -> bool {
    if w <= 0 {
        return false;
    }
    let hi = w - 1;
    (-FINDER_MARGIN..=FINDER_MARGIN).any(|dr| {
        (-FINDER_MARGIN..=FINDER_MARGIN).any(|dc| {
            let (r, c) = (r.saturating_add(dr), c.saturating_add(dc));
            is_finder_pattern_cell(r.clamp(0, hi), c.clamp(0, hi), w)
        })
    })
}


// Timing pattern
//------------------------------------------------------------------------------

const TIMING_LINE: i32 = 6;

pub fn is_timing_pattern_cell(r: i32, c: i32) -> bool {
    r == TIMING_LINE || c == TIMING_LINE
}

// Alignment pattern
//------------------------------------------------------------------------------

// Center coordinates shared by both axes: `first`, then `last - step * k` for
// k in `inner..=1`, then `last`. Kept in i64 so width extremes cannot overflow.
struct AlignmentAxis {
    first: i64,
    last: i64,
    step: i64,
    inner: i64,
}

impl AlignmentAxis {
    fn new(w: i32) -> Option<Self> {
        let ver = i64::from(version_from_width(w));
        if ver < 2 {
            return None;
        }

        let first = i64::from(TIMING_LINE);
        let last = i64::from(w) - 7;
        let (step, inner) = if ver > 6 {
            let count = ver / 7 + 2;
            (div_ceil(last - first, count - 1), count - 2)
        } else {
            (last - first, 0)
        };
        Some(Self { first, last, step, inner })
    }

    fn centers(&self) -> impl Iterator<Item = i64> + '_ {
        let inner = (1..=self.inner).rev().map(move |k| self.last - self.step * k);
        once(self.first).chain(inner).chain(once(self.last))
    }

    // Centers within two modules of `x`, found without walking the whole axis.
    fn centers_near(&self, x: i64) -> impl Iterator<Item = i64> + '_ {
        let lo = div_ceil(self.last - x - 2, self.step).max(1);
        let hi = (self.last - x + 2).div_euclid(self.step).min(self.inner);
        [self.first, self.last]
            .into_iter()
            .chain((lo..=hi).map(move |k| self.last - self.step * k))
            .filter(move |&cx| (cx - x).abs() <= 2)
    }

    fn on_finder(&self, cr: i64, cc: i64) -> bool {
        (cr == self.first && (cc == self.first || cc == self.last))
            || (cr == self.last && cc == self.first)
    }
}

fn div_ceil(a: i64, b: i64) -> i64 {
    let q = a.div_euclid(b);
    if a.rem_euclid(b) > 0 {
        q + 1
    } else {
        q
    }
}

/// Row/column candidates for alignment pattern centers.
///
/// Versions 2 to 6 have a single center pair per axis. From version 7 on, the
/// centers are spread evenly between 6 and `w - 7` with a rounded up step,
/// which approximates the published table rather than reproducing it.
pub fn alignment_pattern_centers(w: i32) -> Vec<i32> {
    let axis = match AlignmentAxis::new(w) {
        Some(axis) => axis,
        None => return Vec::new(),
    };

    let mut centers = axis.centers().filter_map(|x| i32::try_from(x).ok()).collect::<Vec<_>>();
    centers.sort_unstable();
    centers.dedup();
    centers
}

/// True if the cell falls inside a 5x5 alignment block. Center pairs that
/// coincide with a finder corner are skipped.
pub fn is_alignment_pattern_cell(r: i32, c: i32, w: i32) -> bool {
    let axis = match AlignmentAxis::new(w) {
        Some(axis) => axis,
        None => return false,
    };

    let (r, c) = (i64::from(r), i64::from(c));
    let hit = axis.centers_near(r).any(|cr| axis.centers_near(c).any(|cc| !axis.on_finder(cr, cc)));
    hit
}


// Protection
//------------------------------------------------------------------------------

/// Cells a shape mask must never hide: finders with a one module ring around
/// them, both timing lines and every alignment block.
pub fn is_protected_qr_cell(r: i32, c: i32, w: i32) -> bool {
    is_finder_pattern_cell(r, c, w)
        || is_finder_margin_cell(r, c, w)
        || is_timing_pattern_cell(r, c)
        || is_alignment_pattern_cell(r, c, w)
}
