use image::Rgb;

use crate::common::Matrix;
use crate::safety::is_protected_qr_cell;
use crate::shape::{is_point_inside_shape, polygon_path, Point, PolygonPath, Shape};

// Canvas geometry
//------------------------------------------------------------------------------

/// Pixel layout of a rendered QR: the matrix surrounded by a quiet zone, every
/// module a `module_sz` square.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Canvas {
    pub w: usize,
    pub module_sz: u32,
    pub qz: u32,
    pub dimension: u32,
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct ModuleRect {
    pub r: usize,
    pub c: usize,
    pub x: u32,
    pub y: u32,
    pub sz: u32,
}

impl Canvas {
    /// Returns None when the canvas does not fit in u32 pixels.
    pub fn new(w: usize, module_sz: u32, qz: u32) -> Option<Self> {
        let total = u32::try_from(w).ok()?.checked_add(qz.checked_mul(2)?)?;
        let dimension = total.checked_mul(module_sz)?;
        Some(Self { w, module_sz, qz, dimension })
    }

    pub fn module_rect(&self, r: usize, c: usize) -> ModuleRect {
        let x = (c as u32 + self.qz) * self.module_sz;
        let y = (r as u32 + self.qz) * self.module_sz;
        ModuleRect { r, c, x, y, sz: self.module_sz }
    }

    pub fn module_center(&self, r: usize, c: usize) -> Point {
        let rect = self.module_rect(r, c);
        let half = self.module_sz as f64 / 2.0;
        Point::new(rect.x as f64 + half, rect.y as f64 + half)
    }
}


// Module visibility
//------------------------------------------------------------------------------

/// Decides whether the module at `(r, c)` is drawn.
///
/// Light modules are never drawn. Dark modules are drawn if they are
/// structurally protected or if their center falls inside the shape shrunk by
/// `inset` modules on every side. The matrix itself is never shrunk.
pub fn is_module_visible(
    r: usize,
    c: usize,
    dark: bool,
    canvas: &Canvas,
    shape: Shape,
    inset: u32,
) -> bool {
    if !dark {
        return false;
    }
    if !shape.is_masking() {
        return true;
    }

    let w = canvas.w as i32;
    if is_protected_qr_cell(r as i32, c as i32, w) {
        return true;
    }

    let inset_px = inset as f64 * canvas.module_sz as f64;
    let center = canvas.module_center(r, c);
    let size = canvas.dimension as f64 - 2.0 * inset_px;
    is_point_inside_shape(shape, center.x - inset_px, center.y - inset_px, size)
}

/// Visibility of every module in row-major order.
pub fn compose(matrix: &Matrix, canvas: &Canvas, shape: Shape, inset: u32) -> Vec<bool> {
    matrix
        .modules()
        .map(|(r, c, dark)| is_module_visible(r, c, dark, canvas, shape, inset))
        .collect()
}


// Decorative frame
//------------------------------------------------------------------------------

const FRAME_PADDING_RATIO: f64 = 0.06;
const FRAME_STROKE_RATIO: f64 = 0.02;
const FRAME_MIN_STROKE: f64 = 6.0;
const FRAME_FILL: Rgb<u8> = Rgb([255, 255, 255]);
const FRAME_STROKE: Rgb<u8> = Rgb([0x11, 0x18, 0x27]);
const FRAME_STROKE_OPACITY: f64 = 0.15;
// Past this the outline is indistinguishable from a circle at any sane size
const FRAME_MAX_SIDES: i32 = 720;

/// Polygon outline drawn underneath the modules. Purely visual.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub path: PolygonPath,
    pub padding: f64,
    pub stroke_width: f64,
    pub fill: Rgb<u8>,
    pub stroke: Rgb<u8>,
    pub stroke_opacity: f64,
}

impl Frame {
    pub fn new(dimension: u32, sides: i32) -> Self {
        let dim = dimension as f64;
        let padding = dim * FRAME_PADDING_RATIO;
        Self {
            path: polygon_path(dim, sides.min(FRAME_MAX_SIDES), padding),
            padding,
            stroke_width: FRAME_MIN_STROKE.max(dim * FRAME_STROKE_RATIO),
            fill: FRAME_FILL,
            stroke: FRAME_STROKE,
            stroke_opacity: FRAME_STROKE_OPACITY,
        }
    }
}


// Shaped QR
//------------------------------------------------------------------------------

/// Output of a shaped render: which modules to draw and where.
#[derive(Debug, Clone)]
pub struct ShapedQr {
    pub(crate) canvas: Canvas,
    pub(crate) shape: Shape,
    pub(crate) visible: Vec<bool>,
    pub(crate) hidden: usize,
    pub(crate) frame: Option<Frame>,
    pub(crate) fg: Rgb<u8>,
    pub(crate) bg: Rgb<u8>,
}

impl ShapedQr {
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn width(&self) -> usize {
        self.canvas.w
    }

    pub fn dimension(&self) -> u32 {
        self.canvas.dimension
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    pub fn foreground(&self) -> Rgb<u8> {
        self.fg
    }

    pub fn background(&self) -> Rgb<u8> {
        self.bg
    }

    /// Row-major visibility grid, same dimensions as the source matrix.
    pub fn visibility(&self) -> &[bool] {
        &self.visible
    }

    pub fn is_visible(&self, r: usize, c: usize) -> bool {
        self.visible[r * self.canvas.w + c]
    }

    /// Pixel rectangles of every drawn module.
    pub fn visible_modules(&self) -> impl Iterator<Item = ModuleRect> + '_ {
        let w = self.canvas.w;
        self.visible
            .iter()
            .enumerate()
            .filter(|(_, v)| **v)
            .map(move |(i, _)| self.canvas.module_rect(i / w, i % w))
    }

    pub fn count_visible(&self) -> usize {
        self.visible.iter().filter(|&&v| v).count()
    }

    /// Dark modules hidden by the shape.
    pub fn count_hidden(&self) -> usize {
        self.hidden
    }
}
