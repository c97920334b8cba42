mod mask;
mod render;

pub use mask::{compose, is_module_visible, Canvas, Frame, ModuleRect, ShapedQr};

use image::Rgb;
use log::debug;

use crate::common::{Matrix, QRError, QRResult};
use crate::shape::Shape;

pub const DEFAULT_MODULE_SIZE: u32 = 8;
pub const DEFAULT_QUIET_ZONE: u32 = 4;
pub const DEFAULT_SHAPE_INSET: u32 = 3;

/// Render request for one matrix. Nothing here outlives a single `build`.
pub struct ShapedQrBuilder<'a> {
    matrix: &'a Matrix,
    shape: Shape,
    module_sz: u32,
    qz: u32,
    inset: u32,
    frame: bool,
    fg: Rgb<u8>,
    bg: Rgb<u8>,
}

impl<'a> ShapedQrBuilder<'a> {
    pub fn new(matrix: &'a Matrix) -> Self {
        Self {
            matrix,
            shape: Shape::Square,
            module_sz: DEFAULT_MODULE_SIZE,
            qz: DEFAULT_QUIET_ZONE,
            inset: DEFAULT_SHAPE_INSET,
            frame: true,
            fg: Rgb([0, 0, 0]),
            bg: Rgb([255, 255, 255]),
        }
    }

    pub fn shape(&mut self, shape: Shape) -> &mut Self {
        self.shape = shape;
        self
    }

    /// Edge length of one module in pixels.
    pub fn module_size(&mut self, module_sz: u32) -> &mut Self {
        self.module_sz = module_sz;
        self
    }

    /// Blank border around the matrix, in modules.
    pub fn quiet_zone(&mut self, qz: u32) -> &mut Self {
        self.qz = qz;
        self
    }

    /// Modules by which the shape boundary is pulled inward before masking.
    pub fn shape_inset(&mut self, inset: u32) -> &mut Self {
        self.inset = inset;
        self
    }

    /// Whether polygon shapes carry a decorative frame.
    pub fn frame(&mut self, frame: bool) -> &mut Self {
        self.frame = frame;
        self
    }

    pub fn foreground(&mut self, fg: Rgb<u8>) -> &mut Self {
        self.fg = fg;
        self
    }

    pub fn background(&mut self, bg: Rgb<u8>) -> &mut Self {
        self.bg = bg;
        self
    }

    pub fn metadata(&self) -> String {
        format!(
            "{{ Width: {}, Shape: {:?}, Module size: {}, Quiet zone: {}, Inset: {} }}",
            self.matrix.width(),
            self.shape,
            self.module_sz,
            self.qz,
            self.inset
        )
    }
}


impl ShapedQrBuilder<'_> {
    pub fn build(&self) -> QRResult<ShapedQr> {
        debug!("Generating shaped QR {}...", self.metadata());
        if self.module_sz == 0 {
            return Err(QRError::InvalidModuleSize);
        }

        debug!("Laying out canvas...");
        let canvas = Canvas::new(self.matrix.width(), self.module_sz, self.qz)
            .ok_or(QRError::CanvasTooLarge)?;

        debug!("Masking modules...");
        let visible = compose(self.matrix, &canvas, self.shape, self.inset);

        let frame = match self.shape {
            Shape::Polygon { sides } if self.frame => {
                debug!("Tracing polygon frame...");
                Some(Frame::new(canvas.dimension, sides))
            }
            _ => None,
        };

        let dark = self.matrix.count_dark_modules();
        let shown = visible.iter().filter(|&&v| v).count();
        let hidden = dark - shown;

        debug!(
            "Shaped QR ready: Dimension: {}px, Dark modules: {}, Drawn: {}, Hidden: {}",
            canvas.dimension, dark, shown, hidden
        );

        Ok(ShapedQr { canvas, shape: self.shape, visible, hidden, frame, fg: self.fg, bg: self.bg })
    }
}
