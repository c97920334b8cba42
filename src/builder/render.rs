use std::f64::consts::PI;
use std::fmt::Write;

use image::{Rgb, RgbImage};
use imageproc::{
    drawing::{draw_filled_rect_mut, draw_polygon_mut},
    point::Point as PixelPoint,
    rect::Rect,
};

use super::mask::{Frame, ShapedQr};
use crate::common::{f64_to_i32, QRError, QRResult};
use crate::shape::effective_sides;

// Render
//------------------------------------------------------------------------------

impl ShapedQr {
    pub fn to_image(&self) -> QRResult<RgbImage> {
        let dim = self.canvas.dimension;
        let mut canvas = RgbImage::from_pixel(dim, dim, self.bg);

        if let Some(frame) = &self.frame {
            draw_frame(&mut canvas, frame, dim)?;
        }

        for m in self.visible_modules() {
            let x = i32::try_from(m.x).or(Err(QRError::CastingFailed))?;
            let y = i32::try_from(m.y).or(Err(QRError::CastingFailed))?;
            draw_filled_rect_mut(&mut canvas, Rect::at(x, y).of_size(m.sz, m.sz), self.fg);
        }

        Ok(canvas)
    }

    pub fn to_svg(&self) -> String {
        let dim = self.canvas.dimension;
        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg width="{dim}" height="{dim}" viewBox="0 0 {dim} {dim}" shape-rendering="crispEdges" xmlns="http://www.w3.org/2000/svg">"#
        );
        let _ = writeln!(svg, r#"<rect width="100%" height="100%" fill="{}"/>"#, to_hex(self.bg));

        if let Some(frame) = &self.frame {
            let d = frame.path.to_svg_path();
            let _ = writeln!(svg, r#"<path d="{d}" fill="{}"/>"#, to_hex(frame.fill));
            let _ = writeln!(
                svg,
                r#"<path d="{d}" fill="none" stroke="{}" stroke-width="{:.2}" opacity="{}"/>"#,
                to_hex(frame.stroke),
                frame.stroke_width,
                frame.stroke_opacity
            );
        }

        let fg = to_hex(self.fg);
        for m in self.visible_modules() {
            let _ = writeln!(
                svg,
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{fg}"/>"#,
                m.x, m.y, m.sz, m.sz
            );
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Text rendering, `module_sz` characters per module edge.
    pub fn to_str(&self, module_sz: usize) -> String {
        let qz_sz = self.canvas.qz as usize * module_sz;
        let qr_sz = self.canvas.w * module_sz;
        let total_sz = qz_sz + qr_sz + qz_sz;

        let mut canvas = String::with_capacity(total_sz * (total_sz + 1) * 3);
        for i in 0..total_sz {
            for j in 0..total_sz {
                if i < qz_sz || i >= qz_sz + qr_sz || j < qz_sz || j >= qz_sz + qr_sz {
                    canvas.push(' ');
                    continue;
                }
                let r = (i - qz_sz) / module_sz;
                let c = (j - qz_sz) / module_sz;
                canvas.push(if self.is_visible(r, c) { '█' } else { ' ' });
            }
            canvas.push('\n');
        }

        canvas
    }
}

fn to_hex(clr: Rgb<u8>) -> String {
    let [r, g, b] = clr.0;
    format!("#{r:02x}{g:02x}{b:02x}")
}

fn blend(base: Rgb<u8>, top: Rgb<u8>, opacity: f64) -> Rgb<u8> {
    let mix = |b: u8, t: u8| (b as f64 * (1.0 - opacity) + t as f64 * opacity).round() as u8;
    Rgb([mix(base[0], top[0]), mix(base[1], top[1]), mix(base[2], top[2])])
}

// The stroke is centered on the outline, so it is drawn as a band between two
// polygons offset by half the stroke width along the apothem.
fn draw_frame(canvas: &mut RgbImage, frame: &Frame, dim: u32) -> QRResult<()> {
    let c = dim as f64 / 2.0;
    let r = c - frame.padding;
    if r < 1.0 {
        return Ok(());
    }

    let n = effective_sides(frame.path.len() as i32) as f64;
    let half = frame.stroke_width / 2.0 / (PI / n).cos();
    let stroke = blend(frame.fill, frame.stroke, frame.stroke_opacity);

    let outer = scaled_polygon(frame, c, (r + half) / r)?;
    fill_polygon(canvas, outer, stroke);

    if r > half + 1.0 {
        let inner = scaled_polygon(frame, c, (r - half) / r)?;
        fill_polygon(canvas, inner, frame.fill);
    }
    Ok(())
}

// Dense polygons can round several vertices onto one pixel, and imageproc
// rejects outlines whose first and last points coincide.
fn fill_polygon(canvas: &mut RgbImage, mut poly: Vec<PixelPoint<i32>>, clr: Rgb<u8>) {
    poly.dedup();
    while poly.len() > 1 && poly.first() == poly.last() {
        poly.pop();
    }
    if poly.len() >= 3 {
        draw_polygon_mut(canvas, &poly, clr);
    }
}

fn scaled_polygon(frame: &Frame, c: f64, factor: f64) -> QRResult<Vec<PixelPoint<i32>>> {
    frame
        .path
        .vertices()
        .iter()
        .map(|p| {
            let x = f64_to_i32(&(c + (p.x - c) * factor))?;
            let y = f64_to_i32(&(c + (p.y - c) * factor))?;
            Ok(PixelPoint::new(x, y))
        })
        .collect()
}
