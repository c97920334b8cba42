use std::error::Error;

use qrshape::{Matrix, Shape, ShapedQrBuilder};

fn main() -> Result<(), Box<dyn Error>> {
    let matrix = Matrix::from_data(b"https://example.com")?;

    let qr = ShapedQrBuilder::new(&matrix)
        .shape(Shape::Polygon { sides: 6 }) // Hexagon mask with a decorative frame underneath
        .shape_inset(3)                      // Keep 3 modules between the matrix edge and the shape
        .build()?;

    qr.to_image()?.save("hexagon_qr.png")?;
    println!("Hexagon QR saved to: hexagon_qr.png");
    println!("{}", qr.to_str(1));

    Ok(())
}
