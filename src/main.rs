use std::error::Error;

use log::info;
use qrshape::{Matrix, Shape, ShapedQrBuilder};

fn parse_shape(arg: &str) -> Result<Shape, Box<dyn Error>> {
    match arg {
        "square" => Ok(Shape::Square),
        "circle" => Ok(Shape::Circle),
        _ => match arg.strip_prefix("polygon:") {
            Some(n) => Ok(Shape::polygon(n.parse()?)),
            None => Err(format!("Unknown shape: {arg}").into()),
        },
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(data) = args.next() else {
        eprintln!("Usage: qrshape <data> [square|circle|polygon:N] [out-prefix]");
        std::process::exit(2);
    };
    let shape = parse_shape(args.next().as_deref().unwrap_or("circle"))?;
    let prefix = args.next().unwrap_or_else(|| "shaped_qr".to_string());

    let matrix = Matrix::from_data(data.as_bytes())?;
    info!("Generated matrix {}", matrix.metadata());

    let qr = ShapedQrBuilder::new(&matrix).shape(shape).build()?;

    let png = format!("{prefix}.png");
    qr.to_image()?.save(&png)?;
    let svg = format!("{prefix}.svg");
    std::fs::write(&svg, qr.to_svg())?;

    info!("Hidden {} of {} dark modules", qr.count_hidden(), matrix.count_dark_modules());
    println!("Saved {png} and {svg}");

    Ok(())
}
