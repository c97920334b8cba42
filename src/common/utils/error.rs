use std::fmt::{Debug, Display, Error, Formatter};

// Error
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum QRError {
    // Upstream generator
    EmptyData,
    DataTooLong,
    EncodingFailed,

    // Matrix
    EmptyMatrix,
    NonSquareMatrix,

    // Builder & render
    InvalidModuleSize,
    CanvasTooLarge,
    CastingFailed,
}

impl Display for QRError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        let msg = match *self {
            // Upstream generator
            Self::EmptyData => "Empty data",
            Self::DataTooLong => "Data too long",
            Self::EncodingFailed => "Failed to encode data into a QR matrix",

            // Matrix
            Self::EmptyMatrix => "Empty matrix",
            Self::NonSquareMatrix => "Matrix is not square",

            // Builder & render
            Self::InvalidModuleSize => "Module size must be greater than zero",
            Self::CanvasTooLarge => "Canvas dimension overflows u32",
            Self::CastingFailed => "Casting failed",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for QRError {}

pub type QRResult<T> = Result<T, QRError>;
