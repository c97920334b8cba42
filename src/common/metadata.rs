use std::fmt::{Display, Error, Formatter};

// Error correction level
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord)]
pub enum ECLevel {
    L = 0,
    M = 1,
    Q = 2,
    H = 3,
}

impl From<ECLevel> for qrcode::EcLevel {
    fn from(ecl: ECLevel) -> Self {
        match ecl {
            ECLevel::L => qrcode::EcLevel::L,
            ECLevel::M => qrcode::EcLevel::M,
            ECLevel::Q => qrcode::EcLevel::Q,
            ECLevel::H => qrcode::EcLevel::H,
        }
    }
}

// Version
//------------------------------------------------------------------------------

pub const MIN_WIDTH: usize = 21;
pub const MAX_WIDTH: usize = 177;

/// Version tier of a normal QR symbol, derived from its width.
///
/// Computed with floored division in signed arithmetic, so widths below 21
/// map to versions below 1 instead of underflowing.
pub fn version_from_width(w: i32) -> i32 {
    w.saturating_sub(21).div_euclid(4) + 1
}

pub fn width_from_version(ver: i32) -> i32 {
    ver.saturating_sub(1).saturating_mul(4).saturating_add(21)
}

/// True if `w` is the width of a real QR symbol, versions 1 to 40.
pub fn is_standard_width(w: usize) -> bool {
    (MIN_WIDTH..=MAX_WIDTH).contains(&w) && (w - MIN_WIDTH) % 4 == 0
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Metadata {
    pub width: usize,
    pub version: i32,
}

impl Metadata {
    pub fn new(width: usize) -> Self {
        Self { width, version: version_from_width(width as i32) }
    }
}

impl Display for Metadata {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "{{ Version: {}, Width: {} }}", self.version, self.width)
    }
}

#[cfg(test)]
mod version_tests {
    use test_case::test_case;

    use super::{is_standard_width, version_from_width, width_from_version, Metadata};

    #[test_case(21, 1)]
    #[test_case(25, 2)]
    #[test_case(45, 7)]
    #[test_case(177, 40)]
    #[test_case(17, 0)]
    #[test_case(0, -5)]
    #[test_case(i32::MIN, -536870911)]
    #[test_case(i32::MAX, 536870907)]
    fn test_version_from_width(w: i32, ver: i32) {
        assert_eq!(version_from_width(w), ver);
    }

    #[test]
    fn test_width_roundtrip() {
        for ver in 1..=40 {
            assert_eq!(version_from_width(width_from_version(ver)), ver);
        }
    }

    #[test]
    fn test_width_saturates() {
        assert_eq!(width_from_version(i32::MAX), i32::MAX);
        assert_eq!(width_from_version(i32::MIN), i32::MIN + 21);
    }

    #[test_case(21, true)]
    #[test_case(177, true)]
    #[test_case(22, false)]
    #[test_case(181, false)]
    #[test_case(0, false)]
    fn test_is_standard_width(w: usize, exp: bool) {
        assert_eq!(is_standard_width(w), exp);
    }

    #[test]
    fn test_metadata_display() {
        assert_eq!(Metadata::new(25).to_string(), "{ Version: 2, Width: 25 }");
    }
}
