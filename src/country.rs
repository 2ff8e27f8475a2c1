use std::fmt;

/// A position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub latitude: f64,
    pub longitude: f64,
}

impl Point {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Finite and within −90..=90 / −180..=180. NaN is treated as missing.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Same spot on the globe. Longitude means nothing at a pole, and
    /// −180 and 180 are the same meridian.
    pub fn same_place(&self, other: &Point) -> bool {
        if self.latitude != other.latitude {
            return false;
        }
        self.latitude.abs() == 90.0 || (self.longitude - other.longitude).rem_euclid(360.0) == 0.0
    }
}

/// An immutable catalog record.
///
/// `code` is stored upper-case; comparisons against user-supplied codes go
/// through [`Country::has_code`], which ignores case.
#[derive(Debug, Clone, PartialEq)]
pub struct Country {
    code: String,
    position: Point,
    name: String,
}

impl Country {
    pub fn new(code: &str, latitude: f64, longitude: f64, name: impl Into<String>) -> Self {
        Self {
            code: code.trim().to_ascii_uppercase(),
            position: Point::new(latitude, longitude),
            name: name.into(),
        }
    }

    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.position.latitude
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.position.longitude
    }

    /// The default (untranslated) display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_code(&self, code: &str) -> bool {
        self.code.eq_ignore_ascii_case(code.trim())
    }

    /// `images/countries/<lowercase code>/vector.svg`
    pub fn image_path(&self) -> String {
        format!(
            "images/countries/{}/vector.svg",
            self.code.to_ascii_lowercase()
        )
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}
