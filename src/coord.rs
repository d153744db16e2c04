use geo_traits::CoordTrait;

/// The coordinate axis a node splits on.
///
/// The splitting axis alternates with tree depth: latitude at even depths,
/// longitude at odd depths. This enum is the whole of the k = 2 contract;
/// the tree has no other notion of dimensionality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Split on the latitude value.
    Lat,
    /// Split on the longitude value.
    Lon,
}

impl Axis {
    /// The axis used by a node at `depth` (the root has depth 0).
    #[inline]
    pub fn from_depth(depth: usize) -> Self {
        if depth % 2 == 0 {
            Axis::Lat
        } else {
            Axis::Lon
        }
    }

    /// The axis used one level deeper.
    #[inline]
    pub fn next(self) -> Self {
        match self {
            Axis::Lat => Axis::Lon,
            Axis::Lon => Axis::Lat,
        }
    }
}

/// A geographic coordinate pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoord {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

impl GeoCoord {
    /// Create a coordinate from latitude and longitude.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// The value of this coordinate along `axis`.
    #[inline]
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Lat => self.lat,
            Axis::Lon => self.lon,
        }
    }

    /// Convert from any [`CoordTrait`] implementor, reading `x` as longitude
    /// and `y` as latitude.
    pub fn from_coord(coord: &impl CoordTrait<T = f64>) -> Self {
        Self {
            lat: coord.y(),
            lon: coord.x(),
        }
    }
}

impl CoordTrait for GeoCoord {
    type T = f64;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn x(&self) -> Self::T {
        self.lon
    }

    fn y(&self) -> Self::T {
        self.lat
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        match n {
            0 => self.lon,
            1 => self.lat,
            _ => panic!("Invalid index of coord"),
        }
    }
}
