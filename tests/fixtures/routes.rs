//! Real-world and edge-of-range paths for round-trip tests.

/// A named stop with coordinates.
#[derive(Debug, Clone)]
pub struct Stop {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Stop {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

// ============================================================================
// Las Vegas Strip, north to south (OpenStreetMap)
// ============================================================================

pub const STRIP_ROUTE: &[Stop] = &[
    Stop::new("Sinatra", 36.1300035, -115.1654850),
    Stop::new("Encore at Wynn", 36.1289345, -115.1653620),
    Stop::new("Wynn Las Vegas", 36.1263781, -115.1658180),
    Stop::new("Public House", 36.1219193, -115.1689317),
    Stop::new("Ruth's Chris Steak House", 36.1193113, -115.1722630),
    Stop::new("Yard House", 36.1177147, -115.1691992),
    Stop::new("Caesars Palace", 36.1162, -115.1745),
    Stop::new("Bellagio", 36.1126, -115.1767),
    Stop::new("Gordon Ramsay BurGR", 36.1107195, -115.1720818),
    Stop::new("Hard Rock Cafe", 36.1041592, -115.1722166),
    Stop::new("MGM Grand", 36.1023654, -115.1688720),
    Stop::new("Charlie Palmer Steak", 36.0910624, -115.1743364),
    Stop::new("Bootlegger Bistro", 36.0492047, -115.1715744),
];

// ============================================================================
// Extremes: poles, antimeridian, equator
// ============================================================================

pub const EXTREMES: &[Stop] = &[
    Stop::new("North Pole", 90.0, 0.0),
    Stop::new("South Pole antimeridian", -90.0, 180.0),
    Stop::new("Antimeridian west", 0.0, -180.0),
    Stop::new("Null Island", 0.0, 0.0),
    Stop::new("Just off null island", 0.00001, -0.00001),
];

pub fn coords(stops: &[Stop]) -> Vec<(f64, f64)> {
    stops.iter().map(Stop::coords).collect()
}
