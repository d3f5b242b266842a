//! Pixel pitch reference data
//!
//! Pixel density per 500 mm cabinet edge for the catalogued pitches,
//! from Uniview / NovaStar datasheets. A 500×1000 mm cabinet carries
//! twice the pixels in height.

/// Cabinet module edge the pixel table is quoted against, in mm.
const TILE_MODULE_MM: f64 = 500.0;

/// Pixel density for one catalogued pitch.
#[derive(Debug, Clone)]
pub struct PitchEntry {
    /// Nominal pitch as stored in project files, in mm.
    pub pitch_mm: f64,
    /// Pixels across one 500 mm cabinet edge.
    pub pixels_per_500mm: u32,
    /// Actual physical pitch, in mm.
    pub pitch_actual_mm: f64,
    /// Datasheet the figures were taken from.
    pub source: &'static str,
}

static PITCH_DB: [PitchEntry; 6] = [
    PitchEntry {
        pitch_mm: 1.5,
        pixels_per_500mm: 320,
        pitch_actual_mm: 1.562,
        source: "Uniview AS 1.5 — 500×500: 320×320 px | 500×1000: 320×640 px",
    },
    PitchEntry {
        pitch_mm: 1.9,
        pixels_per_500mm: 256,
        pitch_actual_mm: 1.953,
        source: "Uniview AS 1.9 — 500×500: 256×256 px | 500×1000: 256×512 px",
    },
    PitchEntry {
        pitch_mm: 2.6,
        pixels_per_500mm: 192,
        pitch_actual_mm: 2.604,
        source: "Uniview UR 2.6 2H — 500×500: 192×192 px | 500×1000: 192×384 px",
    },
    PitchEntry {
        pitch_mm: 2.9,
        pixels_per_500mm: 168,
        pitch_actual_mm: 2.976,
        source: "Uniview UR 2.9 2H — 500×500: 168×168 px | 500×1000: 168×336 px",
    },
    PitchEntry {
        pitch_mm: 3.9,
        pixels_per_500mm: 128,
        pitch_actual_mm: 3.906,
        source: "Uniview UR 3.9 2H — 500×500: 128×128 px | 500×1000: 128×256 px",
    },
    PitchEntry {
        pitch_mm: 4.8,
        pixels_per_500mm: 104,
        pitch_actual_mm: 4.807,
        source: "Uniview UR 4.8 2H — 500×500: 104×104 px | 500×1000: 104×208 px",
    },
];

/// All catalogued pitches, finest first.
pub fn all_pitches() -> &'static [PitchEntry] {
    &PITCH_DB
}

/// Pixels across one 500 mm cabinet edge for the given pitch.
///
/// Pitches not in the catalog derive the density from the pitch itself,
/// so the metrics engine stays total over any pitch value.
pub fn pixels_per_500mm(pitch_mm: f64) -> u32 {
    if let Some(entry) = PITCH_DB.iter().find(|e| e.pitch_mm == pitch_mm) {
        return entry.pixels_per_500mm;
    }
    tracing::debug!(pitch_mm, "pitch not in catalog, deriving pixel density");
    (TILE_MODULE_MM / pitch_mm).floor() as u32
}
