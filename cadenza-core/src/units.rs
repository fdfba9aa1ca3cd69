//! Musical unit conversion.

/// Convert a beat position to seconds under the given tempo and
/// time-signature denominator.
///
/// Negative beats clamp to zero. The formula is the engine's contract —
/// `beat * (60/bpm) * (4/beat_unit)` — and must not be re-derived another
/// way (e.g. via note-duration tables), so that hosts can round-trip values
/// bit-for-bit.
pub fn beats_to_seconds(beat: f64, bpm: f64, beat_unit: u32) -> f64 {
    beat.max(0.0) * (60.0 / bpm) * (4.0 / beat_unit as f64)
}
