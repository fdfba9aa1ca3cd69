//! Document paths and derived identifiers.
//!
//! Everything here is pure and deterministic: the same input always yields
//! the same id or path, across runs and across reimplementations. Collisions
//! (two names normalizing to the same track id, two units of the same kind
//! on one track) are not detected here — uniqueness is the mutation layer's
//! concern.

/// Derive a track id from its human name: lowercase, spaces to underscores,
/// `t_` prefix. `"Lead Vox"` becomes `t_lead_vox`.
pub fn track_id_from_name(name: &str) -> String {
    format!("t_{}", name.to_lowercase().replace(' ', "_"))
}

/// Derive an effect-unit id: `fx_{trackId}_{unit}`.
pub fn fx_unit_id(track_id: &str, unit: &str) -> String {
    format!("fx_{}_{}", track_id, unit)
}

/// Derive a clip id from its source audio path.
///
/// The original engine used the host language's value hash here, which is
/// not portable. We fix the function: FNV-1a (64-bit) over the UTF-8 bytes
/// of the path, reduced modulo 10 000, rendered without padding.
pub fn clip_id_from_path(path: &str) -> String {
    format!("c_{}", fnv1a64(path.as_bytes()) % 10_000)
}

/// Derive a crossfade id from the two clips it spans.
pub fn xf_id(clip_a: &str, clip_b: &str) -> String {
    format!("xf_{}_{}", clip_a, clip_b)
}

/// Build the document path for an effect-unit field:
/// `/fx/{trackId}/{unit}/{field}`.
///
/// A `field` that is already absolute (begins with `/`) passes through
/// unchanged — callers use this to address deeply nested sub-fields (e.g.
/// equalizer band parameters) with a fully qualified path.
pub fn fx_field_path(track_id: &str, unit: &str, field: &str) -> String {
    if field.starts_with('/') {
        return field.to_string();
    }
    format!("/fx/{}/{}/{}", track_id, unit, field)
}

/// Build the document path for an effect-unit slot:
/// `/fx/{trackId}/units/{slot}`, or the append form `/fx/{trackId}/units/-`
/// when no slot is given.
pub fn fx_slot_path(track_id: &str, slot: Option<u32>) -> String {
    match slot {
        Some(s) => format!("/fx/{}/units/{}", track_id, s),
        None => format!("/fx/{}/units/-", track_id),
    }
}

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x100_0000_01b3;

fn fnv1a64(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET;
    for &b in bytes {
        hash ^= b as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_id_normalizes_name() {
        assert_eq!(track_id_from_name("Lead Vox"), "t_lead_vox");
        assert_eq!(track_id_from_name("BASS"), "t_bass");
        assert_eq!(track_id_from_name("Gtr  L"), "t_gtr__l");
    }

    #[test]
    fn colliding_names_collide_silently() {
        assert_eq!(track_id_from_name("Lead Vox"), track_id_from_name("lead vox"));
    }

    #[test]
    fn fx_unit_id_format() {
        assert_eq!(fx_unit_id("t_bass", "comp"), "fx_t_bass_comp");
    }

    #[test]
    fn clip_id_is_deterministic_and_bounded() {
        let a = clip_id_from_path("samples/kick.wav");
        let b = clip_id_from_path("samples/kick.wav");
        assert_eq!(a, b);
        assert!(a.starts_with("c_"));
        let n: u64 = a[2..].parse().unwrap();
        assert!(n < 10_000);
        assert_ne!(a, clip_id_from_path("samples/snare.wav"));
    }

    #[test]
    fn fnv1a_reference_vectors() {
        // Published FNV-1a 64-bit test vectors.
        assert_eq!(fnv1a64(b""), 0xcbf2_9ce4_8422_2325);
        assert_eq!(fnv1a64(b"a"), 0xaf63_dc4c_8601_ec8c);
        assert_eq!(fnv1a64(b"foobar"), 0x8594_4171_f739_67e8);
    }

    #[test]
    fn field_path_prefixes_relative_and_passes_absolute() {
        assert_eq!(fx_field_path("t1", "eq", "bands/0/freq"), "/fx/t1/eq/bands/0/freq");
        assert_eq!(fx_field_path("t1", "eq", "/fx/t1/custom/gain"), "/fx/t1/custom/gain");
    }

    #[test]
    fn slot_path_appends_without_slot() {
        assert_eq!(fx_slot_path("t1", None), "/fx/t1/units/-");
        assert_eq!(fx_slot_path("t1", Some(2)), "/fx/t1/units/2");
    }

    #[test]
    fn xf_id_format() {
        assert_eq!(xf_id("c_12", "c_34"), "xf_c_12_c_34");
    }
}
