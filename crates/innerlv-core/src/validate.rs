use crate::chart::{InternalLv, Level};

/// Check a candidate internal level against the legal quantized set of its
/// declared bracket.
///
/// Pure membership test; callers clear rejected candidates and report the
/// title alongside the offending value.
pub fn check_quantization(level: Level, candidate: InternalLv) -> bool {
    level.legal_range().contains(&candidate.scaled())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lv(value: f64) -> InternalLv {
        InternalLv::from_value(value)
    }

    #[test]
    fn test_plus_bracket_set() {
        assert!(!check_quantization(Level::Lv12Plus, lv(12.3)));
        assert!(check_quantization(Level::Lv12Plus, lv(12.6)));
        assert!(check_quantization(Level::Lv12Plus, lv(12.7)));
        assert!(check_quantization(Level::Lv12Plus, lv(12.9)));
        assert!(!check_quantization(Level::Lv12Plus, lv(13.0)));
    }

    #[test]
    fn test_plain_bracket_set() {
        assert!(check_quantization(Level::Lv13, lv(13.0)));
        assert!(check_quantization(Level::Lv13, lv(13.5)));
        assert!(!check_quantization(Level::Lv13, lv(13.6)));
        assert!(!check_quantization(Level::Lv13, lv(12.9)));
    }

    #[test]
    fn test_top_bracket_set() {
        assert!(check_quantization(Level::Lv15, lv(15.0)));
        assert!(check_quantization(Level::Lv15, lv(15.5)));
        assert!(!check_quantization(Level::Lv15, lv(15.6)));
    }
}
