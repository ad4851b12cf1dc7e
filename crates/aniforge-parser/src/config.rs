//! Rendering configuration for the classifier.

/// Controls how extracted season and episode numbers are rendered.
///
/// The extractors return bare decimal strings (`"5"`, `"15"`, `"1~12"`)
/// or an empty string when nothing matched; the classifier renders these
/// with the values configured here instead of compiled-in constants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierConfig {
    /// Rendered in place of an undetermined season or episode.
    pub default_number: String,
    /// Minimum digit width; shorter numbers are left-padded with zeros.
    pub min_digits: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            default_number: "00".to_string(),
            min_digits: 2,
        }
    }
}

impl ClassifierConfig {
    /// Render an extracted number: empty becomes the default, ranges are
    /// kept verbatim, single numbers are zero-padded to `min_digits`.
    pub(crate) fn render(&self, extracted: &str) -> String {
        if extracted.is_empty() {
            return self.default_number.clone();
        }
        if extracted.contains('~') {
            return extracted.to_string();
        }
        format!("{:0>width$}", extracted, width = self.min_digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_defaults_empty() {
        let config = ClassifierConfig::default();
        assert_eq!(config.render(""), "00");
    }

    #[test]
    fn render_pads_short_numbers() {
        let config = ClassifierConfig::default();
        assert_eq!(config.render("5"), "05");
        assert_eq!(config.render("15"), "15");
        assert_eq!(config.render("100"), "100");
    }

    #[test]
    fn render_keeps_ranges_verbatim() {
        let config = ClassifierConfig::default();
        assert_eq!(config.render("1~12"), "1~12");
    }

    #[test]
    fn render_honors_custom_defaults() {
        let config = ClassifierConfig {
            default_number: "000".to_string(),
            min_digits: 3,
        };
        assert_eq!(config.render(""), "000");
        assert_eq!(config.render("7"), "007");
    }
}
