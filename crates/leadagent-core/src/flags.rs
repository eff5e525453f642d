//! Flag glyphs for target countries and regions

/// Shown when a country name has no entry in [`FLAGS`].
pub const GLOBE: &str = "🌍";

/// Exact-name lookup table. Region names come from payloads that list
/// `target_regions` instead of countries.
const FLAGS: &[(&str, &str)] = &[
    ("United States", "🇺🇸"),
    ("Canada", "🇨🇦"),
    ("Mexico", "🇲🇽"),
    ("Brazil", "🇧🇷"),
    ("United Kingdom", "🇬🇧"),
    ("Ireland", "🇮🇪"),
    ("Germany", "🇩🇪"),
    ("France", "🇫🇷"),
    ("Netherlands", "🇳🇱"),
    ("Spain", "🇪🇸"),
    ("Italy", "🇮🇹"),
    ("Sweden", "🇸🇪"),
    ("Switzerland", "🇨🇭"),
    ("Israel", "🇮🇱"),
    ("United Arab Emirates", "🇦🇪"),
    ("India", "🇮🇳"),
    ("Singapore", "🇸🇬"),
    ("Japan", "🇯🇵"),
    ("South Korea", "🇰🇷"),
    ("China", "🇨🇳"),
    ("Australia", "🇦🇺"),
    ("New Zealand", "🇳🇿"),
    ("North America", "🇺🇸"),
    ("Europe", "🇪🇺"),
    ("Asia-Pacific", "🌏"),
    ("Latin America", "🌎"),
    ("Middle East", "🌍"),
    ("Africa", "🌍"),
];

/// Look up the flag for `country` by exact name match.
pub fn flag_for(country: &str) -> &'static str {
    FLAGS
        .iter()
        .find(|(name, _)| *name == country)
        .map(|(_, flag)| *flag)
        .unwrap_or(GLOBE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_country() {
        assert_eq!(flag_for("United States"), "🇺🇸");
        assert_eq!(flag_for("Germany"), "🇩🇪");
    }

    #[test]
    fn test_match_is_exact() {
        assert_eq!(flag_for("united states"), GLOBE);
        assert_eq!(flag_for("United States "), GLOBE);
        assert_eq!(flag_for("USA"), GLOBE);
    }

    #[test]
    fn test_region_entries() {
        assert_eq!(flag_for("Europe"), "🇪🇺");
        assert_eq!(flag_for("Asia-Pacific"), "🌏");
    }
}
