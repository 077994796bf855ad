//! Property tests for color override parsing.

use proptest::prelude::*;

use icopack::HexColor;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: three hex digits expand by doubling each channel.
    #[test]
    fn property_short_color_doubles_each_channel(hex in "[0-9a-fA-F]{3}") {
        let color = HexColor::parse(&format!("#{}", hex)).expect("valid short color");
        let expected: String = hex.chars().flat_map(|c| [c, c]).collect();

        prop_assert_eq!(color.as_str(), format!("#{}", expected));
    }

    /// PROPERTY: six hex digits are kept as written.
    #[test]
    fn property_long_color_is_kept(hex in "[0-9a-fA-F]{6}") {
        let input = format!("#{}", hex);
        let color = HexColor::parse(&input).expect("valid long color");

        prop_assert_eq!(color.as_str(), input.as_str());
    }

    /// PROPERTY: any other length is rejected.
    #[test]
    fn property_other_lengths_are_rejected(hex in "[0-9a-f]{0,12}") {
        prop_assume!(hex.len() != 3 && hex.len() != 6);

        let input = format!("#{}", hex);
        prop_assert!(HexColor::parse(&input).is_none());
    }

    /// PROPERTY: parsing never panics, and accepted input is normalized to `#rrggbb`.
    #[test]
    fn property_parse_never_panics(input in "(?s).{0,16}") {
        if let Some(color) = HexColor::parse(&input) {
            prop_assert_eq!(color.as_str().len(), 7);
            prop_assert!(color.as_str().starts_with('#'));
        }
    }

    /// PROPERTY: the override replaces every `currentColor` paint attribute.
    #[test]
    fn property_apply_replaces_current_color(hex in "[0-9a-f]{6}", repeats in 1usize..5) {
        let color = HexColor::parse(&format!("#{}", hex)).unwrap();
        let svg = r#"<path stroke="currentColor" fill="currentColor"/>"#.repeat(repeats);

        let applied = color.apply_to_svg(&svg);

        prop_assert!(!applied.contains("currentColor"));
        prop_assert_eq!(applied.matches(color.as_str()).count(), repeats * 2);
    }
}
