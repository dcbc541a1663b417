//! Property tests for content normalization.

use proptest::prelude::*;

use cpisync::domain::services::{contents_equal, normalize, TextKind};

fn lines() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[<>/a-z0-9=:]{1,20}", 0..10)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: normalization never panics on arbitrary input.
    #[test]
    fn property_normalize_never_panics(s in "(?s).{0,256}") {
        let _ = normalize(&s, TextKind::Plain);
        let _ = normalize(&s, TextKind::Manifest);
        let _ = normalize(&s, TextKind::Parameters);
    }

    /// PROPERTY: indentation, line endings and blank lines never count.
    #[test]
    fn property_layout_whitespace_is_ignored(lines in lines(), indent in 0usize..6) {
        let compact = lines.join("\n");
        let padding = " ".repeat(indent);
        let spread: String = lines
            .iter()
            .map(|line| format!("{}{}\r\n\r\n", padding, line))
            .collect();
        prop_assert!(contents_equal(compact.as_bytes(), spread.as_bytes(), TextKind::Plain));
    }

    /// PROPERTY: parameter comments never count.
    #[test]
    fn property_parameter_comments_ignored(
        lines in lines(),
        comment in "[ -~]{0,30}",
    ) {
        let body = lines.join("\n");
        let commented = format!("#{}\n{}", comment, body);
        prop_assert!(contents_equal(body.as_bytes(), commented.as_bytes(), TextKind::Parameters));
    }
}
