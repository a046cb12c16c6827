//! Property tests for the Markdown codec

use crate::common::{sorted_spans, styled_from_codes};
use proptest::prelude::*;
use stylemark_babel::model::attributes::NEWLINE_SENTINEL;
use stylemark_babel::options::CodecOptions;
use stylemark_babel::transforms::{decode_markdown, encode_style_codes, markdown_from_styled};

/// Characters paired with a style code; newlines always get the sentinel.
fn styled_chars() -> impl Strategy<Value = (String, Vec<u8>)> {
    prop::collection::vec(
        (prop::sample::select(vec!['a', 'b', 'c', ' ', '\n']), 0u8..8),
        0..40,
    )
    .prop_map(|pairs| {
        let text = pairs.iter().map(|(ch, _)| *ch).collect();
        let codes = pairs
            .iter()
            .map(|&(ch, code)| if ch == '\n' { NEWLINE_SENTINEL } else { code })
            .collect();
        (text, codes)
    })
}

/// Letter-only runs carrying at most one attribute each.
fn single_attribute_runs() -> impl Strategy<Value = (String, Vec<u8>)> {
    prop::collection::vec(
        ("[a-z]{1,5}", prop::sample::select(vec![0u8, 1, 2, 4])),
        0..8,
    )
    .prop_map(|runs| {
        let mut text = String::new();
        let mut codes = Vec::new();
        for (word, code) in runs {
            codes.extend(std::iter::repeat(code).take(word.chars().count()));
            text.push_str(&word);
        }
        (text, codes)
    })
}

proptest! {
    #[test]
    fn encode_output_is_balanced((text, codes) in styled_chars()) {
        let md = encode_style_codes(&text, &codes, &CodecOptions::default()).unwrap();
        prop_assert_eq!(md.matches('*').count() % 2, 0);
        prop_assert_eq!(md.matches('~').count() % 4, 0);
    }

    #[test]
    fn unstyled_text_encodes_to_itself(text in "[a-z \n]{0,30}") {
        let codes = vec![0u8; text.chars().count()];
        let md = encode_style_codes(&text, &codes, &CodecOptions::default()).unwrap();
        prop_assert_eq!(md, text);
    }

    #[test]
    fn single_attribute_runs_round_trip((text, codes) in single_attribute_runs()) {
        let options = CodecOptions::default();
        let original = styled_from_codes(&text, &codes);
        let md = markdown_from_styled(&original, &options);

        let decoded = decode_markdown(&md, &options);
        prop_assert_eq!(decoded.text(), text.as_str());
        prop_assert_eq!(
            decoded.style_array(options.extract.pair_policy),
            original.style_array(options.extract.pair_policy)
        );
    }

    #[test]
    fn decode_is_idempotent(md in "[ab*~ \n]{0,30}") {
        let options = CodecOptions::default();
        let once = decode_markdown(&md, &options);
        let twice = decode_markdown(once.text(), &options);
        prop_assert_eq!(twice.text(), once.text());
        prop_assert!(twice.spans().is_empty());
    }

    #[test]
    fn exported_single_runs_decode_to_the_same_spans((text, codes) in single_attribute_runs()) {
        let options = CodecOptions::default();
        let original = styled_from_codes(&text, &codes);
        let decoded = decode_markdown(&markdown_from_styled(&original, &options), &options);
        prop_assert_eq!(sorted_spans(&decoded), sorted_spans(&original));
    }
}
