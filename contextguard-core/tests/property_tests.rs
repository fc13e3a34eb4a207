//! Property tests for the locator and the fallback algorithms

use contextguard_core::adapt::summarize::{select, selection_size};
use contextguard_core::adapt::{proofread, summarize};
use contextguard_core::sentence;
use contextguard_core::{ContentLocator, Document, Selection, SourceKind, SummaryOptions};
use proptest::prelude::*;

fn sentences_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,8}( [a-z]{1,8}){0,8}[.!?]", 1..25)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_extraction_is_clamped(chunk in "[a-z ]{1,20}", repeat in 0usize..2_000) {
        let text = chunk.repeat(repeat);
        let locator = ContentLocator::new();

        let in_article = Document::builder().element("article", &text).build();
        let in_paragraph = Document::builder().element("p", &text).build();
        let in_span = Document::builder().element("span", &text).build();

        for doc in [&in_article, &in_paragraph, &in_span] {
            let result = locator.locate(None, doc);
            prop_assert!(result.text.chars().count() <= 10_000);
        }

        let selected = locator.locate(Some(&Selection::detached(text.clone())), &in_span);
        prop_assert!(selected.text.chars().count() <= 10_000);
    }

    #[test]
    fn prop_selection_always_wins(
        selection in "[a-zA-Z][a-zA-Z .]{0,40}",
        body in "[a-z .]{0,400}",
    ) {
        let doc = Document::builder()
            .element("article", &body)
            .element("main", &body)
            .element("p", &body)
            .build();
        let result = ContentLocator::new().locate(Some(&Selection::detached(selection)), &doc);
        prop_assert_eq!(result.source_kind, SourceKind::Selection);
        prop_assert!(result.has_selection);
    }

    #[test]
    fn prop_summary_size(sentences in sentences_strategy()) {
        let text = sentences.join(" ");
        let n = sentence::split(&text).len();
        prop_assert_eq!(n, sentences.len());

        let summary = summarize(&text, &SummaryOptions::default());
        let expected = n.min(3.max((n as f64 * 0.3).ceil() as usize));
        prop_assert_eq!(sentence::split(&summary).len(), expected);
        prop_assert_eq!(selection_size(n), expected);
    }

    #[test]
    fn prop_summary_keeps_source_order(sentences in sentences_strategy()) {
        let text = sentences.join(" ");
        let selected = select(&sentence::split(&text));
        prop_assert!(selected.windows(2).all(|pair| pair[0].index < pair[1].index));
    }

    #[test]
    fn prop_proofread_is_idempotent(text in "[a-zA-Z .,!?;:i\t\n]{0,80}") {
        let once = proofread(&text);
        prop_assert_eq!(proofread(&once), once);
    }
}
