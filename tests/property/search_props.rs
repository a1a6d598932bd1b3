//! Search invariants over generated sets.

use proptest::prelude::*;
use quizbank::{build_search_index, search};

use crate::common::single_set;
use crate::{topic_set_strategy, word_strategy};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Case never changes the result.
    #[test]
    fn prop_search_case_insensitive(set in topic_set_strategy(), term in word_strategy()) {
        let index = build_search_index(&single_set("generated", set));
        let lower: Vec<usize> = search(&index, &term.to_lowercase()).iter().map(|r| r.index).collect();
        let upper: Vec<usize> = search(&index, &term.to_uppercase()).iter().map(|r| r.index).collect();
        prop_assert_eq!(lower, upper);
    }

    /// Blank queries match nothing, however big the bank.
    #[test]
    fn prop_blank_query_empty(set in topic_set_strategy(), spaces in 0usize..4) {
        let index = build_search_index(&single_set("generated", set));
        prop_assert!(search(&index, &" ".repeat(spaces)).is_empty());
    }

    /// Every word of a question's text finds that question.
    #[test]
    fn prop_text_words_find_their_question(set in topic_set_strategy()) {
        let index = build_search_index(&single_set("generated", set.clone()));
        for (position, question) in set.questions.iter().enumerate() {
            for word in question.text.split_whitespace() {
                let found = search(&index, word).iter().any(|r| r.index == position);
                prop_assert!(found, "'{}' did not find question {}", word, position);
            }
        }
    }

    /// Results come back in ascending index order.
    #[test]
    fn prop_results_in_index_order(set in topic_set_strategy(), term in "[a-z]{1,2}") {
        let index = build_search_index(&single_set("generated", set));
        let positions: Vec<usize> = search(&index, &term).iter().map(|r| r.index).collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
