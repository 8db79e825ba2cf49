//! Behaviour of the provided `Scorer` helpers: clamping and stable ranking.

use giftwise_core::{GiftCandidate, MatchScore, RecipientContext, ScoredGift, Scorer};
use proptest::prelude::*;
use rstest::rstest;

/// Scores each gift by its raw prior so ranking can be observed directly.
struct RawPriorScorer;

impl Scorer for RawPriorScorer {
    fn score(
        &self,
        gifts: &[GiftCandidate],
        _context: Option<&RecipientContext>,
    ) -> Vec<ScoredGift> {
        let mut scored: Vec<ScoredGift> = gifts
            .iter()
            .map(|gift| {
                let prior = gift.base_match_score.unwrap_or(75);
                ScoredGift::unadjusted(gift.clone(), Self::sanitise(prior))
            })
            .collect();
        Self::rank(&mut scored);
        scored
    }
}

fn gift(id: u64, prior: i64) -> GiftCandidate {
    GiftCandidate::new(id, format!("Gift {id}"), 10.0)
        .expect("valid gift")
        .with_base_match_score(prior)
}

fn ids(scored: &[ScoredGift]) -> Vec<u64> {
    scored.iter().map(|entry| entry.gift.id).collect()
}

#[rstest]
#[case(-500, 1)]
#[case(1, 1)]
#[case(64, 64)]
#[case(99, 99)]
#[case(101, 99)]
fn sanitise_clamps_into_range(#[case] raw: i64, #[case] expected: u8) {
    assert_eq!(RawPriorScorer::sanitise(raw).get(), expected);
}

#[rstest]
fn rank_orders_descending() {
    let scored = RawPriorScorer.score(&[gift(1, 10), gift(2, 90), gift(3, 50)], None);
    assert_eq!(ids(&scored), [2, 3, 1]);
}

#[rstest]
fn rank_keeps_input_order_for_ties() {
    let scored = RawPriorScorer.score(
        &[gift(1, 40), gift(2, 80), gift(3, 40), gift(4, 80), gift(5, 40)],
        None,
    );
    assert_eq!(ids(&scored), [2, 4, 1, 3, 5]);
}

#[rstest]
fn clamped_extremes_tie_and_keep_order() {
    let scored = RawPriorScorer.score(&[gift(1, 150), gift(2, 99), gift(3, 1000)], None);
    assert_eq!(ids(&scored), [1, 2, 3]);
    assert!(scored.iter().all(|entry| entry.match_score == MatchScore::MAX));
}

#[rstest]
fn empty_input_yields_empty_output() {
    assert!(RawPriorScorer.score(&[], None).is_empty());
}

proptest! {
    #[test]
    fn ranking_is_a_stable_permutation(priors in proptest::collection::vec(-200_i64..300, 0..40)) {
        let gifts: Vec<GiftCandidate> = priors
            .iter()
            .zip(0_u64..)
            .map(|(&prior, id)| gift(id, prior))
            .collect();
        let scored = RawPriorScorer.score(&gifts, None);

        prop_assert_eq!(scored.len(), gifts.len());
        let mut seen = ids(&scored);
        seen.sort_unstable();
        let count = u64::try_from(gifts.len()).expect("small length");
        let expected: Vec<u64> = (0..count).collect();
        prop_assert_eq!(seen, expected);

        for pair in scored.windows(2) {
            let [first, second] = pair else { continue };
            prop_assert!(first.match_score >= second.match_score);
            if first.match_score == second.match_score {
                prop_assert!(first.gift.id < second.gift.id);
            }
        }
    }
}
