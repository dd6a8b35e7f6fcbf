//! Behavioural tests shared by all three strategies.

use weighted_select::{
    Balancer, ClassicWeighted, RandomWeighted, SelectError, Selector, SmoothWeighted, Strategy,
};

mod common;
use common::{fill, sequence, tally};

fn all_strategies() -> Vec<Box<dyn Selector<&'static str>>> {
    vec![
        Box::new(SmoothWeighted::new()) as Box<dyn Selector<&'static str>>,
        Box::new(ClassicWeighted::new()),
        Box::new(RandomWeighted::with_seed(0x5eed)),
    ]
}

#[test]
fn test_empty_selector_returns_none() {
    for mut selector in all_strategies() {
        assert!(selector.is_empty());
        assert_eq!(selector.next(), None, "{}", selector.strategy());
    }
}

#[test]
fn test_every_positive_item_is_eventually_picked() {
    let items = [("a", 7), ("b", 1), ("zero", 0), ("c", 3), ("d", 2)];
    for mut selector in all_strategies() {
        fill(selector.as_mut(), &items);
        let counts = tally(selector.as_mut(), 1_000);
        for (item, weight) in items {
            if weight > 0 {
                assert!(counts.contains_key(item), "{} never picked {}", selector.strategy(), item);
            } else {
                assert!(!counts.contains_key(item), "{} picked {}", selector.strategy(), item);
            }
        }
    }
}

#[test]
fn test_smooth_golden_sequence() {
    let mut sw = SmoothWeighted::new();
    fill(&mut sw, &[("a", 5), ("b", 1), ("c", 1)]);
    let picks: Vec<_> = sequence(&mut sw, 7).into_iter().flatten().collect();
    assert_eq!(picks, vec!["a", "a", "b", "a", "c", "a", "a"]);
}

#[test]
fn test_classic_is_deterministic() {
    let items = [("a", 6), ("b", 4), ("c", 9), ("d", 0), ("e", 3)];

    let mut first = ClassicWeighted::new();
    let mut second = ClassicWeighted::new();
    fill(&mut first, &items);
    fill(&mut second, &items);

    assert_eq!(sequence(&mut first, 500), sequence(&mut second, 500));

    // and again from a reset state
    first.reset();
    let mut fresh = ClassicWeighted::new();
    fill(&mut fresh, &items);
    assert_eq!(sequence(&mut first, 500), sequence(&mut fresh, 500));
}

#[test]
fn test_random_distribution() {
    let mut rw = RandomWeighted::with_seed(20_240_601);
    fill(&mut rw, &[("a", 90), ("b", 10)]);

    let n = 100_000;
    let counts = tally(&mut rw, n);
    let share = counts["a"] as f64 / n as f64;
    assert!((share - 0.9).abs() < 0.02, "share of a = {}", share);
}

#[test]
fn test_time_seeded_random_distribution() {
    let mut rw = RandomWeighted::new();
    fill(&mut rw, &[("a", 90), ("b", 10)]);

    let n = 100_000;
    let share = tally(&mut rw, n)["a"] as f64 / n as f64;
    assert!((share - 0.9).abs() < 0.02, "share of a = {}", share);
}

#[test]
fn test_exclusion_never_returns_excluded() {
    let items = [("a", 50), ("b", 1), ("c", 2)];

    let mut sw = SmoothWeighted::new();
    let mut rr = ClassicWeighted::new();
    fill(&mut sw, &items);
    fill(&mut rr, &items);

    for _ in 0..200 {
        assert_ne!(sw.next_excluding(&["a"]), Some("a"));
        assert_ne!(rr.next_excluding(&["a"]), Some("a"));
        assert!(sw.next_excluding(&["a"]).is_some());
        assert!(rr.next_excluding(&["a"]).is_some());
    }
}

#[test]
fn test_remove_all_empties_selector() {
    for mut selector in all_strategies() {
        fill(selector.as_mut(), &[("a", 3), ("b", 2)]);
        sequence(selector.as_mut(), 5);

        selector.remove_all();
        assert!(selector.all().is_empty());
        assert_eq!(selector.len(), 0);
        assert_eq!(selector.next(), None, "{}", selector.strategy());

        // idempotent
        selector.remove_all();
        assert!(selector.all().is_empty());
    }
}

#[test]
fn test_reset_keeps_membership() {
    for mut selector in all_strategies() {
        fill(selector.as_mut(), &[("a", 3), ("b", 2), ("c", 0)]);
        sequence(selector.as_mut(), 4);

        let before = selector.all();
        selector.reset();
        assert_eq!(selector.all(), before, "{}", selector.strategy());
        assert_eq!(before.len(), 3);
        assert_eq!(before["c"], 0);
    }
}

#[test]
fn test_reset_restarts_round_robin_sequences() {
    for strategy in [Strategy::Smooth, Strategy::Classic] {
        let mut lb: Balancer<&str> = Balancer::new(strategy);
        fill(&mut lb, &[("a", 4), ("b", 3), ("c", 2)]);

        let first = sequence(&mut lb, 9);
        sequence(&mut lb, 4);
        lb.reset();
        assert_eq!(sequence(&mut lb, 9), first, "{}", strategy);
    }
}

#[test]
fn test_negative_weights() {
    let mut sw = SmoothWeighted::new();
    let mut rr = ClassicWeighted::new();
    let mut rw = RandomWeighted::with_seed(1);

    // smooth and random reject them outright
    assert_eq!(sw.add("neg", -5), Err(SelectError::InvalidWeight { weight: -5 }));
    assert_eq!(rw.add("neg", -5), Err(SelectError::InvalidWeight { weight: -5 }));
    assert!(Selector::all(&sw).is_empty());
    assert!(rw.all().is_empty());

    // classic accepts them as a cycle slot that is never scheduled
    fill(&mut sw, &[("a", 1), ("b", 2)]);
    fill(&mut rr, &[("neg", -5), ("a", 1), ("b", 2)]);

    let smooth = tally(&mut sw, 300);
    assert_eq!(smooth.get("a"), Some(&100));
    assert_eq!(smooth.get("b"), Some(&200));

    let classic = tally(&mut rr, 300);
    assert!(!classic.contains_key("neg"));
    assert_eq!(classic.get("a"), Some(&100));
    assert_eq!(classic.get("b"), Some(&200));
}
