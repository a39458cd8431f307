use mood_stamps::aggregator::{aggregate, apply_policy, flatten, ReactionPolicy};
use mood_stamps::stamp::{AggregatedStamp, Stamp, StampKind};
use pretty_assertions::assert_eq;
use std::collections::HashMap;

fn fixture() -> Vec<Stamp> {
    vec![
        Stamp::new("1", "happy", "😊", "user1"),
        Stamp::new("2", "happy", "😊", "user2"),
        Stamp::new("3", "sad", "😢", "user1"),
    ]
}

/// Deterministic pseudo-random stamp sequences
fn generated_inputs() -> Vec<Vec<Stamp>> {
    const KINDS: [&str; 8] = ["thanks", "love", "smile", "cry", "sad", "shock", "happy", "new"];
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move |bound: u64| {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state % bound
    };

    (0..40)
        .map(|case| {
            let len = next(25) as usize + case % 3;
            (0..len)
                .map(|i| {
                    let kind = KINDS[next(KINDS.len() as u64) as usize];
                    let reactor = format!("user{}", next(4));
                    Stamp::new(format!("{}-{}", case, i), kind, "·", reactor)
                })
                .collect()
        })
        .collect()
}

fn multiset(stamps: &[Stamp]) -> HashMap<&Stamp, usize> {
    let mut counts = HashMap::new();
    for stamp in stamps {
        *counts.entry(stamp).or_insert(0) += 1;
    }
    counts
}

fn find<'a>(groups: &'a [AggregatedStamp], kind: &str) -> &'a AggregatedStamp {
    groups
        .iter()
        .find(|g| g.kind.as_str() == kind)
        .unwrap_or_else(|| panic!("no group for {}", kind))
}

#[test]
fn test_aggregate_fixture() {
    let groups = aggregate(&fixture());

    assert_eq!(groups.len(), 2);

    let happy = find(&groups, "happy");
    assert_eq!(happy.count, 2);
    let ids: Vec<_> = happy.stamps.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);

    let sad = find(&groups, "sad");
    assert_eq!(sad.kind, StampKind::Sad);
    assert_eq!(sad.count, 1);
    assert_eq!(sad.stamps[0].id, "3");
}

#[test]
fn test_aggregate_empty_input() {
    assert_eq!(aggregate(&[]), Vec::new());
}

#[test]
fn test_single_kind_input() {
    let groups = aggregate(&fixture()[..2]);

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].count, 2);
    assert_eq!(groups[0].stamps, fixture()[..2].to_vec());
}

#[test]
fn test_repeat_reactor_counts_twice() {
    let stamps = vec![
        Stamp::new("1", "love", "🥰", "user1"),
        Stamp::new("2", "love", "🥰", "user1"),
    ];

    let groups = aggregate(&stamps);

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].count, 2);
}

#[test]
fn test_partition_property() {
    for input in generated_inputs() {
        let groups = aggregate(&input);
        assert_eq!(multiset(&flatten(&groups)), multiset(&input));

        for group in &groups {
            assert!(group.stamps.iter().all(|s| s.kind.as_str() == group.kind.as_str()));
        }
    }
}

#[test]
fn test_count_property() {
    for input in generated_inputs() {
        let groups = aggregate(&input);

        for group in &groups {
            assert_eq!(group.count, group.stamps.len());
            assert!(group.count > 0);
        }
        assert_eq!(groups.iter().map(|g| g.count).sum::<usize>(), input.len());
    }
}

#[test]
fn test_kinds_unique_and_first_seen_order() {
    for input in generated_inputs() {
        let groups = aggregate(&input);

        let mut expected: Vec<&str> = Vec::new();
        for stamp in &input {
            if !expected.contains(&stamp.kind.as_str()) {
                expected.push(stamp.kind.as_str());
            }
        }

        let actual: Vec<&str> = groups.iter().map(|g| g.kind.as_str()).collect();
        assert_eq!(actual, expected);
    }
}

#[test]
fn test_within_group_order_is_stable() {
    for input in generated_inputs() {
        for group in aggregate(&input) {
            let expected: Vec<&Stamp> = input
                .iter()
                .filter(|s| s.kind.as_str() == group.kind.as_str())
                .collect();
            let actual: Vec<&Stamp> = group.stamps.iter().collect();
            assert_eq!(actual, expected);
        }
    }
}

#[test]
fn test_reaggregation_is_fixed_point() {
    for input in generated_inputs() {
        let once = aggregate(&input);
        let twice = aggregate(&flatten(&once));
        assert_eq!(twice, once);
    }
}

#[test]
fn test_repeated_calls_agree() {
    for input in generated_inputs() {
        assert_eq!(aggregate(&input), aggregate(&input));
    }
}

#[test]
fn test_unknown_kind_forms_own_group() {
    let stamps = vec![
        Stamp::new("1", "love", "🥰", "a"),
        Stamp::new("2", "sparkle", "✨", "b"),
    ];

    let groups = aggregate(&stamps);

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[1].kind, StampKind::Other("sparkle".to_string()));
}

#[test]
fn test_policy_layered_above_aggregate() {
    let stamps = vec![
        Stamp::new("1", "love", "🥰", "user1"),
        Stamp::new("2", "love", "🥰", "user1"),
        Stamp::new("3", "cry", "😭", "user1"),
    ];

    let per_kind = aggregate(&apply_policy(&stamps, ReactionPolicy::OnePerReactorPerKind));
    assert_eq!(per_kind.iter().map(|g| g.count).collect::<Vec<_>>(), vec![1, 1]);

    let per_post = aggregate(&apply_policy(&stamps, ReactionPolicy::OnePerReactor));
    assert_eq!(per_post.len(), 1);
    assert_eq!(per_post[0].stamps[0].id, "1");

    let all = aggregate(&apply_policy(&stamps, ReactionPolicy::CountAll));
    assert_eq!(all, aggregate(&stamps));
}
