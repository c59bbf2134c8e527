use chrono::Utc;
use narrative_core::{
    rank_narratives, social_weight, trending_repo_weight, NarrativeAggregator, Signal,
    SignalMetadata, MAX_TOP_PROJECTS, MAX_TRENDING_KEYWORDS,
};
use narrative_rules::{definitions, Engagement, SourceKind};
use proptest::prelude::*;

fn vocabulary() -> Vec<&'static str> {
    definitions().iter().flat_map(|d| d.keywords.iter().copied()).collect()
}

fn arb_signal() -> impl Strategy<Value = Signal> {
    let vocab = vocabulary();
    (
        prop::collection::vec(prop::sample::select(vocab), 1..6),
        0.01f64..=1.0,
        0usize..3,
        "[a-z]{0,8}",
    )
        .prop_map(|(keywords, weight, kind, name)| {
            let (source, metadata) = match kind {
                0 => (SourceKind::OnChain, SignalMetadata::Program { program_id: name }),
                1 => (
                    SourceKind::Repository,
                    SignalMetadata::NewRepo {
                        name,
                        description: None,
                        created_at: None,
                    },
                ),
                _ => (
                    SourceKind::Social,
                    SignalMetadata::Social {
                        author: name,
                        content: String::new(),
                        urls: Vec::new(),
                    },
                ),
            };
            Signal::new(
                source,
                Utc::now(),
                keywords.into_iter().map(str::to_string).collect(),
                weight,
                metadata,
            )
            .expect("keywords are non-empty")
        })
}

proptest! {
    #[test]
    fn one_narrative_per_definition(signals in prop::collection::vec(arb_signal(), 0..40)) {
        let narratives = NarrativeAggregator::with_defaults().aggregate(&signals, Utc::now());
        prop_assert_eq!(narratives.len(), definitions().len());
    }

    #[test]
    fn confidence_stays_in_unit_interval(signals in prop::collection::vec(arb_signal(), 0..40)) {
        for narrative in NarrativeAggregator::with_defaults().aggregate(&signals, Utc::now()) {
            prop_assert!((0.0..=1.0).contains(&narrative.confidence));
        }
    }

    #[test]
    fn evidence_lists_are_bounded(signals in prop::collection::vec(arb_signal(), 0..40)) {
        for narrative in NarrativeAggregator::with_defaults().aggregate(&signals, Utc::now()) {
            prop_assert!(narrative.trending_keywords.len() <= MAX_TRENDING_KEYWORDS);
            prop_assert!(narrative.top_projects.len() <= MAX_TOP_PROJECTS);
        }
    }

    #[test]
    fn trending_keywords_come_from_own_vocabulary(
        signals in prop::collection::vec(arb_signal(), 0..40)
    ) {
        let narratives = NarrativeAggregator::with_defaults().aggregate(&signals, Utc::now());
        for (narrative, definition) in narratives.iter().zip(definitions()) {
            for keyword in &narrative.trending_keywords {
                prop_assert!(definition.keywords.contains(&keyword.as_str()));
            }
        }
    }

    #[test]
    fn adding_a_signal_never_lowers_confidence(
        signals in prop::collection::vec(arb_signal(), 0..30),
        extra in arb_signal(),
    ) {
        let aggregator = NarrativeAggregator::with_defaults();
        let now = Utc::now();
        let before = aggregator.aggregate(&signals, now);

        let mut grown = signals.clone();
        grown.push(extra);
        let after = aggregator.aggregate(&grown, now);

        for (b, a) in before.iter().zip(after.iter()) {
            // A placeholder's fixed 0.1 is not a measured confidence.
            if b.data_sources.total() > 0 {
                prop_assert!(a.confidence >= b.confidence);
            }
        }
    }

    #[test]
    fn ranking_is_sorted_and_stable(signals in prop::collection::vec(arb_signal(), 0..40)) {
        let mut narratives = NarrativeAggregator::with_defaults().aggregate(&signals, Utc::now());
        let declared: Vec<String> = narratives.iter().map(|n| n.id.clone()).collect();
        rank_narratives(&mut narratives);

        for pair in narratives.windows(2) {
            prop_assert!(pair[0].confidence >= pair[1].confidence);
            if pair[0].confidence == pair[1].confidence {
                let first = declared.iter().position(|id| *id == pair[0].id);
                let second = declared.iter().position(|id| *id == pair[1].id);
                prop_assert!(first < second);
            }
        }
    }

    #[test]
    fn trending_repo_weight_is_monotonic_and_bounded(a in 0u64..100_000, b in 0u64..100_000) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(trending_repo_weight(low) <= trending_repo_weight(high));
        prop_assert!(trending_repo_weight(high) <= 0.8);
        prop_assert!(trending_repo_weight(low) >= 0.5);
    }

    #[test]
    fn social_weight_is_bounded(
        likes in any::<u64>(),
        retweets in any::<u64>(),
        replies in any::<u64>()
    ) {
        let weight = social_weight(Some(&Engagement { likes, retweets, replies }));
        prop_assert!(weight >= 0.4 && weight <= 0.9);
    }
}
