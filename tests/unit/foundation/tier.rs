use super::*;

#[test]
fn order_matches_version_ladder() {
    assert!(Tier::Tier05 < Tier::Tier1);
    assert!(Tier::Tier1 < Tier::Tier2);
    let mut sorted = vec![Tier::Tier2, Tier::Tier05, Tier::Tier1];
    sorted.sort();
    assert_eq!(sorted, Tier::ALL.to_vec());
}

#[test]
fn next_lower_walks_down_and_stops() {
    assert_eq!(Tier::Tier2.next_lower(), Some(Tier::Tier1));
    assert_eq!(Tier::Tier1.next_lower(), Some(Tier::Tier05));
    assert_eq!(Tier::Tier05.next_lower(), None);
    for t in Tier::ALL {
        if let Some(lower) = t.next_lower() {
            assert!(lower < t);
        }
    }
}

#[test]
fn header_versions_are_distinct() {
    assert_eq!(Tier::Tier2.header_version(), 5);
    assert_ne!(Tier::Tier1.header_version(), Tier::Tier2.header_version());
    assert_ne!(Tier::Tier05.header_version(), Tier::Tier1.header_version());
}

#[test]
fn parse_accepts_known_spellings() {
    for s in ["auto", "AUTO", "0", "0.0", " auto "] {
        assert_eq!(RequestedTier::parse(s).unwrap(), RequestedTier::Auto, "{s}");
    }
    assert_eq!(
        RequestedTier::parse("0.5").unwrap(),
        RequestedTier::Explicit(Tier::Tier05)
    );
    assert_eq!(
        RequestedTier::parse(".5").unwrap(),
        RequestedTier::Explicit(Tier::Tier05)
    );
    assert_eq!(
        "1.0".parse::<RequestedTier>().unwrap(),
        RequestedTier::Explicit(Tier::Tier1)
    );
    assert_eq!(
        "2".parse::<RequestedTier>().unwrap(),
        RequestedTier::Explicit(Tier::Tier2)
    );
}

#[test]
fn parse_rejects_everything_else() {
    for s in ["1.5", "3", "", "0.50000001", "-1", "two"] {
        let err = RequestedTier::parse(s).unwrap_err();
        assert!(
            matches!(err, DowngradeError::InvalidTargetTier(_)),
            "{s}: {err}"
        );
    }
}

#[test]
fn display_round_trips_through_parse() {
    for t in Tier::ALL {
        let r = RequestedTier::Explicit(t);
        assert_eq!(r.to_string().parse::<RequestedTier>().unwrap(), r);
    }
    assert_eq!(RequestedTier::default().to_string(), "auto");
}
