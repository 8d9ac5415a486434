use crate::validate::{digits, format_phone, valid_phone};
use crate::{UserRecord, merge_records};

use std::collections::HashSet;

use proptest::prelude::*;

fn record(id: usize, name: String, email: String) -> UserRecord {
    UserRecord {
        id: id.to_string(),
        name,
        email,
        age: None,
        phone: "(11) 99999-9999".to_string(),
        tax_id: None,
        created_at: None,
        password_hash: None,
        auth_uid: None,
    }
}

// Small email pool so local/remote collisions actually happen.
fn email_strategy() -> impl Strategy<Value = String> {
    (0u8..8).prop_map(|n| format!("user{n}@example.com"))
}

fn records_strategy(max: usize) -> impl Strategy<Value = Vec<UserRecord>> {
    prop::collection::vec((email_strategy(), "[a-z]{1,8}"), 0..max).prop_map(|pairs| {
        pairs
            .into_iter()
            .enumerate()
            .map(|(i, (email, name))| record(i, name, email))
            .collect()
    })
}

// Local sets are assumed email-unique (registration enforces it).
fn unique_local_strategy() -> impl Strategy<Value = Vec<UserRecord>> {
    records_strategy(8).prop_map(|records| {
        let mut seen = HashSet::new();
        records
            .into_iter()
            .filter(|r| seen.insert(r.email.clone()))
            .collect()
    })
}

proptest! {
    #[test]
    fn phone_formatting_round_trips_digits(input in ".{0,24}") {
        let formatted = format_phone(&input);
        let expected: String = digits(&input).chars().take(11).collect();
        prop_assert_eq!(digits(&formatted), expected);
    }

    #[test]
    fn phone_valid_iff_exactly_eleven_digits(n in 0usize..16) {
        let input = "7".repeat(n);
        prop_assert_eq!(valid_phone(&input), n == 11);
    }

    #[test]
    fn merge_length_is_local_plus_unmatched_remote(
        local in unique_local_strategy(),
        remote in records_strategy(8),
    ) {
        let local_emails: HashSet<String> =
            local.iter().map(|r| r.email.clone()).collect();
        let unmatched = remote
            .iter()
            .filter(|r| !local_emails.contains(&r.email))
            .count();

        let merged = merge_records(local.clone(), remote);
        prop_assert_eq!(merged.len(), local.len() + unmatched);
    }

    #[test]
    fn merge_keeps_local_records_verbatim_as_prefix(
        local in unique_local_strategy(),
        remote in records_strategy(8),
    ) {
        let merged = merge_records(local.clone(), remote);
        prop_assert_eq!(&merged[..local.len()], &local[..]);
    }

    #[test]
    fn merge_never_duplicates_a_local_email(
        local in unique_local_strategy(),
        remote in records_strategy(8),
    ) {
        let merged = merge_records(local.clone(), remote);
        for r in &local {
            let count = merged.iter().filter(|m| m.email == r.email).count();
            prop_assert_eq!(count, 1);
        }
    }

    #[test]
    fn merge_with_empty_side_is_identity(records in records_strategy(8)) {
        prop_assert_eq!(&merge_records(records.clone(), Vec::new()), &records);
        prop_assert_eq!(&merge_records(Vec::new(), records.clone()), &records);
    }
}
