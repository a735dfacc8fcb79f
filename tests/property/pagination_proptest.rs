//! Property-based tests for limit/offset pagination

use proptest::prelude::*;
use yatube_api::shared::{LimitOffset, RequestUrl};

fn url(query: &str) -> RequestUrl {
    RequestUrl::new("http://testserver/api/v1/posts/", Some(query.to_string()))
}

fn param(link: &str, key: &str) -> Option<i64> {
    let (_, query) = link.split_once('?')?;
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .and_then(|(_, v)| v.parse().ok())
}

proptest! {
    #[test]
    fn test_valid_window_is_parsed(limit in 1i64..1000, offset in 0i64..1000) {
        let query = format!("limit={limit}&offset={offset}");
        prop_assert_eq!(
            LimitOffset::from_query(Some(&query)),
            Some(LimitOffset { limit, offset })
        );
    }

    #[test]
    fn test_non_positive_limit_disables_pagination(limit in -1000i64..=0) {
        let query = format!("limit={limit}");
        prop_assert_eq!(LimitOffset::from_query(Some(&query)), None);
    }

    #[test]
    fn test_next_exists_iff_items_remain(
        limit in 1i64..50,
        offset in 0i64..200,
        count in 0i64..200,
    ) {
        let window = LimitOffset { limit, offset };
        let next = window.next_link(&url(""), count);

        prop_assert_eq!(next.is_some(), offset + limit < count);
        if let Some(next) = next {
            prop_assert_eq!(param(&next, "offset"), Some(offset + limit));
            prop_assert_eq!(param(&next, "limit"), Some(limit));
        }
    }

    #[test]
    fn test_previous_never_goes_negative(limit in 1i64..50, offset in 0i64..200) {
        let window = LimitOffset { limit, offset };
        let previous = window.previous_link(&url(&format!("offset={offset}")));

        prop_assert_eq!(previous.is_some(), offset > 0);
        if let Some(previous) = previous {
            match param(&previous, "offset") {
                Some(back) => {
                    prop_assert!(back > 0);
                    prop_assert_eq!(back, offset - limit);
                }
                None => prop_assert!(offset - limit <= 0),
            }
        }
    }
}
