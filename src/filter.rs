//! Client-side search and status filtering.
//!
//! The visible set is a pure function of the store contents, the search term
//! and the status filter, recomputed on every keystroke.

use crate::types::{StatusFilter, Ticket};

/// Case-insensitive substring match.
///
/// Uses `unicase` for correct Unicode case folding (handles German ß and friends).
fn contains_case_insensitive(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let haystack_folded = unicase::UniCase::new(haystack).to_folded_case();
    let needle_folded = unicase::UniCase::new(needle).to_folded_case();
    haystack_folded.contains(&needle_folded)
}

/// Whether the search term appears in the ticket id, email or category
pub fn matches_search(ticket: &Ticket, search_term: &str) -> bool {
    contains_case_insensitive(&ticket.ticket_id, search_term)
        || contains_case_insensitive(&ticket.email, search_term)
        || contains_case_insensitive(&ticket.category, search_term)
}

/// Visible subsequence of `tickets`, order preserved
pub fn filter_tickets<'a>(
    tickets: &'a [Ticket],
    search_term: &str,
    status_filter: StatusFilter,
) -> Vec<&'a Ticket> {
    tickets
        .iter()
        .filter(|t| matches_search(t, search_term) && status_filter.matches(t))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(id: &str, email: &str, category: &str, is_paid: bool, is_used: bool) -> Ticket {
        Ticket {
            ticket_id: id.to_string(),
            email: email.to_string(),
            category: category.to_string(),
            is_paid,
            is_used,
            ..Default::default()
        }
    }

    fn sample() -> Vec<Ticket> {
        vec![
            ticket("A1", "x@y.com", "VIP", true, false),
            ticket("A2", "ada@festival.ng", "Regular", false, false),
            ticket("B7", "vip.guest@mail.com", "Regular", true, true),
            ticket("C3", "sam@example.org", "Backstage", false, true),
        ]
    }

    fn ids(tickets: &[&Ticket]) -> Vec<String> {
        tickets.iter().map(|t| t.ticket_id.clone()).collect()
    }

    #[test]
    fn test_empty_term_matches_everything() {
        let tickets = sample();
        let result = filter_tickets(&tickets, "", StatusFilter::All);
        assert_eq!(ids(&result), vec!["A1", "A2", "B7", "C3"]);
    }

    #[test]
    fn test_term_matches_any_field_case_insensitively() {
        let tickets = sample();

        // category of A1, email of B7
        let result = filter_tickets(&tickets, "vip", StatusFilter::All);
        assert_eq!(ids(&result), vec!["A1", "B7"]);

        let result = filter_tickets(&tickets, "a2", StatusFilter::All);
        assert_eq!(ids(&result), vec!["A2"]);

        let result = filter_tickets(&tickets, "EXAMPLE.ORG", StatusFilter::All);
        assert_eq!(ids(&result), vec!["C3"]);
    }

    #[test]
    fn test_unicode_folding() {
        let tickets = vec![ticket("D1", "d1@mail.de", "Straße", false, false)];
        assert_eq!(filter_tickets(&tickets, "STRASSE", StatusFilter::All).len(), 1);
    }

    #[test]
    fn test_no_match_is_empty() {
        let tickets = sample();
        assert!(filter_tickets(&tickets, "zzz", StatusFilter::All).is_empty());
    }

    #[test]
    fn test_status_filters() {
        let tickets = sample();
        let check = |filter, expected: Vec<&str>| {
            assert_eq!(ids(&filter_tickets(&tickets, "", filter)), expected);
        };

        check(StatusFilter::Used, vec!["B7", "C3"]);
        check(StatusFilter::Unused, vec!["A1", "A2"]);
        check(StatusFilter::Paid, vec!["A1", "B7"]);
        check(StatusFilter::Pending, vec!["A2", "C3"]);
    }

    #[test]
    fn test_status_pairs_partition_text_matches() {
        let tickets = sample();
        for term in ["", "regular", "a", "vip", "nothing"] {
            let matched = filter_tickets(&tickets, term, StatusFilter::All);

            for (left, right) in [
                (StatusFilter::Used, StatusFilter::Unused),
                (StatusFilter::Paid, StatusFilter::Pending),
            ] {
                let l = filter_tickets(&tickets, term, left);
                let r = filter_tickets(&tickets, term, right);
                assert_eq!(l.len() + r.len(), matched.len(), "term {term:?}");
                assert!(l.iter().all(|t| matched.contains(t)));
                assert!(r.iter().all(|t| matched.contains(t)));
                assert!(l.iter().all(|t| !r.contains(t)));
            }
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let tickets = sample();
        let first = filter_tickets(&tickets, "regular", StatusFilter::Paid);
        let second = filter_tickets(&tickets, "regular", StatusFilter::Paid);
        assert_eq!(first, second);
    }

    #[test]
    fn test_scenario_vip_single_ticket() {
        let tickets = vec![ticket("A1", "x@y.com", "VIP", true, false)];

        assert_eq!(ids(&filter_tickets(&tickets, "vip", StatusFilter::All)), vec!["A1"]);
        assert!(filter_tickets(&tickets, "vip", StatusFilter::Used).is_empty());
    }
}
