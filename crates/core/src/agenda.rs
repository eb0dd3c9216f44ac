//! Agenda engine: event lifecycle derivation, filtering, and ordering.
//!
//! Status is a pure function of `(record, now)` and is recomputed on every
//! evaluation; `now` is always passed in explicitly so the engine stays
//! deterministic under test.

use crate::labels::{EventStatus, EventType};
use crate::models::Event;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Metropolitan regions offered by the region select, in display order.
pub const FRENCH_REGIONS: &[&str] = &[
    "Île-de-France",
    "Auvergne-Rhône-Alpes",
    "Provence-Alpes-Côte d'Azur",
    "Occitanie",
    "Nouvelle-Aquitaine",
    "Grand Est",
    "Bretagne",
    "Hauts-de-France",
    "Pays de la Loire",
    "Normandie",
    "Bourgogne-Franche-Comté",
    "Centre-Val de Loire",
    "Corse",
];

// ---------------------------------------------------------------------------
// Status derivation
// ---------------------------------------------------------------------------

/// Derive the lifecycle status of an event at a given instant.
///
/// An absent end date closes the event at its start date. Comparisons are
/// strict, so an event whose boundary coincides exactly with `now` is
/// `Ongoing`.
pub fn derive_event_status(event: &Event, now: Timestamp) -> EventStatus {
    let effective_end = event.end_date.unwrap_or(event.start_date);
    if effective_end < now {
        EventStatus::Past
    } else if event.start_date > now {
        EventStatus::Upcoming
    } else {
        EventStatus::Ongoing
    }
}

// ---------------------------------------------------------------------------
// Filter criteria
// ---------------------------------------------------------------------------

/// Event type facet: the "Tous / Nos événements / Événements externes" tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EventTypeFilter {
    #[default]
    All,
    Only(EventType),
}

impl EventTypeFilter {
    fn matches(&self, event: &Event) -> bool {
        match self {
            Self::All => true,
            Self::Only(kind) => event.event_type == *kind,
        }
    }
}

/// Criteria for the agenda page. Facets combine with AND.
#[derive(Debug, Clone, PartialEq)]
pub struct EventFilters {
    pub type_filter: EventTypeFilter,
    /// Which lifecycle tab is selected.
    pub time_window: EventStatus,
    /// `None` means no region constraint.
    pub region: Option<String>,
}

impl Default for EventFilters {
    fn default() -> Self {
        Self {
            type_filter: EventTypeFilter::All,
            time_window: EventStatus::Upcoming,
            region: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Filtering and ordering
// ---------------------------------------------------------------------------

/// Filter the agenda and order it for display.
///
/// Status is recomputed per record from `now`. The past tab shows the most
/// recent events first; the other tabs show the soonest first. The sort is
/// stable, so records sharing a start date keep their input order.
pub fn filter_events<'a>(
    events: &'a [Event],
    filters: &EventFilters,
    now: Timestamp,
) -> Vec<&'a Event> {
    let mut selected: Vec<&Event> = events
        .iter()
        .filter(|event| {
            filters.type_filter.matches(event)
                && derive_event_status(event, now) == filters.time_window
                && filters
                    .region
                    .as_deref()
                    .map_or(true, |region| event.region == region)
        })
        .collect();

    match filters.time_window {
        EventStatus::Past => selected.sort_by(|a, b| b.start_date.cmp(&a.start_date)),
        _ => selected.sort_by(|a, b| a.start_date.cmp(&b.start_date)),
    }

    selected
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn t0() -> Timestamp {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    fn event(
        id: i64,
        start: Timestamp,
        end: Option<Timestamp>,
        event_type: EventType,
        region: &str,
    ) -> Event {
        Event {
            id,
            name: format!("Événement {id}"),
            start_date: start,
            end_date: end,
            location: String::new(),
            region: region.to_string(),
            description: String::new(),
            event_type,
            is_free: true,
            full_description: None,
            image_url: None,
            organizer_name: None,
            registration_url: None,
            price: None,
            tags: None,
            attendees: Vec::new(),
        }
    }

    #[test]
    fn status_follows_the_date_range() {
        let e = event(
            1,
            t0(),
            Some(t0() + Duration::seconds(10)),
            EventType::Association,
            "Bretagne",
        );
        assert_eq!(
            derive_event_status(&e, t0() + Duration::seconds(5)),
            EventStatus::Ongoing
        );
        assert_eq!(
            derive_event_status(&e, t0() - Duration::seconds(1)),
            EventStatus::Upcoming
        );
        assert_eq!(
            derive_event_status(&e, t0() + Duration::seconds(11)),
            EventStatus::Past
        );
    }

    #[test]
    fn boundary_instant_resolves_to_ongoing() {
        // No end date: the start date closes the event, and strict
        // comparisons make the exact boundary Ongoing.
        let e = event(1, t0(), None, EventType::Association, "Bretagne");
        assert_eq!(derive_event_status(&e, t0()), EventStatus::Ongoing);
    }

    #[test]
    fn upcoming_events_sort_soonest_first() {
        let now = t0();
        let events = vec![
            event(5, now + Duration::days(5), None, EventType::Association, "Corse"),
            event(2, now + Duration::days(2), None, EventType::Association, "Corse"),
            event(8, now + Duration::days(8), None, EventType::Association, "Corse"),
        ];
        let filters = EventFilters::default();
        let ids: Vec<i64> = filter_events(&events, &filters, now).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 5, 8]);
    }

    #[test]
    fn past_events_sort_most_recent_first() {
        let now = t0();
        let events = vec![
            event(5, now - Duration::days(5), None, EventType::Association, "Corse"),
            event(2, now - Duration::days(2), None, EventType::Association, "Corse"),
            event(8, now - Duration::days(8), None, EventType::Association, "Corse"),
        ];
        let filters = EventFilters {
            time_window: EventStatus::Past,
            ..Default::default()
        };
        let ids: Vec<i64> = filter_events(&events, &filters, now).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 5, 8]);
    }

    #[test]
    fn equal_start_dates_keep_input_order() {
        let now = t0();
        let start = now + Duration::days(1);
        let events = vec![
            event(10, start, None, EventType::Association, "Corse"),
            event(11, start, None, EventType::Association, "Corse"),
            event(12, start, None, EventType::Association, "Corse"),
        ];
        let ids: Vec<i64> = filter_events(&events, &EventFilters::default(), now)
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec![10, 11, 12]);
    }

    #[test]
    fn type_and_region_facets_are_conjunctive() {
        let now = t0();
        let start = now + Duration::days(1);
        let events = vec![
            event(1, start, None, EventType::Association, "Bretagne"),
            event(2, start, None, EventType::External, "Bretagne"),
            event(3, start, None, EventType::Association, "Corse"),
        ];
        let filters = EventFilters {
            type_filter: EventTypeFilter::Only(EventType::Association),
            time_window: EventStatus::Upcoming,
            region: Some("Bretagne".to_string()),
        };
        let ids: Vec<i64> = filter_events(&events, &filters, now).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn region_list_matches_the_select() {
        assert_eq!(FRENCH_REGIONS.len(), 13);
        assert!(FRENCH_REGIONS.contains(&"Île-de-France"));
    }
}
