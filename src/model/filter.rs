//! Location/distance filter state.
//!
//! A [`LocationFilter`] starts life as a *draft* edited field-by-field on
//! the filter screen. Applying it commits a snapshot copy into navigator
//! state; the draft itself is left intact so re-opening the screen is
//! pre-populated.

use std::fmt;

/// The editable fields of a location filter, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Country,
    State,
    City,
    Distance,
}

impl FilterField {
    pub const ALL: [Self; 4] = [Self::Country, Self::State, Self::City, Self::Distance];

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Country => "Country",
            Self::State => "State",
            Self::City => "City",
            Self::Distance => "Distance",
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Preset choices offered by the filter screen. The filter itself accepts
/// any string; these only feed the UI.
pub const COUNTRY_OPTIONS: &[&str] = &["United States", "Canada", "United Kingdom"];
pub const STATE_OPTIONS: &[&str] = &["California", "New York", "Texas", "Florida"];
pub const CITY_OPTIONS: &[&str] = &[
    "Los Angeles",
    "San Francisco",
    "San Diego",
    "Sacramento",
];
pub const DISTANCE_OPTIONS: &[&str] = &[
    "50 miles",
    "100 miles",
    "200 miles",
    "State-wide",
    "Country-wide",
];

/// Preset option list for a field.
pub const fn options(field: FilterField) -> &'static [&'static str] {
    match field {
        FilterField::Country => COUNTRY_OPTIONS,
        FilterField::State => STATE_OPTIONS,
        FilterField::City => CITY_OPTIONS,
        FilterField::Distance => DISTANCE_OPTIONS,
    }
}

/// The user's chosen geographic scope.
///
/// All fields are optional; the empty string means "not set". No field is
/// validated - any string is accepted, including empty to clear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationFilter {
    country: String,
    state: String,
    city: String,
    distance: String,
}

impl LocationFilter {
    /// An all-empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update one field. Always succeeds; an empty value clears the field.
    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    /// Current value of a field ("" when unset).
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Country => &self.country,
            FilterField::State => &self.state,
            FilterField::City => &self.city,
            FilterField::Distance => &self.distance,
        }
    }

    /// Clear a single field.
    pub fn clear_field(&mut self, field: FilterField) {
        self.field_mut(field).clear();
    }

    /// Reset all fields to empty.
    pub fn clear(&mut self) {
        for field in FilterField::ALL {
            self.clear_field(field);
        }
    }

    /// Number of non-empty fields. Pure, no side effects.
    pub fn count_active(&self) -> usize {
        FilterField::ALL
            .iter()
            .filter(|f| !self.get(**f).is_empty())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.count_active() == 0
    }

    /// Snapshot copy for the navigator to own. The draft is left intact.
    pub fn commit(&self) -> Self {
        self.clone()
    }

    /// "Label: value" badges for every set field, in field order.
    pub fn badges(&self) -> Vec<String> {
        FilterField::ALL
            .iter()
            .filter(|f| !self.get(**f).is_empty())
            .map(|f| format!("{}: {}", f.label(), self.get(*f)))
            .collect()
    }

    fn field_mut(&mut self, field: FilterField) -> &mut String {
        match field {
            FilterField::Country => &mut self.country,
            FilterField::State => &mut self.state,
            FilterField::City => &mut self.city,
            FilterField::Distance => &mut self.distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_has_no_active_fields() {
        let filter = LocationFilter::new();
        assert_eq!(filter.count_active(), 0);
        assert!(filter.is_empty());
    }

    #[test]
    fn setting_one_field_counts_one() {
        let mut filter = LocationFilter::new();
        filter.set(FilterField::City, "Los Angeles");
        assert_eq!(filter.count_active(), 1);
    }

    #[test]
    fn empty_value_clears_a_field() {
        let mut filter = LocationFilter::new();
        filter.set(FilterField::State, "California");
        filter.set(FilterField::State, "");
        assert_eq!(filter.count_active(), 0);
    }

    #[test]
    fn clear_resets_everything() {
        let mut filter = LocationFilter::new();
        filter.set(FilterField::Country, "United States");
        filter.set(FilterField::Distance, "50 miles");
        filter.clear();
        assert_eq!(filter.count_active(), 0);
    }

    #[test]
    fn commit_returns_equal_snapshot_and_keeps_draft() {
        let mut draft = LocationFilter::new();
        draft.set(FilterField::State, "California");
        draft.set(FilterField::City, "Los Angeles");
        draft.set(FilterField::Distance, "50 miles");

        let committed = draft.commit();
        assert_eq!(committed, draft);
        assert_eq!(draft.count_active(), 3);

        // Mutating the draft must not alias the committed copy.
        draft.set(FilterField::City, "San Diego");
        assert_eq!(committed.get(FilterField::City), "Los Angeles");
    }

    #[test]
    fn badges_follow_field_order() {
        let mut filter = LocationFilter::new();
        filter.set(FilterField::Distance, "100 miles");
        filter.set(FilterField::Country, "Canada");
        assert_eq!(
            filter.badges(),
            vec!["Country: Canada".to_string(), "Distance: 100 miles".to_string()]
        );
    }
}
