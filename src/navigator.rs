//! The view navigator: a finite-state controller over the top-level screens.
//!
//! Screens raise [`Intent`]s; the navigator applies them synchronously. The
//! transition table is total: every (state, intent) pair not listed below is
//! a silent no-op, never an error.
//!
//! | From             | Intent               | To                    |
//! |------------------|----------------------|-----------------------|
//! | Home             | SelectService(s)     | LocationFilter(s)     |
//! | LocationFilter   | ApplyFilters(f)      | ServiceInterface(s,f) |
//! | LocationFilter   | Back                 | Home                  |
//! | ServiceInterface | Back                 | Home                  |
//! | Home             | OpenConversation(c)  | Chat(c)               |
//! | Chat             | Back                 | Home                  |
//!
//! Re-entering Home always clears the selected service, committed filter,
//! and open conversation, so no stale state leaks across selections.
//!
//! The navigator is a plain value type with no UI dependencies so the
//! transition table can be tested in isolation.

use crate::model::{Conversation, LocationFilter, Service};

/// The top-level screens the navigator can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveScreen {
    Home,
    LocationFilter,
    ServiceInterface,
    Chat,
}

/// A user-triggered request to transition the navigator.
#[derive(Debug, Clone)]
pub enum Intent {
    /// Open the location filter for a service (valid from Home)
    SelectService(Service),
    /// Commit the filter and enter the service interface (valid from
    /// LocationFilter with a selected service)
    ApplyFilters(LocationFilter),
    /// Open a private conversation (valid from Home)
    OpenConversation(Conversation),
    /// Return to Home from any non-Home screen
    Back,
}

/// Current screen and its parameters.
///
/// Invariant: a selected service is present exactly when the screen is
/// `LocationFilter` or `ServiceInterface`; Home carries no selection. The
/// committed filter is owned by value - it never aliases a screen's draft.
#[derive(Debug, Clone)]
pub struct Navigator {
    screen: ActiveScreen,
    service: Option<Service>,
    filter: Option<LocationFilter>,
    conversation: Option<Conversation>,
}

impl Navigator {
    /// A fresh navigator on the home screen.
    pub const fn new() -> Self {
        Self {
            screen: ActiveScreen::Home,
            service: None,
            filter: None,
            conversation: None,
        }
    }

    pub const fn screen(&self) -> ActiveScreen {
        self.screen
    }

    pub const fn service(&self) -> Option<&Service> {
        self.service.as_ref()
    }

    pub const fn filter(&self) -> Option<&LocationFilter> {
        self.filter.as_ref()
    }

    pub const fn conversation(&self) -> Option<&Conversation> {
        self.conversation.as_ref()
    }

    /// Apply an intent. Returns `true` if the state changed (the caller
    /// should rebuild the active screen) and `false` for a no-op.
    pub fn apply(&mut self, intent: Intent) -> bool {
        match (self.screen, intent) {
            (ActiveScreen::Home, Intent::SelectService(service)) => {
                self.service = Some(service);
                self.screen = ActiveScreen::LocationFilter;
                true
            }
            (ActiveScreen::LocationFilter, Intent::ApplyFilters(filter)) => {
                if self.service.is_none() {
                    return false;
                }
                self.filter = Some(filter);
                self.screen = ActiveScreen::ServiceInterface;
                true
            }
            (ActiveScreen::Home, Intent::OpenConversation(conversation)) => {
                self.conversation = Some(conversation);
                self.screen = ActiveScreen::Chat;
                true
            }
            (
                ActiveScreen::LocationFilter
                | ActiveScreen::ServiceInterface
                | ActiveScreen::Chat,
                Intent::Back,
            ) => {
                self.reset_home();
                true
            }
            // Everything else is a no-op by contract.
            _ => false,
        }
    }

    fn reset_home(&mut self) {
        self.screen = ActiveScreen::Home;
        self.service = None;
        self.filter = None;
        self.conversation = None;
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ServiceCatalog;
    use crate::model::FilterField;
    use crate::model::chat::sample_conversations;

    fn service(id: &str) -> Service {
        *ServiceCatalog::new().get(id).expect("known service id")
    }

    #[test]
    fn starts_at_home_with_no_selection() {
        let nav = Navigator::new();
        assert_eq!(nav.screen(), ActiveScreen::Home);
        assert!(nav.service().is_none());
        assert!(nav.filter().is_none());
        assert!(nav.conversation().is_none());
    }

    #[test]
    fn select_service_enters_location_filter() {
        let mut nav = Navigator::new();
        assert!(nav.apply(Intent::SelectService(service("rides"))));
        assert_eq!(nav.screen(), ActiveScreen::LocationFilter);
        assert_eq!(nav.service().map(|s| s.id), Some("rides"));
    }

    #[test]
    fn select_service_outside_home_is_a_no_op() {
        let mut nav = Navigator::new();
        nav.apply(Intent::SelectService(service("rides")));
        assert!(!nav.apply(Intent::SelectService(service("deals"))));
        assert_eq!(nav.service().map(|s| s.id), Some("rides"));
        assert_eq!(nav.screen(), ActiveScreen::LocationFilter);
    }

    #[test]
    fn apply_filters_requires_filter_screen() {
        let mut nav = Navigator::new();
        assert!(!nav.apply(Intent::ApplyFilters(LocationFilter::new())));
        assert_eq!(nav.screen(), ActiveScreen::Home);
    }

    #[test]
    fn apply_filters_commits_a_copy() {
        let mut nav = Navigator::new();
        nav.apply(Intent::SelectService(service("accommodations")));

        let mut draft = LocationFilter::new();
        draft.set(FilterField::State, "California");
        assert!(nav.apply(Intent::ApplyFilters(draft.commit())));
        assert_eq!(nav.screen(), ActiveScreen::ServiceInterface);

        // Navigator state owns its own copy of the filter.
        draft.set(FilterField::State, "Texas");
        assert_eq!(
            nav.filter().map(|f| f.get(FilterField::State)),
            Some("California")
        );
    }

    #[test]
    fn apply_filters_is_idempotent() {
        let mut nav = Navigator::new();
        nav.apply(Intent::SelectService(service("accommodations")));

        let mut draft = LocationFilter::new();
        draft.set(FilterField::City, "Los Angeles");

        nav.apply(Intent::ApplyFilters(draft.commit()));
        let first = nav.filter().cloned();
        nav.apply(Intent::ApplyFilters(draft.commit()));
        assert_eq!(nav.filter().cloned(), first);
        assert_eq!(nav.screen(), ActiveScreen::ServiceInterface);
    }

    #[test]
    fn back_from_service_interface_clears_everything() {
        let mut nav = Navigator::new();
        nav.apply(Intent::SelectService(service("rides")));
        nav.apply(Intent::ApplyFilters(LocationFilter::new()));

        assert!(nav.apply(Intent::Back));
        assert_eq!(nav.screen(), ActiveScreen::Home);
        assert!(nav.service().is_none());
        assert!(nav.filter().is_none());
    }

    #[test]
    fn back_twice_equals_back_once() {
        let mut nav = Navigator::new();
        nav.apply(Intent::SelectService(service("rides")));

        assert!(nav.apply(Intent::Back));
        assert!(!nav.apply(Intent::Back));
        assert_eq!(nav.screen(), ActiveScreen::Home);
    }

    #[test]
    fn open_conversation_enters_chat_and_back_clears_it() {
        let mut nav = Navigator::new();
        let conversation = sample_conversations().remove(0);
        assert!(nav.apply(Intent::OpenConversation(conversation.clone())));
        assert_eq!(nav.screen(), ActiveScreen::Chat);
        assert_eq!(nav.conversation().map(|c| c.id.as_str()), Some("conv-sarah"));

        nav.apply(Intent::Back);
        assert!(nav.conversation().is_none());
    }

    #[test]
    fn open_conversation_outside_home_is_a_no_op() {
        let mut nav = Navigator::new();
        nav.apply(Intent::SelectService(service("rides")));
        let conversation = sample_conversations().remove(0);
        assert!(!nav.apply(Intent::OpenConversation(conversation)));
        assert_eq!(nav.screen(), ActiveScreen::LocationFilter);
    }

    /// End-to-end scenario from the design notes: select Accommodations,
    /// set three filter fields, apply, then back out.
    #[test]
    fn accommodations_filter_scenario() {
        let mut nav = Navigator::new();
        nav.apply(Intent::SelectService(service("accommodations")));
        assert_eq!(nav.screen(), ActiveScreen::LocationFilter);

        let mut draft = LocationFilter::new();
        draft.set(FilterField::State, "California");
        draft.set(FilterField::City, "Los Angeles");
        draft.set(FilterField::Distance, "50 miles");
        assert_eq!(draft.count_active(), 3);

        nav.apply(Intent::ApplyFilters(draft.commit()));
        assert_eq!(nav.screen(), ActiveScreen::ServiceInterface);
        let committed = nav.filter().expect("filter committed");
        assert_eq!(committed.get(FilterField::State), "California");
        assert_eq!(committed.get(FilterField::City), "Los Angeles");
        assert_eq!(committed.get(FilterField::Distance), "50 miles");

        nav.apply(Intent::Back);
        assert_eq!(nav.screen(), ActiveScreen::Home);
        assert!(nav.service().is_none());
    }

    #[test]
    fn last_selected_service_wins_across_sequences() {
        let mut nav = Navigator::new();
        for id in ["rides", "parcel", "deals"] {
            nav.apply(Intent::SelectService(service(id)));
            nav.apply(Intent::Back);
        }
        nav.apply(Intent::SelectService(service("freeitems")));
        assert_eq!(nav.service().map(|s| s.id), Some("freeitems"));
    }
}
