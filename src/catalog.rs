//! Static directory of community services.
//!
//! The catalog is defined once at startup and never changes. Lookups are by
//! id; listing preserves declaration order so the home screen renders the
//! directory in a stable order across frames.

use crate::model::{Service, ServiceKind};

/// The services offered by the platform, in display order.
const SERVICES: &[Service] = &[
    Service {
        id: "rides",
        title: "Rides",
        description: "Find ride shares and carpools in your area",
        kind: ServiceKind::Chat,
    },
    Service {
        id: "accommodations",
        title: "Accommodations",
        description: "Discover housing help and temporary stays",
        kind: ServiceKind::Chat,
    },
    Service {
        id: "travel",
        title: "Travel Companion",
        description: "Find travel buddies for your next adventure",
        kind: ServiceKind::Chat,
    },
    Service {
        id: "remittance",
        title: "Remittance",
        description: "Safe money exchange and transfer services",
        kind: ServiceKind::Chat,
    },
    Service {
        id: "fundraise",
        title: "Fund Raise",
        description: "Create and support emergency fundraisers",
        kind: ServiceKind::Forum,
    },
    Service {
        id: "querypedia",
        title: "Querypedia",
        description: "Ask questions and get community answers",
        kind: ServiceKind::Forum,
    },
    Service {
        id: "parcel",
        title: "Parcel",
        description: "Package delivery and transport services",
        kind: ServiceKind::Chat,
    },
    Service {
        id: "deals",
        title: "Deals",
        description: "Exclusive deals and offers from partners",
        kind: ServiceKind::Deals,
    },
    Service {
        id: "freeitems",
        title: "Free Items",
        description: "Give away and find free items in your community",
        kind: ServiceKind::Chat,
    },
];

/// Read-only lookup over the service table.
pub struct ServiceCatalog {
    services: &'static [Service],
}

impl ServiceCatalog {
    pub const fn new() -> Self {
        Self { services: SERVICES }
    }

    /// Look up a service by id.
    pub fn get(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    /// All services in declaration order.
    pub const fn list(&self) -> &[Service] {
        self.services
    }

    pub const fn len(&self) -> usize {
        self.services.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Ids of every service, for CLI error messages.
    pub fn ids(&self) -> Vec<&'static str> {
        self.services.iter().map(|s| s.id).collect()
    }
}

impl Default for ServiceCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_id() {
        let catalog = ServiceCatalog::new();
        let service = catalog.get("accommodations").expect("known id");
        assert_eq!(service.title, "Accommodations");
        assert_eq!(service.kind, ServiceKind::Chat);
    }

    #[test]
    fn unknown_id_returns_none() {
        let catalog = ServiceCatalog::new();
        assert!(catalog.get("car-wash").is_none());
    }

    #[test]
    fn list_preserves_declaration_order() {
        let catalog = ServiceCatalog::new();
        let first: Vec<_> = catalog.list().iter().map(|s| s.id).collect();
        let second: Vec<_> = catalog.list().iter().map(|s| s.id).collect();
        assert_eq!(first, second);
        assert_eq!(first.first(), Some(&"rides"));
        assert_eq!(first.last(), Some(&"freeitems"));
    }

    #[test]
    fn ids_are_unique() {
        let catalog = ServiceCatalog::new();
        let mut ids = catalog.ids();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }
}
