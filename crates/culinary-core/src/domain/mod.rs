//! Domain entities, value objects, and events
//!
//! - Entities (Brand)
//! - Value objects (NavigationContext, Notification, Reconciliation)
//! - Domain events (DomainEvent enum for the event bus)

mod brand;
mod event;
mod navigation;
mod notification;
mod selection;

pub use brand::Brand;
pub use event::{DomainEvent, DomainEventEnvelope};
pub use navigation::{brand_route, NavigationContext, BRAND_ROUTE_PREFIX};
pub use notification::{Notification, NotificationLevel};
pub use selection::{reconcile, ReconcileOutcome, Reconciliation};
