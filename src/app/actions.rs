//! Actions representing side effects to be executed by the provider.
//!
//! The event handler only mutates the [`FilterStore`](super::FilterStore). Anything
//! that reaches outside it (notifying observers, writing browser history) is
//! returned as an [`Action`] and executed afterwards by
//! [`EventFilterProvider`](crate::provider::EventFilterProvider).

use crate::domain::FilterCriteria;

/// Commands representing side effects produced by [`handle_event`](super::handle_event).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Emits the current `(criteria, filtered items)` pair to every observer.
    NotifyFiltersChanged,

    /// Pushes a soft-navigation history entry for these criteria.
    ///
    /// The URL is derived from the current location at execution time; the
    /// criteria travel along as the entry's state payload.
    PushHistory(FilterCriteria),
}
