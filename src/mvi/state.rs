//! Values that reducers own.

/// A state value replaced whole on every transition.
///
/// Implemented by [`TodoList`](crate::model::TodoList) and
/// [`ViewState`](crate::ui::ViewState). `Default` is the empty list or the
/// initial view, and lets `dispatch_mvi!` move the old value out with
/// `std::mem::take`. `PartialEq` is how the item store tells whether a
/// mutation changed anything before notifying listeners.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
