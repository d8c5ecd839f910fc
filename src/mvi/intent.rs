//! Requests for a state change.

/// A request to change one state value.
///
/// [`ListIntent`](crate::store::ListIntent) carries list edits (add with a
/// pre-assigned id, toggle, delete, clear completed).
/// [`ViewIntent`](crate::ui::ViewIntent) carries presentation edits (draft
/// text, filter, theme). Neither does anything by itself until a reducer
/// consumes it.
pub trait Intent: Send + 'static {}
