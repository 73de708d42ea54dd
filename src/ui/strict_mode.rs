//! Double-render check for pure views

use crate::dom::Node;
use tracing::warn;

/// Wraps a view and renders it twice, warning when the two renders differ
pub struct StrictMode<F> {
    component: F,
}

impl<F> StrictMode<F>
where
    F: Fn() -> Node,
{
    pub fn new(component: F) -> Self {
        Self { component }
    }

    /// Output of the first render; the second only feeds the purity check
    pub fn render(&self) -> Node {
        let first = (self.component)();
        let second = (self.component)();
        if first != second {
            warn!(
                first = %first,
                second = %second,
                "Component rendered differently on repeated render"
            );
        }
        first
    }
}
