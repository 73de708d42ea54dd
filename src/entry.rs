//! One-time mount of the root view into the host document

use crate::constants::MOUNT_ID;
use crate::document::{create_root, Document, MountError};
use crate::ui::{components, StrictMode};
use tracing::info;

/// Render the root view into the `#root` element
pub fn mount(document: &mut Document) -> Result<(), MountError> {
    let root = create_root(document, MOUNT_ID)?;
    root.render(StrictMode::new(components::app).render());
    info!(id = MOUNT_ID, "Root view mounted");
    Ok(())
}
