//! JSON snapshot of all stores: export to a file, import back.

mod fs_utils;
pub mod logic;
pub mod model;

pub use logic::{ExportLogic, ImportLogic, ImportReport};
pub use model::Snapshot;

use crate::ui::messages::success;
use std::path::Path;

/// Common completion message.
pub(crate) fn notify_success(label: &str, path: &Path) {
    success(format!("{label} completed: {}", path.display()));
}
