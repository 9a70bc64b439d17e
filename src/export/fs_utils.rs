use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use crate::ui::prompt::confirm;
use std::path::Path;

/// A new file is always fine; an existing one needs `force` or a "yes"
/// on stdin.
pub fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    warning(format!("{} already exists.", path.display()));
    if confirm("Overwrite?")? {
        Ok(())
    } else {
        Err(AppError::Export(
            "export cancelled: existing file not overwritten".into(),
        ))
    }
}
