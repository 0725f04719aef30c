// src/display.rs

// Best-effort interactive display of a written figure. Only available with the
// `viewer` feature, and only attempted when a display session is present.

use std::path::Path;

/// Whether a graphical session is likely available to open a browser in.
pub fn display_available() -> bool {
    if cfg!(any(target_os = "windows", target_os = "macos")) {
        return true;
    }
    ["DISPLAY", "WAYLAND_DISPLAY"]
        .iter()
        .any(|var| std::env::var_os(var).is_some_and(|v| !v.is_empty()))
}

/// Opens the document in the system viewer. Failures are logged, never returned.
#[cfg(feature = "viewer")]
pub fn show(path: &Path) {
    if !display_available() {
        log::info!(
            "No display session detected; not opening '{}'.",
            path.display()
        );
        return;
    }
    match opener::open(path) {
        Ok(()) => log::info!("Opened '{}' in the system viewer.", path.display()),
        Err(e) => log::warn!("Could not open '{}': {}", path.display(), e),
    }
}

/// Without the `viewer` feature there is nothing to open.
#[cfg(not(feature = "viewer"))]
pub fn show(path: &Path) {
    log::debug!(
        "Interactive display not built in (enable the `viewer` feature); '{}' left on disk.",
        path.display()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(not(feature = "viewer"))]
    fn test_show_without_viewer_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("figure.html");
        std::fs::write(&path, "<!DOCTYPE html>").unwrap();
        show(&path);
        show(&dir.path().join("missing.html"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<!DOCTYPE html>");
    }

    #[test]
    fn test_display_detection_does_not_panic() {
        let available = display_available();
        if cfg!(any(target_os = "windows", target_os = "macos")) {
            assert!(available);
        }
    }
}
