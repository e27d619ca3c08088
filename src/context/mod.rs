//! Process runtime context
//!
//! Platform and path facts that used to live in module-level globals are
//! computed once at startup and passed to whoever needs them.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Facts about the running process, detected once at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeContext {
    /// Whether the process runs on macOS
    pub is_macos: bool,
    /// The application root directory
    pub root_path: PathBuf,
}

impl RuntimeContext {
    /// Detect the context from the current process
    ///
    /// The root path is the process working directory; use
    /// [`RuntimeContext::with_root`] when the application root is known.
    pub fn detect() -> Self {
        Self {
            is_macos: cfg!(target_os = "macos"),
            root_path: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    /// Detect the platform but pin the application root explicitly
    pub fn with_root(root: impl AsRef<Path>) -> Self {
        Self {
            root_path: root.as_ref().to_path_buf(),
            ..Self::detect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_matches_compile_target() {
        let context = RuntimeContext::detect();
        assert_eq!(context.is_macos, cfg!(target_os = "macos"));
        assert!(!context.root_path.as_os_str().is_empty());
    }

    #[test]
    fn test_with_root_pins_the_path() {
        let context = RuntimeContext::with_root("/srv/trader");
        assert_eq!(context.root_path, PathBuf::from("/srv/trader"));
    }

    #[test]
    fn test_context_round_trips_through_json() {
        let context = RuntimeContext::with_root("/srv/trader");
        let encoded = serde_json::to_string(&context).unwrap();
        let decoded: RuntimeContext = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, context);
    }
}
