//! Task execution context.
//!
//! Each crawl job runs inside an execution harness that may attach a
//! job-specific resource bundle. The harness publishes the directories of
//! that bundle here, scoped to the current thread, so the factory can
//! widen a fresh store's search path with them. Restricted executors that
//! do not expose a search path install a concealed context instead; the
//! factory then fails rather than produce a half-widened configuration.

use crate::error::ConfigError;
use crate::store::ResolutionPath;
use std::cell::RefCell;

#[derive(Debug, Clone)]
enum TaskSearchPath {
    Visible(ResolutionPath),
    Concealed,
}

thread_local! {
    static CURRENT: RefCell<TaskSearchPath> =
        RefCell::new(TaskSearchPath::Visible(ResolutionPath::new()));
}

/// Run `f` with `path` installed as the search path visible to the
/// current task. The previous context is restored afterwards.
pub fn with_search_path<R>(path: ResolutionPath, f: impl FnOnce() -> R) -> R {
    scoped(TaskSearchPath::Visible(path), f)
}

/// Run `f` in a context that conceals its search path, as a restricted
/// executor would. `current_search_path` fails inside the scope.
pub fn concealed<R>(f: impl FnOnce() -> R) -> R {
    scoped(TaskSearchPath::Concealed, f)
}

fn scoped<R>(state: TaskSearchPath, f: impl FnOnce() -> R) -> R {
    struct Restore(TaskSearchPath);
    impl Drop for Restore {
        fn drop(&mut self) {
            CURRENT.with(|current| {
                *current.borrow_mut() = self.0.clone();
            });
        }
    }

    let previous = CURRENT.with(|current| current.replace(state));
    let _restore = Restore(previous);
    f()
}

/// Search path visible to the calling task.
///
/// Empty when no harness installed one; that is a normal standalone
/// invocation, not an error.
pub fn current_search_path() -> Result<ResolutionPath, ConfigError> {
    CURRENT.with(|current| match &*current.borrow() {
        TaskSearchPath::Visible(path) => Ok(path.clone()),
        TaskSearchPath::Concealed => Err(ConfigError::ResolutionContextUnavailable(
            "task execution context does not expose a search path".to_string(),
        )),
    })
}
