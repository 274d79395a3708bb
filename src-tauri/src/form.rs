//! Command form
//!
//! The operator-facing entry point for backend commands, mirroring the
//! form in `dist/`: three free-text fields (a verb plus two optional
//! arguments) and a submit action. Submission reads the fields, drops
//! empty arguments, and hands the request to the invocation bridge on a
//! background thread; the response is only logged.
//!
//! There is deliberately no debounce and no pending-state guard, so rapid
//! submissions may overlap. A request cannot be cancelled once sent.

use std::sync::Arc;
use std::thread;

use crate::domain::InvocationRequest;
use crate::ports::InvocationBridge;

pub struct CommandForm {
    verb: String,
    arg1: String,
    arg2: String,
    bridge: Arc<dyn InvocationBridge>,
}

impl CommandForm {
    /// Create a form with all three fields empty
    pub fn new(bridge: Arc<dyn InvocationBridge>) -> Self {
        Self {
            verb: String::new(),
            arg1: String::new(),
            arg2: String::new(),
            bridge,
        }
    }

    pub fn set_verb(&mut self, verb: impl Into<String>) {
        self.verb = verb.into();
    }

    pub fn set_arg1(&mut self, arg1: impl Into<String>) {
        self.arg1 = arg1.into();
    }

    pub fn set_arg2(&mut self, arg2: impl Into<String>) {
        self.arg2 = arg2.into();
    }

    /// Build the ordered argument list: `arg1` then `arg2`, each included
    /// only if non-empty. No trimming, so a lone space counts as a value.
    pub fn build_args(arg1: &str, arg2: &str) -> Vec<String> {
        // only append an argument if it is not empty
        let mut args = Vec::new();
        if !arg1.is_empty() {
            args.push(arg1.to_string());
        }
        if !arg2.is_empty() {
            args.push(arg2.to_string());
        }
        args
    }

    /// Snapshot the current field values as the request `submit` would send.
    /// The verb goes through verbatim, empty string included.
    pub fn request(&self) -> InvocationRequest {
        InvocationRequest::new(self.verb.clone(), Self::build_args(&self.arg1, &self.arg2))
    }

    /// Submit the current field values to the bridge.
    ///
    /// Returns immediately; the invocation runs on its own thread and the
    /// returned handle can be joined to wait for it. On success the opaque
    /// response is logged. On rejection there is no recovery and no
    /// user-visible error state, just a log warning.
    pub fn submit(&self) -> thread::JoinHandle<()> {
        let request = self.request();
        let bridge = Arc::clone(&self.bridge);
        thread::spawn(move || match bridge.invoke(request) {
            Ok(response) => log::info!("parse_command response: {response}"),
            Err(e) => log::warn!("parse_command rejected: {e}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_args_keeps_only_nonempty_values() {
        assert_eq!(CommandForm::build_args("3", "4"), vec!["3", "4"]);
        assert_eq!(CommandForm::build_args("", ""), Vec::<String>::new());
        assert_eq!(CommandForm::build_args("x", ""), vec!["x"]);
        assert_eq!(CommandForm::build_args("", "y"), vec!["y"]);
    }

    #[test]
    fn build_args_does_not_trim() {
        assert_eq!(CommandForm::build_args(" ", ""), vec![" "]);
        assert_eq!(CommandForm::build_args("a ", " b"), vec!["a ", " b"]);
    }

    #[test]
    fn build_args_is_pure() {
        let first = CommandForm::build_args("one", "two");
        let second = CommandForm::build_args("one", "two");
        assert_eq!(first, second);
    }
}
