use std::sync::{Arc, Mutex};

/// The currently authenticated identity, if any.
///
/// Threaded explicitly into whatever needs it (the delete guard, the
/// logout action) rather than living in an ambient global. Clones
/// share the same underlying state.
#[derive(Debug, Clone, Default)]
pub struct Session {
    current: Arc<Mutex<Option<String>>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sign_in(&self, email: &str) {
        let mut current = self.current.lock().expect("session lock poisoned");
        *current = Some(email.to_string());
    }

    pub fn current_email(&self) -> Option<String> {
        self.current.lock().expect("session lock poisoned").clone()
    }

    pub fn sign_out(&self) {
        let mut current = self.current.lock().expect("session lock poisoned");
        *current = None;
    }
}
