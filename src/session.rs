//! Session Identity
//!
//! Tracks which staff member is logged in on this tab. The identity is
//! mirrored into tab-scoped storage so a reload keeps the cashier logged in.

use std::cell::RefCell;

use crate::auth::{validate_pin, StaffDirectory};
use crate::error::LoginError;
use crate::models::{Staff, StaffRole};

pub const PIN_KEY: &str = "staffPin";
pub const NAME_KEY: &str = "staffName";
pub const ROLE_KEY: &str = "staffRole";

/// Persistence port for the active identity.
pub trait SessionStorage {
    fn load(&self) -> Option<Staff>;
    fn save(&self, staff: &Staff);
    fn clear(&self);
}

/// `window.sessionStorage` backed storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStorage;

impl BrowserSessionStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.session_storage().ok().flatten()
    }
}

impl SessionStorage for BrowserSessionStorage {
    fn load(&self) -> Option<Staff> {
        let storage = Self::storage()?;
        let pin = storage.get_item(PIN_KEY).ok().flatten()?;
        let name = storage.get_item(NAME_KEY).ok().flatten()?;
        let role = storage
            .get_item(ROLE_KEY)
            .ok()
            .flatten()
            .and_then(|r| r.parse::<StaffRole>().ok())
            .unwrap_or_default();
        Some(Staff { pin, name, role })
    }

    fn save(&self, staff: &Staff) {
        let Some(storage) = Self::storage() else {
            log::warn!("[Session] sessionStorage unavailable, login will not survive reload");
            return;
        };
        for (key, value) in [
            (PIN_KEY, staff.pin.as_str()),
            (NAME_KEY, staff.name.as_str()),
            (ROLE_KEY, staff.role.as_str()),
        ] {
            if storage.set_item(key, value).is_err() {
                log::warn!("[Session] failed to write {}", key);
            }
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            for key in [PIN_KEY, NAME_KEY, ROLE_KEY] {
                let _ = storage.remove_item(key);
            }
        }
    }
}

/// In-memory storage, for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    slot: RefCell<Option<Staff>>,
}

impl MemorySessionStorage {
    pub fn with_staff(staff: Staff) -> Self {
        Self {
            slot: RefCell::new(Some(staff)),
        }
    }
}

impl SessionStorage for MemorySessionStorage {
    fn load(&self) -> Option<Staff> {
        self.slot.borrow().clone()
    }

    fn save(&self, staff: &Staff) {
        *self.slot.borrow_mut() = Some(staff.clone());
    }

    fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    LoggedOut,
    LoggedIn(Staff),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    state: SessionState,
}

impl Session {
    /// Start from whatever identity survived in storage.
    pub fn restore(storage: &dyn SessionStorage) -> Self {
        let state = match storage.load() {
            Some(staff) => {
                log::info!("[Session] restored session for {}", staff.name);
                SessionState::LoggedIn(staff)
            }
            None => SessionState::LoggedOut,
        };
        Self { state }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn staff(&self) -> Option<&Staff> {
        match &self.state {
            SessionState::LoggedIn(staff) => Some(staff),
            SessionState::LoggedOut => None,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.staff().is_some()
    }

    /// Match `pin` against the directory. On failure the state is untouched.
    pub fn login(
        &mut self,
        pin: &str,
        directory: &dyn StaffDirectory,
        storage: &dyn SessionStorage,
    ) -> Result<Staff, LoginError> {
        validate_pin(pin)?;
        let staff = directory.find(pin).ok_or(LoginError::UnknownPin)?;
        storage.save(&staff);
        log::info!("[Session] {} logged in as {}", staff.name, staff.role);
        self.state = SessionState::LoggedIn(staff.clone());
        Ok(staff)
    }

    pub fn logout(&mut self, storage: &dyn SessionStorage) {
        if let SessionState::LoggedIn(staff) = &self.state {
            log::info!("[Session] {} logged out", staff.name);
        }
        storage.clear();
        self.state = SessionState::LoggedOut;
    }
}
