//! Addressable output regions.
//!
//! Instead of looking DOM nodes up by id string at call time, every
//! render target is a variant of [`RegionId`] and lives in [`Regions`].
//! Each slot carries a request generation: dispatching bumps it and
//! takes a token, and a response is applied only while its token is
//! still current. A re-triggered action therefore supersedes the
//! in-flight one instead of racing it for the region.

use std::{collections::HashMap, sync::Mutex};

use dashboard_model::kind::ViewKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionId {
    /// Result area of one view kind (one per card on the dashboard).
    View(ViewKind),
    UserResult,
    ProductResult,
    OrderResult,
    LiveUpdates,
}

/// A rendered fragment with its display style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Empty,
    Loading(String),
    Success(String),
    Error(String),
}

impl Fragment {
    pub fn text(&self) -> &str {
        match self {
            Fragment::Empty => "",
            Fragment::Loading(s) | Fragment::Success(s) | Fragment::Error(s) => s,
        }
    }
}

impl Default for Fragment {
    fn default() -> Self {
        Fragment::Empty
    }
}

/// The three live counters on the interactive tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LiveStats {
    pub users: u64,
    pub products: u64,
    pub orders: u64,
}

#[derive(Debug, Default)]
struct Slot {
    fragment: Fragment,
    generation: u64,
}

#[derive(Debug, Default)]
pub struct Regions {
    slots: Mutex<HashMap<RegionId, Slot>>,
    live: Mutex<LiveStats>,
}

impl Regions {
    /// Starts a new request for a region: renders the loading
    /// placeholder and returns the generation token the response must
    /// present to be applied.
    pub fn begin(&self, id: RegionId, placeholder: impl Into<String>) -> u64 {
        let mut slots = self.slots.lock().unwrap();
        let slot = slots.entry(id).or_default();
        slot.generation += 1;
        slot.fragment = Fragment::Loading(placeholder.into());
        slot.generation
    }

    /// Applies a response fragment if `token` is still the latest
    /// generation for the region. Returns whether it was applied.
    #[must_use]
    pub fn apply(&self, id: RegionId, token: u64, fragment: Fragment) -> bool {
        let mut slots = self.slots.lock().unwrap();
        let slot = slots.entry(id).or_default();
        if slot.generation != token {
            return false;
        }
        slot.fragment = fragment;
        true
    }

    /// Unconditional write, for local updates that involve no request
    /// (form clearing, local validation errors).
    pub fn set(&self, id: RegionId, fragment: Fragment) {
        let mut slots = self.slots.lock().unwrap();
        let slot = slots.entry(id).or_default();
        slot.generation += 1;
        slot.fragment = fragment;
    }

    pub fn fragment(&self, id: RegionId) -> Fragment {
        self.slots
            .lock()
            .unwrap()
            .get(&id)
            .map(|s| s.fragment.clone())
            .unwrap_or(Fragment::Empty)
    }

    pub fn set_live(&self, stats: LiveStats) {
        *self.live.lock().unwrap() = stats;
    }

    pub fn live(&self) -> LiveStats {
        *self.live.lock().unwrap()
    }
}
