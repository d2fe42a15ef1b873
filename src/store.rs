//! Observable container for the current creator snapshot.
//!
//! The store holds exactly one [`CreatorState`]. Every operation reads it,
//! runs the reducer once, swaps in the result and synchronously notifies
//! subscribers before returning. Observers never see a half-applied edit
//! because snapshots are immutable and replaced wholesale.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, ReentrantMutex, RwLock};

use crate::catalog::{TemplateCatalog, TemplateId};
use crate::character::Character;
use crate::config::Config;
use crate::creator::{CreatorIntent, CreatorReducer, CreatorState};
use crate::error::Rejection;
use crate::mvi::Reducer;

type Callback = dyn Fn(&Arc<CreatorState>) + Send + Sync;

struct Shared {
    reducer: CreatorReducer,
    /// Serialises read-compute-publish. Re-entrant so a subscriber may
    /// dispatch from inside its callback on the same thread.
    dispatch: ReentrantMutex<()>,
    state: RwLock<Arc<CreatorState>>,
    subscribers: Mutex<Vec<(u64, Arc<Callback>)>>,
    next_id: AtomicU64,
}

/// Thread-safe handle to the creator state.
///
/// Cloning the handle shares the same snapshot and subscriber list.
#[derive(Clone)]
pub struct CreatorStore {
    shared: Arc<Shared>,
}

impl Default for CreatorStore {
    fn default() -> Self {
        // An all-zero character costs nothing under the default budget.
        let reducer = CreatorReducer::default();
        let state = reducer.initial_state(Character::default());
        Self::with_state(reducer, state)
    }
}

impl CreatorStore {
    /// Store starting in custom mode with `initial` as the character.
    ///
    /// Fails if `initial` already costs more than the budget, since no
    /// later edit could bring the snapshot back within it.
    pub fn new(reducer: CreatorReducer, initial: Character) -> Result<Self, Rejection> {
        let state = reducer.initial_state(initial);
        let remaining = state.remaining_points();
        if remaining < 0 {
            tracing::warn!(remaining, "Initial character exceeds the point budget");
            return Err(Rejection::StartOverBudget { remaining });
        }
        Ok(Self::with_state(reducer, state))
    }

    fn with_state(reducer: CreatorReducer, state: CreatorState) -> Self {
        Self {
            shared: Arc::new(Shared {
                reducer,
                dispatch: ReentrantMutex::new(()),
                state: RwLock::new(Arc::new(state)),
                subscribers: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// Store using the rules and templates from `config`.
    pub fn from_config(config: &Config) -> Result<Self, Rejection> {
        let reducer = CreatorReducer::new(config.rules(), config.catalog());
        Self::new(reducer, Character::default())
    }

    /// The current snapshot.
    pub fn get_state(&self) -> Arc<CreatorState> {
        self.shared.state.read().clone()
    }

    pub fn catalog(&self) -> &Arc<TemplateCatalog> {
        self.shared.reducer.catalog()
    }

    /// Apply one intent and publish the result if it differs from the
    /// current snapshot.
    pub fn dispatch(&self, intent: CreatorIntent) {
        let _serial = self.shared.dispatch.lock();

        let current = self.get_state();
        let next = self.shared.reducer.reduce(CreatorState::clone(&current), intent);
        if next == *current {
            tracing::debug!("Snapshot unchanged, nothing published");
            return;
        }

        let next = Arc::new(next);
        *self.shared.state.write() = Arc::clone(&next);
        tracing::trace!(
            remaining = next.remaining_points(),
            selected = ?next.selected_template(),
            "Snapshot published"
        );
        self.notify(&next);
    }

    fn notify(&self, published: &Arc<CreatorState>) {
        let callbacks: Vec<Arc<Callback>> = self
            .shared
            .subscribers
            .lock()
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();

        for callback in callbacks {
            // A callback that dispatched again has already delivered a newer
            // snapshot to everyone; stop handing out the stale one.
            if !Arc::ptr_eq(&self.get_state(), published) {
                break;
            }
            callback(published);
        }
    }

    pub fn on_name_change(&self, name: impl Into<String>) {
        self.dispatch(CreatorIntent::NameChanged(name.into()));
    }

    pub fn on_class_change(&self, char_class: impl Into<String>) {
        self.dispatch(CreatorIntent::ClassChanged(char_class.into()));
    }

    pub fn on_description_change(&self, description: impl Into<String>) {
        self.dispatch(CreatorIntent::DescriptionChanged(description.into()));
    }

    pub fn update_stat(&self, key: &str, delta: i32) {
        self.dispatch(CreatorIntent::StatChanged {
            key: key.to_string(),
            delta,
        });
    }

    pub fn select_character(&self, template_id: &str) {
        self.dispatch(CreatorIntent::TemplateSelected(TemplateId::new(template_id)));
    }

    /// Register `callback` for every published snapshot.
    ///
    /// The callback runs synchronously on the dispatching thread. It stays
    /// registered until the returned [`Subscription`] is dropped.
    #[must_use = "dropping the subscription unregisters the callback"]
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&Arc<CreatorState>) + Send + Sync + 'static,
    {
        let id = self.shared.next_id.fetch_add(1, Ordering::Relaxed);
        let callback: Arc<Callback> = Arc::new(callback);
        self.shared.subscribers.lock().push((id, callback));
        Subscription {
            id,
            shared: Arc::downgrade(&self.shared),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.shared.subscribers.lock().len()
    }
}

/// Keeps a subscriber registered; unregisters on drop.
pub struct Subscription {
    id: u64,
    shared: Weak<Shared>,
}

impl Subscription {
    /// Unregister now rather than at end of scope.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(shared) = self.shared.upgrade() {
            shared.subscribers.lock().retain(|(id, _)| *id != self.id);
        }
    }
}
