use crate::{
    domain::{
        board::{AppState, BoardConfig},
        id::{IdGenerator, RandomIds},
    },
    error::{BoardError, Result},
    state::{action::Action, reducer::app_state_reducer},
};
use std::sync::Arc;
use tokio::sync::watch;

/// Owns the live board for a session and applies actions one at a time
///
/// Readers get immutable snapshots, either directly through [`BoardStore::state`]
/// or by awaiting the next published one on a [`BoardStore::subscribe`] receiver.
/// A snapshot is only published after an action applies cleanly; a rejected
/// action leaves the current snapshot in place.
pub struct BoardStore {
    config: BoardConfig,
    ids: Box<dyn IdGenerator + Send>,
    state: Arc<AppState>,
    publisher: watch::Sender<Arc<AppState>>,
}

impl BoardStore {
    /// Creates a store seeded with the default board and random ids
    pub fn new() -> Self {
        Self::from_parts(BoardConfig::default(), Box::new(RandomIds))
    }

    /// Creates a store from a custom seed snapshot
    pub fn with_config(config: BoardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(config, Box::new(RandomIds)))
    }

    /// Replaces the id source, e.g. with a deterministic one
    pub fn with_id_generator(mut self, ids: impl IdGenerator + Send + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    fn from_parts(config: BoardConfig, ids: Box<dyn IdGenerator + Send>) -> Self {
        let state = Arc::new(AppState::seeded(&config));
        let (publisher, _) = watch::channel(Arc::clone(&state));
        Self {
            config,
            ids,
            state,
            publisher,
        }
    }

    /// Current snapshot
    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Receiver that observes every snapshot published after this call
    pub fn subscribe(&self) -> watch::Receiver<Arc<AppState>> {
        self.publisher.subscribe()
    }

    /// Applies a single action
    ///
    /// On error the held state is unchanged and nothing is published.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        match app_state_reducer(&self.state, &action, self.ids.as_mut()) {
            Ok(next) => {
                tracing::debug!(
                    action = action.kind(),
                    lists = next.lists.len(),
                    tasks = next.task_count(),
                    dragging = next.is_dragging(),
                    "applied board action"
                );
                self.publish(next);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(action = action.kind(), error = %err, "rejected board action");
                Err(err)
            }
        }
    }

    /// Applies an action given in its JSON wire shape
    ///
    /// An unknown `"type"` tag is ignored and leaves the state as it was. A known
    /// tag with a malformed payload is an `InvalidAction` error.
    pub fn dispatch_json(&mut self, json: &str) -> Result<()> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let tag = value
            .get("type")
            .and_then(serde_json::Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| BoardError::InvalidAction("missing \"type\" tag".to_string()))?;

        if !Action::is_known_type(&tag) {
            tracing::warn!(action = %tag, "ignoring unrecognized board action");
            return Ok(());
        }

        let action: Action = serde_json::from_value(value)
            .map_err(|err| BoardError::InvalidAction(format!("{tag}: {err}")))?;
        self.dispatch(action)
    }

    /// Restores the configured seed snapshot and clears any drag marker
    pub fn reset(&mut self) {
        tracing::debug!(board = %self.config.name, "resetting board to seed snapshot");
        self.publish(AppState::seeded(&self.config));
    }

    /// Ends the session, handing back the final state
    pub fn into_state(self) -> AppState {
        Arc::try_unwrap(self.state).unwrap_or_else(|shared| (*shared).clone())
    }

    fn publish(&mut self, next: AppState) {
        self.state = Arc::new(next);
        self.publisher.send_replace(Arc::clone(&self.state));
    }
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new()
    }
}
