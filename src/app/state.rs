use super::mode::Mode;
use crate::client::{ApiClient, ApiError};
use crate::todo::{Todo, TodoList};
use crate::ui::theme::Theme;
use ratatui::widgets::ListState;
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use std::time::Instant;
use tracing::debug;
use uuid::Uuid;

const INFO_MESSAGE_SECS: u64 = 3;
const ERROR_MESSAGE_SECS: u64 = 5;

/// Outcome of one store round trip, reported back to the UI thread. Each
/// variant is keyed by the item it concerns, so out-of-order arrival across
/// different items cannot cross-contaminate.
#[derive(Debug)]
pub enum ApiEvent {
    Listed(Result<Vec<Todo>, ApiError>),
    Created(Result<Todo, ApiError>),
    Checked {
        id: Uuid,
        result: Result<Todo, ApiError>,
    },
    Deleted {
        id: Uuid,
        result: Result<(), ApiError>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    time: Instant,
}

impl StatusMessage {
    fn expired(&self) -> bool {
        let ttl = match self.kind {
            StatusKind::Info => INFO_MESSAGE_SECS,
            StatusKind::Error => ERROR_MESSAGE_SECS,
        };
        self.time.elapsed().as_secs() >= ttl
    }
}

pub struct AppState {
    /// The session-local mirror of the remote store.
    pub todo_list: TodoList,
    pub cursor_position: usize,
    pub mode: Mode,
    pub edit_buffer: String,
    pub edit_cursor_pos: usize,
    pub should_quit: bool,
    pub theme: Theme,
    /// A full fetch is in flight (initial load, manual refresh, or the
    /// resync that follows a delete).
    pub loading: bool,
    /// A create is in flight; blocks double submission of the form.
    pub creating: bool,
    pub status_message: Option<StatusMessage>,
    pub list_state: ListState,
    /// Ids with a toggle or delete in flight. Keeps one item's operations
    /// strictly sequential without serializing across items.
    in_flight: HashSet<Uuid>,
    client: Arc<ApiClient>,
    api_tx: mpsc::Sender<ApiEvent>,
    api_rx: mpsc::Receiver<ApiEvent>,
}

impl AppState {
    pub fn new(client: ApiClient, theme: Theme) -> Self {
        let (api_tx, api_rx) = mpsc::channel();

        Self {
            todo_list: TodoList::new(),
            cursor_position: 0,
            mode: Mode::Navigate,
            edit_buffer: String::new(),
            edit_cursor_pos: 0,
            should_quit: false,
            theme,
            loading: false,
            creating: false,
            status_message: None,
            list_state: ListState::default(),
            in_flight: HashSet::new(),
            client: Arc::new(client),
            api_tx,
            api_rx,
        }
    }

    pub fn selected_todo(&self) -> Option<&Todo> {
        self.todo_list.get(self.cursor_position)
    }

    pub fn is_in_flight(&self, id: Uuid) -> bool {
        self.in_flight.contains(&id)
    }

    /// Fetch the full listing and replace the local collection when it
    /// arrives. Used at session start, on manual refresh, and after a delete.
    pub fn request_refresh(&mut self) {
        self.loading = true;
        let client = self.client.clone();
        let tx = self.api_tx.clone();
        thread::spawn(move || {
            let _ = tx.send(ApiEvent::Listed(client.list()));
        });
    }

    /// Submit the creation form. The new item is appended once the store
    /// confirms it; no full refresh follows.
    pub fn submit_new_todo(&mut self) {
        if self.creating {
            return;
        }
        self.creating = true;

        let description = self.edit_buffer.clone();
        let client = self.client.clone();
        let tx = self.api_tx.clone();
        thread::spawn(move || {
            let _ = tx.send(ApiEvent::Created(client.create(&description)));
        });
    }

    /// Request the opposite completion state for the selected item. The
    /// displayed checkbox only changes when the store's answer comes back.
    pub fn toggle_selected(&mut self) {
        let Some(item) = self.selected_todo() else {
            return;
        };
        let id = item.id;
        let desired = !item.completed;

        if !self.in_flight.insert(id) {
            return;
        }

        let client = self.client.clone();
        let tx = self.api_tx.clone();
        thread::spawn(move || {
            let _ = tx.send(ApiEvent::Checked {
                id,
                result: client.set_completed(id, desired),
            });
        });
    }

    pub fn delete_selected(&mut self) {
        let Some(item) = self.selected_todo() else {
            return;
        };
        let id = item.id;

        if !self.in_flight.insert(id) {
            return;
        }

        let client = self.client.clone();
        let tx = self.api_tx.clone();
        thread::spawn(move || {
            let _ = tx.send(ApiEvent::Deleted {
                id,
                result: client.delete(id),
            });
        });
    }

    /// Drain responses that arrived since the last tick and apply each one.
    pub fn poll_api_events(&mut self) {
        let mut events = Vec::new();
        while let Ok(event) = self.api_rx.try_recv() {
            events.push(event);
        }
        for event in events {
            self.handle_api_event(event);
        }
    }

    /// Apply one confirmed store response to local state. Local state only
    /// ever changes here, after a successful round trip, so a failure leaves
    /// it in its last-known-good shape.
    pub fn handle_api_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::Listed(result) => {
                self.loading = false;
                match result {
                    Ok(todos) => {
                        debug!(count = todos.len(), "list refreshed");
                        self.todo_list.replace_all(todos);
                        self.clamp_cursor();
                    }
                    Err(e) => self.set_error(format!("Refresh failed: {e}")),
                }
            }
            ApiEvent::Created(result) => {
                self.creating = false;
                match result {
                    Ok(todo) => {
                        self.todo_list.append_confirmed(todo);
                        self.cursor_position = self.todo_list.len() - 1;
                        self.sync_list_state();
                        // Successful save collapses the form
                        self.edit_buffer.clear();
                        self.edit_cursor_pos = 0;
                        self.mode = Mode::Navigate;
                        self.set_status("Added".to_string());
                    }
                    // The form stays expanded with the text intact
                    Err(e) => self.set_error(format!("Create failed: {e}")),
                }
            }
            ApiEvent::Checked { id, result } => {
                self.in_flight.remove(&id);
                match result {
                    Ok(todo) => {
                        // The confirmed item wins over whatever was requested
                        self.todo_list.apply_completion(id, todo);
                    }
                    Err(e) => self.set_error(format!("Update failed: {e}")),
                }
            }
            ApiEvent::Deleted { id, result } => {
                self.in_flight.remove(&id);
                match result {
                    // Full resync instead of a targeted local removal
                    Ok(()) => self.request_refresh(),
                    Err(e) => {
                        self.set_error(format!("Delete failed: {e}"));
                        // The store already lost this id; resync to match it
                        if matches!(e, ApiError::NotFound(_)) {
                            self.request_refresh();
                        }
                    }
                }
            }
        }
    }

    pub fn open_new_todo_form(&mut self) {
        self.mode = Mode::Insert;
        self.edit_buffer.clear();
        self.edit_cursor_pos = 0;
    }

    pub fn cancel_new_todo_form(&mut self) {
        self.mode = Mode::Navigate;
        self.edit_buffer.clear();
        self.edit_cursor_pos = 0;
    }

    pub fn move_cursor_up(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
        self.sync_list_state();
    }

    pub fn move_cursor_down(&mut self) {
        if !self.todo_list.is_empty() && self.cursor_position < self.todo_list.len() - 1 {
            self.cursor_position += 1;
        }
        self.sync_list_state();
    }

    pub fn sync_list_state(&mut self) {
        if self.todo_list.is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(self.cursor_position));
        }
    }

    fn clamp_cursor(&mut self) {
        self.cursor_position = self
            .cursor_position
            .min(self.todo_list.len().saturating_sub(1));
        self.sync_list_state();
    }

    pub fn set_status(&mut self, text: String) {
        self.status_message = Some(StatusMessage {
            text,
            kind: StatusKind::Info,
            time: Instant::now(),
        });
    }

    pub fn set_error(&mut self, text: String) {
        tracing::warn!("{text}");
        self.status_message = Some(StatusMessage {
            text,
            kind: StatusKind::Error,
            time: Instant::now(),
        });
    }

    pub fn clear_expired_status_message(&mut self) {
        if let Some(message) = &self.status_message
            && message.expired()
        {
            self.status_message = None;
        }
    }
}
