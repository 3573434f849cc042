use std::cell::RefCell;

use crate::messages::{Command, Message};
use crate::models::{
    Automation, ConversationSummary, Dashboard, Document, Incident, KnowledgeBaseEntry, LogEntry,
};

/// What the status-update modal was opened for. `SetState` reads the chosen
/// state from the modal's select at submit time; `AddComments` keeps the
/// incident's current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusUpdateMode {
    SetState,
    AddComments,
}

/// UI-session context: the panels' last successfully loaded data plus the
/// two selection scalars. Selection is private so the single-selection
/// invariant can only be changed through the accessors below.
pub struct AppState {
    selected_conversation_id: Option<u32>,
    selected_incident_id: Option<u32>,

    pub conversations: Vec<ConversationSummary>,
    pub documents: Vec<Document>,
    pub incidents: Vec<Incident>,
    pub automations: Vec<Automation>,
    pub dashboards: Vec<Dashboard>,
    pub knowledge_base: Vec<KnowledgeBaseEntry>,
    pub logs: Vec<LogEntry>,

    /// Target of the open status-update modal, if any.
    pub status_modal: Option<(u32, StatusUpdateMode)>,
    /// Knowledge-base modal target: `Some(id)` = edit, `None` = create.
    pub kb_modal_entry: Option<u32>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            selected_conversation_id: None,
            selected_incident_id: None,
            conversations: Vec::new(),
            documents: Vec::new(),
            incidents: Vec::new(),
            automations: Vec::new(),
            dashboards: Vec::new(),
            knowledge_base: Vec::new(),
            logs: Vec::new(),
            status_modal: None,
            kb_modal_entry: None,
        }
    }

    pub fn selected_conversation_id(&self) -> Option<u32> {
        self.selected_conversation_id
    }

    pub fn selected_incident_id(&self) -> Option<u32> {
        self.selected_incident_id
    }

    /// Select a conversation. Returns `false` (and changes nothing) when the
    /// id is already selected or does not exist in the last loaded list.
    pub fn select_conversation(&mut self, id: u32) -> bool {
        if self.selected_conversation_id == Some(id) {
            return false;
        }
        if !self.conversations.iter().any(|c| c.id == id) {
            return false;
        }
        self.selected_conversation_id = Some(id);
        true
    }

    pub fn clear_conversation_selection(&mut self) {
        self.selected_conversation_id = None;
    }

    pub fn select_incident(&mut self, id: u32) -> bool {
        if self.selected_incident_id == Some(id) {
            return false;
        }
        if !self.incidents.iter().any(|i| i.id == id) {
            return false;
        }
        self.selected_incident_id = Some(id);
        true
    }

    pub fn clear_incident_selection(&mut self) {
        self.selected_incident_id = None;
    }

    /// Replace the conversation list. Drops the selection when it no longer
    /// references a listed id.
    pub fn set_conversations(&mut self, conversations: Vec<ConversationSummary>) {
        self.conversations = conversations;
        if let Some(selected) = self.selected_conversation_id {
            if !self.conversations.iter().any(|c| c.id == selected) {
                self.selected_conversation_id = None;
            }
        }
    }

    pub fn set_incidents(&mut self, incidents: Vec<Incident>) {
        self.incidents = incidents;
        if let Some(selected) = self.selected_incident_id {
            if !self.incidents.iter().any(|i| i.id == selected) {
                self.selected_incident_id = None;
            }
        }
    }

    pub fn dispatch(&mut self, msg: Message) -> Vec<Command> {
        crate::update::update(self, msg)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

thread_local! {
    pub static APP_STATE: RefCell<AppState> = RefCell::new(AppState::new());
}

/// Run a message through the reducer, then execute the resulting commands
/// outside the state borrow so executors (and the UI closures they run) can
/// dispatch follow-up messages freely.
pub fn dispatch_global_message(msg: Message) {
    let commands = APP_STATE.with(|state| {
        let mut state = state.borrow_mut();
        state.dispatch(msg)
    });
    crate::command_executors::execute_commands(commands);
}
