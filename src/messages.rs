// The events that can occur in the UI plus the network results they produce.

use crate::models::{
    Automation, Conversation, ConversationSummary, Dashboard, Document, ExecutionReport, Incident,
    KnowledgeBaseEntry, LogEntry,
};
use crate::state::StatusUpdateMode;

#[derive(Debug)]
pub enum Message {
    // Conversations
    LoadConversations,
    ConversationsLoaded(Vec<ConversationSummary>),
    ConversationsLoadFailed,
    SelectConversation(u32),
    ConversationDetailLoaded(Box<Conversation>),
    ConversationDetailFailed,
    CreateConversation,
    ConversationCreated(Box<Conversation>),
    RenameConversation(String),
    ConversationRenamed(Box<Conversation>),
    DeleteCurrentConversation, // confirmation already given
    ConversationDeleted,
    ClearAllConversations, // confirmation already given
    ConversationsCleared(Option<String>),
    SendChatMessage(String),

    // Documents
    LoadDocuments,
    DocumentsLoaded(Vec<Document>),
    DocumentsLoadFailed,
    DeleteDocument(u32), // confirmation already given
    DocumentDeleted,
    ClearAllDocuments, // confirmation already given
    DocumentsCleared(Option<String>),
    DocumentUploaded,

    // Incidents
    LoadIncidents,
    IncidentsLoaded(Vec<Incident>),
    IncidentsLoadFailed,
    SelectIncident(u32),
    IncidentDetailLoaded(Box<Incident>),
    IncidentDetailFailed,
    OpenStatusModal {
        incident_id: u32,
        mode: StatusUpdateMode,
    },
    CloseStatusModal,
    SubmitStatusUpdate {
        comments: String,
        selected_state: Option<i64>,
    },
    IncidentUpdated {
        incident: Box<Incident>,
        status_change: bool,
    },
    IncidentUpdateFailed {
        status_change: bool,
    },

    // Automations
    LoadAutomations,
    AutomationsLoaded(Vec<Automation>),
    AutomationsLoadFailed,
    TriggerAutomation(u32),
    AutomationTriggered(Box<ExecutionReport>),
    AutomationTriggerFailed(String),

    // Dashboards
    LoadDashboards,
    DashboardsLoaded(Vec<Dashboard>),
    DashboardsLoadFailed,

    // Knowledge base
    LoadKnowledgeBase,
    KnowledgeBaseLoaded(Vec<KnowledgeBaseEntry>),
    KnowledgeBaseLoadFailed,
    OpenKbCreateModal,
    OpenKbEditModal(u32),
    ViewKbEntry(u32),
    KbEntryLoaded {
        entry: Box<KnowledgeBaseEntry>,
        for_edit: bool,
    },
    SaveKbEntry {
        title: String,
        category: String,
        content: String,
    },
    KbEntrySaved {
        was_edit: bool,
    },
    DeleteKbEntry(u32), // confirmation already given
    KbEntryDeleted,

    // Logs
    LoadLogs,
    LogsLoaded(Vec<LogEntry>),
    LogsLoadFailed,
    AppendAuditLog {
        level: String,
        source: String,
        message: String,
    },
}

/// Side effects produced by the reducer. Network commands run as spawned
/// futures; `UpdateUI` closures apply rendered markup to the live document.
pub enum Command {
    SendMessage(Message),
    UpdateUI(Box<dyn FnOnce() + 'static>),

    FetchConversations,
    FetchConversationDetail(u32),
    CreateConversation,
    RenameConversation { id: u32, title: String },
    DeleteConversation(u32),
    ClearConversations,
    SendChatMessage { conversation_id: u32, content: String },

    FetchDocuments,
    DeleteDocument(u32),
    ClearDocuments,

    FetchIncidents,
    FetchIncidentDetail(u32),
    UpdateIncident {
        id: u32,
        state: i64,
        comments: Option<String>,
        status_change: bool,
    },

    FetchAutomations,
    TriggerAutomation(u32),

    FetchDashboards,

    FetchKnowledgeBase,
    FetchKbEntry { id: u32, for_edit: bool },
    SaveKbEntry {
        id: Option<u32>,
        title: String,
        category: String,
        content: String,
    },
    DeleteKbEntry(u32),

    FetchLogs,
    CreateLogEntry {
        level: String,
        source: String,
        message: String,
    },
}

impl Command {
    pub fn send(msg: Message) -> Self {
        Command::SendMessage(msg)
    }

    pub fn update_ui<F>(f: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Command::UpdateUI(Box::new(f))
    }
}
