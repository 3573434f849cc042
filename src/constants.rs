// Element ids and fixed display strings - single source of truth so panels,
// reducers and tests agree on the DOM contract.

// Panel containers
pub const CONVERSATIONS_LIST_ID: &str = "conversations-list";
pub const CHAT_MESSAGES_ID: &str = "chat-messages";
pub const CHAT_INPUT_ID: &str = "chat-input";
pub const CHAT_TITLE_ID: &str = "current-conversation-title";
pub const DOCUMENTS_LIST_ID: &str = "documents-list";
pub const INCIDENTS_LIST_ID: &str = "incidents-list";
pub const INCIDENT_DETAILS_ID: &str = "incident-details";
pub const INCIDENT_SUMMARY_ID: &str = "incident-summary";
pub const AUTOMATIONS_LIST_ID: &str = "automations-list";
pub const DASHBOARDS_LIST_ID: &str = "dashboards-list";
pub const KNOWLEDGE_BASE_LIST_ID: &str = "knowledge-base-list";
pub const LOGS_LIST_ID: &str = "logs-list";

// Modals
pub const STATUS_UPDATE_MODAL_ID: &str = "status-update-modal";
pub const STATUS_COMMENTS_ID: &str = "status-comments";
pub const STATUS_SELECT_ID: &str = "status-select";
pub const UPLOAD_MODAL_ID: &str = "upload-modal";
pub const UPLOAD_FORM_ID: &str = "document-upload-form";
pub const UPLOAD_STATUS_ID: &str = "upload-status";
pub const KB_MODAL_ID: &str = "kb-modal";
pub const KB_MODAL_TITLE_ID: &str = "kb-modal-title";
pub const KB_FORM_ID: &str = "kb-form";
pub const KB_TITLE_INPUT_ID: &str = "kb-title";
pub const KB_CATEGORY_INPUT_ID: &str = "kb-category";
pub const KB_CONTENT_INPUT_ID: &str = "kb-content";
pub const KB_VIEW_MODAL_ID: &str = "kb-view-modal";
pub const KB_VIEW_TITLE_ID: &str = "kb-view-title";
pub const KB_VIEW_CATEGORY_ID: &str = "kb-view-category";
pub const KB_VIEW_CONTENT_ID: &str = "kb-view-content";
pub const EXECUTION_LOG_MODAL_ID: &str = "execution-log-modal";
pub const EXECUTION_LOG_TITLE_ID: &str = "execution-log-title";
pub const EXECUTION_LOG_NAME_ID: &str = "execution-log-name";
pub const EXECUTION_LOG_DESCRIPTION_ID: &str = "execution-log-description";
pub const EXECUTION_LOG_STATUS_ID: &str = "execution-log-status";
pub const EXECUTION_LOG_MESSAGE_ID: &str = "execution-log-message";
pub const EXECUTION_LOG_LINES_ID: &str = "execution-log-lines";
pub const EXECUTION_LOG_RAW_ID: &str = "execution-log-raw";
pub const MODAL_OVERLAY_ID: &str = "modal-overlay";
pub const STATUS_MODAL_TITLE_ID: &str = "status-modal-title";
pub const STATUS_SELECT_ROW_ID: &str = "status-select-row";

// Marker CSS classes used by the panel renderers; tests assert on these.
pub const EMPTY_STATE_CLASS: &str = "empty-state";
pub const ERROR_STATE_CLASS: &str = "error";
pub const LOADING_STATE_CLASS: &str = "loading";

pub const DEFAULT_CONVERSATION_TITLE: &str = "New Conversation";
pub const UNSELECTED_CONVERSATION_TITLE: &str = "Select or create a conversation";
pub const NO_MESSAGES_PLACEHOLDER: &str = "No messages yet. Start the conversation!";
pub const EXECUTION_LOG_DEFAULT_TITLE: &str = "Automation Logs";
pub const DATASOURCE_LOG_TITLE: &str = "Data Source Query Logs";

// Audit log sources for side-channel outcomes
pub const AUTOMATION_LOG_SOURCE: &str = "automation_service";
pub const DATASOURCE_LOG_SOURCE: &str = "datasource_service";
