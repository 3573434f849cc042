pub mod automation_panel;
pub mod chat_thread;
pub mod conversation_panel;
pub mod dashboard_panel;
pub mod document_panel;
pub mod execution_log_modal;
pub mod incident_panel;
pub mod knowledge_base;
pub mod log_panel;
pub mod modal;
