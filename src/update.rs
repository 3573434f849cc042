//! The reducer: every message maps to state mutations plus a list of
//! commands. No DOM access happens here; rendering is deferred into
//! `Command::UpdateUI` closures so this whole module stays natively testable.

use crate::components::{
    automation_panel, chat_thread, conversation_panel, dashboard_panel, document_panel,
    execution_log_modal, incident_panel, knowledge_base, log_panel, modal,
};
use crate::constants::{
    AUTOMATION_LOG_SOURCE, CHAT_INPUT_ID, CHAT_TITLE_ID, STATUS_COMMENTS_ID, STATUS_MODAL_TITLE_ID,
    STATUS_SELECT_ID, STATUS_SELECT_ROW_ID, STATUS_UPDATE_MODAL_ID, UNSELECTED_CONVERSATION_TITLE,
};
use crate::dom_utils;
use crate::messages::{Command, Message};
use crate::models::{
    sort_incidents_by_priority, summarize_priorities, ConversationSummary,
};
use crate::state::{AppState, StatusUpdateMode};
use crate::toast;

pub fn update(state: &mut AppState, msg: Message) -> Vec<Command> {
    match msg {
        // ------------------------------------------------------------------
        // Conversations
        // ------------------------------------------------------------------
        Message::LoadConversations => vec![Command::FetchConversations],

        Message::ConversationsLoaded(list) => {
            state.set_conversations(list);
            let list = state.conversations.clone();
            let selected = state.selected_conversation_id();
            let mut commands = vec![Command::update_ui(move || {
                conversation_panel::refresh(&list, selected);
            })];
            // Nothing selected: pick the first conversation automatically.
            if selected.is_none() {
                if let Some(first) = state.conversations.first() {
                    commands.push(Command::send(Message::SelectConversation(first.id)));
                }
            }
            commands
        }

        Message::ConversationsLoadFailed => {
            vec![Command::update_ui(conversation_panel::show_error)]
        }

        Message::SelectConversation(id) => {
            if state.select_conversation(id) {
                vec![
                    Command::update_ui(move || conversation_panel::highlight(id)),
                    Command::FetchConversationDetail(id),
                ]
            } else {
                Vec::new()
            }
        }

        Message::ConversationDetailLoaded(conv) => {
            vec![Command::update_ui(move || chat_thread::refresh(&conv))]
        }

        Message::ConversationDetailFailed => vec![Command::update_ui(chat_thread::show_error)],

        Message::CreateConversation => vec![Command::CreateConversation],

        Message::ConversationCreated(conv) => {
            state.conversations.insert(
                0,
                ConversationSummary {
                    id: conv.id,
                    title: conv.title.clone(),
                    updated_at: conv.updated_at.clone(),
                },
            );
            let _ = state.select_conversation(conv.id);
            vec![
                Command::update_ui(move || {
                    chat_thread::refresh(&conv);
                    if let Some(document) = dom_utils::document() {
                        dom_utils::set_input_value(&document, CHAT_INPUT_ID, "");
                    }
                }),
                Command::FetchConversations,
            ]
        }

        Message::RenameConversation(title) => match state.selected_conversation_id() {
            Some(id) => vec![Command::RenameConversation { id, title }],
            None => vec![Command::update_ui(|| {
                toast::warning("Select a conversation first");
            })],
        },

        Message::ConversationRenamed(conv) => {
            if let Some(row) = state.conversations.iter_mut().find(|c| c.id == conv.id) {
                row.title = conv.title.clone();
                row.updated_at = conv.updated_at.clone();
            }
            let list = state.conversations.clone();
            let selected = state.selected_conversation_id();
            vec![Command::update_ui(move || {
                conversation_panel::refresh(&list, selected);
                if selected == Some(conv.id) {
                    if let Some(document) = dom_utils::document() {
                        dom_utils::set_text(&document, CHAT_TITLE_ID, &conv.title);
                    }
                }
                toast::success("Conversation renamed");
            })]
        }

        Message::DeleteCurrentConversation => match state.selected_conversation_id() {
            Some(id) => vec![Command::DeleteConversation(id)],
            None => vec![Command::update_ui(|| {
                toast::warning("Select a conversation first");
            })],
        },

        Message::ConversationDeleted => {
            state.clear_conversation_selection();
            vec![
                Command::FetchConversations,
                Command::update_ui(|| {
                    chat_thread::reset(UNSELECTED_CONVERSATION_TITLE);
                    toast::success("Conversation deleted");
                }),
            ]
        }

        Message::ClearAllConversations => vec![Command::ClearConversations],

        Message::ConversationsCleared(message) => {
            state.set_conversations(Vec::new());
            vec![
                Command::FetchConversations,
                Command::update_ui(move || {
                    chat_thread::reset(UNSELECTED_CONVERSATION_TITLE);
                    toast::success(message.as_deref().unwrap_or("All conversations cleared"));
                }),
            ]
        }

        Message::SendChatMessage(text) => {
            let trimmed = text.trim().to_string();
            if trimmed.is_empty() {
                return Vec::new();
            }
            let Some(conversation_id) = state.selected_conversation_id() else {
                return Vec::new();
            };
            let echo = trimmed.clone();
            vec![
                Command::update_ui(move || {
                    chat_thread::append_user_bubble(&echo);
                    chat_thread::show_pending_indicator();
                    if let Some(document) = dom_utils::document() {
                        dom_utils::set_input_value(&document, CHAT_INPUT_ID, "");
                    }
                }),
                Command::SendChatMessage {
                    conversation_id,
                    content: trimmed,
                },
            ]
        }

        // ------------------------------------------------------------------
        // Documents
        // ------------------------------------------------------------------
        Message::LoadDocuments => vec![Command::FetchDocuments],

        Message::DocumentsLoaded(docs) => {
            state.documents = docs.clone();
            vec![Command::update_ui(move || document_panel::refresh(&docs))]
        }

        Message::DocumentsLoadFailed => vec![Command::update_ui(document_panel::show_error)],

        Message::DeleteDocument(id) => vec![Command::DeleteDocument(id)],

        Message::DocumentDeleted => vec![
            Command::FetchDocuments,
            Command::update_ui(|| toast::success("Document deleted")),
        ],

        Message::ClearAllDocuments => vec![Command::ClearDocuments],

        Message::DocumentsCleared(message) => {
            state.documents.clear();
            vec![
                Command::FetchDocuments,
                Command::update_ui(move || {
                    toast::success(message.as_deref().unwrap_or("All documents cleared"));
                }),
            ]
        }

        Message::DocumentUploaded => vec![
            Command::FetchDocuments,
            Command::update_ui(|| {
                document_panel::set_upload_status("Upload complete");
                document_panel::close_upload_modal_soon();
            }),
        ],

        // ------------------------------------------------------------------
        // Incidents
        // ------------------------------------------------------------------
        Message::LoadIncidents => vec![
            Command::update_ui(incident_panel::show_loading),
            Command::FetchIncidents,
        ],

        Message::IncidentsLoaded(mut incidents) => {
            sort_incidents_by_priority(&mut incidents);
            state.set_incidents(incidents);
            let incidents = state.incidents.clone();
            let selected = state.selected_incident_id();
            let summary = summarize_priorities(&incidents);
            vec![Command::update_ui(move || {
                incident_panel::refresh_list(&incidents, selected);
                incident_panel::refresh_summary(&summary);
            })]
        }

        Message::IncidentsLoadFailed => {
            vec![Command::update_ui(incident_panel::show_list_error)]
        }

        Message::SelectIncident(id) => {
            if state.select_incident(id) {
                vec![
                    Command::update_ui(move || incident_panel::highlight(id)),
                    Command::FetchIncidentDetail(id),
                ]
            } else {
                Vec::new()
            }
        }

        Message::IncidentDetailLoaded(incident) => {
            vec![Command::update_ui(move || {
                incident_panel::refresh_detail(&incident);
            })]
        }

        Message::IncidentDetailFailed => {
            vec![Command::update_ui(incident_panel::show_detail_error)]
        }

        Message::OpenStatusModal { incident_id, mode } => {
            state.status_modal = Some((incident_id, mode));
            let current_state = state
                .incidents
                .iter()
                .find(|i| i.id == incident_id)
                .map(|i| i.state)
                .unwrap_or(1);
            vec![Command::update_ui(move || {
                let Some(document) = dom_utils::document() else {
                    return;
                };
                match mode {
                    StatusUpdateMode::SetState => {
                        dom_utils::set_text(&document, STATUS_MODAL_TITLE_ID, "Update Incident Status");
                        if let Some(row) = dom_utils::by_id(&document, STATUS_SELECT_ROW_ID) {
                            dom_utils::show(&row);
                        }
                        dom_utils::set_select_value(
                            &document,
                            STATUS_SELECT_ID,
                            &current_state.to_string(),
                        );
                    }
                    StatusUpdateMode::AddComments => {
                        dom_utils::set_text(&document, STATUS_MODAL_TITLE_ID, "Add Comments");
                        if let Some(row) = dom_utils::by_id(&document, STATUS_SELECT_ROW_ID) {
                            dom_utils::hide(&row);
                        }
                    }
                }
                modal::open(&document, STATUS_UPDATE_MODAL_ID);
            })]
        }

        Message::CloseStatusModal => {
            state.status_modal = None;
            vec![Command::update_ui(|| {
                let Some(document) = dom_utils::document() else {
                    return;
                };
                dom_utils::set_textarea_value(&document, STATUS_COMMENTS_ID, "");
                modal::close(&document, STATUS_UPDATE_MODAL_ID);
            })]
        }

        Message::SubmitStatusUpdate {
            comments,
            selected_state,
        } => {
            let Some((incident_id, mode)) = state.status_modal else {
                return Vec::new();
            };
            let current_state = state
                .incidents
                .iter()
                .find(|i| i.id == incident_id)
                .map(|i| i.state);
            let target_state = match mode {
                StatusUpdateMode::SetState => selected_state.or(current_state).unwrap_or(1),
                // Comments keep the incident in its current state.
                StatusUpdateMode::AddComments => current_state.unwrap_or(1),
            };
            let trimmed = comments.trim();
            let comments = (!trimmed.is_empty()).then(|| trimmed.to_string());
            vec![
                Command::UpdateIncident {
                    id: incident_id,
                    state: target_state,
                    comments,
                    status_change: mode == StatusUpdateMode::SetState,
                },
                Command::send(Message::CloseStatusModal),
            ]
        }

        Message::IncidentUpdated {
            incident,
            status_change,
        } => {
            // Patch the stored row and re-render from state; no refetch.
            if let Some(row) = state.incidents.iter_mut().find(|i| i.id == incident.id) {
                *row = (*incident).clone();
            }
            sort_incidents_by_priority(&mut state.incidents);
            let incidents = state.incidents.clone();
            let selected = state.selected_incident_id();
            let summary = summarize_priorities(&incidents);
            vec![Command::update_ui(move || {
                incident_panel::refresh_list(&incidents, selected);
                incident_panel::refresh_summary(&summary);
                incident_panel::refresh_detail(&incident);
                incident_panel::show_update_result(true);
                toast::success(if status_change {
                    "Incident status updated"
                } else {
                    "Comments added"
                });
            })]
        }

        Message::IncidentUpdateFailed { status_change } => {
            vec![Command::update_ui(move || {
                incident_panel::show_update_result(false);
                toast::error(if status_change {
                    "Failed to update incident status"
                } else {
                    "Failed to add comments"
                });
            })]
        }

        // ------------------------------------------------------------------
        // Automations
        // ------------------------------------------------------------------
        Message::LoadAutomations => vec![Command::FetchAutomations],

        Message::AutomationsLoaded(automations) => {
            state.automations = automations.clone();
            vec![Command::update_ui(move || {
                automation_panel::refresh(&automations);
            })]
        }

        Message::AutomationsLoadFailed => vec![Command::update_ui(automation_panel::show_error)],

        Message::TriggerAutomation(id) => vec![
            Command::update_ui(move || automation_panel::set_running(id)),
            Command::TriggerAutomation(id),
        ],

        Message::AutomationTriggered(report) => {
            let level = report.audit_level().to_string();
            let message = report.automation_audit_message();
            vec![
                Command::update_ui(move || {
                    automation_panel::reset_buttons();
                    execution_log_modal::open_for_automation(&report);
                }),
                Command::send(Message::AppendAuditLog {
                    level,
                    source: AUTOMATION_LOG_SOURCE.to_string(),
                    message,
                }),
            ]
        }

        Message::AutomationTriggerFailed(error) => vec![
            Command::update_ui(|| {
                automation_panel::reset_buttons();
                toast::error("Automation trigger failed");
            }),
            Command::send(Message::AppendAuditLog {
                level: "error".to_string(),
                source: AUTOMATION_LOG_SOURCE.to_string(),
                message: format!("Automation execution failed: {}", error),
            }),
        ],

        // ------------------------------------------------------------------
        // Dashboards
        // ------------------------------------------------------------------
        Message::LoadDashboards => vec![Command::FetchDashboards],

        Message::DashboardsLoaded(dashboards) => {
            state.dashboards = dashboards.clone();
            vec![Command::update_ui(move || {
                dashboard_panel::refresh(&dashboards);
            })]
        }

        Message::DashboardsLoadFailed => vec![Command::update_ui(dashboard_panel::show_error)],

        // ------------------------------------------------------------------
        // Knowledge base
        // ------------------------------------------------------------------
        Message::LoadKnowledgeBase => vec![Command::FetchKnowledgeBase],

        Message::KnowledgeBaseLoaded(entries) => {
            state.knowledge_base = entries.clone();
            vec![Command::update_ui(move || {
                knowledge_base::refresh(&entries);
            })]
        }

        Message::KnowledgeBaseLoadFailed => vec![Command::update_ui(knowledge_base::show_error)],

        Message::OpenKbCreateModal => {
            state.kb_modal_entry = None;
            vec![Command::update_ui(|| knowledge_base::open_editor(None))]
        }

        Message::OpenKbEditModal(id) => vec![Command::FetchKbEntry { id, for_edit: true }],

        Message::ViewKbEntry(id) => vec![Command::FetchKbEntry {
            id,
            for_edit: false,
        }],

        Message::KbEntryLoaded { entry, for_edit } => {
            if for_edit {
                state.kb_modal_entry = Some(entry.id);
                vec![Command::update_ui(move || {
                    knowledge_base::open_editor(Some(&*entry));
                })]
            } else {
                vec![Command::update_ui(move || {
                    knowledge_base::open_viewer(&entry);
                })]
            }
        }

        Message::SaveKbEntry {
            title,
            category,
            content,
        } => {
            let title = title.trim().to_string();
            let content = content.trim().to_string();
            if title.is_empty() || content.is_empty() {
                return vec![Command::update_ui(|| {
                    toast::error("Title and content are required");
                })];
            }
            vec![Command::SaveKbEntry {
                id: state.kb_modal_entry,
                title,
                category: category.trim().to_string(),
                content,
            }]
        }

        Message::KbEntrySaved { was_edit } => {
            state.kb_modal_entry = None;
            vec![
                Command::send(Message::LoadKnowledgeBase),
                Command::update_ui(move || {
                    if let Some(document) = dom_utils::document() {
                        knowledge_base::close_editor(&document);
                    }
                    toast::success(if was_edit {
                        "Knowledge base entry updated"
                    } else {
                        "Knowledge base entry created"
                    });
                }),
            ]
        }

        Message::DeleteKbEntry(id) => vec![Command::DeleteKbEntry(id)],

        Message::KbEntryDeleted => vec![
            Command::send(Message::LoadKnowledgeBase),
            Command::update_ui(|| toast::success("Knowledge base entry deleted")),
        ],

        // ------------------------------------------------------------------
        // Logs
        // ------------------------------------------------------------------
        Message::LoadLogs => vec![Command::FetchLogs],

        Message::LogsLoaded(logs) => {
            state.logs = logs.clone();
            vec![Command::update_ui(move || log_panel::refresh(&logs))]
        }

        Message::LogsLoadFailed => vec![Command::update_ui(log_panel::show_error)],

        Message::AppendAuditLog {
            level,
            source,
            message,
        } => vec![Command::CreateLogEntry {
            level,
            source,
            message,
        }],
    }
}
