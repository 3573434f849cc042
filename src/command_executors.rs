//! Command execution: each network command spawns a future that calls the
//! API client, decodes the body and dispatches a result message back through
//! the reducer.

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlFormElement;

use crate::components::{chat_thread, execution_log_modal};
use crate::constants::{AUTOMATION_LOG_SOURCE, DATASOURCE_LOG_SOURCE};
use crate::messages::{Command, Message};
use crate::models::{self, SendOutcome};
use crate::network::ApiClient;
use crate::state::dispatch_global_message;

pub fn execute_commands(commands: Vec<Command>) {
    for command in commands {
        execute_command(command);
    }
}

fn js_error_string(error: &JsValue) -> String {
    error.as_string().unwrap_or_else(|| format!("{:?}", error))
}

fn log_error(context: &str, error: &JsValue) {
    web_sys::console::error_1(&format!("{}: {}", context, js_error_string(error)).into());
}

/// Fetch-decode-dispatch for the plain list/detail loads. `on_ok` receives
/// the decoded value; decode and transport failures both fall back to
/// `on_err`.
macro_rules! fetch_and_dispatch {
    ($future:expr, $ty:ty, $context:literal, $on_ok:expr, $on_err:expr) => {
        spawn_local(async move {
            match $future.await {
                Ok(body) => match serde_json::from_str::<$ty>(&body) {
                    Ok(decoded) => dispatch_global_message($on_ok(decoded)),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("{}: decode failed: {}", $context, e).into(),
                        );
                        dispatch_global_message($on_err);
                    }
                },
                Err(e) => {
                    log_error($context, &e);
                    dispatch_global_message($on_err);
                }
            }
        });
    };
}

fn execute_command(command: Command) {
    match command {
        Command::SendMessage(msg) => dispatch_global_message(msg),
        Command::UpdateUI(f) => f(),

        // ------------------------------------------------------------------
        // Conversations
        // ------------------------------------------------------------------
        Command::FetchConversations => {
            fetch_and_dispatch!(
                ApiClient::get_conversations(),
                Vec<models::ConversationSummary>,
                "load conversations",
                Message::ConversationsLoaded,
                Message::ConversationsLoadFailed
            );
        }

        Command::FetchConversationDetail(id) => {
            fetch_and_dispatch!(
                ApiClient::get_conversation(id),
                models::Conversation,
                "load conversation",
                |conv| Message::ConversationDetailLoaded(Box::new(conv)),
                Message::ConversationDetailFailed
            );
        }

        Command::CreateConversation => {
            spawn_local(async move {
                match ApiClient::create_conversation(crate::constants::DEFAULT_CONVERSATION_TITLE)
                    .await
                {
                    Ok(body) => match serde_json::from_str::<models::Conversation>(&body) {
                        Ok(conv) => {
                            dispatch_global_message(Message::ConversationCreated(Box::new(conv)))
                        }
                        Err(e) => web_sys::console::error_1(
                            &format!("create conversation: decode failed: {}", e).into(),
                        ),
                    },
                    Err(e) => {
                        log_error("create conversation", &e);
                        crate::toast::error("Failed to create conversation");
                    }
                }
            });
        }

        Command::RenameConversation { id, title } => {
            spawn_local(async move {
                match ApiClient::rename_conversation(id, &title).await {
                    Ok(body) => match serde_json::from_str::<models::Conversation>(&body) {
                        Ok(conv) => {
                            dispatch_global_message(Message::ConversationRenamed(Box::new(conv)))
                        }
                        Err(e) => web_sys::console::error_1(
                            &format!("rename conversation: decode failed: {}", e).into(),
                        ),
                    },
                    Err(e) => {
                        log_error("rename conversation", &e);
                        crate::toast::error("Failed to rename conversation");
                    }
                }
            });
        }

        Command::DeleteConversation(id) => {
            spawn_local(async move {
                match ApiClient::delete_conversation(id).await {
                    Ok(()) => dispatch_global_message(Message::ConversationDeleted),
                    Err(e) => {
                        log_error("delete conversation", &e);
                        crate::toast::error("Failed to delete conversation");
                    }
                }
            });
        }

        Command::ClearConversations => {
            spawn_local(async move {
                match ApiClient::clear_conversations().await {
                    Ok(body) => {
                        let message = serde_json::from_str::<serde_json::Value>(&body)
                            .ok()
                            .and_then(|v| {
                                v.get("message").and_then(|m| m.as_str()).map(String::from)
                            });
                        dispatch_global_message(Message::ConversationsCleared(message));
                    }
                    Err(e) => {
                        log_error("clear conversations", &e);
                        crate::toast::error("Failed to clear conversations");
                    }
                }
            });
        }

        Command::SendChatMessage {
            conversation_id,
            content,
        } => {
            spawn_local(async move {
                submit_chat_message(conversation_id, &content).await;
            });
        }

        // ------------------------------------------------------------------
        // Documents
        // ------------------------------------------------------------------
        Command::FetchDocuments => {
            fetch_and_dispatch!(
                ApiClient::get_documents(),
                Vec<models::Document>,
                "load documents",
                Message::DocumentsLoaded,
                Message::DocumentsLoadFailed
            );
        }

        Command::DeleteDocument(id) => {
            spawn_local(async move {
                match ApiClient::delete_document(id).await {
                    Ok(()) => dispatch_global_message(Message::DocumentDeleted),
                    Err(e) => {
                        log_error("delete document", &e);
                        crate::toast::error("Failed to delete document");
                    }
                }
            });
        }

        Command::ClearDocuments => {
            spawn_local(async move {
                match ApiClient::clear_documents().await {
                    Ok(body) => {
                        let message = serde_json::from_str::<serde_json::Value>(&body)
                            .ok()
                            .and_then(|v| {
                                v.get("message").and_then(|m| m.as_str()).map(String::from)
                            });
                        dispatch_global_message(Message::DocumentsCleared(message));
                    }
                    Err(e) => {
                        log_error("clear documents", &e);
                        crate::toast::error("Failed to clear documents");
                    }
                }
            });
        }

        // ------------------------------------------------------------------
        // Incidents
        // ------------------------------------------------------------------
        Command::FetchIncidents => {
            fetch_and_dispatch!(
                ApiClient::get_incidents(),
                Vec<models::Incident>,
                "load incidents",
                Message::IncidentsLoaded,
                Message::IncidentsLoadFailed
            );
        }

        Command::FetchIncidentDetail(id) => {
            fetch_and_dispatch!(
                ApiClient::get_incident(id),
                models::Incident,
                "load incident",
                |inc| Message::IncidentDetailLoaded(Box::new(inc)),
                Message::IncidentDetailFailed
            );
        }

        Command::UpdateIncident {
            id,
            state,
            comments,
            status_change,
        } => {
            spawn_local(async move {
                match ApiClient::update_incident(id, state, comments.as_deref()).await {
                    Ok(body) => match serde_json::from_str::<models::Incident>(&body) {
                        Ok(incident) => dispatch_global_message(Message::IncidentUpdated {
                            incident: Box::new(incident),
                            status_change,
                        }),
                        Err(e) => {
                            web_sys::console::error_1(
                                &format!("update incident: decode failed: {}", e).into(),
                            );
                            dispatch_global_message(Message::IncidentUpdateFailed {
                                status_change,
                            });
                        }
                    },
                    Err(e) => {
                        log_error("update incident", &e);
                        dispatch_global_message(Message::IncidentUpdateFailed { status_change });
                    }
                }
            });
        }

        // ------------------------------------------------------------------
        // Automations and dashboards
        // ------------------------------------------------------------------
        Command::FetchAutomations => {
            fetch_and_dispatch!(
                ApiClient::get_automations(),
                Vec<models::Automation>,
                "load automations",
                Message::AutomationsLoaded,
                Message::AutomationsLoadFailed
            );
        }

        Command::TriggerAutomation(id) => {
            spawn_local(async move {
                match ApiClient::trigger_automation(id).await {
                    Ok(body) => {
                        let report = serde_json::from_str::<models::ExecutionReport>(&body)
                            .unwrap_or_default();
                        dispatch_global_message(Message::AutomationTriggered(Box::new(report)));
                    }
                    Err(e) => {
                        log_error("trigger automation", &e);
                        dispatch_global_message(Message::AutomationTriggerFailed(
                            js_error_string(&e),
                        ));
                    }
                }
            });
        }

        Command::FetchDashboards => {
            fetch_and_dispatch!(
                ApiClient::get_dashboards(),
                Vec<models::Dashboard>,
                "load dashboards",
                Message::DashboardsLoaded,
                Message::DashboardsLoadFailed
            );
        }

        // ------------------------------------------------------------------
        // Knowledge base
        // ------------------------------------------------------------------
        Command::FetchKnowledgeBase => {
            fetch_and_dispatch!(
                ApiClient::get_knowledge_base(),
                Vec<models::KnowledgeBaseEntry>,
                "load knowledge base",
                Message::KnowledgeBaseLoaded,
                Message::KnowledgeBaseLoadFailed
            );
        }

        Command::FetchKbEntry { id, for_edit } => {
            spawn_local(async move {
                match ApiClient::get_knowledge_base_entry(id).await {
                    Ok(body) => {
                        match serde_json::from_str::<models::KnowledgeBaseEntry>(&body) {
                            Ok(entry) => dispatch_global_message(Message::KbEntryLoaded {
                                entry: Box::new(entry),
                                for_edit,
                            }),
                            Err(e) => web_sys::console::error_1(
                                &format!("load kb entry: decode failed: {}", e).into(),
                            ),
                        }
                    }
                    Err(e) => {
                        log_error("load kb entry", &e);
                        crate::toast::error("Failed to load knowledge base entry");
                    }
                }
            });
        }

        Command::SaveKbEntry {
            id,
            title,
            category,
            content,
        } => {
            spawn_local(async move {
                let was_edit = id.is_some();
                match ApiClient::save_knowledge_base_entry(id, &title, &category, &content).await
                {
                    Ok(_) => dispatch_global_message(Message::KbEntrySaved { was_edit }),
                    Err(e) => {
                        log_error("save kb entry", &e);
                        crate::toast::error("Failed to save knowledge base entry");
                    }
                }
            });
        }

        Command::DeleteKbEntry(id) => {
            spawn_local(async move {
                match ApiClient::delete_knowledge_base_entry(id).await {
                    Ok(()) => dispatch_global_message(Message::KbEntryDeleted),
                    Err(e) => {
                        log_error("delete kb entry", &e);
                        crate::toast::error("Failed to delete knowledge base entry");
                    }
                }
            });
        }

        // ------------------------------------------------------------------
        // Logs
        // ------------------------------------------------------------------
        Command::FetchLogs => {
            fetch_and_dispatch!(
                ApiClient::get_logs(),
                Vec<models::LogEntry>,
                "load logs",
                Message::LogsLoaded,
                Message::LogsLoadFailed
            );
        }

        Command::CreateLogEntry {
            level,
            source,
            message,
        } => {
            spawn_local(async move {
                match ApiClient::create_log_entry(&level, &source, &message).await {
                    Ok(_) => dispatch_global_message(Message::LoadLogs),
                    // Audit logging is best effort; the triggering action
                    // already succeeded or failed on its own.
                    Err(e) => log_error("create log entry", &e),
                }
            });
        }
    }
}

/// The full submit flow, run after the reducer has already echoed the user
/// bubble and the pending indicator. The response decides the branch:
/// datasource logs win over automation logs, anything else is a plain
/// conversation update.
async fn submit_chat_message(conversation_id: u32, content: &str) {
    match ApiClient::send_message(conversation_id, content).await {
        Ok(body) => {
            chat_thread::clear_pending_indicator();
            let raw: serde_json::Value = serde_json::from_str(&body).unwrap_or_default();
            match models::classify_send_response(&raw) {
                SendOutcome::Plain => {
                    execute_command(Command::FetchConversationDetail(conversation_id));
                }
                SendOutcome::Datasource { report, messages } => {
                    show_embedded_or_refetch(conversation_id, messages);
                    execution_log_modal::open_for_datasource(&report);
                    dispatch_global_message(Message::AppendAuditLog {
                        level: report.audit_level().to_string(),
                        source: DATASOURCE_LOG_SOURCE.to_string(),
                        message: report.datasource_audit_message(),
                    });
                }
                SendOutcome::Automation { report, messages } => {
                    show_embedded_or_refetch(conversation_id, messages);
                    execution_log_modal::open_for_automation(&report);
                    dispatch_global_message(Message::AppendAuditLog {
                        level: report.audit_level().to_string(),
                        source: AUTOMATION_LOG_SOURCE.to_string(),
                        message: report.automation_audit_message(),
                    });
                }
            }
        }
        Err(e) => {
            log_error("send message", &e);
            // The user bubble stays; the failure is reported inline.
            chat_thread::clear_pending_indicator();
            chat_thread::append_system_error(
                "Sorry, something went wrong while processing your message. Please try again.",
            );
        }
    }
}

/// How the thread panel is brought up to date after a side-channel outcome.
/// A payload embedding the refreshed messages renders them directly and
/// suppresses the conversation refetch.
#[derive(Debug)]
enum ThreadUpdate {
    ShowEmbedded(Vec<models::ChatMessage>),
    Refetch,
}

fn thread_update_for(messages: Option<Vec<models::ChatMessage>>) -> ThreadUpdate {
    match messages {
        Some(messages) if !messages.is_empty() => ThreadUpdate::ShowEmbedded(messages),
        _ => ThreadUpdate::Refetch,
    }
}

fn show_embedded_or_refetch(conversation_id: u32, messages: Option<Vec<models::ChatMessage>>) {
    match thread_update_for(messages) {
        ThreadUpdate::ShowEmbedded(messages) => chat_thread::replace_messages(&messages),
        ThreadUpdate::Refetch => {
            execute_command(Command::FetchConversationDetail(conversation_id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{classify_send_response, SendOutcome};
    use serde_json::json;

    #[test]
    fn embedded_messages_suppress_refetch() {
        let raw = json!({
            "datasource_logs": {"status": "success"},
            "messages": [{"role": "assistant", "content": "3 rows found"}]
        });
        let SendOutcome::Datasource { messages, .. } = classify_send_response(&raw) else {
            panic!("expected datasource outcome");
        };
        match thread_update_for(messages) {
            ThreadUpdate::ShowEmbedded(messages) => {
                assert_eq!(messages.len(), 1);
                assert_eq!(messages[0].content, "3 rows found");
            }
            ThreadUpdate::Refetch => panic!("embedded messages must render without a refetch"),
        }
    }

    #[test]
    fn missing_messages_fall_back_to_refetch() {
        let raw = json!({"automation_logs": {"status": "failed"}});
        let SendOutcome::Automation { messages, .. } = classify_send_response(&raw) else {
            panic!("expected automation outcome");
        };
        assert!(messages.is_none());
        assert!(matches!(thread_update_for(messages), ThreadUpdate::Refetch));
        // An empty embedded list carries nothing to render either.
        assert!(matches!(
            thread_update_for(Some(Vec::new())),
            ThreadUpdate::Refetch
        ));
    }
}

/// Multipart upload wired straight from the form's submit event.
pub fn upload_document(form: &HtmlFormElement) {
    let form_data = match web_sys::FormData::new_with_form(form) {
        Ok(data) => data,
        Err(e) => {
            log_error("upload document", &e);
            return;
        }
    };
    crate::components::document_panel::set_upload_status("Uploading...");
    spawn_local(async move {
        match ApiClient::upload_document(&form_data).await {
            Ok(_) => dispatch_global_message(Message::DocumentUploaded),
            Err(e) => {
                log_error("upload document", &e);
                crate::components::document_panel::set_upload_status("Upload failed");
            }
        }
    });
}
