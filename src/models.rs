use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Conversation row as returned by the list endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct ConversationSummary {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Full conversation with its message history.
#[derive(Clone, Debug, Deserialize)]
pub struct Conversation {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String, // "user", "assistant" or "system"
    pub content: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Document {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub file_type: String,
}

// ---------------------------------------------------------------------------
// Incidents
// ---------------------------------------------------------------------------

/// Incident priority. The backend sends either the numeric code (1-5) or the
/// display label; anything else collapses to `Unknown`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawPriority")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
    VeryLow,
    #[default]
    Unknown,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPriority {
    Code(i64),
    Label(String),
}

impl From<RawPriority> for Priority {
    fn from(raw: RawPriority) -> Self {
        match raw {
            RawPriority::Code(1) => Priority::Critical,
            RawPriority::Code(2) => Priority::High,
            RawPriority::Code(3) => Priority::Medium,
            RawPriority::Code(4) => Priority::Low,
            RawPriority::Code(5) => Priority::VeryLow,
            RawPriority::Code(_) => Priority::Unknown,
            RawPriority::Label(s) => match s.as_str() {
                "Critical" => Priority::Critical,
                "High" => Priority::High,
                "Medium" => Priority::Medium,
                "Low" => Priority::Low,
                "Very Low" => Priority::VeryLow,
                _ => Priority::Unknown,
            },
        }
    }
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::Critical => "Critical",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
            Priority::VeryLow => "Very Low",
            Priority::Unknown => "Unknown",
        }
    }

    /// Sort rank: Critical=1 .. Very Low=5, unrecognized priorities last.
    pub fn rank(self) -> u8 {
        match self {
            Priority::Critical => 1,
            Priority::High => 2,
            Priority::Medium => 3,
            Priority::Low => 4,
            Priority::VeryLow => 5,
            Priority::Unknown => 6,
        }
    }
}

/// State codes 1-5; the server may also send a ready-made `state_display`.
pub fn state_name(state: i64) -> &'static str {
    match state {
        1 => "New",
        2 => "In Progress",
        3 => "On Hold",
        4 => "Resolved",
        5 => "Closed/Canceled",
        _ => "Unknown",
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Incident {
    pub id: u32,
    pub incident_number: String,
    pub short_description: String,
    #[serde(default)]
    pub long_description: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub state: i64,
    #[serde(default)]
    pub state_display: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub recommended_automations: Vec<Automation>,
    #[serde(default)]
    pub recommended_dashboards: Vec<Dashboard>,
}

impl Incident {
    pub fn state_label(&self) -> String {
        match &self.state_display {
            Some(display) if !display.is_empty() => display.clone(),
            _ => state_name(self.state).to_string(),
        }
    }
}

/// Stable ascending sort by priority rank; input order breaks ties.
pub fn sort_incidents_by_priority(incidents: &mut [Incident]) {
    incidents.sort_by_key(|inc| inc.priority.rank());
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PrioritySummary {
    pub high: usize,   // Critical + High
    pub medium: usize, // Medium
    pub low: usize,    // Low + Very Low
    pub total: usize,
}

pub fn summarize_priorities(incidents: &[Incident]) -> PrioritySummary {
    let mut summary = PrioritySummary {
        total: incidents.len(),
        ..Default::default()
    };
    for inc in incidents {
        match inc.priority.rank() {
            1 | 2 => summary.high += 1,
            3 => summary.medium += 1,
            4 | 5 => summary.low += 1,
            _ => {}
        }
    }
    summary
}

// ---------------------------------------------------------------------------
// Automations, dashboards, knowledge base, logs
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Deserialize)]
pub struct Automation {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Dashboard {
    pub name: String,
    pub link: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct KnowledgeBaseEntry {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    pub content: String,
}

impl KnowledgeBaseEntry {
    pub fn category_label(&self) -> &str {
        match self.category.as_deref() {
            Some(c) if !c.is_empty() => c,
            _ => "Uncategorized",
        }
    }
}

/// Group entries by category, categories sorted alphabetically. Entry order
/// within a category follows the input.
pub fn group_by_category(
    entries: &[KnowledgeBaseEntry],
) -> Vec<(String, Vec<&KnowledgeBaseEntry>)> {
    let mut grouped: std::collections::BTreeMap<String, Vec<&KnowledgeBaseEntry>> =
        std::collections::BTreeMap::new();
    for entry in entries {
        grouped
            .entry(entry.category_label().to_string())
            .or_default()
            .push(entry);
    }
    grouped.into_iter().collect()
}

#[derive(Clone, Debug, Deserialize)]
pub struct LogEntry {
    pub level: String,
    pub source: String,
    pub message: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

// ---------------------------------------------------------------------------
// Side-channel execution results
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Default, Deserialize)]
pub struct AutomationInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct DatasourceInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub endpoint: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ExecutionLogLine {
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Outcome of an automation run or datasource query, embedded either in a
/// message-send response or returned directly by the trigger endpoint.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ExecutionReport {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub logs: Vec<ExecutionLogLine>,
    #[serde(default)]
    pub automation: Option<AutomationInfo>,
    #[serde(default)]
    pub datasource: Option<DatasourceInfo>,
    #[serde(default)]
    pub raw_response: Option<Value>,
}

impl ExecutionReport {
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }

    pub fn status_text(&self) -> &str {
        self.status.as_deref().unwrap_or("unknown")
    }

    pub fn message_text(&self) -> &str {
        self.message
            .as_deref()
            .unwrap_or("No detailed information available")
    }

    pub fn audit_level(&self) -> &'static str {
        if self.is_success() {
            "info"
        } else {
            "error"
        }
    }

    pub fn automation_audit_message(&self) -> String {
        let name = self
            .automation
            .as_ref()
            .and_then(|a| a.name.as_deref())
            .unwrap_or("Unknown");
        format!(
            "Automation '{}' executed: {}",
            name,
            self.message.as_deref().unwrap_or("No details")
        )
    }

    pub fn datasource_audit_message(&self) -> String {
        let name = self
            .datasource
            .as_ref()
            .and_then(|d| d.name.as_deref())
            .unwrap_or("Unknown");
        format!(
            "Data source '{}' queried: {}",
            name,
            self.message.as_deref().unwrap_or("No details")
        )
    }
}

/// Message-send responses are polymorphic: a side-channel datasource or
/// automation result, or a plain conversation update.
#[derive(Debug)]
pub enum SendOutcome {
    Plain,
    Datasource {
        report: Box<ExecutionReport>,
        messages: Option<Vec<ChatMessage>>,
    },
    Automation {
        report: Box<ExecutionReport>,
        messages: Option<Vec<ChatMessage>>,
    },
}

/// Decide which branch of a send response applies. Exactly one branch is
/// taken per response: `datasource_logs` wins over `automation_logs`, and a
/// response carrying neither is a plain conversation update.
pub fn classify_send_response(raw: &Value) -> SendOutcome {
    let embedded_messages = |raw: &Value| -> Option<Vec<ChatMessage>> {
        raw.get("messages")
            .and_then(|m| serde_json::from_value(m.clone()).ok())
    };

    if let Some(logs) = raw.get("datasource_logs") {
        let report = serde_json::from_value(logs.clone()).unwrap_or_default();
        return SendOutcome::Datasource {
            report: Box::new(report),
            messages: embedded_messages(raw),
        };
    }
    if let Some(logs) = raw.get("automation_logs") {
        let report = serde_json::from_value(logs.clone()).unwrap_or_default();
        return SendOutcome::Automation {
            report: Box::new(report),
            messages: embedded_messages(raw),
        };
    }
    SendOutcome::Plain
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn incident(id: u32, priority: Value) -> Incident {
        serde_json::from_value(json!({
            "id": id,
            "incident_number": format!("INC{:07}", id),
            "short_description": "test",
            "priority": priority,
            "state": 1
        }))
        .unwrap()
    }

    #[test]
    fn priority_codes_map_to_labels() {
        assert_eq!(incident(1, json!(1)).priority.label(), "Critical");
        assert_eq!(incident(2, json!(2)).priority.label(), "High");
        assert_eq!(incident(3, json!(3)).priority.label(), "Medium");
        assert_eq!(incident(4, json!(4)).priority.label(), "Low");
        assert_eq!(incident(5, json!(5)).priority.label(), "Very Low");
        assert_eq!(incident(6, json!(99)).priority.label(), "Unknown");
    }

    #[test]
    fn priority_accepts_string_labels() {
        assert_eq!(incident(1, json!("Critical")).priority, Priority::Critical);
        assert_eq!(incident(2, json!("Very Low")).priority, Priority::VeryLow);
        assert_eq!(incident(3, json!("bogus")).priority, Priority::Unknown);
    }

    #[test]
    fn missing_priority_defaults_to_unknown() {
        let inc: Incident = serde_json::from_value(json!({
            "id": 9,
            "incident_number": "INC0000009",
            "short_description": "no priority"
        }))
        .unwrap();
        assert_eq!(inc.priority, Priority::Unknown);
        assert_eq!(inc.priority.rank(), 6);
    }

    #[test]
    fn sort_is_stable_with_unrecognized_last() {
        let mut incidents = vec![
            incident(1, json!(3)),
            incident(2, json!("nonsense")),
            incident(3, json!(1)),
            incident(4, json!(3)),
            incident(5, json!(2)),
        ];
        sort_incidents_by_priority(&mut incidents);
        let ids: Vec<u32> = incidents.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 5, 1, 4, 2]);
        for pair in incidents.windows(2) {
            assert!(pair[0].priority.rank() <= pair[1].priority.rank());
        }
    }

    #[test]
    fn summary_buckets() {
        // Priorities [3, 1]: one Medium, one Critical.
        let incidents = vec![incident(1, json!(3)), incident(2, json!(1))];
        let summary = summarize_priorities(&incidents);
        assert_eq!(summary.high, 1);
        assert_eq!(summary.medium, 1);
        assert_eq!(summary.low, 0);
        assert_eq!(summary.total, 2);

        let incidents = vec![
            incident(1, json!(2)),
            incident(2, json!(4)),
            incident(3, json!(5)),
            incident(4, json!("bogus")),
        ];
        let summary = summarize_priorities(&incidents);
        assert_eq!(summary.high, 1);
        assert_eq!(summary.medium, 0);
        assert_eq!(summary.low, 2);
        // Unknown priorities count toward the total only.
        assert_eq!(summary.total, 4);
    }

    #[test]
    fn state_labels() {
        assert_eq!(state_name(1), "New");
        assert_eq!(state_name(5), "Closed/Canceled");
        assert_eq!(state_name(42), "Unknown");

        let mut inc = incident(1, json!(1));
        inc.state = 2;
        assert_eq!(inc.state_label(), "In Progress");
        inc.state_display = Some("Pending Review".into());
        assert_eq!(inc.state_label(), "Pending Review");
    }

    #[test]
    fn classifier_prefers_datasource_branch() {
        let raw = json!({
            "datasource_logs": {"status": "success", "datasource": {"name": "CMDB"}},
            "automation_logs": {"status": "success"},
            "messages": [{"role": "assistant", "content": "done"}]
        });
        match classify_send_response(&raw) {
            SendOutcome::Datasource { report, messages } => {
                assert!(report.is_success());
                assert_eq!(messages.unwrap().len(), 1);
            }
            other => panic!("expected datasource branch, got {:?}", other),
        }
    }

    #[test]
    fn classifier_automation_branch_without_messages() {
        let raw = json!({
            "automation_logs": {"status": "failed", "message": "timeout"}
        });
        match classify_send_response(&raw) {
            SendOutcome::Automation { report, messages } => {
                assert!(!report.is_success());
                assert_eq!(report.audit_level(), "error");
                assert!(messages.is_none());
            }
            other => panic!("expected automation branch, got {:?}", other),
        }
    }

    #[test]
    fn classifier_plain_fallback() {
        let raw = json!({"role": "assistant", "content": "hi"});
        assert!(matches!(classify_send_response(&raw), SendOutcome::Plain));
    }

    #[test]
    fn audit_messages_name_the_subject() {
        let report: ExecutionReport = serde_json::from_value(json!({
            "status": "success",
            "message": "restarted node",
            "automation": {"name": "Restart Pod"}
        }))
        .unwrap();
        assert_eq!(
            report.automation_audit_message(),
            "Automation 'Restart Pod' executed: restarted node"
        );

        let report = ExecutionReport::default();
        assert_eq!(
            report.datasource_audit_message(),
            "Data source 'Unknown' queried: No details"
        );
    }

    #[test]
    fn kb_grouping_sorts_categories() {
        let entries: Vec<KnowledgeBaseEntry> = serde_json::from_value(json!([
            {"id": 1, "title": "b", "category": "Networking", "content": "x"},
            {"id": 2, "title": "a", "content": "y"},
            {"id": 3, "title": "c", "category": "Access", "content": "z"},
            {"id": 4, "title": "d", "category": "Networking", "content": "w"}
        ]))
        .unwrap();
        let grouped = group_by_category(&entries);
        let categories: Vec<&str> = grouped.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(categories, vec!["Access", "Networking", "Uncategorized"]);
        assert_eq!(grouped[1].1.iter().map(|e| e.id).collect::<Vec<_>>(), [1, 4]);
    }
}
