use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Headers, Request, RequestInit, RequestMode, Response};

use super::{api_url, csrf_token};

/// REST client for the support-desk backend. Every method returns the raw
/// response body; callers decode JSON themselves.
pub struct ApiClient;

impl ApiClient {
    // ---------------- Conversations ----------------

    pub async fn get_conversations() -> Result<String, JsValue> {
        Self::fetch_json(&api_url("conversations/"), "GET", None).await
    }

    pub async fn get_conversation(id: u32) -> Result<String, JsValue> {
        Self::fetch_json(&api_url(&format!("conversations/{}/", id)), "GET", None).await
    }

    pub async fn create_conversation(title: &str) -> Result<String, JsValue> {
        let body = serde_json::json!({ "title": title }).to_string();
        Self::fetch_json(&api_url("conversations/"), "POST", Some(&body)).await
    }

    pub async fn rename_conversation(id: u32, title: &str) -> Result<String, JsValue> {
        let body = serde_json::json!({ "title": title }).to_string();
        Self::fetch_json(
            &api_url(&format!("conversations/{}/", id)),
            "PATCH",
            Some(&body),
        )
        .await
    }

    pub async fn delete_conversation(id: u32) -> Result<(), JsValue> {
        let _ = Self::fetch_json(&api_url(&format!("conversations/{}/", id)), "DELETE", None)
            .await?;
        Ok(())
    }

    pub async fn clear_conversations() -> Result<String, JsValue> {
        Self::fetch_json(&api_url("conversations/clear/"), "DELETE", None).await
    }

    /// Post a user message. The response is polymorphic - see
    /// `models::classify_send_response`.
    pub async fn send_message(conversation_id: u32, content: &str) -> Result<String, JsValue> {
        let body = serde_json::json!({ "role": "user", "content": content }).to_string();
        Self::fetch_json(
            &api_url(&format!("conversations/{}/messages/", conversation_id)),
            "POST",
            Some(&body),
        )
        .await
    }

    // ---------------- Documents ----------------

    pub async fn get_documents() -> Result<String, JsValue> {
        Self::fetch_json(&api_url("documents/"), "GET", None).await
    }

    pub async fn upload_document(form: &FormData) -> Result<String, JsValue> {
        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::SameOrigin);
        // No Content-Type header: the browser sets the multipart boundary.
        let headers = Headers::new()?;
        headers.append("X-CSRFToken", &csrf_token())?;
        opts.set_headers(&headers);
        opts.set_body(form);

        let request = Request::new_with_str_and_init(&api_url("documents/upload/"), &opts)?;
        Self::dispatch(request).await
    }

    pub async fn delete_document(id: u32) -> Result<(), JsValue> {
        let _ =
            Self::fetch_json(&api_url(&format!("documents/{}/", id)), "DELETE", None).await?;
        Ok(())
    }

    pub async fn clear_documents() -> Result<String, JsValue> {
        Self::fetch_json(&api_url("documents/clear/"), "DELETE", None).await
    }

    // ---------------- Incidents ----------------

    pub async fn get_incidents() -> Result<String, JsValue> {
        Self::fetch_json(&api_url("incidents/"), "GET", None).await
    }

    pub async fn get_incident(id: u32) -> Result<String, JsValue> {
        Self::fetch_json(&api_url(&format!("incidents/{}/", id)), "GET", None).await
    }

    pub async fn update_incident(
        id: u32,
        state: i64,
        comments: Option<&str>,
    ) -> Result<String, JsValue> {
        let mut payload = serde_json::json!({ "state": state });
        if let Some(comments) = comments {
            payload["comments"] = serde_json::Value::String(comments.to_string());
        }
        Self::fetch_json(
            &api_url(&format!("incidents/{}/", id)),
            "PUT",
            Some(&payload.to_string()),
        )
        .await
    }

    // ---------------- Automations ----------------

    pub async fn get_automations() -> Result<String, JsValue> {
        Self::fetch_json(&api_url("automations/"), "GET", None).await
    }

    /// Trigger expects an empty JSON body.
    pub async fn trigger_automation(id: u32) -> Result<String, JsValue> {
        Self::fetch_json(
            &api_url(&format!("automations/{}/trigger/", id)),
            "POST",
            Some("{}"),
        )
        .await
    }

    // ---------------- Dashboards ----------------

    pub async fn get_dashboards() -> Result<String, JsValue> {
        Self::fetch_json(&api_url("dashboards/"), "GET", None).await
    }

    // ---------------- Knowledge base ----------------

    pub async fn get_knowledge_base() -> Result<String, JsValue> {
        Self::fetch_json(&api_url("knowledge-base/"), "GET", None).await
    }

    pub async fn get_knowledge_base_entry(id: u32) -> Result<String, JsValue> {
        Self::fetch_json(&api_url(&format!("knowledge-base/{}/", id)), "GET", None).await
    }

    pub async fn save_knowledge_base_entry(
        id: Option<u32>,
        title: &str,
        category: &str,
        content: &str,
    ) -> Result<String, JsValue> {
        let body = serde_json::json!({
            "title": title,
            "category": category,
            "content": content,
        })
        .to_string();
        match id {
            Some(id) => {
                Self::fetch_json(
                    &api_url(&format!("knowledge-base/{}/", id)),
                    "PUT",
                    Some(&body),
                )
                .await
            }
            None => Self::fetch_json(&api_url("knowledge-base/"), "POST", Some(&body)).await,
        }
    }

    pub async fn delete_knowledge_base_entry(id: u32) -> Result<(), JsValue> {
        let _ = Self::fetch_json(&api_url(&format!("knowledge-base/{}/", id)), "DELETE", None)
            .await?;
        Ok(())
    }

    // ---------------- Logs ----------------

    pub async fn get_logs() -> Result<String, JsValue> {
        Self::fetch_json(&api_url("logs/"), "GET", None).await
    }

    pub async fn create_log_entry(
        level: &str,
        source: &str,
        message: &str,
    ) -> Result<String, JsValue> {
        let body = serde_json::json!({
            "level": level,
            "source": source,
            "message": message,
        })
        .to_string();
        Self::fetch_json(&api_url("logs/"), "POST", Some(&body)).await
    }

    // ---------------- Plumbing ----------------

    /// Issue a request and return the body text. Non-2xx statuses and
    /// transport errors both surface as `Err`; the caller treats them
    /// uniformly as "request failed".
    pub async fn fetch_json(url: &str, method: &str, body: Option<&str>) -> Result<String, JsValue> {
        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::SameOrigin);

        let headers = Headers::new()?;
        if method != "GET" {
            headers.append("X-CSRFToken", &csrf_token())?;
        }
        if let Some(data) = body {
            headers.append("Content-Type", "application/json")?;
            opts.set_body(&JsValue::from_str(data));
        }
        opts.set_headers(&headers);

        let request = Request::new_with_str_and_init(url, &opts)?;
        Self::dispatch(request).await
    }

    async fn dispatch(request: Request) -> Result<String, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
        let resp: Response = resp_value.dyn_into()?;

        if !resp.ok() {
            return Err(JsValue::from_str(&format!(
                "API request failed: {} {}",
                resp.status(),
                resp.status_text()
            )));
        }

        let text = JsFuture::from(resp.text()?).await?;
        Ok(text.as_string().unwrap_or_default())
    }
}
