use gloo_net::http::{Request, RequestBuilder};
use serde::Deserialize;
use serde_json::Value;
use urlencoding::encode;
use web_sys::RequestCache;

use crate::error::Result;
use crate::model::ActivityList;

/// What the server said about a signup or unregister request.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// 2xx, with the server's `message`.
    Accepted { message: String },
    /// Non-2xx, with the server's `detail` when it sent a string one.
    Rejected { status: u16, detail: Option<String> },
}

#[derive(Deserialize)]
struct ReplyBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    detail: Option<Value>,
}

impl Reply {
    /// Decodes a response body. The body is parsed before the status is
    /// looked at, so an unreadable error page is a decode error rather than a
    /// rejection.
    pub fn from_parts(ok: bool, status: u16, body: &str) -> Result<Self> {
        let body: ReplyBody = serde_json::from_str(body)?;
        if ok {
            Ok(Reply::Accepted {
                message: body.message.unwrap_or_default(),
            })
        } else {
            let detail = match body.detail {
                Some(Value::String(s)) => Some(s),
                _ => None,
            };
            Ok(Reply::Rejected { status, detail })
        }
    }
}

/// The activities REST API as the board consumes it.
pub trait ActivityApi {
    async fn list_activities(&self) -> Result<ActivityList>;

    async fn signup(&self, activity: &str, email: &str) -> Result<Reply>;

    async fn unregister(&self, activity: &str, email: &str) -> Result<Reply>;
}

/// Browser fetch client.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpApi {
    base: String,
}

impl HttpApi {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    fn activities_url(&self) -> String {
        format!("{}/activities", self.base)
    }

    fn signup_url(&self, activity: &str, email: &str) -> String {
        format!(
            "{}/activities/{}/signup?email={}",
            self.base,
            encode(activity),
            encode(email)
        )
    }

    fn unregister_url(&self, activity: &str, email: &str) -> String {
        format!(
            "{}/activities/{}/participants?email={}",
            self.base,
            encode(activity),
            encode(email)
        )
    }

    async fn send_for_reply(builder: RequestBuilder) -> Result<Reply> {
        let resp = builder.cache(RequestCache::NoStore).send().await?;
        let ok = resp.ok();
        let status = resp.status();
        let text = resp.text().await?;
        Reply::from_parts(ok, status, &text)
    }
}

impl ActivityApi for HttpApi {
    async fn list_activities(&self) -> Result<ActivityList> {
        let resp = Request::get(&self.activities_url())
            .cache(RequestCache::NoStore)
            .send()
            .await?;
        let text = resp.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<Reply> {
        Self::send_for_reply(Request::post(&self.signup_url(activity, email))).await
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<Reply> {
        Self::send_for_reply(Request::delete(&self.unregister_url(activity, email))).await
    }
}
