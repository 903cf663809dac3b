//! API client for the practice website admin API.
//!
//! Every call is issued against `<base>/admin<path>` with the current
//! session token attached as a bearer credential. A 401 from any endpoint
//! tears the session down and routes back to login, uniformly for every
//! call site. Calls are fire-and-forget: no retries, no timeouts, no
//! de-duplication; failure handling belongs to the caller.

use std::sync::Arc;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::auth::{Navigator, SessionData, SessionStore};
use crate::models::{
    About, ContactInfo, ContactSubmission, Education, Hero, Location, NewsItem, Service,
    SiteSettings, Testimonial, WorkExperience,
};

use super::ApiError;

pub type ApiResult<T> = Result<T, ApiError>;

/// Prefix shared by every admin endpoint
const ADMIN_PREFIX: &str = "/admin";

/// Client for the admin API.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(
        base_url: String,
        session: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> ApiResult<Self> {
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
            navigator,
        })
    }

    fn admin_url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, ADMIN_PREFIX, path)
    }

    /// Attach the stored bearer token, when there is one. Requests without
    /// a session go out bare and take the server's 401.
    fn with_auth(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Authenticate against the admin API. The request carries no bearer
    /// header. On success the returned token becomes the active session
    /// and the full response payload is handed back.
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<Value> {
        let response = self
            .http
            .post(self.admin_url("/login"))
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "Login rejected");
            return Err(ApiError::LoginFailed);
        }

        let payload: Value = response.json().await?;
        let token = payload
            .get("token")
            .and_then(Value::as_str)
            .ok_or_else(|| ApiError::InvalidResponse("login response carries no token".into()))?;

        self.session
            .set(SessionData::new(token, Some(username.to_string())))
            .map_err(|e| ApiError::Storage(e.to_string()))?;

        debug!(username, "Login succeeded");
        Ok(payload)
    }

    /// Check the current session with the server. With no stored token
    /// this short-circuits without touching the network. A rejected check
    /// tears the stored session down. Navigation on failure is the route
    /// guard's business, not this call's.
    pub async fn verify(&self) -> ApiResult<Value> {
        let Some(token) = self.session.token() else {
            return Err(ApiError::NoSession);
        };

        let response = self
            .http
            .get(self.admin_url("/verify"))
            .bearer_auth(token)
            .send()
            .await?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "Session verification rejected");
            if let Err(e) = self.session.clear() {
                warn!(error = %e, "Failed to clear session");
            }
            return Err(ApiError::Unauthorized);
        }

        Ok(response.json().await?)
    }

    /// Drop the active session. Purely local; the server keeps no client
    /// session state.
    pub fn logout(&self) -> ApiResult<()> {
        self.session.clear().map_err(|e| ApiError::Storage(e.to_string()))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let request = self.with_auth(self.http.get(self.admin_url(path)));
        self.run(Method::GET, path, request).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let request = self.with_auth(self.http.post(self.admin_url(path))).json(body);
        self.run(Method::POST, path, request).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let request = self.with_auth(self.http.put(self.admin_url(path))).json(body);
        self.run(Method::PUT, path, request).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let request = self.with_auth(self.http.delete(self.admin_url(path)));
        self.run(Method::DELETE, path, request).await
    }

    async fn run<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        request: RequestBuilder,
    ) -> ApiResult<T> {
        debug!(%method, path, "Sending admin API request");
        let response = request.send().await?;
        let response = self.check_session(method, path, response).await?;
        Ok(response.json().await?)
    }

    /// Uniform session semantics for the data verbs: a 401 clears the
    /// session store and routes to login; any other failure identifies
    /// the call that failed.
    async fn check_session(
        &self,
        method: Method,
        path: &str,
        response: Response,
    ) -> ApiResult<Response> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            warn!(%method, path, "Admin API rejected the session");
            if let Err(e) = self.session.clear() {
                warn!(error = %e, "Failed to clear session");
            }
            self.navigator.redirect_to_login();
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            return Err(ApiError::RequestFailed {
                method,
                endpoint: path.to_string(),
                status,
            });
        }
        Ok(response)
    }
}

// ===== Content Operations =====
//
// Thin typed wrappers over the generic verbs, one per admin resource.
// Payloads are passed through structurally; the server owns validation.

impl ApiClient {
    /// Fetch the hero section
    pub async fn fetch_hero(&self) -> ApiResult<Hero> {
        self.get("/hero").await
    }

    /// Replace the hero section
    pub async fn update_hero(&self, hero: &Hero) -> ApiResult<Hero> {
        self.put("/hero", hero).await
    }

    /// Fetch the about/bio document
    pub async fn fetch_about(&self) -> ApiResult<About> {
        self.get("/about").await
    }

    /// Replace the about/bio document
    pub async fn update_about(&self, about: &About) -> ApiResult<About> {
        self.put("/about", about).await
    }

    /// Fetch the education history aggregate
    pub async fn fetch_education(&self) -> ApiResult<Education> {
        self.get("/education").await
    }

    /// Replace the education history aggregate
    pub async fn update_education(&self, education: &Education) -> ApiResult<Education> {
        self.put("/education", education).await
    }

    /// Fetch all work experience entries
    pub async fn fetch_work_experience(&self) -> ApiResult<Vec<WorkExperience>> {
        self.get("/work-experience").await
    }

    pub async fn create_work_experience(
        &self,
        experience: &WorkExperience,
    ) -> ApiResult<WorkExperience> {
        self.post("/work-experience", experience).await
    }

    pub async fn update_work_experience(
        &self,
        id: &str,
        experience: &WorkExperience,
    ) -> ApiResult<WorkExperience> {
        self.put(&format!("/work-experience/{}", id), experience).await
    }

    pub async fn delete_work_experience(&self, id: &str) -> ApiResult<Value> {
        self.delete(&format!("/work-experience/{}", id)).await
    }

    /// Fetch all services
    pub async fn fetch_services(&self) -> ApiResult<Vec<Service>> {
        self.get("/services").await
    }

    pub async fn create_service(&self, service: &Service) -> ApiResult<Service> {
        self.post("/services", service).await
    }

    pub async fn update_service(&self, id: &str, service: &Service) -> ApiResult<Service> {
        self.put(&format!("/services/{}", id), service).await
    }

    pub async fn delete_service(&self, id: &str) -> ApiResult<Value> {
        self.delete(&format!("/services/{}", id)).await
    }

    /// Fetch all practice locations
    pub async fn fetch_locations(&self) -> ApiResult<Vec<Location>> {
        self.get("/locations").await
    }

    pub async fn create_location(&self, location: &Location) -> ApiResult<Location> {
        self.post("/locations", location).await
    }

    pub async fn update_location(&self, id: &str, location: &Location) -> ApiResult<Location> {
        self.put(&format!("/locations/{}", id), location).await
    }

    pub async fn delete_location(&self, id: &str) -> ApiResult<Value> {
        self.delete(&format!("/locations/{}", id)).await
    }

    /// Fetch all testimonials, approved or not
    pub async fn fetch_testimonials(&self) -> ApiResult<Vec<Testimonial>> {
        self.get("/testimonials").await
    }

    pub async fn create_testimonial(&self, testimonial: &Testimonial) -> ApiResult<Testimonial> {
        self.post("/testimonials", testimonial).await
    }

    pub async fn update_testimonial(
        &self,
        id: &str,
        testimonial: &Testimonial,
    ) -> ApiResult<Testimonial> {
        self.put(&format!("/testimonials/{}", id), testimonial).await
    }

    pub async fn delete_testimonial(&self, id: &str) -> ApiResult<Value> {
        self.delete(&format!("/testimonials/{}", id)).await
    }

    /// Fetch all news items and notices
    pub async fn fetch_news(&self) -> ApiResult<Vec<NewsItem>> {
        self.get("/news").await
    }

    pub async fn create_news_item(&self, item: &NewsItem) -> ApiResult<NewsItem> {
        self.post("/news", item).await
    }

    pub async fn update_news_item(&self, id: &str, item: &NewsItem) -> ApiResult<NewsItem> {
        self.put(&format!("/news/{}", id), item).await
    }

    pub async fn delete_news_item(&self, id: &str) -> ApiResult<Value> {
        self.delete(&format!("/news/{}", id)).await
    }

    /// Fetch the public contact info
    pub async fn fetch_contact(&self) -> ApiResult<ContactInfo> {
        self.get("/contact").await
    }

    /// Replace the public contact info
    pub async fn update_contact(&self, contact: &ContactInfo) -> ApiResult<ContactInfo> {
        self.put("/contact", contact).await
    }

    /// Fetch contact-form submissions, newest first as the server returns them
    pub async fn fetch_submissions(&self) -> ApiResult<Vec<ContactSubmission>> {
        self.get("/contact-submissions").await
    }

    /// Mark a submission as read. The endpoint takes no payload.
    pub async fn mark_submission_read(&self, id: &str) -> ApiResult<Value> {
        self.put(&format!("/contact-submissions/{}/read", id), &serde_json::json!({}))
            .await
    }

    pub async fn delete_submission(&self, id: &str) -> ApiResult<Value> {
        self.delete(&format!("/contact-submissions/{}", id)).await
    }

    /// Fetch the site settings
    pub async fn fetch_settings(&self) -> ApiResult<SiteSettings> {
        self.get("/settings").await
    }

    /// Replace the site settings
    pub async fn update_settings(&self, settings: &SiteSettings) -> ApiResult<SiteSettings> {
        self.put("/settings", settings).await
    }
}
