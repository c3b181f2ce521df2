//! Typed calls to the SanArte backend.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use store::config::ApiConfig;

use crate::models::{
    BackgroundsPayload, Credentials, LoginResponse, PatientSummary, PersonalData,
    PersonalDataSection, Registration, UserInfo, WithMedicalFile,
};
use crate::transport::{ApiRequest, HttpTransport, Method, Transport};
use crate::{ApiError, Session};

/// Whether a call carries the session's bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Auth {
    Anonymous,
    Bearer,
}

/// Client for the backend REST API.
///
/// Cloning is cheap: the transport and the session are shared handles.
#[derive(Clone, Debug)]
pub struct ApiClient<T = HttpTransport> {
    transport: T,
    session: Session,
}

impl ApiClient<HttpTransport> {
    /// Client talking HTTP to the configured backend.
    pub fn http(config: &ApiConfig, session: Session) -> Self {
        Self::new(HttpTransport::new(config.base_url.as_str()), session)
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, session: Session) -> Self {
        Self { transport, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// `POST /api/login`. Does not touch the session; see [`Session::login`].
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let body = encode(credentials)?;
        let value = self
            .send(Method::Post, "/api/login".to_string(), Some(body), Auth::Anonymous)
            .await?;
        decode(value)
    }

    /// `POST /api/register`.
    pub async fn register(&self, registration: &Registration) -> Result<Value, ApiError> {
        let body = encode(registration)?;
        self.send(Method::Post, "/api/register".to_string(), Some(body), Auth::Anonymous)
            .await
    }

    /// `POST /api/backgrounds`.
    pub async fn save_backgrounds(&self, payload: &BackgroundsPayload) -> Result<Value, ApiError> {
        let body = encode(payload)?;
        self.send(Method::Post, "/api/backgrounds".to_string(), Some(body), Auth::Bearer)
            .await
    }

    /// `POST /api/personal_data` with the full personal record.
    pub async fn save_personal_data(
        &self,
        payload: &WithMedicalFile<PersonalData>,
    ) -> Result<Value, ApiError> {
        self.post_personal_data(payload).await
    }

    /// `POST /api/personal_data` with the interview subset (sex, address).
    pub async fn save_personal_data_section(
        &self,
        payload: &WithMedicalFile<PersonalDataSection>,
    ) -> Result<Value, ApiError> {
        self.post_personal_data(payload).await
    }

    async fn post_personal_data<P: Serialize>(&self, payload: &P) -> Result<Value, ApiError> {
        let body = encode(payload)?;
        self.send(Method::Post, "/api/personal_data".to_string(), Some(body), Auth::Bearer)
            .await
    }

    /// `GET /api/personal_data`: the signed-in patient's own record.
    pub async fn my_personal_data(&self) -> Result<PersonalData, ApiError> {
        self.get("/api/personal_data".to_string()).await
    }

    /// `GET /api/personal_data/by_medical_file/:id`.
    pub async fn personal_data_by_medical_file(
        &self,
        medical_file_id: i64,
    ) -> Result<PersonalData, ApiError> {
        self.get(format!("/api/personal_data/by_medical_file/{medical_file_id}"))
            .await
    }

    /// `GET /api/student/patients`: patients waiting for an interview.
    pub async fn student_patients(&self) -> Result<Vec<PatientSummary>, ApiError> {
        self.get("/api/student/patients".to_string()).await
    }

    /// `GET /api/professional/patients`.
    pub async fn professional_patients(&self) -> Result<Vec<PatientSummary>, ApiError> {
        self.get("/api/professional/patients".to_string()).await
    }

    /// `GET /api/users`.
    pub async fn users(&self) -> Result<Vec<UserInfo>, ApiError> {
        self.get("/api/users".to_string()).await
    }

    /// `DELETE /api/user/:id`.
    pub async fn delete_user(&self, user_id: i64) -> Result<(), ApiError> {
        self.send(Method::Delete, format!("/api/user/{user_id}"), None, Auth::Bearer)
            .await
            .map(|_| ())
    }

    async fn get<R: DeserializeOwned>(&self, path: String) -> Result<R, ApiError> {
        let value = self.send(Method::Get, path, None, Auth::Bearer).await?;
        decode(value)
    }

    async fn send(
        &self,
        method: Method,
        path: String,
        body: Option<Value>,
        auth: Auth,
    ) -> Result<Value, ApiError> {
        let bearer = match auth {
            Auth::Bearer => self.session.token(),
            Auth::Anonymous => None,
        };
        tracing::debug!(?method, %path, authenticated = bearer.is_some(), "api request");

        let response = self
            .transport
            .send(ApiRequest {
                method,
                path,
                bearer,
                body,
            })
            .await?;

        if response.is_success() {
            Ok(response.body)
        } else {
            tracing::debug!(status = response.status, "api request rejected");
            Err(ApiError::from_status(response.status, &response.body))
        }
    }
}

fn encode<P: Serialize>(payload: &P) -> Result<Value, ApiError> {
    serde_json::to_value(payload).map_err(|e| ApiError::Encode(e.to_string()))
}

fn decode<R: DeserializeOwned>(value: Value) -> Result<R, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MemoryTransport;
    use serde_json::json;
    use store::MemoryStorage;

    fn client(transport: &MemoryTransport) -> ApiClient<MemoryTransport> {
        ApiClient::new(transport.clone(), Session::new(MemoryStorage::new()))
    }

    fn user_json(id: i64) -> Value {
        json!({ "id": id, "email": format!("u{id}@example.com"), "role": "estudiante" })
    }

    #[tokio::test]
    async fn test_login_is_anonymous_and_decodes() {
        let transport =
            MemoryTransport::new().respond(200, json!({ "token": "t0k", "user": user_json(1) }));
        let api = client(&transport);

        let response = api
            .login(&Credentials {
                email: "u1@example.com".into(),
                password: "secret".into(),
            })
            .await
            .unwrap();

        assert_eq!(response.token, "t0k");
        assert_eq!(response.user.id, 1);

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].path, "/api/login");
        assert!(requests[0].bearer.is_none());
        assert_eq!(requests[0].body.as_ref().unwrap()["email"], "u1@example.com");
    }

    #[tokio::test]
    async fn test_bearer_is_read_at_call_time() {
        let transport = MemoryTransport::new()
            .respond(200, json!([]))
            .respond(200, json!([]));
        let api = client(&transport);

        // Anonymous: no header at all
        api.users().await.unwrap();

        api.session().login("fresh", &decode(user_json(2)).unwrap());
        api.users().await.unwrap();

        let requests = transport.requests();
        assert!(requests[0].bearer.is_none());
        assert_eq!(requests[1].bearer.as_deref(), Some("fresh"));
    }

    #[tokio::test]
    async fn test_status_error_carries_message() {
        let transport =
            MemoryTransport::new().respond(403, json!({ "message": "Acceso no autorizado" }));
        let api = client(&transport);

        let err = api.student_patients().await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 403,
                message: Some("Acceso no autorizado".into())
            }
        );
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let transport = MemoryTransport::new().fail("connection refused");
        let api = client(&transport);

        let err = api.delete_user(3).await.unwrap_err();
        assert_eq!(err, ApiError::Transport("connection refused".into()));
        assert_eq!(transport.requests()[0].path, "/api/user/3");
        assert_eq!(transport.requests()[0].method, Method::Delete);
    }

    #[tokio::test]
    async fn test_unexpected_shape_is_decode_error() {
        let transport = MemoryTransport::new().respond(200, json!({ "rows": [] }));
        let api = client(&transport);

        assert!(matches!(api.users().await, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn test_personal_data_by_medical_file_path() {
        let transport = MemoryTransport::new().respond(200, json!({ "address": "Calle 3" }));
        let api = client(&transport);

        let data = api.personal_data_by_medical_file(17).await.unwrap();
        assert_eq!(data.address, "Calle 3");
        assert_eq!(
            transport.requests()[0].path,
            "/api/personal_data/by_medical_file/17"
        );
    }
}
