//! # Tables: users and patients
//!
//! Both tables load their whole collection once on mount and keep it in a
//! local signal. Deleting asks for confirmation, sends `DELETE /api/user/:id`
//! and filters the row out locally without reloading. Failures are logged and
//! otherwise leave the table as it was.

use std::future::Future;

use api::{ApiClient, ApiError, PatientSummary, Transport, UserInfo};

mod patients;
mod users;

pub use patients::{PatientSource, PatientTable};
pub use users::UsersTable;

/// Asked before any row is deleted.
pub const CONFIRM_DELETE: &str = "¿Estás seguro que deseas eliminar este usuario?";

/// A table row backed by a user account.
pub trait Row: Clone {
    fn row_id(&self) -> i64;
}

impl Row for UserInfo {
    fn row_id(&self) -> i64 {
        self.id
    }
}

impl Row for PatientSummary {
    fn row_id(&self) -> i64 {
        self.id
    }
}

/// The rows left after removing `id`, in their original order.
pub fn without_row<R: Row>(rows: &[R], id: i64) -> Vec<R> {
    rows.iter().filter(|row| row.row_id() != id).cloned().collect()
}

/// Await a listing request. A failure is logged and yields no rows.
pub async fn load_rows<R, F>(request: F, source: &'static str) -> Vec<R>
where
    F: Future<Output = Result<Vec<R>, ApiError>>,
{
    match request.await {
        Ok(rows) => {
            tracing::debug!(source, count = rows.len(), "rows loaded");
            rows
        }
        Err(e) => {
            tracing::error!(source, error = %e, "loading rows failed");
            Vec::new()
        }
    }
}

/// Delete the account behind a row. Returns whether the backend accepted it.
pub async fn delete_row<T: Transport>(api: &ApiClient<T>, id: i64) -> bool {
    match api.delete_user(id).await {
        Ok(()) => {
            tracing::info!(user_id = id, "user deleted");
            true
        }
        Err(e) => {
            tracing::error!(user_id = id, error = %e, "deleting user failed");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::transport::Method;
    use api::{MemoryTransport, Session};
    use serde_json::json;
    use store::MemoryStorage;

    fn client(transport: &MemoryTransport) -> ApiClient<MemoryTransport> {
        ApiClient::new(transport.clone(), Session::new(MemoryStorage::new()))
    }

    #[tokio::test]
    async fn test_delete_filters_locally_without_reload() {
        let transport = MemoryTransport::new()
            .respond(
                200,
                json!([
                    { "id": 1, "first_name": "Ana", "first_surname": "López", "phone": null },
                    { "id": 2, "first_name": "Luis", "email": "luis@x.y" }
                ]),
            )
            .respond(200, json!({ "message": "deleted" }));
        let api = client(&transport);

        let rows = load_rows(api.student_patients(), "student patients").await;
        assert_eq!(rows.len(), 2);

        assert!(delete_row(&api, 1).await);
        let rows = without_row(&rows, 1);

        assert_eq!(rows.iter().map(Row::row_id).collect::<Vec<_>>(), vec![2]);
        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method, Method::Get);
        assert_eq!(requests[0].path, "/api/student/patients");
        assert_eq!(requests[1].method, Method::Delete);
        assert_eq!(requests[1].path, "/api/user/1");
    }

    #[tokio::test]
    async fn test_failed_load_yields_empty_table() {
        let transport = MemoryTransport::new().respond(401, json!({ "msg": "Missing token" }));
        let api = client(&transport);

        let rows = load_rows(api.student_patients(), "student patients").await;
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_rows() {
        let transport = MemoryTransport::new().respond(403, json!({}));
        let api = client(&transport);

        assert!(!delete_row(&api, 5).await);
    }

    #[test]
    fn test_without_unknown_id_is_unchanged() {
        let rows = vec![
            PatientSummary { id: 3, ..Default::default() },
            PatientSummary { id: 4, ..Default::default() },
        ];
        assert_eq!(without_row(&rows, 9), rows);
    }
}
