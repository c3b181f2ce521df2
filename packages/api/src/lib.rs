//! # API crate: typed client for the SanArte backend
//!
//! The SanArte backend owns authentication, persistence and authorization. This
//! crate is everything the front end needs to talk to it: the JSON records it
//! exchanges, the persisted bearer-token session, and a client with one method
//! per endpoint.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Users, patients, personal data, the four medical background records, login/registration payloads |
//! | [`session`] | [`Session`]: token + user persisted in a [`store::SessionStorage`], read at call time |
//! | [`transport`] | The [`Transport`] seam, with the `reqwest` implementation and an in-memory one for tests |
//! | [`error`] | [`ApiError`]: status, transport, decode and encode failures |
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth |
//! |--------|----------|------|
//! | [`login`](ApiClient::login) | `POST /api/login` | none |
//! | [`register`](ApiClient::register) | `POST /api/register` | none |
//! | [`save_backgrounds`](ApiClient::save_backgrounds) | `POST /api/backgrounds` | bearer |
//! | [`save_personal_data`](ApiClient::save_personal_data) | `POST /api/personal_data` | bearer |
//! | [`my_personal_data`](ApiClient::my_personal_data) | `GET /api/personal_data` | bearer |
//! | [`personal_data_by_medical_file`](ApiClient::personal_data_by_medical_file) | `GET /api/personal_data/by_medical_file/:id` | bearer |
//! | [`student_patients`](ApiClient::student_patients) | `GET /api/student/patients` | bearer |
//! | [`professional_patients`](ApiClient::professional_patients) | `GET /api/professional/patients` | bearer |
//! | [`users`](ApiClient::users) | `GET /api/users` | bearer |
//! | [`delete_user`](ApiClient::delete_user) | `DELETE /api/user/:id` | bearer |

mod client;
pub mod error;
pub mod models;
pub mod session;
pub mod transport;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::*;
pub use session::Session;
pub use transport::{HttpTransport, MemoryTransport, Transport};
