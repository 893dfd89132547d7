//! Backend service interfaces for SpringBok ERP
//!
//! Authentication and file storage are provided by a hosted backend. This
//! crate defines what the app expects from that backend: request and
//! response types, error taxonomies with user-facing messages, and async
//! traits a provider client implements.
//!
//! # Modules
//!
//! - [`auth`] - Sign-up, sign-in, sessions and password management
//! - [`storage`] - Per-user file folders, MIME helpers and the bucket trait

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod storage;

pub use auth::{AuthBackend, AuthError, AuthResponse, Session, SignInRequest, SignUpRequest, User};
pub use storage::{FileStorage, StorageError, StorageFolder, StoredFile};
