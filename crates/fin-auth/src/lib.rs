//! # fin-auth
//!
//! Authentication for finapp.
//!
//! The [`AuthFacade`] is the single point of contact between callers and an
//! external identity provider. It forwards credential operations to an
//! [`IdentityProvider`], surfaces provider failures as [`AuthError`] values,
//! and mirrors successful logins into an explicitly owned [`SessionStore`],
//! optionally backed by a [`SessionFile`] so the login outlives the process.
//!
//! [`firebase::FirebaseProvider`] implements the provider against the Firebase
//! Identity Toolkit REST API, with OAuth running through a loopback browser
//! redirect ([`browser_flow`]).

pub mod browser_flow;
pub mod connection;
pub mod credentials;
pub mod error;
pub mod facade;
pub mod firebase;
pub mod provider;
pub mod session;
pub mod session_file;

pub use connection::{ConnectionHandle, ListenerId};
pub use credentials::{OAuthRequest, PasswordCredentials, SignUpProfile};
pub use error::{AuthError, ProviderAuthError};
pub use facade::AuthFacade;
pub use provider::{AccountCreated, IdentityProvider};
pub use session::SessionStore;
pub use session_file::SessionFile;
