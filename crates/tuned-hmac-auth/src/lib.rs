//! Tuned-HMAC request signing.
//!
//! This crate computes the `Tuned-HMAC` authentication token for an HTTP
//! request: a Base64 HMAC-SHA256 signature over a canonical, delimiter-free
//! signing string, keyed by a Base64-encoded secret.
//!
//! # Overview
//!
//! Signing is a pure function of its inputs. Every stage (validation, URI
//! canonicalization, payload digest, signing string, HMAC, token assembly) is
//! recomputed on each call; no state is kept between calls, so requests may be
//! signed concurrently without coordination.
//!
//! # Usage
//!
//! ```rust
//! use tuned_hmac_auth::{SigningRequest, sign};
//! use tuned_hmac_core::HttpMethod;
//!
//! let request = SigningRequest::builder()
//!     .access_key("AK")
//!     .secret_key("c2VjcmV0")
//!     .method(HttpMethod::Post)
//!     .url("https://api.example.com/orders")
//!     .body("{\"id\":1}")
//!     .build(); // nonce and timestamp are generated
//!
//! let signed = sign(&request).unwrap();
//! assert!(signed.is_signed());
//! assert!(signed.authorization_header("Tuned-HMAC").unwrap().starts_with("Tuned-HMAC AK:"));
//! ```
//!
//! # Modules
//!
//! - [`canonical`] - Canonical URI and signing string construction
//! - [`error`] - Signing error types
//! - [`payload`] - Body line-ending normalization, content digest and JSON minification
//! - [`request`] - The signing request, its builder and completeness check
//! - [`signer`] - HMAC-SHA256 signature and the full signing pipeline
//! - [`token`] - Token assembly and parsing

pub mod canonical;
pub mod error;
pub mod payload;
pub mod request;
pub mod signer;
pub mod token;

pub use canonical::{build_signing_string, canonicalize_uri};
pub use error::AuthError;
pub use payload::{digest_payload, minify_json};
pub use request::{SigningRequest, SigningRequestBuilder, validate};
pub use signer::{SignedRequest, compute_signature, sign};
pub use token::{AuthToken, assemble_token};
