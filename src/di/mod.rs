//! Dependency injection infrastructure
//!
//! The lookup operation talks to its HTTP collaborator through the
//! [`ReleaseSource`] trait so the core logic can be exercised without a
//! network. Production code wires in
//! [`GitHubClient`](crate::github::GitHubClient); tests use the mock
//! implementation from [`mocks`].

pub mod mocks;
pub mod traits;

pub use traits::ReleaseSource;
