//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.
//! Question storage is a domain-level port
//! ([`QuestionRepository`](polls_domain::QuestionRepository)).

pub mod clock;
