//! Acceptance tests for the TodoWeb task API.
//!
//! Black-box HTTP tests: each scenario boots a real server on a random
//! port backed by a throwaway store, then drives it with an HTTP client
//! the way an external consumer would.
