//! Integration tests against a mock AiMesh server.

mod budgets;
mod failures;
mod mock_server;
