//! Shared test utilities

mod mock_project;

pub use mock_project::{CompareCall, MockProjectService, test_config};
