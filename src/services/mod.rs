pub mod mock_service;
pub mod script_service;
pub mod search_service;
