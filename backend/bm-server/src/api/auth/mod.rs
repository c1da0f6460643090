pub mod auth;
pub mod auth_request;
pub mod token_response;
