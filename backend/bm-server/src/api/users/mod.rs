pub mod edit_user_request;
pub mod user_dto;
pub mod users;
