pub mod query_dto;
pub mod response_dto;

pub use response_dto::ApiResponse;
