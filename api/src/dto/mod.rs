//! Data transfer objects for the HTTP API

pub mod user_dto;

pub use user_dto::{PhoneDto, RegisterUserRequest, RegisterUserResponse};
