//! Authentication backend adapter.

mod client;
mod dto;

pub use client::{
    DEFAULT_API_BASE, DEFAULT_LOGIN_PATH, DEFAULT_TIMEOUT, HttpAuthClient, parse_login_body,
};
