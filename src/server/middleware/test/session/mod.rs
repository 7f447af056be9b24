use crate::server::{
    error::AppError,
    middleware::session::{AuthSession, CsrfSession, OAuthFlowSession},
};
use test_utils::builder::TestBuilder;

mod csrf;
mod oauth_flow;
