//! # Bender Slack
//!
//! Text helpers for posting chat-bot replies to Slack:
//! - [`md_to_mrkdwn`] rewrites the Markdown subset bots tend to emit into Slack mrkdwn
//! - [`split_text`] breaks long replies into chunks that fit one Slack message
//!
//! Both are pure functions; delivering the chunks is up to the caller.

pub mod core;

pub use crate::core::config::{Config, ConfigError};
pub use crate::core::mrkdwn::{md_to_mrkdwn, md_to_mrkdwn_preserving_code};
pub use crate::core::split::{
    SLACK_MSG_LIMIT, SplitError, split_text, split_text_default, split_with_limit,
};
