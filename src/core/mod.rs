pub mod config;
pub mod mrkdwn;
pub mod split;
