//! Library part of `cookiectl`, the operator tool for [mir_cookie].

pub mod cli;
pub mod config;
