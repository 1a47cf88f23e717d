//! start341 library
//!
//! A search start page: one query goes to Gemini with web-search grounding and
//! the answer is rendered with its cited sources.

pub mod app;
pub mod cli;
pub mod config;
pub mod controller;
pub mod llm;
pub mod logging;
pub mod search;
pub mod ui;
pub mod web;
