//! # repair-search
//!
//! A Rust web service for searching iFixit repair guides, extracting
//! structure from unstructured guide text, and producing beginner-friendly
//! summaries with a DeepSeek-compatible LLM.
//!
//! ## Architecture
//!
//! The search pipeline is a straight line:
//!
//! ```text
//!        ┌─────────────┐
//!        │  User Query  │
//!        └──────┬───────┘
//!               │
//!               ▼
//!   ┌───────────────────────┐
//!   │   Query Expansion     │   static model-code ↔ name aliases
//!   └───────────┬───────────┘
//!               │ N query variants
//!               ▼
//!   ┌───────────────────────┐
//!   │ iFixit suggest API    │   per-variant, failures skipped
//!   └───────────┬───────────┘
//!               │ pooled results
//!               ▼
//!   ┌───────────────────────┐
//!   │ Dedup by source URL   │
//!   │ Score 100 / 75 / 50   │
//!   │ Sort, truncate        │
//!   └───────────┬───────────┘
//!               │
//!               ▼
//!   ┌───────────────────────┐
//!   │    Ranked devices     │
//!   └───────────────────────┘
//! ```
//!
//! Summarization attempts one LLM call per request and falls back to a
//! deterministic template assembled from heuristic difficulty, time, and
//! success estimates whenever the LLM is unconfigured or fails.
//!
//! ## Module Overview
//!
//! - [`config`] - Environment-based configuration for server, iFixit, and LLM settings
//! - [`models`] - Shared data types: `GuideDocument`, request/response types, estimate enums
//! - [`search::expand`] - Model-number alias query expansion
//! - [`search::rank`] - Source-URL dedup and coarse relevance scoring
//! - [`extract`] - Regex-driven extraction of tools, parts, and steps from guide text
//! - [`ifixit`] - Client for the iFixit 2.0 suggest/wiki/guide APIs
//! - [`llm::client`] - DeepSeek (OpenAI-compatible) chat completion with retry
//! - [`llm::estimate`] - Pure difficulty/time/success heuristics
//! - [`llm::summarize`] - Summary orchestration with deterministic fallback
//! - [`api`] - Axum HTTP handlers
//! - [`state`] - Shared application state: config plus pooled HTTP client

pub mod api;
pub mod config;
pub mod extract;
pub mod ifixit;
pub mod llm;
pub mod models;
pub mod search;
pub mod state;
