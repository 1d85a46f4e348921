//! Core portal logic for Ledgerdesk.
//!
//! This crate contains pure logic with ZERO web or I/O dependencies.
//! Form state, validation rules, and dashboard calculations live here.
//!
//! # Modules
//!
//! - `journal` - Manual double-entry journal entry form and submission state
//! - `accounts` - Chart of accounts lookup used for title auto-fill
//! - `leads` - Multi-step lead-generation forms
//! - `dashboard` - Financial summary, cash flow, and general ledger math
//! - `content` - Blog posts and admin content drafts
//! - `load_state` - Remote data that is loading, loaded, or failed

pub mod accounts;
pub mod content;
pub mod dashboard;
pub mod journal;
pub mod leads;
pub mod load_state;
