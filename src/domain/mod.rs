//! Domain modules organized as vertical slices.
//!
//! Each feed sub-module contains:
//! - `mod.rs`: Domain types
//! - `wire.rs`: Raw serde structs matching the feed responses
//! - `convert.rs`: Wire → domain conversions with validation
//! - `state.rs`: State containers the pollers write into
//! - `client.rs`: Sub-client with HTTP methods
//! - `poller.rs`: Background polling on a fixed interval
//!
//! `chart` is pure geometry over a quote price and has no feed of its own.

pub mod chart;
pub mod quote;
pub mod trade;
