//! HTTP API
//!
//! REST endpoints for record ingest and the analytics surface (baseline,
//! projection, alerts, report summary).

pub mod rest;
