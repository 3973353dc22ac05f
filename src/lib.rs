//! Toolbar Selection - Active tool resolution for interactive toolbars
//!
//! This crate decides, for a toolbar hosting many tools, which tool handles
//! each gesture class (tap, drag, scroll, multi-touch, ...) and which
//! inspector tools stay enabled, keeping declarative selectors and the tools'
//! runtime active flags consistent.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
