//! Gate network planner server.
//!
//! A web application that answers: "What is the cheapest way through the
//! gate network from here to there, and should I drive or take an HSTC
//! to the gate?"

pub mod config;
pub mod domain;
pub mod graph;
pub mod planner;
pub mod store;
pub mod transport;
pub mod web;
