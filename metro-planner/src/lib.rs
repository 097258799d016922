//! Metro route planner.
//!
//! Models a transit network as a weighted undirected graph and answers two
//! questions between stations: the path with the fewest connections, and
//! the route with the lowest combined travel and transfer time.

pub mod domain;
pub mod network;
pub mod planner;
pub mod web;
