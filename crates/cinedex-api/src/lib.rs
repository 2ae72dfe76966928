//! API client library for cinedex.
//!
//! Provides a typed client for the TMDB v3 REST API.

/// TMDB API client.
pub mod tmdb;
