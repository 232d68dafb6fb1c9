//! # Configuration Value Types
//!
//! This crate contains the closed vocabulary of the web-application
//! configuration subsystem: one enumeration per configuration choice, the
//! bit-flag set for profile-guided optimizations, and the typed sections
//! that consume them. Keep it lean: no I/O, no parsing of files—just values
//! and simple helpers.
//!
//! Every token enum serializes as its canonical name and parses
//! case-insensitively, matching the convention of the configuration format
//! the values come from.

pub mod auth;
pub mod compilation;
pub mod config;
pub mod custom_errors;
pub mod hierarchy;
pub mod pages;
pub mod process_model;
pub mod profile;
pub mod trace;

mod token;
