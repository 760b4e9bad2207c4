//! # Connect Four AI
//!
//! A Connect Four game against a scripted opponent that scores every column
//! with a fixed-depth look-ahead. Ships a terminal UI built with Ratatui and
//! a plain stdin/stdout mode.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, marks, win detection
//! - [`ai`] — Agent trait, column scoring search, tie-break policies
//! - [`session`] — Human-versus-agent turn flow
//! - [`ui`] — Terminal UI and headless text mode
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod session;
pub mod ui;
