//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the collaborator
//! traits defined in psifida-core:
//!
//! - Display transports (SSD1306-style I2C command/data channel)
//! - Glyph stores (W25Q-series SPI NOR flash)
//!
//! All drivers are blocking `embedded-hal` 1.0 implementations with a
//! bounded retry policy: a stuck bus surfaces as
//! [`DisplayError::Timeout`](psifida_core::DisplayError::Timeout) instead
//! of spinning forever.

#![no_std]
#![deny(unsafe_code)]

pub mod store;
pub mod transport;
