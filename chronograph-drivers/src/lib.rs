//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in chronograph-core:
//!
//! - Character LCD (HD44780 in 4-bit parallel mode)
//! - Push buttons on GPIO inputs

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod button;
pub mod lcd;
