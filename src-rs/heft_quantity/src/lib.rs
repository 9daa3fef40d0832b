#![cfg_attr(doc, doc = include_str!("../README.md"))]
//! The measured weight value type for Heft

mod quantity;
mod round;

#[cfg(feature = "arbitrary")]
mod arbitrary_impl;

pub use quantity::Quantity;
pub use round::round_half_even;
