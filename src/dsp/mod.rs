pub mod curve;
pub mod filter;
pub mod noise;
pub mod oscillator;
