//! Build-time contract for the speed of the USB serial link between the
//! host-side tools and the board sketch.
//!
//! The canonical rate lives in [`constants::link_speed`] as one integer
//! literal; the termios token the host configures its descriptor with is
//! derived from that literal at compile time. [`host`] holds the two call
//! sites that consume the contract.

pub mod constants;
pub mod host;
