//! `korri-lcc` library: the receive path for OpenLCB/LCC traffic on a CAN
//! bus in a `no_std` environment. A lock-free single-producer /
//! single-consumer queue carries frames out of the driver's interrupt
//! context, a total decoder classifies each 29-bit identifier, and a small
//! monitor loop ties both together.
#![no_std]
//==================================================================================
/// Construction errors (frames, identifiers, bit fields). The receive path
/// itself never fails.
pub mod error;
/// Bit-range descriptors for identifier fields.
pub mod infra;
/// OpenLCB/LCC protocol implementation: CAN transport, frame queue,
/// classification, and monitor loop.
pub mod protocol;
//==================================================================================
