//! OpenLCB/LCC receive path: CAN transport and frame queue, identifier
//! classification, and the consumer monitor loop.
pub mod monitor;
pub mod openlcb;
pub mod transport;
