//! Protocol state machine
//!
//! Decides, for every incoming line, whether it is a notification, the
//! acknowledgement of the command in flight, `LS` table data, or noise.
//! The machine is explicit, finite, and deterministic.

pub mod dispatch;
pub mod machine;
pub mod protocol;

pub use dispatch::Dispatch;
pub use machine::ProtocolState;
pub use protocol::ProtocolMachine;
