//! Process lifecycle: startup ordering lives in the binaries, shutdown
//! coordination lives here.

pub mod shutdown;

pub use shutdown::Shutdown;
