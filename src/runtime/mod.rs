//! Hosting runtime: wire decoding, invocation dispatch, and the push stream.

pub mod publisher;
pub mod server;
pub mod wire;

#[cfg(test)]
pub mod testing;
