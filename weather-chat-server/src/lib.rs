//! Library target for the server so integration tests can drive the
//! router without binding a socket.

pub mod api;
