use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Fixed acknowledgement body for write operations that do not echo the
/// entity back.
#[derive(Serialize, Debug)]
pub struct Ack {
    pub msg: &'static str,
}
