/// Request state of a conversation session. Exactly one request may be
/// outstanding at a time; a send attempted while Pending is refused.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Pending,
}
