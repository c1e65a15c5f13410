use crate::app::args::ArgumentSet;

pub type ClientId = String;
pub type UserId = String;

pub const ANONYMOUS_USER: &str = "anonymous";

/// One client round trip, already decoded by the wire layer.
#[derive(Debug, Clone)]
pub struct Interaction {
    /// `None` for a client that has not been given an id yet; the runtime
    /// assigns one.
    pub client_id: Option<ClientId>,
    pub user_id: UserId,
    pub args: ArgumentSet,
}

#[derive(Debug)]
pub enum AppEvent {
    /// A client event that should invoke the mounted handler
    Interaction(Interaction),

    /// The client's connection went away; its scope and surface are dropped
    ClientClosed { client_id: ClientId },

    /// Input ended or the process was interrupted
    Shutdown,
}
