use actix::Message;

/// Serialized presentation message for one client.
#[derive(Message, Debug, Clone, PartialEq, Eq)]
#[rtype(result = "()")]
pub struct WebMessage(pub String);
