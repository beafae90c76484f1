use std::sync::Arc;
use crate::peer::enums::connection_state::ConnectionState;
use crate::peer::enums::echo_state::EchoState;
use crate::peer::enums::peer_role::PeerRole;
use crate::peer::structs::peer_handle::PeerHandle;
use crate::protocol::structs::frame_reader::FrameReader;
use crate::protocol::structs::table_definition::TableDefinition;
use crate::store::structs::registry::Registry;

/// Read side of a peer connection, owned by its task.
pub struct PeerConnection<R> {
    pub handle: Arc<PeerHandle>,
    pub registry: Arc<Registry>,
    pub reader: FrameReader<R>,
    pub role: PeerRole,
    pub state: ConnectionState,
    /// Definition that the next entry updates refer to.
    pub current_schema: Option<TableDefinition>,
    pub echo_state: EchoState,
}
