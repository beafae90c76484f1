use log::{debug, info, warn};
use tokio::io::AsyncRead;
use crate::peer::enums::echo_state::EchoState;
use crate::peer::enums::peer_error::PeerError;
use crate::peer::structs::peer_connection::PeerConnection;
use crate::protocol::protocol::*;
use crate::protocol::structs::entry_update::EntryUpdate;
use crate::protocol::structs::table_definition::TableDefinition;
use crate::protocol::structs::update_ack::UpdateAck;
use crate::stats::enums::stats_event::StatsEvent;

impl<R: AsyncRead + Unpin> PeerConnection<R> {
    pub async fn dispatch_loop(&mut self) -> Result<(), PeerError> {
        loop {
            self.dispatch_next().await?;
        }
    }

    /// Reads and handles one message.
    pub async fn dispatch_next(&mut self) -> Result<(), PeerError> {
        let class = self.reader.next_byte().await?;
        match class {
            CLASS_CONTROL => {
                let message_type = self.reader.next_byte().await?;
                self.handle_control(message_type);
            }
            CLASS_ERROR => {
                let message_type = self.reader.next_byte().await?;
                match message_type {
                    ERROR_PROTOCOL => warn!("[PEER] #{} reported a protocol error", self.handle.id),
                    _ => warn!("[PEER] #{} reported a size limit error", self.handle.id),
                }
            }
            CLASS_UPDATE => {
                let message_type = self.reader.next_byte().await?;
                self.handle_update(message_type).await?;
            }
            CLASS_RESERVED => debug!("[PEER] #{} sent a reserved class message", self.handle.id),
            other => debug!("[PEER] #{} sent unknown message class {}", self.handle.id, other),
        }
        self.reader.compact();
        Ok(())
    }

    fn handle_control(&mut self, message_type: u8) {
        match message_type {
            HEARTBEAT => {
                self.handle.send(control_frame(HEARTBEAT));
            }
            SYNCHRONIZATION_REQUEST => {
                let frames = self.registry.sync_frames();
                debug!("[SYNC] Pushing {} entries to #{}", frames.len(), self.handle.id);
                for frame in frames {
                    self.handle.send(frame);
                }
                self.handle.send(control_frame(SYNCHRONIZATION_FINISHED));
            }
            SYNCHRONIZATION_PARTIAL => {
                self.handle.send(control_frame(SYNCHRONIZATION_CONFIRMED));
            }
            SYNCHRONIZATION_CONFIRMED => debug!("[SYNC] #{} confirmed synchronization", self.handle.id),
            SYNCHRONIZATION_FINISHED => info!("[SYNC] #{} finished synchronization", self.handle.id),
            other => debug!("[PEER] #{} sent unknown control message {}", self.handle.id, other),
        }
    }

    async fn handle_update(&mut self, message_type: u8) -> Result<(), PeerError> {
        match message_type {
            ENTRY_UPDATE => {
                let payload = self.reader.read_record().await?;
                self.handle_entry_update(&payload);
            }
            STICK_TABLE_DEFINITION => {
                let payload = self.reader.read_record().await?;
                self.handle_table_definition(&payload);
            }
            UPDATE_ACK => {
                let payload = self.reader.read_record().await?;
                match UpdateAck::decode(&payload) {
                    Ok(ack) => {
                        self.registry.update_stats(StatsEvent::UpdateAcksReceived, 1);
                        debug!("[PEER] #{} acked table {} update {}", self.handle.id, ack.stick_table_id, ack.update_id);
                    }
                    Err(error) => {
                        self.registry.update_stats(StatsEvent::DecodeErrors, 1);
                        warn!("[PEER] #{} sent an invalid ack: {}", self.handle.id, error);
                    }
                }
            }
            INCREMENTAL_ENTRY_UPDATE | STICK_TABLE_SWITCH => {
                let payload = self.reader.read_record().await?;
                debug!("[PEER] #{} sent unsupported update type {}, skipped {} bytes", self.handle.id, message_type, payload.len());
            }
            other => debug!("[PEER] #{} sent unknown update type {}", self.handle.id, other),
        }
        Ok(())
    }

    pub fn handle_table_definition(&mut self, payload: &[u8]) {
        let definition = match TableDefinition::decode(payload) {
            Ok(definition) => definition,
            Err(error) => {
                self.registry.update_stats(StatsEvent::DecodeErrors, 1);
                warn!("[PEER] #{} sent an invalid table definition: {}", self.handle.id, error);
                return;
            }
        };
        self.registry.update_stats(StatsEvent::TableDefinitions, 1);

        let config = &self.registry.config;
        if config.peer.mode.is_waiting_room() && definition.name == config.vwr.room_table {
            debug!("[VWR] Ignoring room table definition echoed by #{}", self.handle.id);
            self.echo_state = EchoState::SkipNextEntryUpdateFor(definition.name.clone());
            self.current_schema = Some(definition);
            return;
        }

        self.handle.register_definition(&definition);
        self.registry.register_definition(&definition);
        self.current_schema = Some(definition);
    }

    pub fn handle_entry_update(&mut self, payload: &[u8]) {
        let Some(schema) = self.current_schema.clone() else {
            self.registry.update_stats(StatsEvent::DecodeErrors, 1);
            warn!("[PEER] #{} sent an entry update before any table definition", self.handle.id);
            return;
        };
        let update = match EntryUpdate::decode(payload, &schema) {
            Ok(update) => update,
            Err(error) => {
                self.echo_state = EchoState::Normal;
                self.registry.update_stats(StatsEvent::DecodeErrors, 1);
                warn!("[PEER] #{} sent an invalid entry update for {}: {}", self.handle.id, schema.name, error);
                return;
            }
        };

        if self.echo_state == EchoState::SkipNextEntryUpdateFor(schema.name.clone()) {
            self.echo_state = EchoState::Normal;
            self.send_update_ack(schema.stick_table_id, update.update_id);
            return;
        }

        let propagation = self.registry.apply_entry_update(&self.handle, &schema, &update);
        self.send_update_ack(schema.stick_table_id, update.update_id);
        self.registry.propagate(propagation);
    }

    fn send_update_ack(&self, stick_table_id: u64, update_id: u32) {
        let ack = UpdateAck { stick_table_id, update_id };
        if self.handle.send(ack.to_frame()) {
            self.registry.update_stats(StatsEvent::UpdateAcksSent, 1);
        }
    }
}
