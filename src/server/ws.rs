use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::Response,
};

use crate::server::{
    rooms::{ClientEvent, ClientId, RoomHub, ServerEvent},
    state::AppState,
};

pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| serve_socket(socket, state.hub))
}

async fn serve_socket(mut socket: WebSocket, hub: Arc<RoomHub>) {
    let (client, mut events) = hub.connect();
    loop {
        tokio::select! {
            incoming = socket.recv() => match incoming {
                Some(Ok(Message::Text(text))) => handle_frame(&hub, client, &text),
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    tracing::debug!(client, error = %e, "socket error");
                    break;
                }
            },
            Some(event) = events.recv() => {
                let text = match serde_json::to_string(&event) {
                    Ok(text) => text,
                    Err(e) => {
                        tracing::warn!(client, error = %e, "dropping unserializable event");
                        continue;
                    }
                };
                if socket.send(Message::Text(text)).await.is_err() {
                    break;
                }
            }
        }
    }
    hub.disconnect(client);
}

/// Applies one text frame from `client`. Malformed frames are logged and ignored.
pub fn handle_frame(hub: &RoomHub, client: ClientId, text: &str) {
    match serde_json::from_str::<ClientEvent>(text) {
        Ok(ClientEvent::JoinRoom(room)) => {
            hub.join(client, &room);
        }
        Ok(ClientEvent::AnimationUpdate(update)) => {
            let delivered = hub.relay(
                client,
                &update.room_id,
                ServerEvent::AnimationUpdated(update.objects),
            );
            tracing::debug!(client, room = %update.room_id, delivered, "animation relayed");
        }
        Err(e) => tracing::warn!(client, error = %e, "ignoring malformed frame"),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/server/ws.rs"]
mod tests;
