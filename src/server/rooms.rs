use std::{
    collections::{HashMap, HashSet},
    sync::{Mutex, MutexGuard, PoisonError},
};

use tokio::sync::mpsc;

use crate::{scene::model::AnimationObject, store::records::ContentRecord};

pub type ClientId = u64;

/// Frames pushed to connected clients.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ServerEvent {
    AnimationUpdated(Vec<AnimationObject>),
    NewAnimation(NewAnimation),
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NewAnimation {
    pub content: ContentRecord,
    pub objects: Vec<AnimationObject>,
}

/// Frames sent by clients.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ClientEvent {
    JoinRoom(String),
    AnimationUpdate(AnimationUpdate),
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationUpdate {
    pub room_id: String,
    pub objects: Vec<AnimationObject>,
}

#[derive(Debug, Default)]
struct Rooms {
    next_client: ClientId,
    clients: HashMap<ClientId, mpsc::UnboundedSender<ServerEvent>>,
    members: HashMap<String, HashSet<ClientId>>,
}

impl Rooms {
    fn deliver<'a>(&self, targets: impl Iterator<Item = &'a ClientId>, event: &ServerEvent) -> usize {
        targets
            .filter_map(|id| self.clients.get(id))
            .filter(|tx| tx.send(event.clone()).is_ok())
            .count()
    }
}

/// Room membership and fan-out. Delivery is fire-and-forget.
#[derive(Debug, Default)]
pub struct RoomHub {
    rooms: Mutex<Rooms>,
}

impl RoomHub {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Rooms> {
        self.rooms.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers a client and returns its event stream.
    pub fn connect(&self) -> (ClientId, mpsc::UnboundedReceiver<ServerEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut rooms = self.lock();
        rooms.next_client += 1;
        let id = rooms.next_client;
        rooms.clients.insert(id, tx);
        tracing::debug!(client = id, "client connected");
        (id, rx)
    }

    /// Returns false for clients that are not connected.
    pub fn join(&self, client: ClientId, room: &str) -> bool {
        let mut rooms = self.lock();
        if !rooms.clients.contains_key(&client) {
            return false;
        }
        rooms
            .members
            .entry(room.to_string())
            .or_default()
            .insert(client);
        tracing::debug!(client, room, "joined room");
        true
    }

    /// Sends `event` to every member of `room` except `sender`. Returns the delivery count.
    pub fn relay(&self, sender: ClientId, room: &str, event: ServerEvent) -> usize {
        let rooms = self.lock();
        let Some(members) = rooms.members.get(room) else {
            return 0;
        };
        rooms.deliver(members.iter().filter(|id| **id != sender), &event)
    }

    /// Sends `event` to every member of `room`.
    pub fn broadcast(&self, room: &str, event: ServerEvent) -> usize {
        let rooms = self.lock();
        let Some(members) = rooms.members.get(room) else {
            return 0;
        };
        rooms.deliver(members.iter(), &event)
    }

    pub fn disconnect(&self, client: ClientId) {
        let mut rooms = self.lock();
        rooms.clients.remove(&client);
        rooms.members.retain(|_, members| {
            members.remove(&client);
            !members.is_empty()
        });
        tracing::debug!(client, "client disconnected");
    }

    pub fn room_size(&self, room: &str) -> usize {
        self.lock().members.get(room).map_or(0, HashSet::len)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/server/rooms.rs"]
mod tests;
