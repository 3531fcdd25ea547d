use std::sync::Arc;

use crate::{
    foundation::error::BlueboardResult,
    generate::client::Generator,
    server::{config::ServeArgs, rooms::RoomHub},
    store::memory::MemoryStore,
};

/// Shared by every route. Built once at startup.
#[derive(Clone, Debug)]
pub struct AppState {
    pub store: Arc<MemoryStore>,
    pub hub: Arc<RoomHub>,
    pub generator: Arc<Generator>,
}

impl AppState {
    pub fn new(store: MemoryStore, generator: Generator) -> Self {
        Self {
            store: Arc::new(store),
            hub: Arc::new(RoomHub::new()),
            generator: Arc::new(generator),
        }
    }

    pub async fn from_args(args: &ServeArgs) -> BlueboardResult<Self> {
        let store = match &args.data_file {
            Some(path) => MemoryStore::open(path).await?,
            None => MemoryStore::in_memory(),
        };
        Ok(Self::new(store, args.generator()?))
    }
}
