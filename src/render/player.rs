use std::time::Duration;

use tokio::{
    sync::{mpsc, oneshot},
    task::JoinHandle,
    time::{Instant, MissedTickBehavior},
};

use crate::{
    animation::update::advance,
    foundation::{
        core::Surface,
        error::{BlueboardError, BlueboardResult},
    },
    render::painter::Painter,
    scene::list::Scene,
};

/// Roughly one display refresh at 60 Hz.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// A frame was painted and another one should follow.
    Scheduled,
    /// Playback is paused; nothing was painted.
    Stopped,
}

/// The render loop state: what to draw, where, and whether to keep drawing.
pub struct Player<P> {
    painter: P,
    surface: Surface,
    scene: Scene,
    playing: bool,
}

impl<P: Painter> Player<P> {
    pub fn new(painter: P, container_width: u32) -> Self {
        Self {
            painter,
            surface: Surface::for_container(container_width),
            scene: Scene::new(),
            playing: false,
        }
    }

    pub fn painter(&self) -> &P {
        &self.painter
    }

    pub fn into_painter(self) -> P {
        self.painter
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn set_scene(&mut self, scene: Scene) {
        self.scene = scene;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Recomputes drawing extents. The scene is left untouched.
    pub fn resize(&mut self, container_width: u32) {
        self.surface = Surface::for_container(container_width);
    }

    /// Runs one frame at `elapsed` since the loop started.
    pub fn frame(&mut self, elapsed: Duration) -> BlueboardResult<FrameOutcome> {
        if !self.playing {
            return Ok(FrameOutcome::Stopped);
        }
        let objects = advance(self.scene.objects(), elapsed);
        self.painter.paint(self.surface, &objects)?;
        Ok(FrameOutcome::Scheduled)
    }
}

enum Command {
    Play,
    Pause(oneshot::Sender<()>),
    SetScene(Scene),
    Resize(u32),
    Shutdown,
}

/// Control surface for a player running on its own task.
///
/// Dropping the handle aborts the task.
pub struct PlayerHandle<P> {
    tx: mpsc::UnboundedSender<Command>,
    task: Option<JoinHandle<Player<P>>>,
}

pub fn spawn_player<P>(player: Player<P>, frame_interval: Duration) -> PlayerHandle<P>
where
    P: Painter + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel();
    let task = tokio::spawn(run_player(player, rx, frame_interval));
    PlayerHandle {
        tx,
        task: Some(task),
    }
}

impl<P> PlayerHandle<P> {
    fn send(&self, cmd: Command) -> BlueboardResult<()> {
        self.tx
            .send(cmd)
            .map_err(|_| BlueboardError::render("player task has stopped"))
    }

    pub fn play(&self) -> BlueboardResult<()> {
        self.send(Command::Play)
    }

    /// Resolves once the task has stopped scheduling frames.
    pub async fn pause(&self) -> BlueboardResult<()> {
        let (ack_tx, ack_rx) = oneshot::channel();
        self.send(Command::Pause(ack_tx))?;
        ack_rx
            .await
            .map_err(|_| BlueboardError::render("player task has stopped"))
    }

    pub fn set_scene(&self, scene: Scene) -> BlueboardResult<()> {
        self.send(Command::SetScene(scene))
    }

    pub fn resize(&self, container_width: u32) -> BlueboardResult<()> {
        self.send(Command::Resize(container_width))
    }

    /// Stops the loop and hands the player back. No frame runs after this returns.
    pub async fn shutdown(mut self) -> BlueboardResult<Player<P>> {
        let _ = self.tx.send(Command::Shutdown);
        let task = self
            .task
            .take()
            .ok_or_else(|| BlueboardError::render("player task already joined"))?;
        task.await
            .map_err(|e| BlueboardError::render(format!("player task failed: {e}")))
    }
}

impl<P> Drop for PlayerHandle<P> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

async fn run_player<P: Painter>(
    mut player: Player<P>,
    mut rx: mpsc::UnboundedReceiver<Command>,
    frame_interval: Duration,
) -> Player<P> {
    let start = Instant::now();
    let mut ticker = tokio::time::interval(frame_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        let cmd = if player.is_playing() {
            tokio::select! {
                biased;
                cmd = rx.recv() => cmd,
                _ = ticker.tick() => {
                    if let Err(err) = player.frame(start.elapsed()) {
                        tracing::warn!(error = %err, "frame failed, pausing playback");
                        player.pause();
                    }
                    continue;
                }
            }
        } else {
            // Paused: nothing is scheduled until a command arrives.
            rx.recv().await
        };

        match cmd {
            None | Some(Command::Shutdown) => break,
            Some(Command::Play) => {
                if !player.is_playing() {
                    player.play();
                    ticker.reset_immediately();
                }
            }
            Some(Command::Pause(ack)) => {
                player.pause();
                let _ = ack.send(());
            }
            Some(Command::SetScene(scene)) => player.set_scene(scene),
            Some(Command::Resize(width)) => player.resize(width),
        }
    }

    tracing::debug!("player loop stopped");
    player
}

#[cfg(test)]
#[path = "../../tests/unit/render/player.rs"]
mod tests;
