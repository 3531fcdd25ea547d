use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use super::*;
use crate::scene::{
    library::preset,
    model::{AnimationObject, ShapeKind},
};

#[derive(Clone, Default)]
struct SpyPainter {
    paints: Arc<AtomicUsize>,
    last_surface: Arc<Mutex<Option<Surface>>>,
}

impl Painter for SpyPainter {
    fn paint(&mut self, surface: Surface, _objects: &[AnimationObject]) -> BlueboardResult<()> {
        self.paints.fetch_add(1, Ordering::SeqCst);
        *self.last_surface.lock().unwrap() = Some(surface);
        Ok(())
    }
}

struct FailingPainter;

impl Painter for FailingPainter {
    fn paint(&mut self, _surface: Surface, _objects: &[AnimationObject]) -> BlueboardResult<()> {
        Err(BlueboardError::render("boom"))
    }
}

fn demo_scene() -> Scene {
    Scene::from_objects(vec![
        preset("Atom").unwrap().create().unwrap(),
        preset("Molecule").unwrap().create().unwrap(),
    ])
    .unwrap()
}

#[test]
fn paused_player_paints_nothing() {
    let spy = SpyPainter::default();
    let mut player = Player::new(spy.clone(), 800);
    player.set_scene(demo_scene());

    assert_eq!(
        player.frame(Duration::from_millis(10)).unwrap(),
        FrameOutcome::Stopped
    );
    assert_eq!(spy.paints.load(Ordering::SeqCst), 0);

    player.play();
    assert_eq!(
        player.frame(Duration::from_millis(20)).unwrap(),
        FrameOutcome::Scheduled
    );
    assert_eq!(spy.paints.load(Ordering::SeqCst), 1);

    player.pause();
    for ms in [30, 1_000, 60_000] {
        assert_eq!(
            player.frame(Duration::from_millis(ms)).unwrap(),
            FrameOutcome::Stopped
        );
    }
    assert_eq!(spy.paints.load(Ordering::SeqCst), 1);
}

#[test]
fn frame_does_not_modify_the_scene() {
    let mut player = Player::new(SpyPainter::default(), 800);
    let scene = demo_scene();
    player.set_scene(scene.clone());
    player.play();
    player.frame(Duration::from_millis(700)).unwrap();
    assert_eq!(player.scene(), &scene);
}

#[test]
fn resize_keeps_objects_and_changes_extent() {
    let mut player = Player::new(SpyPainter::default(), 800);
    let scene = demo_scene();
    player.set_scene(scene.clone());
    let before = serde_json::to_value(player.scene()).unwrap();

    player.resize(1232);
    assert_eq!(player.surface(), Surface::for_container(1232));
    assert_eq!(player.surface().width, 1200);
    assert_eq!(player.surface().height, 693);
    assert_eq!(serde_json::to_value(player.scene()).unwrap(), before);
}

#[test]
fn painter_errors_propagate() {
    let mut player = Player::new(FailingPainter, 320);
    player.set_scene(
        Scene::new()
            .with_object(AnimationObject::new(ShapeKind::Cube))
            .unwrap(),
    );
    player.play();
    assert!(player.frame(Duration::ZERO).is_err());
}

#[tokio::test(start_paused = true)]
async fn pause_stops_all_further_paints() {
    let spy = SpyPainter::default();
    let mut player = Player::new(spy.clone(), 800);
    player.set_scene(demo_scene());

    let handle = spawn_player(player, DEFAULT_FRAME_INTERVAL);
    handle.play().unwrap();
    tokio::time::sleep(Duration::from_millis(200)).await;
    let painted = spy.paints.load(Ordering::SeqCst);
    assert!(painted > 0);

    handle.pause().await.unwrap();
    let at_pause = spy.paints.load(Ordering::SeqCst);
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(spy.paints.load(Ordering::SeqCst), at_pause);

    let player = handle.shutdown().await.unwrap();
    assert!(!player.is_playing());
    assert_eq!(spy.paints.load(Ordering::SeqCst), at_pause);
}

#[tokio::test(start_paused = true)]
async fn resize_through_handle_reaches_the_painter() {
    let spy = SpyPainter::default();
    let handle = spawn_player(Player::new(spy.clone(), 800), DEFAULT_FRAME_INTERVAL);
    handle.resize(432).unwrap();
    handle.set_scene(demo_scene()).unwrap();
    handle.play().unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert_eq!(
        *spy.last_surface.lock().unwrap(),
        Some(Surface::for_container(432))
    );
    let player = handle.shutdown().await.unwrap();
    assert_eq!(player.scene().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn failing_painter_pauses_the_loop() {
    let mut player = Player::new(FailingPainter, 320);
    player.set_scene(demo_scene());
    let handle = spawn_player(player, DEFAULT_FRAME_INTERVAL);
    handle.play().unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;

    let player = handle.shutdown().await.unwrap();
    assert!(!player.is_playing());
}

#[tokio::test(start_paused = true)]
async fn commands_fail_after_shutdown() {
    let handle = spawn_player(
        Player::new(SpyPainter::default(), 320),
        DEFAULT_FRAME_INTERVAL,
    );
    let tx = handle.tx.clone();
    handle.shutdown().await.unwrap();
    assert!(tx.send(Command::Play).is_err());
}
