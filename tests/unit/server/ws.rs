use super::*;

#[test]
fn frames_join_and_relay() {
    let hub = RoomHub::new();
    let (a, mut rx_a) = hub.connect();
    let (b, mut rx_b) = hub.connect();

    handle_frame(&hub, a, r#"{"event":"join-room","data":"lab"}"#);
    handle_frame(&hub, b, r#"{"event":"join-room","data":"lab"}"#);
    assert_eq!(hub.room_size("lab"), 2);

    handle_frame(
        &hub,
        a,
        r#"{"event":"animation-update","data":{"roomId":"lab","objects":[{"id":"o1","type":"cone"}]}}"#,
    );
    let ServerEvent::AnimationUpdated(objects) = rx_b.try_recv().unwrap() else {
        panic!("expected animation-updated");
    };
    assert_eq!(objects[0].id, "o1");
    assert!(rx_a.try_recv().is_err());
}

#[test]
fn malformed_frames_are_ignored() {
    let hub = RoomHub::new();
    let (a, _rx) = hub.connect();
    handle_frame(&hub, a, "not json");
    handle_frame(&hub, a, r#"{"event":"dance","data":1}"#);
    handle_frame(&hub, a, r#"{"event":"join-room"}"#);
    assert_eq!(hub.room_size("dance"), 0);
}
