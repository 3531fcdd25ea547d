use clap::Parser as _;

use super::*;

#[derive(clap::Parser, Debug)]
struct Harness {
    #[command(flatten)]
    serve: ServeArgs,
}

fn args(ai_url: Option<&str>) -> ServeArgs {
    ServeArgs {
        host: "127.0.0.1".to_string(),
        port: 0,
        max_port_attempts: 1,
        ai_url: ai_url.map(str::to_string),
        ai_timeout_secs: 3,
        data_file: None,
    }
}

#[test]
fn flags_parse() {
    let h = Harness::try_parse_from([
        "blueboard",
        "--host",
        "127.0.0.1",
        "--port",
        "8080",
        "--max-port-attempts",
        "2",
        "--ai-url",
        "http://localhost:5001/generate",
        "--ai-timeout-secs",
        "4",
        "--data-file",
        "data/store.json",
    ])
    .unwrap();
    assert_eq!(h.serve.port, 8080);
    assert_eq!(h.serve.max_port_attempts, 2);
    assert_eq!(h.serve.ai_timeout(), Duration::from_secs(4));
    assert_eq!(
        h.serve.data_file.as_deref(),
        Some(std::path::Path::new("data/store.json"))
    );
}

#[test]
fn missing_url_selects_rules() {
    assert!(matches!(args(None).generator().unwrap(), Generator::Rules(_)));
    assert!(matches!(
        args(Some("  ")).generator().unwrap(),
        Generator::Rules(_)
    ));
}

#[test]
fn url_selects_remote() {
    let generator = args(Some("http://127.0.0.1:5001/generate")).generator().unwrap();
    let Generator::Remote(http) = generator else {
        panic!("expected remote generator");
    };
    assert_eq!(http.endpoint(), "http://127.0.0.1:5001/generate");
}

#[test]
fn zero_timeout_is_clamped() {
    let mut a = args(None);
    a.ai_timeout_secs = 0;
    assert_eq!(a.ai_timeout(), Duration::from_secs(1));
}
