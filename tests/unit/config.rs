use super::*;

fn temp_dir(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "flockviz_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

#[test]
fn defaults_match_reference_output() {
    let opts = RenderOpts::default();
    assert_eq!(opts.fps, Fps { num: 60, den: 1 });
    assert_eq!(opts.canvas, Canvas::square(2400));
    assert!(opts.validate().is_ok());
}

#[test]
fn validation_catches_bad_values() {
    let mut opts = RenderOpts::default();
    opts.canvas = Canvas::square(0);
    assert!(opts.validate().is_err());

    opts.canvas = Canvas::square(101);
    assert!(opts.validate().is_err());

    opts.canvas = Canvas {
        width: 100,
        height: 200,
    };
    assert!(opts.validate().is_err());

    opts.canvas = Canvas::square(100);
    opts.fps = Fps { num: 0, den: 1 };
    assert!(opts.validate().is_err());
}

#[test]
fn partial_json_fills_defaults() {
    let opts: RenderOpts =
        serde_json::from_str(r#"{ "fps": { "num": 30, "den": 1 }, "overwrite": false }"#).unwrap();
    assert_eq!(opts.fps.num, 30);
    assert!(!opts.overwrite);
    assert_eq!(opts.canvas, Canvas::default());
}

#[test]
fn from_path_reads_and_validates() {
    let tmp = temp_dir("config_from_path");
    std::fs::create_dir_all(&tmp).unwrap();

    let good = tmp.join("good.json");
    std::fs::write(&good, r#"{ "canvas": { "width": 64, "height": 64 } }"#).unwrap();
    assert_eq!(RenderOpts::from_path(&good).unwrap().canvas, Canvas::square(64));

    let bad = tmp.join("bad.json");
    std::fs::write(&bad, r#"{ "canvas": { "width": 63, "height": 63 } }"#).unwrap();
    assert!(matches!(
        RenderOpts::from_path(&bad),
        Err(FlockError::Validation(_))
    ));

    assert!(matches!(
        RenderOpts::from_path(tmp.join("missing.json")),
        Err(FlockError::Resource(_))
    ));

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn sink_config_follows_canvas_and_fps() {
    let opts = RenderOpts {
        fps: Fps { num: 30, den: 1 },
        canvas: Canvas::square(64),
        ..RenderOpts::default()
    };
    assert_eq!(
        opts.sink_config(),
        SinkConfig {
            width: 64,
            height: 64,
            fps: Fps { num: 30, den: 1 },
        }
    );
}
