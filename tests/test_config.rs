use shapescan::input::{load_image, resolve_input};
use shapescan::{AppConfig, ShapeConfig, ShapeError};

#[test]
fn test_defaults_match_classic_recipe() {
    let config = ShapeConfig::default();
    assert_eq!(config.blur_kernel_size, 5);
    assert_eq!(config.threshold, 10);
    assert_eq!(config.max_value, 255);
    assert_eq!(config.approximation_ratio, 0.01);
    assert_eq!(config.contour_color, [0, 255, 0]);
    assert_eq!(config.contour_thickness, 4);
    assert!(config.validate().is_ok());

    let app = AppConfig::default();
    assert_eq!(app.display.fit_ratio, 0.6);
    assert_eq!(app.lines.canny_low, 50.0);
    assert_eq!(app.lines.canny_high, 120.0);
}

#[test]
fn test_partial_json_keeps_other_defaults() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "shapes": { "threshold": 20 }, "display": { "fit_ratio": 0.5 } }"#)
        .expect("write config");

    let config = AppConfig::load(&path).expect("loads");
    assert_eq!(config.shapes.threshold, 20);
    assert_eq!(config.shapes.blur_kernel_size, 5);
    assert_eq!(config.display.fit_ratio, 0.5);
    assert_eq!(config.display.screen_width, 1920);
}

#[test]
fn test_bad_config_files_are_errors() {
    let dir = tempfile::TempDir::new().expect("temp dir");

    let malformed = dir.path().join("bad.json");
    std::fs::write(&malformed, "{ not json").expect("write");
    assert!(matches!(AppConfig::load(&malformed), Err(ShapeError::Config(_))));

    let even_kernel = dir.path().join("even.json");
    std::fs::write(&even_kernel, r#"{ "shapes": { "blur_kernel_size": 4 } }"#).expect("write");
    assert!(matches!(AppConfig::load(&even_kernel), Err(ShapeError::InvalidConfig(_))));

    assert!(matches!(
        AppConfig::load(&dir.path().join("missing.json")),
        Err(ShapeError::Io(_))
    ));
}

#[test]
fn test_missing_or_garbage_image_is_decode_failure() {
    let dir = tempfile::TempDir::new().expect("temp dir");

    let missing = dir.path().join("nope.png");
    assert!(matches!(load_image(&missing), Err(ShapeError::Decode { .. })));

    let garbage = dir.path().join("garbage.png");
    std::fs::write(&garbage, b"definitely not a png").expect("write");
    assert!(matches!(load_image(&garbage), Err(ShapeError::Decode { .. })));
}

#[test]
fn test_png_round_trip_loads() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let path = dir.path().join("red.png");
    image::RgbImage::from_pixel(8, 6, image::Rgb([255, 0, 0]))
        .save(&path)
        .expect("save");

    let img = load_image(&path).expect("loads");
    assert_eq!((img.width(), img.height()), (8, 6));
}

#[test]
fn test_explicit_path_skips_selection() {
    let path = std::path::PathBuf::from("given.png");
    assert_eq!(resolve_input(Some(path.clone())).expect("resolves"), path);
}

#[cfg(not(feature = "gui"))]
#[test]
fn test_no_path_without_gui_is_cancelled() {
    assert!(matches!(resolve_input(None), Err(ShapeError::SelectionCancelled)));
}
