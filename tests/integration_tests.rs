//! End-to-end tests: wheel files, the render pipeline and the panel adapter.

use std::fs;

use pretty_assertions::assert_eq;
use wheel_layout::layout::{BoundingBox, Size, WheelItem, WheelPanel};
use wheel_layout::{
    render, render_with_config, ConfigError, RenderConfig, RenderError, SvgConfig, WheelFile,
    WheelParams,
};

/// Minimal host item that remembers what the panel told it
#[derive(Debug, Default, Clone, PartialEq)]
struct Slot {
    bounds: Option<BoundingBox>,
    angle: Option<f64>,
}

impl WheelItem for Slot {
    fn arrange(&mut self, bounds: BoundingBox) {
        self.bounds = Some(bounds);
    }

    fn set_angle(&mut self, degrees: f64) {
        self.angle = Some(degrees);
    }
}

#[test]
fn test_render_counts_items() {
    let svg = render(5).unwrap();
    assert_eq!(svg.matches("<g id=\"item-").count(), 5);
}

#[test]
fn test_render_with_wheel_file() {
    let toml_str = r##"
[metadata]
name = "apps"
count = 6

[wheel]
item_size = 24.0
angle_offset = -90.0

[svg]
show_guides = true
label_items = false
pretty_print = false
"##;
    let file = WheelFile::from_str(toml_str).unwrap();
    let count = file.count.unwrap();
    let svg = render_with_config(count, RenderConfig::from(file)).unwrap();

    assert!(svg.contains("wheel-inner"));
    assert!(!svg.contains("<text"));
    assert!(!svg.contains('\n'));
    assert_eq!(svg.matches("<g id=\"item-").count(), 6);
}

#[test]
fn test_wheel_file_from_disk() {
    let dir = std::env::temp_dir().join(format!("wheel-layout-test-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("wheel.toml");
    fs::write(&path, "[wheel]\nspacing = 2.0\n").unwrap();

    let file = WheelFile::from_file(&path).unwrap();
    assert_eq!(file.wheel, WheelParams::default().with_spacing(2.0));
    assert_eq!(file.count, None);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_wheel_file_errors() {
    assert!(matches!(
        WheelFile::from_str("[wheel]\nmin_inner_radius = -1.0"),
        Err(ConfigError::Invalid(_))
    ));
    assert!(matches!(
        WheelFile::from_str("[wheel]\nitem_size = \"big\""),
        Err(ConfigError::ParseError(_))
    ));
}

#[test]
fn test_render_rejects_non_finite() {
    let config = RenderConfig::new().with_wheel(WheelParams::default().with_angle_offset(f64::NAN));
    let err = render_with_config(2, config).unwrap_err();
    assert!(matches!(err, RenderError::Layout(_)));
    assert_eq!(
        err.to_string(),
        "layout error: parameter 'angle_offset' must be finite, got NaN"
    );
}

#[test]
fn test_panel_measure_then_arrange() {
    let mut panel = WheelPanel::with_items(WheelParams::default(), vec![Slot::default(); 4]);

    let size = panel.measure().unwrap();
    assert_eq!(size, Size::square(180.0));
    assert_eq!(panel.outer_radius(), 90.0);

    // The host may arrange in a larger area; the ring is centered in it
    panel.arrange(Size::square(200.0)).unwrap();
    assert_eq!(
        panel.items()[0],
        Slot {
            bounds: Some(BoundingBox::new(90.0, 30.0, 20.0, 20.0)),
            angle: Some(0.0),
        }
    );
    assert!(panel.items().iter().all(|s| s.angle.is_some()));
}

#[test]
fn test_panel_tracks_item_changes() {
    let mut panel: WheelPanel<Slot> = WheelPanel::new(WheelParams::default());
    assert_eq!(panel.update_layout().unwrap(), Size::square(180.0));

    for _ in 0..40 {
        panel.push(Slot::default());
    }
    let size = panel.update_layout().unwrap();
    // 40 slots of 30 need an inner radius of 1200 / 2π
    let expected = 2.0 * (1200.0 / std::f64::consts::TAU + 40.0);
    assert!((size.width - expected).abs() < 1e-9);
    assert_eq!(panel.items().len(), 40);
}

#[test]
fn test_json_output_shape() {
    let layout = wheel_layout::layout::compute(2, &WheelParams::default()).unwrap();
    let json = serde_json::to_value(&layout).unwrap();
    assert_eq!(json["container_size"]["width"], 180.0);
    assert_eq!(json["placements"].as_array().unwrap().len(), 2);
    assert_eq!(json["placements"][0]["bounds"]["x"], 80.0);
    assert_eq!(json["geometry"]["outer_radius"], 90.0);
}

#[test]
fn test_svg_config_roundtrips_through_render() {
    let config = RenderConfig::new().with_svg(SvgConfig::new().with_class_prefix("menu-"));
    let svg = render_with_config(1, config).unwrap();
    assert!(svg.contains(r#"class="menu-item""#));
}
