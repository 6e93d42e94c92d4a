// End-to-end tests for PpmViewer::view against real files on disk
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use ppm_viewer::report::Report;
use ppm_viewer::viewer::{
    DEFAULT_INPUT, DisplayStatus, ErrorKind, ImageDisplay, ImageHandle, OUTPUT_FILE_NAME,
    PpmViewer, ViewError, ViewerConfig,
};
use proptest::prelude::*;

#[derive(Clone, Default)]
struct RecordingDisplay {
    shown: Rc<RefCell<Vec<(u32, u32)>>>,
}

impl ImageDisplay for RecordingDisplay {
    fn show(&self, image: &ImageHandle) -> Result<(), ViewError> {
        self.shown.borrow_mut().push((image.width(), image.height()));
        Ok(())
    }
}

struct BrokenDisplay;

impl ImageDisplay for BrokenDisplay {
    fn show(&self, _image: &ImageHandle) -> Result<(), ViewError> {
        Err(ViewError::Display("no viewer available".to_string()))
    }
}

fn config_in(dir: &Path) -> ViewerConfig {
    ViewerConfig {
        output_dir: dir.join("output"),
        ..ViewerConfig::default()
    }
}

fn binary_ppm(width: u32, height: u32, pixels: &[u8]) -> Vec<u8> {
    let mut bytes = format!("P6\n{} {}\n255\n", width, height).into_bytes();
    bytes.extend_from_slice(pixels);
    bytes
}

fn sample_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("samples").join("test3x2.ppm")
}

#[test]
fn missing_input_reports_not_found_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let output = config.output_path();
    let viewer = PpmViewer::with_display(config, RecordingDisplay::default());
    let missing = dir.path().join("nope.ppm");

    let err = viewer.view(Some(&missing)).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(matches!(&err, ViewError::NotFound { path } if path == &missing));
    assert!(!output.exists());
}

#[test]
fn sample_round_trips_to_identical_png() {
    let dir = tempfile::tempdir().unwrap();
    let display = RecordingDisplay::default();
    let viewer = PpmViewer::with_display(config_in(dir.path()), display.clone());
    let input = sample_path();

    let result = viewer.view(Some(&input));
    let outcome = result.as_ref().unwrap();

    assert_eq!((outcome.width, outcome.height), (3, 2));
    assert_eq!(outcome.output, dir.path().join("output").join(OUTPUT_FILE_NAME));
    assert_eq!(outcome.display, DisplayStatus::Shown);
    assert_eq!(*display.shown.borrow(), vec![(3, 2)]);

    let png = image::open(&outcome.output).unwrap().to_rgb8();
    assert_eq!(png.dimensions(), (3, 2));
    assert_eq!(
        png.into_raw(),
        vec![
            255, 0, 0, 0, 255, 0, 0, 0, 255, //
            255, 255, 0, 0, 255, 255, 128, 128, 128,
        ]
    );

    let report = Report::from_view(&input, &result);
    assert_eq!(
        report.stdout,
        vec![format!("Imagen guardada como {}", outcome.output.display())]
    );
    assert_eq!(report.exit_code, 0);
}

#[test]
fn default_input_matches_explicit_default() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("render.ppm");
    std::fs::write(&input, binary_ppm(2, 1, &[9, 8, 7, 6, 5, 4])).unwrap();

    let config = ViewerConfig {
        default_input: input.clone(),
        display: false,
        ..config_in(dir.path())
    };
    let viewer = PpmViewer::with_display(config, RecordingDisplay::default());

    let implicit = viewer.view(None).unwrap();
    let implicit_bytes = std::fs::read(&implicit.output).unwrap();
    let explicit = viewer.view(Some(&input)).unwrap();
    let explicit_bytes = std::fs::read(&explicit.output).unwrap();

    assert_eq!(implicit, explicit);
    assert_eq!(implicit_bytes, explicit_bytes);
}

#[test]
fn stock_default_input_is_output_ppm() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    assert_eq!(config.resolve_input(None), Path::new(DEFAULT_INPUT));
    let viewer = PpmViewer::with_display(config, RecordingDisplay::default());

    // 工作目录里可能有也可能没有渲染输出，只要求两种调用结果一致
    match (viewer.view(None), viewer.view(Some(Path::new(DEFAULT_INPUT)))) {
        (Ok(implicit), Ok(explicit)) => {
            assert_eq!(implicit, explicit);
            assert_eq!(implicit.input, Path::new(DEFAULT_INPUT));
        }
        (Err(implicit), Err(explicit)) => {
            assert_eq!(implicit.kind(), explicit.kind());
            assert_eq!(implicit.to_string(), explicit.to_string());
            if let ViewError::NotFound { path } = implicit {
                assert_eq!(path, Path::new(DEFAULT_INPUT));
            }
        }
        (implicit, explicit) => panic!("diverging results: {implicit:?} vs {explicit:?}"),
    }
}

#[test]
fn corrupt_input_fails_and_keeps_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let output = config.output_path();
    std::fs::create_dir_all(output.parent().unwrap()).unwrap();
    std::fs::write(&output, b"previous run").unwrap();

    let corrupt = dir.path().join("corrupt.ppm");
    std::fs::write(&corrupt, b"P6\n10 10\n255\nshort").unwrap();

    let display = RecordingDisplay::default();
    let viewer = PpmViewer::with_display(config, display.clone());
    let err = viewer.view(Some(&corrupt)).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Operation);
    assert!(matches!(err, ViewError::Decode { .. }));
    assert!(display.shown.borrow().is_empty());
    assert_eq!(std::fs::read(&output).unwrap(), b"previous run");
}

#[test]
fn not_an_image_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let output = config.output_path();
    let input = dir.path().join("notes.ppm");
    std::fs::write(&input, "just some text, no pixels here").unwrap();

    let viewer = PpmViewer::with_display(config, RecordingDisplay::default());
    let result = viewer.view(Some(&input));

    assert!(matches!(result, Err(ViewError::Decode { .. })));
    assert!(!output.exists());
    assert_eq!(Report::from_view(&input, &result).exit_code, 1);
}

#[test]
fn repeated_runs_overwrite_with_identical_content() {
    let dir = tempfile::tempdir().unwrap();
    let viewer = PpmViewer::with_display(config_in(dir.path()), RecordingDisplay::default());
    let input = sample_path();

    let first = viewer.view(Some(&input)).unwrap();
    let first_bytes = std::fs::read(&first.output).unwrap();
    let second = viewer.view(Some(&input)).unwrap();
    let second_bytes = std::fs::read(&second.output).unwrap();

    assert_eq!(first.output, second.output);
    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn display_failure_still_saves() {
    let dir = tempfile::tempdir().unwrap();
    let viewer = PpmViewer::with_display(config_in(dir.path()), BrokenDisplay);

    let outcome = viewer.view(Some(&sample_path())).unwrap();

    assert!(matches!(outcome.display, DisplayStatus::Failed(ref d) if d.contains("no viewer")));
    assert!(outcome.output.exists());
}

#[test]
fn save_failure_is_an_operation_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"x").unwrap();
    let config = ViewerConfig {
        output_dir: blocker.clone(),
        ..ViewerConfig::default()
    };

    let viewer = PpmViewer::with_display(config, RecordingDisplay::default());
    let err = viewer.view(Some(&sample_path())).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Operation);
    assert!(matches!(err, ViewError::Save { path, .. } if path == blocker.join(OUTPUT_FILE_NAME)));
}

#[test]
fn ascii_ppm_from_renderer_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("output.ppm");
    std::fs::write(&input, "P3\n2 1\n255\n12 34 56 78 90 123 \n").unwrap();

    let viewer = PpmViewer::with_display(config_in(dir.path()), RecordingDisplay::default());
    let outcome = viewer.view(Some(&input)).unwrap();

    let png = image::open(&outcome.output).unwrap().to_rgb8();
    assert_eq!(png.into_raw(), vec![12, 34, 56, 78, 90, 123]);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn any_binary_ppm_survives_png_conversion(
        (width, height, pixels) in (1u32..12, 1u32..12).prop_flat_map(|(w, h)| {
            (Just(w), Just(h), prop::collection::vec(any::<u8>(), (w * h * 3) as usize))
        })
    ) {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.ppm");
        std::fs::write(&input, binary_ppm(width, height, &pixels)).unwrap();

        let viewer = PpmViewer::with_display(config_in(dir.path()), RecordingDisplay::default());
        let outcome = viewer.view(Some(&input)).unwrap();

        let png = image::open(&outcome.output).unwrap().to_rgb8();
        prop_assert_eq!(png.dimensions(), (width, height));
        prop_assert_eq!(png.into_raw(), pixels);
    }
}
