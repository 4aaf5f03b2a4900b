//! Integration tests for the conversion pipeline with a mock backend.

use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};

use image::{Rgb, RgbImage};
use snapcode::{
    ConvertOptions, Converter, Error, RenderBackend, Result, SnapCode, StyledDocument, Theme,
};
use tempfile::TempDir;

const BG: Rgb<u8> = Rgb([0x1e, 0x1e, 0x1e]);

/// Mock backend returning prepared pages.
struct MockBackend {
    pages: Vec<RgbImage>,
}

impl MockBackend {
    fn new(pages: Vec<RgbImage>) -> Self {
        Self { pages }
    }
}

impl RenderBackend for MockBackend {
    fn render_to_pages(&self, _document: &StyledDocument) -> Result<Vec<RgbImage>> {
        Ok(self.pages.clone())
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Mock backend that records the document it was asked to render.
struct CapturingBackend {
    pages: Vec<RgbImage>,
    seen: Arc<Mutex<Option<String>>>,
}

impl RenderBackend for CapturingBackend {
    fn render_to_pages(&self, document: &StyledDocument) -> Result<Vec<RgbImage>> {
        *self.seen.lock().unwrap() = Some(document.as_str().to_string());
        Ok(self.pages.clone())
    }

    fn name(&self) -> &str {
        "capture"
    }
}

/// Backend that always reports a missing toolchain.
struct UnavailableBackend;

impl RenderBackend for UnavailableBackend {
    fn render_to_pages(&self, _document: &StyledDocument) -> Result<Vec<RgbImage>> {
        Err(Error::RenderingUnavailable("wkhtmltopdf missing".into()))
    }

    fn name(&self) -> &str {
        "unavailable"
    }
}

fn page_with_content() -> RgbImage {
    let mut img = RgbImage::from_pixel(200, 150, BG);
    for y in 40..80 {
        for x in 30..120 {
            img.put_pixel(x, y, Rgb([0xd4, 0xd4, 0xd4]));
        }
    }
    img
}

fn write_source(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("demo_script.py");
    fs::write(&path, "def greet(name):\n    print(name)\n").unwrap();
    path
}

#[test]
fn test_convert_saves_one_file_per_page_in_order() {
    let dir = TempDir::new().unwrap();
    let input = write_source(dir.path());

    let pages = vec![page_with_content(), page_with_content()];
    let options = ConvertOptions::new().with_output_dir(dir.path());
    let converter =
        Converter::with_options(options).with_backend(Box::new(MockBackend::new(pages)));

    let saved = converter.convert(&input, "shot").unwrap();
    assert_eq!(saved.len(), 2);
    assert_eq!(saved[0].file_name().unwrap(), "shot_0.jpg");
    assert_eq!(saved[1].file_name().unwrap(), "shot_1.jpg");
    assert!(saved.iter().all(|p| p.exists()));
}

#[test]
fn test_saved_pages_are_autocropped() {
    let dir = TempDir::new().unwrap();
    let input = write_source(dir.path());

    let options = ConvertOptions::new().with_output_dir(dir.path());
    let converter = Converter::with_options(options)
        .with_backend(Box::new(MockBackend::new(vec![page_with_content()])));

    let saved = converter.convert(&input, "shot").unwrap();
    let img = image::open(&saved[0]).unwrap();
    // Content is 90x40; the saved page is that plus 20px padding per side.
    assert_eq!(img.width(), 90 + 40);
    assert_eq!(img.height(), 40 + 40);
}

#[test]
fn test_backend_receives_composed_document() {
    let dir = TempDir::new().unwrap();
    let input = write_source(dir.path());
    let seen = Arc::new(Mutex::new(None::<String>));

    let options = ConvertOptions::new().with_output_dir(dir.path());
    let converter = Converter::with_options(options).with_backend(Box::new(CapturingBackend {
        pages: vec![page_with_content()],
        seen: seen.clone(),
    }));
    converter.convert(&input, "shot").unwrap();

    let html = seen.lock().unwrap().take().unwrap();
    assert!(html.contains("def"));
    assert!(html.contains("line-num"));
    assert!(html.contains(&Theme::dark().bg));
}

#[test]
fn test_missing_input_creates_no_artifacts() {
    let dir = TempDir::new().unwrap();
    let options = ConvertOptions::new().with_output_dir(dir.path());
    let converter = Converter::with_options(options)
        .with_backend(Box::new(MockBackend::new(vec![page_with_content()])));

    let result = converter.convert(&dir.path().join("missing.py"), "shot");
    assert!(matches!(result, Err(Error::InputNotFound(_))));

    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert!(entries.is_empty(), "no output or transient files expected");
}

#[test]
fn test_rendering_unavailable_is_typed_and_produces_no_output() {
    let dir = TempDir::new().unwrap();
    let input = write_source(dir.path());

    let options = ConvertOptions::new().with_output_dir(dir.path());
    let converter = Converter::with_options(options).with_backend(Box::new(UnavailableBackend));

    let result = converter.convert(&input, "shot");
    assert!(matches!(result, Err(Error::RenderingUnavailable(_))));

    let outputs: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "jpg"))
        .collect();
    assert!(outputs.is_empty());
}

#[test]
fn test_snapcode_builder_with_mock_backend() {
    let dir = TempDir::new().unwrap();
    let input = write_source(dir.path());

    let saved = SnapCode::new()
        .with_output_dir(dir.path())
        .with_backend(Box::new(MockBackend::new(vec![page_with_content()])))
        .convert(&input, "builder_shot")
        .unwrap();

    assert_eq!(saved.len(), 1);
    assert!(saved[0].ends_with("builder_shot_0.jpg"));
}
