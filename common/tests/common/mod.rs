//! Shared fixtures for the explorer-common integration tests

#![allow(dead_code)]

use explorer_common::{ContentDataset, Explorer, ExplorerConfig, Shape};

/// A small shape dump: multi-part Canada, duplicate Brazil labels,
/// an unnamed decoration path and a shape without geometry.
pub const SAMPLE_SHAPES: &str = r#"[
    {"id": "CA", "name": "Canada", "bbox": {"x": 150, "y": 60, "width": 420, "height": 230}},
    {"id": "CA-NU", "name": "Canada", "bbox": {"x": 380, "y": 10, "width": 160, "height": 90}},
    {"id": "US", "name": "United States", "bbox": {"x": 170, "y": 250, "width": 390, "height": 160}},
    {"id": "BR", "name": "Brazil", "bbox": {"x": 620, "y": 470, "width": 190, "height": 200}},
    {"id": "BR-island", "name": "BRAZIL", "bbox": {"x": 700, "y": 480, "width": 3, "height": 3}},
    {"class": "brazil_shape", "data-name": "brazil", "bbox": {"x": 610, "y": 460, "width": 5, "height": 5}},
    {"id": "FR", "title": "France", "bbox": {"x": 980, "y": 230, "width": 40, "height": 40}},
    {"id": "GF", "name": "French Guiana", "bbox": {"x": 680, "y": 430, "width": 12, "height": 12}},
    {"id": "PF", "name": "French_Polynesia", "bbox": {"x": 90, "y": 520, "width": 8, "height": 8}},
    {"id": "DE", "name": "Germany", "bbox": {"x": 1010, "y": 200, "width": 40, "height": 45}},
    {"id": "GB", "name": "United Kingdom", "bbox": {"x": 950, "y": 170, "width": 40, "height": 60}},
    {"id": "UA", "name": "Ukraine", "bbox": {"x": 1120, "y": 210, "width": 90, "height": 50}},
    {"id": "AQ", "name": "Antarctica"},
    {"class": "ocean-outline"},
    {}
]"#;

pub const SAMPLE_CONTENT: &str = r#"{
    "countries": [
        {"name": "Canada", "top_songs": [
            {"title": "Northern Lights", "url": "https://www.youtube.com/embed/ca1"},
            {"title": "Prairie Wind", "url": "https://www.youtube.com/embed/ca2"},
            {"title": "Harbour Song", "url": "https://www.youtube.com/embed/ca3"}
        ]},
        {"name": "Brazil", "top_songs": [
            {"title": "Samba do Mar", "url": "https://www.youtube.com/embed/br1"}
        ]},
        {"name": "France", "top_songs": []}
    ]
}"#;

pub fn sample_shapes() -> Vec<Shape> {
    explorer_common::shapes_from_json(SAMPLE_SHAPES).expect("sample shapes parse")
}

/// An explorer with shapes and content loaded, ready for selection.
pub fn ready_explorer() -> Explorer {
    let mut explorer = Explorer::new(ExplorerConfig::default()).expect("default config");
    explorer.load_shapes(sample_shapes());
    explorer
        .load_content(SAMPLE_CONTENT)
        .expect("sample content parses");
    explorer
}

pub fn sample_dataset() -> ContentDataset {
    ContentDataset::from_json(SAMPLE_CONTENT).expect("sample content parses")
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
