mod common;

use common::{init_logger, ready_explorer, sample_dataset, sample_shapes, SAMPLE_CONTENT};
use explorer_common::{
    frame, BBox, Effect, Explorer, ExplorerConfig, ExplorerError, Fill, KeyCode, MapSurface,
    TaskKind,
};

/// Records what a rendering surface would have been asked to do.
#[derive(Default)]
struct RecordingSurface {
    effects: Vec<Effect>,
}

impl MapSurface for RecordingSurface {
    fn apply(&mut self, effect: &Effect) {
        self.effects.push(effect.clone());
    }
}

fn transforms(effects: &[Effect]) -> Vec<(explorer_common::ViewportTransform, u64)> {
    effects
        .iter()
        .filter_map(|e| match e {
            Effect::Transform {
                transform,
                duration_ms,
            } => Some((*transform, *duration_ms)),
            _ => None,
        })
        .collect()
}

#[test]
fn test_catalog_from_sample_map() {
    let explorer = ready_explorer();
    let names: Vec<_> = explorer
        .catalog()
        .unwrap()
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "Antarctica",
            "Brazil",
            "Canada",
            "France",
            "French Guiana",
            "French Polynesia",
            "Germany",
            "ocean outline",
            "Ukraine",
            "United Kingdom",
            "United States",
        ]
    );
}

#[test]
fn test_full_selection_sequence() {
    init_logger();
    let mut explorer = ready_explorer();
    let mut surface = RecordingSurface::default();

    surface.apply_all(&explorer.select_by_name("canada", 1_000).unwrap());
    surface.apply_all(&explorer.run_due(1_100));
    surface.apply_all(&explorer.run_due(1_800));

    let kinds: Vec<&str> = surface
        .effects
        .iter()
        .map(|e| match e {
            Effect::Paint { .. } => "paint",
            Effect::ShowCountry { .. } => "show",
            Effect::Schedule { .. } => "schedule",
            Effect::Transform { .. } => "transform",
            Effect::ScrollToContent => "scroll",
            _ => "other",
        })
        .collect();
    assert_eq!(
        kinds,
        vec!["paint", "paint", "show", "schedule", "schedule", "transform", "scroll"]
    );

    let Effect::ShowCountry { name, playlist } = &surface.effects[2] else {
        panic!("expected country panel");
    };
    assert_eq!(name, "Canada");
    let playlist = playlist.as_ref().unwrap();
    assert_eq!(playlist.items.len(), 3);
    assert_eq!(playlist.active, 0);

    let expected = frame(
        &[
            BBox::new(150.0, 60.0, 420.0, 230.0),
            BBox::new(380.0, 10.0, 160.0, 90.0),
        ],
        explorer.config().canvas,
        explorer.config().zoom,
        explorer.config().margin_factor,
    )
    .unwrap();
    assert_eq!(transforms(&surface.effects), vec![(expected, 750)]);
    assert_eq!(explorer.transform(), expected);
}

#[test]
fn test_scheduled_delays_follow_config() {
    let mut explorer = ready_explorer();
    let effects = explorer.select_by_name("Brazil", 5_000).unwrap();
    let tasks: Vec<_> = effects
        .iter()
        .filter_map(|e| match e {
            Effect::Schedule { task } => Some(*task),
            _ => None,
        })
        .collect();
    assert_eq!(tasks.len(), 2);
    assert_eq!((tasks[0].kind, tasks[0].delay_ms), (TaskKind::Frame, 100));
    assert_eq!(
        (tasks[1].kind, tasks[1].delay_ms),
        (TaskKind::ScrollIntoView, 800)
    );
    assert_eq!(tasks[0].due_at_ms, 5_100);
}

#[test]
fn test_fast_reselection_drops_stale_zoom() {
    let mut explorer = ready_explorer();
    explorer.select_by_name("Canada", 0).unwrap();
    explorer.select_by_name("United States", 50).unwrap();
    let effects = explorer.run_due(u64::MAX);

    let expected = frame(
        &[BBox::new(170.0, 250.0, 390.0, 160.0)],
        explorer.config().canvas,
        explorer.config().zoom,
        explorer.config().margin_factor,
    )
    .unwrap();
    assert_eq!(transforms(&effects), vec![(expected, 750)]);
    assert_eq!(
        effects
            .iter()
            .filter(|e| matches!(e, Effect::ScrollToContent))
            .count(),
        1
    );
}

#[test]
fn test_click_on_secondary_part_selects_country() {
    let mut explorer = ready_explorer();
    explorer.click_shape(1, 0).unwrap();
    assert_eq!(explorer.selection().unwrap().name, "Canada");

    // Class-only Brazil fragment: identifier containment with "BR".
    explorer.click_shape(5, 0).unwrap();
    assert_eq!(explorer.selection().unwrap().name, "Brazil");

    // Anonymous path: nothing to resolve.
    assert!(matches!(
        explorer.click_shape(14, 0),
        Err(ExplorerError::NoMatch(_))
    ));
    assert_eq!(explorer.selection().unwrap().name, "Brazil");
}

#[test]
fn test_country_without_geometry_still_selects() {
    let mut explorer = ready_explorer();
    explorer.select_by_name("antarctica", 0).unwrap();
    let effects = explorer.run_due(u64::MAX);
    assert!(transforms(&effects).is_empty());
    assert_eq!(effects, vec![Effect::ScrollToContent]);
}

#[test]
fn test_country_without_songs() {
    let mut explorer = ready_explorer();
    let effects = explorer.select_by_name("France", 0).unwrap();
    assert!(effects.contains(&Effect::ShowCountry {
        name: "France".to_string(),
        playlist: None,
    }));
    assert!(explorer.playlist().is_none());
}

#[test]
fn test_content_failure_does_not_block_selection() {
    let mut explorer = Explorer::new(ExplorerConfig::default()).unwrap();
    explorer.load_shapes(sample_shapes());
    assert_eq!(
        explorer.select_by_name("Canada", 0),
        Err(ExplorerError::NotReady)
    );
    assert!(matches!(
        explorer.load_content("Not Found"),
        Err(ExplorerError::DatasetUnavailable(_))
    ));
    let effects = explorer.select_by_name("Canada", 0).unwrap();
    assert!(effects.contains(&Effect::ShowCountry {
        name: "Canada".to_string(),
        playlist: None,
    }));
}

#[test]
fn test_content_loaded_before_shapes() {
    let mut explorer = Explorer::new(ExplorerConfig::default()).unwrap();
    assert_eq!(explorer.load_content(SAMPLE_CONTENT), Ok(3));
    assert!(!explorer.is_ready());
    explorer.load_shapes(sample_shapes());
    assert!(explorer.is_ready());
    // France is listed without songs: present, but never shown.
    let dataset = sample_dataset();
    assert_eq!(dataset.len(), 3);
    assert!(dataset.lookup("France").is_none());
}

#[test]
fn test_search_box_session() {
    let mut explorer = ready_explorer();

    let effects = explorer.search_input("fren");
    let Some(Effect::ShowSuggestions { items }) = effects.first() else {
        panic!("expected suggestions, got {:?}", effects);
    };
    let names: Vec<_> = items.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["French Guiana", "French Polynesia"]);
    // French Guiana and French Polynesia light up while typing.
    assert_eq!(explorer.fill_of(7), Some(Fill::Hover));
    assert_eq!(explorer.fill_of(8), Some(Fill::Hover));
    assert_eq!(explorer.fill_of(6), Some(Fill::Default));

    assert_eq!(
        explorer.key_down(KeyCode::Up, 0).unwrap(),
        vec![Effect::HighlightSuggestion { index: 1 }]
    );
    assert_eq!(
        explorer.key_down(KeyCode::Down, 0).unwrap(),
        vec![Effect::HighlightSuggestion { index: 0 }]
    );
    assert_eq!(
        explorer.key_down(KeyCode::Escape, 0).unwrap(),
        vec![Effect::HideSuggestions]
    );
    assert!(!explorer.suggestions().is_visible());

    // Enter without a highlighted entry searches the typed text.
    explorer.search_input("guiana");
    explorer.key_down(KeyCode::Enter, 0).unwrap();
    assert_eq!(explorer.selection().unwrap().name, "French Guiana");
    assert_eq!(explorer.fill_of(7), Some(Fill::Selected));
}

#[test]
fn test_suggestion_click() {
    let mut explorer = ready_explorer();
    explorer.search_input("united");
    assert_eq!(explorer.hover_suggestion(1), vec![Effect::HighlightSuggestion { index: 1 }]);
    let effects = explorer.choose_suggestion(1, 0).unwrap();
    assert_eq!(
        effects.first(),
        Some(&Effect::SetSearchText {
            text: "United States".to_string()
        })
    );
    assert_eq!(explorer.selection().unwrap().identifier, "US");
    assert!(explorer.choose_suggestion(0, 0).is_err());
}

#[test]
fn test_zoom_buttons_stay_in_bounds() {
    let mut explorer = ready_explorer();
    for _ in 0..10 {
        explorer.zoom_in();
    }
    assert_eq!(explorer.transform().scale, 8.0);
    let effects = explorer.zoom_out();
    assert_eq!(transforms(&effects)[0].1, 300);
    for _ in 0..10 {
        explorer.zoom_out();
    }
    assert_eq!(explorer.transform().scale, 0.5);
    explorer.reset_zoom();
    assert_eq!(explorer.transform().scale, 1.0);
}

#[test]
fn test_effects_serialize_for_the_browser() {
    let mut explorer = ready_explorer();
    let effects = explorer.select_by_name("Brazil", 0).unwrap();
    let json = serde_json::to_value(&effects).unwrap();
    assert_eq!(json[0]["type"], "paint");
    assert_eq!(json[1]["fill"], "selected");
    assert_eq!(json[1]["color"], "#5F1111");
    assert_eq!(json[2]["type"], "showCountry");
    assert_eq!(json[2]["playlist"]["items"][0]["title"], "Samba do Mar");
    assert_eq!(json[3]["type"], "schedule");
    assert_eq!(json[3]["task"]["kind"], "frame");
    assert_eq!(json[3]["task"]["dueAtMs"], 100);
}
