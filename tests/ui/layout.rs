use ratatui::layout::Rect;
use stickies::ui::LayoutManager;

#[test]
fn test_main_layout_splits_canvas_and_status() {
    let area = Rect::new(0, 0, 80, 24);
    let areas = LayoutManager::main_layout(area);

    assert_eq!(areas[0], Rect::new(0, 0, 80, 23));
    assert_eq!(areas[1], Rect::new(0, 23, 80, 1));
}

#[test]
fn test_main_layout_stays_inside_tiny_areas() {
    for height in [0, 1, 2] {
        let area = Rect::new(0, 0, 80, height);
        let areas = LayoutManager::main_layout(area);
        for rect in &areas {
            assert!(rect.bottom() <= area.bottom(), "height {}: {:?} leaves the frame", height, rect);
        }
    }
}

#[test]
fn test_note_window_rects_stay_inside_canvas() {
    let canvas = Rect::new(0, 1, 80, 23);
    for index in 0..40 {
        let rect = LayoutManager::note_window_rect(index, canvas, 40, 12);
        assert!(rect.right() <= canvas.right(), "window {} overflows right", index);
        assert!(rect.bottom() <= canvas.bottom(), "window {} overflows bottom", index);
    }
}

#[test]
fn test_note_windows_cascade() {
    let canvas = Rect::new(0, 0, 80, 24);
    let first = LayoutManager::note_window_rect(0, canvas, 40, 12);
    let second = LayoutManager::note_window_rect(1, canvas, 40, 12);

    assert_ne!(first, second, "consecutive windows should not stack exactly");
}
