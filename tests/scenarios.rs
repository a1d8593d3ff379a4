use chart_trend::{estimate_slope, Direction, LineSegment, TimeframeResult};

fn classify(segments: &[LineSegment]) -> TimeframeResult {
    let est = estimate_slope(segments);
    TimeframeResult::from_estimate(est.slope, est.confidence)
}

#[test]
fn three_rising_segments_classify_up() {
    let segments = [
        LineSegment::new(0, 60, 20, 20),
        LineSegment::new(10, 90, 40, 30),
        LineSegment::new(50, 45, 60, 25),
    ];
    let r = classify(&segments);
    assert_eq!(r.slope, -2.0);
    assert_eq!(r.confidence, 30.0);
    assert_eq!(r.direction, Direction::Up);
}

#[test]
fn fifteen_mixed_segments_saturate_and_classify_down() {
    // slopes 1.0 and 2.0 alternating (seven each) plus one 1.5
    let mut segments: Vec<LineSegment> = (0..14)
        .map(|k| {
            let dy = if k % 2 == 0 { 10 } else { 20 };
            LineSegment::new(k, 0, k + 10, dy)
        })
        .collect();
    segments.push(LineSegment::new(0, 0, 20, 30));
    let r = classify(&segments);
    assert_eq!(r.slope, 1.5);
    assert_eq!(r.confidence, 100.0);
    assert_eq!(r.direction, Direction::Down);
}

#[test]
fn only_vertical_segments_match_empty_set() {
    let verticals = [LineSegment::new(5, 0, 5, 30), LineSegment::new(7, 2, 7, 40)];
    assert_eq!(classify(&verticals), classify(&[]));
    let r = classify(&verticals);
    assert_eq!((r.slope, r.confidence), (0.0, 0.0));
    assert_eq!(r.direction, Direction::Down);
}
