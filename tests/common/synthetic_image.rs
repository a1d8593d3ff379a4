/// Generates a white RGB canvas with a dark polyline, resembling a bare
/// line chart. `points` are pixel coordinates with y growing downward.
pub fn line_chart_rgb(
    width: usize,
    height: usize,
    points: &[(i32, i32)],
    thickness: i32,
) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(points.len() >= 2, "a chart needs at least two points");

    let mut img = vec![255u8; width * height * 3];
    for pair in points.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let steps = (to.0 - from.0).abs().max((to.1 - from.1).abs()).max(1);
        for s in 0..=steps {
            let x = from.0 + (to.0 - from.0) * s / steps;
            let y = from.1 + (to.1 - from.1) * s / steps;
            for dy in -(thickness / 2)..=(thickness / 2) {
                let yy = y + dy;
                if x < 0 || yy < 0 || x as usize >= width || yy as usize >= height {
                    continue;
                }
                let i = (yy as usize * width + x as usize) * 3;
                img[i..i + 3].copy_from_slice(&[20, 40, 200]);
            }
        }
    }
    img
}
