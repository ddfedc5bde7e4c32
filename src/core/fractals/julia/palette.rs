/// Stop positions of the Julia palette, in `0.0..=1.0`.
pub const PALETTE_STOPS: [f64; 6] = [0.0, 0.16, 0.42, 0.6425, 0.8575, 1.0];

/// RGB colour at each stop. The last colour equals the first so the palette
/// wraps seamlessly.
pub const PALETTE_COLOURS: [[f64; 3]; 6] = [
    [0.0, 7.0, 100.0],
    [32.0, 107.0, 203.0],
    [237.0, 255.0, 255.0],
    [255.0, 170.0, 0.0],
    [0.0, 2.0, 0.0],
    [0.0, 7.0, 100.0],
];

/// Samples the palette at `t`, wrapping `t` into `[0, 1)`.
#[must_use]
pub fn sample_palette(t: f64) -> [f64; 3] {
    let t = t.rem_euclid(1.0);
    let segment = PALETTE_STOPS
        .windows(2)
        .position(|stops| t <= stops[1])
        .unwrap_or(PALETTE_STOPS.len() - 2);

    let (start, end) = (PALETTE_STOPS[segment], PALETTE_STOPS[segment + 1]);
    let local_t = (t - start) / (end - start);
    let (from, to) = (PALETTE_COLOURS[segment], PALETTE_COLOURS[segment + 1]);

    [
        from[0] + (to[0] - from[0]) * local_t,
        from[1] + (to[1] - from[1]) * local_t,
        from[2] + (to[2] - from[2]) * local_t,
    ]
}
