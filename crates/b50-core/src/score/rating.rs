/// Achievement beyond this value earns no additional rating.
pub const ACHIEVEMENT_CAP: f64 = 100.5;

/// Coefficient for achievements that fall through every threshold.
pub const MAX_RANK_COEFFICIENT: f64 = 22.4;

/// (exclusive upper bound, coefficient), ascending by bound.
pub const RANK_COEFFICIENTS: [(f64, f64); 17] = [
    (10.0, 0.0),
    (20.0, 1.6),
    (30.0, 3.2),
    (40.0, 4.8),
    (50.0, 6.4),
    (60.0, 8.0),
    (70.0, 9.6),
    (75.0, 11.2),
    (80.0, 12.0),
    (90.0, 13.6),
    (94.0, 15.2),
    (97.0, 16.8),
    (98.0, 20.0),
    (99.0, 20.3),
    (99.5, 20.8),
    (100.0, 21.1),
    (100.5, 21.6),
];

/// Rank coefficient for an achievement percentage.
///
/// Uses the first bound the achievement is strictly below. Anything past the
/// last bound (including NaN) gets `MAX_RANK_COEFFICIENT`.
pub fn rank_coefficient(achievement: f64) -> f64 {
    RANK_COEFFICIENTS
        .iter()
        .find(|&&(bound, _)| achievement < bound)
        .map(|&(_, coefficient)| coefficient)
        .unwrap_or(MAX_RANK_COEFFICIENT)
}

/// Rating of a single play.
///
/// `constant` is the chart constant, `achievement` a percentage (100.5 = SSS+).
/// The coefficient is picked from the unclamped achievement; the scaling
/// factor is clamped to `ACHIEVEMENT_CAP`.
pub fn compute_rating(constant: f64, achievement: f64) -> u64 {
    let coefficient = rank_coefficient(achievement);
    let clamped = achievement.min(ACHIEVEMENT_CAP);

    // Float → int casts saturate, so a negative product lands on 0
    (constant * (clamped / 100.0) * coefficient).floor() as u64
}
