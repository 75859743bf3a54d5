use crate::config::TorusConfig;
use crate::ellipse::Ellipse;

/// Half-angle, in the under band's parameter space, to trim from each side
/// of a crossing so the over band's finite thickness fully occludes the
/// under band there.
///
/// The over band's thickness projects across the under band's path with
/// width `thickness / sin(angle between tangents)`: the shallower the
/// crossing, the wider the occluded stretch. The projected width (plus a
/// fixed visual margin) is halved and converted from canvas units to a
/// parameter delta by dividing by the under band's local tangent speed.
pub fn gap_half_angle(
    under: &Ellipse,
    over: &Ellipse,
    t_under: f64,
    t_over: f64,
    config: &TorusConfig,
) -> f64 {
    let dot = under.tangent(t_under).dot(&over.tangent(t_over)).abs();
    // Clamp before acos: the dot of two unit vectors can overshoot 1 in
    // floating point.
    let cross_angle = dot.min(1.).acos();
    // Near-parallel tangents would blow up the projection; floor the sine.
    let sin_cross = if cross_angle > config.min_tangent_angle {
        cross_angle.sin()
    } else {
        config.min_tangent_angle
    };
    let projected_width = config.thickness / sin_cross;
    (projected_width / 2. + config.gap_margin) / under.speed(t_under)
}
