//! Formatting helpers for presentation.

/// Inline style for a staggered entrance animation: `base + index * step` seconds.
pub fn stagger_style(base_secs: f32, step_secs: f32, index: usize) -> String {
    let delay = base_secs + step_secs * index as f32;
    format!("animation-delay: {delay:.1}s")
}
