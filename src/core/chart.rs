// ASIC ROI Calculator - Free and Open Source Software Statement
//
// This project, asic-roi, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/chart.rs
// Version: 1.0.1
//
// This file turns the chart dataset of an ROI result into donut chart
// geometry, located in the core subdirectory. Angles follow the usual pie
// convention: 0 degrees at 3 o'clock, increasing counter-clockwise.
//
// Tree Location:
// - src/core/chart.rs (pie/donut slice geometry)
// - Depends on: core/types, utils/format

use super::types::ChartEntry;
use crate::utils::format::FormatUtils;
use std::fmt::Write;

/// Size and position of the donut
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieLayout {
    pub width: f64,
    pub height: f64,
    pub cx: f64,
    pub cy: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    /// Distance of slice labels from the centre
    pub label_radius: f64,
}

impl Default for PieLayout {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 320.0,
            cx: 240.0,
            cy: 160.0,
            inner_radius: 60.0,
            outer_radius: 100.0,
            label_radius: 124.0,
        }
    }
}

impl PieLayout {
    /// Point at `radius` from the centre, `angle` degrees counter-clockwise from 3 o'clock
    pub fn polar(&self, radius: f64, angle: f64) -> (f64, f64) {
        let rad = angle.to_radians();
        (self.cx + radius * rad.cos(), self.cy - radius * rad.sin())
    }
}

/// One drawable slice
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub name: String,
    pub color: String,
    /// Entry value clamped at zero
    pub value: f64,
    /// Share of the total, 0..=100
    pub percent: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl PieSlice {
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }

    /// Outside label, e.g. `Investment: 99%`
    pub fn label(&self) -> String {
        format!("{}: {}", self.name, FormatUtils::format_percent(self.percent))
    }

    /// Hover text: name and dollar value
    pub fn tooltip(&self) -> String {
        format!("{}\n{}", self.name, FormatUtils::format_currency(self.value))
    }

    /// SVG path data for the ring segment
    ///
    /// Returns an empty string for zero-width slices. A full circle is split
    /// into two half-ring subpaths since one arc cannot start and end on the
    /// same point.
    pub fn path_data(&self, layout: &PieLayout) -> String {
        let sweep = self.sweep();
        if sweep <= f64::EPSILON {
            return String::new();
        }
        if sweep >= 360.0 - 1e-9 {
            let half = self.start_angle + 180.0;
            let mut path = ring_segment(layout, self.start_angle, half);
            path.push(' ');
            path.push_str(&ring_segment(layout, half, self.end_angle));
            return path;
        }
        ring_segment(layout, self.start_angle, self.end_angle)
    }
}

fn ring_segment(layout: &PieLayout, start: f64, end: f64) -> String {
    let large_arc = if end - start > 180.0 { 1 } else { 0 };
    let (ox1, oy1) = layout.polar(layout.outer_radius, start);
    let (ox2, oy2) = layout.polar(layout.outer_radius, end);
    let (ix2, iy2) = layout.polar(layout.inner_radius, end);
    let (ix1, iy1) = layout.polar(layout.inner_radius, start);

    let mut path = String::new();
    // Outer arc runs counter-clockwise on screen (sweep-flag 0), inner arc back (1)
    let _ = write!(
        path,
        "M {:.3} {:.3} A {r:.3} {r:.3} 0 {la} 0 {:.3} {:.3} L {:.3} {:.3} A {ir:.3} {ir:.3} 0 {la} 1 {:.3} {:.3} Z",
        ox1,
        oy1,
        ox2,
        oy2,
        ix2,
        iy2,
        ix1,
        iy1,
        r = layout.outer_radius,
        ir = layout.inner_radius,
        la = large_arc,
    );
    path
}

/// Lay the chart entries out as consecutive slices
///
/// Values are clamped at zero. When nothing is left to draw the result is
/// empty and the caller shows an empty ring.
pub fn pie_slices(entries: &[ChartEntry]) -> Vec<PieSlice> {
    let values: Vec<f64> = entries
        .iter()
        .map(|e| if e.value.is_finite() { e.value.max(0.0) } else { 0.0 })
        .collect();
    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut angle = 0.0;
    entries
        .iter()
        .zip(values)
        .map(|(entry, value)| {
            let share = value / total;
            let start_angle = angle;
            angle += share * 360.0;
            PieSlice {
                name: entry.name.clone(),
                color: entry.color.clone(),
                value,
                percent: share * 100.0,
                start_angle,
                end_angle: angle,
            }
        })
        .collect()
}


// Changelog:
// - v1.0.1 (2026-10-18): Slice labels round half percents up.
// - v1.0.0 (2026-10-18): Initial chart geometry.
//   - pie_slices with zero clamping and empty-ring fallback.
//   - Ring segment path data, labels and tooltips.
