// ASIC ROI Calculator - Free and Open Source Software Statement
//
// This project, asic-roi, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/web/components.rs
// Version: 1.0.1
//
// This file renders the HTML building blocks of the calculator page: labels,
// inputs, cards, the donut chart with its legend, and the footer. Every
// function returns a markup fragment; all caller text is escaped here.
//
// Tree Location:
// - src/web/components.rs (HTML fragments)
// - Depends on: core/chart, config, utils/format

use crate::config::{AppConfig, Theme};
use crate::core::chart::{PieLayout, pie_slices};
use crate::core::types::ChartEntry;
use crate::utils::format::escape_html;
use std::fmt::Write;

/// Label color variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LabelVariant {
    #[default]
    Default,
    Destructive,
    Success,
}

/// Label text size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LabelSize {
    #[default]
    Default,
    Sm,
    Lg,
}

/// CSS classes for a label variant and size
pub fn label_classes(variant: LabelVariant, size: LabelSize) -> String {
    let mut classes = String::from("label");
    match variant {
        LabelVariant::Default => {}
        LabelVariant::Destructive => classes.push_str(" label-destructive"),
        LabelVariant::Success => classes.push_str(" label-success"),
    }
    match size {
        LabelSize::Default => {}
        LabelSize::Sm => classes.push_str(" label-sm"),
        LabelSize::Lg => classes.push_str(" label-lg"),
    }
    classes
}

pub fn render_label(for_id: &str, text: &str, variant: LabelVariant, size: LabelSize) -> String {
    format!(
        r#"<label for="{}" class="{}">{}</label>"#,
        escape_html(for_id),
        label_classes(variant, size),
        escape_html(text)
    )
}

/// Label-styled text that is not tied to a form control
pub fn render_note(text: &str, variant: LabelVariant, size: LabelSize) -> String {
    format!(
        r#"<span class="{}">{}</span>"#,
        label_classes(variant, size),
        escape_html(text)
    )
}

/// Static description of one form input
#[derive(Debug, Clone, Copy)]
pub struct InputSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
    pub placeholder: &'static str,
    pub required: bool,
    pub min: Option<&'static str>,
    pub max: Option<&'static str>,
    pub step: Option<&'static str>,
}

pub fn render_input(spec: &InputSpec, value: &str) -> String {
    let mut html = format!(
        r#"<input id="{id}" name="{id}" type="{}" class="input" placeholder="{}" value="{}""#,
        spec.input_type,
        escape_html(spec.placeholder),
        escape_html(value),
        id = spec.id,
    );
    if let Some(step) = spec.step {
        let _ = write!(html, r#" step="{}""#, step);
    }
    if let Some(min) = spec.min {
        let _ = write!(html, r#" min="{}""#, min);
    }
    if let Some(max) = spec.max {
        let _ = write!(html, r#" max="{}""#, max);
    }
    if spec.required {
        html.push_str(" required");
    }
    html.push('>');
    html
}

/// Label and input stacked in one grid cell
pub fn render_field(spec: &InputSpec, value: &str) -> String {
    format!(
        r#"<div class="field">{}{}</div>"#,
        render_label(spec.id, spec.label, LabelVariant::Default, LabelSize::Default),
        render_input(spec, value)
    )
}

/// Card with a title and pre-rendered body markup
pub fn render_card(title: &str, title_class: &str, body_html: &str) -> String {
    format!(
        r#"<div class="card"><div class="card-header"><h3 class="{}">{}</h3></div><div class="card-content">{}</div></div>"#,
        title_class,
        escape_html(title),
        body_html
    )
}

/// Summary card showing one figure
pub fn render_stat_card(title: &str, value: &str) -> String {
    render_card(
        title,
        "card-title card-title-sm",
        &format!(r#"<div class="card-value">{}</div>"#, escape_html(value)),
    )
}

/// Donut chart as inline SVG
pub fn render_pie_chart(entries: &[ChartEntry], layout: &PieLayout) -> String {
    let mut svg = format!(
        r#"<svg class="chart" viewBox="0 0 {} {}" role="img" aria-label="Cost vs. income">"#,
        layout.width, layout.height
    );

    let slices = pie_slices(entries);
    if slices.is_empty() {
        let radius = (layout.inner_radius + layout.outer_radius) / 2.0;
        let _ = write!(
            svg,
            r#"<circle class="chart-empty" cx="{}" cy="{}" r="{}" stroke-width="{}"/>"#,
            layout.cx,
            layout.cy,
            radius,
            layout.outer_radius - layout.inner_radius
        );
    }

    for (index, slice) in slices.iter().enumerate() {
        let path = slice.path_data(layout);
        if path.is_empty() {
            continue;
        }
        let _ = write!(
            svg,
            r#"<path id="cell-{}" d="{}" fill="{}"><title>{}</title></path>"#,
            index,
            path,
            escape_html(&slice.color),
            escape_html(&slice.tooltip())
        );

        let (x, y) = layout.polar(layout.label_radius, slice.mid_angle());
        let anchor = if x >= layout.cx { "start" } else { "end" };
        let _ = write!(
            svg,
            r#"<text class="chart-label" x="{:.3}" y="{:.3}" text-anchor="{}" dominant-baseline="central" fill="{}">{}</text>"#,
            x,
            y,
            anchor,
            escape_html(&slice.color),
            escape_html(&slice.label())
        );
    }

    svg.push_str("</svg>");
    svg
}

/// Color swatch and name for each chart entry
pub fn render_legend(entries: &[ChartEntry]) -> String {
    let mut html = String::from(r#"<ul class="legend">"#);
    for entry in entries {
        let _ = write!(
            html,
            r#"<li class="legend-item"><span class="legend-swatch" style="background:{}"></span>{}</li>"#,
            escape_html(&entry.color),
            escape_html(&entry.name)
        );
    }
    html.push_str("</ul>");
    html
}

/// Footer with author and repository links and the theme toggle
pub fn render_footer(config: &AppConfig, theme: Theme) -> String {
    let next = theme.toggled();
    format!(
        concat!(
            r#"<footer class="footer"><p>"#,
            r#"<a href="{}" target="_blank" rel="noreferrer">{}</a> · "#,
            r#"<a href="{}" target="_blank" rel="noreferrer">{}</a></p>"#,
            r#"<div><a class="mode-toggle" href="/?theme={}" title="Switch to {} theme">{}</a></div>"#,
            "</footer>"
        ),
        escape_html(&config.author.url),
        escape_html(&config.author.name),
        escape_html(&config.github.url),
        escape_html(&config.github.name),
        next.as_str(),
        next.as_str(),
        if next == Theme::Dark { "🌙" } else { "☀️" },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_classes() {
        assert_eq!(label_classes(LabelVariant::Default, LabelSize::Default), "label");
        assert_eq!(
            label_classes(LabelVariant::Destructive, LabelSize::Sm),
            "label label-destructive label-sm"
        );
        assert_eq!(label_classes(LabelVariant::Success, LabelSize::Lg), "label label-success label-lg");
    }

    #[test]
    fn test_input_keeps_escaped_value() {
        let spec = InputSpec {
            id: "model",
            label: "ASIC model",
            input_type: "text",
            placeholder: "e.g. Antminer S19 Pro",
            required: true,
            min: None,
            max: None,
            step: None,
        };
        let html = render_input(&spec, r#"S19 "Pro""#);
        assert!(html.contains(r#"value="S19 &quot;Pro&quot;""#));
        assert!(html.contains(" required"));
        assert!(!html.contains("min="));
    }

    #[test]
    fn test_empty_chart_draws_ring() {
        let entries = vec![
            ChartEntry { name: "Investment".into(), value: 0.0, color: "#0088FE".into() },
            ChartEntry { name: "Daily income".into(), value: 0.0, color: "#00C49F".into() },
        ];
        let svg = render_pie_chart(&entries, &PieLayout::default());
        assert!(svg.contains("chart-empty"));
        assert!(!svg.contains("<path"));
    }

    #[test]
    fn test_note_is_not_a_label() {
        let html = render_note("Heads up", LabelVariant::Destructive, LabelSize::Sm);
        assert_eq!(html, r#"<span class="label label-destructive label-sm">Heads up</span>"#);
    }

    #[test]
    fn test_legend_lists_entries_with_colors() {
        let entries = vec![
            ChartEntry { name: "Investment".into(), value: 2800.0, color: "#0088FE".into() },
            ChartEntry { name: "Daily income".into(), value: 20.0, color: "#00C49F".into() },
        ];
        let html = render_legend(&entries);
        assert!(html.starts_with(r#"<ul class="legend">"#));
        assert_eq!(html.matches(r#"<li class="legend-item">"#).count(), 2);
        assert!(html.contains(r#"style="background:#0088FE"></span>Investment</li>"#));
        assert!(html.contains(r#"style="background:#00C49F"></span>Daily income</li>"#));
        assert!(html.find("Investment").unwrap_or(usize::MAX) < html.find("Daily income").unwrap_or(0));
    }

    #[test]
    fn test_legend_escapes_names() {
        let entries = vec![ChartEntry { name: "<b>".into(), value: 1.0, color: "#000".into() }];
        assert!(render_legend(&entries).contains("&lt;b&gt;"));
    }

    #[test]
    fn test_footer_links_and_toggle() {
        let config = AppConfig::default();
        let html = render_footer(&config, Theme::Light);
        assert!(html.contains(&config.github.url));
        assert!(html.contains("/?theme=dark"));
    }
}

// Changelog:
// - v1.0.1 (2026-10-18): render_note for label-styled text outside forms; legend tests.
// - v1.0.0 (2026-10-18): Label, input, card, chart, legend and footer fragments.
