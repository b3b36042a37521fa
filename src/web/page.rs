// ASIC ROI Calculator - Free and Open Source Software Statement
//
// This project, asic-roi, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/web/page.rs
// Version: 1.0.1
//
// This file assembles the full calculator page: the input form, and after a
// submission the chart, legend and three summary cards.
//
// Tree Location:
// - src/web/page.rs (page layout)
// - Depends on: web/components, web/theme, core, config

use super::components::{
    InputSpec, LabelSize, LabelVariant, render_card, render_field, render_footer, render_legend, render_note,
    render_pie_chart, render_stat_card,
};
use super::theme::GLOBAL_CSS;
use crate::config::{AppConfig, Theme};
use crate::core::chart::PieLayout;
use crate::core::types::{FormInputs, RoiResult};
use crate::utils::format::{FormatUtils, escape_html};

pub const PAGE_TITLE: &str = "ASIC miner ROI calculator";
pub const RESULTS_TITLE: &str = "Cost vs. income";
pub const SUBMIT_LABEL: &str = "Calculate ROI";

pub const TOTAL_INVESTMENT_TITLE: &str = "Total investment";
pub const DAILY_INCOME_TITLE: &str = "Daily income";
pub const DAYS_TO_ROI_TITLE: &str = "Days to break even";

/// Shown under the results; the estimate only uses the two cost fields
pub const UNUSED_INPUTS_NOTE: &str = "Hashrate, electricity price and tax are not included in this estimate.";

/// Form inputs in display order
pub const FORM_FIELDS: [InputSpec; 6] = [
    InputSpec {
        id: "model",
        label: "ASIC model",
        input_type: "text",
        placeholder: "e.g. Antminer S19 Pro",
        required: true,
        min: None,
        max: None,
        step: None,
    },
    InputSpec {
        id: "hashrate",
        label: "Hashrate (TH/s)",
        input_type: "number",
        placeholder: "e.g. 110",
        required: true,
        min: Some("1"),
        max: None,
        step: None,
    },
    InputSpec {
        id: "cost",
        label: "ASIC cost ($)",
        input_type: "number",
        placeholder: "e.g. 2500",
        required: true,
        min: Some("1"),
        max: None,
        step: None,
    },
    InputSpec {
        id: "delivery",
        label: "Delivery/connection cost ($)",
        input_type: "number",
        placeholder: "e.g. 300",
        required: true,
        min: Some("0"),
        max: None,
        step: None,
    },
    InputSpec {
        id: "electricity",
        label: "Electricity price ($/kWh)",
        input_type: "number",
        placeholder: "e.g. 0.12",
        required: true,
        min: Some("0"),
        max: None,
        step: Some("0.01"),
    },
    InputSpec {
        id: "tax",
        label: "Tax (%)",
        input_type: "number",
        placeholder: "e.g. 15",
        required: false,
        min: Some("0"),
        max: Some("100"),
        step: None,
    },
];

fn field_value<'a>(inputs: &'a FormInputs, id: &str) -> &'a str {
    match id {
        "model" => &inputs.model,
        "hashrate" => &inputs.hashrate,
        "cost" => &inputs.cost,
        "delivery" => &inputs.delivery,
        "electricity" => &inputs.electricity,
        "tax" => &inputs.tax,
        _ => "",
    }
}

fn render_form(inputs: &FormInputs, theme: Theme) -> String {
    let fields: String = FORM_FIELDS
        .iter()
        .map(|spec| render_field(spec, field_value(inputs, spec.id)))
        .collect();

    format!(
        r#"<form class="form" method="post" action="/?theme={}"><div class="form-grid">{}</div><div class="form-actions"><button type="submit" class="button">{}</button></div></form>"#,
        theme.as_str(),
        fields,
        SUBMIT_LABEL
    )
}

/// Chart, legend and summary cards for one result
pub fn render_results(result: &RoiResult) -> String {
    let cards = [
        render_stat_card(
            TOTAL_INVESTMENT_TITLE,
            &FormatUtils::format_currency(result.total_investment),
        ),
        render_stat_card(DAILY_INCOME_TITLE, &FormatUtils::format_currency(result.daily_income)),
        render_stat_card(DAYS_TO_ROI_TITLE, &FormatUtils::format_days(result.days_to_roi)),
    ]
    .concat();

    format!(
        r#"<hr class="separator"><section class="results"><h2 class="results-title">{}</h2>{}{}<div class="summary">{}</div><p class="note">{}</p></section>"#,
        RESULTS_TITLE,
        render_pie_chart(&result.chart_data, &PieLayout::default()),
        render_legend(&result.chart_data),
        cards,
        render_note(UNUSED_INPUTS_NOTE, LabelVariant::Destructive, LabelSize::Sm)
    )
}

/// Render the whole page
///
/// `result` is `None` before the first submission, in which case only the
/// form is shown.
pub fn render_page(config: &AppConfig, theme: Theme, inputs: &FormInputs, result: Option<&RoiResult>) -> String {
    let mut body = render_form(inputs, theme);
    if let Some(result) = result {
        body.push_str(&render_results(result));
    }

    format!(
        concat!(
            "<!DOCTYPE html>",
            r#"<html lang="en"><head><meta charset="utf-8">"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
            r#"<meta name="description" content="{}">"#,
            "<title>{}</title><style>{}</style></head>",
            r#"<body class="theme-{}"><main class="container">{}</main>"#,
            r#"<div class="container">{}</div></body></html>"#
        ),
        escape_html(&config.description),
        escape_html(&config.name),
        GLOBAL_CSS,
        theme.as_str(),
        render_card(PAGE_TITLE, "card-title", &body),
        render_footer(config, theme),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::roi::calculate_roi;

    #[test]
    fn test_empty_page_has_form_only() {
        let html = render_page(&AppConfig::default(), Theme::Light, &FormInputs::default(), None);
        assert!(html.contains(PAGE_TITLE));
        assert!(html.contains(SUBMIT_LABEL));
        assert!(!html.contains(RESULTS_TITLE));
        for spec in FORM_FIELDS.iter() {
            assert!(html.contains(&format!(r#"name="{}""#, spec.id)));
        }
    }

    #[test]
    fn test_results_page_shows_cards() {
        let inputs = FormInputs {
            model: "Antminer S19 Pro".to_string(),
            cost: "2500".to_string(),
            delivery: "300".to_string(),
            ..Default::default()
        };
        let result = calculate_roi(&inputs);
        let html = render_page(&AppConfig::default(), Theme::Dark, &inputs, Some(&result));
        assert!(html.contains(r#"class="theme-dark""#));
        assert!(html.contains("$2800.00"));
        assert!(html.contains("$20.00"));
        assert!(html.contains(">140<"));
        assert!(html.contains(r#"value="Antminer S19 Pro""#));
        assert!(html.contains(r#"<span class="label label-destructive label-sm">"#));
    }

    #[test]
    fn test_results_note_has_no_label_for() {
        let inputs = FormInputs {
            cost: "2500".to_string(),
            ..Default::default()
        };
        let html = render_page(&AppConfig::default(), Theme::Light, &inputs, Some(&calculate_roi(&inputs)));
        assert_eq!(html.matches(r#"for="hashrate""#).count(), 1, "Only the form field label");
        assert!(!render_results(&calculate_roi(&inputs)).contains("<label"));
    }
}

// Changelog:
// - v1.0.1 (2026-10-18): Results note rendered as a span instead of a dangling label.
// - v1.0.0 (2026-10-18): Page layout with form, results section and footer.
