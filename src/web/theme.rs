// ASIC ROI Calculator - Free and Open Source Software Statement
//
// This project, asic-roi, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/web/theme.rs
// Version: 1.0.0
//
// Stylesheet for the calculator page. Colors live in CSS variables on
// `.theme-light` / `.theme-dark` so the footer toggle only swaps a class.
//
// Tree Location:
// - src/web/theme.rs (embedded stylesheet)
// - Depends on: none

pub const GLOBAL_CSS: &str = r#"
.theme-light {
  --bg: #f8fafc;
  --card: #ffffff;
  --border: #e2e8f0;
  --text: #0f172a;
  --text-muted: #64748b;
  --input-bg: #ffffff;
  --primary: #2563eb;
  --primary-hover: #1d4ed8;
  --destructive: #dc2626;
  --success: #059669;
}

.theme-dark {
  --bg: #020617;
  --card: #0f172a;
  --border: #1e293b;
  --text: #f1f5f9;
  --text-muted: #94a3b8;
  --input-bg: #020617;
  --primary: #2563eb;
  --primary-hover: #1d4ed8;
  --destructive: #f87171;
  --success: #34d399;
}

* { box-sizing: border-box; }

body {
  margin: 0;
  background: var(--bg);
  color: var(--text);
  font-family: "Inter", system-ui, -apple-system, sans-serif;
}

.container { max-width: 56rem; margin: 0 auto; padding: 2rem 1rem; }

.card {
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: 0.75rem;
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08);
}
.card-header { padding: 1.5rem 1.5rem 0.5rem; }
.card-title { margin: 0; font-size: 1.25rem; font-weight: 700; }
.card-title-sm { font-size: 0.875rem; font-weight: 500; }
.card-content { padding: 0.5rem 1.5rem 1.5rem; }
.card-value { font-size: 1.5rem; font-weight: 700; }

.form { display: flex; flex-direction: column; gap: 1.5rem; }
.form-grid { display: grid; grid-template-columns: 1fr; gap: 1.5rem; }
.field { display: flex; flex-direction: column; gap: 0.5rem; }
.form-actions { display: flex; justify-content: flex-end; }

.label { font-size: 0.875rem; font-weight: 500; line-height: 1; }
.label-destructive { color: var(--destructive); }
.label-success { color: var(--success); }
.label-sm { font-size: 0.75rem; }
.label-lg { font-size: 1rem; }

.input {
  height: 2.5rem;
  padding: 0 0.75rem;
  border: 1px solid var(--border);
  border-radius: 0.375rem;
  background: var(--input-bg);
  color: var(--text);
  font-size: 0.875rem;
}

.button {
  height: 2.5rem;
  padding: 0 1rem;
  border: none;
  border-radius: 0.375rem;
  background: var(--primary);
  color: #ffffff;
  font-weight: 500;
  cursor: pointer;
}
.button:hover { background: var(--primary-hover); }

.separator { height: 1px; margin: 2rem 0; border: none; background: var(--border); }

.results-title { margin: 0 0 1.5rem; text-align: center; font-size: 1.25rem; font-weight: 700; }
.chart { width: 100%; height: 20rem; }
.chart-label { font-size: 12px; fill: var(--text); }
.chart-empty { fill: none; stroke: var(--border); }

.legend { display: flex; justify-content: center; gap: 1rem; margin: 0; padding: 0; list-style: none; }
.legend-item { display: flex; align-items: center; gap: 0.375rem; font-size: 0.875rem; }
.legend-swatch { width: 0.75rem; height: 0.75rem; border-radius: 2px; }

.note { margin: 1rem 0 0; text-align: center; }

.summary { display: grid; grid-template-columns: 1fr; gap: 1rem; margin-top: 2rem; }

.footer {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  padding: 0.5rem 1rem;
  min-height: 3rem;
  color: var(--text-muted);
  font-size: 0.875rem;
}
.footer a { color: inherit; font-weight: 500; text-underline-offset: 4px; }
.mode-toggle {
  padding: 0.25rem 0.75rem;
  border: 1px solid var(--border);
  border-radius: 0.375rem;
  text-decoration: none;
}

@media (min-width: 768px) {
  .form-grid { grid-template-columns: 1fr 1fr; }
  .summary { grid-template-columns: repeat(3, 1fr); }
  .footer { flex-direction: row; height: 5rem; }
}
"#;

// Changelog:
// - v1.0.0 (2026-10-18): Light/dark stylesheet for form, cards, chart and footer.
