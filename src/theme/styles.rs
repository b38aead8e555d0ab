//! Global CSS styles for the Florida Will Wizard.
//!
//! Plain document aesthetic: serif headings, high-contrast body text, and a
//! single accent color for interactive elements.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SURFACES */
  --paper: #fbfaf7;
  --paper-raised: #ffffff;
  --rule: #d9d4c7;

  /* INK */
  --ink: #1f2328;
  --ink-secondary: #4b5259;
  --ink-muted: #7a8087;

  /* ACCENT (links, focus, primary actions) */
  --accent: #1d4e89;
  --accent-soft: rgba(29, 78, 137, 0.12);

  /* SEMANTIC */
  --danger: #b3261e;
  --danger-soft: rgba(179, 38, 30, 0.1);
  --warning: #8a5a00;
  --warning-soft: rgba(138, 90, 0, 0.1);
  --success: #2e6b3a;

  /* Typography */
  --font-serif: 'Libre Baskerville', Georgia, serif;
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;

  /* Transitions */
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--paper);
  color: var(--ink);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Typography === */
.page-title {
  font-family: var(--font-serif);
  font-size: var(--text-2xl);
  font-weight: 400;
  margin: 1.5rem 0 1rem;
}

.body-text {
  color: var(--ink-secondary);
  margin-bottom: 1rem;
}

/* === Wizard Layout === */
.wizard {
  max-width: 44rem;
  margin: 0 auto;
  padding: 1.5rem;
}

.step-progress {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem 1rem;
  list-style: none;
  font-size: var(--text-xs);
  color: var(--ink-muted);
}

.step-progress__item {
  display: flex;
  align-items: center;
  gap: 0.35rem;
}

.step-progress__number {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 1.5rem;
  height: 1.5rem;
  border: 1px solid var(--rule);
  border-radius: 50%;
}

.step-progress__item--done { color: var(--success); }
.step-progress__item--done .step-progress__number { border-color: var(--success); }

.step-progress__item--current { color: var(--accent); font-weight: 600; }
.step-progress__item--current .step-progress__number {
  background: var(--accent);
  border-color: var(--accent);
  color: var(--paper-raised);
}

.wizard-nav {
  display: flex;
  justify-content: space-between;
  gap: 1rem;
  margin-top: 1.5rem;
}

/* === Card === */
.card {
  background: var(--paper-raised);
  border: 1px solid var(--rule);
  border-radius: 6px;
  padding: 1.5rem;
  margin-bottom: 1.5rem;
}

.card--nested {
  padding: 1rem;
  margin-bottom: 1rem;
}

.card__header { margin-bottom: 1rem; }

.card__title {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  font-weight: 400;
}

.card__subtitle {
  font-size: var(--text-sm);
  color: var(--ink-muted);
}

/* === Forms === */
.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
  margin-bottom: 1rem;
}

.form-field--inline {
  flex-direction: row;
  align-items: center;
  gap: 0.5rem;
}

.input-label {
  font-size: var(--text-sm);
  font-weight: 600;
}

.input-required { color: var(--danger); }

.input-hint {
  font-weight: 400;
  color: var(--ink-muted);
}

.input-field {
  font: inherit;
  padding: 0.5rem 0.75rem;
  border: 1px solid var(--rule);
  border-radius: 4px;
  background: var(--paper-raised);
  color: var(--ink);
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.input-field:focus {
  outline: none;
  border-color: var(--accent);
  box-shadow: 0 0 0 3px var(--accent-soft);
}

.textarea { resize: vertical; }

.terms-text {
  max-height: 22rem;
  overflow-y: auto;
  padding-right: 0.5rem;
  margin-bottom: 1rem;
}

.terms-text h3 {
  font-family: var(--font-serif);
  font-size: var(--text-lg);
  font-weight: 400;
  margin: 1rem 0 0.25rem;
}

.terms-text p { color: var(--ink-secondary); }

/* === Buttons === */
.btn-primary,
.btn-secondary,
.btn-danger,
.btn-ghost {
  font: inherit;
  font-size: var(--text-sm);
  padding: 0.55rem 1.25rem;
  border-radius: 4px;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.btn-primary {
  background: var(--accent);
  border: 1px solid var(--accent);
  color: var(--paper-raised);
  margin-left: auto;
}

.btn-secondary {
  background: transparent;
  border: 1px solid var(--accent);
  color: var(--accent);
}

.btn-secondary:hover { background: var(--accent-soft); }

.btn-danger {
  background: transparent;
  border: 1px solid var(--danger);
  color: var(--danger);
}

.btn-danger:hover { background: var(--danger-soft); }

.btn-ghost {
  background: transparent;
  border: none;
  color: var(--ink-secondary);
  text-decoration: underline;
}

button:disabled {
  opacity: 0.45;
  cursor: not-allowed;
}

.icon-btn {
  width: 2rem;
  height: 2rem;
  border: 1px solid var(--rule);
  border-radius: 4px;
  background: var(--paper-raised);
  color: var(--ink-secondary);
  cursor: pointer;
}

.icon-btn:hover:not(:disabled) { border-color: var(--accent); color: var(--accent); }
.icon-btn--danger:hover:not(:disabled) { border-color: var(--danger); color: var(--danger); }

/* === Repeatable Sections === */
.field-list__header {
  display: flex;
  align-items: baseline;
  justify-content: space-between;
  margin-bottom: 0.75rem;
}

.field-list__title {
  font-size: var(--text-base);
  font-weight: 600;
}

.field-list__count {
  font-size: var(--text-xs);
  color: var(--ink-muted);
}

.field-list__empty {
  color: var(--ink-muted);
  font-style: italic;
  margin-bottom: 1rem;
}

.field-list__actions {
  display: flex;
  gap: 1rem;
}

.field-row {
  border: 1px solid var(--rule);
  border-radius: 4px;
  padding: 1rem;
  margin-bottom: 1rem;
}

.field-row__header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 0.75rem;
}

.field-row__label { font-weight: 600; }

.field-row__controls {
  display: flex;
  gap: 0.25rem;
}

.badge {
  display: inline-block;
  font-size: var(--text-xs);
  padding: 0.15rem 0.5rem;
  border-radius: 999px;
}

.badge--minor {
  background: var(--warning-soft);
  color: var(--warning);
}

.share-total {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-top: 0.5rem;
}

.share-total__value { font-weight: 600; color: var(--success); }
.share-total__value--off { color: var(--danger); }

/* === Validation & Notices === */
.validation-issues {
  list-style: none;
  margin-top: 1rem;
  padding: 0.75rem 1rem;
  border-left: 3px solid var(--danger);
  background: var(--danger-soft);
}

.validation-issue {
  color: var(--danger);
  font-size: var(--text-sm);
}

.notice {
  padding: 1rem;
  border-radius: 4px;
  margin-bottom: 1.5rem;
}

.notice p { margin-bottom: 0.5rem; }

.notice--warning {
  background: var(--warning-soft);
  border-left: 3px solid var(--warning);
}

/* === Review === */
.summary { list-style: none; }

.summary__line {
  padding: 0.4rem 0;
  border-bottom: 1px solid var(--rule);
}

.summary__line:last-child { border-bottom: none; }
"#;
