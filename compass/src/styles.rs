//! CSS for the compass page.
//!
//! One stylesheet serves both the static export and the browser build.
//! The interactive bits it styles:
//!
//! - `.nav-link.active` for the section highlighter
//! - `.mobile-menu.open` for the mobile drawer
//! - `.journey-tab.active` / `.journey-panel` for the tab switcher
//! - `.chart-*` for the inline SVG charts

/// Complete stylesheet, inlined into the document head.
pub const COMPASS_CSS: &str = r#"
:root {
    --emerald: #10B981;
    --emerald-dark: #047857;
    --emerald-soft: #ECFDF5;
    --slate-50: #F8FAFC;
    --slate-100: #F1F5F9;
    --slate-300: #CBD5E1;
    --slate-600: #475569;
    --slate-800: #1E293B;
    --slate-900: #0F172A;
    --grey-200: #E5E7EB;
    --container-max: 1200px;
    --font-sans: Inter, system-ui, -apple-system, "Segoe UI", Helvetica, Arial, sans-serif;
}

* { box-sizing: border-box; }

body {
    font-family: var(--font-sans);
    background: var(--slate-50);
    color: var(--slate-800);
    line-height: 1.6;
    margin: 0;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
}

/* Header + navigation */
.site-header {
    position: sticky;
    top: 0;
    z-index: 50;
    background: rgba(255, 255, 255, 0.8);
    backdrop-filter: blur(12px);
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.06);
}

.nav-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    height: 64px;
}

.nav-brand { font-weight: 700; font-size: 20px; color: var(--slate-900); }

.nav-links { display: flex; gap: 16px; }

.nav-link {
    padding: 8px 12px;
    border-radius: 6px;
    font-size: 14px;
    font-weight: 500;
    color: var(--slate-600);
    text-decoration: none;
    transition: color 0.3s ease;
}

.nav-link:hover, .nav-link.active { color: var(--emerald); }

.menu-toggle {
    display: none;
    background: none;
    border: 0;
    padding: 8px;
    color: var(--slate-600);
    cursor: pointer;
}

.mobile-menu { display: none; padding: 8px 12px 12px; }
.mobile-menu .nav-link { display: block; font-size: 16px; }

@media (max-width: 767px) {
    .nav-links { display: none; }
    .menu-toggle { display: inline-flex; }
    .mobile-menu.open { display: block; }
}

/* Sections */
main.container { padding-top: 32px; padding-bottom: 48px; }

section { scroll-margin-top: 80px; margin-bottom: 64px; }

.card-section {
    background: #fff;
    border-radius: 16px;
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.08);
    padding: 64px 32px;
}

.hero { text-align: center; padding: 32px 0 64px; }
.hero h1 { font-size: 48px; font-weight: 800; letter-spacing: -0.02em; color: var(--slate-900); margin: 0; }
.hero .accent { color: var(--emerald); }
.hero p { max-width: 720px; margin: 24px auto 0; font-size: 20px; color: var(--slate-600); }

.section-head { text-align: center; margin-bottom: 48px; }
.section-kicker { font-size: 14px; font-weight: 600; color: #059669; text-transform: uppercase; letter-spacing: 0.05em; margin: 0; }
.section-title { font-size: 34px; font-weight: 800; color: #111827; margin: 8px 0 0; }

.grid-2 { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 32px; }
.grid-3 { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 24px; }

.tile { background: #fff; padding: 24px; border-radius: 12px; box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05); }
.summary-problem h3 { color: #DC2626; }
.summary-solution h3 { color: #2563EB; }
.summary-outcome h3 { color: #16A34A; }

.mission { margin-top: 24px; padding: 16px; background: var(--emerald-soft); border-radius: 8px; color: var(--emerald-dark); font-weight: 500; }

table { border-collapse: collapse; width: 100%; font-size: 14px; }
th { background: #F9FAFB; text-align: left; font-size: 12px; text-transform: uppercase; letter-spacing: 0.05em; color: #6B7280; padding: 12px 24px; }
td { padding: 16px 24px; border-top: 1px solid var(--grey-200); color: #374151; }
td.strong { font-weight: 500; color: #111827; }
.table-scroll { overflow-x: auto; }

.pain { padding: 24px; border-radius: 8px; border-left: 4px solid; }
.pain-red { background: #FEF2F2; border-color: #F87171; color: #991B1B; }
.pain-orange { background: #FFF7ED; border-color: #FB923C; color: #9A3412; }
.pain-yellow { background: #FEFCE8; border-color: #FACC15; color: #854D0E; }

/* Opportunity counters */
.stat { text-align: center; }
.stat-counter { font-size: 56px; font-weight: 800; color: var(--emerald); font-variant-numeric: tabular-nums; }
.stat-caption { color: var(--slate-600); }

/* Journey tabs */
.journey-tabs { display: flex; flex-wrap: wrap; gap: 8px; justify-content: center; margin-bottom: 24px; }
.journey-tab {
    border: 1px solid var(--slate-300);
    background: #fff;
    border-radius: 999px;
    padding: 8px 16px;
    font-weight: 600;
    cursor: pointer;
    transition: background 0.2s ease, color 0.2s ease;
}
.journey-tab.active { background: var(--emerald); border-color: var(--emerald); color: #fff; }
.journey-panel { max-width: 720px; margin: 0 auto; animation: fade-in 0.3s ease; }
.journey-panel ol { padding-left: 20px; }
.journey-outcome { font-weight: 600; color: var(--emerald-dark); }

@keyframes fade-in { from { opacity: 0; } to { opacity: 1; } }

/* Charts */
.chart-container { position: relative; width: 100%; max-width: 400px; margin: 0 auto; }
.rice-chart-container { position: relative; width: 100%; }
.chart-svg { width: 100%; height: auto; display: block; }
.chart-segment:hover, .chart-bar:hover { opacity: 0.85; }
.chart-legend { display: flex; flex-wrap: wrap; gap: 16px; justify-content: center; margin-top: 12px; list-style: none; padding: 0; }
.legend-swatch { display: inline-block; width: 12px; height: 12px; border-radius: 2px; margin-right: 6px; vertical-align: middle; }

.rice-notes .tile { background: var(--emerald-soft); }

/* Roadmap timeline */
.timeline { position: relative; padding-left: 48px; max-width: 900px; margin: 0 auto; }
.timeline::before {
    content: '';
    position: absolute;
    top: 0;
    bottom: 0;
    left: 1rem;
    transform: translateX(-50%);
    width: 4px;
    background-color: var(--grey-200);
    border-radius: 2px;
}
.phase-card { position: relative; margin-bottom: 40px; padding: 24px; border-radius: 8px; border-left: 4px solid var(--emerald); background: var(--emerald-soft); }
.phase-card::before {
    content: '';
    position: absolute;
    top: 50%;
    left: -2.05rem;
    transform: translateY(-50%);
    width: 1.25rem;
    height: 1.25rem;
    background-color: #F3F4F6;
    border: 4px solid #4B5563;
    border-radius: 9999px;
    z-index: 10;
}
.phase-label { font-size: 14px; font-weight: 600; color: #059669; margin: 0; }

/* Footer */
.site-footer { background: var(--slate-800); color: #fff; text-align: center; padding: 48px 24px; }
.site-footer p { color: var(--slate-300); font-size: 18px; max-width: 720px; margin: 16px auto; }
.footer-profile { display: flex; align-items: center; justify-content: center; gap: 16px; margin-top: 32px; }
.footer-profile img { width: 48px; height: 48px; border-radius: 999px; object-fit: cover; }
.footer-profile a { color: #A7F3D0; }
"#;

/// Content-Security-Policy for the static export (no external requests).
pub const CSP: &str = "default-src 'self'; img-src 'self' data:; style-src 'self' 'unsafe-inline'; script-src 'self' 'wasm-unsafe-eval'; connect-src 'none';";
