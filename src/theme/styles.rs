//! Global CSS styles for the Kinetic gallery.
//!
//! Light values live on `:root`; `[data-theme="dark"]` (set by the theme
//! applier) swaps them.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --bg: #f7f7f5;
  --surface: #ffffff;
  --border: #e2e2dc;
  --text-primary: #1b1b1f;
  --text-muted: rgba(27, 27, 31, 0.6);
  --accent: #0f7b6c;
  --glare: rgba(255, 255, 255, 0.55);
  --shadow: 0 10px 30px rgba(0, 0, 0, 0.08);

  --font-sans: 'Inter', system-ui, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --radius: 14px;
  --transition-base: 200ms ease;
}

[data-theme="dark"] {
  --bg: #0d0f12;
  --surface: #161a1f;
  --border: #262b33;
  --text-primary: #f2f2f2;
  --text-muted: rgba(242, 242, 242, 0.6);
  --accent: #39d3b5;
  --glare: rgba(255, 255, 255, 0.18);
  --shadow: 0 10px 30px rgba(0, 0, 0, 0.5);
}

/* === Base === */
* { box-sizing: border-box; }

body {
  margin: 0;
  background: var(--bg);
  color: var(--text-primary);
  font-family: var(--font-sans);
  transition: background var(--transition-base), color var(--transition-base);
}

.gallery {
  max-width: 880px;
  margin: 0 auto;
  padding: 2rem 1.5rem 6rem;
}

.gallery-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.page-title {
  font-size: 2rem;
  letter-spacing: -0.02em;
}

/* === Theme toggle === */
.theme-toggle {
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 50%;
  border: 1px solid var(--border);
  background: var(--surface);
  color: var(--text-primary);
  font-size: 1.1rem;
  cursor: pointer;
  transition: transform var(--transition-base);
}

.theme-toggle:hover { transform: rotate(20deg); }
.theme-toggle:disabled { opacity: 0.5; cursor: default; }

/* === Typewriter === */
.hero { margin: 4rem 0; }

.hero-line {
  font-size: 2.5rem;
  font-weight: 600;
}

.hero-accent { color: var(--accent); }

.typewriter { font-family: var(--font-mono); }

.typewriter-cursor {
  margin-left: 2px;
  animation: cursor-blink 1s step-end infinite;
}

@keyframes cursor-blink {
  50% { opacity: 0; }
}

/* === Tilt cards === */
.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: 1.5rem;
}

.tilt-card {
  position: relative;
  overflow: hidden;
  padding: 1.5rem;
  min-height: 180px;
  border-radius: var(--radius);
  border: 1px solid var(--border);
  background: var(--surface);
  box-shadow: var(--shadow);
  transform-style: preserve-3d;
  will-change: transform;
}

.tilt-card h3 { margin-top: 0; }
.tilt-card p { color: var(--text-muted); }

.tilt-glare {
  position: absolute;
  inset: 0;
  pointer-events: none;
  background: radial-gradient(
    circle at var(--glare-x, 50%) var(--glare-y, 50%),
    var(--glare),
    transparent 60%
  );
  opacity: 0;
  transition: opacity var(--transition-base);
}

.tilt-card:hover .tilt-glare { opacity: 1; }

/* === Counters === */
.scroll-hint {
  height: 80vh;
  display: flex;
  align-items: flex-end;
  justify-content: center;
  color: var(--text-muted);
  font-size: 0.875rem;
}

.stats {
  display: flex;
  justify-content: space-around;
  gap: 2rem;
  padding: 3rem 0;
}

.stat {
  display: flex;
  flex-direction: column;
  align-items: center;
}

.animated-counter {
  font-family: var(--font-mono);
  font-size: 2.75rem;
  font-variant-numeric: tabular-nums;
  color: var(--accent);
}

.stat-label {
  color: var(--text-muted);
  text-transform: uppercase;
  letter-spacing: 0.08em;
  font-size: 0.75rem;
}

/* === Reduced motion === */
@media (prefers-reduced-motion: reduce) {
  *, *::before, *::after {
    animation-duration: 0.01ms !important;
    animation-iteration-count: 1 !important;
    transition-duration: 0.01ms !important;
  }

  .typewriter-cursor { animation: none; }
}
"#;
