/// Stylesheet injected once by the layout. `.dark-mode` on the root flips
/// the palette.
pub const STYLE: &str = r#"
* { box-sizing: border-box; }
body { margin: 0; font-family: "Segoe UI", Roboto, sans-serif; }

.app {
    --bg: #f7f4ef;
    --fg: #2b2b2b;
    --card: #ffffff;
    --muted: #6c6c6c;
    --accent: #c8553d;
    --border: #e2ddd5;
    min-height: 100vh;
    background: var(--bg);
    color: var(--fg);
    transition: background 0.2s, color 0.2s;
}
.app.dark-mode {
    --bg: #16161a;
    --fg: #eaeaea;
    --card: #222228;
    --muted: #9a9aa5;
    --accent: #f28f3b;
    --border: #34343c;
}

.navbar {
    display: flex;
    align-items: center;
    gap: 1rem;
    padding: 0.75rem 1.5rem;
    background: var(--card);
    border-bottom: 1px solid var(--border);
}
.brand { font-weight: 700; font-size: 1.25rem; color: var(--accent); }
.nav-links { display: flex; gap: 0.25rem; flex: 1; }
.nav-link {
    background: none;
    border: none;
    color: var(--fg);
    padding: 0.4rem 0.75rem;
    border-radius: 6px;
    cursor: pointer;
}
.nav-link:hover, .nav-link.active { background: var(--border); }
.theme-toggle { display: flex; gap: 0.25rem; }
.btn-theme {
    background: none;
    border: 1px solid var(--border);
    color: var(--fg);
    border-radius: 50%;
    width: 2rem;
    height: 2rem;
    cursor: pointer;
}
.btn-theme.active { border-color: var(--accent); color: var(--accent); }

.content { max-width: 860px; margin: 0 auto; padding: 1.5rem; }
.muted { color: var(--muted); }

.alert-fixed {
    position: fixed;
    top: 1rem;
    left: 50%;
    transform: translateX(-50%);
    z-index: 10;
    min-width: 280px;
}
.alert { padding: 0.75rem 1rem; border-radius: 8px; border: 1px solid transparent; }
.alert-success { background: #d1e7dd; color: #0f5132; border-color: #badbcc; }
.alert-warning { background: #fff3cd; color: #664d03; border-color: #ffecb5; }
.alert-danger { background: #f8d7da; color: #842029; border-color: #f5c2c7; }
.alert-info { background: #cff4fc; color: #055160; border-color: #b6effb; }

.card {
    background: var(--card);
    border: 1px solid var(--border);
    border-radius: 10px;
    padding: 1rem 1.25rem;
    margin-bottom: 1rem;
}
.form { display: flex; flex-direction: column; gap: 0.75rem; }
.field { display: flex; flex-direction: column; gap: 0.25rem; }
.field-label { font-size: 0.9rem; color: var(--muted); }
.field-input {
    padding: 0.5rem 0.65rem;
    border: 1px solid var(--border);
    border-radius: 6px;
    background: var(--bg);
    color: var(--fg);
    font: inherit;
}

.btn {
    padding: 0.5rem 1rem;
    border-radius: 6px;
    border: 1px solid transparent;
    cursor: pointer;
    font: inherit;
}
.btn:disabled { opacity: 0.6; cursor: default; }
.btn-primary { background: var(--accent); color: #fff; }
.btn-outline { background: none; border-color: var(--accent); color: var(--accent); }
.btn-danger { background: #b02a37; color: #fff; }

.link { background: none; border: none; padding: 0; color: var(--accent); text-decoration: underline; cursor: pointer; font: inherit; }
.lead { font-size: 1.1rem; color: var(--muted); }

.resena { display: flex; gap: 1rem; }
.resena-img { width: 160px; height: 160px; object-fit: cover; border-radius: 8px; }
.resena-body { flex: 1; }
.meta { font-size: 0.85rem; color: var(--muted); margin-bottom: 0.5rem; }
.comentarios { border-top: 1px solid var(--border); margin-top: 0.5rem; padding-top: 0.5rem; }
.comentario { margin: 0.25rem 0; }
.actions { display: flex; gap: 0.5rem; margin-top: 0.5rem; }
.actions .field-input { flex: 1; }

.drink-of-the-day { display: flex; flex-direction: column; gap: 0.5rem; }
.drink-img { width: 200px; border-radius: 8px; }
"#;
