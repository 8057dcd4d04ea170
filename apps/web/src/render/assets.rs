//! Inline stylesheet and script payloads. Pages are self-contained documents.

use crate::theme::ThemePackName;

pub const BASE_CSS: &str = r#"*{box-sizing:border-box;margin:0;padding:0}
body{background:var(--bg);color:var(--text);font-family:var(--body-font);line-height:1.6;overflow-x:hidden}
h1,h2,h3,h4{font-family:var(--heading-font);line-height:1.2}
a{color:var(--accent)}
.page{max-width:1200px;margin:0 auto;padding:0 1.5rem;position:relative;z-index:1}
.page-center{min-height:100vh;display:flex;align-items:center;justify-content:center}
.section{padding:5rem 0}
.section-title{font-size:2.25rem;text-align:center;margin-bottom:3rem}
.muted{color:var(--muted)}
.card{background:var(--surface);border:1px solid var(--border);border-radius:12px;padding:1.5rem}
.cta-button{display:inline-block;padding:.75rem 2rem;border:1px solid var(--accent);border-radius:8px;color:var(--accent);text-decoration:none;transition:background .3s}
.cta-button:hover{background:var(--accent-soft)}
.hero{min-height:100vh;display:flex;flex-direction:column;justify-content:center;align-items:center;text-align:center;gap:1.5rem}
.hero-title{font-size:clamp(2.5rem,6vw,4.5rem)}
.hero-subtitle{font-size:1.5rem}
.highlight{color:var(--accent)}
.profile-container{display:grid;grid-template-columns:minmax(200px,320px) 1fr;gap:3rem;align-items:center}
.profile-image{width:100%;aspect-ratio:1;border-radius:50%;object-fit:cover;border:2px solid var(--border)}
.profile-initial{display:flex;align-items:center;justify-content:center;font-size:6rem;background:var(--accent-soft);color:var(--accent)}
.profile-stats{display:flex;gap:2rem;margin-top:1.5rem}
.stat-item{display:flex;flex-direction:column}
.stat-number{font-size:2rem;color:var(--accent)}
.stat-label{font-size:.875rem;color:var(--muted)}
.about-text{white-space:pre-line;margin-bottom:1.5rem}
.journey-grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(320px,1fr));gap:3rem}
.timeline{display:flex;flex-direction:column;gap:1.25rem}
.timeline-date{font-size:.875rem;color:var(--accent)}
.tag-cloud,.languages{display:flex;flex-wrap:wrap;gap:.75rem;justify-content:center}
.languages{justify-content:flex-start;margin:1rem 0}
.skill-tag{padding:.4rem 1rem;border:1px solid var(--border);border-radius:999px;background:var(--accent-soft);font-size:.875rem}
.skill-bars{margin-top:3rem}
.skill-bar-container{margin-top:1rem}
.skill-bar-label{display:flex;justify-content:space-between;font-size:.875rem}
.skill-bar{height:6px;border-radius:3px;background:var(--accent-soft);overflow:hidden}
.skill-bar-fill{height:100%;background:var(--accent)}
.project-grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(300px,1fr));gap:1.5rem}
.project-card{display:flex;flex-direction:column}
.github-link{margin-top:auto;text-decoration:none}
.show-more{text-align:center;margin-top:2.5rem}
.footer{padding:3rem 0;text-align:center;border-top:1px solid var(--border)}
.topbar{position:sticky;top:0;z-index:10;display:flex;justify-content:flex-end;align-items:center;gap:1rem;padding:1rem 1.5rem;background:var(--bg)}
.theme-toggle button{background:none;border:1px solid var(--border);border-radius:8px;color:var(--text);padding:.5rem 1rem;cursor:pointer}
.reveal{opacity:0;transform:translateY(24px);transition:opacity .6s ease,transform .6s ease}
.reveal.is-visible{opacity:1;transform:none}
@media (prefers-reduced-motion:reduce){.reveal{opacity:1;transform:none;transition:none}.tech-bg,.cursor-glow{display:none}}
@media (max-width:768px){.profile-container{grid-template-columns:1fr}.section-title{font-size:1.75rem}}
"#;

const TECH_CSS: &str = r#".tech-bg{position:fixed;inset:0;z-index:0;pointer-events:none;background:radial-gradient(ellipse at top,rgba(99,102,241,.15),transparent 60%)}
.grid-overlay{position:absolute;inset:0;background-image:linear-gradient(rgba(129,140,248,.07) 1px,transparent 1px),linear-gradient(90deg,rgba(129,140,248,.07) 1px,transparent 1px);background-size:50px 50px;animation:grid-move 20s linear infinite}
@keyframes grid-move{from{background-position:0 0}to{background-position:50px 50px}}
.cursor-glow{position:fixed;width:400px;height:400px;margin:-200px 0 0 -200px;border-radius:50%;pointer-events:none;z-index:0;background:radial-gradient(circle,rgba(129,140,248,.12),transparent 70%)}
.hero-title{text-shadow:0 0 30px rgba(129,140,248,.5)}
.card{backdrop-filter:blur(10px)}
.topbar{background:transparent}
"#;

const MINIMAL_CSS: &str = r#".card{border-radius:4px}
.section-title{font-weight:600;letter-spacing:-.02em}
.cta-button{border-radius:4px}
.skill-tag{border-radius:4px;background:transparent}
.reveal{transform:none}
"#;

const CARDS_CSS: &str = r#".card{box-shadow:0 4px 20px rgba(15,23,42,.06);border-radius:16px;transition:transform .3s,box-shadow .3s}
.project-card:hover{transform:translateY(-4px);box-shadow:0 12px 32px rgba(15,23,42,.12)}
.cta-button{background:var(--accent);color:#fff}
.cta-button:hover{background:var(--accent);opacity:.9}
.topbar{justify-content:space-between;border-bottom:1px solid var(--border)}
.nav{display:flex;align-items:center;justify-content:space-between;width:100%}
.brand{font-family:var(--heading-font);font-weight:700;text-decoration:none;color:var(--text)}
.nav-links{display:flex;gap:1.5rem;list-style:none}
.nav-links a{color:var(--text);text-decoration:none}
.menu-button{display:none;text-decoration:none}
@media (max-width:768px){.menu-button{display:inline-block}.nav-links{display:none}.nav-links.open{display:flex;flex-direction:column;position:absolute;top:100%;left:0;right:0;padding:1rem 1.5rem;background:var(--surface);border-bottom:1px solid var(--border)}}
"#;

pub fn pack_css(name: ThemePackName) -> &'static str {
    match name {
        ThemePackName::Tech => TECH_CSS,
        ThemePackName::Minimal => MINIMAL_CSS,
        ThemePackName::Cards => CARDS_CSS,
    }
}

/// Moves `.cursor-glow` with the pointer. The listener is removed when the page is hidden.
pub const POINTER_SCRIPT: &str = r#"(function(){
var glow=document.querySelector('.cursor-glow');
if(!glow){return;}
function move(e){glow.style.left=e.clientX+'px';glow.style.top=e.clientY+'px';}
document.addEventListener('mousemove',move,{passive:true});
window.addEventListener('pagehide',function(){document.removeEventListener('mousemove',move);},{once:true});
})();"#;

pub const DASHBOARD_CSS: &str = r#".dashboard{max-width:900px;margin:0 auto;padding:3rem 1.5rem;display:flex;flex-direction:column;gap:2rem}
.dashboard h1{font-size:2rem}
.notice{padding:1rem 1.25rem;border-radius:8px;border:1px solid var(--border)}
.notice-success{background:#ecfdf5;border-color:#a7f3d0;color:#065f46}
.notice-error{background:#fef2f2;border-color:#fecaca;color:#991b1b}
.field{display:flex;flex-direction:column;gap:.5rem}
.field textarea{min-height:180px;padding:.75rem;border:1px solid var(--border);border-radius:8px;font:inherit;resize:vertical}
.counter{font-size:.8rem;color:var(--muted);text-align:right}
.resume-text{white-space:pre-wrap;max-height:480px;overflow-y:auto;font-size:.9rem}
.empty-state{text-align:center;color:var(--muted);padding:2rem}
button.primary{align-self:flex-start;padding:.75rem 2rem;border:none;border-radius:8px;background:var(--accent);color:#fff;cursor:pointer}
button.primary[disabled]{opacity:.6;cursor:not-allowed}
"#;
