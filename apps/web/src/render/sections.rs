use crate::render::format::{format_date_range, html_escape, resolve_avatar, web_url, Avatar};
use crate::render::{Marks, RenderContext, UiToggles};
use crate::reveal::stagger::stagger_delay_ms;

const SKILL_BAR_COUNT: usize = 8;
const TOP_LANGUAGES: usize = 3;

fn github_url(username: &str) -> String {
    format!("https://github.com/{username}")
}

/// Animated grid and cursor glow.
pub(super) fn backdrop(ctx: &RenderContext) -> String {
    let mut out = String::new();
    if ctx.pack.animated_grid {
        out.push_str(r#"<div class="tech-bg" aria-hidden="true"><div class="grid-overlay"></div></div>"#);
    }
    if ctx.pack.cursor_glow {
        let pointer = ctx.pointer.unwrap_or_default();
        out.push_str(&format!(
            r#"<div class="cursor-glow" aria-hidden="true" style="left:{}px;top:{}px"></div>"#,
            pointer.x, pointer.y
        ));
    }
    out
}

/// Top bar: mobile menu for packs that have one, theme toggle for packs that can switch.
pub(super) fn nav(ctx: &RenderContext) -> String {
    let toggle = theme_toggle(ctx);
    if !ctx.pack.mobile_menu {
        if toggle.is_empty() {
            return String::new();
        }
        return format!(r#"<header class="topbar">{toggle}</header>"#);
    }

    let record = ctx.record;
    let mut links = vec![("about", "About")];
    if !record.education.is_empty() || !record.experience.is_empty() {
        links.push(("journey", "Journey"));
    }
    if !record.skills.is_empty() {
        links.push(("skills", "Skills"));
    }
    if !record.projects.is_empty() {
        links.push(("projects", "Projects"));
    }
    links.push(("contact", "Contact"));

    let items: String = links
        .iter()
        .map(|(anchor, label)| format!(r##"<li><a href="#{anchor}">{label}</a></li>"##))
        .collect();

    let open = ctx.toggles.menu_open;
    let menu_href = ctx.href(UiToggles {
        menu_open: !open,
        ..ctx.toggles
    });
    let (list_class, button_label) = if open {
        ("nav-links open", "Close menu")
    } else {
        ("nav-links", "Open menu")
    };

    format!(
        r#"<header class="topbar"><nav class="nav"><a class="brand" href="{home}">{name}</a><a class="menu-button" href="{menu_href}" aria-expanded="{open}">{button_label}</a><ul class="{list_class}">{items}</ul></nav>{toggle}</header>"#,
        home = html_escape(&ctx.href(ctx.toggles)),
        name = html_escape(&record.user.github_username),
        menu_href = html_escape(&menu_href),
    )
}

fn theme_toggle(ctx: &RenderContext) -> String {
    if !ctx.pack.supports_toggle() {
        return String::new();
    }
    let next = ctx.theme.toggled();
    format!(
        r#"<form class="theme-toggle" method="post" action="/theme/toggle"><input type="hidden" name="return_to" value="{}"><button type="submit" aria-label="Switch to {next} theme">{label}</button></form>"#,
        html_escape(&ctx.href(ctx.toggles)),
        next = next.as_str(),
        label = if next.as_str() == "light" {
            "Light mode"
        } else {
            "Dark mode"
        },
    )
}

pub(super) fn hero(ctx: &RenderContext, marks: &mut Marks) -> String {
    let user = &ctx.record.user;
    let mut out = String::from(r#"<section id="hero" class="hero">"#);

    out.push_str(&marks.open("div", "hero-title", "", 100));
    out.push_str(&format!(
        r#"<h1 class="hero-title">Hey, I am <span class="highlight">{}</span></h1></div>"#,
        html_escape(&user.github_username)
    ));

    out.push_str(&marks.open("div", "hero-subtitle", "", 200));
    out.push_str(r#"<p class="hero-subtitle">Building your dream <span class="highlight">pixel</span> by <span class="highlight">pixel</span>!</p></div>"#);

    if let Some(bio) = user.bio.as_deref().filter(|b| !b.trim().is_empty()) {
        out.push_str(&marks.open("div", "hero-bio", "", 300));
        out.push_str(&format!(r#"<p class="hero-bio muted">{}</p></div>"#, html_escape(bio)));
    }

    out.push_str(&marks.open("div", "hero-cta", "", 400));
    out.push_str(r##"<a href="#about" class="cta-button">Read More</a></div>"##);
    out.push_str("</section>");
    out
}

pub(super) fn about(ctx: &RenderContext, marks: &mut Marks) -> String {
    let record = ctx.record;
    let user = &record.user;
    let mut out = String::from(r#"<section id="about" class="section">"#);

    out.push_str(&marks.open("div", "about-heading", "", 0));
    out.push_str(r#"<h2 class="section-title">Why hire me for your next project?</h2></div>"#);
    out.push_str(r#"<div class="profile-container">"#);

    out.push_str(&marks.open("div", "about-avatar", "profile-image-wrapper", 200));
    match resolve_avatar(user) {
        Avatar::Image(url) => out.push_str(&format!(
            r#"<img class="profile-image" src="{}" alt="{}">"#,
            html_escape(&url),
            html_escape(&user.github_username)
        )),
        Avatar::Initial(letter) => out.push_str(&format!(
            r#"<div class="profile-image profile-initial">{}</div>"#,
            html_escape(&letter.to_string())
        )),
    }
    out.push_str("</div>");

    out.push_str(&marks.open("div", "about-card", "card", 300));
    if let Some(text) = user.resume_text.as_deref().filter(|t| !t.trim().is_empty()) {
        out.push_str(&format!(r#"<p class="about-text">{}</p>"#, html_escape(text)));
    }
    out.push_str(&format!(
        r#"<div class="about-links"><a class="cta-button" href="{}" target="_blank" rel="noopener noreferrer">GitHub Profile</a></div>"#,
        html_escape(&github_url(&user.github_username))
    ));
    out.push_str(&format!(
        r#"<div class="profile-stats"><div class="stat-item"><span class="stat-number">{}</span><span class="stat-label">Roles</span></div><div class="stat-item"><span class="stat-number">{}</span><span class="stat-label">Projects on GitHub</span></div></div>"#,
        record.experience.len(),
        record.projects.len()
    ));
    out.push_str("</div></div></section>");
    out
}

/// Education and experience timelines. Omitted when both are empty.
pub(super) fn journey(ctx: &RenderContext, marks: &mut Marks) -> String {
    let record = ctx.record;
    if record.education.is_empty() && record.experience.is_empty() {
        return String::new();
    }
    let cap = ctx.pack.timeline_stagger_cap;

    let mut out = String::from(r#"<section id="journey" class="section">"#);
    out.push_str(&marks.open("div", "journey-heading", "", 0));
    out.push_str(r#"<h2 class="section-title">My Academic and Professional Journey</h2></div>"#);
    out.push_str(r#"<div class="journey-grid">"#);

    if !record.education.is_empty() {
        out.push_str(r#"<div id="education" class="timeline">"#);
        out.push_str(&marks.open("h3", "education-heading", "timeline-heading", 200));
        out.push_str("Education</h3>");
        for (index, edu) in record.education.iter().enumerate() {
            let id = format!("education-{}", edu.id);
            out.push_str(&marks.open(
                "article",
                &id,
                "card timeline-item",
                stagger_delay_ms(index, cap, 3),
            ));
            if let Some(year) = edu.graduation_year {
                out.push_str(&format!(r#"<p class="timeline-date">{year}</p>"#));
            }
            out.push_str(&format!(
                r#"<h4>{}</h4><p class="muted">{}</p></article>"#,
                html_escape(edu.field_of_study.as_deref().unwrap_or("Degree")),
                html_escape(&edu.school)
            ));
        }
        out.push_str("</div>");
    }

    if !record.experience.is_empty() {
        out.push_str(r#"<div id="experience" class="timeline">"#);
        out.push_str(&marks.open("h3", "experience-heading", "timeline-heading", 200));
        out.push_str("Professional Experience</h3>");
        for (index, exp) in record.experience.iter().enumerate() {
            let id = format!("experience-{}", exp.id);
            out.push_str(&marks.open(
                "article",
                &id,
                "card timeline-item",
                stagger_delay_ms(index, cap, 3),
            ));
            out.push_str(&format!(
                r#"<p class="timeline-date">{}</p><h4>{}</h4><p class="muted">{}</p>"#,
                html_escape(&format_date_range(exp.start_date, exp.end_date)),
                html_escape(&exp.title),
                html_escape(&exp.company)
            ));
            if let Some(location) = exp.location.as_deref().filter(|l| !l.is_empty()) {
                out.push_str(&format!(r#"<p class="location">{}</p>"#, html_escape(location)));
            }
            if let Some(description) = exp.description.as_deref().filter(|d| !d.is_empty()) {
                out.push_str(&format!(r#"<p class="description">{}</p>"#, html_escape(description)));
            }
            out.push_str("</article>");
        }
        out.push_str("</div>");
    }

    out.push_str("</div></section>");
    out
}

pub(super) fn skills(ctx: &RenderContext, marks: &mut Marks) -> String {
    let skills = &ctx.record.skills;
    if skills.is_empty() {
        return String::new();
    }

    let mut out = String::from(r#"<section id="skills" class="section">"#);
    out.push_str(&marks.open("div", "skills-heading", "", 0));
    out.push_str(r#"<h2 class="section-title">Tools and Skills</h2></div>"#);

    out.push_str(r#"<div class="tag-cloud">"#);
    for (index, skill) in skills.iter().enumerate() {
        let id = format!("skill-{}", skill.id);
        out.push_str(&marks.open(
            "span",
            &id,
            "skill-tag",
            stagger_delay_ms(index, ctx.pack.skill_stagger_cap, 2),
        ));
        out.push_str(&html_escape(&skill.name));
        out.push_str("</span>");
    }
    out.push_str("</div>");

    if ctx.pack.skill_bars {
        out.push_str(&marks.open("div", "skill-bars", "card skill-bars", 400));
        out.push_str("<h3>Skills Proficiency</h3>");
        for (index, skill) in skills.iter().take(SKILL_BAR_COUNT).enumerate() {
            let percent = 90 - index * 5;
            out.push_str(&format!(
                r#"<div class="skill-bar-container"><div class="skill-bar-label"><span>{name}</span><span>{percent}%</span></div><div class="skill-bar"><div class="skill-bar-fill" style="width:{percent}%"></div></div></div>"#,
                name = html_escape(&skill.name),
            ));
        }
        out.push_str("</div>");
    }

    out.push_str("</section>");
    out
}

pub(super) fn projects(ctx: &RenderContext, marks: &mut Marks) -> String {
    let projects = &ctx.record.projects;
    if projects.is_empty() {
        return String::new();
    }

    let truncate_at = ctx
        .pack
        .project_limit
        .filter(|limit| projects.len() > *limit);
    let shown = match truncate_at {
        Some(limit) if !ctx.toggles.show_all_projects => limit,
        _ => projects.len(),
    };

    let mut out = String::from(r#"<section id="projects" class="section">"#);
    out.push_str(&marks.open("div", "projects-heading", "", 0));
    out.push_str(r#"<h2 class="section-title">Featured Projects</h2></div>"#);
    out.push_str(r#"<div class="project-grid">"#);

    for (index, project) in projects.iter().take(shown).enumerate() {
        let id = format!("project-{}", project.id);
        out.push_str(&marks.open(
            "article",
            &id,
            "card project-card",
            stagger_delay_ms(index, ctx.pack.project_stagger_cap, 2),
        ));
        out.push_str(&format!("<h3>{}</h3>", html_escape(&project.name)));
        if let Some(description) = project.description.as_deref().filter(|d| !d.is_empty()) {
            out.push_str(&format!(r#"<p class="muted">{}</p>"#, html_escape(description)));
        }
        let languages = project.top_languages(TOP_LANGUAGES);
        if !languages.is_empty() {
            out.push_str(r#"<div class="languages">"#);
            for lang in languages {
                out.push_str(&format!(r#"<span class="skill-tag">{}</span>"#, html_escape(lang)));
            }
            out.push_str("</div>");
        }
        if let Some(url) = web_url(&project.url) {
            out.push_str(&format!(
                r#"<a class="github-link" href="{}" target="_blank" rel="noopener noreferrer">View Repository</a>"#,
                html_escape(url)
            ));
        }
        out.push_str("</article>");
    }
    out.push_str("</div>");

    if let Some(limit) = truncate_at {
        let flipped = UiToggles {
            show_all_projects: !ctx.toggles.show_all_projects,
            ..ctx.toggles
        };
        let label = if ctx.toggles.show_all_projects {
            "Show Less".to_string()
        } else {
            format!("Show All Projects ({} more)", projects.len() - limit)
        };
        out.push_str(&format!(
            r##"<div class="show-more"><a class="cta-button" href="{}#projects">{label}</a></div>"##,
            html_escape(&ctx.href(flipped))
        ));
    }

    out.push_str("</section>");
    out
}

pub(super) fn footer(ctx: &RenderContext, marks: &mut Marks) -> String {
    let username = &ctx.record.user.github_username;
    let mut out = String::from(r#"<footer id="contact" class="footer">"#);
    out.push_str(&marks.open("div", "contact", "", 0));
    out.push_str(&format!(
        r#"<a class="github-link" href="{}" target="_blank" rel="noopener noreferrer">View GitHub Profile</a><p class="muted">&copy; {}. Building the future, one pixel at a time.</p></div></footer>"#,
        html_escape(&github_url(username)),
        html_escape(username)
    ));
    out
}
