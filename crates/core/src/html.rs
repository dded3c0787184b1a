//! Static HTML export: renders [`PageContent`] as a standalone page.
//!
//! The export is a plain document with no scripts. Theme choice is
//! baked in at export time through the CSS custom properties emitted
//! for the chosen mode.

use folio_protocol::{SectionId, ThemeMode, ThemeToken};

use crate::content::{PageContent, section_number};

/// Hex color for a token under a palette mode.
pub fn palette_hex(token: ThemeToken, mode: ThemeMode) -> &'static str {
    if mode.is_dark() {
        match token {
            ThemeToken::Background => "#111827",
            ThemeToken::Surface => "#1f2937",
            ThemeToken::Border => "#374151",
            ThemeToken::Rule => "#9ca3af",
            ThemeToken::TextPrimary => "#f3f4f6",
            ThemeToken::TextSecondary => "#d1d5db",
            ThemeToken::TextMuted => "#9ca3af",
            ThemeToken::Accent => "#4ade80",
            ThemeToken::AccentSoft => "#4ade801a",
        }
    } else {
        match token {
            ThemeToken::Background => "#f9fafb",
            ThemeToken::Surface => "#f3f4f6",
            ThemeToken::Border => "#e5e7eb",
            ThemeToken::Rule => "#9ca3af",
            ThemeToken::TextPrimary => "#111827",
            ThemeToken::TextSecondary => "#1f2937",
            ThemeToken::TextMuted => "#6b7280",
            ThemeToken::Accent => "#4ade80",
            ThemeToken::AccentSoft => "#4ade801a",
        }
    }
}

/// CSS custom property name for a token.
pub fn css_var(token: ThemeToken) -> &'static str {
    match token {
        ThemeToken::Background => "--bg",
        ThemeToken::Surface => "--surface",
        ThemeToken::Border => "--border",
        ThemeToken::Rule => "--rule",
        ThemeToken::TextPrimary => "--text-primary",
        ThemeToken::TextSecondary => "--text-secondary",
        ThemeToken::TextMuted => "--text-muted",
        ThemeToken::Accent => "--accent",
        ThemeToken::AccentSoft => "--accent-soft",
    }
}

/// Render the page as a complete HTML document.
pub fn export_html(content: &PageContent, mode: ThemeMode) -> String {
    let mut out = String::with_capacity(16 * 1024);
    let theme = if mode.is_dark() { "dark" } else { "light" };

    out.push_str("<!DOCTYPE html>\n");
    out.push_str(&format!("<html lang=\"en\" data-theme=\"{theme}\">\n<head>\n"));
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape_html(&content.hero.name)));
    push_style(&mut out, mode);
    out.push_str("</head>\n<body>\n");

    push_nav(&mut out, content);
    push_rail(&mut out, content);

    out.push_str("<main>\n");
    push_hero(&mut out, content);
    push_about(&mut out, content);
    push_experience(&mut out, content);
    push_projects(&mut out, content);
    push_contact(&mut out, content);
    out.push_str("</main>\n");

    out.push_str(&format!("<footer>{}</footer>\n", escape_html(&content.footer)));
    out.push_str("</body>\n</html>\n");
    out
}

fn push_style(out: &mut String, mode: ThemeMode) {
    out.push_str("<style>\n:root {\n");
    for token in ThemeToken::ALL {
        out.push_str(&format!("  {}: {};\n", css_var(token), palette_hex(token, mode)));
    }
    out.push_str("}\n");
    out.push_str(
        "* { margin: 0; padding: 0; box-sizing: border-box; }\n\
         body { background: var(--bg); color: var(--text-secondary); \
         font-family: ui-monospace, \"JetBrains Mono\", \"Fira Code\", monospace; \
         line-height: 1.6; }\n\
         a { color: inherit; text-decoration: none; }\n\
         a:hover { color: var(--accent); }\n\
         .nav { position: fixed; top: 0; left: 0; right: 0; display: flex; \
         align-items: center; justify-content: space-between; padding: 16px 32px; \
         background: var(--bg); border-bottom: 1px solid var(--border); z-index: 10; }\n\
         .nav .monogram { color: var(--text-primary); font-weight: 700; font-size: 20px; }\n\
         .nav ol { display: flex; gap: 28px; list-style: none; }\n\
         .nav li a { color: var(--text-secondary); font-size: 13px; }\n\
         .nav .index { color: var(--accent); margin-right: 6px; }\n\
         .rail { position: fixed; left: 28px; bottom: 0; display: flex; \
         flex-direction: column; align-items: center; gap: 18px; }\n\
         .rail a { color: var(--text-muted); font-size: 14px; }\n\
         .rail .rule { width: 1px; height: 90px; background: var(--rule); }\n\
         main { max-width: 720px; margin: 0 auto; padding: 0 24px; }\n\
         section { min-height: 100vh; display: flex; flex-direction: column; \
         justify-content: center; padding: 96px 0; }\n\
         h2.heading { color: var(--text-primary); font-size: 26px; margin-bottom: 28px; }\n\
         h2.heading .index { color: var(--accent); margin-right: 10px; }\n\
         #home .greeting { color: var(--accent); margin-bottom: 16px; }\n\
         #home h1 { color: var(--text-primary); font-size: 56px; }\n\
         #home .tagline { color: var(--text-secondary); font-size: 40px; margin-bottom: 24px; }\n\
         #home .intro { color: var(--text-muted); max-width: 540px; }\n\
         .skills { display: grid; grid-template-columns: repeat(3, 1fr); gap: 8px; \
         margin-top: 20px; list-style: none; }\n\
         .skills li::before { content: \"\\25b9 \"; color: var(--accent); }\n\
         .entry { margin-bottom: 36px; }\n\
         .entry h3 { color: var(--text-primary); font-size: 18px; }\n\
         .entry .org { color: var(--accent); }\n\
         .entry .dates { color: var(--text-muted); font-size: 13px; margin-bottom: 12px; }\n\
         .entry ul { list-style: none; }\n\
         .entry li { color: var(--text-secondary); margin-bottom: 8px; }\n\
         .entry li::before { content: \"\\25b9 \"; color: var(--accent); }\n\
         .card { background: var(--surface); border-radius: 6px; padding: 28px; \
         margin-bottom: 32px; }\n\
         .card .featured { color: var(--accent); font-size: 12px; \
         letter-spacing: 0.1em; text-transform: uppercase; }\n\
         .card h3 { color: var(--text-primary); font-size: 20px; margin: 8px 0 14px; }\n\
         .card p { color: var(--text-muted); margin-bottom: 16px; }\n\
         .card ul { display: flex; flex-wrap: wrap; gap: 14px; list-style: none; \
         color: var(--text-secondary); font-size: 13px; }\n\
         #contact { text-align: center; align-items: center; }\n\
         #contact h3 { color: var(--text-primary); font-size: 34px; }\n\
         #contact .blurb { color: var(--text-muted); max-width: 480px; \
         margin: 18px auto 36px; }\n\
         .cta { display: inline-block; border: 1px solid var(--accent); \
         color: var(--accent); background: var(--accent-soft); border-radius: 4px; \
         padding: 14px 28px; }\n\
         footer { text-align: center; color: var(--text-muted); font-size: 12px; \
         padding: 28px 0; }\n\
         @media (max-width: 760px) {\n\
           .nav ol, .rail { display: none; }\n\
           #home h1 { font-size: 40px; }\n\
           .skills { grid-template-columns: repeat(2, 1fr); }\n\
         }\n",
    );
    out.push_str("</style>\n");
}

fn push_nav(out: &mut String, content: &PageContent) {
    out.push_str("<header class=\"nav\">\n");
    out.push_str(&format!(
        "<a class=\"monogram\" href=\"#home\">{}</a>\n",
        escape_html(&content.monogram)
    ));
    out.push_str("<nav><ol>\n");
    for (i, item) in content.nav.iter().enumerate() {
        out.push_str(&format!(
            "<li><a href=\"#{}\"><span class=\"index\">{:02}.</span>{}</a></li>\n",
            item.target.anchor(),
            i + 1,
            escape_html(&item.label)
        ));
    }
    out.push_str("</ol></nav>\n</header>\n");
}

fn push_rail(out: &mut String, content: &PageContent) {
    out.push_str("<aside class=\"rail\">\n");
    out.push_str(&format!(
        "<a href=\"{}\" aria-label=\"LinkedIn\">in</a>\n",
        escape_html(&content.links.linkedin)
    ));
    out.push_str(&format!(
        "<a href=\"mailto:{}\" aria-label=\"Email\">@</a>\n",
        escape_html(&content.links.email)
    ));
    out.push_str("<div class=\"rule\"></div>\n</aside>\n");
}

fn push_heading(out: &mut String, content: &PageContent, id: SectionId) {
    if let (Some(n), Some(title)) = (section_number(id), content.section_title(id)) {
        out.push_str(&format!(
            "<h2 class=\"heading\"><span class=\"index\">{:02}.</span>{}</h2>\n",
            n,
            escape_html(title)
        ));
    }
}

fn push_hero(out: &mut String, content: &PageContent) {
    let hero = &content.hero;
    out.push_str("<section id=\"home\">\n");
    out.push_str(&format!("<p class=\"greeting\">{}</p>\n", escape_html(&hero.greeting)));
    out.push_str(&format!("<h1>{}</h1>\n", escape_html(&hero.name)));
    out.push_str(&format!("<p class=\"tagline\">{}</p>\n", escape_html(&hero.tagline)));
    out.push_str(&format!("<p class=\"intro\">{}</p>\n", escape_html(&hero.intro)));
    out.push_str("</section>\n");
}

fn push_about(out: &mut String, content: &PageContent) {
    out.push_str("<section id=\"about\">\n");
    push_heading(out, content, SectionId::About);
    for para in &content.about.paragraphs {
        out.push_str(&format!("<p>{}</p>\n", escape_html(para)));
    }
    out.push_str(&format!("<p>{}</p>\n", escape_html(&content.about.skills_intro)));
    out.push_str("<ul class=\"skills\">\n");
    for skill in &content.about.skills {
        out.push_str(&format!("<li>{}</li>\n", escape_html(skill)));
    }
    out.push_str("</ul>\n</section>\n");
}

fn push_experience(out: &mut String, content: &PageContent) {
    out.push_str("<section id=\"experience\">\n");
    push_heading(out, content, SectionId::Experience);
    for entry in &content.experience {
        out.push_str("<div class=\"entry\">\n");
        out.push_str(&format!("<h3>{}</h3>\n", escape_html(&entry.role)));
        out.push_str(&format!(
            "<p class=\"org\">@ {}</p>\n",
            escape_html(&entry.organization)
        ));
        out.push_str(&format!("<p class=\"dates\">{}</p>\n", escape_html(&entry.date_range)));
        out.push_str("<ul>\n");
        for bullet in &entry.bullets {
            out.push_str(&format!("<li>{}</li>\n", escape_html(bullet)));
        }
        out.push_str("</ul>\n</div>\n");
    }
    out.push_str("</section>\n");
}

fn push_projects(out: &mut String, content: &PageContent) {
    out.push_str("<section id=\"projects\">\n");
    push_heading(out, content, SectionId::Projects);
    for project in &content.projects {
        out.push_str("<div class=\"card\">\n");
        out.push_str("<p class=\"featured\">Featured Project</p>\n");
        out.push_str(&format!("<h3>{}</h3>\n", escape_html(&project.name)));
        out.push_str(&format!("<p>{}</p>\n", escape_html(&project.description)));
        out.push_str("<ul>\n");
        for tag in &project.tags {
            out.push_str(&format!("<li>{}</li>\n", escape_html(tag)));
        }
        out.push_str("</ul>\n</div>\n");
    }
    out.push_str("</section>\n");
}

fn push_contact(out: &mut String, content: &PageContent) {
    let contact = &content.contact;
    out.push_str("<section id=\"contact\">\n");
    push_heading(out, content, SectionId::Contact);
    out.push_str(&format!("<h3>{}</h3>\n", escape_html(&contact.headline)));
    out.push_str(&format!("<p class=\"blurb\">{}</p>\n", escape_html(&contact.blurb)));
    out.push_str(&format!(
        "<a class=\"cta\" href=\"mailto:{}\">{}</a>\n",
        escape_html(&content.links.email),
        escape_html(&contact.cta_label)
    ));
    out.push_str("</section>\n");
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn export(mode: ThemeMode) -> String {
        export_html(&PageContent::builtin(), mode)
    }

    #[test]
    fn every_section_gets_an_anchor() {
        let html = export(ThemeMode::Dark);
        for id in SectionId::ALL {
            assert!(html.contains(&format!("id=\"{id}\"")), "missing anchor for {id}");
        }
    }

    #[test]
    fn nav_links_point_at_fragments() {
        let html = export(ThemeMode::Dark);
        assert!(html.contains("href=\"#about\""));
        assert!(html.contains("href=\"#contact\""));
        assert!(html.contains("<span class=\"index\">01.</span>About"));
        // The hero is reachable through the monogram, not the item list.
        assert!(html.contains("class=\"monogram\" href=\"#home\""));
        assert!(!html.contains("</span>Home</a>"));
    }

    #[test]
    fn rail_and_cta_both_reach_the_mailbox() {
        let html = export(ThemeMode::Dark);
        assert_eq!(html.matches("mailto:ianwong.gatech@gmail.com").count(), 2);
        assert!(html.contains("https://www.linkedin.com/in/ian-wong-gt/"));
    }

    #[test]
    fn palette_follows_the_mode() {
        let dark = export(ThemeMode::Dark);
        let light = export(ThemeMode::Light);
        assert!(dark.contains("data-theme=\"dark\""));
        assert!(dark.contains("--bg: #111827;"));
        assert!(light.contains("data-theme=\"light\""));
        assert!(light.contains("--bg: #f9fafb;"));
        assert!(dark.contains("#4ade80") && light.contains("#4ade80"));
    }

    #[test]
    fn body_copy_is_escaped() {
        let html = export(ThemeMode::Dark);
        assert!(html.contains("Rust &amp; Ratatui"));
        assert!(html.contains("I&apos;m a computer science graduate student"));
        assert!(!html.contains("Rust & Ratatui"));
    }

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape_html("<a & \"b\">"), "&lt;a &amp; &quot;b&quot;&gt;");
    }

    #[test]
    fn every_token_has_a_var_and_both_hexes() {
        for token in ThemeToken::ALL {
            assert!(css_var(token).starts_with("--"));
            assert!(palette_hex(token, ThemeMode::Dark).starts_with('#'));
            assert!(palette_hex(token, ThemeMode::Light).starts_with('#'));
        }
    }
}
