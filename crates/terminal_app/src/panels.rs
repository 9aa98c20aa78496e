//! Views for handler-built structured output.

use leptos::*;
use terminal_shell_contract::{
    CertificateItem, ContactLink, ExperienceItem, HelpRow, ProfileCard, ProjectCard,
    RecommendationItem, SkillCategory, StructuredView,
};

const GAUGE_WIDTH: usize = 20;

/// Link buttons shown under a project card.
pub fn project_links(card: &ProjectCard) -> Vec<(&'static str, String)> {
    let mut links = Vec::new();
    if let Some(url) = &card.repository_url {
        links.push(("Source", url.clone()));
    }
    if let Some(url) = &card.demo_url {
        links.push(("Live demo", url.clone()));
    }
    links
}

/// Text gauge line for one skill, e.g. `Rust [##################--] 90%`.
pub fn skill_line(name: &str, gauge: &str, level: u8) -> String {
    format!("{name:<14} {gauge} {level:>3}%")
}

/// Help column with the usage string when it differs from the bare name.
pub fn help_usage(row: &HelpRow) -> String {
    row.usage.clone().unwrap_or_else(|| row.name.clone())
}

fn external_link(label: String, url: String) -> impl IntoView {
    view! {
        <a class="terminal-link" href=url target="_blank" rel="noopener noreferrer">{label}</a>
    }
}

fn help_panel(rows: Vec<HelpRow>) -> View {
    view! {
        <table class="terminal-panel terminal-help">
            <tbody>
                {rows
                    .into_iter()
                    .map(|row| {
                        let usage = help_usage(&row);
                        view! {
                            <tr>
                                <td class="terminal-help-usage">{usage}</td>
                                <td class="terminal-help-description">{row.description}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_view()
}

fn profile_panel(card: ProfileCard) -> View {
    view! {
        <section class="terminal-panel terminal-profile">
            <h2>{card.name}</h2>
            <p class="terminal-profile-title">{card.title}</p>
            {card.location.map(|location| view! { <p class="terminal-muted">{location}</p> })}
            {card.bio.into_iter().map(|paragraph| view! { <p>{paragraph}</p> }).collect_view()}
        </section>
    }
    .into_view()
}

fn project_panel(card: ProjectCard) -> impl IntoView {
    let links = project_links(&card);
    view! {
        <article class="terminal-panel terminal-project">
            <h3>{format!("{}. {}", card.index, card.title)}</h3>
            <p>{card.description}</p>
            <ul class="terminal-tags">
                {card
                    .technologies
                    .into_iter()
                    .map(|tech| view! { <li>{tech}</li> })
                    .collect_view()}
            </ul>
            <div class="terminal-project-links">
                {links
                    .into_iter()
                    .map(|(label, url)| external_link(label.to_string(), url))
                    .collect_view()}
            </div>
        </article>
    }
}

fn skills_panel(categories: Vec<SkillCategory>) -> View {
    view! {
        <section class="terminal-panel terminal-skills">
            {categories
                .into_iter()
                .map(|category| {
                    view! {
                        <h3>{category.name}</h3>
                        <pre class="terminal-gauges">
                            {category
                                .skills
                                .iter()
                                .map(|bar| skill_line(&bar.name, &bar.gauge(GAUGE_WIDTH), bar.level))
                                .collect::<Vec<_>>()
                                .join("\n")}
                        </pre>
                    }
                })
                .collect_view()}
        </section>
    }
    .into_view()
}

fn experience_panel(items: Vec<ExperienceItem>) -> View {
    view! {
        <ol class="terminal-panel terminal-timeline">
            {items
                .into_iter()
                .map(|item| {
                    view! {
                        <li>
                            <h3>{format!("{} @ {}", item.role, item.company)}</h3>
                            <p class="terminal-muted">{item.period}</p>
                            <ul>
                                {item
                                    .highlights
                                    .into_iter()
                                    .map(|line| view! { <li>{line}</li> })
                                    .collect_view()}
                            </ul>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
    .into_view()
}

fn certificates_panel(items: Vec<CertificateItem>) -> View {
    view! {
        <ul class="terminal-panel terminal-certificates">
            {items
                .into_iter()
                .map(|item| {
                    view! {
                        <li>
                            <strong>{item.title}</strong>
                            <span class="terminal-muted">
                                {format!(" - {} ({})", item.issuer, item.issued)}
                            </span>
                            {item
                                .credential_url
                                .map(|url| external_link("Verify".to_string(), url))}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
    .into_view()
}

fn recommendations_panel(items: Vec<RecommendationItem>) -> View {
    view! {
        <section class="terminal-panel terminal-recommendations">
            {items
                .into_iter()
                .map(|item| {
                    view! {
                        <blockquote>
                            <p>{format!("\"{}\"", item.quote)}</p>
                            <footer>
                                {format!("{}. {}, {}", item.index, item.author, item.relation)}
                            </footer>
                        </blockquote>
                    }
                })
                .collect_view()}
        </section>
    }
    .into_view()
}

fn contact_panel(links: Vec<ContactLink>) -> View {
    view! {
        <ul class="terminal-panel terminal-contact">
            {links
                .into_iter()
                .map(|link| {
                    let label = format!("{}: {}", link.label, link.url.trim_start_matches("mailto:"));
                    view! { <li>{external_link(label, link.url)}</li> }
                })
                .collect_view()}
        </ul>
    }
    .into_view()
}

/// Renders one structured output block.
pub fn structured_panel(view: StructuredView) -> View {
    match view {
        StructuredView::Help { rows } => help_panel(rows),
        StructuredView::Profile(card) => profile_panel(card),
        StructuredView::ProjectList { items } => view! {
            <div class="terminal-projects">
                {items.into_iter().map(project_panel).collect_view()}
            </div>
        }
        .into_view(),
        StructuredView::ProjectDetail(card) => project_panel(card).into_view(),
        StructuredView::SkillBars { categories } => skills_panel(categories),
        StructuredView::Experience { items } => experience_panel(items),
        StructuredView::Certificates { items } => certificates_panel(items),
        StructuredView::Recommendations { items } => recommendations_panel(items),
        StructuredView::Contact { links } => contact_panel(links),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use terminal_shell_contract::SkillBar;

    use super::*;

    #[test]
    fn project_links_skip_missing_urls() {
        let mut card = ProjectCard {
            index: 1,
            title: "Site".to_string(),
            description: String::new(),
            technologies: Vec::new(),
            repository_url: Some("https://github.com/me/site".to_string()),
            demo_url: None,
        };
        assert_eq!(
            project_links(&card),
            vec![("Source", "https://github.com/me/site".to_string())]
        );
        card.repository_url = None;
        assert!(project_links(&card).is_empty());
    }

    #[test]
    fn skill_lines_align() {
        let bar = SkillBar {
            name: "Rust".to_string(),
            level: 90,
        };
        assert_eq!(
            skill_line(&bar.name, &bar.gauge(10), bar.level),
            "Rust           [#########-]  90%"
        );
    }

    #[test]
    fn help_usage_falls_back_to_name() {
        let row = HelpRow {
            name: "about".to_string(),
            description: "Who I am.".to_string(),
            usage: None,
        };
        assert_eq!(help_usage(&row), "about");
    }
}
