use std::rc::Rc;

use portfolio_host::{Project, Recommendation};
use terminal_shell::{Command, CommandContext};
use terminal_shell_contract::{
    CertificateItem, CommandDescriptor, CommandOutput, ContactLink, ExperienceItem, ProfileCard,
    ProjectCard, RecommendationItem, ShellError, SkillBar, SkillCategory, StructuredView,
};

use super::{host_error, parse_index};
use crate::{config::ShellConfig, ShellServices};

pub(super) fn registrations(services: &ShellServices, config: &Rc<ShellConfig>) -> Vec<Command> {
    let about = services.clone();
    let projects = services.clone();
    let skills = services.clone();
    let experience = services.clone();
    let certificates = services.clone();
    let recommendations = services.clone();
    let contact = (services.clone(), config.clone());
    let funfact = services.clone();
    vec![
        Command::from_fn(
            CommandDescriptor::new("about", "Learn who I am and what I do."),
            move |_| about_output(about.clone()),
        ),
        Command::from_fn(
            CommandDescriptor::new("projects", "Browse my projects; pass a number for details.")
                .with_usage("projects [number]"),
            move |context| projects_output(projects.clone(), context),
        ),
        Command::from_fn(
            CommandDescriptor::new("skills", "See my technical skills."),
            move |_| skills_output(skills.clone()),
        ),
        Command::from_fn(
            CommandDescriptor::new("experience", "View my work history."),
            move |_| experience_output(experience.clone()),
        ),
        Command::from_fn(
            CommandDescriptor::new("certificates", "List my certifications."),
            move |_| certificates_output(certificates.clone()),
        ),
        Command::from_fn(
            CommandDescriptor::new(
                "recommendations",
                "Read what colleagues say; pass a number for one quote.",
            )
            .with_usage("recommendations [number]"),
            move |context| recommendations_output(recommendations.clone(), context),
        ),
        Command::from_fn(
            CommandDescriptor::new("contact", "Get in touch."),
            move |_| contact_output(contact.0.clone(), contact.1.clone()),
        ),
        Command::from_fn(
            CommandDescriptor::new("funfact", "Hear a random fact about me."),
            move |_| funfact_output(funfact.clone()),
        ),
    ]
}

async fn about_output(services: ShellServices) -> Result<CommandOutput, ShellError> {
    let profile = services.portfolio.profile().await.map_err(host_error)?;
    Ok(StructuredView::Profile(ProfileCard {
        name: profile.name,
        title: profile.title,
        location: profile.location,
        bio: profile.bio,
    })
    .into())
}

/// Featured projects first, otherwise in document order.
fn ordered_projects(mut projects: Vec<Project>) -> Vec<Project> {
    projects.sort_by_key(|project| !project.featured);
    projects
}

fn project_card(index: usize, project: Project, detailed: bool) -> ProjectCard {
    let description = match (detailed, project.description) {
        (true, Some(description)) => description,
        _ => project.summary,
    };
    ProjectCard {
        index,
        title: project.title,
        description,
        technologies: project.technologies,
        repository_url: project.repository_url,
        demo_url: project.demo_url,
    }
}

async fn projects_output(
    services: ShellServices,
    context: CommandContext,
) -> Result<CommandOutput, ShellError> {
    let projects = ordered_projects(services.portfolio.projects().await.map_err(host_error)?);
    if let Some(raw) = context.args.first() {
        let index = parse_index(raw, projects.len(), "project")?;
        return Ok(match projects.into_iter().nth(index - 1) {
            Some(project) => StructuredView::ProjectDetail(project_card(index, project, true)).into(),
            None => CommandOutput::info("No projects to show yet."),
        });
    }
    if projects.is_empty() {
        return Ok(CommandOutput::info("No projects to show yet."));
    }
    let items = projects
        .into_iter()
        .enumerate()
        .map(|(offset, project)| project_card(offset + 1, project, false))
        .collect();
    Ok(StructuredView::ProjectList { items }.into())
}

async fn skills_output(services: ShellServices) -> Result<CommandOutput, ShellError> {
    let groups = services.portfolio.skills().await.map_err(host_error)?;
    let categories = groups
        .into_iter()
        .map(|group| SkillCategory {
            name: group.category,
            skills: group
                .skills
                .into_iter()
                .map(|skill| SkillBar {
                    name: skill.name,
                    level: skill.level.min(100),
                })
                .collect(),
        })
        .collect();
    Ok(StructuredView::SkillBars { categories }.into())
}

async fn experience_output(services: ShellServices) -> Result<CommandOutput, ShellError> {
    let positions = services.portfolio.experience().await.map_err(host_error)?;
    if positions.is_empty() {
        return Ok(CommandOutput::info("No work history recorded yet."));
    }
    let items = positions
        .into_iter()
        .map(|position| ExperienceItem {
            period: position.period(),
            role: position.role,
            company: position.company,
            highlights: position.highlights,
        })
        .collect();
    Ok(StructuredView::Experience { items }.into())
}

async fn certificates_output(services: ShellServices) -> Result<CommandOutput, ShellError> {
    let certificates = services.portfolio.certificates().await.map_err(host_error)?;
    if certificates.is_empty() {
        return Ok(CommandOutput::info("No certificates recorded yet."));
    }
    let items = certificates
        .into_iter()
        .map(|certificate| CertificateItem {
            title: certificate.title,
            issuer: certificate.issuer,
            issued: certificate.issued,
            credential_url: certificate.credential_url,
        })
        .collect();
    Ok(StructuredView::Certificates { items }.into())
}

fn recommendation_item(index: usize, recommendation: Recommendation) -> RecommendationItem {
    RecommendationItem {
        index,
        author: recommendation.author,
        relation: recommendation.relation,
        quote: recommendation.quote,
    }
}

async fn recommendations_output(
    services: ShellServices,
    context: CommandContext,
) -> Result<CommandOutput, ShellError> {
    let recommendations = services
        .portfolio
        .recommendations()
        .await
        .map_err(host_error)?;
    let items: Vec<RecommendationItem> = match context.args.first() {
        Some(raw) => {
            let index = parse_index(raw, recommendations.len(), "recommendation")?;
            recommendations
                .into_iter()
                .nth(index - 1)
                .map(|recommendation| recommendation_item(index, recommendation))
                .into_iter()
                .collect()
        }
        None => recommendations
            .into_iter()
            .enumerate()
            .map(|(offset, recommendation)| recommendation_item(offset + 1, recommendation))
            .collect(),
    };
    if items.is_empty() {
        return Ok(CommandOutput::info("No recommendations yet."));
    }
    Ok(StructuredView::Recommendations { items }.into())
}

async fn contact_output(
    services: ShellServices,
    config: Rc<ShellConfig>,
) -> Result<CommandOutput, ShellError> {
    let profile = services.portfolio.profile().await.map_err(host_error)?;
    let email = config.contact_email.clone().unwrap_or(profile.email);
    let mut links = vec![ContactLink {
        label: "Email".to_string(),
        url: format!("mailto:{email}"),
    }];
    links.extend(profile.social.into_iter().map(|link| ContactLink {
        label: link.label,
        url: link.url,
    }));
    Ok(StructuredView::Contact { links }.into())
}

async fn funfact_output(services: ShellServices) -> Result<CommandOutput, ShellError> {
    let fact = services
        .portfolio
        .random_fun_fact()
        .await
        .map_err(host_error)?;
    Ok(CommandOutput::info(format!("Fun fact: {fact}")))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn project(title: &str, featured: bool) -> Project {
        Project {
            title: title.to_string(),
            summary: format!("{title} summary"),
            description: Some(format!("{title} in depth")),
            technologies: Vec::new(),
            repository_url: None,
            demo_url: None,
            featured,
        }
    }

    #[test]
    fn featured_projects_lead_in_stable_order() {
        let ordered = ordered_projects(vec![
            project("a", false),
            project("b", true),
            project("c", false),
            project("d", true),
        ]);
        let titles: Vec<_> = ordered.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn detail_cards_prefer_the_long_description() {
        assert_eq!(project_card(2, project("x", false), true).description, "x in depth");
        assert_eq!(project_card(2, project("x", false), false).description, "x summary");
        let mut bare = project("y", false);
        bare.description = None;
        assert_eq!(project_card(1, bare, true).description, "y summary");
    }
}
