use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::content::{Certification, Education, Experience, Profile, Project, ProjectFilter};
use crate::content::ExperienceCategory;
use crate::theme::Theme;

/// Sections of the home page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    Education,
    Experience,
    Projects,
    Certifications,
    Footer,
}

impl SectionId {
    pub const ALL: [Self; 6] = [
        Self::Hero,
        Self::Education,
        Self::Experience,
        Self::Projects,
        Self::Certifications,
        Self::Footer,
    ];

    /// Fragment addressing this section; the hero is the bare page top.
    pub fn fragment(self) -> &'static str {
        match self {
            Self::Hero => "",
            Self::Education => "#education",
            Self::Experience => "#experience",
            Self::Projects => "#projects",
            Self::Certifications => "#certifications",
            Self::Footer => "#footer",
        }
    }

    pub fn from_fragment(fragment: &str) -> Option<Self> {
        match fragment {
            "" => Some(Self::Hero),
            "#education" => Some(Self::Education),
            "#experience" => Some(Self::Experience),
            "#projects" => Some(Self::Projects),
            "#certifications" => Some(Self::Certifications),
            "#footer" => Some(Self::Footer),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Hero => "Hero",
            Self::Education => "Education",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Certifications => "Certifications",
            Self::Footer => "Contact",
        }
    }
}

/// Everything the section renderers read; the app owns all of it.
pub struct SectionsView<'a> {
    pub profile: &'a Profile,
    pub theme: Theme,
    pub experience_tab: ExperienceCategory,
    pub project_filter: ProjectFilter,
    /// One carousel position per experience entry, aligned by index.
    pub carousel_index: &'a [usize],
}

pub struct SectionRender {
    pub id: SectionId,
    pub lines: Vec<Line<'static>>,
}

/// Builds every home section as styled lines. Sections that have not
/// revealed yet render dimmed, standing in for the entrance animation.
pub fn build_home_sections(
    view: &SectionsView<'_>,
    width: u16,
    visible: impl Fn(SectionId) -> bool,
) -> Vec<SectionRender> {
    SectionId::ALL
        .iter()
        .map(|&id| {
            let mut lines = match id {
                SectionId::Hero => hero_lines(view, width),
                SectionId::Education => education_lines(view, width),
                SectionId::Experience => experience_lines(view, width),
                SectionId::Projects => projects_lines(view, width),
                SectionId::Certifications => certifications_lines(view, width),
                SectionId::Footer => footer_lines(view),
            };
            if !visible(id) {
                let dim = Style::default().add_modifier(Modifier::DIM);
                for line in &mut lines {
                    line.style = line.style.patch(dim);
                }
            }
            SectionRender { id, lines }
        })
        .collect()
}

/// The `/about` route: long-form bio plus contact links.
pub fn build_about_page(profile: &Profile, theme: Theme, width: u16) -> Vec<Line<'static>> {
    let mut lines = header_lines("About", &profile.name, theme);
    for paragraph in &profile.about {
        for wrapped in wrap_text(paragraph, width) {
            lines.push(Line::from(Span::styled(
                wrapped,
                Style::default().fg(theme.foreground()),
            )));
        }
        lines.push(Line::default());
    }
    for link in &profile.links {
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", link.label), Style::default().fg(theme.muted())),
            Span::styled(link.href.clone(), Style::default().fg(theme.accent())),
        ]));
    }
    lines
}

fn header_lines(kicker: &str, title: &str, theme: Theme) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            kicker.to_uppercase(),
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(theme.foreground())
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ]
}

fn hero_lines(view: &SectionsView<'_>, width: u16) -> Vec<Line<'static>> {
    let theme = view.theme;
    let mut lines = vec![
        Line::from(Span::styled(
            view.profile.name.to_uppercase(),
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            view.profile.tagline.clone(),
            Style::default().fg(theme.foreground()),
        )),
        Line::default(),
    ];
    for paragraph in &view.profile.about {
        for wrapped in wrap_text(paragraph, width) {
            lines.push(Line::from(Span::styled(
                wrapped,
                Style::default().fg(theme.muted()),
            )));
        }
    }
    lines
}

fn education_lines(view: &SectionsView<'_>, width: u16) -> Vec<Line<'static>> {
    let theme = view.theme;
    let mut lines = header_lines("Education", "Where I studied", theme);
    for entry in &view.profile.education {
        lines.extend(education_entry(entry, theme, width));
    }
    lines
}

fn education_entry(entry: &Education, theme: Theme, width: u16) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(
            entry.school.clone(),
            Style::default()
                .fg(theme.foreground())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {} ({})", entry.degree, entry.period),
            Style::default().fg(theme.muted()),
        ),
    ])];
    for highlight in &entry.highlights {
        lines.extend(bullet_lines(highlight, theme, width));
    }
    lines
}

fn experience_lines(view: &SectionsView<'_>, width: u16) -> Vec<Line<'static>> {
    let theme = view.theme;
    let mut lines = header_lines("Experience", "Where I have worked", theme);
    lines.push(tab_row(view.experience_tab, theme));
    lines.push(Line::default());

    for (index, entry) in view.profile.experience.iter().enumerate() {
        if entry.category != view.experience_tab {
            continue;
        }
        let carousel = view.carousel_index.get(index).copied().unwrap_or(0);
        lines.extend(experience_entry(entry, carousel, theme, width));
        lines.push(Line::default());
    }
    lines
}

fn tab_row(active: ExperienceCategory, theme: Theme) -> Line<'static> {
    let mut spans = Vec::new();
    for (position, category) in ExperienceCategory::ALL.iter().enumerate() {
        if position > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(theme.muted())));
        }
        if *category == active {
            spans.push(Span::styled(
                format!("[{}]", category.label()),
                Style::default()
                    .fg(theme.accent())
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(
                category.label().to_string(),
                Style::default().fg(theme.muted()),
            ));
        }
    }
    Line::from(spans)
}

fn experience_entry(
    entry: &Experience,
    carousel: usize,
    theme: Theme,
    width: u16,
) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(
            entry.role.clone(),
            Style::default()
                .fg(theme.foreground())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {} ({})", entry.organization, entry.period),
            Style::default().fg(theme.muted()),
        ),
    ])];
    if !entry.summary.is_empty() {
        for wrapped in wrap_text(&entry.summary, width) {
            lines.push(Line::from(Span::styled(
                wrapped,
                Style::default().fg(theme.foreground()),
            )));
        }
    }
    for highlight in &entry.highlights {
        lines.extend(bullet_lines(highlight, theme, width));
    }
    if !entry.images.is_empty() {
        let shown = carousel % entry.images.len();
        lines.push(Line::from(Span::styled(
            format!(
                "  ‹ [{}/{}] {} ›",
                shown + 1,
                entry.images.len(),
                entry.images[shown]
            ),
            Style::default().fg(theme.accent()),
        )));
    }
    lines
}

fn projects_lines(view: &SectionsView<'_>, width: u16) -> Vec<Line<'static>> {
    let theme = view.theme;
    let mut lines = header_lines("Projects", "Featured work", theme);
    lines.push(Line::from(Span::styled(
        format!("Filter: {}", view.project_filter.label()),
        Style::default().fg(theme.muted()),
    )));
    lines.push(Line::default());

    let mut shown = 0usize;
    for project in &view.profile.projects {
        if !view.project_filter.matches(project) {
            continue;
        }
        shown += 1;
        lines.extend(project_entry(project, theme, width));
        lines.push(Line::default());
    }
    if shown == 0 {
        lines.push(Line::from(Span::styled(
            "No projects match this filter.".to_string(),
            Style::default().fg(theme.muted()),
        )));
    }
    lines
}

fn project_entry(project: &Project, theme: Theme, width: u16) -> Vec<Line<'static>> {
    let mut title_spans = vec![Span::styled(
        project.title.clone(),
        Style::default()
            .fg(theme.foreground())
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(status) = project.status {
        title_spans.push(Span::styled(
            format!("  [{}]", status.label()),
            Style::default().fg(theme.accent()),
        ));
    }
    if let Some(period) = &project.period {
        title_spans.push(Span::styled(
            format!("  {period}"),
            Style::default().fg(theme.muted()),
        ));
    }

    let mut lines = vec![Line::from(title_spans)];
    for wrapped in wrap_text(&project.summary, width) {
        lines.push(Line::from(Span::styled(
            wrapped,
            Style::default().fg(theme.foreground()),
        )));
    }
    if !project.stack.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("  stack: {}", project.stack.join(", ")),
            Style::default().fg(theme.muted()),
        )));
    }
    for link in &project.links {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}: ", link.label), Style::default().fg(theme.muted())),
            Span::styled(link.href.clone(), Style::default().fg(theme.accent())),
        ]));
    }
    lines
}

fn certifications_lines(view: &SectionsView<'_>, width: u16) -> Vec<Line<'static>> {
    let theme = view.theme;
    let mut lines = header_lines("Certifications", "Credentials", theme);
    for cert in &view.profile.certifications {
        lines.extend(certification_entry(cert, theme, width));
        lines.push(Line::default());
    }
    lines
}

fn certification_entry(cert: &Certification, theme: Theme, width: u16) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(
            cert.issuer.to_uppercase(),
            Style::default().fg(theme.accent()),
        ),
        Span::styled(
            format!("  {} ({})", cert.title, cert.date),
            Style::default()
                .fg(theme.foreground())
                .add_modifier(Modifier::BOLD),
        ),
    ])];
    if !cert.description.is_empty() {
        for wrapped in wrap_text(&cert.description, width) {
            lines.push(Line::from(Span::styled(
                wrapped,
                Style::default().fg(theme.muted()),
            )));
        }
    }
    lines
}

fn footer_lines(view: &SectionsView<'_>) -> Vec<Line<'static>> {
    let theme = view.theme;
    let mut lines = header_lines("Contact", "Get in touch", theme);
    for link in &view.profile.links {
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", link.label), Style::default().fg(theme.muted())),
            Span::styled(link.href.clone(), Style::default().fg(theme.accent())),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("© {}", view.profile.name),
        Style::default().fg(theme.muted()),
    )));
    lines
}

fn bullet_lines(text: &str, theme: Theme, width: u16) -> Vec<Line<'static>> {
    wrap_text(text, width.saturating_sub(4))
        .into_iter()
        .enumerate()
        .map(|(index, wrapped)| {
            let marker = if index == 0 { "  - " } else { "    " };
            Line::from(vec![
                Span::styled(marker.to_string(), Style::default().fg(theme.muted())),
                Span::styled(wrapped, Style::default().fg(theme.foreground())),
            ])
        })
        .collect()
}

/// Greedy word wrap so section heights are known before the frame is drawn;
/// letting the paragraph widget wrap would desync the scroll arithmetic.
fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let limit = usize::from(width.max(1));
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
            continue;
        }
        if current.width() + 1 + word.width() <= limit {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
