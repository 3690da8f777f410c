//! Content renderer: the pure projection from profile data to a document.
//!
//! `build_document` maps every section of the static [`Profile`] to styled
//! lines, 1:1 and order-preserving. It owns no state; rendering the same
//! profile twice produces an identical document except for the footer year,
//! which is computed at render time.
//!
//! Section anchors (the rows the navbar jumps to) are recorded as each
//! heading is emitted.

use chrono::Datelike;

use crate::layout::{string_width, truncate_text, wrap_text};
use crate::profile::{
    AboutInfo, EducationEntry, ExperienceEntry, HeaderInfo, InterestItem, Profile,
    PublicationEntry,
};
use crate::render::buffer::Style;
use crate::state::{AnchorMap, SectionId};
use crate::theme::Theme;
use crate::types::Attr;

/// Widest the text column ever gets, however wide the terminal is.
const MAX_TEXT_WIDTH: u16 = 76;

/// Left margin of the text column.
const MARGIN: u16 = 2;

// =============================================================================
// Document model
// =============================================================================

/// A styled run of text within a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// One document row: an indent and its spans.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    pub indent: u16,
    pub spans: Vec<Span>,
}

impl Line {
    /// Display width of the line including its indent.
    pub fn width(&self) -> u16 {
        self.indent
            + self
                .spans
                .iter()
                .map(|span| string_width(&span.text))
                .sum::<u16>()
    }
}

/// The fully projected page: ordered lines plus the section anchor map.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub lines: Vec<Line>,
    pub anchors: AnchorMap,
}

impl Document {
    /// Total document height in rows.
    #[inline]
    pub fn rows(&self) -> u16 {
        self.lines.len().min(u16::MAX as usize) as u16
    }
}

// =============================================================================
// Builder
// =============================================================================

struct DocumentBuilder<'a> {
    theme: &'a Theme,
    text_width: u16,
    lines: Vec<Line>,
    anchors: AnchorMap,
}

impl<'a> DocumentBuilder<'a> {
    fn new(theme: &'a Theme, width: u16) -> Self {
        Self {
            theme,
            text_width: width.saturating_sub(MARGIN * 2).clamp(20, MAX_TEXT_WIDTH),
            lines: Vec::new(),
            anchors: AnchorMap::new(),
        }
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn line(&mut self, indent: u16, spans: Vec<Span>) {
        self.lines.push(Line {
            indent: MARGIN + indent,
            spans,
        });
    }

    fn span(&mut self, indent: u16, text: impl Into<String>, style: Style) {
        self.line(indent, vec![Span::new(text, style)]);
    }

    /// Wrapped paragraph, one line per row.
    fn para(&mut self, indent: u16, text: &str, style: Style) {
        let width = self.text_width.saturating_sub(indent);
        for wrapped in wrap_text(text, width) {
            self.span(indent, wrapped, style.clone());
        }
    }

    /// Wrapped paragraph behind a one-off prefix ("• ", "│ ", "▸ ");
    /// continuation rows align under the first character after the prefix.
    fn prefixed_para(&mut self, prefix: &str, prefix_style: Style, text: &str, style: Style) {
        let prefix_width = string_width(prefix);
        let width = self.text_width.saturating_sub(prefix_width);
        for (i, wrapped) in wrap_text(text, width).into_iter().enumerate() {
            if i == 0 {
                self.line(
                    0,
                    vec![
                        Span::new(prefix, prefix_style.clone()),
                        Span::new(wrapped, style.clone()),
                    ],
                );
            } else {
                self.span(prefix_width, wrapped, style.clone());
            }
        }
    }

    /// Section heading with an underline rule; records the anchor row.
    fn heading(&mut self, id: SectionId, title: &str) {
        self.anchors.insert(id, self.lines.len() as u16);
        self.span(
            0,
            title.to_uppercase(),
            Style::fg(self.theme.primary).with_attrs(Attr::BOLD),
        );
        self.span(0, "─".repeat(24), Style::fg(self.theme.accent));
        self.blank();
    }

    /// Smaller heading used inside the portfolio section's two columns.
    fn subheading(&mut self, title: &str) {
        self.span(0, title, Style::fg(self.theme.text).with_attrs(Attr::BOLD));
        self.blank();
    }

    // =========================================================================
    // Sections
    // =========================================================================

    fn hero(&mut self, header: &HeaderInfo) {
        let theme = *self.theme;

        self.blank();
        self.span(
            0,
            "ACADEMIC & RESEARCHER",
            Style::fg(theme.accent).with_attrs(Attr::BOLD),
        );
        self.blank();
        self.para(0, &header.name, Style::fg(theme.primary).with_attrs(Attr::BOLD));
        self.para(0, &header.title, Style::fg(theme.text));
        self.prefixed_para(
            "⌖ ",
            Style::fg(theme.text_muted),
            &header.location,
            Style::fg(theme.text_muted),
        );
        self.blank();

        let link_style = |url: &str| {
            Style::fg(theme.link)
                .with_attrs(Attr::UNDERLINE)
                .with_link(url.to_string())
        };
        self.line(
            0,
            vec![
                Span::new("LinkedIn", link_style(&header.linkedin)),
                Span::new("   ", Style::default()),
                Span::new("GitHub", link_style(&header.github)),
                Span::new("   ", Style::default()),
                Span::new("Scholar", link_style(&header.scholar)),
            ],
        );
        self.blank();
        self.line(
            0,
            vec![
                Span::new(
                    " Contact Work ✉ ",
                    Style::fg(theme.bg)
                        .with_bg(theme.primary)
                        .with_attrs(Attr::BOLD)
                        .with_link(header.mailto_work()),
                ),
                Span::new("  ", Style::default()),
                Span::new(
                    " Contact Research ✉ ",
                    Style::fg(theme.text)
                        .with_bg(theme.chip_bg)
                        .with_link(header.mailto_research()),
                ),
            ],
        );
        self.blank();
        self.blank();
    }

    fn about(&mut self, about: &AboutInfo, interests: &[InterestItem]) {
        let theme = *self.theme;

        self.heading(SectionId::About, "About & Vision");
        self.para(0, &about.summary, Style::fg(theme.text));
        self.blank();
        self.span(
            0,
            "Research Goal",
            Style::fg(theme.accent).with_attrs(Attr::BOLD),
        );
        self.para(0, &about.vision, Style::fg(theme.text).with_attrs(Attr::ITALIC));
        self.blank();

        self.span(0, "Core Interests", Style::fg(theme.text).with_attrs(Attr::BOLD));
        self.blank();
        for interest in interests {
            self.prefixed_para(
                "▸ ",
                Style::fg(theme.accent),
                &interest.title,
                Style::fg(theme.text).with_attrs(Attr::BOLD),
            );
            self.para(2, &interest.description, Style::fg(theme.text_muted));
            self.blank();
        }
        self.blank();
    }

    fn experience(&mut self, entries: &[ExperienceEntry]) {
        let theme = *self.theme;

        self.heading(SectionId::Experience, "Professional Experience");
        for entry in entries {
            self.para(0, &entry.period, Style::fg(theme.accent).with_attrs(Attr::BOLD));
            self.prefixed_para(
                "│ ",
                Style::fg(theme.accent),
                &entry.role,
                Style::fg(theme.text).with_attrs(Attr::BOLD),
            );
            self.prefixed_para(
                "│ ",
                Style::fg(theme.accent),
                &entry.company,
                Style::fg(theme.text_muted),
            );
            self.para(2, &entry.description, Style::fg(theme.text));
            self.blank();
        }
        self.blank();
    }

    fn education(&mut self, entries: &[EducationEntry]) {
        let theme = *self.theme;

        self.heading(SectionId::Education, "Education History");
        for entry in entries {
            self.para(0, &entry.degree, Style::fg(theme.text).with_attrs(Attr::BOLD));
            self.para(0, &entry.school, Style::fg(theme.primary));
            self.para(
                0,
                &format!("{} · {}", entry.period, entry.grade),
                Style::fg(theme.text_muted),
            );
            // Optional note: absent means no row at all, not a placeholder
            if let Some(note) = &entry.note {
                self.para(0, note, Style::fg(theme.text_muted).with_attrs(Attr::ITALIC));
            }
            self.blank();
        }
        self.blank();
    }

    fn publications(&mut self, entries: &[PublicationEntry]) {
        let theme = *self.theme;

        self.heading(SectionId::Publications, "Selected Publications");
        for entry in entries {
            let url = entry.doi_url();
            let title_style = Style::fg(theme.text)
                .with_attrs(Attr::BOLD)
                .with_link(url.clone());
            for wrapped in wrap_text(&entry.title, self.text_width) {
                self.span(0, wrapped, title_style.clone());
            }
            // Publisher gives way to the link affordance on narrow terminals
            let publisher_width = self.text_width.saturating_sub(15);
            self.line(
                0,
                vec![
                    Span::new(
                        truncate_text(&entry.publisher, publisher_width),
                        Style::fg(theme.text_muted),
                    ),
                    Span::new("   ", Style::default()),
                    Span::new(
                        "View paper ↗",
                        Style::fg(theme.link)
                            .with_attrs(Attr::UNDERLINE)
                            .with_link(url),
                    ),
                ],
            );
            self.blank();
        }
        self.blank();
    }

    fn portfolio(&mut self, projects: &[String], skills: &[String]) {
        let theme = *self.theme;

        self.heading(SectionId::Portfolio, "Portfolio & Skills");
        self.subheading("Key Projects & Certifications");
        for project in projects {
            self.prefixed_para("• ", Style::fg(theme.accent), project, Style::fg(theme.text));
        }
        self.blank();

        self.subheading("Technical Arsenal");
        // Skill chips flow left to right, wrapping at the text column edge
        let mut row: Vec<Span> = Vec::new();
        let mut row_width = 0u16;
        for skill in skills {
            let chip = format!(" {} ", skill);
            let chip_width = string_width(&chip) + 1;
            if row_width + chip_width > self.text_width && !row.is_empty() {
                self.line(0, std::mem::take(&mut row));
                row_width = 0;
            }
            if !row.is_empty() {
                row.push(Span::new(" ", Style::default()));
            }
            row.push(Span::new(chip, Style::fg(theme.text).with_bg(theme.chip_bg)));
            row_width += chip_width;
        }
        if !row.is_empty() {
            self.line(0, row);
        }
        self.blank();
        self.blank();
    }

    fn footer(&mut self, header: &HeaderInfo) {
        let theme = *self.theme;
        let year = chrono::Local::now().year();

        self.span(0, "─".repeat(self.text_width as usize), Style::fg(theme.chip_bg));
        self.span(
            0,
            header.initials() + ".",
            Style::fg(theme.primary).with_attrs(Attr::BOLD),
        );
        self.para(
            0,
            &format!("© {} {}. {}.", year, header.name, header.title),
            Style::fg(theme.text_muted),
        );
        let link_style = |url: &str| {
            Style::fg(theme.link)
                .with_attrs(Attr::UNDERLINE)
                .with_link(url.to_string())
        };
        self.line(
            0,
            vec![
                Span::new("LinkedIn", link_style(&header.linkedin)),
                Span::new(" • ", Style::fg(theme.text_muted)),
                Span::new("Scholar", link_style(&header.scholar)),
            ],
        );
        self.blank();
    }

    fn finish(self) -> Document {
        Document {
            lines: self.lines,
            anchors: self.anchors,
        }
    }
}

/// Project the profile into a document at the given terminal width.
pub fn build_document(profile: &Profile, theme: &Theme, width: u16) -> Document {
    let mut builder = DocumentBuilder::new(theme, width);

    builder.hero(&profile.header);
    builder.about(&profile.about, &profile.interests);
    builder.experience(&profile.experience);
    builder.education(&profile.education);
    builder.publications(&profile.publications);
    builder.portfolio(&profile.projects, &profile.skills);
    builder.footer(&profile.header);

    builder.finish()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::DOI_RESOLVER;

    fn profile() -> Profile {
        Profile::embedded().unwrap()
    }

    fn document() -> Document {
        build_document(&profile(), &Theme::default(), 100)
    }

    fn all_text(doc: &Document) -> String {
        doc.lines
            .iter()
            .flat_map(|line| line.spans.iter())
            .map(|span| span.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn all_links(doc: &Document) -> Vec<String> {
        doc.lines
            .iter()
            .flat_map(|line| line.spans.iter())
            .filter_map(|span| span.style.link.clone())
            .collect()
    }

    #[test]
    fn test_every_section_is_anchored() {
        let doc = document();
        for id in SectionId::ALL {
            let row = doc.anchors.get(&id).copied();
            assert!(row.is_some(), "missing anchor for {}", id.as_str());
            assert!(row.unwrap() < doc.rows());
        }
    }

    #[test]
    fn test_anchors_in_document_order() {
        let doc = document();
        let rows: Vec<u16> = SectionId::ALL
            .iter()
            .map(|id| doc.anchors[id])
            .collect();
        let mut sorted = rows.clone();
        sorted.sort_unstable();
        assert_eq!(rows, sorted);
    }

    #[test]
    fn test_deterministic_rendering() {
        let profile = profile();
        let theme = Theme::default();
        let a = build_document(&profile, &theme, 100);
        let b = build_document(&profile, &theme, 100);
        assert_eq!(a, b);
    }

    #[test]
    fn test_footer_year_is_render_time() {
        let doc = document();
        let year = chrono::Local::now().year();
        assert!(all_text(&doc).contains(&format!("© {year}")));
    }

    #[test]
    fn test_publication_link_target_exact() {
        let mut profile = profile();
        profile.publications = vec![PublicationEntry {
            title: "T".to_string(),
            publisher: "P".to_string(),
            doi: "10.1/xyz".to_string(),
        }];
        let doc = build_document(&profile, &Theme::default(), 100);

        let expected = format!("{}10.1/xyz", DOI_RESOLVER);
        let pub_links: Vec<_> = all_links(&doc)
            .into_iter()
            .filter(|url| url.starts_with(DOI_RESOLVER))
            .collect();
        assert!(!pub_links.is_empty());
        assert!(pub_links.iter().all(|url| url == &expected));
    }

    #[test]
    fn test_education_note_presence() {
        let mut profile = profile();
        profile.education = vec![
            EducationEntry {
                degree: "D1".to_string(),
                school: "S1".to_string(),
                period: "2010".to_string(),
                grade: "A".to_string(),
                note: Some("X".to_string()),
            },
            EducationEntry {
                degree: "D2".to_string(),
                school: "S2".to_string(),
                period: "2012".to_string(),
                grade: "B".to_string(),
                note: None,
            },
        ];
        let doc = build_document(&profile, &Theme::default(), 100);
        let text = all_text(&doc);

        assert_eq!(text.matches("\nX").count(), 1);

        // The noteless card contributes exactly its three rows
        let with_note = doc
            .lines
            .iter()
            .position(|l| l.spans.first().is_some_and(|s| s.text == "D1"))
            .unwrap();
        let without_note = doc
            .lines
            .iter()
            .position(|l| l.spans.first().is_some_and(|s| s.text == "D2"))
            .unwrap();
        // D1: degree, school, period/grade, note, blank = 5 rows to D2
        assert_eq!(without_note - with_note, 5);
    }

    #[test]
    fn test_mailto_links_present() {
        let doc = document();
        let profile = profile();
        let links = all_links(&doc);
        assert!(links.contains(&profile.header.mailto_work()));
        assert!(links.contains(&profile.header.mailto_research()));
    }

    #[test]
    fn test_experience_order_preserved() {
        let profile = profile();
        let doc = build_document(&profile, &Theme::default(), 100);
        let text = all_text(&doc);

        let mut last = 0;
        for entry in &profile.experience {
            let pos = text.find(&entry.role).expect("role missing");
            assert!(pos > last, "experience rendered out of order");
            last = pos;
        }
    }

    #[test]
    fn test_skills_and_projects_all_rendered() {
        let profile = profile();
        let doc = build_document(&profile, &Theme::default(), 100);
        let text = all_text(&doc);
        for skill in &profile.skills {
            assert!(text.contains(skill.as_str()), "missing skill {skill}");
        }
        for project in &profile.projects {
            assert!(text.contains(project.as_str()), "missing project {project}");
        }
    }

    #[test]
    fn test_lines_fit_narrow_terminal() {
        let doc = build_document(&profile(), &Theme::default(), 40);
        for (i, line) in doc.lines.iter().enumerate() {
            assert!(line.width() <= 40, "line {i} overflows: {:?}", line);
        }
    }
}
