//! Per-pane body content. Each pane id maps to a provider function in the
//! core's `ContentRegistry`; adding a pane means registering one more
//! provider here.

use bevy::{ecs::hierarchy::ChildSpawnerCommands, prelude::*, sprite::Anchor};

use crate::{
    data::resume::RESUME,
    systems::{
        colors::{
            ACCENT_BLUE, ACCENT_PURPLE, ACCENT_YELLOW, DANGER_RED, TERMINAL_GREEN, TEXT_DIM,
            TEXT_MUTED, TEXT_PRIMARY,
        },
        ui::window::{ContentRegistry, PaneId},
    },
};

pub fn register(app: &mut App) {
    let mut registry = app.world_mut().resource_mut::<ContentRegistry>();
    registry.register(PaneId::Profile, profile_content);
    registry.register(PaneId::Experience, experience_content);
    registry.register(PaneId::Skills, skills_content);
    registry.register(PaneId::Security, security_content);
    registry.register(PaneId::Contact, contact_content);
}

/// Column width in characters before a line wraps. Content is laid out
/// for the default pane size; panes do not reflow on resize.
const WRAP_COLUMNS: usize = 88;

/// Greedy word wrap; words longer than the width get their own line.
fn wrap(text: &str, columns: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > columns {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

struct ContentWriter<'w, 'a> {
    body: &'a mut ChildSpawnerCommands<'w>,
    cursor_y: f32,
}

impl<'w, 'a> ContentWriter<'w, 'a> {
    fn new(body: &'a mut ChildSpawnerCommands<'w>) -> Self {
        Self { body, cursor_y: 0.0 }
    }

    fn line(&mut self, text: impl Into<String>, size: f32, color: Color) {
        self.body.spawn((
            Text2d::new(text),
            TextFont {
                font_size: size,
                ..default()
            },
            TextColor(color),
            Anchor::TOP_LEFT,
            Transform::from_xyz(0.0, self.cursor_y, 0.0),
        ));
        self.cursor_y -= size + 7.0;
    }

    fn wrapped(&mut self, text: &str, size: f32, color: Color) {
        for line in wrap(text, WRAP_COLUMNS) {
            self.line(line, size, color);
        }
    }

    fn gap(&mut self, height: f32) {
        self.cursor_y -= height;
    }
}

fn profile_content(body: &mut ChildSpawnerCommands) {
    let resume = &*RESUME;
    let mut w = ContentWriter::new(body);

    w.line(format!("$ {}", resume.personal.name), 24.0, Color::WHITE);
    w.line(resume.personal.role.clone(), 15.0, TEXT_MUTED);
    w.line("UID: 0 (root)   GID: 0 (root)", 12.0, TEXT_DIM);
    w.line("Groups: wheel, docker, aws-admin, sec-ops", 12.0, TEXT_DIM);

    w.gap(12.0);
    w.line("Summary", 14.0, TERMINAL_GREEN);
    w.wrapped(&resume.personal.summary, 13.0, TEXT_PRIMARY);

    w.gap(12.0);
    w.line("Education", 14.0, TERMINAL_GREEN);
    for education in &resume.education {
        w.line(education.degree.clone(), 13.0, Color::WHITE);
        w.line(
            format!(
                "{} — {} (GPA: {})",
                education.school, education.year, education.gpa
            ),
            12.0,
            TEXT_DIM,
        );
    }
}

fn experience_content(body: &mut ChildSpawnerCommands) {
    let resume = &*RESUME;
    let mut w = ContentWriter::new(body);

    for job in &resume.experience {
        w.line(format!("$ {}", job.command), 11.0, TEXT_DIM);
        w.line(job.company.clone(), 16.0, TERMINAL_GREEN);
        w.line(format!("{} — {}", job.role, job.period), 12.0, TEXT_MUTED);
        for highlight in &job.highlights {
            w.wrapped(&format!("> {highlight}"), 12.0, TEXT_PRIMARY);
        }
        w.gap(14.0);
    }
}

fn skills_content(body: &mut ChildSpawnerCommands) {
    let resume = &*RESUME;
    let mut w = ContentWriter::new(body);

    for category in &resume.skills {
        w.line(category.category.to_uppercase(), 14.0, TERMINAL_GREEN);
        w.wrapped(
            &category
                .items
                .iter()
                .map(|item| format!("[{item}]"))
                .collect::<Vec<_>>()
                .join(" "),
            13.0,
            TEXT_PRIMARY,
        );
        w.gap(12.0);
    }
}

fn security_content(body: &mut ChildSpawnerCommands) {
    let resume = &*RESUME;
    let mut w = ContentWriter::new(body);

    w.line("Metasploit Console", 13.0, TEXT_DIM);
    w.line("Version: 6.0.45-dev", 12.0, TEXT_DIM);
    w.line("[!] 3 Exploits Loaded", 12.0, DANGER_RED);

    w.gap(10.0);
    w.line("msf6 > show achievements", 13.0, ACCENT_BLUE);
    for achievement in &resume.security.achievements {
        w.line(achievement.title.clone(), 13.0, ACCENT_YELLOW);
        w.wrapped(&achievement.description, 11.0, TEXT_MUTED);
    }

    w.gap(10.0);
    w.line("msf6 > run hall_of_fame.rb", 13.0, ACCENT_BLUE);
    for mention in &resume.security.hall_of_fame {
        w.line(format!("[+] Honorable Mention: {mention}"), 12.0, TERMINAL_GREEN);
    }
    w.line("Payload delivered successfully.", 11.0, TEXT_DIM);

    w.gap(10.0);
    w.line("msf6 > cat /etc/certs", 13.0, ACCENT_BLUE);
    for certification in &resume.security.certifications {
        w.line(
            format!("{} ({}) — VERIFIED", certification.name, certification.issuer),
            12.0,
            ACCENT_PURPLE,
        );
    }
}

fn contact_content(body: &mut ChildSpawnerCommands) {
    let resume = &*RESUME;
    let mut w = ContentWriter::new(body);

    w.line("Listening on [any] 1337 ...", 12.0, TEXT_DIM);
    w.gap(12.0);
    w.line("EMAIL PROTOCOL", 11.0, TERMINAL_GREEN);
    w.line(resume.personal.email.clone(), 20.0, Color::WHITE);
    w.gap(16.0);
    w.line(format!("LinkedIn: {}", resume.personal.linkedin), 12.0, TEXT_MUTED);
    w.line(format!("GitHub:   {}", resume.personal.github), 12.0, TEXT_MUTED);
    w.gap(12.0);
    w.line("_", 14.0, TERMINAL_GREEN);
}
