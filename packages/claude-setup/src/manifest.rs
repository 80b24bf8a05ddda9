//! The fixed set of files written into every new project.

use std::path::Path;

use serde_json::json;

use crate::template;

/// How the content of a manifest entry is produced.
#[derive(Debug, Clone, Copy)]
pub enum Content {
    /// Written verbatim.
    Static(&'static str),

    /// The project name is interpolated with [`template::interpolate`].
    Template(&'static str),

    /// Built in code from the project name.
    Generated(fn(&str) -> String),
}

/// A single file in the manifest.
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    /// Path of the file, relative to the project root, `/`-separated.
    pub path: &'static str,

    /// Content of the file.
    pub content: Content,
}

impl Entry {
    /// Render the content of this entry for the given project.
    pub fn render(&self, project_name: &str) -> String {
        match self.content {
            Content::Static(content) => content.to_string(),
            Content::Template(content) => template::interpolate(content, project_name),
            Content::Generated(generate) => generate(project_name),
        }
    }
}

/// Every file written into a new project, in write order.
pub static MANIFEST: &[Entry] = &[
    Entry {
        path: ".claude/settings.json",
        content: Content::Generated(settings),
    },
    Entry {
        path: ".claude/agents/mvp-planner.md",
        content: Content::Template(include_str!("../templates/agents/mvp-planner.md")),
    },
    Entry {
        path: ".claude/agents/architect.md",
        content: Content::Template(include_str!("../templates/agents/architect.md")),
    },
    Entry {
        path: ".claude/agents/code-reviewer.md",
        content: Content::Template(include_str!("../templates/agents/code-reviewer.md")),
    },
    Entry {
        path: ".claude/agents/test-runner.md",
        content: Content::Template(include_str!("../templates/agents/test-runner.md")),
    },
    Entry {
        path: ".claude/agents/debugger.md",
        content: Content::Template(include_str!("../templates/agents/debugger.md")),
    },
    Entry {
        path: "docs/01-scope.md",
        content: Content::Template(include_str!("../templates/docs/01-scope.md")),
    },
    Entry {
        path: "docs/02-decisions.md",
        content: Content::Template(include_str!("../templates/docs/02-decisions.md")),
    },
    Entry {
        path: "docs/03-tasks.md",
        content: Content::Template(include_str!("../templates/docs/03-tasks.md")),
    },
    Entry {
        path: "docs/architecture-design.md",
        content: Content::Template(include_str!("../templates/docs/architecture-design.md")),
    },
    Entry {
        path: "CLAUDE.md",
        content: Content::Template(include_str!("../templates/CLAUDE.md")),
    },
    Entry {
        path: "PLAYBOOK.md",
        content: Content::Template(include_str!("../templates/PLAYBOOK.md")),
    },
    Entry {
        path: ".gitignore",
        content: Content::Static(include_str!("../templates/gitignore")),
    },
    Entry {
        path: "README.md",
        content: Content::Template(include_str!("../templates/README.md")),
    },
];

/// Directories that must exist before the manifest can be written, relative
/// to the project root, parents before children.
pub fn directories() -> Vec<&'static Path> {
    let mut dirs = Vec::new();
    for entry in MANIFEST {
        let ancestors = Path::new(entry.path)
            .ancestors()
            .skip(1)
            .filter(|dir| !dir.as_os_str().is_empty())
            .collect::<Vec<_>>();
        for dir in ancestors.into_iter().rev() {
            if !dirs.contains(&dir) {
                dirs.push(dir);
            }
        }
    }
    dirs
}

/// Claude Code permissions and project metadata for `.claude/settings.json`.
fn settings(project_name: &str) -> String {
    let settings = json!({
        "permissions": {
            "deny": [
                "Read(./.env)",
                "Read(./.env.*)",
                "Read(./secrets/**)",
                "Read(./config/credentials.json)",
                "Read(./private/**)",
                "Write(./.env)",
                "Write(./.env.*)",
                "Write(./secrets/**)"
            ],
            "allow": [
                "Read(./docs/**)",
                "Read(./src/**)",
                "Read(./tests/**)",
                "Write(./src/**)",
                "Write(./tests/**)",
                "Write(./docs/**)"
            ]
        },
        "context_limits": {
            "max_tokens": 150000,
            "compact_at_percent": 70,
            "warning_at_percent": 85
        },
        "project_settings": {
            "name": project_name,
            "version": "1.0.0"
        }
    });

    // `{:#}` is the pretty-printed form of a `Value`.
    format!("{settings:#}\n")
}
