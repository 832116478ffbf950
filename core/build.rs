use std::collections::HashSet;
use std::env;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Deserialize)]
struct ContentFile {
    name: String,
    headline: String,
    #[serde(default)]
    welcome: String,
    #[serde(default)]
    focus: String,
    #[serde(default)]
    tagline: String,
    cv_url: Option<String>,
    copyright_year: u16,
    typewriter: TypewriterSection,
    #[serde(default)]
    skills: Vec<SkillEntry>,
    about: AboutSection,
    #[serde(default)]
    tech_stack: Vec<TechEntry>,
    #[serde(default)]
    projects: Vec<ProjectEntry>,
    #[serde(default)]
    experience: Vec<ExperienceEntry>,
    #[serde(default)]
    honors: Vec<HonorEntry>,
    #[serde(default)]
    social: Vec<SocialEntry>,
}

#[derive(Deserialize)]
struct TypewriterSection {
    typing_ms: Option<u32>,
    deleting_ms: Option<u32>,
    pause_ms: Option<u32>,
    phrases: Vec<String>,
}

#[derive(Deserialize)]
struct SkillEntry {
    name: String,
    level: u32,
    #[serde(default)]
    skills: Vec<String>,
}

#[derive(Deserialize)]
struct StatEntry {
    label: String,
    value: String,
}

#[derive(Deserialize)]
struct AboutSection {
    headline: String,
    subtitle: String,
    profile_image: Option<String>,
    paragraphs: Vec<String>,
    #[serde(default)]
    highlights: Vec<StatEntry>,
    quote: Option<String>,
}

#[derive(Deserialize, Clone, Copy)]
#[serde(rename_all = "lowercase")]
enum TechCategory {
    Core,
    Ml,
    Data,
    Deployment,
}

impl TechCategory {
    fn variant(self) -> &'static str {
        match self {
            TechCategory::Core => "Core",
            TechCategory::Ml => "Ml",
            TechCategory::Data => "Data",
            TechCategory::Deployment => "Deployment",
        }
    }
}

#[derive(Deserialize)]
struct TechEntry {
    name: String,
    category: TechCategory,
}

#[derive(Deserialize)]
struct ProjectEntry {
    id: String,
    title: String,
    description: String,
    full_description: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    image: String,
    architecture_image: Option<String>,
    demo_video: Option<String>,
    #[serde(default)]
    tech_stack: Vec<String>,
    #[serde(default)]
    metrics: Vec<StatEntry>,
    problem: String,
    solution: String,
    github_url: String,
    demo_url: Option<String>,
    report_url: Option<String>,
    #[serde(default)]
    spotlight: bool,
}

#[derive(Deserialize)]
struct ExperienceEntry {
    id: String,
    period: String,
    company: String,
    role: String,
    description: String,
    #[serde(default)]
    active: bool,
    #[serde(default)]
    skills: Vec<String>,
}

#[derive(Deserialize)]
struct HonorEntry {
    id: String,
    title: String,
    issuer: String,
    date: String,
    image: Option<String>,
    description: Option<String>,
}

#[derive(Deserialize)]
struct SocialEntry {
    name: String,
    url: String,
    icon: String,
}

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("missing CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir.parent().unwrap_or(&manifest_dir);
    let env_path = workspace_root.join(".env");
    let env_local_path = workspace_root.join(".env.local");

    let _ = dotenvy::from_filename(&env_local_path);
    let _ = dotenvy::from_filename(&env_path);

    println!("cargo:rerun-if-env-changed=PORTFOLIO_CONTENT_PATH");
    println!("cargo:rerun-if-changed={}", env_path.display());
    println!("cargo:rerun-if-changed={}", env_local_path.display());

    let content_path = resolve_content_path(workspace_root);
    println!("cargo:rerun-if-changed={}", content_path.display());

    let contents = fs::read_to_string(&content_path).unwrap_or_else(|err| {
        panic!(
            "failed to read portfolio content at {}: {err}",
            content_path.display()
        )
    });

    let content: ContentFile = toml::from_str(&contents).unwrap_or_else(|err| {
        panic!(
            "failed to parse portfolio content at {}: {err}",
            content_path.display()
        )
    });

    validate_content(&content, &content_path);

    let mut output = String::new();
    write_hero(&mut output, &content);
    write_skills(&mut output, &content.skills);
    write_about(&mut output, &content.about);
    write_tech_stack(&mut output, &content.tech_stack);
    write_projects(&mut output, &content.projects);
    write_experience(&mut output, &content.experience);
    write_honors(&mut output, &content.honors);
    write_social(&mut output, &content.social);

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("missing OUT_DIR"));
    let out_path = out_dir.join("portfolio_content.rs");
    fs::write(&out_path, output).unwrap_or_else(|err| {
        panic!("failed to write {}: {err}", out_path.display())
    });
}

const DEFAULT_TYPING_MS: u32 = 50;
const DEFAULT_DELETING_MS: u32 = 30;
const DEFAULT_PAUSE_MS: u32 = 2000;

fn resolve_content_path(workspace_root: &Path) -> PathBuf {
    let env_value = env::var("PORTFOLIO_CONTENT_PATH").ok();
    let raw_path = match env_value {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => workspace_root.join("content/portfolio.toml"),
    };
    if raw_path.is_relative() {
        workspace_root.join(raw_path)
    } else {
        raw_path
    }
}

fn rust_string(value: &str) -> String {
    format!("{:?}", value)
}

fn rust_option(value: Option<&String>) -> String {
    match value.map(|value| value.trim()).filter(|value| !value.is_empty()) {
        Some(value) => format!("Some({})", rust_string(value)),
        None => "None".to_string(),
    }
}

fn rust_str_slice(values: &[String]) -> String {
    let items = values
        .iter()
        .map(|value| rust_string(value))
        .collect::<Vec<_>>()
        .join(", ");
    format!("&[{items}]")
}

fn rust_stat_slice(values: &[StatEntry]) -> String {
    let items = values
        .iter()
        .map(|stat| {
            format!(
                "Stat {{ label: {}, value: {} }}",
                rust_string(&stat.label),
                rust_string(&stat.value)
            )
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("&[{items}]")
}

fn write_hero(output: &mut String, content: &ContentFile) {
    let typewriter = &content.typewriter;
    writeln!(output, "pub const OWNER_NAME: &str = {};", rust_string(&content.name)).unwrap();
    writeln!(output, "pub const HEADLINE: &str = {};", rust_string(&content.headline)).unwrap();
    writeln!(output, "pub const WELCOME: &str = {};", rust_string(&content.welcome)).unwrap();
    writeln!(output, "pub const FOCUS: &str = {};", rust_string(&content.focus)).unwrap();
    writeln!(output, "pub const TAGLINE: &str = {};", rust_string(&content.tagline)).unwrap();
    writeln!(output, "pub const CV_URL: Option<&str> = {};", rust_option(content.cv_url.as_ref())).unwrap();
    writeln!(output, "pub const COPYRIGHT_YEAR: u16 = {};", content.copyright_year).unwrap();
    writeln!(output).unwrap();
    writeln!(output, "pub const HERO_TYPEWRITER: TypewriterConfig = TypewriterConfig {{").unwrap();
    writeln!(
        output,
        "    typing_ms: {},",
        typewriter.typing_ms.unwrap_or(DEFAULT_TYPING_MS)
    )
    .unwrap();
    writeln!(
        output,
        "    deleting_ms: {},",
        typewriter.deleting_ms.unwrap_or(DEFAULT_DELETING_MS)
    )
    .unwrap();
    writeln!(
        output,
        "    pause_ms: {},",
        typewriter.pause_ms.unwrap_or(DEFAULT_PAUSE_MS)
    )
    .unwrap();
    writeln!(output, "}};").unwrap();
    writeln!(output, "pub const HERO_PHRASES: &[&str] = {};", rust_str_slice(&typewriter.phrases)).unwrap();
    writeln!(output).unwrap();
}

fn write_skills(output: &mut String, skills: &[SkillEntry]) {
    writeln!(output, "pub const SKILL_CATEGORIES: &[SkillCategory] = &[").unwrap();
    for entry in skills {
        writeln!(output, "    SkillCategory {{").unwrap();
        writeln!(output, "        name: {},", rust_string(&entry.name)).unwrap();
        writeln!(output, "        level: {},", entry.level).unwrap();
        writeln!(output, "        skills: {},", rust_str_slice(&entry.skills)).unwrap();
        writeln!(output, "    }},").unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
}

fn write_about(output: &mut String, about: &AboutSection) {
    writeln!(output, "pub const ABOUT: AboutContent = AboutContent {{").unwrap();
    writeln!(output, "    headline: {},", rust_string(&about.headline)).unwrap();
    writeln!(output, "    subtitle: {},", rust_string(&about.subtitle)).unwrap();
    writeln!(output, "    profile_image: {},", rust_option(about.profile_image.as_ref())).unwrap();
    writeln!(output, "    paragraphs: {},", rust_str_slice(&about.paragraphs)).unwrap();
    writeln!(output, "    highlights: {},", rust_stat_slice(&about.highlights)).unwrap();
    writeln!(output, "    quote: {},", rust_option(about.quote.as_ref())).unwrap();
    writeln!(output, "}};").unwrap();
    writeln!(output).unwrap();
}

fn write_tech_stack(output: &mut String, items: &[TechEntry]) {
    writeln!(output, "pub const TECH_STACK: &[TechItem] = &[").unwrap();
    for item in items {
        writeln!(
            output,
            "    TechItem {{ name: {}, category: TechCategory::{} }},",
            rust_string(&item.name),
            item.category.variant()
        )
        .unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
}

fn write_projects(output: &mut String, projects: &[ProjectEntry]) {
    writeln!(output, "pub const PROJECTS: &[Project] = &[").unwrap();
    for project in projects {
        writeln!(output, "    Project {{").unwrap();
        writeln!(output, "        id: {},", rust_string(&project.id)).unwrap();
        writeln!(output, "        title: {},", rust_string(&project.title)).unwrap();
        writeln!(output, "        description: {},", rust_string(&project.description)).unwrap();
        writeln!(
            output,
            "        full_description: {},",
            rust_option(project.full_description.as_ref())
        )
        .unwrap();
        writeln!(output, "        tags: {},", rust_str_slice(&project.tags)).unwrap();
        writeln!(output, "        image: {},", rust_string(&project.image)).unwrap();
        writeln!(
            output,
            "        architecture_image: {},",
            rust_option(project.architecture_image.as_ref())
        )
        .unwrap();
        writeln!(output, "        demo_video: {},", rust_option(project.demo_video.as_ref())).unwrap();
        writeln!(output, "        tech_stack: {},", rust_str_slice(&project.tech_stack)).unwrap();
        writeln!(output, "        metrics: {},", rust_stat_slice(&project.metrics)).unwrap();
        writeln!(output, "        problem: {},", rust_string(&project.problem)).unwrap();
        writeln!(output, "        solution: {},", rust_string(&project.solution)).unwrap();
        writeln!(output, "        github_url: {},", rust_string(&project.github_url)).unwrap();
        writeln!(output, "        demo_url: {},", rust_option(project.demo_url.as_ref())).unwrap();
        writeln!(output, "        report_url: {},", rust_option(project.report_url.as_ref())).unwrap();
        writeln!(output, "        spotlight: {},", project.spotlight).unwrap();
        writeln!(output, "    }},").unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
}

fn write_experience(output: &mut String, entries: &[ExperienceEntry]) {
    writeln!(output, "pub const EXPERIENCE: &[Experience] = &[").unwrap();
    for entry in entries {
        writeln!(output, "    Experience {{").unwrap();
        writeln!(output, "        id: {},", rust_string(&entry.id)).unwrap();
        writeln!(output, "        period: {},", rust_string(&entry.period)).unwrap();
        writeln!(output, "        company: {},", rust_string(&entry.company)).unwrap();
        writeln!(output, "        role: {},", rust_string(&entry.role)).unwrap();
        writeln!(output, "        description: {},", rust_string(&entry.description)).unwrap();
        writeln!(output, "        active: {},", entry.active).unwrap();
        writeln!(output, "        skills: {},", rust_str_slice(&entry.skills)).unwrap();
        writeln!(output, "    }},").unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
}

fn write_honors(output: &mut String, honors: &[HonorEntry]) {
    writeln!(output, "pub const HONORS: &[Honor] = &[").unwrap();
    for honor in honors {
        writeln!(output, "    Honor {{").unwrap();
        writeln!(output, "        id: {},", rust_string(&honor.id)).unwrap();
        writeln!(output, "        title: {},", rust_string(&honor.title)).unwrap();
        writeln!(output, "        issuer: {},", rust_string(&honor.issuer)).unwrap();
        writeln!(output, "        date: {},", rust_string(&honor.date)).unwrap();
        writeln!(output, "        image: {},", rust_option(honor.image.as_ref())).unwrap();
        writeln!(output, "        description: {},", rust_option(honor.description.as_ref())).unwrap();
        writeln!(output, "    }},").unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
}

fn write_social(output: &mut String, links: &[SocialEntry]) {
    writeln!(output, "pub const SOCIAL_LINKS: &[SocialLink] = &[").unwrap();
    for link in links {
        writeln!(
            output,
            "    SocialLink {{ name: {}, url: {}, icon: {} }},",
            rust_string(&link.name),
            rust_string(&link.url),
            rust_string(&link.icon)
        )
        .unwrap();
    }
    writeln!(output, "];").unwrap();
}

fn require(value: &str, what: &str, content_path: &Path) {
    if value.trim().is_empty() {
        panic!("{what} cannot be empty in {}", content_path.display());
    }
}

fn require_unique_ids<'a>(
    table: &str,
    ids: impl Iterator<Item = &'a str>,
    content_path: &Path,
) {
    let mut seen = HashSet::new();
    for id in ids {
        require(id, &format!("{table} id"), content_path);
        if !seen.insert(id) {
            panic!("duplicate {table} id '{id}' in {}", content_path.display());
        }
    }
}

fn validate_content(content: &ContentFile, content_path: &Path) {
    require(&content.name, "portfolio name", content_path);
    if content.typewriter.phrases.is_empty() {
        panic!(
            "typewriter needs at least one phrase in {}",
            content_path.display()
        );
    }
    for (field, value) in [
        ("typing_ms", content.typewriter.typing_ms),
        ("deleting_ms", content.typewriter.deleting_ms),
        ("pause_ms", content.typewriter.pause_ms),
    ] {
        if value == Some(0) {
            panic!(
                "typewriter {field} must be positive in {}",
                content_path.display()
            );
        }
    }

    let mut names = HashSet::new();
    for entry in &content.skills {
        require(&entry.name, "skill category name", content_path);
        if entry.level > 100 {
            panic!(
                "skill category '{}' has level {} above 100 in {}",
                entry.name,
                entry.level,
                content_path.display()
            );
        }
        if !names.insert(entry.name.clone()) {
            panic!(
                "duplicate skill category '{}' in {}",
                entry.name,
                content_path.display()
            );
        }
    }

    let about = &content.about;
    require(&about.headline, "about headline", content_path);
    if about.paragraphs.iter().all(|paragraph| paragraph.trim().is_empty()) {
        panic!("about needs at least one paragraph in {}", content_path.display());
    }
    for stat in &about.highlights {
        require(&stat.label, "about highlight label", content_path);
    }

    let mut tech_names = HashSet::new();
    for item in &content.tech_stack {
        require(&item.name, "tech stack name", content_path);
        if !tech_names.insert(item.name.as_str()) {
            panic!(
                "duplicate tech stack entry '{}' in {}",
                item.name,
                content_path.display()
            );
        }
    }

    require_unique_ids(
        "project",
        content.projects.iter().map(|project| project.id.as_str()),
        content_path,
    );
    for project in &content.projects {
        require(&project.title, "project title", content_path);
        require(&project.description, "project description", content_path);
        require(&project.problem, "project problem", content_path);
        require(&project.solution, "project solution", content_path);
        for stat in &project.metrics {
            require(&stat.label, "project metric label", content_path);
        }
    }

    require_unique_ids(
        "experience",
        content.experience.iter().map(|entry| entry.id.as_str()),
        content_path,
    );
    for entry in &content.experience {
        require(&entry.role, "experience role", content_path);
        require(&entry.company, "experience company", content_path);
    }

    require_unique_ids(
        "honor",
        content.honors.iter().map(|honor| honor.id.as_str()),
        content_path,
    );
    for honor in &content.honors {
        require(&honor.title, "honor title", content_path);
    }

    for link in &content.social {
        require(&link.name, "social link name", content_path);
        require(&link.url, "social link url", content_path);
    }
}
