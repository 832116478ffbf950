pub mod content;
pub mod field;
pub mod radar;
pub mod random;
pub mod theme;
pub mod typewriter;

pub use content::{
    AboutContent, Experience, Honor, Project, SkillCategory, SocialLink, Stat, TechCategory,
    TechItem, ABOUT, CV_URL, EXPERIENCE, FOCUS, HEADLINE, HERO_PHRASES, HERO_TYPEWRITER, HONORS,
    OWNER_NAME, PROJECTS, SKILL_CATEGORIES, SOCIAL_LINKS, TAGLINE, TECH_STACK, WELCOME,
};
pub use field::{FieldOpacity, FieldSurface, Link, Node, ParticleField, Rgb};
pub use radar::{RadarConfig, RadarPoint, RADAR};
pub use theme::{
    MemoryStore, PreferenceStore, Presentation, PresentationSink, SchemeHint, StoreError, Theme,
    ThemeController, ThemeParseError, ThemeSubscription, THEME_STORAGE_KEY,
};
pub use typewriter::{Typewriter, TypewriterConfig, TypewriterError, TypewriterMode};
