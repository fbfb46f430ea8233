//! Curated known-term lists used to gate phrases, weight roles, and group suggestions.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Languages, frameworks, platforms, and practices worth surfacing even when
/// they appear once.
static TECH_TERMS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // languages
        "python", "javascript", "typescript", "java", "c++", "c#", "ruby", "php", "swift",
        "kotlin", "go", "golang", "rust", "scala", "perl", "r", "matlab", "sql", "nosql",
        "html", "css", "bash", "haskell", "elixir",
        // frameworks and libraries
        "react", "angular", "vue", "node", "node.js", "express", "django", "flask", "fastapi",
        "spring", "spring boot", "rails", "laravel", "asp.net", ".net", "jquery", "bootstrap",
        "tailwind", "sass", "react native", "flutter", "next.js", "tokio", "axum",
        "tensorflow", "pytorch", "keras", "scikit-learn", "pandas", "numpy", "matplotlib",
        // platforms and tooling
        "aws", "azure", "gcp", "docker", "kubernetes", "terraform", "ansible", "jenkins",
        "travis", "circleci", "git", "github", "gitlab", "bitbucket", "jira", "confluence",
        "linux", "unix", "windows", "macos", "ios", "android",
        // data
        "mongodb", "postgresql", "postgres", "mysql", "oracle", "sqlite", "redis",
        "elasticsearch", "kafka", "rabbitmq", "hadoop", "spark", "airflow", "snowflake",
        "tableau", "power bi", "excel",
        // protocols, formats, security
        "graphql", "rest", "rest api", "restful", "soap", "api", "apis", "grpc", "json", "xml",
        "yaml", "oauth", "jwt", "saml", "ldap", "ssl", "tls", "https", "http", "tcp/ip", "dns",
        // practices and domains
        "agile", "scrum", "kanban", "waterfall", "tdd", "bdd", "ci/cd", "devops", "sre",
        "ai", "ml", "machine learning", "deep learning", "nlp", "computer vision",
        "data science", "data engineering", "ui", "ux", "frontend", "backend", "full-stack",
        "microservices", "serverless", "distributed systems", "cloud", "etl", "crud", "orm",
        "mvc", "mvvm", "spa", "unit testing", "system design",
    ]
    .into_iter()
    .collect()
});

static SOFT_SKILLS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "communication", "teamwork", "leadership", "problem-solving", "problem solving",
        "critical thinking", "time management", "adaptability", "creativity", "collaboration",
        "mentoring", "mentorship", "ownership", "stakeholder management",
    ]
    .into_iter()
    .collect()
});

/// Verbs that show up in nearly every posting and carry little signal.
static GENERIC_VERBS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "build", "building", "built", "create", "creating", "develop", "developing",
        "developed", "ensure", "ensuring", "help", "helping", "include", "including",
        "join", "looking", "manage", "managing", "provide", "providing", "support",
        "supporting", "use", "working", "worked", "write", "writing", "seeking",
        "want", "like", "need", "needs",
    ]
    .into_iter()
    .collect()
});

/// Known-term lookups for one call: the static lists plus caller-supplied terms.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    extra: HashSet<String>,
}

impl Vocabulary {
    pub fn new<I, S>(extra_terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extra: extra_terms
                .into_iter()
                .map(|t| t.as_ref().trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    /// Caller-supplied terms count as technical, high-value skills.
    pub fn is_technical(&self, term: &str) -> bool {
        TECH_TERMS.contains(term) || self.extra.contains(term)
    }

    pub fn is_soft_skill(&self, term: &str) -> bool {
        SOFT_SKILLS.contains(term)
    }

    pub fn is_known(&self, term: &str) -> bool {
        self.is_technical(term) || self.is_soft_skill(term)
    }

    pub fn is_generic_verb(&self, term: &str) -> bool {
        GENERIC_VERBS.contains(term)
    }
}
