use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::path::Path;

/// File name searched for by [`Config::from_directory`].
pub const CONFIG_FILE: &str = "papyr.yaml";

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(default)]
pub struct SiteConfig {
    pub website: String,
    pub author: String,
    pub description: String,
    pub title: String,
    pub og_image: String,
    pub light_and_dark_mode: bool,
    pub posts_per_page: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            website: "https://papyr.pages.dev/".into(),
            author: "Nils Verbeek".into(),
            description: "A minimal blog theme with a card-based post listing.".into(),
            title: "Margin Notes".into(),
            og_image: "papyr-og.jpg".into(),
            light_and_dark_mode: true,
            posts_per_page: 3,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(default)]
pub struct LogoConfig {
    pub enable: bool,
    pub svg: bool,
    pub width: u32,
    pub height: u32,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            enable: false,
            svg: true,
            width: 216,
            height: 46,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy)]
pub enum Platform {
    Github,
    GitLab,
    Discord,
    Twitter,
    Mastodon,
    LinkedIn,
    Mail,
    YouTube,
    Twitch,
    Reddit,
    Telegram,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Github => "GitHub",
            Self::GitLab => "GitLab",
            Self::Discord => "Discord",
            Self::Twitter => "Twitter",
            Self::Mastodon => "Mastodon",
            Self::LinkedIn => "LinkedIn",
            Self::Mail => "Mail",
            Self::YouTube => "YouTube",
            Self::Twitch => "Twitch",
            Self::Reddit => "Reddit",
            Self::Telegram => "Telegram",
        })
    }
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct Social {
    pub name: Platform,
    pub href: String,
    #[serde(default)]
    pub link_title: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Social {
    /// The anchor title, either explicit or derived from the site title.
    pub fn link_title(&self, site: &SiteConfig) -> String {
        match &self.link_title {
            Some(title) => title.clone(),
            None => format!("{} on {}", site.title, self.name),
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub logo: LogoConfig,
    pub socials: Vec<Social>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            logo: LogoConfig::default(),
            socials: vec![
                Social {
                    name: Platform::Github,
                    href: "https://github.com/nverbeek".into(),
                    link_title: None,
                    active: true,
                },
                Social {
                    name: Platform::Mastodon,
                    href: "https://hachyderm.io/@nverbeek".into(),
                    link_title: None,
                    active: true,
                },
                Social {
                    name: Platform::Mail,
                    href: "mailto:nils@verbeek.dev".into(),
                    link_title: None,
                    active: false,
                },
            ],
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> anyhow::Result<Config> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) => return Err(anyhow!("Opening config file `{}`: {}", path.display(), err)),
        };

        Ok(serde_yaml::from_reader(file)?)
    }

    /// Look for [`CONFIG_FILE`] in `dir` and every parent above it.
    pub fn from_directory(dir: &Path) -> anyhow::Result<Config> {
        let path = dir.join(CONFIG_FILE);

        if path.exists() {
            Self::from_file(&path)
        } else {
            match dir.parent() {
                Some(parent) => Self::from_directory(parent),
                None => Err(anyhow!(
                    "Could not find `{}` in any parent directory",
                    CONFIG_FILE
                )),
            }
        }
    }

    /// Social entries with `active: false` are never rendered.
    pub fn active_socials(&self) -> impl Iterator<Item = &Social> {
        self.socials.iter().filter(|social| social.active)
    }
}
