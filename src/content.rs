use serde::Deserialize;

use crate::error::ContentError;

const BUNDLED: &str = include_str!("../content/portfolio.json");

#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Portfolio {
    pub brand: Brand,
    pub owner: String,
    pub photo: String,
    pub tagline: Tagline,
    pub about: Vec<String>,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub contact: Contact,
    pub socials: Vec<SocialLink>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Brand {
    pub primary: String,
    pub accent: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Tagline {
    pub role: String,
    pub employer: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Contact {
    pub email: String,
    pub phone: Phone,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Phone {
    pub display: String,
    pub dial: String,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    Github,
    Linkedin,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub url: String,
}

impl SocialKind {
    pub fn label(self) -> &'static str {
        match self {
            SocialKind::Github => "GitHub",
            SocialKind::Linkedin => "LinkedIn",
        }
    }
}

impl Contact {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel(&self) -> String {
        format!("tel:{}", self.phone.dial)
    }
}

impl Portfolio {
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_json(BUNDLED)
    }
}
