// 👤 Social Network Profiles - Factory Method
// Each network decides which sections its profile is made of

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FactoryError;

// ============================================================================
// SECTIONS
// ============================================================================

/// Section - Parts a profile is composed of
///
/// Sections carry no data; only the variant matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    #[serde(rename = "PersonalSection")]
    Personal,
    #[serde(rename = "AlbumSection")]
    Album,
    #[serde(rename = "PatentSection")]
    Patent,
    #[serde(rename = "PublicationSection")]
    Publication,
}

impl Section {
    pub fn name(&self) -> &'static str {
        match self {
            Section::Personal => "PersonalSection",
            Section::Album => "AlbumSection",
            Section::Patent => "PatentSection",
            Section::Publication => "PublicationSection",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Format one profile line, e.g. `LinkedIn: [PersonalSection, AlbumSection]`
pub fn section_line(network: &str, sections: &[Section]) -> String {
    let names: Vec<&str> = sections.iter().map(Section::name).collect();
    format!("{}: [{}]", network, names.join(", "))
}

// ============================================================================
// PROFILE (composite root)
// ============================================================================

/// Profile - Append-only, ordered list of sections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    sections: Vec<Section>,
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }
}

// ============================================================================
// SOCIAL NETWORK TRAIT
// ============================================================================

/// SocialNetwork - A network that builds its own profile
///
/// `layout` is the factory method: every network lists the sections it
/// wants, and `create_profile` appends them in that order. Calling
/// `create_profile` again appends the layout again.
///
/// Implementors only hand out `add_section`, so a profile can grow but
/// never be cleared or reordered.
///
/// ```compile_fail
/// use vehicle_factory::{Facebook, Profile, SocialNetwork};
///
/// let mut fb = Facebook::new();
/// fb.create_profile();
/// *fb.profile_mut() = Profile::new();
/// ```
pub trait SocialNetwork: fmt::Debug + Send + Sync {
    fn name(&self) -> &'static str;

    /// Sections this network's profile is made of, in order
    fn layout(&self) -> &'static [Section];

    fn profile(&self) -> &Profile;

    /// Append one section to the end of the profile
    fn add_section(&mut self, section: Section);

    fn create_profile(&mut self) {
        let layout = self.layout();
        for section in layout {
            self.add_section(*section);
        }
        tracing::debug!(network = self.name(), added = layout.len(), "created profile");
    }

    fn sections(&self) -> &[Section] {
        self.profile().sections()
    }

    fn report(&self) -> String {
        section_line(self.name(), self.sections())
    }
}

// ============================================================================
// CONCRETE NETWORKS
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct Facebook {
    profile: Profile,
}

impl Facebook {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SocialNetwork for Facebook {
    fn name(&self) -> &'static str {
        NetworkKind::Facebook.name()
    }

    fn layout(&self) -> &'static [Section] {
        &[Section::Personal, Section::Patent, Section::Publication]
    }

    fn profile(&self) -> &Profile {
        &self.profile
    }

    fn add_section(&mut self, section: Section) {
        self.profile.add_section(section);
    }
}

#[derive(Debug, Clone, Default)]
pub struct LinkedIn {
    profile: Profile,
}

impl LinkedIn {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SocialNetwork for LinkedIn {
    fn name(&self) -> &'static str {
        NetworkKind::LinkedIn.name()
    }

    fn layout(&self) -> &'static [Section] {
        &[Section::Personal, Section::Album]
    }

    fn profile(&self) -> &Profile {
        &self.profile
    }

    fn add_section(&mut self, section: Section) {
        self.profile.add_section(section);
    }
}

// ============================================================================
// NETWORK KIND
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NetworkKind {
    Facebook,
    LinkedIn,
}

impl NetworkKind {
    pub const ALL: [NetworkKind; 2] = [NetworkKind::Facebook, NetworkKind::LinkedIn];

    pub fn name(&self) -> &'static str {
        match self {
            NetworkKind::Facebook => "Facebook",
            NetworkKind::LinkedIn => "LinkedIn",
        }
    }

    /// Build an empty network of this kind; call `create_profile` to fill it
    pub fn create_network(&self) -> Box<dyn SocialNetwork> {
        match self {
            NetworkKind::Facebook => Box::new(Facebook::new()),
            NetworkKind::LinkedIn => Box::new(LinkedIn::new()),
        }
    }
}

impl FromStr for NetworkKind {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NetworkKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| FactoryError::unknown(s))
    }
}

// ============================================================================
// TESTS
// ============================================================================
