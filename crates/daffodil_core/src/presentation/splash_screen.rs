//! Splash screen model.

use serde::{Deserialize, Serialize};

/// Everything bound to the splash screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplashScreen {
    profiles: Profiles,
}

impl SplashScreen {
    /// Creates the screen together with an empty profiles component.
    pub fn new() -> Self {
        Self {
            profiles: Profiles::new(),
        }
    }

    /// Profiles component displayed on the screen.
    pub fn profiles(&self) -> &Profiles {
        &self.profiles
    }

    /// Mutable access to the displayed profiles.
    pub fn profiles_mut(&mut self) -> &mut Profiles {
        &mut self.profiles
    }
}

/// Component grouping the profiles offered on the splash screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profiles {
    #[serde(default)]
    pub items: Vec<Profile>,
}

impl Profiles {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, profile: Profile) {
        self.items.push(profile);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Profile> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a Profiles {
    type Item = &'a Profile;
    type IntoIter = std::slice::Iter<'a, Profile>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Individual profile entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Optional display name for the profile.
    pub name: Option<String>,
}

impl Profile {
    pub fn new() -> Self {
        Self { name: None }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}
