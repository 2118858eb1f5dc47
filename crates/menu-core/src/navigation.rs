use crate::error::NavigationError;
use crate::surface::Level;

/// The current group / heading / subheading selection.
///
/// Picking a group forgets the heading and subheading; picking a heading
/// forgets the subheading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    group: Option<String>,
    heading: Option<String>,
    subheading: Option<String>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    pub fn heading(&self) -> Option<&str> {
        self.heading.as_deref()
    }

    pub fn subheading(&self) -> Option<&str> {
        self.subheading.as_deref()
    }

    /// The key selected at `level`, if any.
    pub fn at(&self, level: Level) -> Option<&str> {
        match level {
            Level::Group => self.group(),
            Level::Heading => self.heading(),
            Level::Subheading => self.subheading(),
        }
    }

    pub fn select_group(&mut self, key: impl Into<String>) {
        self.group = Some(key.into());
        self.heading = None;
        self.subheading = None;
    }

    pub fn select_heading(&mut self, key: impl Into<String>) -> Result<(), NavigationError> {
        let key = key.into();
        if self.group.is_none() {
            return Err(NavigationError::NoGroupSelected(key));
        }
        self.heading = Some(key);
        self.subheading = None;
        Ok(())
    }

    pub fn select_subheading(&mut self, key: impl Into<String>) -> Result<(), NavigationError> {
        let key = key.into();
        if self.heading.is_none() {
            return Err(NavigationError::NoHeadingSelected(key));
        }
        self.subheading = Some(key);
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
