use crate::model::palette::DEFAULT_THEME;

pub const DEFAULT_TITLE: &str = "Sticky Tasks";
pub const DEFAULT_SOUND: bool = true;
pub const DEFAULT_DENSITY: u8 = 1;
pub const DENSITY_LEVELS: u8 = 3;

/// App-wide settings. Passed explicitly to load/save — never read from
/// ambient globals.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Board display title
    pub title: String,
    /// Play a sound on add/complete (the CLI only stores the preference)
    pub sound_enabled: bool,
    /// Grid density, 0..=2
    pub view_density: u8,
    /// Background theme key
    pub theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            title: DEFAULT_TITLE.to_string(),
            sound_enabled: DEFAULT_SOUND,
            view_density: DEFAULT_DENSITY,
            theme: DEFAULT_THEME.to_string(),
        }
    }
}

impl Settings {
    /// Cycle to the next density level, returning the new value.
    pub fn cycle_density(&mut self) -> u8 {
        self.view_density = (self.view_density + 1) % DENSITY_LEVELS;
        self.view_density
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.title, "Sticky Tasks");
        assert!(s.sound_enabled);
        assert_eq!(s.view_density, 1);
        assert_eq!(s.theme, "default");
    }

    #[test]
    fn density_cycles_through_three_levels() {
        let mut s = Settings::default();
        assert_eq!(s.cycle_density(), 2);
        assert_eq!(s.cycle_density(), 0);
        assert_eq!(s.cycle_density(), 1);
    }
}
