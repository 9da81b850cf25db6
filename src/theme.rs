//! Built-in color themes.

/// An opaque sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Canvas background fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Background {
    /// Single flat color.
    Solid(Rgb),
    /// Vertical gradient from the top color to the bottom color.
    VerticalGradient(Rgb, Rgb),
}

/// A named background/text color pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Canvas fill.
    pub background: Background,
    /// Text and divider color.
    pub text: Rgb,
}

const DEFAULT: Theme = Theme {
    background: Background::Solid(Rgb(255, 255, 255)),
    text: Rgb(0, 0, 0),
};

const LIGHT: Theme = Theme {
    background: Background::Solid(Rgb(253, 246, 227)),
    text: Rgb(101, 123, 131),
};

const DARK: Theme = Theme {
    background: Background::Solid(Rgb(40, 44, 52)),
    text: Rgb(171, 178, 191),
};

const LIGHT_GRADIENT: Theme = Theme {
    background: Background::VerticalGradient(Rgb(240, 240, 250), Rgb(210, 220, 235)),
    text: Rgb(80, 80, 100),
};

const DARK_GRADIENT: Theme = Theme {
    background: Background::VerticalGradient(Rgb(43, 48, 59), Rgb(20, 22, 28)),
    text: Rgb(200, 200, 210),
};

impl Theme {
    /// Look up a theme by name.
    ///
    /// Unknown names silently map to the `default` theme; theme selection
    /// is never an error.
    pub fn named(name: &str) -> Self {
        match name {
            "light" => LIGHT,
            "dark" => DARK,
            "light-gradient" => LIGHT_GRADIENT,
            "dark-gradient" => DARK_GRADIENT,
            _ => DEFAULT,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve() {
        assert_eq!(Theme::named("dark").background, Background::Solid(Rgb(40, 44, 52)));
        assert!(matches!(
            Theme::named("dark-gradient").background,
            Background::VerticalGradient(..)
        ));
    }

    #[test]
    fn unknown_name_falls_back_to_default() {
        assert_eq!(Theme::named("solarized-octarine"), Theme::named("default"));
        assert_eq!(Theme::named(""), DEFAULT);
    }
}
