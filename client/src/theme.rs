//! Site colour theme.
//!
//! The palette is emitted as CSS custom properties on `<html>` by the SSR
//! shell; stylesheets refer to `var(--color-*)` only.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Named palette plus extra CSS variables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub dark: bool,
    pub colors: &'static [(&'static str, &'static str)],
    pub variables: &'static [(&'static str, &'static str)],
}

pub const LIGHT_THEME: Theme = Theme {
    name: "light",
    dark: false,
    colors: &[
        ("primary", "#3f2b96"),
        ("secondary", "#8775d7"),
        ("button-hover", "#77a8f8"),
        ("background", "#eeeeee"),
        ("gradient-start", "#336dff"),
        ("gradient-end", "#3f2b96"),
        ("accent", "#2196f3"),
        ("error", "#f44336"),
        ("warning", "#ff9800"),
        ("info", "#03a9f4"),
        ("success", "#8bc34A"),
        ("text", "#000000"),
    ],
    variables: &[("border-color", "#000000")],
};

impl Theme {
    pub fn color(&self, name: &str) -> Option<&'static str> {
        self.colors.iter().find(|(key, _)| *key == name).map(|(_, value)| *value)
    }

    /// Inline `style` value declaring every colour and variable.
    pub fn css_variables(&self) -> String {
        let colors = self.colors.iter().map(|(k, v)| format!("--color-{k}: {v};"));
        let vars = self.variables.iter().map(|(k, v)| format!("--{k}: {v};"));
        colors.chain(vars).collect::<Vec<_>>().join(" ")
    }

    /// Value for the `data-theme` attribute.
    pub fn data_attr(&self) -> &'static str {
        if self.dark { "dark" } else { self.name }
    }
}
