use super::*;

#[test]
fn light_theme_primary_palette() {
    assert_eq!(LIGHT_THEME.color("primary"), Some("#3f2b96"));
    assert_eq!(LIGHT_THEME.color("secondary"), Some("#8775d7"));
    assert_eq!(LIGHT_THEME.color("background"), Some("#eeeeee"));
    assert_eq!(LIGHT_THEME.color("missing"), None);
}

#[test]
fn css_variables_prefix_colors_and_keep_variables() {
    let css = LIGHT_THEME.css_variables();
    assert!(css.starts_with("--color-primary: #3f2b96;"));
    assert!(css.contains("--color-gradient-start: #336dff;"));
    assert!(css.ends_with("--border-color: #000000;"));
}

#[test]
fn data_attr_is_theme_name_when_light() {
    assert!(!LIGHT_THEME.dark);
    assert_eq!(LIGHT_THEME.data_attr(), "light");
}
