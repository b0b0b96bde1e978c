use super::*;

#[test]
fn updater_config_has_fixed_title_and_size() {
    let config = WindowConfig::updater();
    assert_eq!(config.title, "Codename Twilight updater");
    assert_eq!(
        config.size,
        WindowSize {
            width: 550,
            height: 400
        }
    );
    assert!(!config.resizable);
}

#[test]
fn default_matches_updater() {
    assert_eq!(WindowConfig::default(), WindowConfig::updater());
}

#[test]
fn declared_font_is_bold_italic_serif_36() {
    let font = WindowConfig::updater().font;
    assert_eq!(font.family, "serif");
    assert_ne!(font.style, FontStyle::default());
    assert!(font.style.bold && font.style.italic);
    assert_eq!(font.size, 36.0);
}
