//! Locale selection for the rust-i18n catalogs under `locales/`.

pub const DEFAULT_LOCALE: &str = "zh-CN";

pub fn is_available(locale: &str) -> bool {
    rust_i18n::available_locales!()
        .iter()
        .any(|known| *known == locale)
}

pub fn resolve_locale(requested: Option<&str>) -> &str {
    match requested {
        Some(locale) if is_available(locale) => locale,
        Some(locale) => {
            log::warn!(
                "locale {:?} is not available, using {}",
                locale,
                DEFAULT_LOCALE
            );
            DEFAULT_LOCALE
        }
        None => DEFAULT_LOCALE,
    }
}

pub fn apply_locale(requested: Option<&str>) {
    let locale = resolve_locale(requested);
    rust_i18n::set_locale(locale);
    log::debug!("locale set to {}", locale);
}
