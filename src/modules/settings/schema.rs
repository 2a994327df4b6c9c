use serde::Deserialize;
use validator::Validate;

/// Full replacement of the settings document. Every field must be present;
/// empty strings are allowed so a section can be blanked out.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SiteSettingsUpdate {
    #[validate(length(max = 2048, message = "Logo URL is too long"))]
    pub logo_url: String,
    #[validate(length(max = 300))]
    pub hero_title_tr: String,
    #[validate(length(max = 300))]
    pub hero_title_en: String,
    #[validate(length(max = 300))]
    pub hero_title_de: String,
    #[validate(length(max = 300))]
    pub hero_title_ru: String,
    #[validate(length(max = 500))]
    pub hero_subtitle_tr: String,
    #[validate(length(max = 500))]
    pub hero_subtitle_en: String,
    #[validate(length(max = 500))]
    pub hero_subtitle_de: String,
    #[validate(length(max = 500))]
    pub hero_subtitle_ru: String,
    pub hero_description_tr: String,
    pub hero_description_en: String,
    pub hero_description_de: String,
    pub hero_description_ru: String,
    pub about_company_tr: String,
    pub about_company_en: String,
    pub about_company_de: String,
    pub about_company_ru: String,
    pub about_founder_tr: String,
    pub about_founder_en: String,
    pub about_founder_de: String,
    pub about_founder_ru: String,
}
