//! Copy shown on the public site until an administrator saves settings.

use super::schema::SiteSettingsUpdate;

pub fn default_settings() -> SiteSettingsUpdate {
    SiteSettingsUpdate {
        logo_url: String::new(),

        hero_title_tr: "Av. Deniz Hançer".into(),
        hero_title_en: "Atty. Deniz Hançer".into(),
        hero_title_de: "RA Deniz Hançer".into(),
        hero_title_ru: "Адв. Дениз Ханчер".into(),

        hero_subtitle_tr: "Güvenilir Hukuki Danışmanlık".into(),
        hero_subtitle_en: "Reliable Legal Consulting".into(),
        hero_subtitle_de: "Zuverlässige Rechtsberatung".into(),
        hero_subtitle_ru: "Надежная юридическая консультация".into(),

        hero_description_tr: "Yıllarca deneyim ile müvekkillerimize en kaliteli hukuki hizmetleri sunuyoruz. \
            Uzman ekibimiz ile her türlü hukuki meselenizde yanınızdayız."
            .into(),
        hero_description_en: "We provide the highest quality legal services to our clients with years of experience. \
            We are here for all your legal matters with our expert team."
            .into(),
        hero_description_de: "Wir bieten unseren Mandanten mit jahrelanger Erfahrung hochwertige Rechtsdienstleistungen. \
            Wir stehen Ihnen mit unserem Expertenteam bei allen rechtlichen Angelegenheiten zur Seite."
            .into(),
        hero_description_ru: "Мы предоставляем нашим клиентам высококачественные юридические услуги с многолетним опытом. \
            Мы готовы помочь вам по всем правовым вопросам с нашей командой экспертов."
            .into(),

        about_company_tr: "Hançer Hukuk Bürosu; ticaret, şirketler, iş ve aile hukuku başta olmak üzere \
            geniş bir alanda bireysel ve kurumsal müvekkillerine danışmanlık ve dava takibi hizmeti verir."
            .into(),
        about_company_en: "Hançer Law Office advises and represents individual and corporate clients across \
            a broad range of matters, with a focus on commercial, corporate, labor and family law."
            .into(),
        about_company_de: "Die Kanzlei Hançer berät und vertritt Privat- und Firmenmandanten in einem breiten \
            Spektrum von Rechtsfragen, mit Schwerpunkt auf Handels-, Gesellschafts-, Arbeits- und Familienrecht."
            .into(),
        about_company_ru: "Юридическая фирма Ханчер консультирует и представляет частных и корпоративных \
            клиентов по широкому кругу вопросов, уделяя особое внимание коммерческому, корпоративному, \
            трудовому и семейному праву."
            .into(),

        about_founder_tr: "Av. Deniz Hançer olarak, hukuk alanında yıllarca edindiğim deneyim ile müvekkillerimize \
            en kaliteli hizmetleri sunmaya devam ediyorum. Müvekkil memnuniyetini ön planda tutarak, \
            her davaya özel çözümler üretiyorum."
            .into(),
        about_founder_en: "As Atty. Deniz Hançer, I continue to provide the highest quality services to my clients \
            with the experience I have gained in the field of law for years. By prioritizing client \
            satisfaction, I produce special solutions for each case."
            .into(),
        about_founder_de: "Als RA Deniz Hançer biete ich meinen Mandanten weiterhin hochwertige Dienstleistungen mit \
            der Erfahrung, die ich im Rechtsbereich seit Jahren gesammelt habe. Mit Fokus auf \
            Mandantenzufriedenheit entwickle ich spezielle Lösungen für jeden Fall."
            .into(),
        about_founder_ru: "Как адвокат Дениз Ханчер, я продолжаю предоставлять своим клиентам высококачественные \
            услуги с опытом, накопленным в области права в течение многих лет. Уделяя приоритетное \
            внимание удовлетворенности клиентов, я разрабатываю специальные решения для каждого дела."
            .into(),
    }
}
