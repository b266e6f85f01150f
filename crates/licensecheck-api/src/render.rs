//! # Page Rendering
//!
//! Turns a [`ViewState`] into the HTML document through the minijinja
//! template in `templates/page.html.jinja`. The template is registered
//! under an `.html` name, so every interpolated value is HTML-escaped.
//!
//! ## Layout
//!
//! ```text
//! header   brand · language toggle · login link
//! hero     title · subtitle
//! form     query input · search button
//! results  heading ("N resultados encontrados") · card grid
//! overlay  detail of the selected record (optional)
//! empty    no-results box (optional)
//! footer   brand · tagline
//! ```
//!
//! The view state is carried in links as query parameters: `lang`, `q`
//! (the text in the query box), `search` (present when that text was
//! searched) and `selected`.

use licensecheck_core::{format_date, LicenseId, LicenseRecord, Locale, Texts};
use licensecheck_state::ViewState;
use minijinja::{context, Environment};
use serde::Serialize;
use url::form_urlencoded;

const BRAND: &str = "LicenseCheck";
const PAGE_TEMPLATE: &str = include_str!("../templates/page.html.jinja");
const CSS_STYLES: &str = include_str!("../templates/style.css");

/// A link back into the page carrying view state in the query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub lang: Locale,
    /// Query box text, kept even when it was not searched.
    pub query: String,
    /// Whether `query` was searched.
    pub searched: bool,
    pub selected: Option<LicenseId>,
}

impl PageLink {
    /// The link that reproduces the given view.
    pub fn for_view(view: &ViewState) -> Self {
        Self {
            lang: view.language(),
            query: view.query().to_string(),
            searched: view.searched_current_query(),
            selected: view.selected().map(|r| r.id.clone()),
        }
    }

    /// Same view in the other language.
    pub fn toggled(&self) -> Self {
        Self {
            lang: self.lang.toggle(),
            ..self.clone()
        }
    }

    /// Same view with a record opened.
    pub fn selecting(&self, id: &LicenseId) -> Self {
        Self {
            selected: Some(id.clone()),
            ..self.clone()
        }
    }

    /// Same view with the overlay closed.
    pub fn dismissed(&self) -> Self {
        Self {
            selected: None,
            ..self.clone()
        }
    }

    /// Root-relative URL.
    pub fn href(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query.append_pair("lang", self.lang.as_str());
        if !self.query.is_empty() {
            query.append_pair("q", &self.query);
        }
        if self.searched {
            query.append_pair("search", "1");
        }
        if let Some(id) = &self.selected {
            query.append_pair("selected", id.as_str());
        }
        format!("/?{}", query.finish())
    }
}

#[derive(Serialize)]
struct Card<'a> {
    id: &'a str,
    href: String,
    name: &'a str,
    license_number: &'a str,
    profession: &'a str,
    jurisdiction: &'a str,
    verified: bool,
    status_label: &'a str,
    status_class: &'static str,
}

impl<'a> Card<'a> {
    fn new(record: &'a LicenseRecord, texts: &'a Texts, link: &PageLink) -> Self {
        Self {
            id: record.id.as_str(),
            href: link.selecting(&record.id).href(),
            name: &record.name,
            license_number: &record.license_number,
            profession: &record.profession,
            jurisdiction: &record.jurisdiction,
            verified: record.verified,
            status_label: record.status.label(texts),
            status_class: record.status.color_class(),
        }
    }
}

#[derive(Serialize)]
struct Detail<'a> {
    close_href: String,
    photo: Option<&'a str>,
    name: &'a str,
    license_number: &'a str,
    verified: bool,
    profession: &'a str,
    status_label: &'a str,
    status_class: &'static str,
    issue_date: String,
    expiry_date: String,
    jurisdiction: &'a str,
    email: &'a str,
    phone: &'a str,
}

impl<'a> Detail<'a> {
    fn new(record: &'a LicenseRecord, lang: Locale, link: &PageLink) -> Self {
        Self {
            close_href: link.dismissed().href(),
            photo: record.photo.as_deref(),
            name: &record.name,
            license_number: &record.license_number,
            verified: record.verified,
            profession: &record.profession,
            status_label: record.status.label(lang.texts()),
            status_class: record.status.color_class(),
            issue_date: format_date(record.issue_date, lang),
            expiry_date: format_date(record.expiry_date, lang),
            jurisdiction: &record.jurisdiction,
            email: &record.email,
            phone: &record.phone,
        }
    }
}

/// Render the full HTML document for a view.
pub fn render_page(view: &ViewState, admin_url: &str) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("page.html", PAGE_TEMPLATE)?;
    let template = env.get_template("page.html")?;

    let texts = view.texts();
    let link = PageLink::for_view(view);
    let results_heading = view
        .shows_results()
        .then(|| texts.results_heading(view.results().len()));
    let cards: Vec<Card<'_>> = view
        .results()
        .iter()
        .map(|record| Card::new(record, texts, &link))
        .collect();
    let detail = view
        .selected()
        .map(|record| Detail::new(record, view.language(), &link));

    template.render(context! {
        brand => BRAND,
        css_styles => CSS_STYLES,
        lang => view.language().as_str(),
        texts,
        admin_url,
        toggle_href => link.toggled().href(),
        query => view.query(),
        searching => view.is_searching(),
        button_label => view.search_button_label(),
        results_heading,
        cards,
        detail,
        no_results => view.shows_no_results(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use licensecheck_registry::LicenseRegistry;

    fn searched(lang: Locale, query: &str) -> ViewState {
        let mut view = ViewState::new(lang);
        view.set_query(query);
        view.search(&LicenseRegistry::sample());
        view
    }

    fn render(view: &ViewState) -> String {
        render_page(view, "/admin").unwrap()
    }

    #[test]
    fn links_encode_query_and_selection() {
        let link = PageLink {
            lang: Locale::Es,
            query: "maría g".into(),
            searched: true,
            selected: Some(LicenseId::new("1")),
        };
        assert_eq!(link.href(), "/?lang=es&q=mar%C3%ADa+g&search=1&selected=1");
        assert_eq!(link.dismissed().href(), "/?lang=es&q=mar%C3%ADa+g&search=1");
        assert_eq!(
            link.toggled().href(),
            "/?lang=en&q=mar%C3%ADa+g&search=1&selected=1"
        );
    }

    #[test]
    fn toggle_keeps_unsearched_query() {
        let mut view = ViewState::default();
        view.set_query("maría");
        let link = PageLink::for_view(&view);
        assert!(!link.searched);
        assert_eq!(link.toggled().href(), "/?lang=en&q=mar%C3%ADa");

        let html = render(&view);
        assert!(html.contains("lang=en&amp;q=mar%C3%ADa\">ES</a>"));
    }

    #[test]
    fn initial_page_has_no_results_sections() {
        let html = render(&ViewState::default());
        assert!(html.contains("<html lang=\"es\">"));
        assert!(html.contains("Verificación de Licencias Profesionales"));
        assert!(html.contains("admin\">Iniciar Sesión</a>"));
        assert!(!html.contains("id=\"results\""));
        assert!(!html.contains("id=\"no-results\""));
        assert!(!html.contains("id=\"detail\""));
    }

    #[test]
    fn results_render_cards_with_status_badges() {
        let html = render(&searched(Locale::Es, "a"));
        assert!(html.contains("3 resultados encontrados"));
        assert_eq!(html.matches("class=\"card\"").count(), 3);
        assert!(html.contains("badge text-red-600 bg-red-100\">Vencida"));
        assert!(html.contains("badge text-green-600 bg-green-100\">Activa"));
    }

    #[test]
    fn english_page_uses_english_dictionary() {
        let html = render(&searched(Locale::En, "ENG"));
        assert!(html.contains("1 result found"));
        assert!(html.contains("Professional License Verification"));
        assert!(html.contains(">EN</a>"));
    }

    #[test]
    fn detail_overlay_shows_every_field() {
        let mut view = searched(Locale::En, "maría");
        view.select(&LicenseId::new("1")).unwrap();
        let html = render(&view);
        assert!(html.contains("id=\"detail\""));
        for expected in [
            "Dr. María González",
            "MD-12345",
            "Médico General",
            "3&#x2f;15&#x2f;2020",
            "3&#x2f;15&#x2f;2025",
            "Antioquia",
            "maria.gonzalez@email.com",
            "+57 300 123 4567",
            ">Verified<",
        ] {
            assert!(html.contains(expected), "missing {expected}");
        }
        assert!(html.contains("lang=en&amp;q=mar%C3%ADa&amp;search=1\" aria-label=\"Close\""));
    }

    #[test]
    fn query_text_is_escaped() {
        let mut view = ViewState::default();
        view.set_query("<script>");
        view.search(&LicenseRegistry::sample());
        let html = render(&view);
        assert!(!html.contains("<script>"));
        assert!(html.contains("value=\"&lt;script&gt;\""));
        assert!(html.contains("id=\"no-results\""));
    }

    #[test]
    fn searching_state_disables_button() {
        let mut view = ViewState::default();
        view.set_query("maría");
        let _pending = view.submit_search().unwrap();
        let html = render(&view);
        assert!(html.contains("type=\"submit\" disabled>...</button>"));
    }
}
